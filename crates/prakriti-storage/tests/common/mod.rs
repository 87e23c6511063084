#![allow(dead_code)]

use std::collections::BTreeMap;

use prakriti_core::models::answer::Answer;
use prakriti_core::models::assessment::Assessment;
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::prediction::{AnalysisSource, PredictionResult};
use prakriti_core::models::scores::{TraitPercent, TraitScores};
use prakriti_core::models::wellness::{RiskBand, WellnessLevel, WellnessScore};
use uuid::Uuid;

pub fn sample(user_id: &str, created_at: jiff::Timestamp) -> Assessment {
    Assessment {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        answers: vec![Answer::trait_answer("q1", "a", Dosha::Vata, 3.0)],
        trait_scores: TraitScores {
            vata: 3.0,
            pitta: 0.0,
            kapha: 0.0,
        },
        scores: TraitPercent {
            vata: 100,
            pitta: 0,
            kapha: 0,
        },
        dominant: Dosha::Vata,
        secondary: None,
        wellness: WellnessScore {
            score: 50,
            level: WellnessLevel::Yellow,
            risk: RiskBand::Medium,
            label: "Not assessed".to_string(),
        },
        prediction: PredictionResult {
            predicted: Dosha::Vata,
            confidence: 0.5,
            probabilities: BTreeMap::from([(Dosha::Vata, 1.0)]),
            fallback: true,
        },
        analysis_source: AnalysisSource::Fallback,
        confidence: 0.5,
        created_at,
    }
}

/// `base` shifted by whole seconds.
pub fn at(base: jiff::Timestamp, seconds: i64) -> jiff::Timestamp {
    base.checked_add(jiff::SignedDuration::from_secs(seconds))
        .unwrap()
}
