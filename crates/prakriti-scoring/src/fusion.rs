use std::collections::BTreeMap;
use std::fmt::Display;

use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::prediction::{AnalysisSource, PredictionResult};
use prakriti_core::models::scores::{TraitPercent, TraitProfile};
use serde::Serialize;
use tracing::{debug, info};

use crate::accumulate::{classify_with_dominant, proportions};

/// Confidence attached to a prediction synthesized from the rule-based scores.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Confidence already accepted for the rule-based result. A classifier
/// prediction is adopted only when its confidence is strictly greater.
pub const RULE_CONFIDENCE: f64 = 0.75;

/// The reconciled outcome of the rule-based and classifier paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusedResult {
    pub dominant: Dosha,
    pub secondary: Option<Dosha>,
    pub percent: TraitPercent,
    pub confidence: f64,
    pub source: AnalysisSource,
    /// The prediction considered, whether or not it was adopted.
    pub prediction: PredictionResult,
}

/// Reconcile the rule-based profile with a classifier outcome.
///
/// This is an override-or-keep decision, never a numeric blend.
pub fn fuse<E: Display>(
    rule: &TraitProfile,
    prediction: Result<PredictionResult, E>,
) -> FusedResult {
    let prediction = match prediction {
        Ok(p) => p,
        Err(e) => {
            info!(error = %e, "classifier unavailable, using rule-based result");
            return FusedResult {
                dominant: rule.classification.dominant,
                secondary: rule.classification.secondary,
                percent: rule.percent,
                confidence: FALLBACK_CONFIDENCE,
                source: AnalysisSource::Fallback,
                prediction: synthesize(rule),
            };
        }
    };

    let mut confidence = RULE_CONFIDENCE;
    if prediction.confidence > confidence {
        confidence = prediction.confidence;
        let percent =
            percent_from_probabilities(&prediction.probabilities).unwrap_or(rule.percent);
        let classification = classify_with_dominant(prediction.predicted, &percent);
        debug!(
            predicted = %prediction.predicted,
            confidence,
            "classifier prediction adopted"
        );
        return FusedResult {
            dominant: classification.dominant,
            secondary: classification.secondary,
            percent,
            confidence,
            source: AnalysisSource::Ml,
            prediction,
        };
    }

    debug!(
        predicted = %prediction.predicted,
        confidence = prediction.confidence,
        "classifier prediction below threshold, keeping rule-based result"
    );
    FusedResult {
        dominant: rule.classification.dominant,
        secondary: rule.classification.secondary,
        percent: rule.percent,
        confidence,
        source: AnalysisSource::Fallback,
        prediction,
    }
}

/// Build a stand-in prediction from the rule-based profile.
pub fn synthesize(rule: &TraitProfile) -> PredictionResult {
    let fractions = proportions(&rule.scores);
    let probabilities = Dosha::ALL
        .into_iter()
        .map(|d| (d, fractions.map_or(1.0 / 3.0, |f| f.get(d))))
        .collect();

    PredictionResult {
        predicted: rule.classification.dominant,
        confidence: FALLBACK_CONFIDENCE,
        probabilities,
        fallback: true,
    }
}

/// Probabilities renormalized over the three categories, then rounded per
/// category. `None` when they carry no mass.
fn percent_from_probabilities(probabilities: &BTreeMap<Dosha, f64>) -> Option<TraitPercent> {
    let p = |d: Dosha| probabilities.get(&d).copied().unwrap_or(0.0).clamp(0.0, 1.0);
    let total: f64 = Dosha::ALL.into_iter().map(p).sum();
    if total <= 0.0 {
        return None;
    }
    let pct = |d: Dosha| (p(d) / total * 100.0).round().clamp(0.0, 100.0) as u8;
    Some(TraitPercent {
        vata: pct(Dosha::Vata),
        pitta: pct(Dosha::Pitta),
        kapha: pct(Dosha::Kapha),
    })
}
