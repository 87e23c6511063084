use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;
use super::dosha::Dosha;
use super::prediction::{AnalysisSource, PredictionResult};
use super::scores::{TraitPercent, TraitScores};
use super::wellness::WellnessScore;

/// One completed questionnaire submission. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: String,
    pub answers: Vec<Answer>,
    pub trait_scores: TraitScores,
    pub scores: TraitPercent,
    pub dominant: Dosha,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary: Option<Dosha>,
    pub wellness: WellnessScore,
    pub prediction: PredictionResult,
    pub analysis_source: AnalysisSource,
    pub confidence: f64,
    pub created_at: jiff::Timestamp,
}

/// Which store absorbed an assessment write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PersistedIn {
    Durable,
    /// Process-lifetime memory; lost on restart.
    Memory,
}
