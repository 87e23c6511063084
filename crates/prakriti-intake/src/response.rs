use prakriti_core::models::answer::RawAnswer;
use prakriti_core::models::assessment::PersistedIn;
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::prediction::AnalysisSource;
use prakriti_core::models::recommendation::RecommendationBundle;
use prakriti_core::models::scores::{TraitPercent, TraitScores};
use prakriti_core::models::wellness::WellnessScore;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A questionnaire submission as sent by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub answers: Vec<RawAnswer>,
}

/// What the client gets back for an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionResponse {
    pub success: bool,
    pub assessment_id: Uuid,
    pub scores: TraitPercent,
    pub trait_scores: TraitScores,
    pub dominant: Dosha,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary: Option<Dosha>,
    pub wellness: WellnessScore,
    pub recommendations: RecommendationBundle,
    pub analysis_source: AnalysisSource,
    pub confidence: f64,
    /// `memory` means the assessment will not survive a restart.
    pub persisted: PersistedIn,
}
