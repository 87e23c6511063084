use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dosha::Dosha;

/// A classifier prediction, either returned by the external service or
/// synthesized locally when the service could not be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub predicted: Dosha,
    /// In `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: BTreeMap<Dosha, f64>,
    /// True when synthesized from the rule-based scores.
    #[serde(default)]
    pub fallback: bool,
}

/// Which computation path produced the final dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisSource {
    /// The classifier's prediction was adopted.
    Ml,
    /// The rule-based result was kept.
    Fallback,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Ml => "ml",
            AnalysisSource::Fallback => "fallback",
        }
    }
}
