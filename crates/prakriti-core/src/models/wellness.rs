use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Traffic-light indicator derived from a wellness score.
///
/// Higher scores are better: green is the healthy end of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellnessLevel {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessScore {
    /// Clamped to `[10, 100]`. Higher is better.
    pub score: u8,
    pub level: WellnessLevel,
    pub risk: RiskBand,
    pub label: String,
}
