use prakriti_core::models::answer::{Answer, AnswerCategory};
use prakriti_core::models::wellness::{RiskBand, WellnessLevel, WellnessScore};

/// Highest weight a single wellness option can carry.
pub const MAX_WEIGHT_PER_QUESTION: f64 = 3.0;

pub const MIN_SCORE: u8 = 10;
pub const MAX_SCORE: u8 = 100;

/// Score reported when no wellness answers were submitted.
pub const NEUTRAL_SCORE: u8 = 50;

/// Derive the wellness score from the wellness subset of `answers`.
///
/// Higher is better. The score is the share of the maximum attainable
/// weight, clamped to `[10, 100]`.
pub fn score(answers: &[Answer]) -> WellnessScore {
    let subset: Vec<&Answer> = answers
        .iter()
        .filter(|a| a.category == AnswerCategory::Wellness)
        .collect();

    if subset.is_empty() {
        return WellnessScore {
            score: NEUTRAL_SCORE,
            level: WellnessLevel::Yellow,
            risk: RiskBand::Medium,
            label: "Not assessed".to_string(),
        };
    }

    let total: f64 = subset.iter().map(|a| a.weight).sum();
    let max_possible = subset.len() as f64 * MAX_WEIGHT_PER_QUESTION;
    let raw = (total / max_possible * 100.0).round();
    let clamped = if raw.is_finite() {
        raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
    } else {
        MAX_SCORE
    };

    from_score(clamped)
}

/// Band a score: `>= 70` green, `40..70` yellow, `< 40` red.
pub fn from_score(score: u8) -> WellnessScore {
    let (level, risk, label) = match score {
        70.. => (WellnessLevel::Green, RiskBand::Low, "Good wellbeing"),
        40..70 => (WellnessLevel::Yellow, RiskBand::Medium, "Moderate concerns"),
        _ => (WellnessLevel::Red, RiskBand::High, "Needs attention"),
    };
    WellnessScore {
        score,
        level,
        risk,
        label: label.to_string(),
    }
}
