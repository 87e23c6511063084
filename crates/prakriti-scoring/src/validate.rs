use prakriti_core::models::answer::{Answer, AnswerCategory, RawAnswer};
use prakriti_core::models::dosha::Dosha;
use tracing::debug;

use crate::error::ScoringError;

/// Normalize raw answers, dropping malformed entries.
///
/// An entry is malformed when `questionId` or `optionId` is missing or blank.
/// Malformed entries are skipped rather than failing the batch; only an empty
/// input, or an input where nothing survives, is an error.
pub fn validate(raw: &[RawAnswer]) -> Result<Vec<Answer>, ScoringError> {
    if raw.is_empty() {
        return Err(ScoringError::InvalidInput("no answers submitted".to_string()));
    }

    let answers: Vec<Answer> = raw
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let answer = normalize(entry);
            if answer.is_none() {
                debug!(index, "dropping malformed answer");
            }
            answer
        })
        .collect();

    if answers.is_empty() {
        return Err(ScoringError::InvalidInput("no valid answers".to_string()));
    }

    debug!(submitted = raw.len(), kept = answers.len(), "answers validated");
    Ok(answers)
}

fn normalize(entry: &RawAnswer) -> Option<Answer> {
    let question_id = non_blank(entry.question_id.as_deref())?;
    let option_id = non_blank(entry.option_id.as_deref())?;

    let dosha = entry
        .dosha
        .as_deref()
        .and_then(|t| t.parse::<Dosha>().ok());

    let declared = entry
        .category
        .as_deref()
        .and_then(|c| c.parse::<AnswerCategory>().ok());

    // A trait answer without a recognized trait has no bucket to land in.
    let category = match (declared, dosha) {
        (Some(AnswerCategory::Trait), Some(_)) | (None, Some(_)) => AnswerCategory::Trait,
        _ => AnswerCategory::Wellness,
    };

    Some(Answer {
        question_id,
        option_id,
        dosha,
        category,
        weight: coerce_weight(entry.weight.as_ref()),
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numbers and numeric strings are accepted; everything else is 0.
/// The result is always finite and non-negative.
pub fn coerce_weight(value: Option<&serde_json::Value>) -> f64 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => 0.0,
    }
}
