use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::dosha::Dosha;

/// Which scorer an answer feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerCategory {
    /// Contributes to a trait bucket.
    Trait,
    /// Contributes to the wellness score only.
    Wellness,
}

impl AnswerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerCategory::Trait => "trait",
            AnswerCategory::Wellness => "wellness",
        }
    }
}

impl fmt::Display for AnswerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trait" => Ok(AnswerCategory::Trait),
            "wellness" => Ok(AnswerCategory::Wellness),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

/// A questionnaire answer exactly as the caller sent it.
///
/// Every field is optional and loosely typed; the validator decides what
/// survives. `weight` may be a number, a numeric string, or anything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RawAnswer {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub option_id: Option<String>,
    #[serde(default, rename = "trait")]
    pub dosha: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub weight: Option<serde_json::Value>,
}

/// A validated answer. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
    #[serde(rename = "trait", skip_serializing_if = "Option::is_none", default)]
    pub dosha: Option<Dosha>,
    pub category: AnswerCategory,
    /// Always finite and non-negative.
    pub weight: f64,
}

impl Answer {
    /// Shorthand for a trait answer.
    pub fn trait_answer(
        question_id: impl Into<String>,
        option_id: impl Into<String>,
        dosha: Dosha,
        weight: f64,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
            dosha: Some(dosha),
            category: AnswerCategory::Trait,
            weight,
        }
    }

    /// Shorthand for a wellness answer.
    pub fn wellness_answer(
        question_id: impl Into<String>,
        option_id: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
            dosha: None,
            category: AnswerCategory::Wellness,
            weight,
        }
    }
}
