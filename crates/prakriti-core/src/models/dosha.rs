use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three constitutional categories.
///
/// Declaration order is significant: it is the fixed enumeration order used
/// for every tie-break (vata before pitta before kapha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// All categories in tie-break order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            _ => Err(CoreError::UnknownDosha(s.to_string())),
        }
    }
}
