use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dosha::Dosha;

/// Raw per-trait weight totals. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraitScores {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl TraitScores {
    pub fn get(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn add(&mut self, dosha: Dosha, weight: f64) {
        match dosha {
            Dosha::Vata => self.vata += weight,
            Dosha::Pitta => self.pitta += weight,
            Dosha::Kapha => self.kapha += weight,
        }
    }

    pub fn total(&self) -> f64 {
        self.vata + self.pitta + self.kapha
    }
}

/// Per-trait percentages, each rounded independently.
///
/// The sum is 99, 100 or 101; rounding drift is not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraitPercent {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl TraitPercent {
    /// Used when every trait total is zero.
    pub const EVEN: TraitPercent = TraitPercent {
        vata: 33,
        pitta: 33,
        kapha: 34,
    };

    pub fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn sum(&self) -> u16 {
        u16::from(self.vata) + u16::from(self.pitta) + u16::from(self.kapha)
    }
}

/// Dominant and (conditionally) secondary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub dominant: Dosha,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary: Option<Dosha>,
}

/// Everything the rule-based path derives from the trait answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraitProfile {
    pub scores: TraitScores,
    pub percent: TraitPercent,
    pub classification: Classification,
}
