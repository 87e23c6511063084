use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Static dietary and lifestyle guidance for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecommendationBundle {
    /// Category name (`vata`, `pitta`, `kapha`) or `general`.
    pub category: String,
    pub general_guidelines: Vec<String>,
    pub foods_to_favor: FoodsToFavor,
    pub foods_to_avoid: FoodsToAvoid,
    pub meal_timing: MealTiming,
    pub lifestyle: Vec<String>,
    pub exercise: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FoodsToFavor {
    pub grains: Vec<String>,
    pub vegetables: Vec<String>,
    pub fruits: Vec<String>,
    pub proteins: Vec<String>,
    pub dairy: Vec<String>,
    pub spices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FoodsToAvoid {
    pub general: Vec<String>,
    pub specific: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealTiming {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub notes: String,
}
