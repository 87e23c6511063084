pub mod answer;
pub mod assessment;
pub mod dosha;
pub mod prediction;
pub mod recommendation;
pub mod scores;
pub mod wellness;
