//! prakriti-scoring
//!
//! The rule-based half of the engine. Pure functions, no I/O: answer
//! validation, trait accumulation, wellness scoring, fusion with a classifier
//! prediction, and the static recommendation lookup.

pub mod accumulate;
pub mod error;
pub mod fusion;
pub mod recommend;
pub mod validate;
pub mod wellness;
