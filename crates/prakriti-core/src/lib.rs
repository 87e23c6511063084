//! prakriti-core
//!
//! Pure domain types for the Prakriti intake engine: answers, trait scores,
//! wellness scores, classifier predictions and the persisted assessment.
//! No I/O. The shared vocabulary of the other crates.

pub mod error;
pub mod models;
