//! prakriti-intake
//!
//! Runs one questionnaire submission end to end: validation, rule-based
//! scoring, the classifier call, fusion, and persistence. Also owns the
//! environment configuration and tracing setup for whatever hosts it.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod response;
pub mod telemetry;
