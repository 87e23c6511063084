//! prakriti-predict
//!
//! Client for the external Prakriti classifier service. One attempt per
//! call, bounded by a timeout, with typed failures instead of panics.

pub mod client;
pub mod error;
pub mod wire;
