//! prakriti-storage
//!
//! Assessment persistence. A durable PostgreSQL store, a process-lifetime
//! memory store, and a decorator that falls back from one to the other.

pub mod error;
pub mod fallback;
pub mod memory;
pub mod postgres;
pub mod store;
