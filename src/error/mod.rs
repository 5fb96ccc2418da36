//! Error module orchestrator.
//!
//! Downstream code imports the unified error type from here while the
//! definitions live in the private `types` module.

mod types;

pub use types::{DeckError, Result};
