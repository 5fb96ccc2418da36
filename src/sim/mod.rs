//! Interconnect simulation orchestrator.

mod core;

pub use self::core::{InterconnectSim, SimPhase};
