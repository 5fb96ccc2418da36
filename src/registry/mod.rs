//! Zone registry orchestrator.

mod core;

pub use self::core::{ZoneContent, ZoneId, ZoneRegistry, ZoneState};
