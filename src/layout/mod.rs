//! Layout module orchestrator.
//!
//! Downstream code imports layout types from here while the implementation
//! details live in the private `core` module.

mod core;

pub use self::core::{Constraint, Direction, LayoutNode, LayoutTree, NodeId, Rect, Size};
