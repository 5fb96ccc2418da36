//! Lab catalog orchestrator.
//!
//! The catalog is a fixed, ordered collection of hands-on lab entries; the
//! seeded OCI set lives in `builtin`. Lookup never panics: asking for an
//! unknown id returns `None` and callers decide what a miss means.

mod builtin;
mod core;

pub use self::core::{Catalog, CatalogError, LabEntry};
