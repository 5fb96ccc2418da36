//! Completion tracking orchestrator.
//!
//! Progress is one JSON blob keyed by lab id. The store never fails a
//! read: missing or malformed blobs degrade to an empty record so a
//! corrupt file can only ever cost checkmarks, not the session.

mod core;

pub use self::core::{
    COMPLETE_GLYPH, FileBackend, INCOMPLETE_GLYPH, MemoryBackend, ProgressBackend, ProgressError,
    ProgressRecord, ProgressStore, glyph_for, strip_glyph,
};
