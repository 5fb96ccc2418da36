use thiserror::Error;

/// Unified result type for the labdeck crate.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors surfaced by the layout and runtime substrate.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("layout tree is empty")]
    EmptyLayout,
    #[error("zone `{0}` not found")]
    ZoneNotFound(String),
    #[error("terminal backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
