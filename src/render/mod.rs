//! Renderer orchestrator.

mod core;

pub use self::core::{AnsiRenderer, RendererSettings, chunk_to_width};
