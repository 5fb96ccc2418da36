//! Render-fragment markup orchestrator.
//!
//! Lab content is authored as plain text with a small inline markup
//! vocabulary; the projector turns it into styled, width-fitted terminal
//! lines. Anything destined for a fragment verbatim (CLI samples,
//! Terraform snippets) must pass through [`escape_text`] first or angle
//! brackets in the payload will be eaten as markup.

mod core;

pub use self::core::{escape_text, project};
