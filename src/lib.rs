//! Terminal browser for the OCI Experience Lab catalog.
//!
//! The crate splits into two layers. The lower half is a small zone-based
//! terminal runtime: a constraint layout solver, a content-hashing zone
//! registry, an ANSI renderer, and an event loop that dispatches to
//! plugins. The upper half is the lab browser built on top of it: the
//! static lab catalog, the markup projector, the clipboard and progress
//! seams, the interconnect simulation, and the plugins that tie them to
//! zones. `labdeck::browser` is the usual entry point; everything below it
//! is public so tests and alternative frontends can drive the pieces
//! directly.

pub mod ansi;
pub mod browser;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod fragment;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod progress;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod sim;
pub mod width;

pub use browser::{
    CONTENT_ZONE, CodeKind, HEADER_ZONE, LabBrowserPlugin, LabView, NAV_ZONE, NoticeBoard,
    ProgressRailPlugin, RAIL_ZONE, STATUS_ZONE, StatusBarPlugin, build_layout,
    default_browser_bundle,
};
pub use catalog::{Catalog, CatalogError, LabEntry};
pub use clipboard::{
    Clipboard, ClipboardError, CopyOutcome, DisabledClipboard, MemoryClipboard, Osc52Clipboard,
};
pub use config::{BrowserConfig, ClipboardMode, ConfigError};
pub use error::{DeckError, Result};
pub use fragment::{escape_text, project};
pub use layout::{Constraint, Direction, LayoutNode, LayoutTree, NodeId, Rect, Size};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RuntimeMetrics};
pub use progress::{FileBackend, MemoryBackend, ProgressBackend, ProgressRecord, ProgressStore};
pub use registry::{ZoneContent, ZoneId, ZoneRegistry};
pub use render::{AnsiRenderer, RendererSettings};
pub use runtime::diagnostics::{ActiveLab, MetricsSnapshotPlugin, SessionLoggerPlugin};
pub use runtime::driver::cli::{CliDriver, CliDriverError, DriverResult};
pub use runtime::shared_state::{SharedState, SharedStateError};
pub use runtime::{
    DeckPlugin, DeckRuntime, EventFlow, PluginBundle, RuntimeConfig, RuntimeContext, RuntimeEvent,
};
pub use sim::{InterconnectSim, SimPhase};
pub use width::display_width;
