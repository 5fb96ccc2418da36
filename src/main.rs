//! labdeck: terminal browser for the OCI Experience Lab catalog.
//!
//! Reads an optional TOML config, layers CLI / environment overrides on
//! top, assembles the deck runtime with the browser plugin bundle, and
//! hands the whole thing to the CLI driver for the terminal session.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use labdeck::{
    AnsiRenderer, BrowserConfig, Catalog, CliDriver, Clipboard, ClipboardMode, DeckRuntime,
    DisabledClipboard, LabBrowserPlugin, Logger, Osc52Clipboard, ProgressStore, RuntimeConfig,
    SessionLoggerPlugin, Size, build_layout, default_browser_bundle,
    logging::FileSink,
};

/// Log files rotate once they pass this size.
const LOG_ROTATE_BYTES: u64 = 1024 * 1024;

#[derive(Parser)]
#[command(name = "labdeck")]
#[command(about = "Terminal browser for the OCI Experience Lab catalog")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "labdeck.toml")]
    config: PathBuf,

    /// Lab shown on startup (overrides config file)
    #[arg(long, env = "LABDECK_LAB")]
    lab: Option<String>,

    /// Progress file path (overrides config file)
    #[arg(long, env = "LABDECK_PROGRESS_FILE")]
    progress_file: Option<PathBuf>,

    /// JSON-lines log destination (overrides config file)
    #[arg(long, env = "LABDECK_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Clipboard mode: osc52 or off (overrides config file)
    #[arg(long, env = "LABDECK_CLIPBOARD")]
    clipboard: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = BrowserConfig::load(&cli.config)?;
    if let Some(lab) = cli.lab {
        config.default_lab = Some(lab);
    }
    if let Some(path) = cli.progress_file {
        config.progress_file = path;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    if let Some(mode) = cli.clipboard.as_deref() {
        config.clipboard = match mode {
            "osc52" => ClipboardMode::Osc52,
            "off" => ClipboardMode::Off,
            other => anyhow::bail!("unknown clipboard mode `{other}` (expected osc52 or off)"),
        };
    }

    let logger = config
        .log_file
        .as_ref()
        .map(|path| FileSink::new(path, LOG_ROTATE_BYTES).map(Logger::new))
        .transpose()?;

    let mut runtime_config = RuntimeConfig::default();
    runtime_config.tick_interval = config.tick_interval();
    runtime_config.logger = logger.clone();
    runtime_config.enable_metrics();
    let metrics = runtime_config.metrics_handle();

    let catalog = Catalog::builtin();
    let progress = Arc::new(ProgressStore::with_file(&config.progress_file));
    let clipboard: Box<dyn Clipboard> = match config.clipboard {
        ClipboardMode::Osc52 => Box::new(Osc52Clipboard::new()),
        ClipboardMode::Off => Box::new(DisabledClipboard::new()),
    };

    let mut browser = LabBrowserPlugin::new(catalog.clone(), clipboard, Arc::clone(&progress));
    if let Some(logger) = logger.clone() {
        browser = browser.with_logger(logger);
    }
    if let Some(metrics) = metrics {
        browser = browser.with_metrics(metrics);
    }
    if let Some(lab) = config.default_lab.clone() {
        browser = browser.with_default_lab(lab);
    }

    let mut runtime = DeckRuntime::with_config(
        build_layout(),
        AnsiRenderer::with_default(),
        Size::new(120, 32),
        runtime_config,
    )?;
    runtime.register_bundle(default_browser_bundle(browser, catalog, progress));
    if let Some(logger) = logger {
        // Ahead of the status bar and the browser, which consume the
        // keys they handle.
        runtime.register_plugin_with_priority(SessionLoggerPlugin::new(logger), -100);
    }

    CliDriver::new(runtime).run()?;
    Ok(())
}
