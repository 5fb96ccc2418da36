use std::io;
use std::sync::Arc;
use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use labdeck::logging::{LogEvent, LogSink};
use labdeck::progress::MemoryBackend;
use labdeck::runtime::diagnostics::{MetricsSnapshotPlugin, SessionLoggerPlugin};
use labdeck::{
    AnsiRenderer, Catalog, DeckRuntime, LabBrowserPlugin, Logger, LoggingResult, Osc52Clipboard,
    ProgressStore, Result, RuntimeEvent, Size, build_layout, default_browser_bundle,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn runtime_browse_script(c: &mut Criterion) {
    let script = browse_events();
    c.bench_function("runtime_browse_script", |b| {
        b.iter(|| {
            let mut runtime = build_runtime().expect("runtime");
            let mut sink = io::sink();
            runtime
                .run_scripted(&mut sink, black_box(script.clone()))
                .expect("scripted run");
        });
    });
}

fn runtime_phase_script(c: &mut Criterion) {
    let script = phase_events();
    c.bench_function("runtime_phase_script", |b| {
        b.iter(|| {
            let mut runtime = build_runtime().expect("runtime");
            let mut sink = io::sink();
            runtime
                .run_scripted(&mut sink, black_box(script.clone()))
                .expect("scripted run");
        });
    });
}

fn build_runtime() -> Result<DeckRuntime> {
    let layout = build_layout();
    let renderer = AnsiRenderer::with_default();
    let mut runtime = DeckRuntime::new(layout, renderer, Size::new(120, 40))?;

    let logger = Logger::new(NullSink::default());
    let metrics_handle = {
        let config = runtime.config_mut();
        config.logger = Some(logger.clone());
        config.metrics_interval = Duration::from_millis(0);
        config.enable_metrics();
        config.metrics_handle().expect("metrics handle")
    };

    let catalog = Catalog::builtin();
    let progress = Arc::new(ProgressStore::new(MemoryBackend::new()));
    let browser = LabBrowserPlugin::new(
        catalog.clone(),
        Box::new(Osc52Clipboard::new()),
        Arc::clone(&progress),
    )
    .with_logger(logger.clone())
    .with_metrics(metrics_handle.clone());

    default_browser_bundle(browser, catalog, progress)
        .with_plugin(
            SessionLoggerPlugin::new(logger.clone())
                .log_keys(false)
                .log_ticks(false),
            -100,
        )
        .with_plugin(
            MetricsSnapshotPlugin::new(logger, metrics_handle)
                .with_interval(Duration::from_millis(250)),
            100,
        )
        .register_into(&mut runtime);

    Ok(runtime)
}

fn key(code: KeyCode) -> RuntimeEvent {
    RuntimeEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// One realistic session: open a lab, copy both samples, mark it complete,
/// then run the interconnect simulation through its phases and reset it.
fn browse_events() -> Vec<RuntimeEvent> {
    vec![
        RuntimeEvent::Resize(Size::new(120, 40)),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Char('c')),
        key(KeyCode::Char('t')),
        key(KeyCode::Char('m')),
        RuntimeEvent::Tick {
            elapsed: Duration::from_millis(500),
        },
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Char('2')),
        key(KeyCode::Char('3')),
        key(KeyCode::Enter),
        RuntimeEvent::Tick {
            elapsed: Duration::from_millis(1300),
        },
    ]
}

/// Hammer the interconnect phase keys. Every press re-projects the longest
/// lab in the catalog, so this stresses the projector and the zone registry.
fn phase_events() -> Vec<RuntimeEvent> {
    let mut events = Vec::with_capacity(200);
    events.push(RuntimeEvent::Resize(Size::new(120, 40)));
    for _ in 0..7 {
        events.push(key(KeyCode::Down));
    }
    events.push(key(KeyCode::Enter));
    for _ in 0..50 {
        events.push(key(KeyCode::Char('1')));
        events.push(key(KeyCode::Char('2')));
        events.push(key(KeyCode::Char('3')));
    }
    events.push(RuntimeEvent::Tick {
        elapsed: Duration::from_millis(16),
    });
    events
}

criterion_group!(benches, runtime_browse_script, runtime_phase_script);
criterion_main!(benches);
