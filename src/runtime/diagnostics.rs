//! Observer plugins that trace a browsing session from the sidelines.
//!
//! Neither plugin touches a zone. The session logger turns the event
//! stream into JSON lines a session can be replayed from; the metrics
//! snapshot flushes the shared counters at a fixed cadence.

use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use serde_json::json;

use crate::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::RuntimeMetrics;

use super::{DeckPlugin, EventFlow, RuntimeContext, RuntimeEvent};

/// Shared cell naming the lab currently on screen.
///
/// The browser refreshes it every time a lab is opened; the session
/// logger reads it so each key entry says which lab the press landed on.
#[derive(Default)]
pub struct ActiveLab {
    id: RwLock<Option<String>>,
}

impl ActiveLab {
    pub fn set(&self, id: impl Into<String>) {
        *self.id.write().expect("active lab lock poisoned") = Some(id.into());
    }

    pub fn get(&self) -> Option<String> {
        self.id.read().expect("active lab lock poisoned").clone()
    }
}

/// Writes one JSON line per interaction under the `labdeck::session` target.
///
/// Only events the deck's driver actually delivers get an arm: keys, ticks,
/// focus changes and resizes. Register it ahead of the browser, which
/// consumes every key it handles.
pub struct SessionLoggerPlugin {
    logger: Logger,
    level: LogLevel,
    log_keys: bool,
    log_ticks: bool,
}

impl SessionLoggerPlugin {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            level: LogLevel::Debug,
            log_keys: true,
            log_ticks: false,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn log_keys(mut self, enabled: bool) -> Self {
        self.log_keys = enabled;
        self
    }

    /// Ticks drive the copy-confirmation countdown, so tracing them is
    /// occasionally useful and very noisy. Off unless asked for.
    pub fn log_ticks(mut self, enabled: bool) -> Self {
        self.log_ticks = enabled;
        self
    }

    fn emit(&self, message: &str, fields: impl IntoIterator<Item = (String, serde_json::Value)>) {
        let event = event_with_fields(self.level, "labdeck::session", message, fields);
        let _ = self.logger.log_event(event);
    }

    fn active_lab(ctx: &RuntimeContext<'_>) -> Option<String> {
        ctx.shared::<ActiveLab>().ok().and_then(|cell| cell.get())
    }
}

impl DeckPlugin for SessionLoggerPlugin {
    fn name(&self) -> &str {
        "session.logger"
    }

    fn init(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        self.emit(
            "session_trace_started",
            [json_kv("level", json!(format!("{:?}", self.level)))],
        );
        Ok(())
    }

    fn on_event(
        &mut self,
        ctx: &mut RuntimeContext<'_>,
        event: &RuntimeEvent,
    ) -> Result<EventFlow> {
        match event {
            RuntimeEvent::Key(key) if self.log_keys => {
                self.emit(
                    "key_pressed",
                    [
                        json_kv("code", json!(format!("{:?}", key.code))),
                        json_kv("modifiers", json!(format!("{:?}", key.modifiers))),
                        json_kv("lab", json!(Self::active_lab(ctx))),
                    ],
                );
            }
            RuntimeEvent::Tick { elapsed } if self.log_ticks => {
                self.emit("tick", [json_kv("elapsed_ms", json!(elapsed.as_millis()))]);
            }
            RuntimeEvent::FocusGained => {
                self.emit("focus_gained", std::iter::empty());
            }
            RuntimeEvent::FocusLost => {
                self.emit("focus_lost", std::iter::empty());
            }
            RuntimeEvent::Resize(size) => {
                self.emit(
                    "screen_resized",
                    [
                        json_kv("width", json!(size.width)),
                        json_kv("height", json!(size.height)),
                    ],
                );
            }
            // Mouse, paste and raw events never reach the deck: the driver
            // enables neither mouse capture nor bracketed paste.
            _ => {}
        }

        Ok(EventFlow::Continue)
    }
}

/// Flushes the shared [`RuntimeMetrics`] counters as one JSON line at a
/// fixed cadence, piggybacking on ticks and renders.
pub struct MetricsSnapshotPlugin {
    logger: Logger,
    metrics: Arc<Mutex<RuntimeMetrics>>,
    target: String,
    interval: Duration,
    started_at: Instant,
    next_emit: Option<Instant>,
}

impl MetricsSnapshotPlugin {
    pub fn new(logger: Logger, metrics: Arc<Mutex<RuntimeMetrics>>) -> Self {
        Self {
            logger,
            metrics,
            target: "labdeck::runtime.metrics".to_string(),
            interval: Duration::from_secs(5),
            started_at: Instant::now(),
            next_emit: None,
        }
    }

    /// Cadence between snapshots. Zero disables the plugin entirely.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    fn emit_snapshot(&mut self) {
        if self.interval.is_zero() {
            return;
        }

        // The first flush goes out immediately; afterwards a deadline
        // gates the rest.
        let now = Instant::now();
        if let Some(due) = self.next_emit {
            if now < due {
                return;
            }
        }
        self.next_emit = Some(now + self.interval);

        let uptime = now.duration_since(self.started_at);
        if let Ok(guard) = self.metrics.lock() {
            let event = guard.snapshot(uptime).to_log_event(&self.target);
            let _ = self.logger.log_event(event);
        }
    }
}

impl DeckPlugin for MetricsSnapshotPlugin {
    fn name(&self) -> &str {
        "session.metrics"
    }

    fn init(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        self.started_at = Instant::now();
        self.next_emit = None;
        Ok(())
    }

    fn before_render(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        self.emit_snapshot();
        Ok(())
    }

    fn on_event(
        &mut self,
        _ctx: &mut RuntimeContext<'_>,
        event: &RuntimeEvent,
    ) -> Result<EventFlow> {
        if matches!(event, RuntimeEvent::Tick { .. }) {
            self.emit_snapshot();
        }
        Ok(EventFlow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::Rect;
    use crate::logging::{LogEvent, LoggingResult};
    use crate::runtime::shared_state::SharedState;

    struct CaptureSink {
        events: Arc<Mutex<Vec<LogEvent>>>,
    }

    impl crate::logging::LogSink for CaptureSink {
        fn log(&self, event: &LogEvent) -> LoggingResult<()> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    fn capture_logger() -> (Logger, Arc<Mutex<Vec<LogEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new(CaptureSink {
            events: Arc::clone(&events),
        });
        (logger, events)
    }

    fn key(code: KeyCode) -> RuntimeEvent {
        RuntimeEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn key_entries_carry_the_active_lab() {
        let (logger, events) = capture_logger();
        let mut plugin = SessionLoggerPlugin::new(logger);
        let rects: HashMap<String, Rect> = HashMap::new();
        let shared = SharedState::new();

        let mut ctx = RuntimeContext::new(&rects, &shared);
        plugin.on_event(&mut ctx, &key(KeyCode::Char('j'))).unwrap();

        shared
            .get_or_insert_with(ActiveLab::default)
            .unwrap()
            .set("compute");
        let mut ctx = RuntimeContext::new(&rects, &shared);
        plugin
            .on_event(&mut ctx, &key(KeyCode::Enter))
            .unwrap();

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].message, "key_pressed");
        assert_eq!(captured[0].target, "labdeck::session");
        assert!(captured[0].fields["lab"].is_null());
        assert_eq!(captured[1].fields["lab"], "compute");
        assert_eq!(captured[1].fields["code"], "Enter");
    }

    #[test]
    fn paste_and_ticks_stay_out_of_the_trace() {
        let (logger, events) = capture_logger();
        let mut plugin = SessionLoggerPlugin::new(logger);
        let rects: HashMap<String, Rect> = HashMap::new();
        let shared = SharedState::new();

        let mut ctx = RuntimeContext::new(&rects, &shared);
        plugin
            .on_event(&mut ctx, &RuntimeEvent::Paste("opc ...".to_string()))
            .unwrap();
        plugin
            .on_event(
                &mut ctx,
                &RuntimeEvent::Tick {
                    elapsed: Duration::from_millis(120),
                },
            )
            .unwrap();
        assert!(events.lock().unwrap().is_empty());

        plugin.on_event(&mut ctx, &RuntimeEvent::FocusGained).unwrap();
        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "focus_gained");
    }

    #[test]
    fn snapshots_respect_the_interval() {
        let (logger, events) = capture_logger();
        let metrics = Arc::new(Mutex::new(RuntimeMetrics::new()));
        let mut plugin =
            MetricsSnapshotPlugin::new(logger, metrics).with_interval(Duration::from_secs(60));
        let rects: HashMap<String, Rect> = HashMap::new();
        let shared = SharedState::new();

        let mut ctx = RuntimeContext::new(&rects, &shared);
        plugin.init(&mut ctx).unwrap();
        plugin.before_render(&mut ctx).unwrap();
        plugin.before_render(&mut ctx).unwrap();

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1, "second render inside the interval emitted");
        assert_eq!(captured[0].target, "labdeck::runtime.metrics");
    }

    #[test]
    fn a_zero_interval_disables_snapshots() {
        let (logger, events) = capture_logger();
        let metrics = Arc::new(Mutex::new(RuntimeMetrics::new()));
        let mut plugin = MetricsSnapshotPlugin::new(logger, metrics).with_interval(Duration::ZERO);
        let rects: HashMap<String, Rect> = HashMap::new();
        let shared = SharedState::new();

        let mut ctx = RuntimeContext::new(&rects, &shared);
        plugin.init(&mut ctx).unwrap();
        plugin.before_render(&mut ctx).unwrap();
        plugin
            .on_event(
                &mut ctx,
                &RuntimeEvent::Tick {
                    elapsed: Duration::from_millis(250),
                },
            )
            .unwrap();

        assert!(events.lock().unwrap().is_empty());
    }
}
