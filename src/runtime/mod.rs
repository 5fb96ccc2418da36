use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use serde_json::json;

use crate::logging::{event_with_fields, json_kv};
use crate::runtime::shared_state::{SharedState, SharedStateError};
use crate::{
    AnsiRenderer, LayoutTree, LogLevel, Logger, Rect, Result, RuntimeMetrics, Size, ZoneRegistry,
};

pub mod diagnostics;
pub mod driver;
pub mod shared_state;

/// Configuration knobs for the runtime loop.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Interval between synthetic tick events.
    pub tick_interval: Duration,
    /// Optional structured logger used by the runtime.
    pub logger: Option<Logger>,
    /// Metrics accumulator used for periodic snapshots.
    pub metrics: Option<Arc<Mutex<RuntimeMetrics>>>,
    /// Interval between metrics snapshot emissions. Zero disables snapshots.
    pub metrics_interval: Duration,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            logger: None,
            metrics: None,
            metrics_interval: Duration::from_secs(5),
            metrics_target: "labdeck::runtime.metrics".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
    }

    /// Disable metrics collection and prevent further snapshots.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<RuntimeMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// High-level events delivered to plugins.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    Tick { elapsed: Duration },
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    FocusGained,
    FocusLost,
    Resize(Size),
    Raw(CrosstermEvent),
}

/// Control the propagation of an event across plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Consumed,
}

/// Context passed to plugins so they can interact with the runtime safely.
pub struct RuntimeContext<'a> {
    rects: &'a HashMap<String, Rect>,
    shared: &'a SharedState,
    zone_updates: Vec<(String, String)>,
    raw_sequences: Vec<String>,
    redraw_requested: bool,
    exit_requested: bool,
    cursor_hint: Option<(u16, u16)>,
}

impl<'a> RuntimeContext<'a> {
    pub(crate) fn new(rects: &'a HashMap<String, Rect>, shared: &'a SharedState) -> Self {
        Self {
            rects,
            shared,
            zone_updates: Vec::new(),
            raw_sequences: Vec::new(),
            redraw_requested: false,
            exit_requested: false,
            cursor_hint: None,
        }
    }

    /// Queue new content for a zone. The update is applied after the plugin completes.
    pub fn set_zone(&mut self, zone_id: impl Into<String>, content: impl Into<String>) {
        self.zone_updates.push((zone_id.into(), content.into()));
        self.redraw_requested = true;
    }

    /// Queue a raw escape sequence to be written with the next paint.
    ///
    /// The renderer owns the terminal stream, so side-band writes such as
    /// OSC 52 clipboard pushes go through here instead of racing it.
    pub fn queue_sequence(&mut self, sequence: impl Into<String>) {
        self.raw_sequences.push(sequence.into());
        self.redraw_requested = true;
    }

    /// Request that the renderer runs even if no zones changed.
    pub fn request_render(&mut self) {
        self.redraw_requested = true;
    }

    /// Signal to the runtime that execution should terminate at the end of the frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Provide a hint for where the cursor should be restored after rendering.
    pub fn set_cursor_hint(&mut self, row: u16, col: u16) {
        self.cursor_hint = Some((row, col));
    }

    /// Fetch the solved rectangle for a zone if available.
    pub fn rect(&self, zone_id: &str) -> Option<&Rect> {
        self.rects.get(zone_id)
    }

    /// Fetch a shared resource published by another plugin.
    pub fn shared<T>(&self) -> std::result::Result<Arc<T>, SharedStateError>
    where
        T: Send + Sync + 'static,
    {
        self.shared.get::<T>()
    }

    /// Fetch a shared resource, creating it on first access.
    pub fn shared_init<T, F>(&self, make: F) -> std::result::Result<Arc<T>, SharedStateError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.shared.get_or_insert_with(make)
    }

    pub(crate) fn into_outcome(self) -> ContextOutcome {
        ContextOutcome {
            zone_updates: self.zone_updates,
            raw_sequences: self.raw_sequences,
            redraw_requested: self.redraw_requested,
            exit_requested: self.exit_requested,
            cursor_hint: self.cursor_hint,
        }
    }
}

pub(crate) struct ContextOutcome {
    pub(crate) zone_updates: Vec<(String, String)>,
    pub(crate) raw_sequences: Vec<String>,
    pub(crate) redraw_requested: bool,
    pub(crate) exit_requested: bool,
    pub(crate) cursor_hint: Option<(u16, u16)>,
}

/// Behaviour injection point for the runtime.
pub trait DeckPlugin: Send {
    fn name(&self) -> &str {
        "deck_plugin"
    }

    fn init(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        Ok(())
    }

    fn on_event(
        &mut self,
        _ctx: &mut RuntimeContext<'_>,
        _event: &RuntimeEvent,
    ) -> Result<EventFlow> {
        Ok(EventFlow::Continue)
    }

    fn before_render(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        Ok(())
    }

    fn after_render(&mut self, _ctx: &mut RuntimeContext<'_>) -> Result<()> {
        Ok(())
    }
}

/// Ordered collection of plugins registered as one unit.
///
/// Lower priorities see events first; ties keep registration order.
#[derive(Default)]
pub struct PluginBundle {
    entries: Vec<(i32, Box<dyn DeckPlugin>)>,
}

impl PluginBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugin<P>(mut self, plugin: P, priority: i32) -> Self
    where
        P: DeckPlugin + 'static,
    {
        self.entries.push((priority, Box::new(plugin)));
        self
    }

    pub fn register_into(self, runtime: &mut DeckRuntime) {
        for (priority, plugin) in self.entries {
            runtime.register_boxed_plugin(plugin, priority);
        }
    }
}

pub struct DeckRuntime {
    layout: LayoutTree,
    rects: HashMap<String, Rect>,
    registry: ZoneRegistry,
    renderer: AnsiRenderer,
    plugins: Vec<(i32, Box<dyn DeckPlugin>)>,
    shared: SharedState,
    config: RuntimeConfig,
    pending_sequences: Vec<String>,
    should_exit: bool,
    redraw_requested: bool,
    start_instant: Option<Instant>,
    last_metrics_emit: Option<Instant>,
}

impl DeckRuntime {
    pub fn new(layout: LayoutTree, renderer: AnsiRenderer, initial_size: Size) -> Result<Self> {
        Self::with_config(layout, renderer, initial_size, RuntimeConfig::default())
    }

    pub fn with_config(
        layout: LayoutTree,
        renderer: AnsiRenderer,
        initial_size: Size,
        config: RuntimeConfig,
    ) -> Result<Self> {
        let mut registry = ZoneRegistry::new();
        let rects = layout.solve(initial_size)?;
        registry.sync_layout(&rects);

        Ok(Self {
            layout,
            rects,
            registry,
            renderer,
            plugins: Vec::new(),
            shared: SharedState::new(),
            config,
            pending_sequences: Vec::new(),
            should_exit: false,
            redraw_requested: true,
            start_instant: None,
            last_metrics_emit: None,
        })
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    /// Shared resource map handed to plugin contexts.
    pub fn shared_state(&self) -> &SharedState {
        &self.shared
    }

    pub fn register_plugin<P>(&mut self, plugin: P)
    where
        P: DeckPlugin + 'static,
    {
        self.register_boxed_plugin(Box::new(plugin), 0);
    }

    pub fn register_plugin_with_priority<P>(&mut self, plugin: P, priority: i32)
    where
        P: DeckPlugin + 'static,
    {
        self.register_boxed_plugin(Box::new(plugin), priority);
    }

    pub fn register_bundle(&mut self, bundle: PluginBundle) {
        bundle.register_into(self);
    }

    fn register_boxed_plugin(&mut self, plugin: Box<dyn DeckPlugin>, priority: i32) {
        self.plugins.push((priority, plugin));
        self.plugins.sort_by_key(|(priority, _)| *priority);
    }

    /// Re-solve the layout for a new terminal size.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        self.handle_resize(size)
    }

    pub fn run(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.bootstrap(stdout)?;
        let mut last_tick = Instant::now();

        while !self.should_exit {
            let timeout = self
                .config
                .tick_interval
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(0));

            if event::poll(timeout)? {
                let crossterm_event = event::read()?;
                let runtime_event = self.map_event(crossterm_event)?;
                self.dispatch_event(runtime_event)?;
                self.render_if_needed(stdout)?;
                if self.should_exit {
                    break;
                }
            }

            if last_tick.elapsed() >= self.config.tick_interval {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick);
                last_tick = now;
                self.dispatch_event(RuntimeEvent::Tick { elapsed })?;
                self.render_if_needed(stdout)?;
            }

            self.maybe_emit_metrics();
        }

        self.finalize();
        Ok(())
    }

    /// Drive the runtime with a fixed event script instead of the terminal.
    ///
    /// Used by tests and benches; the writer captures everything the
    /// renderer would have sent to the terminal.
    pub fn run_scripted<I>(&mut self, stdout: &mut impl Write, events: I) -> Result<()>
    where
        I: IntoIterator<Item = RuntimeEvent>,
    {
        self.bootstrap(stdout)?;
        for event in events.into_iter() {
            let event = match event {
                RuntimeEvent::Resize(size) => {
                    self.handle_resize(size)?;
                    RuntimeEvent::Resize(size)
                }
                other => other,
            };
            self.dispatch_event(event)?;
            self.render_if_needed(stdout)?;
            if self.should_exit {
                break;
            }
        }
        self.finalize();
        Ok(())
    }

    fn dispatch_event(&mut self, event: RuntimeEvent) -> Result<()> {
        let mut consumed = false;
        for idx in 0..self.plugins.len() {
            let (flow, outcome) = {
                let plugin = &mut self.plugins[idx].1;
                let mut ctx = RuntimeContext::new(&self.rects, &self.shared);
                let flow = plugin.on_event(&mut ctx, &event)?;
                (flow, ctx.into_outcome())
            };
            self.apply_outcome(outcome)?;
            if matches!(flow, EventFlow::Consumed) {
                consumed = true;
                break;
            }
        }
        self.record_event_metric();
        self.log_runtime_event(
            LogLevel::Debug,
            "event_dispatched",
            [
                json_kv("event", json!(Self::describe_event(&event))),
                json_kv("consumed", json!(consumed)),
            ],
        );
        self.maybe_emit_metrics();
        Ok(())
    }

    fn render_if_needed(&mut self, stdout: &mut impl Write) -> Result<()> {
        if !self.redraw_requested {
            return Ok(());
        }

        self.redraw_requested = false;

        for idx in 0..self.plugins.len() {
            let outcome = {
                let plugin = &mut self.plugins[idx].1;
                let mut ctx = RuntimeContext::new(&self.rects, &self.shared);
                plugin.before_render(&mut ctx)?;
                ctx.into_outcome()
            };
            self.apply_outcome(outcome)?;
        }

        let dirty = self.registry.take_dirty();
        let sequences = std::mem::take(&mut self.pending_sequences);
        if !dirty.is_empty() || !sequences.is_empty() {
            self.renderer.render(stdout, &dirty, &sequences)?;
            self.record_render_metric(dirty.len());
            self.log_runtime_event(
                LogLevel::Debug,
                "render_completed",
                [
                    json_kv("dirty_zones", json!(dirty.len())),
                    json_kv("raw_sequences", json!(sequences.len())),
                ],
            );
        }

        for idx in 0..self.plugins.len() {
            let outcome = {
                let plugin = &mut self.plugins[idx].1;
                let mut ctx = RuntimeContext::new(&self.rects, &self.shared);
                plugin.after_render(&mut ctx)?;
                ctx.into_outcome()
            };
            self.apply_outcome(outcome)?;
        }

        if self.registry.has_dirty() {
            self.redraw_requested = true;
        }

        Ok(())
    }

    fn apply_outcome(&mut self, outcome: ContextOutcome) -> Result<()> {
        let ContextOutcome {
            zone_updates,
            raw_sequences,
            redraw_requested,
            exit_requested,
            cursor_hint,
        } = outcome;

        let update_count = zone_updates.len();
        if update_count > 0 {
            for (zone, content) in zone_updates {
                self.registry.apply_content(&zone, content)?;
            }
            self.record_zone_updates_metric(update_count);
            self.redraw_requested = true;
        }

        if !raw_sequences.is_empty() {
            self.pending_sequences.extend(raw_sequences);
            self.redraw_requested = true;
        }

        if redraw_requested {
            self.redraw_requested = true;
        }

        if let Some(cursor) = cursor_hint {
            self.renderer.settings_mut().restore_cursor = Some(cursor);
        }

        if exit_requested {
            self.should_exit = true;
            self.log_runtime_event(LogLevel::Info, "exit_requested", std::iter::empty());
        }

        Ok(())
    }

    fn map_event(&mut self, event: CrosstermEvent) -> Result<RuntimeEvent> {
        match event {
            CrosstermEvent::Key(key) => Ok(RuntimeEvent::Key(key)),
            CrosstermEvent::Mouse(mouse) => Ok(RuntimeEvent::Mouse(mouse)),
            CrosstermEvent::Paste(data) => Ok(RuntimeEvent::Paste(data)),
            CrosstermEvent::FocusGained => Ok(RuntimeEvent::FocusGained),
            CrosstermEvent::FocusLost => Ok(RuntimeEvent::FocusLost),
            CrosstermEvent::Resize(width, height) => {
                let size = Size::new(width, height);
                self.handle_resize(size)?;
                Ok(RuntimeEvent::Resize(size))
            }
        }
    }

    fn handle_resize(&mut self, size: Size) -> Result<()> {
        let rects = self.layout.solve(size)?;
        self.rects = rects;
        self.registry.sync_layout(&self.rects);
        self.redraw_requested = true;
        self.log_runtime_event(
            LogLevel::Info,
            "resized",
            [
                json_kv("width", json!(size.width)),
                json_kv("height", json!(size.height)),
            ],
        );
        Ok(())
    }

    fn bootstrap(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.should_exit = false;
        self.redraw_requested = true;
        self.ensure_metrics_initialized();
        let now = Instant::now();
        self.start_instant = Some(now);
        self.last_metrics_emit = Some(now);
        self.log_runtime_event(
            LogLevel::Info,
            "runtime_started",
            [
                json_kv("plugins", json!(self.plugins.len())),
                json_kv("zones", json!(self.rects.len())),
            ],
        );

        for idx in 0..self.plugins.len() {
            let outcome = {
                let plugin = &mut self.plugins[idx].1;
                let plugin_name = plugin.name().to_string();
                let mut ctx = RuntimeContext::new(&self.rects, &self.shared);
                plugin.init(&mut ctx)?;
                self.log_runtime_event(
                    LogLevel::Debug,
                    "plugin_initialized",
                    [json_kv("plugin", json!(plugin_name))],
                );
                ctx.into_outcome()
            };
            self.apply_outcome(outcome)?;
        }

        self.render_if_needed(stdout)
    }

    fn finalize(&mut self) {
        let uptime_ms = self
            .start_instant
            .map(|start| start.elapsed().as_millis())
            .unwrap_or(0);
        self.log_runtime_event(
            LogLevel::Info,
            "runtime_stopped",
            [json_kv("uptime_ms", json!(uptime_ms))],
        );
    }

    fn ensure_metrics_initialized(&mut self) {
        if self.config.metrics.is_none() && self.config.metrics_interval > Duration::from_millis(0)
        {
            self.config.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
    }

    fn log_runtime_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, "labdeck::runtime", message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_event_metric(&mut self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_event();
            }
        }
    }

    fn record_render_metric(&mut self, dirty_count: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_render(dirty_count);
            }
        }
    }

    fn record_zone_updates_metric(&mut self, count: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_zone_updates(count);
            }
        }
    }

    fn maybe_emit_metrics(&mut self) {
        if self.config.metrics.is_none() {
            return;
        }

        if self.config.metrics_interval == Duration::from_millis(0) {
            return;
        }

        let now = Instant::now();
        match self.last_metrics_emit {
            Some(last) if now.duration_since(last) < self.config.metrics_interval => {
                return;
            }
            _ => {
                self.last_metrics_emit = Some(now);
            }
        }

        let uptime = self
            .start_instant
            .map(|start| now.duration_since(start))
            .unwrap_or_default();

        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let target = self.config.metrics_target.as_str();
                let snapshot_event = guard.snapshot(uptime).to_log_event(target);
                let _ = logger.log_event(snapshot_event);
            }
        }
    }

    fn describe_event(event: &RuntimeEvent) -> &'static str {
        match event {
            RuntimeEvent::Tick { .. } => "tick",
            RuntimeEvent::Key(_) => "key",
            RuntimeEvent::Mouse(_) => "mouse",
            RuntimeEvent::Paste(_) => "paste",
            RuntimeEvent::FocusGained => "focus_gained",
            RuntimeEvent::FocusLost => "focus_lost",
            RuntimeEvent::Resize(_) => "resize",
            RuntimeEvent::Raw(_) => "raw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeckError;
    use crate::layout::{Constraint, Direction, LayoutNode};

    fn two_zone_layout() -> LayoutTree {
        LayoutTree::new(LayoutNode::container(
            "app:shell",
            Direction::Column,
            vec![Constraint::Fixed(1), Constraint::Flex(1)],
            vec![
                LayoutNode::leaf("app:labs.header"),
                LayoutNode::leaf("app:labs.content"),
            ],
        ))
    }

    struct SequencePlugin;

    impl DeckPlugin for SequencePlugin {
        fn name(&self) -> &str {
            "test.sequence"
        }

        fn init(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
            ctx.set_zone("app:labs.header", "OCI Experience Labs");
            ctx.queue_sequence("\u{1b}]52;c;dGVzdA==\u{07}");
            Ok(())
        }
    }

    #[test]
    fn queued_sequences_reach_the_writer() {
        let mut runtime = DeckRuntime::new(
            two_zone_layout(),
            AnsiRenderer::with_default(),
            Size::new(40, 10),
        )
        .unwrap();
        runtime.register_plugin(SequencePlugin);

        let mut output = Vec::new();
        runtime.run_scripted(&mut output, Vec::new()).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("OCI Experience Labs"));
        assert!(rendered.contains("\u{1b}]52;c;dGVzdA==\u{07}"));
    }

    struct TagPlugin {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
        consume: bool,
    }

    impl DeckPlugin for TagPlugin {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_event(
            &mut self,
            _ctx: &mut RuntimeContext<'_>,
            _event: &RuntimeEvent,
        ) -> Result<EventFlow> {
            self.seen.lock().unwrap().push(self.tag);
            Ok(if self.consume {
                EventFlow::Consumed
            } else {
                EventFlow::Continue
            })
        }
    }

    #[test]
    fn bundle_priorities_order_event_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = DeckRuntime::new(
            two_zone_layout(),
            AnsiRenderer::with_default(),
            Size::new(40, 10),
        )
        .unwrap();

        PluginBundle::new()
            .with_plugin(
                TagPlugin {
                    tag: "late",
                    seen: Arc::clone(&seen),
                    consume: false,
                },
                80,
            )
            .with_plugin(
                TagPlugin {
                    tag: "early",
                    seen: Arc::clone(&seen),
                    consume: true,
                },
                -20,
            )
            .register_into(&mut runtime);

        let mut output = Vec::new();
        runtime
            .run_scripted(
                &mut output,
                vec![RuntimeEvent::Tick {
                    elapsed: Duration::from_millis(200),
                }],
            )
            .unwrap();

        // The consuming low-priority plugin stops propagation.
        assert_eq!(*seen.lock().unwrap(), vec!["early"]);
    }

    struct ResizeProbe {
        widths: Arc<Mutex<Vec<u16>>>,
    }

    impl DeckPlugin for ResizeProbe {
        fn name(&self) -> &str {
            "test.resize"
        }

        fn on_event(
            &mut self,
            ctx: &mut RuntimeContext<'_>,
            event: &RuntimeEvent,
        ) -> Result<EventFlow> {
            if let RuntimeEvent::Resize(_) = event {
                if let Some(rect) = ctx.rect("app:labs.content") {
                    self.widths.lock().unwrap().push(rect.width);
                }
            }
            Ok(EventFlow::Continue)
        }
    }

    #[test]
    fn scripted_resize_resolves_before_dispatch() {
        let widths = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = DeckRuntime::new(
            two_zone_layout(),
            AnsiRenderer::with_default(),
            Size::new(40, 10),
        )
        .unwrap();
        runtime.register_plugin(ResizeProbe {
            widths: Arc::clone(&widths),
        });

        let mut output = Vec::new();
        runtime
            .run_scripted(&mut output, vec![RuntimeEvent::Resize(Size::new(90, 24))])
            .unwrap();

        assert_eq!(*widths.lock().unwrap(), vec![90]);
    }

    #[test]
    fn missing_zone_update_surfaces_zone_not_found() {
        struct BadZone;
        impl DeckPlugin for BadZone {
            fn init(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
                ctx.set_zone("app:labs.sidebar", "nope");
                Ok(())
            }
        }

        let mut runtime = DeckRuntime::new(
            two_zone_layout(),
            AnsiRenderer::with_default(),
            Size::new(40, 10),
        )
        .unwrap();
        runtime.register_plugin(BadZone);

        let mut output = Vec::new();
        let err = runtime.run_scripted(&mut output, Vec::new()).unwrap_err();
        assert!(matches!(err, DeckError::ZoneNotFound(_)));
    }
}
