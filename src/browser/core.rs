use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::json;

use crate::catalog::Catalog;
use crate::clipboard::{Clipboard, CopyOutcome};
use crate::fragment::{escape_text, project};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::RuntimeMetrics;
use crate::progress::ProgressStore;
use crate::runtime::diagnostics::ActiveLab;
use crate::runtime::{DeckPlugin, EventFlow, RuntimeContext, RuntimeEvent};
use crate::sim::SimPhase;
use crate::width::truncate_display;
use crate::{Rect, Result};

use super::status::NoticeBoard;
use super::view::{CodeKind, LabView};
use super::{CONTENT_ZONE, HEADER_ZONE, NAV_ZONE};

pub(crate) const COPY_FAILED_NOTICE: &str = "Copy failed. Please copy manually.";

/// Catalog navigation, lab projection, copy and completion actions.
///
/// The browser keeps one [`LabView`] for the open lab and rebuilds it on
/// every open, which is also what restarts the interconnect simulation.
pub struct LabBrowserPlugin {
    catalog: Catalog,
    clipboard: Box<dyn Clipboard>,
    progress: Arc<ProgressStore>,
    logger: Option<Logger>,
    metrics: Option<Arc<Mutex<RuntimeMetrics>>>,
    default_lab: Option<String>,
    cursor: usize,
    view: Option<LabView>,
}

impl LabBrowserPlugin {
    pub fn new(
        catalog: Catalog,
        clipboard: Box<dyn Clipboard>,
        progress: Arc<ProgressStore>,
    ) -> Self {
        Self {
            catalog,
            clipboard,
            progress,
            logger: None,
            metrics: None,
            default_lab: None,
            cursor: 0,
            view: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Mutex<RuntimeMetrics>>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Lab opened on startup instead of the first catalog entry. Unknown
    /// ids fall back to the first entry.
    pub fn with_default_lab(mut self, lab_id: impl Into<String>) -> Self {
        self.default_lab = Some(lab_id.into());
        self
    }

    /// Projects `id` into the content zone. Unknown ids leave the current
    /// view untouched.
    fn render_lab(&mut self, ctx: &mut RuntimeContext<'_>, id: &str) {
        let Some(entry) = self.catalog.get(id).copied() else {
            self.log(LogLevel::Debug, "lab_not_found", [json_kv("lab", json!(id))]);
            return;
        };
        if let Some(position) = self.catalog.position(entry.id) {
            self.cursor = position;
        }
        self.view = Some(LabView::new(entry));
        if let Ok(active) = ctx.shared_init(ActiveLab::default) {
            active.set(entry.id);
        }
        self.record_lab_render_metric();
        self.log(
            LogLevel::Debug,
            "lab_rendered",
            [json_kv("lab", json!(entry.id))],
        );
        self.redraw_content(ctx);
        self.redraw_nav(ctx);
    }

    fn redraw_content(&mut self, ctx: &mut RuntimeContext<'_>) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let rect = ctx
            .rect(CONTENT_ZONE)
            .copied()
            .unwrap_or(Rect::new(0, 0, 80, 22));
        ctx.set_zone(CONTENT_ZONE, view.visible_content(rect.width, rect.height));
    }

    fn redraw_nav(&mut self, ctx: &mut RuntimeContext<'_>) {
        let rect = ctx
            .rect(NAV_ZONE)
            .copied()
            .unwrap_or(Rect::new(0, 0, 24, 22));
        let label_width = (rect.width as usize).saturating_sub(2).max(4);
        let open_id = self.view.as_ref().map(|view| view.lab().id);

        let mut lines: Vec<String> = Vec::with_capacity(self.catalog.len() + 2);
        lines.push("<b>Labs</b>".to_string());
        lines.push(String::new());
        for (idx, entry) in self.catalog.entries().iter().enumerate() {
            let marker = if idx == self.cursor { '>' } else { ' ' };
            let label = escape_text(&truncate_display(entry.title, label_width));
            let line = format!("{} {}", marker, label);
            lines.push(if Some(entry.id) == open_id {
                format!("<rev>{}</rev>", line)
            } else {
                line
            });
        }

        let fragment = lines.join("\n");
        ctx.set_zone(NAV_ZONE, project(&fragment, rect.width).join("\n"));
    }

    fn handle_key(&mut self, ctx: &mut RuntimeContext<'_>, key: &KeyEvent) -> Result<EventFlow> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            ctx.request_exit();
            return Ok(EventFlow::Consumed);
        }

        match key.code {
            KeyCode::Char('q') => {
                ctx.request_exit();
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(ctx, 1);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(ctx, -1);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Enter => {
                if let Some(entry) = self.catalog.entries().get(self.cursor).copied() {
                    self.render_lab(ctx, entry.id);
                }
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char('c') => {
                self.copy_sample(ctx, CodeKind::Cli);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char('t') => {
                self.copy_sample(ctx, CodeKind::Terraform);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char('m') => {
                self.mark_current_complete(ctx);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Char(digit @ '1'..='3') => {
                self.set_sim_phase(ctx, digit);
                Ok(EventFlow::Consumed)
            }
            KeyCode::PageDown => {
                self.scroll_page(ctx, 1);
                Ok(EventFlow::Consumed)
            }
            KeyCode::PageUp => {
                self.scroll_page(ctx, -1);
                Ok(EventFlow::Consumed)
            }
            KeyCode::Home => {
                self.scroll_home(ctx);
                Ok(EventFlow::Consumed)
            }
            _ => Ok(EventFlow::Continue),
        }
    }

    fn move_cursor(&mut self, ctx: &mut RuntimeContext<'_>, delta: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let next = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta.unsigned_abs()).min(last)
        };
        if next != self.cursor {
            self.cursor = next;
            self.redraw_nav(ctx);
        }
    }

    fn copy_sample(&mut self, ctx: &mut RuntimeContext<'_>, kind: CodeKind) {
        let (lab_id, block_id, text) = match self.view.as_ref() {
            Some(view) => match view.sample(kind) {
                Some(text) => (view.lab().id, view.block_id(kind), text),
                None => return,
            },
            None => return,
        };

        match self.clipboard.copy(text) {
            Ok(CopyOutcome::Emit(sequence)) => ctx.queue_sequence(sequence),
            Ok(CopyOutcome::Done) => {}
            Err(err) => {
                if let Ok(board) = ctx.shared::<NoticeBoard>() {
                    board.post(COPY_FAILED_NOTICE);
                }
                ctx.request_render();
                self.log(
                    LogLevel::Warn,
                    "clipboard_copy_failed",
                    [
                        json_kv("block", json!(block_id)),
                        json_kv("error", json!(err.to_string())),
                    ],
                );
                return;
            }
        }

        if let Some(view) = self.view.as_mut() {
            view.start_flash(kind);
        }
        self.record_clipboard_metric();
        self.log(
            LogLevel::Debug,
            "code_copied",
            [
                json_kv("lab", json!(lab_id)),
                json_kv("block", json!(block_id)),
            ],
        );
        self.redraw_content(ctx);
    }

    fn mark_current_complete(&mut self, ctx: &mut RuntimeContext<'_>) {
        let Some(lab_id) = self.view.as_ref().map(|view| view.lab().id) else {
            return;
        };
        match self.progress.mark_complete(lab_id) {
            Ok(record) => {
                let completed = record.values().filter(|done| **done).count();
                self.log(
                    LogLevel::Debug,
                    "lab_completed",
                    [
                        json_kv("lab", json!(lab_id)),
                        json_kv("completed", json!(completed)),
                    ],
                );
                ctx.request_render();
            }
            Err(err) => {
                self.log(
                    LogLevel::Warn,
                    "progress_save_failed",
                    [
                        json_kv("lab", json!(lab_id)),
                        json_kv("error", json!(err.to_string())),
                    ],
                );
            }
        }
    }

    fn set_sim_phase(&mut self, ctx: &mut RuntimeContext<'_>, key: char) {
        let phase = match key {
            '1' => SimPhase::Plan,
            '2' => SimPhase::Provision,
            _ => SimPhase::Test,
        };
        let Some(sim) = self.view.as_mut().and_then(LabView::sim_mut) else {
            return;
        };
        sim.set_phase(phase);
        self.redraw_content(ctx);
    }

    fn scroll_page(&mut self, ctx: &mut RuntimeContext<'_>, direction: isize) {
        let page = ctx
            .rect(CONTENT_ZONE)
            .map(|rect| rect.height.saturating_sub(1).max(1) as usize)
            .unwrap_or(10);
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if direction < 0 {
            view.page_up(page);
        } else {
            view.page_down(page);
        }
        self.redraw_content(ctx);
    }

    fn scroll_home(&mut self, ctx: &mut RuntimeContext<'_>) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.scroll_home();
        self.redraw_content(ctx);
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, "labdeck::browser", message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_lab_render_metric(&self) {
        if let Some(metrics) = self.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_lab_render();
            }
        }
    }

    fn record_clipboard_metric(&self) {
        if let Some(metrics) = self.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_clipboard_copy();
            }
        }
    }
}

impl DeckPlugin for LabBrowserPlugin {
    fn name(&self) -> &str {
        "labs.browser"
    }

    fn init(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
        let header_width = ctx.rect(HEADER_ZONE).map(|rect| rect.width).unwrap_or(80);
        ctx.set_zone(
            HEADER_ZONE,
            project("<b>OCI Experience Labs</b>", header_width).join("\n"),
        );
        let initial = self
            .default_lab
            .take()
            .filter(|id| self.catalog.get(id).is_some())
            .or_else(|| {
                self.catalog
                    .entries()
                    .first()
                    .map(|entry| entry.id.to_string())
            });
        if let Some(id) = initial {
            self.render_lab(ctx, &id);
        } else {
            self.redraw_nav(ctx);
        }
        Ok(())
    }

    fn on_event(
        &mut self,
        ctx: &mut RuntimeContext<'_>,
        event: &RuntimeEvent,
    ) -> Result<EventFlow> {
        match event {
            RuntimeEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(ctx, key),
            RuntimeEvent::Tick { elapsed } => {
                if let Some(view) = self.view.as_mut() {
                    if view.tick_flash(*elapsed) {
                        self.redraw_content(ctx);
                    }
                }
                Ok(EventFlow::Continue)
            }
            RuntimeEvent::Resize(_) => {
                self.redraw_content(ctx);
                self.redraw_nav(ctx);
                Ok(EventFlow::Continue)
            }
            _ => Ok(EventFlow::Continue),
        }
    }
}
