use std::sync::RwLock;

use crossterm::event::KeyEventKind;

use crate::error::{DeckError, Result};
use crate::fragment::{escape_text, project};
use crate::runtime::{DeckPlugin, EventFlow, RuntimeContext, RuntimeEvent};

use super::STATUS_ZONE;

pub const KEY_HINTS: &str =
    "j/k move · Enter open · c/t copy · m complete · 1-3 phases · PgUp/PgDn scroll · q quit";

/// Cross-plugin notice channel.
///
/// Failure paths post a message here; the status bar shows it in place of
/// the key hints until a key press dismisses it. The dismissing press is
/// swallowed, never interpreted as a command.
#[derive(Default)]
pub struct NoticeBoard {
    message: RwLock<Option<String>>,
}

impl NoticeBoard {
    pub fn post(&self, message: impl Into<String>) {
        *self.message.write().expect("notice board lock poisoned") = Some(message.into());
    }

    /// Clears the notice. Returns whether one was showing.
    pub fn clear(&self) -> bool {
        self.message
            .write()
            .expect("notice board lock poisoned")
            .take()
            .is_some()
    }

    pub fn current(&self) -> Option<String> {
        self.message
            .read()
            .expect("notice board lock poisoned")
            .clone()
    }
}

/// Paints the bottom status line and owns notice dismissal.
///
/// Registered ahead of the browser so an active notice swallows the key
/// press that dismisses it before any other plugin sees the event.
#[derive(Default)]
pub struct StatusBarPlugin;

impl StatusBarPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl DeckPlugin for StatusBarPlugin {
    fn name(&self) -> &str {
        "labs.status_bar"
    }

    fn init(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
        ctx.shared_init(NoticeBoard::default)
            .map_err(|err| DeckError::Backend(err.to_string()))?;
        Ok(())
    }

    fn on_event(
        &mut self,
        ctx: &mut RuntimeContext<'_>,
        event: &RuntimeEvent,
    ) -> Result<EventFlow> {
        if let RuntimeEvent::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                if let Ok(board) = ctx.shared::<NoticeBoard>() {
                    if board.clear() {
                        ctx.request_render();
                        return Ok(EventFlow::Consumed);
                    }
                }
            }
        }
        Ok(EventFlow::Continue)
    }

    fn before_render(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
        let board = ctx
            .shared_init(NoticeBoard::default)
            .map_err(|err| DeckError::Backend(err.to_string()))?;
        let line = match board.current() {
            Some(notice) => format!("<rev> {} </rev>", escape_text(&notice)),
            None => KEY_HINTS.to_string(),
        };
        let width = ctx.rect(STATUS_ZONE).map(|rect| rect.width).unwrap_or(80);
        ctx.set_zone(STATUS_ZONE, project(&line, width).join("\n"));
        Ok(())
    }
}
