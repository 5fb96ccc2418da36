use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use thiserror::Error;

use crate::{DeckError, DeckRuntime, Size};

pub type DriverResult<T> = std::result::Result<T, CliDriverError>;

#[derive(Debug, Error)]
pub enum CliDriverError {
    #[error("runtime error: {0}")]
    Runtime(#[from] DeckError),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Runs an assembled `DeckRuntime` against the real terminal: raw mode,
/// alternate screen, hidden cursor, and a window title for the session.
///
/// Terminal state is restored when the internal guard drops, so the shell
/// prompt comes back even when the loop errors or panics mid-session.
pub struct CliDriver {
    runtime: DeckRuntime,
}

impl CliDriver {
    pub fn new(runtime: DeckRuntime) -> Self {
        Self { runtime }
    }

    pub fn run(mut self) -> DriverResult<()> {
        let mut stdout = io::stdout();
        let _guard = TerminalGuard::enter(&mut stdout)?;

        let (width, height) = terminal::size()?;
        self.runtime.resize(Size::new(width, height))?;
        self.runtime.run(&mut stdout)?;
        Ok(())
    }
}

/// Restores the terminal on drop, whatever path the session took out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut impl Write) -> DriverResult<Self> {
        terminal::enable_raw_mode().map_err(|err| CliDriverError::Terminal(err.to_string()))?;
        execute!(
            stdout,
            EnterAlternateScreen,
            SetTitle("labdeck"),
            Hide,
            Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
