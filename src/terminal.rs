use std::io;

use crossterm::terminal;
use crossterm::tty::IsTty;

use crate::errors::*;
use crate::units::{ColumnsCount, TerminalWidth};

/// Text columns taken by one maze cell: a 3 glyph body plus its right wall.
pub const CELL_TEXT_WIDTH: usize = 4;

/// How many maze columns fit across a terminal, leaving room for the left wall.
pub fn columns_for_terminal_width(width: TerminalWidth) -> Result<ColumnsCount> {
    let TerminalWidth(w) = width;
    let columns = (w as usize).saturating_sub(1) / CELL_TEXT_WIDTH;
    if columns == 0 {
        Err(ErrorKind::TerminalTooNarrow(w).into())
    } else {
        Ok(ColumnsCount(columns))
    }
}

/// Assumed when there is no terminal to ask, e.g. when output is piped.
pub const DEFAULT_TERMINAL_WIDTH: TerminalWidth = TerminalWidth(80);

/// Width of the terminal attached to this process.
pub fn terminal_width() -> Result<TerminalWidth> {
    let (columns, _) = terminal::size().chain_err(|| "Failed to query the terminal size")?;
    Ok(TerminalWidth(columns))
}

pub fn terminal_width_or_default() -> TerminalWidth {
    terminal_width().unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

/// Raw mode for as long as the guard lives.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> Result<RawModeGuard> {
        terminal::enable_raw_mode().chain_err(|| "Failed to put the terminal in raw mode")?;
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
