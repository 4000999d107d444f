//! Ways to end an otherwise endless maze stream.
//!
//! A stream only asks between rows, so a row is never left half generated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signal_hook::consts::{SIGINT, SIGTERM};

use crate::errors::*;

pub trait Cancellation {
    /// Should the stream stop before generating another row?
    fn is_cancelled(&mut self) -> Result<bool>;
}

/// Stops once the maze has `rows` rows, counting the final row drawn when the stream finishes.
#[derive(Debug, Copy, Clone)]
pub struct RowLimit {
    remaining_steps: usize,
}

impl RowLimit {
    /// A maze always has at least its final row, so a limit of zero rows is rejected.
    pub fn new(rows: usize) -> Result<RowLimit> {
        if rows == 0 {
            return Err(ErrorKind::ZeroRows.into());
        }
        Ok(RowLimit { remaining_steps: rows - 1 })
    }
}

impl Cancellation for RowLimit {
    fn is_cancelled(&mut self) -> Result<bool> {
        if self.remaining_steps == 0 {
            Ok(true)
        } else {
            self.remaining_steps -= 1;
            Ok(false)
        }
    }
}

/// A flag another thread can raise.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> CancelFlag {
        CancelFlag::default()
    }

    /// A flag raised by SIGINT or SIGTERM instead of the process being killed, so an interrupted maze
    /// still gets its last row and bottom border.
    pub fn on_interrupt() -> Result<CancelFlag> {
        let flag = CancelFlag::new();
        for &signal in &[SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&flag.raised))
                .chain_err(|| format!("Failed to handle signal {}", signal))?;
        }
        Ok(flag)
    }

    pub fn cancel(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }
}

impl Cancellation for CancelFlag {
    fn is_cancelled(&mut self) -> Result<bool> {
        Ok(self.raised.load(Ordering::SeqCst))
    }
}

/// Ctrl-C, Esc or `q` typed at the terminal.
///
/// With the terminal in raw mode Ctrl-C arrives as a key press rather than a signal. Pending events
/// are drained without blocking.
#[derive(Debug, Copy, Clone, Default)]
pub struct TerminalInterrupt;

impl Cancellation for TerminalInterrupt {
    fn is_cancelled(&mut self) -> Result<bool> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if is_interrupt_key(&key) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Either source may stop the stream.
impl<A: Cancellation, B: Cancellation> Cancellation for (A, B) {
    fn is_cancelled(&mut self) -> Result<bool> {
        Ok(self.0.is_cancelled()? || self.1.is_cancelled()?)
    }
}
