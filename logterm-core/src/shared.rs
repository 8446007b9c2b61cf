//! Lock-protected terminal
//!
//! The log producer and the frame renderer usually run in different
//! contexts. `SharedTerminal` serializes them with a single blocking mutex:
//! every write and every full read pass holds the lock for its whole
//! duration, so the renderer never sees a half-applied line.
//!
//! The terminal itself holds no lock. Use `CriticalSectionRawMutex` for a
//! `static` shared across tasks or interrupts, `NoopRawMutex` when producer
//! and renderer share one execution context.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::TerminalConfig;
use crate::grid::{TextGrid, NUM_CHARS_WIDE, NUM_ROWS};
use crate::terminal::Terminal;

/// Terminal guarded by a blocking mutex
pub struct SharedTerminal<M: RawMutex, const W: usize = NUM_CHARS_WIDE, const H: usize = NUM_ROWS> {
    inner: Mutex<M, RefCell<Terminal<W, H>>>,
}

impl<M: RawMutex, const W: usize, const H: usize> Default for SharedTerminal<M, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const W: usize, const H: usize> SharedTerminal<M, W, H> {
    /// Create a shared terminal with default settings
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Terminal::new())),
        }
    }

    /// Create a shared terminal from stored settings
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Terminal::from_config(config))),
        }
    }

    /// Run `f` with exclusive access to the terminal
    ///
    /// # Panics
    ///
    /// Panics if called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Terminal<W, H>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Run a read pass over the grid while holding the lock
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`lock`](Self::lock).
    pub fn with_grid<R>(&self, f: impl FnOnce(&TextGrid<W, H>) -> R) -> R {
        self.inner.lock(|cell| f(cell.borrow().grid()))
    }

    /// Feed a single byte
    pub fn process_byte(&self, c: u8) {
        self.lock(|term| term.process_byte(c));
    }

    /// Feed a run of bytes as one locked write
    pub fn write_bytes(&self, bytes: &[u8]) {
        self.lock(|term| term.write_bytes(bytes));
    }

    /// Feed one log line and its newline as one locked write
    pub fn write_line(&self, line: &str) {
        self.lock(|term| term.write_line(line));
    }

    /// Clear the terminal
    pub fn clear(&self) {
        self.lock(|term| term.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use std::thread;

    static LOG_TERMINAL: SharedTerminal<CriticalSectionRawMutex> = SharedTerminal::new();

    #[test]
    fn test_static_terminal() {
        LOG_TERMINAL.write_line("boot");
        let first = LOG_TERMINAL.with_grid(|grid| grid.get_cell(0, 0));
        assert_eq!(first.map(|c| c.character), Ok(b'b'));
        assert_eq!(LOG_TERMINAL.lock(|term| term.get_size()), (52, 9));
    }

    #[test]
    fn test_single_context() {
        let shared: SharedTerminal<NoopRawMutex, 8, 3> = SharedTerminal::new();
        shared.write_bytes(b"ab");
        shared.process_byte(b'c');
        assert_eq!(shared.with_grid(|grid| grid.cursor()), (3, 0));

        shared.clear();
        assert_eq!(shared.with_grid(|grid| grid.get_cell(0, 0)), Ok(Cell::EMPTY));
    }

    #[test]
    fn test_from_config() {
        let config = TerminalConfig {
            wrap_enabled: true,
            ..Default::default()
        };
        let shared: SharedTerminal<NoopRawMutex, 2, 2> = SharedTerminal::from_config(&config);
        shared.write_bytes(b"xyz");
        assert_eq!(
            shared.with_grid(|grid| grid.get_cell(0, 1).map(|c| c.character)),
            Ok(b'z')
        );
    }

    #[test]
    fn test_lines_are_not_interleaved() {
        let shared: SharedTerminal<CriticalSectionRawMutex, 8, 4> = SharedTerminal::new();

        thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..200 {
                    shared.write_line("aaaa");
                }
            });
            s.spawn(|| {
                for _ in 0..200 {
                    shared.write_line("bbbb");
                }
            });
            s.spawn(|| {
                for _ in 0..200 {
                    shared.with_grid(|grid| {
                        for y in 0..3 {
                            let row = grid.row(y).unwrap();
                            let first = row[0].character;
                            assert!(row[..4].iter().all(|c| c.character == first));
                        }
                    });
                }
            });
        });

        shared.with_grid(|grid| {
            assert_eq!(grid.cursor(), (0, 3));
            assert!(grid.row(3).unwrap().iter().all(|c| *c == Cell::EMPTY));
        });
    }
}
