//! Scrolling text buffer
//!
//! The write cursor starts at (0, 0) and moves right one column per
//! character. A newline moves it to column 0 of the next row; on the last
//! row the whole grid scrolls up instead and the top row is lost.
//!
//! The cursor column may equal the width, meaning "past the last column".
//! The next character then either wraps (wrap enabled) or is dropped.

use super::cell::{Cell, NEWLINE};

/// Grid width in characters for the reference display
pub const NUM_CHARS_WIDE: usize = 52;

/// Grid height in rows for the reference display
pub const NUM_ROWS: usize = 9;

/// Grid access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GridError {
    /// Coordinate outside the grid
    OutOfRange,
}

/// Fixed-size scrolling grid of colored characters
#[derive(Debug, Clone)]
pub struct TextGrid<const W: usize = NUM_CHARS_WIDE, const H: usize = NUM_ROWS> {
    rows: [[Cell; W]; H],
    cursor_x: usize,
    cursor_y: usize,
    wrap_enabled: bool,
}

impl<const W: usize, const H: usize> Default for TextGrid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> TextGrid<W, H> {
    const SIZE_OK: () = assert!(W > 0 && H > 1, "Text buffer too small");

    /// Create a cleared grid with wrapping disabled
    pub const fn new() -> Self {
        let () = Self::SIZE_OK;

        Self {
            rows: [[Cell::EMPTY; W]; H],
            cursor_x: 0,
            cursor_y: 0,
            wrap_enabled: false,
        }
    }

    /// Create a cleared grid with the given wrap policy
    pub const fn with_wrap(wrap_enabled: bool) -> Self {
        let mut grid = Self::new();
        grid.wrap_enabled = wrap_enabled;
        grid
    }

    /// Enable or disable wrapping of long lines
    pub fn set_wrap(&mut self, enabled: bool) {
        self.wrap_enabled = enabled;
    }

    /// Whether long lines wrap onto the next row
    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    /// Size in characters as (width, height)
    pub const fn get_size(&self) -> (usize, usize) {
        (W, H)
    }

    /// Current cursor as (column, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    /// Insert a character at the cursor
    ///
    /// A newline moves the cursor to column 0 of the next row, scrolling if
    /// needed. Characters past the last column are dropped unless wrapping
    /// is enabled.
    pub fn write_cell(&mut self, cell: Cell) {
        if cell.character == NEWLINE {
            self.insert_newline();
            return;
        }

        if self.wrap_enabled && self.cursor_x >= W {
            self.insert_newline();
        }

        if self.cursor_x >= W {
            // The current line has grown too long
            return;
        }

        self.rows[self.cursor_y][self.cursor_x] = cell;
        self.cursor_x += 1;
    }

    /// Read the cell at (x, y)
    pub fn get_cell(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let x = usize::try_from(x).map_err(|_| GridError::OutOfRange)?;
        let y = usize::try_from(y).map_err(|_| GridError::OutOfRange)?;

        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or(GridError::OutOfRange)
    }

    /// Borrow a whole row
    pub fn row(&self, y: usize) -> Option<&[Cell; W]> {
        self.rows.get(y)
    }

    /// Shift every row up by one and clear the last row
    ///
    /// The cursor is not moved.
    pub fn scroll_up(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Grid scroll");

        self.rows.copy_within(1.., 0);
        self.rows[H - 1] = [Cell::EMPTY; W];
    }

    /// Clear every cell and move the cursor home
    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                cell.reset();
            }
        }
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    fn insert_newline(&mut self) {
        if self.cursor_y == H - 1 {
            self.scroll_up();
        } else {
            self.cursor_y += 1;
        }
        self.cursor_x = 0;
    }
}
