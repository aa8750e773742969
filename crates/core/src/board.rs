//! Board module - the grid of locked cells
//!
//! The board is sized at construction (10x20 for solo and duel, 20x20 for coop) and
//! stores only locked cells; the falling piece is overlaid on read by the field.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x runs left to right and y runs bottom to top,
//! so row 0 is the floor and row `height - 1` is the topmost storable row.

use std::fmt;

use crate::types::{Cell, Color};

/// The grid of locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x), row 0 at the bottom
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, top row first
    ///
    /// Rows shorter than the board are padded with empty cells; missing rows at the top
    /// stay empty. `.` and space are empty, any other character locks a cell with `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_core::Board;
    /// use tetris_pp_core::types::Color;
    ///
    /// let board = Board::from_rows(4, 3, &["#...", "####"], Color::Red);
    /// assert!(board.is_row_full(0));
    /// assert!(board.is_occupied(0, 1));
    /// assert!(!board.is_occupied(1, 1));
    /// ```
    pub fn from_rows(width: u16, height: u16, rows: &[&str], fill: Color) -> Self {
        let mut board = Self::new(width, height);
        for (i, row) in rows.iter().rev().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    board.set(x as i32, i as i32, Some(fill));
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32
    }

    /// One row, bottom row first
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Iterate rows from the floor upward
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Remaining rows keep their relative order and drop by the number of cleared rows
    /// beneath them; that many empty rows appear at the top. Two-pointer compaction,
    /// no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = 0usize;

        // Scan from the floor upward
        for read_y in 0..height {
            if self.is_row_full(read_y) {
                continue;
            }
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
            write_y += 1;
        }

        // Empty the vacated rows at the top
        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        height - write_y
    }

    /// Number of locked cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array (row 0 first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl fmt::Display for Board {
    /// Top row first, `.` for empty cells, color symbols otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows().rev() {
            for cell in row {
                let ch = cell.map_or('.', |color| color.symbol());
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
