//! Shape module - immutable occupancy matrices
//!
//! A shape is a small rectangular boolean matrix. Row 0 is the shape's own top row.
//! Storage is a fixed 5x5 buffer so shapes are `Copy` and can live in `static` tables;
//! cells outside `rows x cols` are always empty, which keeps derived equality cell-for-cell.

use crate::config::ConfigError;
use crate::types::MAX_SHAPE_SIDE;

type Cells = [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

/// Rectangular occupancy matrix for one piece orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: Cells,
}

impl Shape {
    /// Build a shape from a literal matrix (non-zero = occupied)
    ///
    /// Usable in `const`/`static` context; dimensions outside `1..=5` fail to compile there.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R >= 1 && R <= MAX_SHAPE_SIDE && C >= 1 && C <= MAX_SHAPE_SIDE);

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Parse a shape from text rows, top row first
    ///
    /// `#` or `X` marks an occupied cell, `.` or a space an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_core::Shape;
    ///
    /// let t = Shape::parse(&["###", ".#."]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.get(1, 1));
    /// assert!(!t.get(1, 0));
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(ConfigError::ShapeSize {
                rows: height,
                cols: width,
            });
        }

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(ConfigError::RaggedShape { row: r });
            }
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = match ch {
                    '#' | 'X' | 'x' => true,
                    '.' | ' ' => false,
                    other => return Err(ConfigError::ShapeChar(other)),
                };
            }
        }

        let shape = Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        };
        if shape.cell_count() == 0 {
            return Err(ConfigError::EmptyShape);
        }
        Ok(shape)
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Occupancy at `(row, col)`; false outside the matrix
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Iterate occupied cells as `(row, col)`, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols()).filter_map(move |c| self.cells[r][c].then_some((r, c)))
        })
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// 90° clockwise rotation as a new shape
    ///
    /// An `R x C` input yields a `C x R` output with `out[x][y] = in[R-1-y][x]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_core::Shape;
    ///
    /// let l = Shape::parse(&["###", "#.."]).unwrap();
    /// let rotated = l.rotate_cw();
    /// assert_eq!(rotated, Shape::parse(&["##", ".#", ".#"]).unwrap());
    /// ```
    pub fn rotate_cw(&self) -> Shape {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (x, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (y, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - y][x];
            }
        }

        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate_cw`]
pub fn rotate_cw(shape: &Shape) -> Shape {
    shape.rotate_cw()
}
