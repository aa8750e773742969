use std::fmt;

use crate::field::ActivePiece;
use crate::shape::Shape;
use crate::types::{Cell, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape_id: usize,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape_id: value.shape_id,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Read-only view of a field with the falling piece already composited into `cells`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, row 0 at the bottom
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl FieldSnapshot {
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows in drawing order, top row first
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width.max(1) as usize).rev()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl fmt::Display for FieldSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_top_down() {
            for cell in row {
                let ch = cell.map_or('.', |color| color.symbol());
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::config::FieldConfig;
    use crate::field::Field;

    fn square_field() -> Field {
        let catalog = Catalog::new(vec![CatalogEntry::new(
            "O",
            Shape::from_matrix([[1, 1], [1, 1]]),
            Color::Yellow,
        )])
        .unwrap();
        let config = FieldConfig::default()
            .with_size(4, 4)
            .with_catalog(catalog);
        Field::with_seed(config, 1).unwrap()
    }

    #[test]
    fn test_snapshot_composites_active_piece() {
        let field = square_field();
        let snap = field.snapshot();

        assert_eq!(snap.get(1, 3), Some(Color::Yellow));
        assert_eq!(snap.get(2, 2), Some(Color::Yellow));
        assert_eq!(snap.get(0, 0), None);
        assert_eq!(snap.active.unwrap().x, 1);
        assert!(snap.playable());
        // The board itself stays free of the overlay.
        assert_eq!(field.board().filled_count(), 0);
    }

    #[test]
    fn test_snapshot_display() {
        let mut field = square_field();
        field.hard_drop();

        let snap = field.snapshot();
        assert_eq!(snap.to_string(), ".yy.\n.yy.\n.yy.\n.yy.\n");
        assert_eq!(snap.rows_top_down().count(), 4);
    }

    #[test]
    fn test_snapshot_after_game_over_hides_piece() {
        let mut field = square_field();
        field.hard_drop();
        field.hard_drop();
        assert!(field.game_over());

        let snap = field.snapshot();
        assert!(snap.active.is_none());
        assert!(!snap.playable());
        assert_eq!(snap.cells.iter().filter(|c| c.is_some()).count(), 8);
    }
}
