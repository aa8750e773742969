//! Field module - one player's falling-block simulation
//!
//! A field owns its grid of locked cells, the falling piece, a gravity accumulator,
//! the score and a terminal game-over flag. Drivers feed it discrete commands and frame
//! time; renderers read it back through queries or a [`FieldSnapshot`].
//!
//! Coordinates follow the board: x left to right, y bottom to top. A shape cell at
//! matrix `(row, col)` sits at grid `(x + col, y - row)`, so the anchor is the shape's
//! top-left corner and matrix row 0 is the piece's visually topmost row.

use std::time::Duration;

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, FieldConfig};
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::line_clear_score;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, FieldSnapshot};
use crate::types::{Cell, Color, Command, MAX_SHAPE_CELLS};

/// Grid coordinates of every occupied cell of a piece
pub type PieceCells = ArrayVec<(i32, i32), MAX_SHAPE_CELLS>;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    /// Index of the catalog entry it was drawn from
    pub shape_id: usize,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl ActivePiece {
    /// Grid cells the piece would cover if shifted by `(dx, dy)`
    ///
    /// Coordinates saturate at the `i32` range instead of wrapping.
    pub fn cells_at(&self, dx: i32, dy: i32) -> PieceCells {
        self.shape
            .occupied()
            .map(|(row, col)| {
                let (x, y) = Self::cell_position(self.x, self.y, row, col, dx, dy);
                (clamp_i32(x), clamp_i32(y))
            })
            .collect()
    }

    fn cell_position(x: i32, y: i32, row: usize, col: usize, dx: i32, dy: i32) -> (i64, i64) {
        (
            i64::from(x) + col as i64 + i64::from(dx),
            i64::from(y) - row as i64 + i64::from(dy),
        )
    }

    /// Grid cells the piece covers now
    pub fn cells(&self) -> PieceCells {
        self.cells_at(0, 0)
    }

    /// Whether the piece, shifted by `(dx, dy)`, is a legal placement on `board`
    ///
    /// Illegal if any cell leaves the side walls, drops below the floor, or lands on a
    /// locked cell. Cells above the top row are unobstructed.
    pub fn fits(&self, board: &Board, dx: i32, dy: i32) -> bool {
        let width = i64::from(board.width());
        let height = i64::from(board.height());
        self.shape.occupied().all(|(row, col)| {
            let (x, y) = Self::cell_position(self.x, self.y, row, col, dx, dy);
            if x < 0 || x >= width || y < 0 {
                return false;
            }
            y >= height || !board.is_occupied(x as i32, y as i32)
        })
    }

    /// Whether the piece covers grid cell `(x, y)`
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let col = x - self.x;
        let row = self.y - y;
        col >= 0 && row >= 0 && self.shape.get(row as usize, col as usize)
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Lifecycle of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    Falling,
    /// Absorbing: only [`Field::restart`] leaves it
    GameOver,
}

/// Outcome of one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// The follow-up spawn collided and ended the game
    pub topped_out: bool,
}

/// One player's simulation
#[derive(Debug, Clone)]
pub struct Field<R = SimpleRng> {
    config: FieldConfig,
    board: Board,
    active: ActivePiece,
    rng: R,
    fall_accumulator: Duration,
    score: u32,
    lines: u32,
    /// Monotonic id of spawned pieces (the first piece is 1)
    piece_id: u32,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl Field<SimpleRng> {
    /// Field driven by a seeded [`SimpleRng`]
    pub fn with_seed(config: FieldConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: Randomizer> Field<R> {
    /// Build a field with an empty grid and spawn its first piece
    ///
    /// Fails only on invalid configuration.
    pub fn new(config: FieldConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.width, config.height);
        let active = Self::draw_piece(&config, &mut rng);
        let mut field = Self {
            config,
            board,
            active,
            rng,
            fall_accumulator: Duration::ZERO,
            score: 0,
            lines: 0,
            piece_id: 0,
            game_over: false,
            last_event: None,
        };
        field.enter(active);
        Ok(field)
    }

    /// Pick the next catalog entry and position it at the spawn point
    fn draw_piece(config: &FieldConfig, rng: &mut R) -> ActivePiece {
        let (shape_id, entry) = config.catalog.pick_random(rng);
        let cols = entry.shape.cols() as i32;
        ActivePiece {
            shape_id,
            shape: entry.shape,
            x: config.width as i32 / 2 - cols / 2,
            y: config.height as i32 - 1,
            color: entry.color,
        }
    }

    /// Install a freshly drawn piece; a blocked spawn ends the game
    fn enter(&mut self, piece: ActivePiece) -> bool {
        self.active = piece;
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.is_valid(0, 0) {
            self.game_over = true;
            info!(
                "field topped out: piece #{} ({}) blocked at spawn, score {}",
                self.piece_id,
                self.entry_name(),
                self.score
            );
            return false;
        }

        trace!(
            "spawned piece #{} ({}) at ({}, {})",
            self.piece_id,
            self.entry_name(),
            piece.x,
            piece.y
        );
        true
    }

    fn entry_name(&self) -> &'static str {
        self.config
            .catalog
            .get(self.active.shape_id)
            .map_or("?", |entry| entry.name)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The falling piece; `None` once the game is over
    pub fn active(&self) -> Option<&ActivePiece> {
        (!self.game_over).then_some(&self.active)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines cleared
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn state(&self) -> FieldState {
        if self.game_over {
            FieldState::GameOver
        } else {
            FieldState::Falling
        }
    }

    /// Gravity time banked toward the next step
    pub fn fall_accumulator(&self) -> Duration {
        self.fall_accumulator
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Cell as a renderer sees it: the falling piece drawn over the locked grid
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        let locked = self.board.get(x, y)?;
        if locked.is_none() && !self.game_over && self.active.covers(x, y) {
            return Some(self.active.color);
        }
        locked
    }

    /// Owned, composited copy of everything a renderer needs
    pub fn snapshot(&self) -> FieldSnapshot {
        let width = self.board.width();
        let height = self.board.height();
        let mut cells = self.board.cells().to_vec();
        if !self.game_over {
            for (x, y) in self.active.cells() {
                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    cells[y as usize * width as usize + x as usize] = Some(self.active.color);
                }
            }
        }

        FieldSnapshot {
            width,
            height,
            cells,
            active: self.active().map(|piece| ActiveSnapshot::from(*piece)),
            score: self.score,
            lines: self.lines,
            game_over: self.game_over,
        }
    }

    /// Draw a new piece and place it at the spawn point
    ///
    /// Returns false and enters game over when the spawn position is already blocked;
    /// the blocked piece stays in place but is no longer reported or moved.
    pub fn spawn(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let piece = Self::draw_piece(&self.config, &mut self.rng);
        self.enter(piece)
    }

    /// Whether the falling piece shifted by `(dx, dy)` is a legal placement
    pub fn is_valid(&self, dx: i32, dy: i32) -> bool {
        self.active.fits(&self.board, dx, dy)
    }

    /// Shift the falling piece if the target is legal; state is untouched otherwise
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over || !self.is_valid(dx, dy) {
            return false;
        }
        // Rows above the top are open, so a huge upward shift can pass the check.
        match (self.active.x.checked_add(dx), self.active.y.checked_add(dy)) {
            (Some(x), Some(y)) => {
                self.active.x = x;
                self.active.y = y;
                true
            }
            _ => false,
        }
    }

    /// Rotate clockwise in place, without wall kicks
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = ActivePiece {
            shape: self.active.shape.rotate_cw(),
            ..self.active
        };
        if !candidate.fits(&self.board, 0, 0) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Lock the falling piece, clear full rows, score them and spawn the next piece
    ///
    /// Cells above the top row are dropped. Returns `None` once the game is over.
    pub fn lock_and_clear(&mut self) -> Option<LockEvent> {
        if self.game_over {
            return None;
        }

        let height = self.board.height() as i32;
        for (x, y) in self.active.cells() {
            if y < height {
                self.board.set(x, y, Some(self.active.color));
            }
        }

        let lines_cleared = self.board.clear_full_rows() as u32;
        let points = line_clear_score(self.config.scoring, lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);

        if lines_cleared > 0 {
            debug!(
                "cleared {} line(s) for {} points, score {}",
                lines_cleared, points, self.score
            );
        }

        let topped_out = !self.spawn();
        let event = LockEvent {
            lines_cleared,
            points,
            topped_out,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Advance gravity by `dt`
    ///
    /// Every whole fall interval banked moves the piece down a row. When it cannot move,
    /// the piece locks and no further steps run in this call; the leftover time stays
    /// banked for the next piece. At most one lock happens per call.
    /// Returns true if the piece moved or locked.
    pub fn advance_time(&mut self, dt: Duration) -> bool {
        if self.game_over {
            return false;
        }

        let interval = self.config.fall_interval;
        self.fall_accumulator = self.fall_accumulator.saturating_add(dt);

        let mut changed = false;
        while self.fall_accumulator >= interval {
            self.fall_accumulator -= interval;
            changed = true;
            if !self.try_move(0, -1) {
                self.lock_and_clear();
                break;
            }
        }
        changed
    }

    /// Drop straight down until blocked, then lock
    ///
    /// Returns the number of rows dropped. The gravity accumulator is left alone.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut rows = 0;
        while self.try_move(0, -1) {
            rows += 1;
        }
        self.lock_and_clear();
        rows
    }

    /// Apply a player command
    pub fn apply(&mut self, command: Command) -> bool {
        if let Some((dx, dy)) = command.delta() {
            return self.try_move(dx, dy);
        }
        match command {
            Command::Rotate => self.rotate(),
            Command::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            Command::MoveLeft | Command::MoveRight | Command::SoftDrop => false,
        }
    }

    /// Reset to an empty grid with zero score and spawn a fresh piece
    ///
    /// The random source keeps running, so a restarted field does not replay the
    /// previous piece sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.fall_accumulator = Duration::ZERO;
        self.score = 0;
        self.lines = 0;
        self.piece_id = 0;
        self.game_over = false;
        self.last_event = None;
        self.spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::types::ScoringMode;

    const BAR: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
    const TALL_BAR: Shape = Shape::from_matrix([[1], [1], [1], [1]]);
    const SQUARE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);

    fn only(shape: Shape) -> Catalog {
        Catalog::new(vec![CatalogEntry::new("test", shape, Color::Cyan)]).unwrap()
    }

    fn field_with(shape: Shape, width: u16, height: u16) -> Field {
        let config = FieldConfig::default()
            .with_size(width, height)
            .with_catalog(only(shape));
        Field::with_seed(config, 1).unwrap()
    }

    fn fill_row_except(board: &mut Board, y: i32, gap: i32) {
        for x in 0..board.width() as i32 {
            if x != gap {
                board.set(x, y, Some(Color::Red));
            }
        }
    }

    #[test]
    fn test_new_field_spawns_first_piece() {
        let field = Field::with_seed(FieldConfig::default(), 12345).unwrap();

        assert!(!field.game_over());
        assert_eq!(field.state(), FieldState::Falling);
        assert_eq!(field.score(), 0);
        assert_eq!(field.piece_id(), 1);
        assert_eq!(field.board().filled_count(), 0);

        let active = field.active().unwrap();
        assert_eq!(active.y, 19);
        assert_eq!(active.x, 5 - active.shape.cols() as i32 / 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FieldConfig::default().with_size(0, 20);
        assert_eq!(
            Field::with_seed(config, 1).unwrap_err(),
            ConfigError::ZeroWidth
        );
    }

    #[test]
    fn test_spawn_position() {
        let field = field_with(BAR, 10, 20);
        let active = field.active().unwrap();
        assert_eq!((active.x, active.y), (3, 19));
        assert_eq!(active.cells().as_slice(), &[(3, 19), (4, 19), (5, 19), (6, 19)]);

        let field = field_with(SQUARE, 20, 20);
        let active = field.active().unwrap();
        assert_eq!((active.x, active.y), (9, 19));
    }

    #[test]
    fn test_is_valid_walls_and_floor() {
        let field = field_with(BAR, 10, 20);

        assert!(field.is_valid(0, 0));
        assert!(field.is_valid(-3, 0));
        assert!(!field.is_valid(-4, 0));
        assert!(field.is_valid(3, 0));
        assert!(!field.is_valid(4, 0));
        assert!(field.is_valid(0, -19));
        assert!(!field.is_valid(0, -20));
    }

    #[test]
    fn test_is_valid_above_top_is_open() {
        let field = field_with(BAR, 10, 20);
        assert!(field.is_valid(0, 5));
    }

    #[test]
    fn test_is_valid_stack_collision() {
        let mut field = field_with(BAR, 10, 20);
        field.board_mut().set(4, 10, Some(Color::Red));

        assert!(field.is_valid(0, -8));
        assert!(!field.is_valid(0, -9));
    }

    #[test]
    fn test_try_move_is_atomic() {
        let mut field = field_with(BAR, 10, 20);

        assert!(field.try_move(-3, 0));
        let before = *field.active().unwrap();
        assert!(!field.try_move(-1, 0));
        assert_eq!(*field.active().unwrap(), before);
    }

    #[test]
    fn test_rotate_in_place() {
        let mut field = field_with(BAR, 10, 20);
        assert!(field.rotate());

        let active = field.active().unwrap();
        assert_eq!(active.shape, TALL_BAR);
        assert_eq!((active.x, active.y), (3, 19));
    }

    #[test]
    fn test_rotate_blocked_keeps_shape() {
        let mut field = field_with(TALL_BAR, 10, 4);
        // Upright bar at column 5 reaching the floor; lying flat needs columns 5..=8 on row 3.
        field.board_mut().set(7, 3, Some(Color::Red));

        let before = *field.active().unwrap();
        assert!(!field.rotate());
        assert_eq!(*field.active().unwrap(), before);
    }

    #[test]
    fn test_rotate_has_no_wall_kick() {
        let mut field = field_with(TALL_BAR, 10, 20);
        while field.try_move(1, 0) {}
        assert_eq!(field.active().unwrap().x, 9);

        // Flat bar would need columns 9..=12.
        assert!(!field.rotate());
        assert_eq!(field.active().unwrap().shape, TALL_BAR);
    }

    #[test]
    fn test_lock_writes_color_and_spawns() {
        let mut field = field_with(SQUARE, 10, 20);
        while field.try_move(0, -1) {}

        let event = field.lock_and_clear().unwrap();
        assert_eq!(event, LockEvent::default());
        assert_eq!(field.board().get(4, 0), Some(Some(Color::Cyan)));
        assert_eq!(field.board().get(5, 1), Some(Some(Color::Cyan)));
        assert_eq!(field.board().filled_count(), 4);
        assert_eq!(field.piece_id(), 2);
        assert_eq!(field.take_last_event(), Some(event));
        assert_eq!(field.take_last_event(), None);
    }

    #[test]
    fn test_lock_discards_cells_above_top() {
        // Spawn at x=1,y=1 covers rows 1,0,-1,-2: below the floor, so the game is over at once.
        let field = field_with(TALL_BAR, 3, 2);
        assert!(field.game_over());

        let mut field = field_with(TALL_BAR, 3, 6);
        // Raise the piece so two cells sit above the top row, then lock.
        field.active.y = 7;
        assert!(field.is_valid(0, 0));
        field.lock_and_clear();
        assert_eq!(field.board().filled_count(), 2);
    }

    #[test]
    fn test_line_clear_shifts_rows_down() {
        let mut field = field_with(SQUARE, 4, 6);
        for y in 0..2 {
            field.board_mut().set(2, y, Some(Color::Red));
            field.board_mut().set(3, y, Some(Color::Red));
        }
        field.board_mut().set(3, 2, Some(Color::Blue));

        // Square spawns at x=1 on rows 5..=4; slide it into the gap and drop it.
        assert!(field.try_move(-1, 0));
        assert_eq!(field.hard_drop(), 4);

        // Rows 0 and 1 cleared; the blue cell from row 2 fell two rows.
        assert_eq!(field.lines(), 2);
        assert_eq!(field.score(), 200);
        assert_eq!(
            field.board().row(0).unwrap(),
            &[None, None, None, Some(Color::Blue)]
        );
        assert_eq!(field.board().filled_count(), 1);
        assert!(field.board().row(5).unwrap().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_four_line_clear_tiered() {
        let config = FieldConfig::default()
            .with_catalog(only(TALL_BAR))
            .with_scoring(ScoringMode::Tiered);
        let mut field = Field::with_seed(config, 3).unwrap();
        for y in 0..4 {
            fill_row_except(field.board_mut(), y, 9);
        }
        field.board_mut().set(0, 4, Some(Color::Green));

        while field.try_move(1, 0) {}
        field.hard_drop();

        assert_eq!(field.lines(), 4);
        assert_eq!(field.score(), 800);
        // The lone cell from row 4 fell to the floor.
        assert_eq!(field.board().get(0, 0), Some(Some(Color::Green)));
        assert_eq!(field.board().filled_count(), 1);
    }

    #[test]
    fn test_four_line_clear_flat() {
        let config = FieldConfig::default().with_catalog(only(TALL_BAR));
        let mut field = Field::with_seed(config, 3).unwrap();
        for y in 0..4 {
            fill_row_except(field.board_mut(), y, 9);
        }

        while field.try_move(1, 0) {}
        field.hard_drop();
        assert_eq!(field.score(), 400);
    }

    #[test]
    fn test_spawn_into_stack_ends_game() {
        let mut field = field_with(BAR, 10, 20);
        for y in 0..20 {
            fill_row_except(field.board_mut(), y, 0);
        }
        assert!(!field.game_over());

        assert!(!field.spawn());
        assert!(field.game_over());
        assert_eq!(field.state(), FieldState::GameOver);
        assert!(field.active().is_none());
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut field = field_with(BAR, 10, 20);
        for y in 0..20 {
            fill_row_except(field.board_mut(), y, 0);
        }
        field.spawn();
        assert!(field.game_over());

        let board = field.board().clone();
        let score = field.score();
        let piece_id = field.piece_id();

        assert!(!field.advance_time(Duration::from_secs(10)));
        assert!(!field.try_move(0, -1));
        assert!(!field.rotate());
        assert_eq!(field.hard_drop(), 0);
        assert!(!field.apply(Command::HardDrop));
        assert!(!field.spawn());
        assert_eq!(field.lock_and_clear(), None);

        assert_eq!(field.board(), &board);
        assert_eq!(field.score(), score);
        assert_eq!(field.piece_id(), piece_id);
        assert_eq!(field.fall_accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_advance_time_steps_per_interval() {
        let mut field = field_with(SQUARE, 10, 20);

        assert!(!field.advance_time(Duration::from_millis(399)));
        assert_eq!(field.active().unwrap().y, 19);

        assert!(field.advance_time(Duration::from_millis(1)));
        assert_eq!(field.active().unwrap().y, 18);
        assert_eq!(field.fall_accumulator(), Duration::ZERO);

        // 2.5 intervals at once: two rows, half an interval banked.
        field.advance_time(Duration::from_millis(1000));
        assert_eq!(field.active().unwrap().y, 16);
        assert_eq!(field.fall_accumulator(), Duration::from_millis(200));
    }

    #[test]
    fn test_advance_time_locks_once_and_keeps_remainder() {
        let mut field = field_with(SQUARE, 10, 4);
        while field.try_move(-1, 0) {}

        // Five intervals banked: two steps reach the floor, the third locks,
        // and the remaining two intervals stay banked for the next piece.
        assert!(field.advance_time(Duration::from_millis(2000)));
        assert_eq!(field.piece_id(), 2);
        assert_eq!(field.board().filled_count(), 4);
        assert_eq!(field.fall_accumulator(), Duration::from_millis(800));
        assert_eq!(field.active().unwrap().y, 3);

        // The banked time drives the new piece on the next call.
        assert!(field.advance_time(Duration::ZERO));
        assert_eq!(field.active().unwrap().y, 1);
        assert_eq!(field.fall_accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_hard_drop_leaves_accumulator() {
        let mut field = field_with(SQUARE, 10, 20);
        field.advance_time(Duration::from_millis(150));
        assert_eq!(field.hard_drop(), 18);
        assert_eq!(field.fall_accumulator(), Duration::from_millis(150));
    }

    #[test]
    fn test_apply_dispatch() {
        let mut field = field_with(BAR, 10, 20);

        assert!(field.apply(Command::MoveLeft));
        assert_eq!(field.active().unwrap().x, 2);
        assert!(field.apply(Command::MoveRight));
        assert_eq!(field.active().unwrap().x, 3);
        assert!(field.apply(Command::SoftDrop));
        assert_eq!(field.active().unwrap().y, 18);
        assert!(field.apply(Command::Rotate));
        assert_eq!(field.active().unwrap().shape, TALL_BAR);
        assert!(field.apply(Command::HardDrop));
        assert_eq!(field.piece_id(), 2);
    }

    #[test]
    fn test_visible_cell_overlays_active() {
        let mut field = field_with(SQUARE, 4, 4);
        field.board_mut().set(0, 0, Some(Color::Red));

        assert_eq!(field.visible_cell(1, 3), Some(Color::Cyan));
        assert_eq!(field.visible_cell(2, 2), Some(Color::Cyan));
        assert_eq!(field.visible_cell(0, 0), Some(Color::Red));
        assert_eq!(field.visible_cell(0, 3), None);
        assert_eq!(field.visible_cell(-1, 0), None);
        // Overlay is never written into the grid.
        assert_eq!(field.board().filled_count(), 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut field = field_with(BAR, 10, 20);
        for y in 0..20 {
            fill_row_except(field.board_mut(), y, 0);
        }
        field.spawn();
        assert!(field.game_over());

        field.restart();
        assert!(!field.game_over());
        assert_eq!(field.board().filled_count(), 0);
        assert_eq!(field.score(), 0);
        assert_eq!(field.piece_id(), 1);
        assert!(field.active().is_some());
    }

    #[test]
    fn test_extreme_shifts_do_not_overflow() {
        let mut field = field_with(BAR, 10, 20);
        let before = *field.active().unwrap();

        assert!(!field.is_valid(i32::MAX, 0));
        assert!(!field.is_valid(i32::MIN, 0));
        assert!(!field.is_valid(0, i32::MIN));
        assert!(!field.try_move(i32::MAX, 0));
        assert!(!field.try_move(i32::MIN, i32::MIN));

        // Far above the top is open, but the anchor cannot move past i32::MAX.
        assert!(field.is_valid(0, i32::MAX));
        assert!(!field.try_move(0, i32::MAX));
        assert_eq!(field.active(), Some(&before));

        let cells = before.cells_at(i32::MAX, 0);
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|&cell| cell == (i32::MAX, 19)));
    }

    #[test]
    fn test_apply_moves_follow_command_deltas() {
        for command in [Command::MoveLeft, Command::MoveRight, Command::SoftDrop] {
            let mut field = field_with(SQUARE, 10, 20);
            let before = *field.active().unwrap();
            let (dx, dy) = command.delta().unwrap();

            assert!(field.apply(command));
            let after = field.active().unwrap();
            assert_eq!((after.x, after.y), (before.x + dx, before.y + dy));
        }
    }
}
