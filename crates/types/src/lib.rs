//! Shared types and constants for the falling-block field engine
//!
//! Everything in here is plain data with no dependencies, so it can be used by the
//! simulation core, a renderer, or an input layer without pulling in anything else.
//!
//! # Field Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FIELD_WIDTH` | 10 | Solo and duel fields |
//! | `DEFAULT_FIELD_HEIGHT` | 20 | All modes |
//! | `COOP_FIELD_WIDTH` | 20 | Shared double-width field |
//!
//! Rows are indexed bottom-up: row 0 is the floor, row `height - 1` is the topmost
//! storable row. Columns are indexed left to right.
//!
//! # Fall Intervals by Difficulty
//!
//! | Difficulty | Interval | Catalog |
//! |------------|----------|---------|
//! | Easy | 700ms | basic |
//! | Normal | 400ms | basic |
//! | Hard | 250ms | extended |
//!
//! # Examples
//!
//! ```
//! use tetris_pp_types::{Command, Difficulty, GameMode, ScoringMode, DEFAULT_FIELD_WIDTH};
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(GameMode::Coop.field_width(), 2 * DEFAULT_FIELD_WIDTH);
//! assert_eq!(ScoringMode::from_str("tiered"), Some(ScoringMode::Tiered));
//! ```

/// Field width in cells for solo and duel play
pub const DEFAULT_FIELD_WIDTH: u16 = 10;

/// Field height in cells
pub const DEFAULT_FIELD_HEIGHT: u16 = 20;

/// Width of the shared cooperative field
pub const COOP_FIELD_WIDTH: u16 = DEFAULT_FIELD_WIDTH * 2;

/// Largest row or column count a shape may have
pub const MAX_SHAPE_SIDE: usize = 5;

/// Upper bound on occupied cells in one shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Frame interval used by drivers in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval on Easy
pub const EASY_FALL_MS: u32 = 700;

/// Fall interval on Normal
pub const NORMAL_FALL_MS: u32 = 400;

/// Fall interval on Hard
pub const HARD_FALL_MS: u32 = 250;

/// Points per cleared line under flat scoring
pub const FLAT_LINE_SCORE: u32 = 100;

/// Tiered scoring table, indexed by `min(lines, 4) - 1`
pub const TIERED_LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Block colors, one per catalog entry
///
/// The basic set uses the first seven; the extended set adds `Pink` and `Brown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Purple,
    Orange,
    Blue,
    Yellow,
    Green,
    Red,
    Pink,
    Brown,
}

impl Color {
    /// All colors in catalog order
    pub const ALL: [Color; 9] = [
        Color::Cyan,
        Color::Purple,
        Color::Orange,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::Red,
        Color::Pink,
        Color::Brown,
    ];

    /// Single-character tag used by text renderers
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_types::Color;
    ///
    /// assert_eq!(Color::Cyan.symbol(), 'c');
    /// assert_eq!(Color::Brown.symbol(), 'b');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Color::Cyan => 'c',
            Color::Purple => 'p',
            Color::Orange => 'o',
            Color::Blue => 'u',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Pink => 'k',
            Color::Brown => 'b',
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(Color)`: locked by a piece of that color
pub type Cell = Option<Color>;

/// Discrete player commands forwarded by an input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Descend one row
    SoftDrop,
    /// Rotate 90° clockwise in place
    Rotate,
    /// Descend until blocked, then lock
    HardDrop,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotate" | "up" => Some(Command::Rotate),
            "harddrop" | "drop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
        }
    }

    /// Grid delta for the single-step moves, `None` for the rest
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, -1)),
            Command::Rotate | Command::HardDrop => None,
        }
    }
}

/// How cleared lines turn into points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringMode {
    /// `100 × lines`
    #[default]
    Flat,
    /// `{100, 300, 500, 800}` by lines cleared at once, capped at four
    Tiered,
}

impl ScoringMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(ScoringMode::Flat),
            "tiered" | "tier" => Some(ScoringMode::Tiered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Flat => "flat",
            ScoringMode::Tiered => "tiered",
        }
    }
}

/// Which built-in shape set a field draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatalogKind {
    /// I, T, L, J, O, S, Z
    #[default]
    Basic,
    /// Basic plus the five-long bar and the U shape
    Extended,
}

/// Difficulty presets offered by the game menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pp_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Normal"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Milliseconds between gravity steps
    pub fn fall_interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => EASY_FALL_MS,
            Difficulty::Normal => NORMAL_FALL_MS,
            Difficulty::Hard => HARD_FALL_MS,
        }
    }

    /// Shape set used at this difficulty
    pub fn catalog(&self) -> CatalogKind {
        match self {
            Difficulty::Easy | Difficulty::Normal => CatalogKind::Basic,
            Difficulty::Hard => CatalogKind::Extended,
        }
    }
}

/// How many fields a session runs and how wide they are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One standard field
    #[default]
    Solo,
    /// Two independent standard fields
    Duel,
    /// One double-width field shared by two players
    Coop,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solo" | "single" => Some(GameMode::Solo),
            "duel" | "versus" => Some(GameMode::Duel),
            "coop" | "co-op" => Some(GameMode::Coop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Solo => "solo",
            GameMode::Duel => "duel",
            GameMode::Coop => "coop",
        }
    }

    /// Number of simulation instances in a session of this mode
    pub fn field_count(&self) -> usize {
        match self {
            GameMode::Solo | GameMode::Coop => 1,
            GameMode::Duel => 2,
        }
    }

    /// Column count of each field in this mode
    pub fn field_width(&self) -> u16 {
        match self {
            GameMode::Solo | GameMode::Duel => DEFAULT_FIELD_WIDTH,
            GameMode::Coop => COOP_FIELD_WIDTH,
        }
    }
}
