//! Core field simulation - pure, deterministic, and testable
//!
//! This crate holds the whole falling-block rule set: shapes, catalogs, the grid,
//! gravity, locking, line clears and scoring. It has no dependencies on rendering,
//! input, or I/O, so a terminal front end, a GUI, or a headless bot can all drive it.
//!
//! - **Deterministic**: each field owns a seedable random source
//! - **Total**: illegal moves report `false` and leave state unchanged; only
//!   construction can fail
//! - **Independent**: fields share nothing mutable, so duel fields never step in lockstep
//!
//! # Module Structure
//!
//! - [`shape`]: immutable occupancy matrices and clockwise rotation
//! - [`catalog`]: basic and extended shape sets with their colors
//! - [`rng`]: the [`Randomizer`] trait and a seedable LCG
//! - [`board`]: grid of locked cells with line clearing
//! - [`scoring`]: flat and tiered line-clear points
//! - [`config`]: field parameters and [`ConfigError`]
//! - [`field`]: one player's simulation
//! - [`snapshot`]: composited read-only views for renderers
//! - [`session`]: solo, duel and coop composition
//!
//! # Rules
//!
//! - Pieces spawn centered on the top row, drawn uniformly from the catalog
//! - Rotation is clockwise and in place; a blocked rotation is simply refused
//! - A piece that cannot fall locks immediately, full rows clear, the next piece spawns
//! - A spawn that collides ends the game; nothing changes afterwards
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tetris_pp_core::{Field, FieldConfig};
//! use tetris_pp_core::types::Command;
//!
//! let mut field = Field::with_seed(FieldConfig::default(), 12345).unwrap();
//!
//! field.apply(Command::MoveLeft);
//! field.apply(Command::Rotate);
//! field.advance_time(Duration::from_millis(16));
//! field.apply(Command::HardDrop);
//!
//! assert_eq!(field.piece_id(), 2);
//! assert!(!field.game_over());
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod field;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use tetris_pp_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{Catalog, CatalogEntry};
pub use config::{ConfigError, FieldConfig};
pub use field::{ActivePiece, Field, FieldState, LockEvent};
pub use rng::{Randomizer, SimpleRng};
pub use scoring::line_clear_score;
pub use session::Session;
pub use shape::{rotate_cw, Shape};
pub use snapshot::{ActiveSnapshot, FieldSnapshot};
