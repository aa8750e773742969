//! Tetris++ (workspace facade crate).
//!
//! Re-exports the simulation core and shared types under `tetris_pp::{core, types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use tetris_pp_core as core;
pub use tetris_pp_types as types;

pub mod run_config;
