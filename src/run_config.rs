//! Settings for the headless driver, read from `TETRIS_PP_*` environment variables.

use crate::types::{Difficulty, GameMode, ScoringMode};

/// Frames simulated when `TETRIS_PP_FRAMES` is unset (one minute at 60 FPS)
pub const DEFAULT_FRAMES: u32 = 3_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub scoring: ScoringMode,
    /// `None` means pick one at random
    pub seed: Option<u32>,
    pub frames: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            difficulty: Difficulty::Normal,
            scoring: ScoringMode::Flat,
            seed: None,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mode = get("TETRIS_PP_MODE")
            .and_then(|s| GameMode::from_str(&s))
            .unwrap_or(defaults.mode);
        let difficulty = get("TETRIS_PP_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);
        let scoring = get("TETRIS_PP_SCORING")
            .and_then(|s| ScoringMode::from_str(&s))
            .unwrap_or(defaults.scoring);
        let seed = get("TETRIS_PP_SEED").and_then(|s| s.parse().ok());
        let frames = get("TETRIS_PP_FRAMES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.frames);

        Self {
            mode,
            difficulty,
            scoring,
            seed,
            frames,
        }
    }
}
