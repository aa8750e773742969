//! Session module - one game made of one or two fields
//!
//! Solo runs one standard field, duel two independent standard fields, coop one
//! double-width field shared by both players. Fields never share state: each gets its
//! own random stream derived from the session seed and advances on its own.

use std::time::Duration;

use log::info;

use crate::config::{ConfigError, FieldConfig};
use crate::field::Field;
use crate::rng::SimpleRng;
use crate::types::{Difficulty, GameMode, ScoringMode, DEFAULT_FIELD_HEIGHT};

#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    difficulty: Difficulty,
    seed: u32,
    episode_id: u32,
    fields: Vec<Field>,
}

impl Session {
    pub fn new(
        mode: GameMode,
        difficulty: Difficulty,
        scoring: ScoringMode,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self::field_config(mode, difficulty, scoring);
        let fields = (0..mode.field_count())
            .map(|i| Field::with_seed(config.clone(), SimpleRng::derive(seed, i as u32)))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "starting {} session on {} (seed {})",
            mode.as_str(),
            difficulty.as_str(),
            seed
        );

        Ok(Self {
            mode,
            difficulty,
            seed,
            episode_id: 0,
            fields,
        })
    }

    /// Per-field configuration for a mode and difficulty
    pub fn field_config(
        mode: GameMode,
        difficulty: Difficulty,
        scoring: ScoringMode,
    ) -> FieldConfig {
        FieldConfig::for_difficulty(difficulty)
            .with_size(mode.field_width(), DEFAULT_FIELD_HEIGHT)
            .with_scoring(scoring)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Monotonic episode id (increments on restart)
    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn field(&self, player: usize) -> Option<&Field> {
        self.fields.get(player)
    }

    pub fn field_mut(&mut self, player: usize) -> Option<&mut Field> {
        self.fields.get_mut(player)
    }

    /// Advance every field by the same frame time
    pub fn advance_time(&mut self, dt: Duration) {
        for field in &mut self.fields {
            field.advance_time(dt);
        }
    }

    /// True once every field has topped out
    pub fn is_over(&self) -> bool {
        self.fields.iter().all(|field| field.game_over())
    }

    /// Best score across fields
    pub fn high_score(&self) -> u32 {
        self.fields.iter().map(|field| field.score()).max().unwrap_or(0)
    }

    /// Reset every field; each keeps its random stream
    pub fn restart(&mut self) {
        for field in &mut self.fields {
            field.restart();
        }
        self.episode_id = self.episode_id.wrapping_add(1);
    }
}
