//! Config module - field construction parameters and their validation
//!
//! Misconfiguration is the only failure the engine reports: it is caught once, when a
//! field is built, and every later operation is total.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::types::{Difficulty, ScoringMode, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

/// Rejected construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field width must be positive")]
    ZeroWidth,
    #[error("field height must be positive")]
    ZeroHeight,
    #[error("fall interval must be positive")]
    ZeroFallInterval,
    #[error("catalog has no entries")]
    EmptyCatalog,
    #[error("shape must be 1..=5 rows by 1..=5 columns, got {rows}x{cols}")]
    ShapeSize { rows: usize, cols: usize },
    #[error("shape row {row} has a different length than row 0")]
    RaggedShape { row: usize },
    #[error("invalid character '{0}' in shape")]
    ShapeChar(char),
    #[error("shape has no occupied cells")]
    EmptyShape,
}

/// Parameters fixed for a field's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: u16,
    pub height: u16,
    pub fall_interval: Duration,
    pub catalog: Arc<Catalog>,
    pub scoring: ScoringMode,
}

impl FieldConfig {
    /// Standard 10x20 field with the difficulty's speed and shape set
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::default()
            .with_fall_interval(Duration::from_millis(u64::from(difficulty.fall_interval_ms())))
            .with_catalog(Catalog::for_kind(difficulty.catalog()))
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fall_interval(mut self, fall_interval: Duration) -> Self {
        self.fall_interval = fall_interval;
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check every parameter, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        self.catalog.check()
    }
}

impl Default for FieldConfig {
    /// 10x20, Normal speed, basic shapes, flat scoring
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            fall_interval: Duration::from_millis(u64::from(Difficulty::Normal.fall_interval_ms())),
            catalog: Arc::new(Catalog::basic()),
            scoring: ScoringMode::Flat,
        }
    }
}
