//! Catalog module - the shape sets pieces are drawn from
//!
//! Each entry pairs a shape with its color, so picking an entry can never pair a shape
//! with the wrong color. The basic set holds the seven tetrominoes; the extended set used
//! on Hard adds a five-long bar and a U shape.

use std::borrow::Cow;

use crate::config::ConfigError;
use crate::rng::Randomizer;
use crate::shape::Shape;
use crate::types::{CatalogKind, Color};

/// One drawable piece: its name, spawn shape and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub shape: Shape,
    pub color: Color,
}

impl CatalogEntry {
    pub const fn new(name: &'static str, shape: Shape, color: Color) -> Self {
        Self { name, shape, color }
    }
}

const I: CatalogEntry = CatalogEntry::new("I", Shape::from_matrix([[1, 1, 1, 1]]), Color::Cyan);
const T: CatalogEntry =
    CatalogEntry::new("T", Shape::from_matrix([[1, 1, 1], [0, 1, 0]]), Color::Purple);
const L: CatalogEntry =
    CatalogEntry::new("L", Shape::from_matrix([[1, 1, 1], [1, 0, 0]]), Color::Orange);
const J: CatalogEntry =
    CatalogEntry::new("J", Shape::from_matrix([[1, 1, 1], [0, 0, 1]]), Color::Blue);
const O: CatalogEntry = CatalogEntry::new("O", Shape::from_matrix([[1, 1], [1, 1]]), Color::Yellow);
const S: CatalogEntry =
    CatalogEntry::new("S", Shape::from_matrix([[0, 1, 1], [1, 1, 0]]), Color::Green);
const Z: CatalogEntry =
    CatalogEntry::new("Z", Shape::from_matrix([[1, 1, 0], [0, 1, 1]]), Color::Red);
const I5: CatalogEntry =
    CatalogEntry::new("I5", Shape::from_matrix([[1, 1, 1, 1, 1]]), Color::Pink);
const U: CatalogEntry =
    CatalogEntry::new("U", Shape::from_matrix([[1, 0, 1], [1, 1, 1]]), Color::Brown);

static BASIC_ENTRIES: [CatalogEntry; 7] = [I, T, L, J, O, S, Z];

static EXTENDED_ENTRIES: [CatalogEntry; 9] = [I, T, L, J, O, S, Z, I5, U];

/// Fixed, ordered, non-empty sequence of entries; an entry's index is its shape id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Cow<'static, [CatalogEntry]>,
}

impl Catalog {
    /// Custom catalog; fails on an empty entry list or an entry with no occupied cells
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        let catalog = Self {
            entries: Cow::Owned(entries),
        };
        catalog.check()?;
        Ok(catalog)
    }

    /// Every entry must be drawable: at least one entry, and every shape non-blank
    ///
    /// A blank shape fits everywhere, so it would fall forever and never lock.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.entries.iter().any(|entry| entry.shape.cell_count() == 0) {
            return Err(ConfigError::EmptyShape);
        }
        Ok(())
    }

    /// I, T, L, J, O, S, Z
    pub fn basic() -> Self {
        Self {
            entries: Cow::Borrowed(&BASIC_ENTRIES),
        }
    }

    /// Basic set plus I5 and U
    pub fn extended() -> Self {
        Self {
            entries: Cow::Borrowed(&EXTENDED_ENTRIES),
        }
    }

    pub fn for_kind(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Basic => Self::basic(),
            CatalogKind::Extended => Self::extended(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, shape_id: usize) -> Option<&CatalogEntry> {
        self.entries.get(shape_id)
    }

    /// Look an entry up by name (case-sensitive)
    pub fn find(&self, name: &str) -> Option<(usize, &CatalogEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == name)
    }

    /// Uniformly pick one entry, returning its shape id alongside it
    pub fn pick_random<R: Randomizer + ?Sized>(&self, rng: &mut R) -> (usize, &CatalogEntry) {
        let shape_id = rng.next_below(self.entries.len() as u32) as usize;
        (shape_id, &self.entries[shape_id])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::basic()
    }
}
