//! Saved palette snapshots and the in-memory library that holds them.
//!
//! A [`Palette`] owns its own copies of the colors it was saved with, so later
//! edits to the working palette never reach it.

use std::fmt;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::swatch::Color;

/// Opaque saved-palette identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteId(Uuid);

impl PaletteId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaletteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, timestamped, frozen copy of a working palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    id: PaletteId,
    name: String,
    colors: Vec<Color>,
    created_at: OffsetDateTime,
}

impl Palette {
    /// Snapshot `colors` under `name`, stamped with the current UTC time.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: &[Color]) -> Self {
        Self {
            id: PaletteId::new(),
            name: name.into(),
            colors: colors.to_vec(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PaletteId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Hex codes in palette order.
    #[must_use]
    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(Color::hex).collect()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.hexes().join(", "))
    }
}

/// Saved palettes, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteLibrary {
    palettes: Vec<Palette>,
}

impl PaletteLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a frozen copy of `colors` and return its id.
    pub fn save(&mut self, name: impl Into<String>, colors: &[Color]) -> PaletteId {
        let palette = Palette::new(name, colors);
        let id = palette.id();
        log::debug!("saved palette {id} ({:?}, {} colors)", palette.name(), colors.len());
        self.palettes.push(palette);
        id
    }

    #[must_use]
    pub fn get(&self, id: PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Remove and return a saved palette.
    pub fn remove(&mut self, id: PaletteId) -> Option<Palette> {
        let position = self.palettes.iter().position(|p| p.id == id)?;
        Some(self.palettes.remove(position))
    }

    /// Rename a saved palette. Returns false when `id` is unknown.
    pub fn rename(&mut self, id: PaletteId, name: impl Into<String>) -> bool {
        match self.palettes.iter_mut().find(|p| p.id == id) {
            Some(palette) => {
                palette.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
