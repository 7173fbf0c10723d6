//! The editing session: working palette, undo history and saved palettes.
//!
//! [`EditorSession`] is the single owner of all mutable editor state. Every
//! operation that changes the working palette commits exactly one snapshot to
//! the history. Lock toggling is the one exception: it changes a flag in
//! place without committing.
//!
//! ```
//! use palette_studio::config::SessionConfig;
//! use palette_studio::harmony::HarmonyScheme;
//! use palette_studio::session::EditorSession;
//!
//! let mut session = EditorSession::new(SessionConfig::new().seed(7)).unwrap();
//! let anchor = session.colors()[0].id();
//! session.toggle_lock(anchor).unwrap();
//!
//! session.regenerate_harmony(HarmonyScheme::Triadic);
//! assert_eq!(session.colors()[0].id(), anchor);
//!
//! assert!(session.undo());
//! assert!(!session.can_undo());
//! ```

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ConfigError, SessionConfig};
use crate::harmony::HarmonyScheme;
use crate::history::History;
use crate::metrics::{PaletteMetrics, calculate_palette_metrics};
use crate::palette::{Palette, PaletteId, PaletteLibrary};
use crate::regenerate::{regenerate_gradient, regenerate_harmony, regenerate_random, shuffle_unlocked};
use crate::swatch::{Color, ColorId, HslAdjustment};

/// Why an edit was refused. The session is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    AtMinimumSize { min: usize },
    AtMaximumSize { max: usize },
    UnknownColor(ColorId),
    IndexOutOfRange { index: usize, len: usize },
    UnknownPalette(PaletteId),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMinimumSize { min } => {
                write!(f, "palette already has the minimum of {min} colors")
            }
            Self::AtMaximumSize { max } => {
                write!(f, "palette already has the maximum of {max} colors")
            }
            Self::UnknownColor(id) => write!(f, "no color with id {id} in the palette"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a palette of {len} colors")
            }
            Self::UnknownPalette(id) => write!(f, "no saved palette with id {id}"),
        }
    }
}

impl std::error::Error for EditError {}

/// One user's editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: SessionConfig,
    colors: Vec<Color>,
    history: History<Vec<Color>>,
    library: PaletteLibrary,
    rng: StdRng,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::start(SessionConfig::default())
    }
}

impl EditorSession {
    /// Start a session with `config.initial_size` random colors.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` from [`SessionConfig::validate`].
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    /// Start a session on an existing palette.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Inconsistent` when `colors` does not fit the
    /// configured size bounds, or any error from [`SessionConfig::validate`].
    pub fn with_palette(config: SessionConfig, colors: Vec<Color>) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(config.min_colors..=config.max_colors).contains(&colors.len()) {
            return Err(ConfigError::Inconsistent(format!(
                "palette of {} colors is outside {}..={}",
                colors.len(),
                config.min_colors,
                config.max_colors
            )));
        }
        let rng = seeded_rng(config.seed);
        Ok(Self::assemble(config, colors, rng))
    }

    fn start(config: SessionConfig) -> Self {
        let mut rng = seeded_rng(config.seed);
        let colors = (0..config.initial_size)
            .map(|_| Color::random_with(&mut rng))
            .collect();
        Self::assemble(config, colors, rng)
    }

    fn assemble(config: SessionConfig, colors: Vec<Color>, rng: StdRng) -> Self {
        log::debug!("session started with {} colors", colors.len());
        Self {
            history: History::with_limit(colors.clone(), config.history_limit),
            config,
            colors,
            library: PaletteLibrary::new(),
            rng,
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn color(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn history(&self) -> &History<Vec<Color>> {
        &self.history
    }

    #[must_use]
    pub const fn library(&self) -> &PaletteLibrary {
        &self.library
    }

    /// Metrics for the working palette.
    #[must_use]
    pub fn metrics(&self) -> Option<PaletteMetrics> {
        calculate_palette_metrics(&self.colors)
    }

    fn commit(&mut self, colors: Vec<Color>, action: &str) {
        self.colors = colors;
        self.history.commit(self.colors.clone());
        log::debug!("{action}: palette now has {} colors", self.colors.len());
    }

    fn position(&self, id: ColorId) -> Result<usize, EditError> {
        self.colors
            .iter()
            .position(|c| c.id() == id)
            .ok_or(EditError::UnknownColor(id))
    }

    fn refuse<T>(err: EditError) -> Result<T, EditError> {
        log::warn!("edit refused: {err}");
        Err(err)
    }

    fn ensure_room(&self) -> Result<(), EditError> {
        if self.colors.len() >= self.config.max_colors {
            return Self::refuse(EditError::AtMaximumSize {
                max: self.config.max_colors,
            });
        }
        Ok(())
    }

    /// Append a color (`hex`, or a random one when `None`).
    ///
    /// # Errors
    ///
    /// `EditError::AtMaximumSize` when the palette is full.
    pub fn add_color(&mut self, hex: Option<&str>) -> Result<ColorId, EditError> {
        self.ensure_room()?;
        let color = match hex {
            Some(hex) => Color::new(hex),
            None => Color::random_with(&mut self.rng),
        };
        let id = color.id();
        let mut colors = self.colors.clone();
        colors.push(color);
        self.commit(colors, "add");
        Ok(id)
    }

    /// Remove a color by id.
    ///
    /// # Errors
    ///
    /// `EditError::AtMinimumSize` when the palette is already at its minimum,
    /// `EditError::UnknownColor` when `id` is not in the palette.
    pub fn remove_color(&mut self, id: ColorId) -> Result<Color, EditError> {
        if self.colors.len() <= self.config.min_colors {
            return Self::refuse(EditError::AtMinimumSize {
                min: self.config.min_colors,
            });
        }
        let index = self.position(id)?;
        let mut colors = self.colors.clone();
        let removed = colors.remove(index);
        self.commit(colors, "remove");
        Ok(removed)
    }

    /// Replace a swatch's color value, keeping its id and lock flag.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownColor` when `id` is not in the palette.
    pub fn update_color(&mut self, id: ColorId, hex: &str) -> Result<(), EditError> {
        let index = self.position(id)?;
        let mut colors = self.colors.clone();
        colors[index] = colors[index].with_color(hex);
        self.commit(colors, "update");
        Ok(())
    }

    /// Apply HSL overrides to a swatch, keeping its id and lock flag.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownColor` when `id` is not in the palette.
    pub fn adjust_color(&mut self, id: ColorId, adjustment: HslAdjustment) -> Result<(), EditError> {
        let index = self.position(id)?;
        let mut colors = self.colors.clone();
        colors[index] = colors[index].with_hsl(adjustment);
        self.commit(colors, "adjust");
        Ok(())
    }

    /// Insert a copy of a swatch (fresh id) right after it.
    ///
    /// # Errors
    ///
    /// `EditError::AtMaximumSize` when the palette is full,
    /// `EditError::UnknownColor` when `id` is not in the palette.
    pub fn duplicate_color(&mut self, id: ColorId) -> Result<ColorId, EditError> {
        self.ensure_room()?;
        let index = self.position(id)?;
        let copy = self.colors[index].duplicate();
        let copy_id = copy.id();
        let mut colors = self.colors.clone();
        colors.insert(index + 1, copy);
        self.commit(colors, "duplicate");
        Ok(copy_id)
    }

    /// Flip a swatch's lock flag and return the new value. Not recorded in history.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownColor` when `id` is not in the palette.
    pub fn toggle_lock(&mut self, id: ColorId) -> Result<bool, EditError> {
        let index = self.position(id)?;
        let color = &mut self.colors[index];
        color.set_locked(!color.is_locked());
        log::debug!("lock {id}: {}", color.is_locked());
        Ok(color.is_locked())
    }

    /// Move the swatch at `from` to index `to` (drag reorder).
    ///
    /// Moving a swatch onto its own index changes nothing and records nothing.
    ///
    /// # Errors
    ///
    /// `EditError::IndexOutOfRange` when either index is past the end.
    pub fn move_color(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        let len = self.colors.len();
        for index in [from, to] {
            if index >= len {
                return Self::refuse(EditError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let mut colors = self.colors.clone();
        let moved = colors.remove(from);
        colors.insert(to, moved);
        self.commit(colors, "move");
        Ok(())
    }

    /// Grow (with random colors) or shrink (from the end) to `size`.
    ///
    /// Returns false, changing nothing, when `size` is outside the configured
    /// bounds or equal to the current size.
    pub fn resize(&mut self, size: usize) -> bool {
        let bounds = self.config.min_colors..=self.config.max_colors;
        if !bounds.contains(&size) || size == self.colors.len() {
            log::debug!("resize to {size} ignored");
            return false;
        }
        let mut colors = self.colors.clone();
        if size < colors.len() {
            colors.truncate(size);
        } else {
            let rng = &mut self.rng;
            colors.extend((colors.len()..size).map(|_| Color::random_with(&mut *rng)));
        }
        self.commit(colors, "resize");
        true
    }

    /// Redraw every unlocked color at random.
    pub fn regenerate_random(&mut self) {
        let colors = regenerate_random(&self.colors, &mut self.rng);
        self.commit(colors, "regenerate random");
    }

    /// Refill unlocked colors from a harmony scheme.
    pub fn regenerate_harmony(&mut self, scheme: HarmonyScheme) {
        let colors = regenerate_harmony(&self.colors, scheme);
        self.commit(colors, scheme.name());
    }

    /// Refill unlocked colors from the configured default harmony scheme.
    pub fn regenerate_default_harmony(&mut self) {
        self.regenerate_harmony(self.config.default_scheme);
    }

    /// Refill unlocked colors from a gradient.
    pub fn regenerate_gradient(&mut self) {
        let colors = regenerate_gradient(&self.colors);
        self.commit(colors, "regenerate gradient");
    }

    /// Shuffle the unlocked colors among their own slots.
    pub fn shuffle(&mut self) {
        let colors = shuffle_unlocked(&self.colors, &mut self.rng);
        self.commit(colors, "shuffle");
    }

    /// Reverse the whole palette order, locked colors included.
    pub fn reverse(&mut self) {
        let colors = self.colors.iter().rev().cloned().collect();
        self.commit(colors, "reverse");
    }

    /// Restore the previous snapshot. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.colors = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot. Returns false when there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.colors = snapshot.clone();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Save a frozen copy of the working palette.
    pub fn save_palette(&mut self, name: impl Into<String>) -> PaletteId {
        self.library.save(name, &self.colors)
    }

    /// Replace the working palette with a saved one.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownPalette` when `id` is not saved.
    pub fn load_palette(&mut self, id: PaletteId) -> Result<(), EditError> {
        let Some(palette) = self.library.get(id) else {
            return Self::refuse(EditError::UnknownPalette(id));
        };
        let colors = palette.colors().to_vec();
        self.commit(colors, "load");
        Ok(())
    }

    /// Delete a saved palette.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownPalette` when `id` is not saved.
    pub fn delete_palette(&mut self, id: PaletteId) -> Result<Palette, EditError> {
        match self.library.remove(id) {
            Some(palette) => Ok(palette),
            None => Self::refuse(EditError::UnknownPalette(id)),
        }
    }

    /// Rename a saved palette.
    ///
    /// # Errors
    ///
    /// `EditError::UnknownPalette` when `id` is not saved.
    pub fn rename_palette(&mut self, id: PaletteId, name: impl Into<String>) -> Result<(), EditError> {
        if self.library.rename(id, name) {
            Ok(())
        } else {
            Self::refuse(EditError::UnknownPalette(id))
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
