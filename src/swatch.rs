//! The `Color` swatch entity and its factory functions.
//!
//! A [`Color`] carries three representations of the same value (`hex`, `rgb`,
//! `hsl`) plus an opaque [`ColorId`] and a `locked` flag. The representations
//! are private and derived together, so a `Color` is never observable in a
//! partially-updated state.
//!
//! Two kinds of constructors exist:
//!
//! - Minting constructors ([`Color::new`], [`Color::random`], [`Color::adjusted`],
//!   [`Color::duplicate`]) produce a swatch with a fresh id.
//! - Editing constructors ([`Color::with_color`], [`Color::with_hsl`]) keep the
//!   id and lock flag of the swatch they start from.
//!
//! ```
//! use palette_studio::swatch::{Color, HslAdjustment};
//!
//! let red = Color::new("#ff0000");
//! assert_eq!(red.hex(), "#FF0000");
//!
//! let edited = red.with_hsl(HslAdjustment::new().hue(120));
//! assert_eq!(edited.id(), red.id());
//! assert_eq!(edited.hex(), "#00FF00");
//! ```

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::color::{Hsl, Rgb, contrast_ratio, hex_to_rgb};

/// Opaque, unique swatch identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(Uuid);

impl ColorId {
    /// Mint a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ColorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One palette swatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    id: ColorId,
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    locked: bool,
}

impl Color {
    /// Create an unlocked swatch from a hex string (malformed input gives black).
    #[must_use]
    pub fn new(hex: &str) -> Self {
        Self::from_hex(hex, false)
    }

    /// Create a swatch from a hex string with an explicit lock flag.
    #[must_use]
    pub fn from_hex(hex: &str, locked: bool) -> Self {
        Self::from_rgb(hex_to_rgb(hex), locked)
    }

    /// Create a swatch from an RGB triplet.
    #[must_use]
    pub fn from_rgb(rgb: Rgb, locked: bool) -> Self {
        Self::build(ColorId::new(), rgb, locked)
    }

    /// Create a swatch from HSL. The stored HSL is re-derived from the RGB value.
    #[must_use]
    pub fn from_hsl(hsl: Hsl, locked: bool) -> Self {
        Self::from_rgb(hsl.to_rgb(), locked)
    }

    /// Draw a uniformly random 24-bit color using the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Draw a uniformly random 24-bit color from `rng`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.random_range(0..=0x00FF_FFFF);
        Self::new(&format!("#{value:06X}"))
    }

    fn build(id: ColorId, rgb: Rgb, locked: bool) -> Self {
        Self {
            id,
            hex: rgb.hex_upper(),
            rgb,
            hsl: rgb.to_hsl(),
            locked,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ColorId {
        self.id
    }

    /// Canonical uppercase `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock this swatch. The color value is untouched.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Relative luminance of this swatch.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        self.rgb.luminance()
    }

    /// Contrast ratio against another swatch.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast_ratio(self.rgb, other.rgb)
    }

    /// New swatch (fresh id) with the given HSL overrides applied.
    ///
    /// The lock flag is carried over.
    #[must_use]
    pub fn adjusted(&self, adjustment: HslAdjustment) -> Self {
        Self::from_hsl(adjustment.apply(self.hsl), self.locked)
    }

    /// Same swatch (same id and lock flag) with a new color value.
    #[must_use]
    pub fn with_color(&self, hex: &str) -> Self {
        Self::build(self.id, hex_to_rgb(hex), self.locked)
    }

    /// Same swatch (same id and lock flag) with HSL overrides applied.
    #[must_use]
    pub fn with_hsl(&self, adjustment: HslAdjustment) -> Self {
        Self::build(self.id, adjustment.apply(self.hsl).to_rgb(), self.locked)
    }

    /// Copy of this color under a fresh id, unlocked.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::build(ColorId::new(), self.rgb, false)
    }

    /// True when both swatches hold the same color value, ignoring id and lock.
    #[must_use]
    pub fn same_color(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

/// Partial HSL override. Unset fields keep the input's value.
///
/// Hue wraps modulo 360; saturation and lightness clamp to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HslAdjustment {
    pub hue: Option<i32>,
    pub saturation: Option<i32>,
    pub lightness: Option<i32>,
}

impl HslAdjustment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hue: None,
            saturation: None,
            lightness: None,
        }
    }

    #[must_use]
    pub const fn hue(mut self, hue: i32) -> Self {
        self.hue = Some(hue);
        self
    }

    #[must_use]
    pub const fn saturation(mut self, saturation: i32) -> Self {
        self.saturation = Some(saturation);
        self
    }

    #[must_use]
    pub const fn lightness(mut self, lightness: i32) -> Self {
        self.lightness = Some(lightness);
        self
    }

    /// Apply the overrides to `base`.
    #[must_use]
    pub fn apply(&self, base: Hsl) -> Hsl {
        Hsl::from_signed(
            self.hue.unwrap_or_else(|| i32::from(base.hue)),
            self.saturation.unwrap_or_else(|| i32::from(base.saturation)),
            self.lightness.unwrap_or_else(|| i32::from(base.lightness)),
        )
    }
}
