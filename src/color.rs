//! Color space conversions and contrast math.
//!
//! Everything in this module is a pure function over plain values: hex
//! strings, [`Rgb`] triplets and [`Hsl`] triples. Nothing here holds state,
//! so the rest of the crate can call into it freely.
//!
//! # Examples
//!
//! ## Hex and RGB
//!
//! ```
//! use palette_studio::color::{Rgb, hex_to_rgb, rgb_to_hex};
//!
//! let orange = hex_to_rgb("#ff8800");
//! assert_eq!(orange, Rgb::new(255, 136, 0));
//! assert_eq!(rgb_to_hex(orange), "#ff8800");
//!
//! // Malformed input degrades to black instead of failing.
//! assert_eq!(hex_to_rgb("not a color"), Rgb::BLACK);
//! ```
//!
//! ## HSL
//!
//! ```
//! use palette_studio::color::{Hsl, hex_to_hsl};
//!
//! assert_eq!(hex_to_hsl("#FF0000"), Hsl::new(0, 100, 50));
//! ```
//!
//! ## Contrast
//!
//! ```
//! use palette_studio::color::{Rgb, contrast_ratio};
//!
//! let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
//! assert!((ratio - 21.0).abs() < 1e-9);
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Weights of the linear channels in relative luminance.
const LUMINANCE_WEIGHTS: (f64, f64, f64) = (0.2126, 0.7152, 0.0722);

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb` (lowercase digits).
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns the canonical uppercase hex form `#RRGGBB`.
    #[must_use]
    pub fn hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness in `[0, 100]`.
    #[must_use]
    pub fn to_hsl_precise(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = f64::midpoint(max, min);

        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, lightness * 100.0);
        }

        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = if (max - r).abs() < f64::EPSILON {
            (g - b) / delta + (if g < b { 6.0 } else { 0.0 })
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (hue * 60.0, saturation * 100.0, lightness * 100.0)
    }

    /// Convert to integer HSL (rounded).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "components are rounded values inside [0, 360] and [0, 100]"
    )]
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = self.to_hsl_precise();
        Hsl::new(h.round() as u16, s.round() as u8, l.round() as u8)
    }

    /// Inverse of [`Rgb::to_hsl_precise`].
    ///
    /// Hue wraps modulo 360; saturation and lightness are clamped to `[0, 100]`.
    #[must_use]
    pub fn from_hsl_precise(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        if s.abs() < f64::EPSILON {
            let v = unit_to_channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            unit_to_channel(hue_to_unit(p, q, h + 1.0 / 3.0)),
            unit_to_channel(hue_to_unit(p, q, h)),
            unit_to_channel(hue_to_unit(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Relative luminance (WCAG 2.x), in `[0, 1]`.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let (wr, wg, wb) = LUMINANCE_WEIGHTS;
        wr * linearize(self.red) + wg * linearize(self.green) + wb * linearize(self.blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_color(s)
    }
}

/// Integer HSL triple: hue in degrees `[0, 360)`, saturation and lightness as
/// percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Create an HSL triple. Hue wraps modulo 360, the percentages saturate at 100.
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: if saturation > 100 { 100 } else { saturation },
            lightness: if lightness > 100 { 100 } else { lightness },
        }
    }

    /// Build from signed components: hue wraps, saturation/lightness clamp.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "values are wrapped or clamped into range first"
    )]
    pub fn from_signed(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self::new(
            hue.rem_euclid(360) as u16,
            saturation.clamp(0, 100) as u8,
            lightness.clamp(0, 100) as u8,
        )
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_hsl_precise(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
    InvalidRgb(String),
    InvalidHsl(String),
    UnknownFormat(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
            Self::InvalidRgb(s) => write!(f, "Invalid RGB color: {s}"),
            Self::InvalidHsl(s) => write!(f, "Invalid HSL color: {s}"),
            Self::UnknownFormat(s) => write!(f, "Unknown color format: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
});

/// Parse a 6-digit hex color (`#` optional, case-insensitive).
///
/// # Errors
///
/// Returns `ColorParseError::Empty` for an empty string and
/// `ColorParseError::InvalidHex` for anything that is not exactly six hex digits.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    if hex.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let invalid = || ColorParseError::InvalidHex(hex.to_string());
    let caps = HEX_RE.captures(hex).ok_or_else(invalid)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());

    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Parse a hex color, degrading to black on malformed input.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_else(|err| {
        log::trace!("{err}; degrading to black");
        Rgb::BLACK
    })
}

/// Encode a triplet as `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.hex()
}

/// Convert RGB to rounded integer HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert integer HSL to RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Parse a hex color straight to HSL (malformed input yields black's HSL).
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    hex_to_rgb(hex).to_hsl()
}

/// Relative luminance of a triplet.
#[must_use]
pub fn luminance(rgb: Rgb) -> f64 {
    rgb.luminance()
}

/// WCAG contrast ratio `(L_max + 0.05) / (L_min + 0.05)`, in `[1, 21]`.
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse a CSS-ish color string.
///
/// Supported formats:
/// - Hex: `#RRGGBB`, `RRGGBB`, shorthand `#RGB`
/// - RGB: `rgb(255, 0, 0)`
/// - HSL: `hsl(0, 100%, 50%)` (percent signs optional)
///
/// # Errors
///
/// Returns a `ColorParseError` describing which format was recognized but
/// malformed, or `UnknownFormat` when nothing matched.
pub fn parse_css_color(input: &str) -> Result<Rgb, ColorParseError> {
    static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
            .expect("valid regex")
    });
    static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%?\s*,\s*(\d{1,3})%?\s*\)$")
            .expect("valid regex")
    });

    let color = input.trim().to_lowercase();
    if color.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = color.strip_prefix('#')
        && hex.len() == 3
    {
        let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
        return parse_hex(&expanded).map_err(|_| ColorParseError::InvalidHex(color.clone()));
    }

    if HEX_RE.is_match(&color) {
        return parse_hex(&color);
    }
    if color.starts_with('#') {
        return Err(ColorParseError::InvalidHex(color));
    }

    if let Some(caps) = RGB_RE.captures(&color) {
        let channel = |i: usize| caps[i].parse::<u8>().ok();
        return match (channel(1), channel(2), channel(3)) {
            (Some(r), Some(g), Some(b)) => Ok(Rgb::new(r, g, b)),
            _ => Err(ColorParseError::InvalidRgb(color.clone())),
        };
    }

    if let Some(caps) = HSL_RE.captures(&color) {
        let component = |i: usize| caps[i].parse::<u16>().ok();
        return match (component(1), component(2), component(3)) {
            (Some(h), Some(s), Some(l)) if h <= 360 && s <= 100 && l <= 100 => {
                Ok(Rgb::from_hsl_precise(f64::from(h), f64::from(s), f64::from(l)))
            }
            _ => Err(ColorParseError::InvalidHsl(color.clone())),
        };
    }

    Err(ColorParseError::UnknownFormat(color))
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn hue_to_unit(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to [0, 255] before the cast"
)]
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
