//! Palette-level statistics and WCAG contrast classification.
//!
//! Everything here is read-only over a palette snapshot.

use std::fmt;

use crate::color::{Rgb, contrast_ratio};
use crate::swatch::{Color, ColorId};

/// Coarse WCAG classification of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibilityLevel {
    /// Ratio of at least 4.5: body text passes AA.
    Aa,
    /// Ratio of at least 3: large text passes AA.
    AaLarge,
    /// Fails both thresholds.
    Low,
}

impl AccessibilityLevel {
    pub const AA_THRESHOLD: f64 = 4.5;
    pub const AA_LARGE_THRESHOLD: f64 = 3.0;

    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_contrast(ratio: f64) -> Self {
        if ratio >= Self::AA_THRESHOLD {
            Self::Aa
        } else if ratio >= Self::AA_LARGE_THRESHOLD {
            Self::AaLarge
        } else {
            Self::Low
        }
    }

    /// Label shown by the accessibility panel.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Low => "Bajo",
        }
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate statistics over a palette of at least two colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteMetrics {
    /// Mean saturation, rounded to an integer percent.
    pub avg_saturation: u8,
    /// Mean lightness, rounded to an integer percent.
    pub avg_lightness: u8,
    /// `max(hue) - min(hue)` over raw degrees. Not a circular distance.
    pub hue_range: u16,
    pub min_contrast: f64,
    pub max_contrast: f64,
    pub avg_contrast: f64,
    /// Classification of `max_contrast`.
    pub accessibility: AccessibilityLevel,
}

/// Contrast between one unordered pair of palette entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPair {
    pub first: ColorId,
    pub second: ColorId,
    pub first_index: usize,
    pub second_index: usize,
    pub ratio: f64,
    pub level: AccessibilityLevel,
}

/// Every unordered pair `(i, j)` with `i < j`, in index order.
#[must_use]
pub fn contrast_pairs(colors: &[Color]) -> Vec<ContrastPair> {
    let mut pairs = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1) / 2);
    for (i, a) in colors.iter().enumerate() {
        for (j, b) in colors.iter().enumerate().skip(i + 1) {
            let ratio = a.contrast_ratio(b);
            pairs.push(ContrastPair {
                first: a.id(),
                second: b.id(),
                first_index: i,
                second_index: j,
                ratio,
                level: AccessibilityLevel::from_contrast(ratio),
            });
        }
    }
    pairs
}

/// Compute palette metrics, or `None` when fewer than two colors are given.
#[must_use]
pub fn calculate_palette_metrics(colors: &[Color]) -> Option<PaletteMetrics> {
    if colors.len() < 2 {
        return None;
    }

    let pairs = contrast_pairs(colors);
    let ratios = pairs.iter().map(|p| p.ratio);
    let min_contrast = ratios.clone().fold(f64::INFINITY, f64::min);
    let max_contrast = ratios.clone().fold(f64::NEG_INFINITY, f64::max);
    #[expect(clippy::cast_precision_loss, reason = "at most a few dozen pairs")]
    let avg_contrast = ratios.sum::<f64>() / pairs.len() as f64;

    let hues = colors.iter().map(|c| c.hsl().hue);
    let hue_range = hues.clone().max().unwrap_or(0) - hues.min().unwrap_or(0);

    Some(PaletteMetrics {
        avg_saturation: rounded_mean(colors.iter().map(|c| c.hsl().saturation)),
        avg_lightness: rounded_mean(colors.iter().map(|c| c.hsl().lightness)),
        hue_range,
        min_contrast,
        max_contrast,
        avg_contrast,
        accessibility: AccessibilityLevel::from_contrast(max_contrast),
    })
}

/// Black or white, whichever reads better on `background`.
#[must_use]
pub fn readable_text_color(background: &Color) -> Rgb {
    let bg = background.rgb();
    if contrast_ratio(bg, Rgb::WHITE) >= contrast_ratio(bg, Rgb::BLACK) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Integer mean of percentages, rounded half up.
fn rounded_mean(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, n) = values.fold((0u64, 0u64), |(sum, n), v| (sum + u64::from(v), n + 1));
    if n == 0 {
        return 0;
    }
    u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(100)
}
