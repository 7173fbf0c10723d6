//! Harmony scheme synthesis.
//!
//! [`generate_harmony`] turns one base swatch into a run of related swatches
//! following one of six [`HarmonyScheme`]s. Slot 0 always repeats the base
//! color; later slots rotate the hue by scheme-specific angles and, past the
//! scheme's natural number of hues, fall back to filler formulas that nudge
//! hue, saturation and lightness.
//!
//! Hue offsets wrap modulo 360. Saturation and lightness limits are hard
//! clamps.

use std::fmt;
use std::str::FromStr;

use crate::color::Hsl;
use crate::swatch::Color;

/// A rule relating hues by fixed angular offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HarmonyScheme {
    /// Base plus its opposite hue.
    #[default]
    Complementary,
    /// Neighbouring hues spaced 30° apart, centered on the base.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Base plus the two neighbours of its complement.
    SplitComplementary,
    /// Four hues 90° apart.
    Tetradic,
    /// One hue, varying lightness and saturation.
    Monochromatic,
}

impl HarmonyScheme {
    /// Every scheme, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    /// Identifier used by collaborators (`"split-complementary"` etc).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Number of hues the scheme defines before filler slots kick in.
    #[must_use]
    pub const fn natural_size(&self) -> usize {
        match self {
            Self::Complementary => 2,
            Self::Triadic | Self::SplitComplementary => 3,
            Self::Tetradic => 4,
            Self::Analogous | Self::Monochromatic => 1,
        }
    }

    /// HSL for slot `index >= 1` of a run of `count` colors around `base`.
    fn slot(self, base: Hsl, index: usize, count: usize) -> Hsl {
        let h = i64::from(base.hue);
        let s = i64::from(base.saturation);
        let l = i64::from(base.lightness);
        let i = to_i64(index);

        match (self, index) {
            (Self::Complementary, 1) => wrap(h + 180, s, l),
            (Self::Complementary, _) => {
                let sign = if index % 2 == 0 { 1 } else { -1 };
                let step = 15 * (i / 2);
                wrap(h + sign * step, s, (l + i * 10 - 20).clamp(20, 80))
            }

            (Self::Analogous, _) => wrap(h + 30 * i - 15 * to_i64(count), s, l),

            (Self::Triadic, 1) => wrap(h + 120, s, l),
            (Self::Triadic, 2) => wrap(h + 240, s, l),
            (Self::Triadic, _) => wrap(h + 60 * i, (s - 20).max(20), l.clamp(30, 70)),

            (Self::SplitComplementary, 1) => wrap(h + 150, s, l),
            (Self::SplitComplementary, 2) => wrap(h + 210, s, l),
            (Self::SplitComplementary, _) => wrap(h + 30 * i, s, l.clamp(30, 70)),

            (Self::Tetradic, 1) => wrap(h + 90, s, l),
            (Self::Tetradic, 2) => wrap(h + 180, s, l),
            (Self::Tetradic, 3) => wrap(h + 270, s, l),
            (Self::Tetradic, _) => {
                wrap(h + 45 * i, (s - 10).max(20), (l + 10).clamp(30, 70))
            }

            (Self::Monochromatic, _) => {
                let saturation = if index % 2 == 0 { s + 10 } else { s - 10 };
                wrap(
                    h,
                    saturation.clamp(10, 100),
                    monochrome_lightness(l, index, count).clamp(10, 90),
                )
            }
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == normalized)
            .ok_or_else(|| UnknownSchemeError(s.to_string()))
    }
}

/// Error for an unrecognized harmony scheme identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSchemeError(pub String);

impl fmt::Display for UnknownSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown harmony scheme: {}", self.0)
    }
}

impl std::error::Error for UnknownSchemeError {}

/// Generate exactly `count` colors harmonizing with `base`.
///
/// The first color repeats `base` (same value, fresh id, unlocked). Every
/// generated swatch goes through [`Color::from_hsl`], so its stored HSL is
/// re-derived from its RGB value and may differ from the requested triple by
/// rounding.
///
/// ```
/// use palette_studio::harmony::{HarmonyScheme, generate_harmony};
/// use palette_studio::swatch::Color;
///
/// let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Complementary, 2);
/// let hexes: Vec<&str> = colors.iter().map(Color::hex).collect();
/// assert_eq!(hexes, ["#FF0000", "#00FFFF"]);
/// ```
#[must_use]
pub fn generate_harmony(base: &Color, scheme: HarmonyScheme, count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }

    let hsl = base.hsl();
    let mut colors = Vec::with_capacity(count);
    colors.push(Color::from_rgb(base.rgb(), false));
    colors.extend((1..count).map(|index| Color::from_hsl(scheme.slot(hsl, index, count), false)));
    colors
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `l + (index - count / 2) * 15`, with the half-step rounded up.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "palette indices are tiny; the result is clamped by the caller"
)]
fn monochrome_lightness(l: i64, index: usize, count: usize) -> i64 {
    let offset = (index as f64 - count as f64 / 2.0) * 15.0;
    (l as f64 + offset).round() as i64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "hue is reduced modulo 360 and percentages are clamped first"
)]
fn wrap(hue: i64, saturation: i64, lightness: i64) -> Hsl {
    Hsl::from_signed(
        hue.rem_euclid(360) as i32,
        saturation.clamp(0, 100) as i32,
        lightness.clamp(0, 100) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Color]) -> String {
        colors.iter().map(Color::hex).collect::<Vec<_>>().join(" ")
    }

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b);
        d.min(360 - d)
    }

    #[test]
    fn test_scheme_names_roundtrip() {
        for scheme in HarmonyScheme::ALL {
            assert_eq!(scheme.name().parse::<HarmonyScheme>(), Ok(scheme));
            assert_eq!(scheme.to_string(), scheme.name());
        }
        assert_eq!(
            " Split-Complementary ".parse::<HarmonyScheme>(),
            Ok(HarmonyScheme::SplitComplementary)
        );
    }

    #[test]
    fn test_unknown_scheme() {
        let err = "pentadic".parse::<HarmonyScheme>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown harmony scheme: pentadic");
    }

    #[test]
    fn test_lengths_for_every_scheme() {
        let base = Color::new("#3A7BD5");
        for scheme in HarmonyScheme::ALL {
            for count in 0..=10 {
                assert_eq!(generate_harmony(&base, scheme, count).len(), count);
            }
        }
    }

    #[test]
    fn test_first_slot_repeats_base() {
        let base = Color::from_hex("#C0FFEE", true);
        for scheme in HarmonyScheme::ALL {
            let colors = generate_harmony(&base, scheme, 4);
            assert_eq!(colors[0].hex(), base.hex());
            assert_ne!(colors[0].id(), base.id());
            assert!(!colors[0].is_locked());
        }
    }

    #[test]
    fn test_complementary_red() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Complementary, 2);
        insta::assert_snapshot!(hexes(&colors), @"#FF0000 #00FFFF");
    }

    #[test]
    fn test_triadic_red() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Triadic, 3);
        insta::assert_snapshot!(hexes(&colors), @"#FF0000 #00FF00 #0000FF");
    }

    #[test]
    fn test_truncates_natural_scheme() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Tetradic, 2);
        assert_eq!(colors.len(), 2);
        assert!(hue_distance(colors[1].hsl().hue, 90) <= 1);
    }

    #[test]
    fn test_complementary_fillers_alternate_around_base() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Complementary, 6);
        let expected_hues = [0, 180, 15, 345, 30, 330];
        for (color, hue) in colors.iter().zip(expected_hues) {
            assert!(
                hue_distance(color.hsl().hue, hue) <= 1,
                "{} has hue {}, expected {hue}",
                color.hex(),
                color.hsl().hue
            );
        }
        // Lightness ramp l + (i * 10 - 20), clamped to [20, 80].
        assert!(colors[3].hsl().lightness.abs_diff(60) <= 1);
        assert!(colors[5].hsl().lightness.abs_diff(80) <= 1);
    }

    #[test]
    fn test_analogous_offsets_are_centered() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Analogous, 4);
        // hue + 30 * (i - count / 2) for i >= 1
        for (color, hue) in colors.iter().zip([0, 330, 0, 30]) {
            assert!(hue_distance(color.hsl().hue, hue) <= 1);
        }
    }

    #[test]
    fn test_triadic_fillers_desaturate() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Triadic, 5);
        assert!(hue_distance(colors[3].hsl().hue, 180) <= 1);
        assert!(hue_distance(colors[4].hsl().hue, 240) <= 1);
        assert!(colors[3].hsl().saturation.abs_diff(80) <= 1);
    }

    #[test]
    fn test_split_complementary_hues() {
        let colors =
            generate_harmony(&Color::new("#FF0000"), HarmonyScheme::SplitComplementary, 4);
        for (color, hue) in colors.iter().zip([0, 150, 210, 90]) {
            assert!(hue_distance(color.hsl().hue, hue) <= 1);
        }
    }

    #[test]
    fn test_tetradic_fillers() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Tetradic, 6);
        for (color, hue) in colors.iter().zip([0, 90, 180, 270, 180, 225]) {
            assert!(hue_distance(color.hsl().hue, hue) <= 1);
        }
        assert!(colors[4].hsl().lightness.abs_diff(60) <= 1);
        assert!(colors[4].hsl().saturation.abs_diff(90) <= 1);
    }

    #[test]
    fn test_monochromatic_keeps_hue_and_ramps_lightness() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Monochromatic, 5);
        for color in &colors {
            assert!(hue_distance(color.hsl().hue, 0) <= 1);
        }
        // 50 + (i - 2.5) * 15 for i = 1..5, rounded half up
        for (color, lightness) in colors.iter().skip(1).zip([28, 43, 58, 73]) {
            assert!(color.hsl().lightness.abs_diff(lightness) <= 1);
        }
    }

    fn lightness(colors: &[Color]) -> Vec<u8> {
        colors.iter().map(|c| c.hsl().lightness).collect()
    }

    fn assert_close(actual: &[u8], expected: &[u8]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.abs_diff(*e) <= 1, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn test_monochromatic_saturation_alternates_by_parity() {
        let colors = generate_harmony(&Color::new("#FF0000"), HarmonyScheme::Monochromatic, 5);
        let saturation: Vec<u8> = colors.iter().map(|c| c.hsl().saturation).collect();
        // Even slots add 10 (capped at 100), odd slots subtract 10.
        assert_close(&saturation, &[100, 90, 100, 90, 100]);

        let grey = generate_harmony(&Color::new("#808080"), HarmonyScheme::Monochromatic, 5);
        let saturation: Vec<u8> = grey.iter().skip(1).map(|c| c.hsl().saturation).collect();
        assert_close(&saturation, &[10, 10, 10, 10]);
    }

    #[test]
    fn test_complementary_lightness_clamps() {
        // l = 10: fillers would drop to 10 and 20 before the floor of 20.
        let dark = generate_harmony(&Color::new("#330000"), HarmonyScheme::Complementary, 5);
        assert_close(&lightness(&dark), &[10, 10, 20, 20, 30]);

        // l = 95: fillers cap at 80.
        let light = generate_harmony(&Color::new("#FFE5E5"), HarmonyScheme::Complementary, 5);
        assert_close(&lightness(&light), &[95, 95, 80, 80, 80]);
    }

    #[test]
    fn test_triadic_filler_lightness_clamps() {
        let light = generate_harmony(&Color::new("#FFE5E5"), HarmonyScheme::Triadic, 5);
        assert_close(&lightness(&light), &[95, 95, 95, 70, 70]);

        let dark = generate_harmony(&Color::new("#330000"), HarmonyScheme::Triadic, 5);
        assert_close(&lightness(&dark), &[10, 10, 10, 30, 30]);
        assert!(dark[3].hsl().saturation.abs_diff(80) <= 1);
    }

    #[test]
    fn test_split_complementary_filler_lightness_clamps() {
        let light = generate_harmony(&Color::new("#FFE5E5"), HarmonyScheme::SplitComplementary, 5);
        assert_close(&lightness(&light), &[95, 95, 95, 70, 70]);

        let dark = generate_harmony(&Color::new("#330000"), HarmonyScheme::SplitComplementary, 5);
        assert_close(&lightness(&dark), &[10, 10, 10, 30, 30]);
    }

    #[test]
    fn test_clamps_are_floors_not_wraps() {
        let dark = Color::new("#0A0000");
        let colors = generate_harmony(&dark, HarmonyScheme::Monochromatic, 10);
        for color in colors.iter().skip(1) {
            assert!(color.hsl().lightness >= 9);
            assert!(color.hsl().lightness <= 91);
        }
    }
}
