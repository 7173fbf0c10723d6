//! Lock-aware bulk regeneration.
//!
//! Each function takes a palette snapshot and returns a new one of the same
//! length. Entries marked locked come back byte-identical and at the same
//! index; only unlocked slots are redrawn or permuted.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::gradient::generate_gradient_palette;
use crate::harmony::{HarmonyScheme, generate_harmony};
use crate::swatch::Color;

/// Redraw every unlocked slot with an independent random color.
#[must_use]
pub fn regenerate_random<R: Rng + ?Sized>(colors: &[Color], rng: &mut R) -> Vec<Color> {
    colors
        .iter()
        .map(|color| {
            if color.is_locked() {
                color.clone()
            } else {
                Color::random_with(&mut *rng)
            }
        })
        .collect()
}

/// Refill unlocked slots from a harmony of the palette's anchor color.
///
/// The anchor is the first locked color, or slot 0 when nothing is locked.
/// A locked anchor keeps its own slot, so the harmony's leading repeat of it
/// is skipped and the remaining harmony colors fill the unlocked slots in
/// order.
#[must_use]
pub fn regenerate_harmony(colors: &[Color], scheme: HarmonyScheme) -> Vec<Color> {
    let Some(first) = colors.first() else {
        return Vec::new();
    };
    let anchor = colors.iter().find(|color| color.is_locked());

    let mut generated = generate_harmony(anchor.unwrap_or(first), scheme, colors.len()).into_iter();
    if anchor.is_some() {
        generated.next();
    }

    fill_unlocked(colors, generated)
}

/// Refill unlocked slots from an RGB gradient.
///
/// With two or more locked colors the gradient runs from the first locked
/// color to the last; otherwise it runs from the palette's first entry to
/// its last. Slot `i` takes gradient color `i`.
#[must_use]
pub fn regenerate_gradient(colors: &[Color]) -> Vec<Color> {
    let (Some(first), Some(last)) = (colors.first(), colors.last()) else {
        return Vec::new();
    };

    let mut locked = colors.iter().filter(|color| color.is_locked());
    let (start, end) = match (locked.next(), locked.next_back()) {
        (Some(a), Some(b)) => (a, b),
        _ => (first, last),
    };

    let ramp = generate_gradient_palette(start, end, colors.len());
    colors
        .iter()
        .zip(ramp)
        .map(|(color, step)| if color.is_locked() { color.clone() } else { step })
        .collect()
}

/// Fisher–Yates shuffle restricted to the unlocked subsequence.
#[must_use]
pub fn shuffle_unlocked<R: Rng + ?Sized>(colors: &[Color], rng: &mut R) -> Vec<Color> {
    let mut pool: Vec<Color> = colors.iter().filter(|c| !c.is_locked()).cloned().collect();
    pool.shuffle(rng);
    fill_unlocked(colors, pool.into_iter())
}

/// Keep locked entries in place and take the unlocked ones from `fresh`.
fn fill_unlocked(colors: &[Color], mut fresh: impl Iterator<Item = Color>) -> Vec<Color> {
    colors
        .iter()
        .map(|color| {
            if color.is_locked() {
                color.clone()
            } else {
                fresh.next().unwrap_or_else(|| color.clone())
            }
        })
        .collect()
}
