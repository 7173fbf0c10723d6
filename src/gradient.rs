//! Linear RGB gradients between two swatches.

use num_rational::Ratio;

use crate::color::Rgb;
use crate::swatch::Color;

/// Interpolate `steps` colors from `start` to `end` in RGB space.
///
/// Channel `i` is `A + (B - A) * i / (steps - 1)`, computed exactly and
/// rounded half up, so the first and last colors reproduce the endpoints.
/// Every color is a fresh, unlocked swatch. `steps == 1` yields just the
/// start color and `steps == 0` yields nothing.
///
/// ```
/// use palette_studio::gradient::generate_gradient_palette;
/// use palette_studio::swatch::Color;
///
/// let ramp = generate_gradient_palette(&Color::new("#000000"), &Color::new("#FFFFFF"), 3);
/// let hexes: Vec<&str> = ramp.iter().map(Color::hex).collect();
/// assert_eq!(hexes, ["#000000", "#808080", "#FFFFFF"]);
/// ```
#[must_use]
pub fn generate_gradient_palette(start: &Color, end: &Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![Color::new(start.hex())],
        _ => {
            let (a, b) = (start.rgb(), end.rgb());
            let last = to_i64(steps - 1);
            (0..steps)
                .map(|i| {
                    let t = to_i64(i);
                    let rgb = Rgb::new(
                        lerp_channel(a.red, b.red, t, last),
                        lerp_channel(a.green, b.green, t, last),
                        lerp_channel(a.blue, b.blue, t, last),
                    );
                    Color::new(&rgb.hex())
                })
                .collect()
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn lerp_channel(from: u8, to: u8, step: i64, last: i64) -> u8 {
    let from = i64::from(from);
    let to = i64::from(to);
    let value = Ratio::from_integer(from) + Ratio::new((to - from) * step, last);
    u8::try_from(value.round().to_integer().clamp(0, 255)).unwrap_or_default()
}
