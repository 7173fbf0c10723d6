//! # palette_studio
//!
//! Color model and palette-generation engine for a palette design tool.
//!
//! This crate is the computational core behind the editor UI: conversions
//! between hex, RGB and HSL, harmony-scheme synthesis, RGB gradients, WCAG
//! contrast scoring, and a bounded undo/redo history that respects locked
//! colors during every regenerative operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use palette_studio::prelude::*;
//!
//! let mut session = EditorSession::new(SessionConfig::new().seed(42)).unwrap();
//! let first = session.colors()[0].id();
//! session.toggle_lock(first).unwrap();
//! session.regenerate_harmony(HarmonyScheme::Analogous);
//!
//! let metrics = session.metrics().unwrap();
//! println!("best contrast: {:.2} ({})", metrics.max_contrast, metrics.accessibility);
//! ```
//!
//! ## Core Concepts
//!
//! - **Rgb / Hsl**: plain color triples and the pure conversions between them
//! - **Color**: a swatch with an id, consistent hex/RGB/HSL, and a lock flag
//! - **HarmonyScheme**: rules for deriving related colors from a base
//! - **History**: bounded linear undo/redo over whole-palette snapshots
//! - **EditorSession**: owns the working palette, its history and saved palettes

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod swatch;
pub mod harmony;
pub mod gradient;
pub mod metrics;
pub mod history;
pub mod regenerate;
pub mod palette;
pub mod config;
pub mod session;
pub mod logging;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{
        ColorParseError, Hsl, Rgb, contrast_ratio, hex_to_hsl, hex_to_rgb, hsl_to_rgb,
        luminance, parse_css_color, parse_hex, rgb_to_hex, rgb_to_hsl,
    };
    pub use crate::config::{ConfigError, SessionConfig};
    pub use crate::gradient::generate_gradient_palette;
    pub use crate::harmony::{HarmonyScheme, generate_harmony};
    pub use crate::history::History;
    pub use crate::metrics::{
        AccessibilityLevel, ContrastPair, PaletteMetrics, calculate_palette_metrics,
        contrast_pairs, readable_text_color,
    };
    pub use crate::palette::{Palette, PaletteId, PaletteLibrary};
    pub use crate::regenerate::{
        regenerate_gradient, regenerate_harmony, regenerate_random, shuffle_unlocked,
    };
    pub use crate::session::{EditError, EditorSession};
    pub use crate::swatch::{Color, ColorId, HslAdjustment};
}

// Re-export key types at crate root
pub use color::{Hsl, Rgb};
pub use harmony::HarmonyScheme;
pub use history::History;
pub use session::EditorSession;
pub use swatch::{Color, ColorId};
