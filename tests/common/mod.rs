//! Common test utilities and logging infrastructure
//!
//! This module provides structured logging for tests using the `tracing` crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing
//!
//! Note: Not all test utilities are used in every test module.

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use palette_studio::Color;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent: calling it from every test is safe.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("palette_studio=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Log test context information.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

/// Hex codes of a palette, in order.
pub fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.hex().to_string()).collect()
}

/// Build unlocked swatches from hex strings.
pub fn palette(hexes: &[&str]) -> Vec<Color> {
    hexes.iter().map(|h| Color::new(h)).collect()
}

/// Owned copies of expected hex codes, for comparing against [`hexes`].
pub fn owned(hexes: &[&str]) -> Vec<String> {
    hexes.iter().map(ToString::to_string).collect()
}
