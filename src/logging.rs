//! Plain-text logger for the `log` facade.
//!
//! The library itself only emits records through `log` macros (history
//! commits, session edits, refused operations). [`PaletteLogger`] is a small
//! `Log` implementation a host application can install to see them:
//!
//! ```no_run
//! use log::LevelFilter;
//! use palette_studio::logging::PaletteLogger;
//!
//! PaletteLogger::stderr()
//!     .level(LevelFilter::Debug)
//!     .init()
//!     .expect("logger installed once");
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Line-oriented logger writing to any `Write` sink.
///
/// # Thread Safety
///
/// The sink sits behind a mutex with poison recovery, so records from several
/// threads never interleave within a line.
pub struct PaletteLogger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
}

impl PaletteLogger {
    /// Create a logger writing to `sink` with default settings.
    #[must_use]
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| empty_time_format());
        Self {
            sink: Mutex::new(Box::new(sink)),
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: true,
            time_format,
        }
    }

    /// Logger writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the `target:` prefix.
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format. Invalid descriptions keep the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if another logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }
        if self.show_level {
            line.push_str(&format!("{:<5} ", record.level()));
        }
        if self.show_target {
            line.push_str(record.target());
            line.push_str(": ");
        }
        line.push_str(&record.args().to_string());
        line
    }
}

/// A format description that renders nothing.
fn empty_time_format() -> OwnedFormatItem {
    OwnedFormatItem::Compound(Box::default())
}

impl Log for PaletteLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut sink = lock_recover(&self.sink);
        // A failed log write has nowhere better to go.
        let _ = writeln!(sink, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}
