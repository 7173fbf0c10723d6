//! Editor session configuration.
//!
//! Defaults reproduce the stock tool: 20 undo steps, palettes of 2 to 10
//! colors, 5 colors on start, complementary harmony. Values can be set with
//! builder methods or loaded from a small `.ini` file:
//!
//! ```ini
//! [session]
//! history_limit = 30
//! initial_size = 6
//! default_scheme = triadic
//! seed = 1234
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::harmony::HarmonyScheme;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Smallest palette the editor allows.
pub const MIN_PALETTE_SIZE: usize = 2;
/// Largest palette the editor allows.
pub const MAX_PALETTE_SIZE: usize = 10;

/// Settings for an [`crate::session::EditorSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub history_limit: usize,
    pub min_colors: usize,
    pub max_colors: usize,
    pub initial_size: usize,
    pub default_scheme: HarmonyScheme,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_colors: MIN_PALETTE_SIZE,
            max_colors: MAX_PALETTE_SIZE,
            initial_size: 5,
            default_scheme: HarmonyScheme::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots kept for undo.
    #[must_use]
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Inclusive bounds on the working palette size.
    #[must_use]
    pub fn size_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_colors = min;
        self.max_colors = max;
        self
    }

    /// Number of random colors a fresh session starts with.
    #[must_use]
    pub fn initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    #[must_use]
    pub fn default_scheme(mut self, scheme: HarmonyScheme) -> Self {
        self.default_scheme = scheme;
        self
    }

    /// Seed the session RNG for reproducible regeneration.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the bounds are coherent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Inconsistent` unless
    /// `2 <= min_colors <= initial_size <= max_colors <= 10` and `history_limit >= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Inconsistent(
                "history_limit must be at least 1".to_string(),
            ));
        }
        if self.min_colors < MIN_PALETTE_SIZE {
            return Err(ConfigError::Inconsistent(format!(
                "min_colors must be at least {MIN_PALETTE_SIZE}, got {}",
                self.min_colors
            )));
        }
        if self.max_colors > MAX_PALETTE_SIZE {
            return Err(ConfigError::Inconsistent(format!(
                "max_colors must be at most {MAX_PALETTE_SIZE}, got {}",
                self.max_colors
            )));
        }
        if !(self.min_colors..=self.max_colors).contains(&self.initial_size) {
            return Err(ConfigError::Inconsistent(format!(
                "initial_size {} is outside {}..={}",
                self.initial_size, self.min_colors, self.max_colors
            )));
        }
        Ok(())
    }

    /// Parse a `.ini` config string (reads the `[session]` section).
    ///
    /// Blank lines and lines starting with `#` or `;` are ignored. Keys are
    /// case-insensitive and may be separated from values by `=` or `:`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for malformed lines, duplicate or unknown keys,
    /// unparsable values, a missing `[session]` section, or bounds that fail
    /// [`SessionConfig::validate`].
    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut in_session = false;
        let mut seen_session_section = false;
        let mut seen_keys: Vec<String> = Vec::new();

        for (line_no, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let section_name = line[1..line.len() - 1].trim();
                in_session = section_name.eq_ignore_ascii_case("session");
                if in_session {
                    seen_session_section = true;
                }
                continue;
            }

            if !in_session {
                continue;
            }

            let (name, value) = line
                .split_once('=')
                .or_else(|| line.split_once(':'))
                .ok_or_else(|| ConfigError::InvalidLine {
                    line_no: line_no + 1,
                    line: raw_line.to_string(),
                })?;

            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(ConfigError::InvalidLine {
                    line_no: line_no + 1,
                    line: raw_line.to_string(),
                });
            }
            if seen_keys.contains(&name) {
                return Err(ConfigError::DuplicateKey {
                    line_no: line_no + 1,
                    name,
                });
            }

            config.apply(&name, value.trim())?;
            seen_keys.push(name);
        }

        if !seen_session_section {
            return Err(ConfigError::MissingSessionSection);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a `.ini` config file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise any
    /// error from [`SessionConfig::from_ini_str`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|err| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            err,
        })?;
        Self::from_ini_str(&contents)
    }

    fn apply(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let number = || value.parse::<usize>().map_err(|_| invalid());

        match name {
            "history_limit" => self.history_limit = number()?,
            "min_colors" => self.min_colors = number()?,
            "max_colors" => self.max_colors = number()?,
            "initial_size" => self.initial_size = number()?,
            "default_scheme" => {
                self.default_scheme = value.parse().map_err(|_| invalid())?;
            }
            "seed" => self.seed = Some(value.parse::<u64>().map_err(|_| invalid())?),
            _ => {
                return Err(ConfigError::UnknownKey {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Errors returned while loading or validating a [`SessionConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: std::path::PathBuf,
        err: std::io::Error,
    },
    MissingSessionSection,
    InvalidLine {
        line_no: usize,
        line: String,
    },
    DuplicateKey {
        line_no: usize,
        name: String,
    },
    UnknownKey {
        name: String,
    },
    InvalidValue {
        name: String,
        value: String,
    },
    Inconsistent(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, err } => {
                write!(f, "failed to read config file {}: {err}", path.display())
            }
            Self::MissingSessionSection => write!(f, "config ini is missing a [session] section"),
            Self::InvalidLine { line_no, line } => {
                write!(f, "invalid config ini line {line_no}: {line:?}")
            }
            Self::DuplicateKey { line_no, name } => {
                write!(f, "duplicate config key {name:?} at line {line_no}")
            }
            Self::UnknownKey { name } => write!(f, "unknown config key {name:?}"),
            Self::InvalidValue { name, value } => {
                write!(f, "invalid value {value:?} for config key {name:?}")
            }
            Self::Inconsistent(reason) => write!(f, "inconsistent config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            _ => None,
        }
    }
}
