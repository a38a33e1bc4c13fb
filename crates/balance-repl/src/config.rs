//! REPL configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/balance/config.toml` when present, or from
//! an explicit `--config` path. Every key is optional:
//!
//! ```toml
//! prompt = "balance> "
//! history = true
//! color = "auto"   # "auto" | "always" | "never"
//! ```

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::paths;

/// Prompt shown before each interactive line.
pub const DEFAULT_PROMPT: &str = "Enter a string to validate (or \"exit\" to quit): ";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against the current process environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Settings for the `balance` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    pub prompt: String,
    /// Read and write `history.txt` in interactive mode.
    pub history: bool,
    pub color: ColorChoice,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history: true,
            color: ColorChoice::Auto,
        }
    }
}

impl ReplConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if it exists, otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = paths::config_file();
        if path.is_file() {
            Self::from_file(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }
}
