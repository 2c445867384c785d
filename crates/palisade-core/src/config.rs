//! Build configuration file loading and minify-decision merging.
//!
//! Configuration lives in an optional `palisade.json` next to the input
//! documents. A missing or unreadable file silently falls back to defaults
//! (logged, non-fatal) so a fresh checkout builds with zero setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name of the optional project config file.
pub const CONFIG_FILE_NAME: &str = "palisade.json";

/// Default watch-mode debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Root of the build configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Minification toggles.
    pub minify: MinifyConfig,
    /// Watch-mode tuning.
    pub watch: WatchConfig,
}

impl BuildConfig {
    /// Load the config file, falling back to defaults on any failure.
    ///
    /// Both a missing file and a malformed one produce the default config;
    /// the malformed case is logged so authors notice the typo.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "could not parse config file, using defaults"
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Per-artifact minification switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Master switch. Default: off.
    pub enabled: bool,
    /// Minify the stylesheet when enabled. Default: on.
    pub css: bool,
    /// Minify the client script when enabled. Default: on.
    pub js: bool,
    /// Minify the generated page when enabled. Default: on.
    pub html: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            css: true,
            js: true,
            html: true,
        }
    }
}

impl MinifyConfig {
    /// Resolve the master switch against CLI flags.
    ///
    /// Precedence: `--minify` > `--no-minify` > config value > default off.
    #[must_use]
    pub const fn effective_enabled(&self, cli: MinifyOverride) -> bool {
        match cli {
            MinifyOverride::ForceOn => true,
            MinifyOverride::ForceOff => false,
            MinifyOverride::UseConfig => self.enabled,
        }
    }
}

/// Watch-mode tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Debounce window between the last filesystem event and the rebuild.
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// CLI-level minification override, parsed from `--minify` / `--no-minify`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinifyOverride {
    /// `--minify`: force on regardless of config.
    ForceOn,
    /// `--no-minify`: force off, overriding the config file.
    ForceOff,
    /// Neither flag given: follow the config file.
    #[default]
    UseConfig,
}
