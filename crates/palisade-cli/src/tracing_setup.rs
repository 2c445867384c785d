//! Tracing subscriber initialization for the palisade binary.
//!
//! Wires CLI flags (`--verbose`, `--quiet`, `--no-color`) and environment
//! variables (`PALISADE_LOG`, `RUST_LOG`) into a single `tracing-subscriber`
//! stack writing to stderr.
//!
//! # Priority (highest to lowest)
//!
//! 1. `PALISADE_LOG` env var (per-target directives, e.g. `palisade=debug,warn`)
//! 2. `RUST_LOG` env var (standard fallback)
//! 3. CLI flags (`-v` → debug, `-q` → error)
//! 4. Default: `warn`, with palisade's own targets at `info` so build
//!    summaries reach the terminal.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use palisade_core::tracing_config;

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet` / `-q`: only errors.
    Quiet,
    /// Default: build summaries and warnings.
    Normal,
    /// `--verbose` / `-v`: debug-level output.
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from the parsed CLI flags.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        // If both are set, verbose wins (more information is safer for debugging).
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Map to a default `tracing::Level` for non-palisade targets.
    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before config loading so that config-parsing
/// traces are captured.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (double-init).
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let filter = build_env_filter(verbosity);

    let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let use_ansi = !no_color && stderr_is_tty;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    // Verbose mode: timestamps and full formatting for diagnostics.
    // Normal/quiet: compact output without timestamps.
    if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time().compact())
            .init();
    }
}

/// Build an `EnvFilter` respecting the priority chain:
/// `PALISADE_LOG` > `RUST_LOG` > CLI verbosity default.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // PALISADE_LOG first (project-specific). An unparseable value falls
    // through to RUST_LOG / default rather than failing hard.
    if let Ok(directives) = std::env::var("PALISADE_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    let prefix = tracing_config::TARGET_PREFIX;
    let directive = match verbosity {
        // Keep build summaries visible by default; everything else at warn.
        Verbosity::Normal => format!("{level},{prefix}=info"),
        Verbosity::Verbose => format!("{level},{prefix}=debug"),
        Verbosity::Quiet => level.to_string(),
    };

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags_default() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn verbosity_from_flags_both_prefers_verbose() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn default_level_mapping() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn build_env_filter_produces_valid_filter() {
        // Ensure the fallback path doesn't panic.
        let _filter = build_env_filter(Verbosity::Normal);
        let _filter = build_env_filter(Verbosity::Verbose);
        let _filter = build_env_filter(Verbosity::Quiet);
    }

    // init_subscriber can only be called once per process, so it is covered
    // by the e2e harness rather than unit tests.
}
