//! Shared tracing constants for the palisade build pipeline.
//!
//! The subscriber itself is wired by the CLI crate; this module only pins
//! down the target prefix so logs stay greppable across crates and test
//! output.

/// Target prefix used by all palisade tracing events.
///
/// Consumers can filter palisade logs with:
/// ```text
/// RUST_LOG=palisade=debug
/// ```
pub const TARGET_PREFIX: &str = "palisade";
