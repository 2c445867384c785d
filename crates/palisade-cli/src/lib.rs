//! Build driver and watch mode for the palisade site generator.
//!
//! The binary in `main.rs` is a thin shell over this crate: parse flags,
//! initialize tracing, load config, run one build, and optionally keep
//! watching.

pub mod cli;
pub mod pipeline;
pub mod tracing_setup;
pub mod watch;

pub use cli::{parse_cli_args, CliInput, USAGE};
pub use pipeline::{run_build, BuildOptions, BuildSummary};
pub use tracing_setup::{init_subscriber, Verbosity};
pub use watch::{run_watch, Debouncer, WATCH_EXTENSIONS};
