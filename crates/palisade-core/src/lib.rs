//! Core types and build plumbing for the palisade site generator.
//!
//! This crate defines the framework domain model (`Framework`, `FocusArea`,
//! `Subcategory`, `Control`), the schema validator that gates every build,
//! input-document version selection, the build configuration file, and the
//! error taxonomy (`BuildError`) shared across all palisade crates.
//!
//! It has minimal external dependencies and is depended on by every other
//! crate in the workspace.

pub mod config;
pub mod error;
pub mod model;
pub mod tracing_config;
pub mod validate;
pub mod version;

pub use config::{BuildConfig, MinifyConfig, MinifyOverride, WatchConfig, CONFIG_FILE_NAME};
pub use error::{BuildError, BuildResult};
pub use model::{Contributors, Control, FocusArea, Framework, Subcategory};
pub use validate::{validate, ValidationReport};
pub use version::{find_input_document, newest_candidate, VersionTriple, INPUT_FILE_PREFIX};
