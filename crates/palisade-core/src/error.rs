use std::path::PathBuf;

/// Unified error type covering all failure modes of a palisade build.
///
/// Every variant carries enough context for the top-level handler to print a
/// single clear failure line without inspecting nested causes. All variants
/// are build-fatal except where the driver explicitly demotes them: favicon
/// copies fail per-file with a logged warning, a missing or unreadable config
/// file falls back to defaults, and watch mode logs rebuild failures and
/// keeps watching.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No versioned framework document exists in the scanned directory.
    #[error(
        "No framework document found in {dir}. Expected files matching framework-v<major>.<minor>.<patch>.json."
    )]
    NoInputFound {
        /// Directory that was scanned.
        dir: PathBuf,
    },

    /// The chosen framework document is not valid JSON.
    #[error("Failed to read or parse framework document {path}: {detail}")]
    Parse {
        /// Path of the document that failed to parse.
        path: PathBuf,
        /// The underlying syntax or I/O error, rendered.
        detail: String,
    },

    /// Schema validation produced at least one error.
    ///
    /// Carries the full error and warning lists; validation never stops
    /// early, so every problem in the document is reported at once.
    #[error("Framework validation failed with {} error(s)", errors.len())]
    ValidationFailed {
        /// All accumulated validation errors.
        errors: Vec<String>,
        /// All accumulated validation warnings (never fatal on their own).
        warnings: Vec<String>,
    },

    /// A template file could not be read. Fatal for the whole build.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        /// Path of the missing or unreadable template.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required static asset (stylesheet, client script) is missing.
    #[error("Required asset not found: {path}")]
    AssetMissing {
        /// Expected asset path.
        path: PathBuf,
    },

    /// Writing an output artifact failed.
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        /// Destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output directory tree could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreate {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A CLI flag or config value is malformed.
    #[error("Invalid configuration: {field} = {value}: {reason}")]
    Config {
        /// Dotted config path or flag name.
        field: String,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The filesystem watch backend failed to start or emitted a fatal error.
    #[error("Watch mode error: {reason}")]
    Watch {
        /// What went wrong in the watch backend.
        reason: String,
    },
}

/// Convenience alias used by every fallible palisade operation.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::BuildError;
    use std::path::PathBuf;

    #[test]
    fn validation_failed_message_reports_error_count() {
        let error = BuildError::ValidationFailed {
            errors: vec!["a".to_owned(), "b".to_owned()],
            warnings: vec![],
        };
        assert!(error.to_string().contains("2 error(s)"));
    }

    #[test]
    fn no_input_found_names_the_expected_pattern() {
        let error = BuildError::NoInputFound {
            dir: PathBuf::from("/tmp/project"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/project"));
        assert!(message.contains("framework-v"));
    }
}
