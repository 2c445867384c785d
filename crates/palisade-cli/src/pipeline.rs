//! The build driver: input discovery through written artifacts.
//!
//! One [`run_build`] call performs a full, from-scratch build:
//!
//! 1. discover the newest versioned framework document,
//! 2. parse it as JSON,
//! 3. validate the document shape (all problems reported at once),
//! 4. deserialize into the typed model,
//! 5. create the output tree,
//! 6. load templates and compose the page,
//! 7. minify artifacts when enabled,
//! 8. write the page, stylesheet, client script, and optional favicons.
//!
//! Builds are stateless; watch mode simply calls this again.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use palisade_core::{
    find_input_document, tracing_config::TARGET_PREFIX, validate, BuildConfig, BuildError,
    BuildResult, Framework, MinifyOverride,
};
use palisade_render::{minify_css, minify_html, minify_js, render_page, PageStats, TemplateSet};

/// Stylesheet source, relative to the assets directory.
const STYLE_SOURCE: &str = "styles/main.css";
/// Client script source, relative to the assets directory.
const SCRIPT_SOURCE: &str = "scripts/main.js";
/// Optional favicon directory, relative to the assets directory.
const FAVICON_SOURCE: &str = "favicon";

/// Everything one build needs to run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory scanned for `framework-v*.json` documents and the config
    /// file.
    pub project_root: PathBuf,
    /// Directory holding `templates/`, `styles/`, `scripts/`, `favicon/`.
    pub assets_dir: PathBuf,
    /// Directory the site is written into.
    pub output_dir: PathBuf,
    /// Loaded build configuration.
    pub config: BuildConfig,
    /// CLI-level minification override.
    pub minify_override: MinifyOverride,
}

impl BuildOptions {
    /// Conventional layout under one project root: `assets/` beside the
    /// input documents, `output/` as the destination.
    #[must_use]
    pub fn for_root(project_root: PathBuf, config: BuildConfig, minify: MinifyOverride) -> Self {
        let assets_dir = project_root.join("assets");
        let output_dir = project_root.join("output");
        Self {
            project_root,
            assets_dir,
            output_dir,
            config,
            minify_override: minify,
        }
    }
}

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// The document the build consumed.
    pub input_file: PathBuf,
    /// Tree counts of the rendered framework.
    pub stats: PageStats,
    /// Whether minification was applied.
    pub minified: bool,
    /// Total bytes written across all artifacts.
    pub bytes_written: u64,
    /// Favicon files copied (zero when the directory is absent).
    pub favicons_copied: usize,
}

/// Run one full build.
///
/// # Errors
///
/// Any [`BuildError`] except favicon copy failures, which are logged
/// per-file and never fail the build.
pub fn run_build(options: &BuildOptions) -> BuildResult<BuildSummary> {
    let started = Instant::now();

    let input_file = find_input_document(&options.project_root)?;
    info!(
        target: TARGET_PREFIX,
        input_file = %input_file.display(),
        "building framework site"
    );

    let document = read_json(&input_file)?;

    let report = validate(&document);
    for warning in &report.warnings {
        warn!(target: TARGET_PREFIX, "validation: {warning}");
    }
    if report.is_fatal() {
        for error in &report.errors {
            error!(target: TARGET_PREFIX, "validation: {error}");
        }
        return Err(BuildError::ValidationFailed {
            errors: report.errors,
            warnings: report.warnings,
        });
    }

    let framework: Framework =
        serde_json::from_value(document).map_err(|error| BuildError::Parse {
            path: input_file.clone(),
            detail: error.to_string(),
        })?;

    create_dir(&options.output_dir)?;
    create_dir(&options.output_dir.join("css"))?;
    create_dir(&options.output_dir.join("js"))?;

    let templates = TemplateSet::load(&options.assets_dir)?;
    let page = render_page(&framework, &templates);
    let stats = PageStats::for_framework(&framework);

    let css = read_asset(&options.assets_dir.join(STYLE_SOURCE))?;
    let js = read_asset(&options.assets_dir.join(SCRIPT_SOURCE))?;

    let minified = options.config.minify.effective_enabled(options.minify_override);
    let (page, css, js) = if minified {
        (
            apply_minify("html", options.config.minify.html, &page, minify_html),
            apply_minify("css", options.config.minify.css, &css, minify_css),
            apply_minify("js", options.config.minify.js, &js, minify_js),
        )
    } else {
        (page, css, js)
    };

    let mut bytes_written = 0;
    bytes_written += write_artifact(&options.output_dir.join("index.html"), &page)?;
    bytes_written += write_artifact(&options.output_dir.join("css/palisade.css"), &css)?;
    bytes_written += write_artifact(&options.output_dir.join("js/palisade.js"), &js)?;

    let favicons_copied = copy_favicons(
        &options.assets_dir.join(FAVICON_SOURCE),
        &options.output_dir,
    );

    info!(
        target: TARGET_PREFIX,
        focus_areas = stats.focus_areas,
        subcategories = stats.subcategories,
        controls = stats.controls,
        bytes_written,
        minified,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "build finished"
    );

    Ok(BuildSummary {
        input_file,
        stats,
        minified,
        bytes_written,
        favicons_copied,
    })
}

fn read_json(path: &Path) -> BuildResult<Value> {
    let contents = fs::read_to_string(path).map_err(|error| BuildError::Parse {
        path: path.to_path_buf(),
        detail: error.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|error| BuildError::Parse {
        path: path.to_path_buf(),
        detail: error.to_string(),
    })
}

fn read_asset(path: &Path) -> BuildResult<String> {
    if !path.is_file() {
        return Err(BuildError::AssetMissing {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|_| BuildError::AssetMissing {
        path: path.to_path_buf(),
    })
}

fn apply_minify(kind: &str, enabled: bool, input: &str, pass: fn(&str) -> String) -> String {
    if !enabled {
        return input.to_owned();
    }
    let output = pass(input);
    debug!(
        target: TARGET_PREFIX,
        kind,
        original_bytes = input.len(),
        minified_bytes = output.len(),
        "minified artifact"
    );
    output
}

fn create_dir(path: &Path) -> BuildResult<()> {
    fs::create_dir_all(path).map_err(|source| BuildError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

fn write_artifact(path: &Path, contents: &str) -> BuildResult<u64> {
    fs::write(path, contents).map_err(|source| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.len() as u64)
}

/// Copy every file from the favicon directory into the output root.
///
/// An absent directory is normal and skipped silently at info level. A
/// failed copy is logged per-file and never fails the build.
fn copy_favicons(favicon_dir: &Path, output_dir: &Path) -> usize {
    let entries = match fs::read_dir(favicon_dir) {
        Ok(entries) => entries,
        Err(_) => {
            debug!(
                target: TARGET_PREFIX,
                dir = %favicon_dir.display(),
                "no favicon directory, skipping"
            );
            return 0;
        }
    };

    let mut copied = 0;
    for entry in entries.filter_map(Result::ok) {
        let source = entry.path();
        if !source.is_file() {
            continue;
        }
        let destination = output_dir.join(entry.file_name());
        match fs::copy(&source, &destination) {
            Ok(_) => copied += 1,
            Err(error) => {
                warn!(
                    target: TARGET_PREFIX,
                    source = %source.display(),
                    %error,
                    "could not copy favicon, continuing"
                );
            }
        }
    }
    copied
}
