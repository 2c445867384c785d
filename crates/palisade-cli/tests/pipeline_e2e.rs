//! End-to-end build tests against the real shipped assets.
//!
//! Each test lays out a project root in a temp directory, points the build
//! at the repository's `assets/` tree, and inspects the written artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};

use palisade_cli::{run_build, BuildOptions};
use palisade_core::{BuildConfig, BuildError, MinifyOverride};

fn repo_assets() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}

fn framework_json() -> String {
    serde_json::json!({
        "name": "Harbor Defense",
        "version": "1.2.0",
        "author": "Harbor Security Group",
        "description": "Controls for protecting harbor operations",
        "contributors": "alice, bob",
        "focus_areas": [
            {
                "id": "FA1",
                "name": "Identity",
                "description": "Who can act in the system",
                "business_rationale": "Most breaches start with stolen credentials",
                "subcategories": [
                    {
                        "id": "FA1.1",
                        "name": "Credentials",
                        "objective": "Make credential theft unprofitable",
                        "controls": [
                            {
                                "id": "FA1.1.1",
                                "name": "MFA everywhere",
                                "description": "Require a second factor for all access",
                                "implementation_guidance": [
                                    "Prefer hardware keys",
                                    "Block legacy protocols that skip MFA"
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    })
    .to_string()
}

fn project(config: BuildConfig, minify: MinifyOverride) -> (TempDir, BuildOptions) {
    let root = tempdir().expect("tempdir");
    let options = BuildOptions {
        project_root: root.path().to_path_buf(),
        assets_dir: repo_assets(),
        output_dir: root.path().join("output"),
        config,
        minify_override: minify,
    };
    (root, options)
}

#[test]
fn build_writes_all_artifacts() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    fs::write(root.path().join("framework-v1.2.0.json"), framework_json()).expect("write input");

    let summary = run_build(&options).expect("build succeeds");

    assert!(options.output_dir.join("index.html").is_file());
    assert!(options.output_dir.join("css/palisade.css").is_file());
    assert!(options.output_dir.join("js/palisade.js").is_file());
    assert_eq!(summary.stats.focus_areas, 1);
    assert_eq!(summary.stats.subcategories, 1);
    assert_eq!(summary.stats.controls, 1);
    assert!(!summary.minified);
    assert!(summary.bytes_written > 0);
}

#[test]
fn page_contains_rendered_framework_content() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    fs::write(root.path().join("framework-v1.2.0.json"), framework_json()).expect("write input");

    run_build(&options).expect("build succeeds");
    let page = fs::read_to_string(options.output_dir.join("index.html")).expect("read page");

    assert!(page.contains("HARBOR DEFENSE"), "name is uppercased");
    assert!(page.contains("Version 1.2.0"));
    assert!(page.contains(r#"data-filter="FA1">FA1: Identity</button>"#));
    assert!(page.contains("FA1.1.1"));
    assert!(page.contains("<li>alice</li>"));
    assert!(page.contains("<li>bob</li>"));
}

#[test]
fn newest_version_is_selected_numerically() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    fs::write(root.path().join("framework-v1.2.0.json"), framework_json()).expect("write");
    let newer = framework_json().replace("1.2.0", "1.10.0");
    fs::write(root.path().join("framework-v1.10.0.json"), newer).expect("write");

    let summary = run_build(&options).expect("build succeeds");
    assert_eq!(
        summary.input_file.file_name().and_then(|n| n.to_str()),
        Some("framework-v1.10.0.json")
    );
}

#[test]
fn validation_failure_reports_every_problem() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    let invalid = serde_json::json!({
        "name": "",
        "version": "1.0.0",
        "description": "missing author, focus_areas, and an empty name"
    })
    .to_string();
    fs::write(root.path().join("framework-v1.0.0.json"), invalid).expect("write");

    let error = run_build(&options).expect_err("must fail validation");
    let BuildError::ValidationFailed { errors, .. } = error else {
        panic!("expected ValidationFailed, got {error}");
    };
    assert!(errors.iter().any(|e| e.contains("name")));
    assert!(errors.iter().any(|e| e.contains("author")));
    assert!(errors.iter().any(|e| e.contains("focus_areas")));
}

#[test]
fn minification_shrinks_the_artifacts() {
    let (root, plain) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    fs::write(root.path().join("framework-v1.0.0.json"), framework_json()).expect("write");
    run_build(&plain).expect("plain build");
    let plain_css = fs::metadata(plain.output_dir.join("css/palisade.css"))
        .expect("css metadata")
        .len();
    let plain_html = fs::metadata(plain.output_dir.join("index.html"))
        .expect("html metadata")
        .len();

    let minified = BuildOptions {
        minify_override: MinifyOverride::ForceOn,
        output_dir: root.path().join("output-min"),
        ..plain.clone()
    };
    let summary = run_build(&minified).expect("minified build");
    assert!(summary.minified);

    let min_css = fs::metadata(minified.output_dir.join("css/palisade.css"))
        .expect("css metadata")
        .len();
    let min_html = fs::metadata(minified.output_dir.join("index.html"))
        .expect("html metadata")
        .len();
    assert!(min_css < plain_css);
    assert!(min_html < plain_html);
}

#[test]
fn guidance_html_is_escaped_end_to_end() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    let hostile = framework_json().replace(
        "Prefer hardware keys",
        "<script>alert('xss')</script>",
    );
    fs::write(root.path().join("framework-v1.0.0.json"), hostile).expect("write");

    run_build(&options).expect("build succeeds");
    let page = fs::read_to_string(options.output_dir.join("index.html")).expect("read page");
    assert!(page.contains("&lt;script&gt;alert(&#039;xss&#039;)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert('xss')</script>"));
}

#[test]
fn view_engine_tracks_the_built_document() {
    use palisade_view::{PageIndex, ViewEngine};

    let framework: palisade_core::Framework =
        serde_json::from_str(&framework_json()).expect("fixture parses");
    let mut engine = ViewEngine::new(PageIndex::from_framework(&framework));

    // The same content the page renders is reachable through search.
    engine.set_search("hardware keys");
    assert!(engine.control_visible("FA1", "FA1.1", "FA1.1.1"));
    assert!(engine.guidance_expanded("FA1.1.1"));
    assert_eq!(
        engine.state().search.summary_line(),
        "Found 1 matching area with 1 matching control"
    );

    engine.clear_search();
    engine.toggle_area("FA1");
    assert!(!engine.area_visible("FA1"));
}

#[test]
fn missing_input_is_a_clear_error() {
    let (_root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    let error = run_build(&options).expect_err("no input present");
    assert!(matches!(error, BuildError::NoInputFound { .. }));
}

#[test]
fn unparseable_input_names_the_file() {
    let (root, options) = project(BuildConfig::default(), MinifyOverride::UseConfig);
    fs::write(root.path().join("framework-v1.0.0.json"), "{not json").expect("write");

    let error = run_build(&options).expect_err("must fail parsing");
    assert!(error.to_string().contains("framework-v1.0.0.json"));
}
