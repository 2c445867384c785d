//! Template loading and literal placeholder substitution.
//!
//! Templates are plain text files carrying `{{name}}` markers. Substitution
//! is a single left-to-right scan: a substituted value is never re-scanned
//! for further placeholders, and a marker with no matching variable stays
//! in the output verbatim (accepted quirk — it makes a typo visible in the
//! rendered page instead of failing the build).

use std::fs;
use std::path::Path;

use palisade_core::{BuildError, BuildResult};

/// The fixed set of page templates, loaded once per build.
///
/// Any missing or unreadable file is fatal for the whole build.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Outer page shell.
    pub index: String,
    /// Page header (name, version, author).
    pub header: String,
    /// Stats strip (area / subcategory / control counts).
    pub stats: String,
    /// Main content shell (nav pills + focus areas).
    pub main_content: String,
    /// Fixed footer.
    pub footer: String,
    /// One focus area.
    pub focus_area: String,
    /// One subcategory.
    pub subcategory: String,
    /// One control.
    pub control: String,
}

impl TemplateSet {
    /// Load all templates from `<dir>/templates`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::TemplateRead`] for the first file that cannot
    /// be read.
    pub fn load(assets_dir: &Path) -> BuildResult<Self> {
        let templates = assets_dir.join("templates");
        Ok(Self {
            index: read_template(&templates.join("index.html"))?,
            header: read_template(&templates.join("partials/header.html"))?,
            stats: read_template(&templates.join("partials/stats.html"))?,
            main_content: read_template(&templates.join("partials/main-content.html"))?,
            footer: read_template(&templates.join("partials/footer.html"))?,
            focus_area: read_template(&templates.join("partials/focus-area.html"))?,
            subcategory: read_template(&templates.join("partials/subcategory.html"))?,
            control: read_template(&templates.join("partials/control.html"))?,
        })
    }
}

fn read_template(path: &Path) -> BuildResult<String> {
    fs::read_to_string(path).map_err(|source| BuildError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace every known `{{name}}` marker in a single pass.
///
/// Variables are looked up by exact name. Unknown markers are left literal;
/// an unterminated `{{` is emitted as-is.
#[must_use]
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[..close];
                match vars.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => output.push_str(value),
                    None => {
                        output.push_str("{{");
                        output.push_str(name);
                        output.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::{substitute, TemplateSet};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn replaces_known_placeholders() {
        let result = substitute("<h1>{{title}}</h1><p>{{body}}</p>", &[
            ("title", "Hello"),
            ("body", "World"),
        ]);
        assert_eq!(result, "<h1>Hello</h1><p>World</p>");
    }

    #[test]
    fn unknown_placeholders_stay_literal() {
        let result = substitute("{{known}} and {{unknown}}", &[("known", "yes")]);
        assert_eq!(result, "yes and {{unknown}}");
    }

    #[test]
    fn substituted_values_are_never_rescanned() {
        // A value containing a marker for another known variable must not
        // be expanded recursively.
        let result = substitute("{{a}}|{{b}}", &[("a", "{{b}}"), ("b", "B")]);
        assert_eq!(result, "{{b}}|B");
    }

    #[test]
    fn repeated_markers_are_all_replaced() {
        let result = substitute("{{x}}{{x}}{{x}}", &[("x", ".")]);
        assert_eq!(result, "...");
    }

    #[test]
    fn unterminated_marker_is_emitted_verbatim() {
        let result = substitute("start {{oops", &[("oops", "nope")]);
        assert_eq!(result, "start {{oops");
    }

    #[test]
    fn load_fails_on_missing_template_file() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("templates/partials")).expect("mkdir");
        fs::write(dir.path().join("templates/index.html"), "{{header}}").expect("write");
        // partials are absent
        let error = TemplateSet::load(dir.path()).expect_err("must fail");
        assert!(error.to_string().contains("Failed to read template"));
    }
}
