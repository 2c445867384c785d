//! Input-document discovery and version selection.
//!
//! Framework documents are versioned by filename:
//! `framework-v<major>.<minor>.<patch>.json`. A build always consumes the
//! newest document, compared numerically component by component so that
//! `1.10.0` beats `1.2.0`. On a full tie the first candidate in scan order
//! wins (comparison is strictly-greater, never replace-on-equal).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

/// Filename prefix every candidate document must carry.
pub const INPUT_FILE_PREFIX: &str = "framework-v";

/// Filename suffix every candidate document must carry.
pub const INPUT_FILE_SUFFIX: &str = ".json";

/// A parsed `major.minor.patch` version token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    /// Parse the version triple out of a candidate filename.
    ///
    /// Returns `None` when the name does not match
    /// `framework-vX.Y.Z.json` with numeric components.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let middle = name
            .strip_prefix(INPUT_FILE_PREFIX)?
            .strip_suffix(INPUT_FILE_SUFFIX)?;
        let mut components = middle.split('.');
        let major = components.next()?.parse().ok()?;
        let minor = components.next()?.parse().ok()?;
        let patch = components.next()?.parse().ok()?;
        if components.next().is_some() {
            return None;
        }
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl std::fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Pick the highest-versioned candidate from a list of filenames.
///
/// Names that do not parse as versioned candidates are ignored. Ties keep
/// the earliest name in the input order.
#[must_use]
pub fn newest_candidate<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, VersionTriple)> = None;
    for name in names {
        let Some(version) = VersionTriple::from_file_name(name) else {
            continue;
        };
        match best {
            Some((_, current)) if version <= current => {}
            _ => best = Some((name, version)),
        }
    }
    best.map(|(name, _)| name)
}

/// Scan `dir` for versioned framework documents and return the newest.
///
/// Directory entries are sorted by name before selection so that ties are
/// broken deterministically across platforms.
///
/// # Errors
///
/// Returns [`BuildError::NoInputFound`] when the directory cannot be read
/// or holds no matching candidate.
pub fn find_input_document(dir: &Path) -> BuildResult<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|_| BuildError::NoInputFound {
        dir: dir.to_path_buf(),
    })?;

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    newest_candidate(names.iter().map(String::as_str))
        .map(|name| dir.join(name))
        .ok_or_else(|| BuildError::NoInputFound {
            dir: dir.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::{find_input_document, newest_candidate, VersionTriple};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_well_formed_names() {
        let version = VersionTriple::from_file_name("framework-v1.10.3.json").expect("parse");
        assert_eq!(
            version,
            VersionTriple {
                major: 1,
                minor: 10,
                patch: 3
            }
        );
    }

    #[test]
    fn rejects_malformed_names() {
        for name in [
            "framework-v1.2.json",
            "framework-v1.2.3.4.json",
            "framework-vx.y.z.json",
            "framework-1.2.3.json",
            "framework-v1.2.3.txt",
            "notes.json",
        ] {
            assert!(VersionTriple::from_file_name(name).is_none(), "{name}");
        }
    }

    #[test]
    fn selection_is_numeric_not_lexicographic() {
        let names = [
            "framework-v1.0.0.json",
            "framework-v1.2.0.json",
            "framework-v1.10.0.json",
        ];
        assert_eq!(newest_candidate(names), Some("framework-v1.10.0.json"));
    }

    #[test]
    fn full_tie_keeps_the_first_candidate() {
        // Duplicate versions cannot coexist in one directory, but the
        // selector itself must be stable under ties.
        let names = ["framework-v2.0.0.json", "framework-v2.0.0.json"];
        let winner = newest_candidate(names).expect("winner");
        assert!(std::ptr::eq(winner, names[0]));
    }

    #[test]
    fn non_candidates_are_ignored() {
        let names = ["palisade.json", "framework-v0.1.0.json", "README.md"];
        assert_eq!(newest_candidate(names), Some("framework-v0.1.0.json"));
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert_eq!(newest_candidate([]), None);
    }

    #[test]
    fn find_input_document_scans_the_directory() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("framework-v1.2.0.json"), "{}").expect("write");
        fs::write(dir.path().join("framework-v1.10.0.json"), "{}").expect("write");
        fs::write(dir.path().join("unrelated.json"), "{}").expect("write");

        let chosen = find_input_document(dir.path()).expect("candidate");
        assert_eq!(
            chosen.file_name().and_then(|name| name.to_str()),
            Some("framework-v1.10.0.json")
        );
    }

    #[test]
    fn empty_directory_is_no_input_found() {
        let dir = tempdir().expect("tempdir");
        let error = find_input_document(dir.path()).expect_err("must fail");
        assert!(error.to_string().contains("No framework document"));
    }
}
