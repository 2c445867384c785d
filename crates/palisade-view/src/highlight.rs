//! Match segmentation for search highlighting.
//!
//! The client rebuilds highlighted text nodes by splitting each rendered
//! string into alternating plain and matched runs. The split is computed
//! here as a pure function so overlap and case-folding behavior can be
//! pinned down in tests.

/// One run of a segmented string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The run's text, verbatim from the input.
    pub text: String,
    /// Whether the run matched the search term.
    pub is_match: bool,
}

/// Split `text` into runs around case-insensitive occurrences of `term`.
///
/// Matching folds ASCII case only, so byte offsets into `text` stay valid.
/// An empty term yields the whole input as a single non-match run.
/// Occurrences are found left to right and never overlap.
#[must_use]
pub fn segment_matches(text: &str, term: &str) -> Vec<Segment> {
    if term.is_empty() || text.is_empty() {
        return vec![Segment {
            text: text.to_owned(),
            is_match: false,
        }];
    }

    let haystack = text.to_ascii_lowercase();
    let needle = term.to_ascii_lowercase();

    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some(found) = haystack[cursor..].find(&needle) {
        let start = cursor + found;
        let end = start + needle.len();
        if start > cursor {
            segments.push(Segment {
                text: text[cursor..start].to_owned(),
                is_match: false,
            });
        }
        segments.push(Segment {
            text: text[start..end].to_owned(),
            is_match: true,
        });
        cursor = end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment {
            text: text[cursor..].to_owned(),
            is_match: false,
        });
    }

    segments
}

/// Whether `text` contains `term`, folding ASCII case. An empty term
/// matches nothing.
#[must_use]
pub fn contains_term(text: &str, term: &str) -> bool {
    !term.is_empty()
        && text
            .to_ascii_lowercase()
            .contains(&term.to_ascii_lowercase())
}
