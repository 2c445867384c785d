//! Free-text search over the page index.
//!
//! A search pass computes which areas, subcategories, and controls stay
//! visible, which controls get their guidance force-expanded, and the match
//! counts for the results line. Visibility propagates bottom-up only: a
//! control match keeps its subcategory and area visible, and a subcategory
//! header match keeps all of its controls visible. An area header or body
//! match shows the area itself but never reaches down into non-matching
//! subcategories or controls.

use std::collections::BTreeSet;

use crate::highlight::contains_term;
use crate::index::PageIndex;

/// Result of one search pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The term the outcome was computed for, lowercased and trimmed.
    pub term: String,
    /// Ids of areas that remain visible.
    pub visible_areas: BTreeSet<String>,
    /// Ids of subcategories that remain visible.
    pub visible_subcategories: BTreeSet<String>,
    /// Ids of controls that remain visible.
    pub visible_controls: BTreeSet<String>,
    /// Ids of controls whose guidance is forced open because the match
    /// lies in the guidance text.
    pub expanded_guidance: BTreeSet<String>,
    /// Areas shown by this search (matched directly or through a child).
    pub matched_area_count: usize,
    /// Controls whose own text matched.
    pub matched_control_count: usize,
}

impl SearchOutcome {
    /// Whether this outcome represents an active (non-empty) search.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    /// The results line shown under the search box. Empty when the search
    /// is inactive; the control clause is omitted when no control matched.
    #[must_use]
    pub fn summary_line(&self) -> String {
        if !self.is_active() {
            return String::new();
        }
        let mut line = format!(
            "Found {} matching {}",
            self.matched_area_count,
            plural(self.matched_area_count, "area", "areas"),
        );
        if self.matched_control_count > 0 {
            line.push_str(&format!(
                " with {} matching {}",
                self.matched_control_count,
                plural(self.matched_control_count, "control", "controls"),
            ));
        }
        line
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Run one search pass over the index.
///
/// The raw term is trimmed and lowercased first. An empty term leaves
/// everything visible, expands nothing, and reports zero matches.
#[must_use]
pub fn run_search(index: &PageIndex, raw_term: &str) -> SearchOutcome {
    let term = raw_term.trim().to_ascii_lowercase();

    let mut outcome = SearchOutcome {
        term: term.clone(),
        visible_areas: BTreeSet::new(),
        visible_subcategories: BTreeSet::new(),
        visible_controls: BTreeSet::new(),
        expanded_guidance: BTreeSet::new(),
        matched_area_count: 0,
        matched_control_count: 0,
    };

    if term.is_empty() {
        for area in &index.areas {
            outcome.visible_areas.insert(area.id.clone());
            for sub in &area.subcategories {
                outcome.visible_subcategories.insert(sub.id.clone());
                for control in &sub.controls {
                    outcome.visible_controls.insert(control.id.clone());
                }
            }
        }
        return outcome;
    }

    for area in &index.areas {
        let area_matches =
            contains_term(&area.header_text, &term) || contains_term(&area.content_text, &term);
        let mut area_visible = area_matches;

        for sub in &area.subcategories {
            let sub_matches = contains_term(&sub.header_text, &term);
            let mut sub_visible = sub_matches;

            for control in &sub.controls {
                let control_matches = contains_term(&control.text, &term);
                if control_matches {
                    outcome.matched_control_count += 1;
                    sub_visible = true;
                    if contains_term(&control.guidance_text, &term) {
                        outcome.expanded_guidance.insert(control.id.clone());
                    }
                }
                // A subcategory header match shows the whole list; an
                // area-level match does not reach down.
                if control_matches || sub_matches {
                    outcome.visible_controls.insert(control.id.clone());
                }
            }

            if sub_visible {
                outcome.visible_subcategories.insert(sub.id.clone());
                area_visible = true;
            }
        }

        if area_visible {
            outcome.visible_areas.insert(area.id.clone());
            outcome.matched_area_count += 1;
        }
    }

    outcome
}
