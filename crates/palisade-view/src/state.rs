//! The combined view-state machine.
//!
//! [`ViewEngine`] owns the page index plus the three interacting view
//! dimensions: the active-area filter set, the current search outcome, and
//! per-area/per-control expansion. Effective visibility is always the
//! intersection of filter and search; effective guidance expansion is the
//! union of manual toggles and search-forced opens.

use std::collections::BTreeSet;

use crate::index::PageIndex;
use crate::search::{run_search, SearchOutcome};

/// Mutable view dimensions, separate from the immutable index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Area ids whose nav pill is active. Starts with every area.
    pub active_areas: BTreeSet<String>,
    /// Current search outcome. Inactive (empty term) at startup.
    pub search: SearchOutcome,
    /// Area ids manually expanded.
    pub expanded_areas: BTreeSet<String>,
    /// Control ids whose guidance was manually opened.
    pub expanded_guidance: BTreeSet<String>,
}

/// The view-state engine over one rendered page.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    index: PageIndex,
    state: ViewState,
}

impl ViewEngine {
    /// Start with every area active, nothing expanded, and no search.
    #[must_use]
    pub fn new(index: PageIndex) -> Self {
        let search = run_search(&index, "");
        let active_areas = index.area_ids().into_iter().collect();
        Self {
            index,
            state: ViewState {
                active_areas,
                search,
                expanded_areas: BTreeSet::new(),
                expanded_guidance: BTreeSet::new(),
            },
        }
    }

    #[must_use]
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // ─── Search ─────────────────────────────────────────────────────────

    /// Recompute the search outcome for a new term.
    pub fn set_search(&mut self, raw_term: &str) {
        self.state.search = run_search(&self.index, raw_term);
    }

    /// Drop the search term, restoring full search visibility.
    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    #[must_use]
    pub fn search_active(&self) -> bool {
        self.state.search.is_active()
    }

    // ─── Area filter ────────────────────────────────────────────────────

    /// Toggle one nav pill. Unknown ids are ignored.
    pub fn toggle_area(&mut self, area_id: &str) {
        if !self.index.areas.iter().any(|area| area.id == area_id) {
            return;
        }
        if !self.state.active_areas.remove(area_id) {
            self.state.active_areas.insert(area_id.to_owned());
        }
    }

    /// Activate every nav pill.
    pub fn set_all_areas_on(&mut self) {
        self.state.active_areas = self.index.area_ids().into_iter().collect();
    }

    /// Deactivate every nav pill.
    pub fn set_all_areas_off(&mut self) {
        self.state.active_areas.clear();
    }

    #[must_use]
    pub fn area_active(&self, area_id: &str) -> bool {
        self.state.active_areas.contains(area_id)
    }

    // ─── Expansion ──────────────────────────────────────────────────────

    /// Toggle one area's expanded body.
    pub fn toggle_expanded(&mut self, area_id: &str) {
        if !self.state.expanded_areas.remove(area_id) {
            self.state.expanded_areas.insert(area_id.to_owned());
        }
    }

    /// Expand every area.
    pub fn expand_all(&mut self) {
        self.state.expanded_areas = self.index.area_ids().into_iter().collect();
    }

    /// Collapse every area.
    pub fn collapse_all(&mut self) {
        self.state.expanded_areas.clear();
    }

    /// Whether every area on the page is currently expanded.
    #[must_use]
    pub fn all_expanded(&self) -> bool {
        self.index
            .areas
            .iter()
            .all(|area| self.state.expanded_areas.contains(&area.id))
    }

    #[must_use]
    pub fn area_expanded(&self, area_id: &str) -> bool {
        self.state.expanded_areas.contains(area_id)
    }

    /// Toggle one control's guidance list.
    pub fn toggle_guidance(&mut self, control_id: &str) {
        if !self.state.expanded_guidance.remove(control_id) {
            self.state.expanded_guidance.insert(control_id.to_owned());
        }
    }

    // ─── Effective visibility ───────────────────────────────────────────

    /// An area shows only when its pill is active AND the search keeps it.
    #[must_use]
    pub fn area_visible(&self, area_id: &str) -> bool {
        self.state.active_areas.contains(area_id)
            && self.state.search.visible_areas.contains(area_id)
    }

    /// A subcategory shows when its area shows and the search keeps it.
    #[must_use]
    pub fn subcategory_visible(&self, area_id: &str, subcategory_id: &str) -> bool {
        self.area_visible(area_id)
            && self
                .state
                .search
                .visible_subcategories
                .contains(subcategory_id)
    }

    /// A control shows when its subcategory shows and the search keeps it.
    #[must_use]
    pub fn control_visible(&self, area_id: &str, subcategory_id: &str, control_id: &str) -> bool {
        self.subcategory_visible(area_id, subcategory_id)
            && self.state.search.visible_controls.contains(control_id)
    }

    /// Guidance is open when toggled manually or forced by a search match.
    #[must_use]
    pub fn guidance_expanded(&self, control_id: &str) -> bool {
        self.state.expanded_guidance.contains(control_id)
            || self.state.search.expanded_guidance.contains(control_id)
    }
}
