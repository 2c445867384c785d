//! The framework domain tree.
//!
//! A [`Framework`] is a strict three-level tree: focus areas own
//! subcategories, which own controls. The tree is constructed once per build
//! from a validated JSON document and is never mutated afterwards; the
//! renderer only reads it.
//!
//! Area and subcategory ids double as DOM anchors and filter keys in the
//! generated page. Uniqueness is a documented invariant of authored
//! documents, not something the validator enforces.

use serde::{Deserialize, Serialize};

/// Top-level framework document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    /// Framework display name (uppercased in the page header).
    pub name: String,
    /// Semantic version string of the document, e.g. `1.2.0`.
    pub version: String,
    /// Optional free-form suffix shown after the version.
    #[serde(default)]
    pub version_description: Option<String>,
    /// Primary author. Empty resolves to `Unknown Author` at render time.
    pub author: String,
    /// One-paragraph framework description.
    pub description: String,
    /// Contributor credits; accepts a comma-separated string or a list.
    #[serde(default)]
    pub contributors: Option<Contributors>,
    /// Optional "about" blurb; the renderer supplies a default when absent.
    #[serde(default)]
    pub about: Option<String>,
    /// The focus areas, in authored order.
    pub focus_areas: Vec<FocusArea>,
}

impl Framework {
    /// Total subcategories across all focus areas.
    #[must_use]
    pub fn subcategory_count(&self) -> usize {
        self.focus_areas
            .iter()
            .map(|area| area.subcategories.len())
            .sum()
    }

    /// Total controls across all subcategories of all focus areas.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.focus_areas
            .iter()
            .flat_map(|area| &area.subcategories)
            .map(|sub| sub.controls.len())
            .sum()
    }

    /// Contributor names with empties dropped, in authored order.
    ///
    /// Returns an empty list when the `contributors` field is absent, an
    /// empty string, or contains only separators.
    #[must_use]
    pub fn contributor_list(&self) -> Vec<String> {
        self.contributors
            .as_ref()
            .map(Contributors::resolve)
            .unwrap_or_default()
    }
}

/// Contributor credits in either authored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contributors {
    /// Already-itemized list of names.
    List(Vec<String>),
    /// Comma-separated names in a single string.
    Csv(String),
}

impl Contributors {
    /// Normalize to a list: comma-split and trim the string form, drop
    /// empty entries from both forms.
    #[must_use]
    pub fn resolve(&self) -> Vec<String> {
        match self {
            Self::List(names) => names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .collect(),
            Self::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// One focus area: the top grouping level of the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    /// Stable id, used as DOM anchor and nav-pill filter key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What this area covers.
    pub description: String,
    /// Why the area matters to the business.
    pub business_rationale: String,
    /// Owned subcategories, in authored order.
    pub subcategories: Vec<Subcategory>,
}

/// One subcategory within a focus area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Stable id, used as DOM anchor.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the subcategory aims to achieve.
    pub objective: String,
    /// Owned controls, in authored order.
    pub controls: Vec<Control>,
}

/// One concrete control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Control description (trusted authoring content, rendered raw).
    pub description: String,
    /// Step-by-step guidance items (escaped at render time).
    pub implementation_guidance: Vec<String>,
}
