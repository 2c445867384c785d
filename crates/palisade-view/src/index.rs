//! Searchable text projection of a rendered framework page.
//!
//! The client script searches the DOM's `textContent` at three levels:
//! focus-area header and content, subcategory header, and whole-control
//! text. [`PageIndex`] precomputes the same strings from the domain tree so
//! the search engine can be exercised without a DOM.

use palisade_core::Framework;

/// Text index for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndex {
    /// Focus areas in render order.
    pub areas: Vec<AreaEntry>,
}

/// One focus area's searchable surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaEntry {
    /// Filter key and DOM anchor.
    pub id: String,
    /// Display name (used by the quick-jump list).
    pub name: String,
    /// Rendered header text: `"<id>: <name>"`.
    pub header_text: String,
    /// Rendered body text: description plus business rationale.
    pub content_text: String,
    /// Subcategories in render order.
    pub subcategories: Vec<SubcategoryEntry>,
}

/// One subcategory's searchable surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryEntry {
    /// DOM anchor.
    pub id: String,
    /// Rendered header text: `"<id>: <name>"`.
    pub header_text: String,
    /// Controls in render order.
    pub controls: Vec<ControlEntry>,
}

/// One control's searchable surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEntry {
    /// DOM anchor and guidance-toggle key.
    pub id: String,
    /// Whole-control text: id, name, description, and guidance items.
    pub text: String,
    /// Guidance text alone, used to decide force-expansion on match.
    pub guidance_text: String,
}

impl PageIndex {
    /// Project a validated framework into its searchable text surfaces.
    #[must_use]
    pub fn from_framework(framework: &Framework) -> Self {
        let areas = framework
            .focus_areas
            .iter()
            .map(|area| AreaEntry {
                id: area.id.clone(),
                name: area.name.clone(),
                header_text: format!("{}: {}", area.id, area.name),
                content_text: format!("{} {}", area.description, area.business_rationale),
                subcategories: area
                    .subcategories
                    .iter()
                    .map(|sub| SubcategoryEntry {
                        id: sub.id.clone(),
                        header_text: format!("{}: {}", sub.id, sub.name),
                        controls: sub
                            .controls
                            .iter()
                            .map(|control| {
                                let guidance_text = control.implementation_guidance.join(" ");
                                ControlEntry {
                                    id: control.id.clone(),
                                    text: format!(
                                        "{} {} {} {}",
                                        control.id, control.name, control.description,
                                        guidance_text
                                    ),
                                    guidance_text,
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { areas }
    }

    /// Number of focus areas on the page.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// All area ids in render order.
    #[must_use]
    pub fn area_ids(&self) -> Vec<String> {
        self.areas.iter().map(|area| area.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PageIndex;
    use palisade_core::Framework;

    fn framework() -> Framework {
        serde_json::from_value(serde_json::json!({
            "name": "F", "version": "1.0.0", "author": "A", "description": "D",
            "focus_areas": [{
                "id": "FA1", "name": "Identity", "description": "who you are",
                "business_rationale": "trust",
                "subcategories": [{
                    "id": "FA1.1", "name": "Credentials", "objective": "rotate",
                    "controls": [{
                        "id": "FA1.1.1", "name": "Password policy",
                        "description": "enforce length",
                        "implementation_guidance": ["use a manager", "no reuse"]
                    }]
                }]
            }]
        }))
        .expect("valid framework")
    }

    #[test]
    fn header_text_matches_the_rendered_label() {
        let index = PageIndex::from_framework(&framework());
        assert_eq!(index.areas[0].header_text, "FA1: Identity");
        assert_eq!(index.areas[0].subcategories[0].header_text, "FA1.1: Credentials");
    }

    #[test]
    fn control_text_includes_guidance() {
        let index = PageIndex::from_framework(&framework());
        let control = &index.areas[0].subcategories[0].controls[0];
        assert!(control.text.contains("Password policy"));
        assert!(control.text.contains("use a manager"));
        assert_eq!(control.guidance_text, "use a manager no reuse");
    }

    #[test]
    fn area_content_covers_description_and_rationale() {
        let index = PageIndex::from_framework(&framework());
        assert!(index.areas[0].content_text.contains("who you are"));
        assert!(index.areas[0].content_text.contains("trust"));
    }
}
