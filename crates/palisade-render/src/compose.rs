//! Bottom-up page composition from the framework tree.
//!
//! Each renderer takes a typed domain object plus the loaded [`TemplateSet`]
//! and returns a finished HTML fragment. Composition order mirrors the tree:
//! controls into subcategories, subcategories into focus areas, focus areas
//! plus nav pills into the main content, everything into the page shell.

use palisade_core::{Control, FocusArea, Framework, Subcategory};

use crate::escape::escape_html;
use crate::template::{substitute, TemplateSet};

/// Author shown when the document carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// About blurb used when the document omits its own.
pub const DEFAULT_ABOUT: &str = "This framework helps organizations assess and strengthen \
their security posture across focus areas, subcategories, and concrete controls.";

/// Counts displayed in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub focus_areas: usize,
    pub subcategories: usize,
    pub controls: usize,
}

impl PageStats {
    /// Compute the three counts from a framework tree.
    #[must_use]
    pub fn for_framework(framework: &Framework) -> Self {
        Self {
            focus_areas: framework.focus_areas.len(),
            subcategories: framework.subcategory_count(),
            controls: framework.control_count(),
        }
    }
}

/// Render one control. Guidance items are HTML-escaped; id, name, and
/// description are trusted authoring content and substituted raw.
#[must_use]
pub fn render_control(control: &Control, templates: &TemplateSet) -> String {
    let guidance: String = control
        .implementation_guidance
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();

    substitute(&templates.control, &[
        ("controlId", &control.id),
        ("controlName", &control.name),
        ("controlDescription", &control.description),
        ("implementationGuidance", &guidance),
    ])
}

/// Render one subcategory with its controls concatenated in list order.
#[must_use]
pub fn render_subcategory(subcategory: &Subcategory, templates: &TemplateSet) -> String {
    let controls: String = subcategory
        .controls
        .iter()
        .map(|control| render_control(control, templates))
        .collect();

    substitute(&templates.subcategory, &[
        ("subcategoryId", &subcategory.id),
        ("subcategoryName", &subcategory.name),
        ("subcategoryObjective", &subcategory.objective),
        ("controls", &controls),
    ])
}

/// Render one focus area with its subcategories concatenated in list order.
#[must_use]
pub fn render_focus_area(area: &FocusArea, templates: &TemplateSet) -> String {
    let subcategories: String = area
        .subcategories
        .iter()
        .map(|subcategory| render_subcategory(subcategory, templates))
        .collect();

    substitute(&templates.focus_area, &[
        ("areaId", &area.id),
        ("areaName", &area.name),
        ("areaDescription", &area.description),
        ("businessRationale", &area.business_rationale),
        ("subcategories", &subcategories),
    ])
}

/// Render the nav pill row: one filter button per focus area, all initially
/// active, labeled `<id>: <name>`.
#[must_use]
pub fn render_nav_pills(areas: &[FocusArea]) -> String {
    areas
        .iter()
        .map(|area| {
            format!(
                r#"<button class="nav-pill active" data-filter="{id}">{id}: {name}</button>"#,
                id = area.id,
                name = area.name,
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Assemble the complete page.
#[must_use]
pub fn render_page(framework: &Framework, templates: &TemplateSet) -> String {
    let author = if framework.author.is_empty() {
        UNKNOWN_AUTHOR
    } else {
        framework.author.as_str()
    };

    let version_suffix = framework
        .version_description
        .as_deref()
        .map(|description| format!(" - {description}"))
        .unwrap_or_default();

    let header = substitute(&templates.header, &[
        ("frameworkName", &framework.name.to_uppercase()),
        ("description", &framework.description),
        ("frameworkVersion", &framework.version),
        ("frameworkVersionDesc", &version_suffix),
        ("author", author),
    ]);

    let stats = PageStats::for_framework(framework);
    let stats_html = substitute(&templates.stats, &[
        ("focusAreaCount", &stats.focus_areas.to_string()),
        ("subcategoryCount", &stats.subcategories.to_string()),
        ("controlCount", &stats.controls.to_string()),
    ]);

    let nav_pills = render_nav_pills(&framework.focus_areas);
    let areas: String = framework
        .focus_areas
        .iter()
        .map(|area| render_focus_area(area, templates))
        .collect::<Vec<_>>()
        .join("\n    ");

    let main_content = substitute(&templates.main_content, &[
        ("navPills", &nav_pills),
        ("focusAreas", &areas),
    ]);

    substitute(&templates.index, &[
        ("header", &header),
        ("stats", &stats_html),
        ("mainContent", &main_content),
        ("footer", &templates.footer),
        ("author", author),
        ("contributorsSection", &contributors_section(framework)),
        ("about", framework.about.as_deref().unwrap_or(DEFAULT_ABOUT)),
    ])
}

/// Contributors block, present only when the resolved list is non-empty.
fn contributors_section(framework: &Framework) -> String {
    let contributors = framework.contributor_list();
    if contributors.is_empty() {
        return String::new();
    }

    let items: String = contributors
        .iter()
        .map(|name| format!("          <li>{}</li>\n", escape_html(name)))
        .collect();

    format!(
        "\n      <div class=\"author-section\">\n        <h3>Contributors</h3>\n        <ul>\n{items}        </ul>\n        <p class=\"contributor-thanks\">Thank you to all contributors who have helped improve this framework.</p>\n      </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::{render_control, render_nav_pills, render_page, PageStats, UNKNOWN_AUTHOR};
    use crate::template::TemplateSet;
    use palisade_core::{Control, Framework};

    fn test_templates() -> TemplateSet {
        TemplateSet {
            index: "{{header}}{{stats}}{{mainContent}}{{contributorsSection}}{{about}}{{footer}}"
                .to_owned(),
            header: "<h1>{{frameworkName}}</h1><p>{{description}}</p>\
                     <span>v{{frameworkVersion}}{{frameworkVersionDesc}}</span>\
                     <span>{{author}}</span>"
                .to_owned(),
            stats: "[{{focusAreaCount}}/{{subcategoryCount}}/{{controlCount}}]".to_owned(),
            main_content: "<nav>{{navPills}}</nav><main>{{focusAreas}}</main>".to_owned(),
            footer: "<footer>fin</footer>".to_owned(),
            focus_area: "<section id=\"{{areaId}}\">{{areaName}}|{{areaDescription}}|\
                         {{businessRationale}}{{subcategories}}</section>"
                .to_owned(),
            subcategory: "<div id=\"{{subcategoryId}}\">{{subcategoryName}}|\
                          {{subcategoryObjective}}{{controls}}</div>"
                .to_owned(),
            control: "<article id=\"{{controlId}}\">{{controlName}}|{{controlDescription}}\
                      <ul>{{implementationGuidance}}</ul></article>"
                .to_owned(),
        }
    }

    fn framework(areas: usize, subs_per_area: usize, controls_per_sub: usize) -> Framework {
        let json = serde_json::json!({
            "name": "Deep Defense",
            "version": "2.1.0",
            "author": "Blue Team",
            "description": "layered controls",
            "focus_areas": (0..areas).map(|a| serde_json::json!({
                "id": format!("FA{}", a + 1),
                "name": format!("Area {}", a + 1),
                "description": "area description",
                "business_rationale": "rationale",
                "subcategories": (0..subs_per_area).map(|s| serde_json::json!({
                    "id": format!("FA{}.{}", a + 1, s + 1),
                    "name": "Subcategory",
                    "objective": "objective",
                    "controls": (0..controls_per_sub).map(|c| serde_json::json!({
                        "id": format!("FA{}.{}.{}", a + 1, s + 1, c + 1),
                        "name": "Control",
                        "description": "control description",
                        "implementation_guidance": ["first step", "second step"],
                    })).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        });
        serde_json::from_value(json).expect("valid framework")
    }

    #[test]
    fn stats_round_trip_for_a_2x2x3_tree() {
        let stats = PageStats::for_framework(&framework(2, 2, 3));
        assert_eq!(stats.focus_areas, 2);
        assert_eq!(stats.subcategories, 4);
        assert_eq!(stats.controls, 12);
    }

    #[test]
    fn guidance_items_are_escaped_in_control_output() {
        let control = Control {
            id: "C1".to_owned(),
            name: "Inline scripts".to_owned(),
            description: "desc".to_owned(),
            implementation_guidance: vec!["<script>alert(1)</script>".to_owned()],
        };
        let html = render_control(&control, &test_templates());
        assert!(html.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn nav_pills_carry_filter_keys_and_labels_and_start_active() {
        let framework = framework(2, 1, 1);
        let pills = render_nav_pills(&framework.focus_areas);
        assert!(pills.contains(r#"data-filter="FA1">FA1: Area 1</button>"#));
        assert!(pills.contains(r#"data-filter="FA2">FA2: Area 2</button>"#));
        assert_eq!(pills.matches("nav-pill active").count(), 2);
    }

    #[test]
    fn page_header_uppercases_the_name() {
        let page = render_page(&framework(1, 1, 1), &test_templates());
        assert!(page.contains("<h1>DEEP DEFENSE</h1>"));
    }

    #[test]
    fn version_description_is_dash_suffixed_when_present() {
        let mut fw = framework(1, 1, 1);
        assert!(render_page(&fw, &test_templates()).contains("v2.1.0</span>"));

        fw.version_description = Some("beta".to_owned());
        assert!(render_page(&fw, &test_templates()).contains("v2.1.0 - beta</span>"));
    }

    #[test]
    fn empty_author_falls_back_to_unknown() {
        let mut fw = framework(1, 1, 1);
        fw.author = String::new();
        let page = render_page(&fw, &test_templates());
        assert!(page.contains(UNKNOWN_AUTHOR));
    }

    #[test]
    fn contributors_section_is_omitted_when_list_resolves_empty() {
        let mut fw = framework(1, 1, 1);
        let page = render_page(&fw, &test_templates());
        assert!(!page.contains("Contributors"));

        fw.contributors = Some(palisade_core::Contributors::Csv(" , ,".to_owned()));
        let page = render_page(&fw, &test_templates());
        assert!(!page.contains("Contributors"));
    }

    #[test]
    fn contributors_are_escaped_and_listed() {
        let mut fw = framework(1, 1, 1);
        fw.contributors = Some(palisade_core::Contributors::Csv(
            "alice, bob <bob@example.com>".to_owned(),
        ));
        let page = render_page(&fw, &test_templates());
        assert!(page.contains("<li>alice</li>"));
        assert!(page.contains("<li>bob &lt;bob@example.com&gt;</li>"));
    }

    #[test]
    fn fragments_nest_in_document_order() {
        let page = render_page(&framework(2, 2, 1), &test_templates());
        let fa1 = page.find("id=\"FA1\"").expect("FA1 present");
        let fa2 = page.find("id=\"FA2\"").expect("FA2 present");
        assert!(fa1 < fa2);
        let c11 = page.find("id=\"FA1.1.1\"").expect("first control");
        let c21 = page.find("id=\"FA1.2.1\"").expect("second sub control");
        assert!(fa1 < c11 && c11 < c21 && c21 < fa2);
    }

    #[test]
    fn default_about_is_used_when_absent() {
        let page = render_page(&framework(1, 1, 1), &test_templates());
        assert!(page.contains(super::DEFAULT_ABOUT));
    }
}
