//! Schema validation for framework documents.
//!
//! [`validate`] checks a parsed JSON document against the shape the renderer
//! relies on, before any typed deserialization happens. It never fails and
//! never stops early: every problem in the document lands in the returned
//! [`ValidationReport`], so authors fix a broken document in one pass.
//!
//! Strictness is deliberately uneven: focus areas and subcategories have
//! required-field checks, controls are only checked to be an array. That
//! asymmetry matches the authored documents this tool has always accepted;
//! tightening it would reject documents that previously built.

use serde_json::Value;

/// Outcome of validating one framework document.
///
/// Non-empty `errors` is fatal for the build. Warnings are surfaced but
/// never block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Fatal problems, in document order.
    pub errors: Vec<String>,
    /// Non-fatal observations (empty arrays, etc.), in document order.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether the build must halt.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Required top-level fields, in declared order. One error per missing field.
const REQUIRED_TOP_LEVEL: [&str; 5] = ["name", "version", "author", "description", "focus_areas"];

/// Required fields on every focus area.
const REQUIRED_AREA: [&str; 4] = ["id", "name", "description", "business_rationale"];

/// Required fields on every subcategory.
const REQUIRED_SUBCATEGORY: [&str; 3] = ["id", "name", "objective"];

/// Validate a parsed framework document.
///
/// A field counts as missing when it is absent, `null`, or an empty string.
#[must_use]
pub fn validate(document: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in REQUIRED_TOP_LEVEL {
        if is_missing(document.get(field)) {
            report.errors.push(format!("Missing required field: {field}"));
        }
    }

    match document.get("focus_areas") {
        None | Some(Value::Null) => {}
        Some(Value::Array(areas)) => {
            if areas.is_empty() {
                report.warnings.push("focus_areas array is empty".to_owned());
            }
            for (index, area) in areas.iter().enumerate() {
                validate_focus_area(area, index, &mut report);
            }
        }
        Some(_) => {
            report.errors.push("focus_areas must be an array".to_owned());
        }
    }

    report
}

fn validate_focus_area(area: &Value, index: usize, report: &mut ValidationReport) {
    let prefix = format!("focus_areas[{index}]");

    for field in REQUIRED_AREA {
        if is_missing(area.get(field)) {
            report
                .errors
                .push(format!("{prefix}: Missing required field '{field}'"));
        }
    }

    match area.get("subcategories") {
        None | Some(Value::Null) => {
            report
                .errors
                .push(format!("{prefix}: Missing subcategories array"));
        }
        Some(Value::Array(subcategories)) => {
            if subcategories.is_empty() {
                report
                    .warnings
                    .push(format!("{prefix}: subcategories array is empty"));
            }
            for (sub_index, subcategory) in subcategories.iter().enumerate() {
                validate_subcategory(subcategory, &prefix, sub_index, report);
            }
        }
        Some(_) => {
            report
                .errors
                .push(format!("{prefix}: subcategories must be an array"));
        }
    }
}

fn validate_subcategory(
    subcategory: &Value,
    area_prefix: &str,
    index: usize,
    report: &mut ValidationReport,
) {
    let prefix = format!("{area_prefix}.subcategories[{index}]");

    for field in REQUIRED_SUBCATEGORY {
        if is_missing(subcategory.get(field)) {
            report
                .errors
                .push(format!("{prefix}: Missing required field '{field}'"));
        }
    }

    // Controls are only checked to be a (possibly empty) array; their
    // fields are not deep-validated at this layer.
    match subcategory.get("controls") {
        None | Some(Value::Null) => {
            report.errors.push(format!("{prefix}: Missing controls array"));
        }
        Some(Value::Array(controls)) => {
            if controls.is_empty() {
                report
                    .warnings
                    .push(format!("{prefix}: controls array is empty"));
            }
        }
        Some(_) => {
            report
                .errors
                .push(format!("{prefix}: controls must be an array"));
        }
    }
}

/// Absent, `null`, and the empty string all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}
