//! Template compositor for the palisade site generator.
//!
//! Pure, stateless transforms from validated domain objects to HTML
//! fragments via literal `{{placeholder}}` substitution, composed bottom-up
//! (control → subcategory → focus area → page). Also houses the
//! conservative minification passes applied as an optional post-process.

pub mod compose;
pub mod escape;
pub mod minify;
pub mod template;

pub use compose::{render_page, PageStats, DEFAULT_ABOUT, UNKNOWN_AUTHOR};
pub use escape::escape_html;
pub use minify::{minify_css, minify_html, minify_js};
pub use template::{substitute, TemplateSet};
