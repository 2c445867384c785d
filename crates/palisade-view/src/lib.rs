//! Pure model of the client-side view-state engine.
//!
//! The generated page ships a script that maintains three interacting view
//! dimensions over the rendered DOM: an active-area filter set, a free-text
//! search, and per-area expansion state, plus a quick-jump modal and
//! keyboard shortcuts. This crate models that engine as a pure state
//! machine over a [`PageIndex`] (the searchable text projection of a
//! framework) so every contract can be unit-tested without a browser. The
//! shipped `assets/scripts/main.js` implements the same contracts against
//! the real DOM.
//!
//! All operations are synchronous; the engine assumes serial, single-thread
//! event dispatch (which the browser guarantees).

pub mod highlight;
pub mod index;
pub mod keys;
pub mod quick_jump;
pub mod search;
pub mod state;
pub mod theme;

pub use highlight::{contains_term, segment_matches, Segment};
pub use index::{AreaEntry, ControlEntry, PageIndex, SubcategoryEntry};
pub use keys::{dispatch, handle_escape, EscapeOutcome, KeyAction, KeyOutcome, Overlays};
pub use quick_jump::{JumpTarget, QuickJump, HIGHLIGHT_CLEAR_MS};
pub use search::{run_search, SearchOutcome};
pub use state::{ViewEngine, ViewState};
pub use theme::{Theme, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
