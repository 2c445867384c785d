//! Keyboard shortcut dispatch.
//!
//! The page binds a small set of global shortcuts. Escape is layered: it
//! closes the topmost open surface first and only clears the search when
//! nothing else is open.

use crate::quick_jump::{JumpTarget, QuickJump};
use crate::state::ViewEngine;

/// A recognized global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Ctrl/Cmd+F: focus the search box.
    FocusSearch,
    /// Ctrl/Cmd+K: open or close the quick-jump modal.
    ToggleQuickJump,
    /// Ctrl/Cmd+E: expand all areas, or collapse all when all are open.
    ToggleExpandAll,
    /// Escape: close the topmost surface.
    Escape,
    /// ArrowUp inside the quick-jump modal.
    ArrowUp,
    /// ArrowDown inside the quick-jump modal.
    ArrowDown,
    /// Enter or Space inside the quick-jump modal.
    Activate,
}

/// What Escape ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    ClosedAuthorModal,
    ClosedLicenseModal,
    ClosedQuickJump,
    ClearedSearch,
    NoOp,
}

/// What a dispatched key did, for the caller to mirror into the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Caller should move focus to the search input.
    SearchFocused,
    /// Quick-jump modal visibility changed.
    QuickJumpToggled,
    /// All areas were expanded.
    ExpandedAll,
    /// All areas were collapsed.
    CollapsedAll,
    /// Escape resolved as described.
    Escaped(EscapeOutcome),
    /// Quick-jump selection moved.
    SelectionMoved,
    /// Quick-jump activation resolved to this area.
    Jumped(JumpTarget),
    /// Nothing changed.
    Unhandled,
}

/// Overlay surfaces Escape can close, outermost last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub author_modal_open: bool,
    pub license_modal_open: bool,
}

/// Resolve Escape against the open surfaces: author modal, then license
/// modal, then quick-jump, then an active search. Exactly one closes.
pub fn handle_escape(
    overlays: &mut Overlays,
    jump: &mut QuickJump,
    engine: &mut ViewEngine,
) -> EscapeOutcome {
    if overlays.author_modal_open {
        overlays.author_modal_open = false;
        return EscapeOutcome::ClosedAuthorModal;
    }
    if overlays.license_modal_open {
        overlays.license_modal_open = false;
        return EscapeOutcome::ClosedLicenseModal;
    }
    if jump.is_open() {
        jump.close();
        return EscapeOutcome::ClosedQuickJump;
    }
    if engine.search_active() {
        engine.clear_search();
        return EscapeOutcome::ClearedSearch;
    }
    EscapeOutcome::NoOp
}

/// Dispatch one shortcut against the full view state.
pub fn dispatch(
    action: KeyAction,
    overlays: &mut Overlays,
    jump: &mut QuickJump,
    engine: &mut ViewEngine,
) -> KeyOutcome {
    match action {
        KeyAction::FocusSearch => KeyOutcome::SearchFocused,
        KeyAction::ToggleQuickJump => {
            jump.toggle();
            KeyOutcome::QuickJumpToggled
        }
        KeyAction::ToggleExpandAll => {
            if engine.all_expanded() {
                engine.collapse_all();
                KeyOutcome::CollapsedAll
            } else {
                engine.expand_all();
                KeyOutcome::ExpandedAll
            }
        }
        KeyAction::Escape => KeyOutcome::Escaped(handle_escape(overlays, jump, engine)),
        KeyAction::ArrowUp => {
            if jump.is_open() {
                jump.move_up();
                KeyOutcome::SelectionMoved
            } else {
                KeyOutcome::Unhandled
            }
        }
        KeyAction::ArrowDown => {
            if jump.is_open() {
                jump.move_down(engine.index().area_count());
                KeyOutcome::SelectionMoved
            } else {
                KeyOutcome::Unhandled
            }
        }
        KeyAction::Activate => {
            if !jump.is_open() {
                return KeyOutcome::Unhandled;
            }
            match jump.activate(&engine.index().area_ids()) {
                Some(target) => {
                    // Jumping must land somewhere visible and open.
                    if !engine.area_active(&target.area_id) {
                        engine.toggle_area(&target.area_id);
                    }
                    if !engine.area_expanded(&target.area_id) {
                        engine.toggle_expanded(&target.area_id);
                    }
                    KeyOutcome::Jumped(target)
                }
                None => KeyOutcome::Unhandled,
            }
        }
    }
}
