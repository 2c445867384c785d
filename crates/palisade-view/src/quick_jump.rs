//! Quick-jump modal state.
//!
//! The modal lists every focus area; arrow keys move a clamped selection
//! and activation jumps to the selected area, expanding it and flashing a
//! transient highlight.

/// How long the jump-target highlight stays on, in milliseconds.
pub const HIGHLIGHT_CLEAR_MS: u64 = 2000;

/// The area an activation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    /// Id of the area to scroll to, expand, and highlight.
    pub area_id: String,
}

/// Modal open/selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickJump {
    open: bool,
    selected: usize,
}

impl QuickJump {
    /// Closed, with the selection on the first entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the selected entry. Meaningful only while open.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open the modal with the selection reset to the first entry.
    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    /// Close the modal. The selection resets so the next open starts fresh.
    pub fn close(&mut self) {
        self.open = false;
        self.selected = 0;
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the selection up one entry, stopping at the top.
    pub fn move_up(&mut self) {
        if self.open {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Move the selection down one entry, stopping at the last of `count`.
    pub fn move_down(&mut self, count: usize) {
        if self.open && count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// Resolve the selection against the area list and close the modal.
    /// Returns `None` when closed or the list is empty.
    pub fn activate(&mut self, area_ids: &[String]) -> Option<JumpTarget> {
        if !self.open {
            return None;
        }
        let target = area_ids.get(self.selected).map(|id| JumpTarget {
            area_id: id.clone(),
        });
        self.close();
        target
    }
}
