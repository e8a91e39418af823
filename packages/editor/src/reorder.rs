//! # Reorder Engine
//!
//! Drag-and-drop moves are array moves, not swaps: every element between
//! `from` and `to` shifts one slot toward `from`.
//!
//! The selection keeps pointing at the same section:
//!
//! ```text
//! sel == from            → to
//! from < sel <= to       → sel - 1   (moved item passed below it)
//! to <= sel < from       → sel + 1   (moved item passed above it)
//! otherwise              → unchanged
//! ```

use crate::composition::{PageSection, Selection};

pub use pagecraft_sections::move_item;

/// Where the selection ends up after moving `from` to `to`
pub fn shift_selection(selection: Selection, from: usize, to: usize) -> Selection {
    let sel = selection?;

    let shifted = if sel == from {
        to
    } else if from < sel && sel <= to {
        sel - 1
    } else if to <= sel && sel < from {
        sel + 1
    } else {
        sel
    };

    Some(shifted)
}

/// Compute the reordered list and selection, or `None` when the move is a no-op
pub fn reorder(
    sections: &[PageSection],
    from: usize,
    to: usize,
    selection: Selection,
) -> Option<(Vec<PageSection>, Selection)> {
    if from == to || from >= sections.len() || to >= sections.len() {
        return None;
    }

    if sections[from].id == sections[to].id {
        return None;
    }

    let mut reordered = sections.to_vec();
    move_item(&mut reordered, from, to);

    Some((reordered, shift_selection(selection, from, to)))
}
