//! Drag gesture state for the interaction controller.
//!
//! A drag exists only between a pointer-down that lands on a handle and the
//! matching pointer-up (or the pointer leaving the surface). The state
//! carries the handle identity and the last pointer position, which is all
//! the context needed to apply incremental moves.

use crate::model::{HandleRole, Point};

/// The gesture currently in progress, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// No gesture; waiting for the next pointer-down.
    Idle,
    /// A handle is grabbed and follows the pointer.
    DraggingHandle {
        /// Index of the segment owning the grabbed handle.
        segment: usize,
        /// Which point of that segment is grabbed.
        role: HandleRole,
        /// Pointer position at the previous event.
        last: Point,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::DraggingHandle { .. })
    }
}
