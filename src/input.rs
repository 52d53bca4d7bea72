//! Input model: pointer buttons, selection state, and the gesture state machine.
//!
//! `InputState` is the single active gesture tracked between pointer-down and
//! pointer-up. Because drag and resize are variants of the same enum, a resize
//! in progress excludes any drag by construction: there is no separate
//! "resizing" flag for the two controllers to keep in sync.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ItemId, RoomId};
use crate::drag::DragGesture;
use crate::resize::ResizeGesture;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Selection state visible to the renderer. Highlighting only; no geometric effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently selected room, if any.
    pub selected_room: Option<RoomId>,
    /// Currently selected item, if any.
    pub selected_item: Option<ItemId>,
}

/// The active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A room or item is following the pointer.
    Dragging(DragGesture),
    /// A room is being resized from one of its handles.
    Resizing(ResizeGesture),
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a resize is in progress. Drag motion is suppressed while true.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }
}
