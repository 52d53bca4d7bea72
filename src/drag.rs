//! Pointer drag gesture.
//!
//! A [`DragGesture`] is created on pointer-down over a draggable element and
//! dropped on pointer-up. It knows nothing about what the offset means: for a
//! room it is the page-pixel origin, for an item the room-local position. On
//! every pointer-move it reports `start_offset + (pointer_now - pointer_start)`
//! to a caller-supplied callback, which clamps and writes the record.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::doc::{ItemId, RoomId};
use crate::units::Point;

/// What a drag gesture moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A room; the offset is its page origin.
    Room(RoomId),
    /// An item; the offset is its room-local position.
    Item(ItemId),
}

/// Context captured at pointer-down for an element drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Element being dragged.
    pub target: DragTarget,
    /// Pointer position at pointer-down, in page pixels.
    pub pointer_start: Point,
    /// Element offset at pointer-down. Non-finite components are stored as `0`.
    pub start_offset: Point,
}

impl DragGesture {
    /// Start a drag of `target` whose current offset is `current_offset`.
    #[must_use]
    pub fn begin(target: DragTarget, pointer_start: Point, current_offset: Point) -> Self {
        Self { target, pointer_start, start_offset: current_offset.finite_or_zero() }
    }

    /// Offset the element should move to for a pointer now at `pointer_now`.
    #[must_use]
    pub fn desired_offset(&self, pointer_now: Point) -> Point {
        self.start_offset.offset_by(pointer_now.delta_from(self.pointer_start))
    }

    /// Report the desired offset for `pointer_now` to `on_move`.
    ///
    /// The callback runs synchronously and is responsible for any clamping.
    pub fn motion<R>(&self, pointer_now: Point, on_move: impl FnOnce(DragTarget, Point) -> R) -> R {
        on_move(self.target, self.desired_offset(pointer_now))
    }
}
