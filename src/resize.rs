//! Eight-handle room resize gesture.
//!
//! A [`ResizeGesture`] is created on pointer-down over one of a room's resize
//! handles and dropped on pointer-up. Each pointer-move recomputes the room's
//! geometry from the gesture's start state, never incrementally, so rounding
//! does not accumulate across ticks.
//!
//! Rules per direction, with `(dx, dy)` the pointer delta converted to meters:
//!
//! | Direction | Width / height | Origin |
//! |-----------|----------------|--------|
//! | `e` | `max(min, w0 + dx)` | unchanged |
//! | `w` | `max(min, w0 - dx)` | `x0 + (w0 - w) * scale` |
//! | `s` | `max(min, h0 + dy)` | unchanged |
//! | `n` | `max(min, h0 - dy)` | `y0 + (h0 - h) * scale` |
//!
//! Corners combine their horizontal and vertical rule. Sizes are rounded to one
//! decimal after clamping, and the origin shift uses the rounded size so the
//! opposite edge stays put.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use serde::{Deserialize, Serialize};

use crate::consts::SIZE_ROUNDING_STEPS;
use crate::doc::{Room, RoomId};
use crate::units::{Point, Rect, Scale};

/// Compass position of a resize handle on a room's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    /// All handles, clockwise from north.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::Ne,
        ResizeHandle::E,
        ResizeHandle::Se,
        ResizeHandle::S,
        ResizeHandle::Sw,
        ResizeHandle::W,
        ResizeHandle::Nw,
    ];

    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn moves_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    #[must_use]
    pub fn moves_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Nw | Self::Se => "nwse-resize",
            Self::Ne | Self::Sw => "nesw-resize",
        }
    }

    /// Center of this handle on `rect`'s boundary.
    #[must_use]
    pub fn anchor(self, rect: &Rect) -> Point {
        let x = if self.moves_west() {
            rect.x
        } else if self.moves_east() {
            rect.right()
        } else {
            rect.x + rect.width / 2.0
        };
        let y = if self.moves_north() {
            rect.y
        } else if self.moves_south() {
            rect.bottom()
        } else {
            rect.y + rect.height / 2.0
        };
        Point::new(x, y)
    }
}

/// Position (page pixels) and physical size (meters) of a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomGeometry {
    #[must_use]
    pub fn of(room: &Room) -> Self {
        Self { x: room.x, y: room.y, width: room.width, height: room.height }
    }

    /// Write this geometry into `room`.
    pub fn apply_to(self, room: &mut Room) {
        room.x = self.x;
        room.y = self.y;
        room.width = self.width;
        room.height = self.height;
    }
}

/// Context captured at pointer-down on a resize handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    /// Room being resized.
    pub room_id: RoomId,
    /// Handle being dragged.
    pub handle: ResizeHandle,
    /// Pointer position at pointer-down, in page pixels.
    pub pointer_start: Point,
    /// Room geometry at pointer-down.
    pub start: RoomGeometry,
}

impl ResizeGesture {
    #[must_use]
    pub fn begin(room: &Room, handle: ResizeHandle, pointer_start: Point) -> Self {
        Self { room_id: room.id, handle, pointer_start, start: RoomGeometry::of(room) }
    }

    /// Room geometry for a pointer now at `pointer_now`.
    ///
    /// `min_size` is the smallest width/height in meters.
    #[must_use]
    pub fn geometry_at(&self, pointer_now: Point, scale: Scale, min_size: f64) -> RoomGeometry {
        let delta = pointer_now.delta_from(self.pointer_start);
        let dx = scale.px_to_meters(delta.x);
        let dy = scale.px_to_meters(delta.y);
        let start = self.start;
        let mut next = start;

        if self.handle.moves_east() {
            next.width = fit_size(start.width + dx, min_size);
        }
        if self.handle.moves_west() {
            next.width = fit_size(start.width - dx, min_size);
            next.x = start.x + scale.room_px(start.width - next.width);
        }
        if self.handle.moves_south() {
            next.height = fit_size(start.height + dy, min_size);
        }
        if self.handle.moves_north() {
            next.height = fit_size(start.height - dy, min_size);
            next.y = start.y + scale.room_px(start.height - next.height);
        }
        next
    }
}

/// Round `meters` to one decimal place.
#[must_use]
pub fn round_size(meters: f64) -> f64 {
    (meters * SIZE_ROUNDING_STEPS).round() / SIZE_ROUNDING_STEPS
}

/// Floor to `min_size`, then round. Rounding never drops below `min_size`.
fn fit_size(meters: f64, min_size: f64) -> f64 {
    round_size(meters.max(min_size)).max(min_size)
}
