//! Containment: keeping items inside their room's rendered rectangle.
//!
//! Bounds are always computed from physical size × scale, so the clamp used
//! while dragging an item and the clamp re-applied after a room resize see the
//! same room rectangle. An item larger than its room is pinned to `0`; negative
//! item sizes are passed through unchecked.

#[cfg(test)]
#[path = "containment_test.rs"]
mod containment_test;

use crate::doc::{Item, ItemId, LayoutStore, Room, RoomId};
use crate::units::{Point, Scale};

/// `max(lo, min(v, hi))`. When `hi < lo` or `v` is not finite the result is `lo`.
#[must_use]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if !v.is_finite() {
        return lo;
    }
    lo.max(v.min(hi))
}

/// Clamp a room-local position so an item of `item_size` px fits in `room_size` px.
#[must_use]
pub fn clamp_position(pos: Point, item_size: (f64, f64), room_size: (f64, f64)) -> Point {
    Point {
        x: clamp(pos.x, 0.0, room_size.0 - item_size.0),
        y: clamp(pos.y, 0.0, room_size.1 - item_size.1),
    }
}

/// Clamp `item` into `room` in place. Returns `true` if the position changed.
pub fn contain_item(item: &mut Item, room: &Room, scale: Scale) -> bool {
    let clamped = clamp_position(item.position(), item.size_px(scale), room.size_px(scale));
    if clamped == item.position() {
        return false;
    }
    item.x = clamped.x;
    item.y = clamped.y;
    true
}

/// Re-clamp every item in `room_id`. Returns the ids of items that moved.
///
/// A missing room leaves its items untouched.
pub fn enforce_room(store: &mut LayoutStore, room_id: &RoomId, scale: Scale) -> Vec<ItemId> {
    let Some(room) = store.room(room_id).cloned() else {
        return Vec::new();
    };
    store
        .items_in_mut(room_id)
        .filter_map(|item| contain_item(item, &room, scale).then_some(item.id))
        .collect()
}

/// Re-clamp every item in every room. Returns the ids of items that moved.
pub fn enforce_all(store: &mut LayoutStore, scale: Scale) -> Vec<ItemId> {
    let room_ids: Vec<RoomId> = store.rooms().iter().map(|r| r.id).collect();
    room_ids
        .iter()
        .flat_map(|id| enforce_room(store, id, scale))
        .collect()
}
