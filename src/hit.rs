#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{ItemId, LayoutStore, Room, RoomId};
use crate::resize::ResizeHandle;
use crate::units::{Point, Rect, Scale};

/// Which part of the layout was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// A room's body: starts a room drag.
    RoomBody,
    /// A room's resize handle: starts a resize, never a drag.
    RoomHandle(ResizeHandle),
    /// An item inside the room: starts an item drag.
    Item(ItemId),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub room_id: RoomId,
    pub part: HitPart,
}

/// Screen rectangles of a room's eight resize handles, in [`ResizeHandle::ALL`] order.
#[must_use]
pub fn handle_rects(room: &Room, scale: Scale, handle_radius: f64) -> [(ResizeHandle, Rect); 8] {
    let rect = room.rect(scale);
    ResizeHandle::ALL.map(|h| (h, Rect::around(h.anchor(&rect), handle_radius)))
}

/// Find the topmost target under `page_pt`.
///
/// Rooms are searched last-painted first. Within a room, handles win over
/// items and items win over the room body.
#[must_use]
pub fn hit_test(page_pt: Point, store: &LayoutStore, scale: Scale, handle_radius: f64) -> Option<Hit> {
    store.rooms().iter().rev().find_map(|room| hit_room(page_pt, room, store, scale, handle_radius))
}

fn hit_room(page_pt: Point, room: &Room, store: &LayoutStore, scale: Scale, handle_radius: f64) -> Option<Hit> {
    let hit = |part| Some(Hit { room_id: room.id, part });

    if let Some((handle, _)) = handle_rects(room, scale, handle_radius)
        .into_iter()
        .find(|(_, r)| r.contains(page_pt))
    {
        return hit(HitPart::RoomHandle(handle));
    }

    let origin = room.origin();
    if let Some(item) = store
        .items_in(&room.id)
        .rev()
        .find(|item| item.page_rect(origin, scale).contains(page_pt))
    {
        return hit(HitPart::Item(item.id));
    }

    if room.rect(scale).contains(page_pt) {
        return hit(HitPart::RoomBody);
    }
    None
}
