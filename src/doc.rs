//! Document model: rooms, items, and the in-memory layout store.
//!
//! This module defines the records the engine operates on (`Room`, `Item`),
//! creation inputs from the form layer (`NewRoom`, `NewItem`), sparse-update
//! types for edits (`RoomPatch`, `ItemPatch`), and the runtime store that owns
//! all live records (`LayoutStore`).
//!
//! Rooms and items are independent flat collections. An item refers to its
//! room by id only; the store keeps both in paint order (insertion order), and
//! the renderer draws each room followed by its items.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_ITEM_SIZE_CM, DEFAULT_ROOM_COLOR};
use crate::units::{Point, Rect, Scale};

/// Unique identifier for a room.
pub type RoomId = Uuid;

/// Unique identifier for an item.
pub type ItemId = Uuid;

/// A room on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Physical width in meters.
    pub width: f64,
    /// Physical height in meters.
    pub height: f64,
    /// Left edge in page pixels.
    pub x: f64,
    /// Top edge in page pixels.
    pub y: f64,
    /// Fill color as a CSS color string.
    #[serde(default = "default_room_color")]
    pub color: String,
}

impl Room {
    /// Top-left corner in page pixels.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rendered width and height in pixels.
    #[must_use]
    pub fn size_px(&self, scale: Scale) -> (f64, f64) {
        (scale.room_px(self.width), scale.room_px(self.height))
    }

    /// Rendered bounds in page pixels.
    #[must_use]
    pub fn rect(&self, scale: Scale) -> Rect {
        let (w, h) = self.size_px(scale);
        Rect::new(self.x, self.y, w, h)
    }
}

/// A furnishing item placed inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// The room this item is placed in.
    #[serde(alias = "room_id")]
    pub room_id: RoomId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Physical width in centimeters.
    pub width: f64,
    /// Physical height in centimeters.
    pub height: f64,
    /// Left edge in room-local pixels.
    pub x: f64,
    /// Top edge in room-local pixels.
    pub y: f64,
    /// Free-form category tag.
    #[serde(default)]
    pub category: String,
    /// Purchase price.
    #[serde(default)]
    pub price: f64,
    /// Shop link.
    #[serde(default)]
    pub link: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl Item {
    /// Room-local top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rendered width and height in pixels.
    #[must_use]
    pub fn size_px(&self, scale: Scale) -> (f64, f64) {
        (scale.item_px(self.width), scale.item_px(self.height))
    }

    /// Rendered bounds in page pixels, given the owning room's origin.
    #[must_use]
    pub fn page_rect(&self, room_origin: Point, scale: Scale) -> Rect {
        let (w, h) = self.size_px(scale);
        Rect::new(room_origin.x + self.x, room_origin.y + self.y, w, h)
    }
}

/// Input for creating a room. Position is assigned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_room_color")]
    pub color: String,
}

impl NewRoom {
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self { name: name.into(), width, height, color: default_room_color() }
    }
}

/// Input for creating an item. Position is assigned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(alias = "room_id")]
    pub room_id: RoomId,
    pub name: String,
    #[serde(default = "default_item_size")]
    pub width: f64,
    #[serde(default = "default_item_size")]
    pub height: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl NewItem {
    /// An item with the default 50×50 cm footprint and empty descriptive fields.
    #[must_use]
    pub fn new(room_id: RoomId, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
            width: DEFAULT_ITEM_SIZE_CM,
            height: DEFAULT_ITEM_SIZE_CM,
            category: String::new(),
            price: 0.0,
            link: String::new(),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Set the footprint in centimeters.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub(crate) fn into_item(self, id: ItemId, position: Point) -> Item {
        Item {
            id,
            room_id: self.room_id,
            name: self.name,
            width: self.width,
            height: self.height,
            x: position.x,
            y: position.y,
            category: self.category,
            price: self.price,
            link: self.link,
            description: self.description,
            image: self.image,
        }
    }
}

/// Sparse edit for a room. Position is never edited through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RoomPatch {
    /// Whether applying this patch changes the room's physical size.
    #[must_use]
    pub fn changes_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Apply present fields to `room`.
    pub fn apply(&self, room: &mut Room) {
        if let Some(ref name) = self.name {
            room.name.clone_from(name);
        }
        if let Some(w) = self.width {
            room.width = w;
        }
        if let Some(h) = self.height {
            room.height = h;
        }
        if let Some(ref color) = self.color {
            room.color.clone_from(color);
        }
    }
}

/// Sparse edit for an item. Position is never edited through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ItemPatch {
    /// Apply present fields to `item`.
    pub fn apply(&self, item: &mut Item) {
        if let Some(room_id) = self.room_id {
            item.room_id = room_id;
        }
        if let Some(ref name) = self.name {
            item.name.clone_from(name);
        }
        if let Some(w) = self.width {
            item.width = w;
        }
        if let Some(h) = self.height {
            item.height = h;
        }
        if let Some(ref category) = self.category {
            item.category.clone_from(category);
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(ref link) = self.link {
            item.link.clone_from(link);
        }
        if let Some(ref description) = self.description {
            item.description.clone_from(description);
        }
        if let Some(ref image) = self.image {
            item.image.clone_from(image);
        }
    }
}

/// In-memory store of rooms and items, both kept in paint order.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore {
    rooms: Vec<Room>,
    items: Vec<Item>,
}

impl LayoutStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rooms in paint order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All items in paint order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == *id)
    }

    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == *id)
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == *id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == *id)
    }

    /// Items placed in `room_id`, in paint order.
    pub fn items_in<'a>(&'a self, room_id: &RoomId) -> impl DoubleEndedIterator<Item = &'a Item> + use<'a> {
        let room_id = *room_id;
        self.items.iter().filter(move |i| i.room_id == room_id)
    }

    /// Mutable access to items placed in `room_id`.
    pub fn items_in_mut<'a>(&'a mut self, room_id: &RoomId) -> impl Iterator<Item = &'a mut Item> + use<'a> {
        let room_id = *room_id;
        self.items.iter_mut().filter(move |i| i.room_id == room_id)
    }

    /// Insert a room, or replace the room with the same id in place.
    pub fn insert_room(&mut self, room: Room) {
        match self.rooms.iter().position(|r| r.id == room.id) {
            Some(idx) => self.rooms[idx] = room,
            None => self.rooms.push(room),
        }
    }

    /// Insert an item, or replace the item with the same id in place.
    pub fn insert_item(&mut self, item: Item) {
        match self.items.iter().position(|i| i.id == item.id) {
            Some(idx) => self.items[idx] = item,
            None => self.items.push(item),
        }
    }

    /// Remove a room and every item that references it.
    ///
    /// Returns the removed room and its items, or `None` if the room was absent.
    pub fn remove_room(&mut self, id: &RoomId) -> Option<(Room, Vec<Item>)> {
        let idx = self.rooms.iter().position(|r| r.id == *id)?;
        let room = self.rooms.remove(idx);
        let (removed, kept): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.items).into_iter().partition(|i| i.room_id == *id);
        self.items = kept;
        Some((room, removed))
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == *id)?;
        Some(self.items.remove(idx))
    }

    /// Replace both collections.
    pub fn load(&mut self, rooms: Vec<Room>, items: Vec<Item>) {
        self.rooms = rooms;
        self.items = items;
    }

    /// Number of rooms currently in the store.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no rooms and no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.items.is_empty()
    }
}

fn default_room_color() -> String {
    DEFAULT_ROOM_COLOR.to_string()
}

fn default_item_size() -> f64 {
    DEFAULT_ITEM_SIZE_CM
}
