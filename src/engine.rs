use tracing::{debug, info, trace, warn};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EngineConfig;
use crate::containment::{contain_item, enforce_all, enforce_room};
use crate::doc::{Item, ItemId, ItemPatch, LayoutStore, NewItem, NewRoom, Room, RoomId, RoomPatch};
use crate::drag::{DragGesture, DragTarget};
use crate::error::LayoutError;
use crate::hit::{self, Hit, HitPart};
use crate::input::{Button, InputState, UiState};
use crate::render::{self, Shape};
use crate::resize::{ResizeGesture, ResizeHandle};
use crate::units::{Point, Rect, Scale, finite_or_zero};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor while an element follows the pointer.
pub const CURSOR_GRABBING: &str = "grabbing";
/// Cursor after a drag is released.
pub const CURSOR_MOVE: &str = "move";
/// Cursor after a resize is released.
pub const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A room's origin or size changed; re-read it and refresh labels/persisted copies.
    RoomGeometryChanged(RoomId),
    /// An item's position changed.
    ItemGeometryChanged(ItemId),
    /// The selected room/item changed.
    SelectionChanged(UiState),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Engine state and logic that do not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub config: EngineConfig,
    store: LayoutStore,
    scale: Scale,
    ui: UiState,
    input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            store: LayoutStore::new(),
            scale: config.scale,
            ui: UiState::default(),
            input: InputState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace all rooms and items, then clamp every item into its room.
    ///
    /// Rooms without a positive size are skipped. Non-finite positions load as
    /// `0`. A gesture in progress keeps running against the new records and
    /// ends on the next move if its target is gone. Returns the ids of items
    /// that moved.
    pub fn load(&mut self, rooms: Vec<Room>, mut items: Vec<Item>) -> Vec<ItemId> {
        let rooms: Vec<Room> = rooms
            .into_iter()
            .filter_map(|mut room| match check_room_size(room.width, room.height) {
                Ok(()) => {
                    room.x = finite_or_zero(room.x);
                    room.y = finite_or_zero(room.y);
                    Some(room)
                }
                Err(err) => {
                    warn!(room_id = %room.id, %err, "room skipped on load");
                    None
                }
            })
            .collect();
        for item in &mut items {
            item.x = finite_or_zero(item.x);
            item.y = finite_or_zero(item.y);
        }
        info!(rooms = rooms.len(), items = items.len(), "layout loaded");
        self.store.load(rooms, items);
        self.ui = UiState::default();
        enforce_all(&mut self.store, self.scale)
    }

    /// Change the shared scale and re-clamp every item. Returns the ids of items that moved.
    pub fn set_scale(&mut self, scale: Scale) -> Vec<ItemId> {
        debug!(px_per_m = scale.px_per_m(), "scale changed");
        self.scale = scale;
        enforce_all(&mut self.store, scale)
    }

    /// Add a room at the configured default origin.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomSize` if either dimension is not a positive number.
    pub fn add_room(&mut self, new_room: NewRoom) -> Result<RoomId, LayoutError> {
        check_room_size(new_room.width, new_room.height)?;
        let origin = self.config.room_origin;
        let room = Room {
            id: Uuid::new_v4(),
            name: new_room.name,
            width: new_room.width,
            height: new_room.height,
            x: origin.x,
            y: origin.y,
            color: new_room.color,
        };
        let id = room.id;
        info!(room_id = %id, name = %room.name, "room added");
        self.store.insert_room(room);
        Ok(id)
    }

    /// Edit a room's name, size or color. Position is preserved.
    ///
    /// Returns the ids of items re-clamped by a size change.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` for an unknown id and `InvalidRoomSize` if the
    /// resulting size is not positive.
    pub fn update_room(&mut self, id: &RoomId, patch: &RoomPatch) -> Result<Vec<ItemId>, LayoutError> {
        let room = self.store.room_mut(id).ok_or(LayoutError::RoomNotFound(*id))?;
        let width = patch.width.unwrap_or(room.width);
        let height = patch.height.unwrap_or(room.height);
        if let Err(err) = check_room_size(width, height) {
            warn!(room_id = %id, %err, "room update rejected");
            return Err(err);
        }
        patch.apply(room);
        if patch.changes_size() {
            Ok(enforce_room(&mut self.store, id, self.scale))
        } else {
            Ok(Vec::new())
        }
    }

    /// Delete a room and every item placed in it. Returns how many items were removed.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` for an unknown id.
    pub fn delete_room(&mut self, id: &RoomId) -> Result<usize, LayoutError> {
        let (room, items) = self.store.remove_room(id).ok_or(LayoutError::RoomNotFound(*id))?;
        info!(room_id = %room.id, items = items.len(), "room deleted");
        if self.ui.selected_room == Some(room.id) {
            self.ui.selected_room = None;
        }
        if let Some(sel) = self.ui.selected_item
            && items.iter().any(|i| i.id == sel)
        {
            self.ui.selected_item = None;
        }
        Ok(items.len())
    }

    /// Add an item to an existing room at the configured offset, clamped into the room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `new_item.room_id` does not name a room.
    pub fn add_item(&mut self, new_item: NewItem) -> Result<ItemId, LayoutError> {
        let Some(room) = self.store.room(&new_item.room_id) else {
            warn!(room_id = %new_item.room_id, "item added to unknown room");
            return Err(LayoutError::RoomNotFound(new_item.room_id));
        };
        let mut item = new_item.into_item(Uuid::new_v4(), self.config.item_offset);
        contain_item(&mut item, room, self.scale);
        let id = item.id;
        info!(item_id = %id, room_id = %item.room_id, "item added");
        self.store.insert_item(item);
        Ok(id)
    }

    /// Edit an item's descriptive fields, size or room. Position is preserved,
    /// then clamped into the (possibly new) room. Returns whether the clamp moved it.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for an unknown id and `RoomNotFound` if the item
    /// is moved to, or still references, a room that does not exist.
    pub fn update_item(&mut self, id: &ItemId, patch: &ItemPatch) -> Result<bool, LayoutError> {
        let current_room = self.store.item(id).ok_or(LayoutError::ItemNotFound(*id))?.room_id;
        let room_id = patch.room_id.unwrap_or(current_room);
        let room = self.store.room(&room_id).cloned().ok_or(LayoutError::RoomNotFound(room_id))?;
        let item = self.store.item_mut(id).ok_or(LayoutError::ItemNotFound(*id))?;
        patch.apply(item);
        Ok(contain_item(item, &room, self.scale))
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for an unknown id.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.store.remove_item(id).ok_or(LayoutError::ItemNotFound(*id))?;
        info!(item_id = %id, "item deleted");
        if self.ui.selected_item == Some(*id) {
            self.ui.selected_item = None;
        }
        Ok(())
    }

    // --- Selection ---

    /// Select a room and clear any item selection.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` for an unknown id.
    pub fn select_room(&mut self, id: &RoomId) -> Result<(), LayoutError> {
        if self.store.room(id).is_none() {
            return Err(LayoutError::RoomNotFound(*id));
        }
        self.ui = UiState { selected_room: Some(*id), selected_item: None };
        Ok(())
    }

    /// Select an item together with its room.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for an unknown id.
    pub fn select_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let room_id = self.store.item(id).ok_or(LayoutError::ItemNotFound(*id))?.room_id;
        self.ui = UiState { selected_room: Some(room_id), selected_item: Some(*id) };
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.ui = UiState::default();
    }

    // --- Input events ---

    /// Start a drag or resize under `page_pt`, or clear the selection on empty canvas.
    ///
    /// Ignored while another gesture is active or for non-primary buttons.
    pub fn on_pointer_down(&mut self, page_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }

        let Some(Hit { room_id, part }) = hit::hit_test(page_pt, &self.store, self.scale, self.config.handle_radius_px)
        else {
            if self.ui == UiState::default() {
                return Vec::new();
            }
            self.clear_selection();
            return vec![Action::SelectionChanged(self.ui), Action::RenderNeeded];
        };

        match part {
            HitPart::RoomHandle(handle) => self.begin_resize(room_id, handle, page_pt),
            HitPart::Item(item_id) => self.begin_item_drag(room_id, item_id, page_pt),
            HitPart::RoomBody => self.begin_room_drag(room_id, page_pt),
        }
    }

    /// Advance the active gesture to `page_pt`.
    pub fn on_pointer_move(&mut self, page_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging(gesture) => self.drag_motion(gesture, page_pt),
            InputState::Resizing(gesture) => self.resize_motion(gesture, page_pt),
        }
    }

    /// End the active gesture. The last computed geometry is kept.
    pub fn on_pointer_up(&mut self, _page_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.end_gesture()
    }

    /// Leave the active gesture and restore the resting cursor.
    fn end_gesture(&mut self) -> Vec<Action> {
        let cursor = match std::mem::take(&mut self.input) {
            InputState::Idle => return Vec::new(),
            InputState::Dragging(gesture) => {
                debug!(drag_target = ?gesture.target, "drag ended");
                CURSOR_MOVE
            }
            InputState::Resizing(gesture) => {
                debug!(room_id = %gesture.room_id, handle = ?gesture.handle, "resize ended");
                CURSOR_DEFAULT
            }
        };
        vec![Action::SetCursor(cursor), Action::RenderNeeded]
    }

    fn begin_resize(&mut self, room_id: RoomId, handle: ResizeHandle, page_pt: Point) -> Vec<Action> {
        let Some(room) = self.store.room(&room_id) else {
            return Vec::new();
        };
        debug!(%room_id, ?handle, "resize started");
        self.input = InputState::Resizing(ResizeGesture::begin(room, handle, page_pt));
        self.ui = UiState { selected_room: Some(room_id), selected_item: None };
        vec![Action::SelectionChanged(self.ui), Action::SetCursor(handle.cursor()), Action::RenderNeeded]
    }

    fn begin_room_drag(&mut self, room_id: RoomId, page_pt: Point) -> Vec<Action> {
        let Some(room) = self.store.room(&room_id) else {
            return Vec::new();
        };
        debug!(%room_id, "room drag started");
        self.input = InputState::Dragging(DragGesture::begin(DragTarget::Room(room_id), page_pt, room.origin()));
        self.ui = UiState { selected_room: Some(room_id), selected_item: None };
        vec![Action::SelectionChanged(self.ui), Action::SetCursor(CURSOR_GRABBING), Action::RenderNeeded]
    }

    fn begin_item_drag(&mut self, room_id: RoomId, item_id: ItemId, page_pt: Point) -> Vec<Action> {
        let Some(item) = self.store.item(&item_id) else {
            return Vec::new();
        };
        debug!(%item_id, %room_id, "item drag started");
        self.input = InputState::Dragging(DragGesture::begin(DragTarget::Item(item_id), page_pt, item.position()));
        self.ui = UiState { selected_room: Some(room_id), selected_item: Some(item_id) };
        vec![Action::SelectionChanged(self.ui), Action::SetCursor(CURSOR_GRABBING), Action::RenderNeeded]
    }

    fn drag_motion(&mut self, gesture: DragGesture, page_pt: Point) -> Vec<Action> {
        let scale = self.scale;
        let store = &mut self.store;
        let changed = gesture.motion(page_pt, |target, offset| match target {
            DragTarget::Room(id) => {
                let room = store.room_mut(&id)?;
                room.x = offset.x;
                room.y = offset.y;
                Some(Action::RoomGeometryChanged(id))
            }
            DragTarget::Item(id) => {
                let room = store.item(&id).and_then(|item| store.room(&item.room_id)).cloned()?;
                let item = store.item_mut(&id)?;
                item.x = offset.x;
                item.y = offset.y;
                contain_item(item, &room, scale);
                Some(Action::ItemGeometryChanged(id))
            }
        });

        let Some(action) = changed else {
            debug!(drag_target = ?gesture.target, "drag target vanished");
            return self.end_gesture();
        };
        trace!(?action, x = page_pt.x, y = page_pt.y, "drag tick");
        vec![action, Action::RenderNeeded]
    }

    fn resize_motion(&mut self, gesture: ResizeGesture, page_pt: Point) -> Vec<Action> {
        let geometry = gesture.geometry_at(page_pt, self.scale, self.config.min_room_size_m);
        let Some(room) = self.store.room_mut(&gesture.room_id) else {
            debug!(room_id = %gesture.room_id, "resized room vanished");
            return self.end_gesture();
        };
        geometry.apply_to(room);
        let moved = enforce_room(&mut self.store, &gesture.room_id, self.scale);
        trace!(room_id = %gesture.room_id, ?geometry, moved = moved.len(), "resize tick");

        let mut actions = Vec::with_capacity(moved.len() + 2);
        actions.push(Action::RoomGeometryChanged(gesture.room_id));
        actions.extend(moved.into_iter().map(Action::ItemGeometryChanged));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> UiState {
        self.ui
    }

    /// The active gesture.
    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        self.store.rooms()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.store.room(id)
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.store.item(id)
    }

    /// Items placed in `room_id`, in paint order.
    #[must_use]
    pub fn items_in(&self, room_id: &RoomId) -> Vec<&Item> {
        self.store.items_in(room_id).collect()
    }

    /// A room's rendered bounds in page pixels.
    #[must_use]
    pub fn room_rect(&self, id: &RoomId) -> Option<Rect> {
        self.store.room(id).map(|r| r.rect(self.scale))
    }

    /// An item's rendered bounds in page pixels.
    #[must_use]
    pub fn item_rect(&self, id: &ItemId) -> Option<Rect> {
        let item = self.store.item(id)?;
        let room = self.store.room(&item.room_id)?;
        Some(item.page_rect(room.origin(), self.scale))
    }

    /// The paint list for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<Shape> {
        render::scene(&self.store, self.scale, &self.ui, self.config.handle_radius_px)
    }
}

fn check_room_size(width: f64, height: f64) -> Result<(), LayoutError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidRoomSize { width, height })
    }
}

/// The full layout engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.viewport_width = width_css;
        self.core.viewport_height = height_css;
        self.core.dpr = dpr;
        self.canvas.set_width(backing_px(width_css, dpr));
        self.canvas.set_height(backing_px(height_css, dpr));
    }

    pub fn on_pointer_down(&mut self, page_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(page_pt, button)
    }

    pub fn on_pointer_move(&mut self, page_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(page_pt)
    }

    pub fn on_pointer_up(&mut self, page_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(page_pt, button)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core.scene(), self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(0.0) as u32
}
