//! Rendering: projects layout state to a paint list and draws it to a 2D context.
//!
//! [`scene`] is pure: it turns rooms and items into [`Shape`]s whose geometry is
//! always physical size × scale, so the pixels shown and the bounds used by
//! containment never diverge. [`draw`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; it does not mutate any state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::ITEM_LABEL_MAX_CHARS;
use crate::doc::{Item, ItemId, LayoutStore, Room, RoomId};
use crate::hit::handle_rects;
use crate::input::UiState;
use crate::resize::ResizeHandle;
use crate::units::{Rect, Scale};

/// Selection dash segment length in pixels.
const SELECTION_DASH_PX: f64 = 4.0;
const SELECTION_STROKE: &str = "#1E90FF";
const ROOM_STROKE: &str = "#5B7083";
const ITEM_FILL: &str = "rgba(255, 255, 255, 0.9)";
const TEXT_FILL: &str = "#1F2933";
const LABEL_FONT: &str = "12px sans-serif";

/// A room as painted.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomShape {
    pub id: RoomId,
    /// Page pixel bounds.
    pub rect: Rect,
    pub fill: String,
    pub title: String,
    /// Physical dimensions, e.g. `10m × 8m`.
    pub dimensions: String,
    pub selected: bool,
    pub handles: [(ResizeHandle, Rect); 8],
}

/// An item as painted.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemShape {
    pub id: ItemId,
    pub room_id: RoomId,
    /// Page pixel bounds.
    pub rect: Rect,
    /// Name shortened for display.
    pub label: String,
    /// Full name.
    pub tooltip: String,
    pub selected: bool,
}

/// One entry in the paint list.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Room(RoomShape),
    Item(ItemShape),
}

/// Build the paint list: each room in paint order, followed by its items.
#[must_use]
pub fn scene(store: &LayoutStore, scale: Scale, ui: &UiState, handle_radius: f64) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(store.room_count() + store.item_count());
    for room in store.rooms() {
        shapes.push(Shape::Room(room_shape(room, scale, ui, handle_radius)));
        shapes.extend(
            store
                .items_in(&room.id)
                .map(|item| Shape::Item(item_shape(item, room, scale, ui))),
        );
    }
    shapes
}

fn room_shape(room: &Room, scale: Scale, ui: &UiState, handle_radius: f64) -> RoomShape {
    RoomShape {
        id: room.id,
        rect: room.rect(scale),
        fill: room.color.clone(),
        title: room.name.clone(),
        dimensions: dimensions_label(room.width, room.height),
        selected: ui.selected_room == Some(room.id),
        handles: handle_rects(room, scale, handle_radius),
    }
}

fn item_shape(item: &Item, room: &Room, scale: Scale, ui: &UiState) -> ItemShape {
    ItemShape {
        id: item.id,
        room_id: room.id,
        rect: item.page_rect(room.origin(), scale),
        label: truncate_label(&item.name),
        tooltip: item.name.clone(),
        selected: ui.selected_item == Some(item.id),
    }
}

/// `"{w}m × {h}m"` with sizes in meters.
#[must_use]
pub fn dimensions_label(width_m: f64, height_m: f64) -> String {
    format!("{width_m}m × {height_m}m")
}

/// Names longer than the display limit are cut and suffixed with `...`.
#[must_use]
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() <= ITEM_LABEL_MAX_CHARS {
        return name.to_string();
    }
    let mut short: String = name.chars().take(ITEM_LABEL_MAX_CHARS).collect();
    short.push_str("...");
    short
}

/// Draw the paint list.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    shapes: &[Shape],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_font(LABEL_FONT);

    for shape in shapes {
        match shape {
            Shape::Room(room) => draw_room(ctx, room)?,
            Shape::Item(item) => draw_item(ctx, item)?,
        }
    }
    Ok(())
}

fn draw_room(ctx: &CanvasRenderingContext2d, room: &RoomShape) -> Result<(), JsValue> {
    let r = room.rect;
    ctx.save();

    ctx.set_fill_style_str(&room.fill);
    ctx.fill_rect(r.x, r.y, r.width, r.height);
    ctx.set_stroke_style_str(ROOM_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(r.x, r.y, r.width, r.height);

    ctx.set_fill_style_str(TEXT_FILL);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(&room.title, r.x + 4.0, r.y + 4.0)?;
    ctx.set_text_baseline("bottom");
    ctx.fill_text(&room.dimensions, r.x + 4.0, r.bottom() - 4.0)?;

    if room.selected {
        draw_selection_box(ctx, r)?;
    }

    ctx.set_fill_style_str("#fff");
    ctx.set_stroke_style_str(SELECTION_STROKE);
    for (_, h) in &room.handles {
        ctx.fill_rect(h.x, h.y, h.width, h.height);
        ctx.stroke_rect(h.x, h.y, h.width, h.height);
    }

    ctx.restore();
    Ok(())
}

fn draw_item(ctx: &CanvasRenderingContext2d, item: &ItemShape) -> Result<(), JsValue> {
    let r = item.rect;
    ctx.save();

    ctx.set_fill_style_str(ITEM_FILL);
    ctx.fill_rect(r.x, r.y, r.width, r.height);
    ctx.set_stroke_style_str(ROOM_STROKE);
    ctx.stroke_rect(r.x, r.y, r.width, r.height);

    ctx.set_fill_style_str(TEXT_FILL);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&item.label, r.x + r.width / 2.0, r.y + r.height / 2.0)?;

    if item.selected {
        draw_selection_box(ctx, r)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_selection_box(ctx: &CanvasRenderingContext2d, r: Rect) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(SELECTION_STROKE);
    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH_PX.into());
    dash_array.push(&SELECTION_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(r.x - 2.0, r.y - 2.0, r.width + 4.0, r.height + 4.0);
    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}
