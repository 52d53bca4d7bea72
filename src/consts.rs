//! Shared numeric constants for the layout engine.

// ── Scale ───────────────────────────────────────────────────────

/// Default rendering scale in pixels per meter.
pub const DEFAULT_SCALE_PX_PER_M: f64 = 10.0;

/// Centimeters per meter; item sizes are stored in centimeters.
pub const CM_PER_M: f64 = 100.0;

// ── Resize ──────────────────────────────────────────────────────

/// Smallest room width or height a resize may produce, in meters.
pub const MIN_ROOM_SIZE_M: f64 = 1.0;

/// Resized room dimensions are rounded to this many steps per meter (one decimal).
pub const SIZE_ROUNDING_STEPS: f64 = 10.0;

// ── Placement defaults ──────────────────────────────────────────

/// Page-pixel origin given to a newly added room.
pub const DEFAULT_ROOM_ORIGIN_PX: f64 = 50.0;

/// Room-local pixel offset given to a newly added item.
pub const DEFAULT_ITEM_OFFSET_PX: f64 = 10.0;

/// Item width and height used when the form leaves them blank, in centimeters.
pub const DEFAULT_ITEM_SIZE_CM: f64 = 50.0;

/// Fill used for rooms created without an explicit color.
pub const DEFAULT_ROOM_COLOR: &str = "#E8F4FD";

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-size of a square resize handle, in screen pixels.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

// ── Rendering ───────────────────────────────────────────────────

/// Item labels longer than this many characters are truncated with an ellipsis.
pub const ITEM_LABEL_MAX_CHARS: usize = 10;
