//! Spatial layout engine for the room planner.
//!
//! Rooms are laid out on a 2D plane at a declared pixels-per-meter scale and
//! furnishing items are placed inside them. This crate owns everything with
//! geometric state: translating pointer press/move/release into room drags,
//! item drags and eight-handle room resizes, and keeping every item inside its
//! owning room as that room moves or changes size. The host layer wires DOM
//! events to the engine and handles the resulting [`engine::Action`]s
//! (persisting records, refreshing labels, repainting).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Room and item records and the in-memory layout store |
//! | [`units`] | Scale and meter/centimeter to pixel conversions |
//! | [`drag`] | Pointer drag gesture (press, move, release) |
//! | [`resize`] | Eight-handle room resize gesture |
//! | [`containment`] | Clamping items into their room's rendered bounds |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing rooms, items and resize handles |
//! | [`render`] | Paint-list projection and canvas drawing |
//! | [`config`] | Engine configuration and environment overrides |
//! | [`error`] | Error types for record operations and configuration |
//! | [`consts`] | Shared numeric constants (defaults, minimum sizes, etc.) |

pub mod config;
pub mod consts;
pub mod containment;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod render;
pub mod resize;
pub mod units;
