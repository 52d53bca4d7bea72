//! Error types for record operations and configuration.
//!
//! Geometry itself never fails: out-of-range values are clamped, not reported.
//! Only the record-level API (unknown ids, invalid sizes) and configuration
//! parsing surface errors.

use crate::doc::{ItemId, RoomId};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("invalid scale {0}: must be a positive finite number")]
    InvalidScale(f64),
    #[error("invalid room size {width}m x {height}m: both dimensions must be positive")]
    InvalidRoomSize { width: f64, height: f64 },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("cannot parse {var}={value:?} as a number")]
    Parse { var: String, value: String },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: String, value: f64 },
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
