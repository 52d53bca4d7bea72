//! Engine configuration with environment overrides.

use std::env::VarError;

use crate::consts::{
    DEFAULT_ITEM_OFFSET_PX, DEFAULT_ROOM_ORIGIN_PX, DEFAULT_SCALE_PX_PER_M, HANDLE_RADIUS_PX, MIN_ROOM_SIZE_M,
};
use crate::error::ConfigError;
use crate::units::{Point, Scale};

pub const SCALE_VAR: &str = "FLOORPLAN_SCALE";
pub const MIN_ROOM_VAR: &str = "FLOORPLAN_MIN_ROOM_M";
pub const HANDLE_VAR: &str = "FLOORPLAN_HANDLE_PX";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Initial rendering scale.
    pub scale: Scale,
    /// Smallest width/height a resize may produce, in meters.
    pub min_room_size_m: f64,
    /// Half-size of a resize handle's hit square, in pixels.
    pub handle_radius_px: f64,
    /// Page origin for newly added rooms.
    pub room_origin: Point,
    /// Room-local position for newly added items.
    pub item_offset: Point,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            min_room_size_m: MIN_ROOM_SIZE_M,
            handle_radius_px: HANDLE_RADIUS_PX,
            room_origin: Point::new(DEFAULT_ROOM_ORIGIN_PX, DEFAULT_ROOM_ORIGIN_PX),
            item_offset: Point::new(DEFAULT_ITEM_OFFSET_PX, DEFAULT_ITEM_OFFSET_PX),
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, defaulting anything unset.
    ///
    /// Optional:
    /// - `FLOORPLAN_SCALE`: pixels per meter, default 10
    /// - `FLOORPLAN_MIN_ROOM_M`: minimum room side in meters, default 1
    /// - `FLOORPLAN_HANDLE_PX`: resize handle half-size in pixels, default 6
    ///
    /// # Errors
    ///
    /// Returns `Parse` for a value that is not a number or not valid Unicode,
    /// and `NotPositive` (or a wrapped `InvalidScale`) for zero, negative or
    /// non-finite values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            // Surfaces as a `Parse` error carrying the lossy text.
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let scale = Scale::new(parse_f64(&lookup, SCALE_VAR, DEFAULT_SCALE_PX_PER_M)?)?;
        let min_room_size_m = positive(MIN_ROOM_VAR, parse_f64(&lookup, MIN_ROOM_VAR, defaults.min_room_size_m)?)?;
        let handle_radius_px = positive(HANDLE_VAR, parse_f64(&lookup, HANDLE_VAR, defaults.handle_radius_px)?)?;
        Ok(Self { scale, min_room_size_m, handle_radius_px, ..defaults })
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: f64) -> Result<f64, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Parse { var: var.to_string(), value: raw.clone() }),
    }
}

fn positive(var: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { var: var.to_string(), value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
