//! Unit conversion between physical lengths and rendered pixels.
//!
//! Rooms are sized in meters, items in centimeters, and both are positioned in
//! pixels. A single [`Scale`] (pixels per meter) is shared by every room and
//! item; rendered geometry is always derived from physical size × scale and is
//! never measured back from the screen.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CM_PER_M, DEFAULT_SCALE_PX_PER_M};
use crate::error::LayoutError;

/// A point in page or room-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise `self + other`.
    #[must_use]
    pub fn offset_by(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }

    /// Replace non-finite components with `0.0`.
    #[must_use]
    pub fn finite_or_zero(self) -> Point {
        Point { x: finite_or_zero(self.x), y: finite_or_zero(self.y) }
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// A square of half-size `radius` centered on `center`.
    #[must_use]
    pub fn around(center: Point, radius: f64) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }
}

/// Rendering scale in pixels per meter.
///
/// Always positive and finite; construct through [`Scale::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Scale(f64);

impl Scale {
    /// Validate and wrap a pixels-per-meter factor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScale` if `px_per_m` is zero, negative, or not finite.
    pub fn new(px_per_m: f64) -> Result<Self, LayoutError> {
        if px_per_m.is_finite() && px_per_m > 0.0 {
            Ok(Self(px_per_m))
        } else {
            Err(LayoutError::InvalidScale(px_per_m))
        }
    }

    /// Pixels per meter.
    #[must_use]
    pub fn px_per_m(self) -> f64 {
        self.0
    }

    /// Convert a room length in meters to pixels.
    #[must_use]
    pub fn room_px(self, meters: f64) -> f64 {
        meters * self.0
    }

    /// Convert an item length in centimeters to pixels.
    #[must_use]
    pub fn item_px(self, centimeters: f64) -> f64 {
        centimeters / CM_PER_M * self.0
    }

    /// Convert a pixel distance back to meters.
    #[must_use]
    pub fn px_to_meters(self, px: f64) -> f64 {
        px / self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE_PX_PER_M)
    }
}

impl TryFrom<f64> for Scale {
    type Error = LayoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scale> for f64 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

/// `v` if finite, else `0.0`.
#[must_use]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
