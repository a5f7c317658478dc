//! Common dimension types and traits.
//!
//! Boxes and buffered item requirements are both described by a length,
//! width and height triple. This module provides that triple together with
//! the small amount of arithmetic the selectors need.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Length, width and height in inches.
///
/// # Examples
/// ```
/// use box_advisor::types::Dims;
///
/// let required = Dims::new(12.0, 10.0, 8.0);
/// assert_eq!(required.volume(), 960.0);
/// assert_eq!(required.max_dim(), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dims {
    pub l: f64,
    pub w: f64,
    pub h: f64,
}

impl Dims {
    /// Creates a new dimension triple.
    #[inline]
    pub const fn new(l: f64, w: f64, h: f64) -> Self {
        Self { l, w, h }
    }

    /// Grows every axis by `buffer` on both sides.
    #[inline]
    pub fn padded(&self, buffer: f64) -> Self {
        let pad = buffer * 2.0;
        Self::new(self.l + pad, self.w + pad, self.h + pad)
    }

    /// Product of all three axes.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.l * self.w * self.h
    }

    /// Length × width.
    #[inline]
    pub fn footprint(&self) -> f64 {
        self.l * self.w
    }

    #[inline]
    pub fn max_dim(&self) -> f64 {
        self.l.max(self.w).max(self.h)
    }

    #[inline]
    pub fn min_dim(&self) -> f64 {
        self.l.min(self.w).min(self.h)
    }

    /// Returns the axes as an array in (l, w, h) order.
    #[inline]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.l, self.w, self.h]
    }

    /// Checks if all components are positive and finite.
    #[inline]
    pub fn is_valid_dimension(&self) -> bool {
        self.as_array().iter().all(|v| *v > 0.0 && v.is_finite())
    }

    /// Component-wise `<=` without rotation.
    #[inline]
    pub fn fits_within(&self, container: &Self) -> bool {
        self.l <= container.l && self.w <= container.w && self.h <= container.h
    }
}

impl From<(f64, f64, f64)> for Dims {
    #[inline]
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<[f64; 3]> for Dims {
    #[inline]
    fn from(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

/// Trait for anything with a length/width/height extent.
pub trait Dimensional {
    /// Returns the dimensions of the object.
    fn dimensions(&self) -> Dims;

    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }

    fn footprint(&self) -> f64 {
        self.dimensions().footprint()
    }

    fn max_dim(&self) -> f64 {
        self.dimensions().max_dim()
    }

    fn min_dim(&self) -> f64 {
        self.dimensions().min_dim()
    }
}

impl Dimensional for Dims {
    fn dimensions(&self) -> Dims {
        *self
    }
}

/// Formats an inch value the way labels print it: no trailing zeros,
/// at most two decimals.
///
/// ```
/// use box_advisor::types::format_inches;
///
/// assert_eq!(format_inches(12.0), "12");
/// assert_eq!(format_inches(35.75), "35.75");
/// ```
pub fn format_inches(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
