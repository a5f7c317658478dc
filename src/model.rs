//! Data models for box recommendation.
//!
//! This module defines the records the selectors work on:
//! - `ShippingBox`: one entry of the store's box inventory
//! - `BoxTag`: the closed set of box categories and their handling profile
//! - `ItemRequest`: the item to ship plus the chosen packing type

use std::fmt;

use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::policy::PackingType;
use crate::types::{Dimensional, Dims, format_inches};

/// Validation error for item data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),
    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),
}

fn validate_dimension(value: f64, name: &str) -> Result<(), ValidationError> {
    if value <= 0.0 || value.is_nan() || value.is_infinite() {
        return Err(ValidationError::InvalidDimension(format!(
            "{} must be positive, got: {}",
            name, value
        )));
    }
    Ok(())
}

/// Box category.
///
/// Drives selection preference and the telescoping constants. The set is
/// closed; every tag-keyed rule is an exhaustive match over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BoxTag {
    Regular,
    Specialty,
    Wardrobe,
    Art,
}

/// Handling constants for one box category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TagProfile {
    /// How far two boxes of this category slide into each other when telescoped.
    pub telescoping_overlap: f64,
    /// Item weight (lbs) above which a category advisory is emitted.
    pub warning_threshold: f64,
    pub display_name: &'static str,
    pub description: &'static str,
}

impl BoxTag {
    pub const ALL: [BoxTag; 4] = [
        BoxTag::Regular,
        BoxTag::Specialty,
        BoxTag::Wardrobe,
        BoxTag::Art,
    ];

    pub const fn profile(self) -> TagProfile {
        match self {
            BoxTag::Regular => TagProfile {
                telescoping_overlap: 4.0,
                warning_threshold: 50.0,
                display_name: "Regular",
                description: "Standard shipping boxes",
            },
            BoxTag::Specialty => TagProfile {
                telescoping_overlap: 5.0,
                warning_threshold: 40.0,
                display_name: "Specialty",
                description: "Long/odd shapes (golf, guitar, bike)",
            },
            BoxTag::Wardrobe => TagProfile {
                telescoping_overlap: 6.0,
                warning_threshold: 30.0,
                display_name: "Wardrobe",
                description: "Large clothing boxes",
            },
            BoxTag::Art => TagProfile {
                telescoping_overlap: 3.0,
                warning_threshold: 25.0,
                display_name: "Art",
                description: "Flat items, artwork, frames",
            },
        }
    }

    #[inline]
    pub const fn telescoping_overlap(self) -> f64 {
        self.profile().telescoping_overlap
    }

    #[inline]
    pub fn is_regular(self) -> bool {
        self == BoxTag::Regular
    }

    /// Lower-case key used in JSON.
    pub const fn key(self) -> &'static str {
        match self {
            BoxTag::Regular => "regular",
            BoxTag::Specialty => "specialty",
            BoxTag::Wardrobe => "wardrobe",
            BoxTag::Art => "art",
        }
    }
}

impl fmt::Display for BoxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().display_name)
    }
}

/// Corrugate wall construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Single,
    Double,
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wall::Single => f.write_str("single"),
            Wall::Double => f.write_str("double"),
        }
    }
}

/// One box of the inventory.
///
/// # Fields
/// * `l`, `w`, `h` - Interior dimensions in inches
/// * `tag` - Category
/// * `burst` - Burst-test rating in PSI (display only)
/// * `wall` - Wall construction (display only)
/// * `max_weight` - Weight limit in lbs, `None` means unconstrained
/// * `size_sum` - Carrier size sum (display only)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "l": 12.0, "w": 12.0, "h": 12.0, "tag": "regular",
    "burst": 200, "wall": "single", "max_weight": 40.0, "size_sum": 75
}))]
pub struct ShippingBox {
    pub l: f64,
    pub w: f64,
    pub h: f64,
    pub tag: BoxTag,
    #[serde(default)]
    pub burst: Option<u32>,
    #[serde(default)]
    pub wall: Option<Wall>,
    #[serde(default)]
    pub max_weight: Option<f64>,
    #[serde(default)]
    pub size_sum: Option<u32>,
}

impl ShippingBox {
    /// Bare box without any handling attributes.
    pub const fn new(l: f64, w: f64, h: f64, tag: BoxTag) -> Self {
        Self {
            l,
            w,
            h,
            tag,
            burst: None,
            wall: None,
            max_weight: None,
            size_sum: None,
        }
    }

    /// Sets the weight limit (Builder pattern light).
    pub const fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Sets burst rating and wall construction.
    pub const fn with_construction(mut self, burst: u32, wall: Wall) -> Self {
        self.burst = Some(burst);
        self.wall = Some(wall);
        self
    }

    pub const fn with_size_sum(mut self, size_sum: u32) -> Self {
        self.size_sum = Some(size_sum);
        self
    }

    #[inline]
    pub const fn dims(&self) -> Dims {
        Dims::new(self.l, self.w, self.h)
    }

    /// Checks the weight limit. Missing weight or missing limit never rejects.
    pub fn carries(&self, weight: Option<f64>) -> bool {
        match (weight, self.max_weight) {
            (Some(weight), Some(limit)) => weight <= limit,
            _ => true,
        }
    }
}

impl Dimensional for ShippingBox {
    fn dimensions(&self) -> Dims {
        self.dims()
    }
}

impl fmt::Display for ShippingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_box_size(self))
    }
}

/// Formats a box as `L" × W" × H"`.
pub fn format_box_size(shipping_box: &ShippingBox) -> String {
    format_dims(&shipping_box.dims())
}

/// Formats any dimension triple as `L" × W" × H"`.
pub fn format_dims(dims: &Dims) -> String {
    format!(
        "{}\" × {}\" × {}\"",
        format_inches(dims.l),
        format_inches(dims.w),
        format_inches(dims.h)
    )
}

/// One-sentence description listing category, burst rating, wall and weight limit.
///
/// ```
/// use box_advisor::model::{describe_box, BoxTag, ShippingBox, Wall};
///
/// let b = ShippingBox::new(12.0, 12.0, 12.0, BoxTag::Regular)
///     .with_construction(200, Wall::Single)
///     .with_max_weight(40.0);
/// assert_eq!(
///     describe_box(&b),
///     "Regular box - 200 PSI burst strength, single wall, max 40 lbs"
/// );
/// ```
pub fn describe_box(shipping_box: &ShippingBox) -> String {
    let mut details: Vec<String> = Vec::new();
    if let Some(burst) = shipping_box.burst {
        details.push(format!("{} PSI burst strength", burst));
    }
    if let Some(wall) = shipping_box.wall {
        details.push(format!("{} wall", wall));
    }
    if let Some(max_weight) = shipping_box.max_weight {
        details.push(format!("max {} lbs", format_inches(max_weight)));
    }

    let mut description = format!("{} box", shipping_box.tag);
    if !details.is_empty() {
        description.push_str(" - ");
        description.push_str(&details.join(", "));
    }
    description
}

/// The item to ship.
///
/// # Fields
/// * `length`, `width`, `height` - Item dimensions in inches
/// * `weight` - Item weight in lbs, if known
/// * `packing_type` - Selects the per-side buffer
/// * `custom_buffer` - Buffer override, honoured only for `PackingType::Custom`
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: Option<f64>,
    pub packing_type: PackingType,
    pub custom_buffer: Option<f64>,
}

impl ItemRequest {
    pub fn new(length: f64, width: f64, height: f64, packing_type: PackingType) -> Self {
        Self {
            length,
            width,
            height,
            weight: None,
            packing_type,
            custom_buffer: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_custom_buffer(mut self, buffer: f64) -> Self {
        self.custom_buffer = Some(buffer);
        self
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.length, self.width, self.height)
    }

    /// Per-side buffer in inches.
    pub fn buffer(&self) -> f64 {
        self.packing_type.buffer(self.custom_buffer)
    }

    /// Item dimensions plus the buffer on both sides of every axis.
    pub fn required_dims(&self) -> Dims {
        self.dims().padded(self.buffer())
    }

    /// Weight that takes part in filtering. Zero or non-numeric weights count as unknown.
    pub fn effective_weight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    /// Checks the request the way a form would before calling the advisor.
    ///
    /// The advisor itself accepts anything; this is for callers that want to
    /// reject nonsense early.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_dimension(self.length, "Length")?;
        validate_dimension(self.width, "Width")?;
        validate_dimension(self.height, "Height")?;
        if let Some(weight) = self.weight {
            if weight <= 0.0 || !weight.is_finite() {
                return Err(ValidationError::InvalidWeight(format!(
                    "Weight must be positive, got: {}",
                    weight
                )));
            }
        }
        if let Some(buffer) = self.custom_buffer {
            if buffer < 0.0 || !buffer.is_finite() {
                return Err(ValidationError::InvalidBuffer(format!(
                    "Custom buffer must not be negative, got: {}",
                    buffer
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_tag_dependent() {
        assert_eq!(BoxTag::Regular.telescoping_overlap(), 4.0);
        assert_eq!(BoxTag::Specialty.telescoping_overlap(), 5.0);
        assert_eq!(BoxTag::Wardrobe.telescoping_overlap(), 6.0);
        assert_eq!(BoxTag::Art.telescoping_overlap(), 3.0);
    }

    #[test]
    fn every_tag_has_a_positive_overlap() {
        for tag in BoxTag::ALL {
            assert!(tag.telescoping_overlap() > 0.0, "{} overlap", tag.key());
            assert_eq!(tag.to_string(), tag.profile().display_name);
        }
    }

    #[test]
    fn tag_serializes_lowercase() {
        let json = serde_json::to_string(&BoxTag::Specialty).unwrap();
        assert_eq!(json, "\"specialty\"");
        let tag: BoxTag = serde_json::from_str("\"art\"").unwrap();
        assert_eq!(tag, BoxTag::Art);
    }

    #[test]
    fn missing_limits_never_reject() {
        let unlimited = ShippingBox::new(10.0, 10.0, 10.0, BoxTag::Regular);
        assert!(unlimited.carries(Some(1_000.0)));

        let limited = unlimited.with_max_weight(40.0);
        assert!(limited.carries(None));
        assert!(limited.carries(Some(40.0)));
        assert!(!limited.carries(Some(40.5)));
    }

    #[test]
    fn box_size_format() {
        let art = ShippingBox::new(35.75, 5.5, 45.25, BoxTag::Art);
        assert_eq!(format_box_size(&art), "35.75\" × 5.5\" × 45.25\"");
        assert_eq!(art.to_string(), "35.75\" × 5.5\" × 45.25\"");
    }

    #[test]
    fn description_skips_missing_attributes() {
        let bare = ShippingBox::new(10.0, 10.0, 10.0, BoxTag::Wardrobe);
        assert_eq!(describe_box(&bare), "Wardrobe box");

        let golf = ShippingBox::new(15.0, 15.0, 48.0, BoxTag::Specialty)
            .with_construction(275, Wall::Single)
            .with_max_weight(65.0);
        assert_eq!(
            describe_box(&golf),
            "Specialty box - 275 PSI burst strength, single wall, max 65 lbs"
        );
    }

    #[test]
    fn required_dims_add_buffer_twice() {
        let item = ItemRequest::new(10.0, 8.0, 6.0, PackingType::Fragile);
        let buffer = PackingType::Fragile.policy().buffer;
        assert_eq!(
            item.required_dims(),
            Dims::new(10.0 + 2.0 * buffer, 8.0 + 2.0 * buffer, 6.0 + 2.0 * buffer)
        );
    }

    #[test]
    fn zero_weight_counts_as_unknown() {
        let item = ItemRequest::new(1.0, 1.0, 1.0, PackingType::Basic).with_weight(0.0);
        assert_eq!(item.effective_weight(), None);
        let item = item.with_weight(12.5);
        assert_eq!(item.effective_weight(), Some(12.5));
    }

    #[test]
    fn validate_rejects_non_positive_input() {
        let ok = ItemRequest::new(1.0, 2.0, 3.0, PackingType::Standard).with_weight(4.0);
        assert!(ok.validate().is_ok());

        let bad_dim = ItemRequest::new(0.0, 2.0, 3.0, PackingType::Standard);
        assert!(matches!(
            bad_dim.validate(),
            Err(ValidationError::InvalidDimension(_))
        ));

        let bad_weight = ok.clone().with_weight(-1.0);
        assert!(matches!(
            bad_weight.validate(),
            Err(ValidationError::InvalidWeight(_))
        ));

        let bad_buffer = ItemRequest::new(1.0, 2.0, 3.0, PackingType::Custom)
            .with_custom_buffer(f64::NAN);
        assert!(matches!(
            bad_buffer.validate(),
            Err(ValidationError::InvalidBuffer(_))
        ));
    }
}
