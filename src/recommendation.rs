//! Result types of a box recommendation.
//!
//! A recommendation is always one of three outcomes: a single box, a
//! telescoped pair of boxes, or an oversized-item error. The error is a
//! normal value, not a Rust `Err`, because the caller is expected to render
//! it just like the other outcomes.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;

use crate::inventory::telescoped_height;
use crate::model::{ShippingBox, format_dims};
use crate::types::{Dims, format_inches};

/// Two identical boxes slid into each other lengthwise.
///
/// # Fields
/// * `box1` - The box used twice
/// * `combined_height` - `2 × h − overlap`
/// * `combined_dimensions` - Display string of the resulting enclosure
/// * `overlap` - How far the boxes overlap (depends on the box category)
/// * `rotated` - Whether the footprint only fits with length and width swapped
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct TelescopedBox {
    pub box1: ShippingBox,
    pub combined_height: f64,
    pub combined_dimensions: String,
    pub overlap: f64,
    pub rotated: bool,
}

impl TelescopedBox {
    pub fn new(box1: ShippingBox, rotated: bool) -> Self {
        let combined_height = telescoped_height(&box1);
        Self {
            box1,
            combined_height,
            combined_dimensions: format_dims(&Dims::new(box1.l, box1.w, combined_height)),
            overlap: box1.tag.telescoping_overlap(),
            rotated,
        }
    }

    /// Footprint of the enclosure (length × width of `box1`).
    pub fn footprint(&self) -> f64 {
        self.box1.l * self.box1.w
    }
}

/// A near-miss box together with the reason it was not chosen.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RejectedBox {
    #[serde(rename = "box")]
    pub shipping_box: ShippingBox,
    #[schema(example = "length short by 2.0\", height short by 1.0\"")]
    pub rejection_reason: String,
}

/// How the required dimensions were derived, plus the near misses.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CalculationTrace {
    #[schema(example = "10\" × 8\" × 6\"")]
    pub original_dimensions: String,
    #[schema(example = "+1\" per side")]
    pub buffer_applied: String,
    #[schema(example = "12\" × 10\" × 8\"")]
    pub required_dimensions: String,
    pub buffer: f64,
    pub required: Dims,
    pub rejected_boxes: Vec<RejectedBox>,
}

impl CalculationTrace {
    pub fn new(original: Dims, buffer: f64, required: Dims, rejected_boxes: Vec<RejectedBox>) -> Self {
        Self {
            original_dimensions: format_dims(&original),
            buffer_applied: format!("+{}\" per side", format_inches(buffer)),
            required_dimensions: format_dims(&required),
            buffer,
            required,
            rejected_boxes,
        }
    }
}

/// Summary attached to the oversized outcome.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct OversizedDetails {
    #[schema(example = "62\" × 40\" × 12\"")]
    pub required_dimensions: String,
    #[schema(example = "54\" × 30\"")]
    pub largest_available_footprint: String,
    pub max_single_box_height: f64,
    pub max_telescoping_height: f64,
    pub issue: String,
}

/// Outcome of a recommendation request.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BoxRecommendation {
    /// One box holds the item.
    Single {
        selected: ShippingBox,
        warnings: Vec<String>,
        calculations: CalculationTrace,
    },
    /// No single box is big enough, two telescoped boxes are.
    Telescoped {
        telescoped: TelescopedBox,
        warnings: Vec<String>,
        calculations: CalculationTrace,
    },
    /// Neither works; the item needs custom packaging.
    Oversized {
        error: String,
        details: OversizedDetails,
    },
}

impl BoxRecommendation {
    pub fn is_success(&self) -> bool {
        !matches!(self, BoxRecommendation::Oversized { .. })
    }

    /// The chosen box for the single-box outcome.
    pub fn selected_box(&self) -> Option<&ShippingBox> {
        match self {
            BoxRecommendation::Single { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn telescoped_box(&self) -> Option<&TelescopedBox> {
        match self {
            BoxRecommendation::Telescoped { telescoped, .. } => Some(telescoped),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BoxRecommendation::Oversized { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn oversized_details(&self) -> Option<&OversizedDetails> {
        match self {
            BoxRecommendation::Oversized { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Warnings of a successful outcome; empty for the error outcome.
    pub fn warnings(&self) -> &[String] {
        match self {
            BoxRecommendation::Single { warnings, .. }
            | BoxRecommendation::Telescoped { warnings, .. } => warnings,
            BoxRecommendation::Oversized { .. } => &[],
        }
    }

    pub fn calculations(&self) -> Option<&CalculationTrace> {
        match self {
            BoxRecommendation::Single { calculations, .. }
            | BoxRecommendation::Telescoped { calculations, .. } => Some(calculations),
            BoxRecommendation::Oversized { .. } => None,
        }
    }

    pub fn rejected_boxes(&self) -> &[RejectedBox] {
        self.calculations()
            .map(|c| c.rejected_boxes.as_slice())
            .unwrap_or(&[])
    }

    /// Short code for logs.
    pub fn outcome_code(&self) -> &'static str {
        match self {
            BoxRecommendation::Single { .. } => "single",
            BoxRecommendation::Telescoped { .. } => "telescoped",
            BoxRecommendation::Oversized { .. } => "oversized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoxTag;

    #[test]
    fn telescoped_box_derives_height_and_label() {
        let golf = ShippingBox::new(15.0, 15.0, 48.0, BoxTag::Specialty);
        let telescoped = TelescopedBox::new(golf, false);
        assert_eq!(telescoped.combined_height, 91.0);
        assert_eq!(telescoped.overlap, 5.0);
        assert_eq!(telescoped.combined_dimensions, "15\" × 15\" × 91\"");
        assert_eq!(telescoped.footprint(), 225.0);
    }

    #[test]
    fn trace_formats_buffer() {
        let trace = CalculationTrace::new(
            Dims::new(10.0, 8.0, 6.0),
            0.5,
            Dims::new(11.0, 9.0, 7.0),
            Vec::new(),
        );
        assert_eq!(trace.original_dimensions, "10\" × 8\" × 6\"");
        assert_eq!(trace.buffer_applied, "+0.5\" per side");
        assert_eq!(trace.required_dimensions, "11\" × 9\" × 7\"");
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let single = BoxRecommendation::Single {
            selected: ShippingBox::new(6.0, 6.0, 6.0, BoxTag::Regular),
            warnings: vec!["Heavy item".to_string()],
            calculations: CalculationTrace::new(
                Dims::new(1.0, 1.0, 1.0),
                0.0,
                Dims::new(1.0, 1.0, 1.0),
                Vec::new(),
            ),
        };
        let value = serde_json::to_value(&single).unwrap();
        assert_eq!(value["outcome"], "single");
        assert_eq!(value["selected"]["tag"], "regular");
        assert_eq!(value["calculations"]["rejected_boxes"], json!([]));
    }

    #[test]
    fn oversized_has_no_warnings_or_trace() {
        let oversized = BoxRecommendation::Oversized {
            error: "too big".to_string(),
            details: OversizedDetails {
                required_dimensions: "1\" × 1\" × 1\"".to_string(),
                largest_available_footprint: "1\" × 1\"".to_string(),
                max_single_box_height: 1.0,
                max_telescoping_height: 1.0,
                issue: "too big".to_string(),
            },
        };
        assert!(!oversized.is_success());
        assert!(oversized.warnings().is_empty());
        assert!(oversized.rejected_boxes().is_empty());
        assert_eq!(oversized.error(), Some("too big"));
        assert_eq!(oversized.outcome_code(), "oversized");
    }
}
