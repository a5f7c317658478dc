//! Explanations for boxes that were close but did not work.

use crate::geometry::best_orientation_shortfall;
use crate::model::ShippingBox;
use crate::optimizer::{AdvisorConfig, accepts_single};
use crate::recommendation::RejectedBox;
use crate::types::{Dimensional, Dims, format_inches};

/// Collects near-miss boxes with a reason each.
///
/// A box is a near miss when it fails the single-box filter and either its
/// largest or its smallest dimension lies within `config.rejection_proximity`
/// of the corresponding required dimension. Regular boxes come first, then
/// the boxes whose largest dimension is closest to the required one.
///
/// # Parameters
/// * `required` - Buffered item dimensions
/// * `weight` - Item weight, if known
/// * `inventory` - Boxes to inspect
/// * `config` - Proximity and cap
pub fn collect_rejected_boxes(
    required: &Dims,
    weight: Option<f64>,
    inventory: &[ShippingBox],
    config: &AdvisorConfig,
) -> Vec<RejectedBox> {
    let max_required = required.max_dim();
    let min_required = required.min_dim();
    let proximity = config.rejection_proximity;

    let mut near_misses: Vec<&ShippingBox> = inventory
        .iter()
        .filter(|b| !accepts_single(required, weight, b))
        .filter(|b| {
            (b.max_dim() - max_required).abs() <= proximity
                || (b.min_dim() - min_required).abs() <= proximity
        })
        .collect();

    let closeness = |b: &ShippingBox| (b.max_dim() - max_required).abs();
    near_misses.sort_by(|a, b| {
        b.tag
            .is_regular()
            .cmp(&a.tag.is_regular())
            .then_with(|| closeness(*a).total_cmp(&closeness(*b)))
    });

    near_misses
        .into_iter()
        .take(config.max_rejected)
        .map(|b| RejectedBox {
            shipping_box: *b,
            rejection_reason: rejection_reason(required, weight, b),
        })
        .collect()
}

/// Describes why a box does not take the item.
///
/// Uses the orientation with the smallest total shortfall and lists each
/// short axis, then a weight clause if the weight limit is exceeded.
///
/// ```
/// use box_advisor::diagnostics::rejection_reason;
/// use box_advisor::model::{BoxTag, ShippingBox};
/// use box_advisor::types::Dims;
///
/// let b = ShippingBox::new(12.0, 10.0, 7.0, BoxTag::Regular);
/// let reason = rejection_reason(&Dims::new(14.0, 10.0, 8.0), None, &b);
/// assert_eq!(reason, "length short by 2.0\", height short by 1.0\"");
/// ```
pub fn rejection_reason(required: &Dims, weight: Option<f64>, shipping_box: &ShippingBox) -> String {
    let shortfall = best_orientation_shortfall(required, shipping_box);
    let mut clauses: Vec<String> = shortfall
        .short_axes()
        .into_iter()
        .map(|(axis, amount)| format!("{} short by {:.1}\"", axis, amount))
        .collect();

    if let (Some(weight), Some(limit)) = (weight, shipping_box.max_weight) {
        if weight > limit {
            clauses.push(format!(
                "exceeds max weight by {:.1} lbs (max {} lbs)",
                weight - limit,
                format_inches(limit)
            ));
        }
    }

    if clauses.is_empty() {
        // only reachable with non-numeric input
        return "no orientation fits".to_string();
    }
    clauses.join(", ")
}
