//! Box selection logic.
//!
//! This module implements the decision core of the advisor:
//! - single-box selection with category preference and tolerance-based ranking
//! - telescoping (two boxes joined lengthwise) when no single box is big enough
//! - the oversized outcome when neither works

use std::cmp::Ordering;

use crate::diagnostics::collect_rejected_boxes;
use crate::geometry::{fits_dims, footprint_fit};
use crate::inventory::{
    STORE_INVENTORY, largest_footprint, max_single_height, max_telescoping_height,
};
use crate::model::{BoxTag, ItemRequest, ShippingBox, format_dims};
use crate::policy::PackingType;
use crate::recommendation::{BoxRecommendation, CalculationTrace, OversizedDetails, TelescopedBox};
use crate::types::{Dimensional, Dims, format_inches};

/// Combined capacity factor of two telescoped boxes relative to one box.
pub const TELESCOPING_WEIGHT_MULTIPLIER: f64 = 1.6;

/// Configuration for the selection algorithm.
///
/// Holds the tolerances and thresholds that steer ranking, diagnostics and warnings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvisorConfig {
    /// Volume waste differences up to this many cubic inches count as a tie
    pub volume_tie_tolerance: f64,
    /// Height waste differences up to this many inches count as a tie
    pub height_tie_tolerance: f64,
    /// Boxes whose largest or smallest side is this close to the requirement are reported as near misses
    pub rejection_proximity: f64,
    /// Maximum number of near misses to report
    pub max_rejected: usize,
    /// Weight factor for two telescoped boxes
    pub telescoping_weight_multiplier: f64,
    /// Ratio of the single-box rating above which telescoping gets the strong advisory
    pub telescoping_overload_ratio: f64,
    /// Weight (lbs) above which an item counts as heavy
    pub heavy_item_threshold: f64,
    /// Whether wardrobe boxes may be telescoped
    pub allow_wardrobe_telescoping: bool,
}

impl AdvisorConfig {
    pub const DEFAULT_VOLUME_TIE_TOLERANCE: f64 = 50.0;
    pub const DEFAULT_HEIGHT_TIE_TOLERANCE: f64 = 1.0;
    pub const DEFAULT_REJECTION_PROXIMITY: f64 = 4.0;
    pub const DEFAULT_MAX_REJECTED: usize = 5;
    pub const DEFAULT_TELESCOPING_WEIGHT_MULTIPLIER: f64 = TELESCOPING_WEIGHT_MULTIPLIER;
    pub const DEFAULT_TELESCOPING_OVERLOAD_RATIO: f64 = 1.2;
    pub const DEFAULT_HEAVY_ITEM_THRESHOLD: f64 = 50.0;
    pub const DEFAULT_ALLOW_WARDROBE_TELESCOPING: bool = false;

    /// Creates a builder for a custom configuration.
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::default()
    }

    /// Whether boxes of this category may be telescoped. Art boxes never are.
    pub fn telescoping_eligible(&self, tag: BoxTag) -> bool {
        match tag {
            BoxTag::Regular | BoxTag::Specialty => true,
            BoxTag::Wardrobe => self.allow_wardrobe_telescoping,
            BoxTag::Art => false,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            volume_tie_tolerance: Self::DEFAULT_VOLUME_TIE_TOLERANCE,
            height_tie_tolerance: Self::DEFAULT_HEIGHT_TIE_TOLERANCE,
            rejection_proximity: Self::DEFAULT_REJECTION_PROXIMITY,
            max_rejected: Self::DEFAULT_MAX_REJECTED,
            telescoping_weight_multiplier: Self::DEFAULT_TELESCOPING_WEIGHT_MULTIPLIER,
            telescoping_overload_ratio: Self::DEFAULT_TELESCOPING_OVERLOAD_RATIO,
            heavy_item_threshold: Self::DEFAULT_HEAVY_ITEM_THRESHOLD,
            allow_wardrobe_telescoping: Self::DEFAULT_ALLOW_WARDROBE_TELESCOPING,
        }
    }
}

/// Builder for AdvisorConfig.
#[derive(Clone, Debug, Default)]
pub struct AdvisorConfigBuilder {
    config: AdvisorConfig,
}

impl AdvisorConfigBuilder {
    pub fn volume_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.config.volume_tie_tolerance = tolerance;
        self
    }

    pub fn height_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.config.height_tie_tolerance = tolerance;
        self
    }

    pub fn rejection_proximity(mut self, proximity: f64) -> Self {
        self.config.rejection_proximity = proximity;
        self
    }

    pub fn max_rejected(mut self, max: usize) -> Self {
        self.config.max_rejected = max;
        self
    }

    pub fn telescoping_weight_multiplier(mut self, multiplier: f64) -> Self {
        self.config.telescoping_weight_multiplier = multiplier;
        self
    }

    pub fn telescoping_overload_ratio(mut self, ratio: f64) -> Self {
        self.config.telescoping_overload_ratio = ratio;
        self
    }

    pub fn heavy_item_threshold(mut self, threshold: f64) -> Self {
        self.config.heavy_item_threshold = threshold;
        self
    }

    pub fn allow_wardrobe_telescoping(mut self, allow: bool) -> Self {
        self.config.allow_wardrobe_telescoping = allow;
        self
    }

    /// Creates the final configuration.
    pub fn build(self) -> AdvisorConfig {
        self.config
    }
}

/// Single-box filter: the item fits in some orientation and the box carries its weight.
pub fn accepts_single(required: &Dims, weight: Option<f64>, shipping_box: &ShippingBox) -> bool {
    fits_dims(required, shipping_box) && shipping_box.carries(weight)
}

/// Compares two values, treating differences up to `tolerance` as equal.
fn compare_with_tolerance(a: f64, b: f64, tolerance: f64) -> Ordering {
    if (a - b).abs() <= tolerance {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Ranks two single-box candidates; `Less` means `a` is the better box.
///
/// Priority: regular category > volume waste > height waste > closeness of
/// the largest dimension. The tolerance steps make this relation
/// non-transitive, so it is only ever used for a best-so-far scan.
fn compare_single_candidates(
    a: &ShippingBox,
    b: &ShippingBox,
    required: &Dims,
    config: &AdvisorConfig,
) -> Ordering {
    let category = b.tag.is_regular().cmp(&a.tag.is_regular());
    if category != Ordering::Equal {
        return category;
    }

    let required_volume = required.volume();
    let waste = compare_with_tolerance(
        a.volume() - required_volume,
        b.volume() - required_volume,
        config.volume_tie_tolerance,
    );
    if waste != Ordering::Equal {
        return waste;
    }

    let height = compare_with_tolerance(
        a.h - required.h,
        b.h - required.h,
        config.height_tie_tolerance,
    );
    if height != Ordering::Equal {
        return height;
    }

    let max_required = required.max_dim();
    let closeness_a = (a.max_dim() - max_required).abs();
    let closeness_b = (b.max_dim() - max_required).abs();
    closeness_a.total_cmp(&closeness_b)
}

/// Finds the best single box for the buffered dimensions.
///
/// # Parameters
/// * `required` - Item dimensions including buffer
/// * `weight` - Item weight, if known
/// * `inventory` - Boxes to choose from
/// * `config` - Ranking tolerances
///
/// # Returns
/// The top-ranked box, or `None` if no box fits
pub fn find_single_box(
    required: &Dims,
    weight: Option<f64>,
    inventory: &[ShippingBox],
    config: &AdvisorConfig,
) -> Option<ShippingBox> {
    inventory
        .iter()
        .filter(|b| accepts_single(required, weight, b))
        .copied()
        .reduce(|best, candidate| {
            match compare_single_candidates(&candidate, &best, required, config) {
                Ordering::Less => candidate,
                _ => best,
            }
        })
}

fn telescoping_carries(shipping_box: &ShippingBox, weight: Option<f64>, config: &AdvisorConfig) -> bool {
    match (weight, shipping_box.max_weight) {
        (Some(weight), Some(limit)) => weight <= limit * config.telescoping_weight_multiplier,
        _ => true,
    }
}

/// Finds the best telescoped pair for the buffered dimensions.
///
/// Candidates must be an eligible category, take the footprint (possibly
/// rotated), carry the weight with the telescoping multiplier and reach the
/// required height as `2 × h − overlap`. The smallest footprint wins, then
/// the least height waste.
pub fn find_telescoping_box(
    required: &Dims,
    weight: Option<f64>,
    inventory: &[ShippingBox],
    config: &AdvisorConfig,
) -> Option<TelescopedBox> {
    inventory
        .iter()
        .filter(|b| config.telescoping_eligible(b.tag))
        .filter_map(|b| {
            let rotated = footprint_fit(required, b)?;
            if !telescoping_carries(b, weight, config) {
                return None;
            }
            let telescoped = TelescopedBox::new(*b, rotated);
            (telescoped.combined_height >= required.h).then_some(telescoped)
        })
        .min_by(|a, b| {
            a.footprint().total_cmp(&b.footprint()).then_with(|| {
                (a.combined_height - required.h).total_cmp(&(b.combined_height - required.h))
            })
        })
}

fn single_box_warnings(
    item: &ItemRequest,
    weight: Option<f64>,
    selected: &ShippingBox,
    config: &AdvisorConfig,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(weight) = weight {
        if weight > config.heavy_item_threshold {
            warnings.push("Heavy item - ensure proper handling during shipping".to_string());
        }
    }
    if item.packing_type == PackingType::Fragile {
        warnings.push("Consider double-boxing for extra protection".to_string());
    }

    match selected.tag {
        BoxTag::Regular => {}
        BoxTag::Specialty => {
            warnings.push("Using specialty box - verify dimensions with store staff".to_string())
        }
        BoxTag::Wardrobe => {
            warnings.push("Large wardrobe box - may require special handling".to_string())
        }
        BoxTag::Art => warnings.push("Art box - ideal for flat items and artwork".to_string()),
    }

    let profile = selected.tag.profile();
    if let Some(weight) = weight {
        if weight > profile.warning_threshold {
            warnings.push(format!(
                "Item weight ({} lbs) is above the {} lbs recommended for {} boxes - reinforce the bottom seam",
                format_inches(weight),
                format_inches(profile.warning_threshold),
                profile.display_name
            ));
        }
    }

    warnings
}

fn telescoping_warnings(
    weight: Option<f64>,
    telescoped: &TelescopedBox,
    config: &AdvisorConfig,
) -> Vec<String> {
    let mut warnings = vec![
        "Telescoping required - use heavy-duty packing tape on all joints".to_string(),
        "Reinforce the telescoped seam with extra tape for structural integrity".to_string(),
    ];

    if let (Some(weight), Some(limit)) = (weight, telescoped.box1.max_weight) {
        if weight > limit {
            warnings.push(format!(
                "Item weight ({} lbs) exceeds the single box rating ({} lbs) - the telescoped pair shares the load, tape the bottom flaps twice",
                format_inches(weight),
                format_inches(limit)
            ));
        }
        if weight > limit * config.telescoping_overload_ratio {
            warnings.push(format!(
                "Item weight is well above the single box rating - consider double-wall boxes or a custom crate (rated {} lbs per box)",
                format_inches(limit)
            ));
        }
    }

    warnings
}

fn oversized(
    required: &Dims,
    weight: Option<f64>,
    inventory: &[ShippingBox],
    config: &AdvisorConfig,
) -> BoxRecommendation {
    let (footprint_l, footprint_w) = largest_footprint(inventory);
    let max_single = max_single_height(inventory);
    let max_telescoping = max_telescoping_height(inventory);

    let fits_by_size = inventory.iter().any(|b| fits_dims(required, b))
        || find_telescoping_box(required, None, inventory, config).is_some();
    let issue = match weight {
        Some(weight) if fits_by_size => format!(
            "Item weight ({} lbs) exceeds the rated capacity of every box that fits its dimensions",
            format_inches(weight)
        ),
        _ => "Item dimensions exceed available box capacities".to_string(),
    };

    let required_dimensions = format_dims(required);
    let largest_available_footprint = format!(
        "{}\" × {}\"",
        format_inches(footprint_l),
        format_inches(footprint_w)
    );
    let error = format!(
        "{}.\n\nRequired: {}\nLargest available footprint: {}\nMax single box height: {}\"\nMax telescoping height: {}\"",
        issue,
        required_dimensions,
        largest_available_footprint,
        format_inches(max_single),
        format_inches(max_telescoping)
    );

    BoxRecommendation::Oversized {
        error,
        details: OversizedDetails {
            required_dimensions,
            largest_available_footprint,
            max_single_box_height: max_single,
            max_telescoping_height: max_telescoping,
            issue,
        },
    }
}

/// Recommends a box from the store inventory with the default configuration.
///
/// # Examples
/// ```
/// use box_advisor::model::ItemRequest;
/// use box_advisor::optimizer::recommend_box;
/// use box_advisor::policy::PackingType;
///
/// let item = ItemRequest::new(1.0, 1.0, 1.0, PackingType::Custom).with_custom_buffer(0.0);
/// let recommendation = recommend_box(&item);
/// let selected = recommendation.selected_box().unwrap();
/// assert_eq!((selected.l, selected.w, selected.h), (6.0, 6.0, 6.0));
/// ```
pub fn recommend_box(item: &ItemRequest) -> BoxRecommendation {
    recommend_box_with_config(item, STORE_INVENTORY, &AdvisorConfig::default())
}

/// Recommends a box from the given inventory.
///
/// Single box beats telescoping, telescoping beats the oversized outcome.
/// Every input yields exactly one of the three outcomes.
///
/// # Parameters
/// * `item` - Item dimensions, weight and packing type
/// * `inventory` - Boxes to choose from
/// * `config` - Tolerances and thresholds
pub fn recommend_box_with_config(
    item: &ItemRequest,
    inventory: &[ShippingBox],
    config: &AdvisorConfig,
) -> BoxRecommendation {
    let buffer = item.buffer();
    let original = item.dims();
    let required = original.padded(buffer);
    let weight = item.effective_weight();

    let rejected = collect_rejected_boxes(&required, weight, inventory, config);

    if let Some(selected) = find_single_box(&required, weight, inventory, config) {
        tracing::debug!(
            required = %format_dims(&required),
            selected = %selected,
            tag = selected.tag.key(),
            "single box selected"
        );
        let warnings = single_box_warnings(item, weight, &selected, config);
        return BoxRecommendation::Single {
            selected,
            warnings,
            calculations: CalculationTrace::new(original, buffer, required, rejected),
        };
    }

    if let Some(telescoped) = find_telescoping_box(&required, weight, inventory, config) {
        tracing::debug!(
            required = %format_dims(&required),
            box1 = %telescoped.box1,
            combined_height = telescoped.combined_height,
            rotated = telescoped.rotated,
            "telescoped pair selected"
        );
        let warnings = telescoping_warnings(weight, &telescoped, config);
        return BoxRecommendation::Telescoped {
            telescoped,
            warnings,
            calculations: CalculationTrace::new(original, buffer, required, rejected),
        };
    }

    tracing::debug!(required = %format_dims(&required), ?weight, "no box fits");
    oversized(&required, weight, inventory, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boxed(l: f64, w: f64, h: f64, tag: BoxTag) -> ShippingBox {
        ShippingBox::new(l, w, h, tag)
    }

    fn single(inventory: &[ShippingBox], required: Dims) -> Option<ShippingBox> {
        find_single_box(&required, None, inventory, &AdvisorConfig::default())
    }

    #[test]
    fn regular_beats_tighter_specialty() {
        let inventory = [
            boxed(12.0, 10.0, 8.0, BoxTag::Specialty),
            boxed(14.0, 12.0, 10.0, BoxTag::Regular),
        ];
        let selected = single(&inventory, Dims::new(12.0, 10.0, 8.0)).unwrap();
        assert_eq!(selected.tag, BoxTag::Regular);
    }

    #[test]
    fn zero_waste_box_wins() {
        let inventory = [
            boxed(14.0, 12.0, 10.0, BoxTag::Regular),
            boxed(12.0, 10.0, 8.0, BoxTag::Regular),
            boxed(20.0, 20.0, 20.0, BoxTag::Regular),
        ];
        let selected = single(&inventory, Dims::new(10.0, 8.0, 12.0)).unwrap();
        assert_eq!(selected, inventory[1]);
    }

    #[test]
    fn near_tie_on_waste_falls_through_to_height() {
        // waste 40 vs 0 is within tolerance; height waste 0 vs 8 decides
        let required = Dims::new(10.0, 10.0, 2.0);
        let inventory = [
            boxed(10.0, 2.0, 10.0, BoxTag::Regular),
            boxed(12.0, 10.0, 2.0, BoxTag::Regular),
        ];
        let selected = single(&inventory, required).unwrap();
        assert_eq!(selected, inventory[1]);
    }

    #[test]
    fn height_tie_falls_through_to_largest_dimension() {
        // volumes within 50 in³, heights within 1", largest side 11 beats 13
        let required = Dims::new(10.0, 10.0, 10.0);
        let inventory = [
            boxed(13.0, 10.0, 10.0, BoxTag::Regular),
            boxed(11.0, 11.0, 10.5, BoxTag::Regular),
        ];
        let selected = single(&inventory, required).unwrap();
        assert_eq!(selected, inventory[1]);
    }

    #[test]
    fn full_tie_keeps_inventory_order() {
        let inventory = [
            boxed(10.0, 10.0, 10.0, BoxTag::Regular).with_max_weight(40.0),
            boxed(10.0, 10.0, 10.0, BoxTag::Regular).with_max_weight(65.0),
        ];
        let selected = single(&inventory, Dims::new(9.0, 9.0, 9.0)).unwrap();
        assert_eq!(selected.max_weight, Some(40.0));
    }

    #[test]
    fn weight_limit_filters_single_boxes() {
        let inventory = [
            boxed(10.0, 10.0, 10.0, BoxTag::Regular).with_max_weight(40.0),
            boxed(12.0, 12.0, 12.0, BoxTag::Specialty).with_max_weight(65.0),
        ];
        let config = AdvisorConfig::default();
        let selected =
            find_single_box(&Dims::new(9.0, 9.0, 9.0), Some(50.0), &inventory, &config).unwrap();
        assert_eq!(selected.tag, BoxTag::Specialty);
        assert!(find_single_box(&Dims::new(9.0, 9.0, 9.0), Some(70.0), &inventory, &config).is_none());
    }

    #[test]
    fn no_candidates_returns_none() {
        let inventory = [boxed(5.0, 5.0, 5.0, BoxTag::Regular)];
        assert!(single(&inventory, Dims::new(6.0, 1.0, 1.0)).is_none());
        assert!(single(&[], Dims::new(1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn telescoping_obeys_height_law() {
        let inventory = [boxed(20.0, 20.0, 20.0, BoxTag::Regular)];
        let config = AdvisorConfig::default();
        let reached = find_telescoping_box(&Dims::new(18.0, 18.0, 36.0), None, &inventory, &config)
            .unwrap();
        assert_eq!(reached.combined_height, 36.0);
        assert!(reached.combined_height >= 36.0);
        assert!(
            find_telescoping_box(&Dims::new(18.0, 18.0, 36.5), None, &inventory, &config).is_none()
        );
    }

    #[test]
    fn telescoping_reports_rotation() {
        let inventory = [boxed(46.0, 20.0, 12.0, BoxTag::Specialty)];
        let config = AdvisorConfig::default();
        let telescoped =
            find_telescoping_box(&Dims::new(18.0, 40.0, 19.0), None, &inventory, &config).unwrap();
        assert!(telescoped.rotated);
        assert_eq!(telescoped.overlap, 5.0);

        let straight =
            find_telescoping_box(&Dims::new(40.0, 18.0, 19.0), None, &inventory, &config).unwrap();
        assert!(!straight.rotated);
    }

    #[test]
    fn telescoping_skips_art_and_wardrobe_by_default() {
        let inventory = [
            boxed(30.0, 30.0, 30.0, BoxTag::Art),
            boxed(30.0, 30.0, 30.0, BoxTag::Wardrobe),
        ];
        let required = Dims::new(25.0, 25.0, 40.0);
        assert!(find_telescoping_box(&required, None, &inventory, &AdvisorConfig::default()).is_none());

        let config = AdvisorConfig::builder().allow_wardrobe_telescoping(true).build();
        let telescoped = find_telescoping_box(&required, None, &inventory, &config).unwrap();
        assert_eq!(telescoped.box1.tag, BoxTag::Wardrobe);
        assert_eq!(telescoped.combined_height, 54.0);
    }

    #[test]
    fn telescoping_weight_uses_multiplier() {
        let inventory = [boxed(20.0, 20.0, 20.0, BoxTag::Regular).with_max_weight(40.0)];
        let config = AdvisorConfig::default();
        let required = Dims::new(10.0, 10.0, 30.0);
        assert!(find_telescoping_box(&required, Some(63.9), &inventory, &config).is_some());
        assert!(find_telescoping_box(&required, Some(64.5), &inventory, &config).is_none());
    }

    #[test]
    fn telescoping_prefers_smallest_footprint_then_height() {
        let inventory = [
            boxed(30.0, 30.0, 30.0, BoxTag::Regular),
            boxed(20.0, 20.0, 30.0, BoxTag::Regular),
            boxed(20.0, 20.0, 25.0, BoxTag::Regular),
        ];
        let telescoped = find_telescoping_box(
            &Dims::new(18.0, 18.0, 40.0),
            None,
            &inventory,
            &AdvisorConfig::default(),
        )
        .unwrap();
        assert_eq!(telescoped.box1, inventory[2]);
    }

    #[test]
    fn single_box_is_preferred_over_telescoping() {
        let inventory = [
            boxed(10.0, 10.0, 10.0, BoxTag::Regular),
            boxed(12.0, 12.0, 30.0, BoxTag::Regular),
        ];
        let item = ItemRequest::new(9.0, 9.0, 14.0, PackingType::Custom).with_custom_buffer(0.0);
        let config = AdvisorConfig::default();
        // the small box could telescope to 16", but a single tall box exists
        assert!(
            find_telescoping_box(&item.required_dims(), None, &inventory, &config).is_some()
        );
        let recommendation = recommend_box_with_config(&item, &inventory, &config);
        assert_eq!(recommendation.selected_box(), Some(&inventory[1]));
    }

    #[test]
    fn fragile_and_heavy_warnings() {
        let inventory = [boxed(20.0, 20.0, 20.0, BoxTag::Specialty).with_max_weight(65.0)];
        let item = ItemRequest::new(10.0, 10.0, 10.0, PackingType::Fragile).with_weight(60.0);
        let recommendation =
            recommend_box_with_config(&item, &inventory, &AdvisorConfig::default());
        assert_eq!(
            recommendation.warnings(),
            &[
                "Heavy item - ensure proper handling during shipping".to_string(),
                "Consider double-boxing for extra protection".to_string(),
                "Using specialty box - verify dimensions with store staff".to_string(),
                "Item weight (60 lbs) is above the 40 lbs recommended for Specialty boxes - reinforce the bottom seam"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn regular_box_without_weight_has_no_warnings() {
        let inventory = [boxed(20.0, 20.0, 20.0, BoxTag::Regular)];
        let item = ItemRequest::new(10.0, 10.0, 10.0, PackingType::Standard);
        let recommendation =
            recommend_box_with_config(&item, &inventory, &AdvisorConfig::default());
        assert!(recommendation.warnings().is_empty());
    }

    #[test]
    fn telescoping_overload_warnings() {
        let inventory = [boxed(20.0, 20.0, 20.0, BoxTag::Regular).with_max_weight(40.0)];
        let item = ItemRequest::new(10.0, 10.0, 30.0, PackingType::Custom)
            .with_custom_buffer(0.0)
            .with_weight(50.0);
        let recommendation =
            recommend_box_with_config(&item, &inventory, &AdvisorConfig::default());
        assert!(recommendation.telescoped_box().is_some());
        let warnings = recommendation.warnings();
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].starts_with("Telescoping required"));
        assert!(warnings[2].contains("exceeds the single box rating (40 lbs)"));
        assert!(warnings[3].contains("well above"));

        let lighter = item.clone().with_weight(45.0);
        let recommendation =
            recommend_box_with_config(&lighter, &inventory, &AdvisorConfig::default());
        assert_eq!(recommendation.warnings().len(), 3);
    }

    #[test]
    fn oversized_by_size() {
        let inventory = [boxed(10.0, 10.0, 10.0, BoxTag::Regular)];
        let item = ItemRequest::new(30.0, 30.0, 30.0, PackingType::Basic);
        let recommendation =
            recommend_box_with_config(&item, &inventory, &AdvisorConfig::default());
        let details = recommendation.oversized_details().unwrap();
        assert_eq!(details.issue, "Item dimensions exceed available box capacities");
        assert_eq!(details.required_dimensions, "31\" × 31\" × 31\"");
        assert_eq!(details.largest_available_footprint, "10\" × 10\"");
        assert_eq!(details.max_single_box_height, 10.0);
        assert_eq!(details.max_telescoping_height, 16.0);
        assert!(
            recommendation
                .error()
                .unwrap()
                .starts_with("Item dimensions exceed available box capacities.")
        );
    }

    #[test]
    fn empty_inventory_is_oversized() {
        let item = ItemRequest::new(1.0, 1.0, 1.0, PackingType::Basic);
        let recommendation = recommend_box_with_config(&item, &[], &AdvisorConfig::default());
        assert!(!recommendation.is_success());
    }

    #[test]
    fn garbage_input_does_not_panic() {
        for dims in [
            (0.0, 0.0, 0.0),
            (-5.0, 3.0, 2.0),
            (f64::NAN, 1.0, 1.0),
            (f64::INFINITY, 1.0, 1.0),
        ] {
            let item = ItemRequest::new(dims.0, dims.1, dims.2, PackingType::Standard)
                .with_weight(f64::NAN);
            let recommendation = recommend_box(&item);
            assert!(recommendation.rejected_boxes().len() <= 5);
        }
    }

    #[test]
    fn compare_with_tolerance_treats_close_values_as_equal() {
        assert_eq!(compare_with_tolerance(100.0, 140.0, 50.0), Ordering::Equal);
        assert_eq!(compare_with_tolerance(100.0, 151.0, 50.0), Ordering::Less);
        assert_eq!(compare_with_tolerance(151.0, 100.0, 50.0), Ordering::Greater);
    }
}
