//! Geometric helpers for orientation-aware fit testing.
//!
//! An item may be rotated freely before it goes into a box, so every test
//! here looks at all six axis permutations of the item.

use crate::model::ShippingBox;
use crate::types::Dims;

/// Axis index permutations of a (l, w, h) triple.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Returns all six orientations of `dims`.
///
/// Duplicates are kept when axes are equal; callers only look for the first
/// or the best match.
pub fn orientations(dims: &Dims) -> [Dims; 6] {
    let axes = dims.as_array();
    PERMUTATIONS.map(|[a, b, c]| Dims::new(axes[a], axes[b], axes[c]))
}

/// Checks whether an item with the given (already buffered) dimensions fits
/// into the box in any orientation.
///
/// # Parameters
/// * `item_l`, `item_w`, `item_h` - Item dimensions
/// * `shipping_box` - Candidate box
///
/// # Returns
/// `true` if some orientation satisfies `l ≤ box.l`, `w ≤ box.w` and `h ≤ box.h`
///
/// # Examples
/// ```
/// use box_advisor::geometry::fits;
/// use box_advisor::model::{BoxTag, ShippingBox};
///
/// let tall = ShippingBox::new(15.0, 15.0, 48.0, BoxTag::Specialty);
/// assert!(fits(40.0, 10.0, 12.0, &tall));
/// assert!(!fits(40.0, 16.0, 12.0, &tall));
/// ```
pub fn fits(item_l: f64, item_w: f64, item_h: f64, shipping_box: &ShippingBox) -> bool {
    fits_dims(&Dims::new(item_l, item_w, item_h), shipping_box)
}

/// Same as [`fits`] for a dimension triple.
pub fn fits_dims(item: &Dims, shipping_box: &ShippingBox) -> bool {
    let inner = shipping_box.dims();
    orientations(item).iter().any(|o| o.fits_within(&inner))
}

/// Per-axis shortfall of one orientation against a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shortfall {
    /// The orientation of the required dimensions that was evaluated.
    pub orientation: Dims,
    /// Positive amount by which each box axis is too short, 0 when it fits.
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Shortfall {
    fn of(orientation: Dims, inner: &Dims) -> Self {
        Self {
            orientation,
            length: (orientation.l - inner.l).max(0.0),
            width: (orientation.w - inner.w).max(0.0),
            height: (orientation.h - inner.h).max(0.0),
        }
    }

    /// Sum of the positive shortfalls.
    pub fn total(&self) -> f64 {
        self.length + self.width + self.height
    }

    pub fn is_none(&self) -> bool {
        self.total() <= 0.0
    }

    /// Short axes as `(name, amount)` pairs, in length/width/height order.
    pub fn short_axes(&self) -> Vec<(&'static str, f64)> {
        [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .collect()
    }
}

/// Finds the orientation of `required` that leaves the least total shortfall
/// against the box. Ties keep the first orientation in permutation order.
pub fn best_orientation_shortfall(required: &Dims, shipping_box: &ShippingBox) -> Shortfall {
    let inner = shipping_box.dims();
    let mut candidates = orientations(required)
        .into_iter()
        .map(|o| Shortfall::of(o, &inner));

    // six orientations, never empty
    let first = candidates
        .next()
        .unwrap_or_else(|| Shortfall::of(*required, &inner));
    candidates.fold(first, |best, candidate| {
        if candidate.total() < best.total() {
            candidate
        } else {
            best
        }
    })
}

/// Checks whether the required footprint fits the box footprint, allowing a
/// quarter turn.
///
/// # Returns
/// `None` if it does not fit, `Some(false)` if it fits as is and
/// `Some(true)` if length and width had to be swapped.
pub fn footprint_fit(required: &Dims, shipping_box: &ShippingBox) -> Option<bool> {
    if shipping_box.l >= required.l && shipping_box.w >= required.w {
        Some(false)
    } else if shipping_box.l >= required.w && shipping_box.w >= required.l {
        Some(true)
    } else {
        None
    }
}
