//! Box inventory of the store.
//!
//! The table is compiled in and never mutated. The selectors take the
//! inventory as a slice, so tests and alternative stores can pass their own.

use crate::model::{BoxTag, ShippingBox, Wall};

const fn regular(l: f64, w: f64, h: f64) -> ShippingBox {
    ShippingBox::new(l, w, h, BoxTag::Regular)
        .with_construction(200, Wall::Single)
        .with_max_weight(40.0)
        .with_size_sum(75)
}

const fn art(l: f64, w: f64, h: f64) -> ShippingBox {
    ShippingBox::new(l, w, h, BoxTag::Art)
        .with_construction(200, Wall::Single)
        .with_max_weight(40.0)
        .with_size_sum(95)
}

const fn specialty(l: f64, w: f64, h: f64) -> ShippingBox {
    ShippingBox::new(l, w, h, BoxTag::Specialty)
        .with_construction(275, Wall::Single)
        .with_max_weight(65.0)
        .with_size_sum(95)
}

const fn wardrobe(l: f64, w: f64, h: f64) -> ShippingBox {
    ShippingBox::new(l, w, h, BoxTag::Wardrobe)
        .with_construction(200, Wall::Single)
        .with_max_weight(40.0)
        .with_size_sum(95)
}

/// Boxes stocked by the store, roughly by volume ascending.
pub const STORE_INVENTORY: &[ShippingBox] = &[
    regular(6.0, 6.0, 6.0),
    regular(12.0, 9.0, 3.0),
    regular(11.0, 9.0, 4.0),
    regular(12.0, 9.0, 4.0),
    regular(8.0, 8.0, 8.0),
    regular(12.0, 9.0, 6.0),
    regular(14.0, 14.0, 4.0),
    regular(12.0, 12.0, 6.0),
    regular(10.0, 10.0, 10.0),
    regular(16.0, 16.0, 4.0),
    regular(18.0, 12.0, 6.0),
    regular(17.0, 11.0, 8.0),
    regular(24.0, 8.0, 8.0),
    regular(16.0, 16.0, 6.0),
    regular(16.0, 10.0, 10.0),
    regular(20.0, 14.0, 6.0),
    regular(12.0, 12.0, 12.0),
    regular(15.0, 12.0, 10.0),
    regular(20.0, 16.0, 6.0),
    regular(14.0, 12.0, 14.0),
    regular(16.0, 16.0, 10.0),
    regular(18.0, 12.0, 12.0),
    art(23.0, 4.5, 27.25),
    regular(24.0, 12.0, 10.0),
    regular(24.0, 12.0, 12.0),
    regular(30.0, 20.0, 6.0),
    regular(18.0, 18.0, 12.0),
    regular(20.0, 14.0, 14.0),
    regular(16.0, 16.0, 16.0),
    regular(30.0, 24.0, 6.0),
    regular(36.0, 21.0, 6.0),
    regular(24.0, 16.0, 12.0),
    regular(36.0, 12.0, 12.0),
    art(27.0, 5.5, 35.0),
    regular(24.0, 16.0, 16.0),
    regular(18.0, 18.0, 18.0),
    regular(20.0, 20.0, 16.0),
    regular(19.0, 19.0, 19.0),
    regular(24.0, 18.0, 18.0),
    regular(20.0, 20.0, 20.0),
    art(32.0, 6.0, 42.0),
    art(35.75, 5.5, 45.25),
    regular(24.0, 24.0, 16.0),
    regular(24.0, 20.0, 20.0),
    // golf
    specialty(15.0, 15.0, 48.0),
    // guitar
    specialty(46.0, 20.0, 12.0),
    regular(30.0, 20.0, 20.0),
    // bike
    specialty(54.0, 8.5, 29.0),
    regular(24.0, 24.0, 24.0),
    wardrobe(36.0, 24.0, 21.0),
    wardrobe(45.0, 24.0, 20.0),
    regular(30.0, 30.0, 30.0),
];

/// Largest length and largest width found anywhere in the inventory.
///
/// The two maxima may come from different boxes; this is the envelope a
/// customer would have to stay under.
pub fn largest_footprint(inventory: &[ShippingBox]) -> (f64, f64) {
    inventory.iter().fold((0.0_f64, 0.0_f64), |(l, w), b| {
        (l.max(b.l), w.max(b.w))
    })
}

/// Tallest single box.
pub fn max_single_height(inventory: &[ShippingBox]) -> f64 {
    inventory.iter().map(|b| b.h).fold(0.0, f64::max)
}

/// Tallest enclosure any box reaches when telescoped with a twin.
pub fn max_telescoping_height(inventory: &[ShippingBox]) -> f64 {
    inventory
        .iter()
        .map(telescoped_height)
        .fold(0.0, f64::max)
}

/// `2 × h − overlap(tag)`.
#[inline]
pub fn telescoped_height(shipping_box: &ShippingBox) -> f64 {
    shipping_box.h * 2.0 - shipping_box.tag.telescoping_overlap()
}
