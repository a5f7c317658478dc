//! Shipping box recommendations for a retail packing counter.
//!
//! Given item dimensions, an optional weight and a packing type, the advisor
//! picks the best fitting box from the store inventory, falls back to two
//! telescoped boxes for long items, and otherwise reports that the item
//! needs custom packaging.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod geometry;
pub mod inventory;
pub mod model;
pub mod optimizer;
pub mod policy;
pub mod recommendation;
pub mod types;

pub use model::{BoxTag, ItemRequest, ShippingBox, ValidationError};
pub use optimizer::{AdvisorConfig, recommend_box, recommend_box_with_config};
pub use policy::PackingType;
pub use recommendation::BoxRecommendation;
