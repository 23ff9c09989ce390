//! Packaging calculator: packaged size, desi, physical weight and recipe.

pub mod packaging;
pub mod recipe;
pub mod weight;

pub use packaging::{calculate, volumetric_weight};
pub use recipe::recipe_for;
pub use weight::{physical_weight, WeightEstimate};

/// Outer box size in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackagedSize {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
}
