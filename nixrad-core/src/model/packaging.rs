//! Packaging calculation output.

use serde::{Deserialize, Serialize};

use super::bom::BomLine;
use super::descriptor::Category;
use crate::config::{rounding::round_to, DISPLAY_DECIMALS};

/// Count that drove the physical weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCount {
    /// Radiator segments (dilim), stated in the name.
    StatedSegments(u32),
    /// Radiator segments inferred from packaged width.
    InferredSegments(u32),
    /// Towel-warmer pipes from the height table or divisor.
    Pipes(u32),
}

impl UnitCount {
    pub fn count(&self) -> u32 {
        match self {
            UnitCount::StatedSegments(n) | UnitCount::InferredSegments(n) | UnitCount::Pipes(n) => {
                *n
            }
        }
    }
}

/// Packaged size and weight for one order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingResult {
    pub category: Category,
    pub model_key: String,
    pub display_model_name: String,
    pub packaged_width_cm: f64,
    pub packaged_height_cm: f64,
    pub packaged_depth_cm: f64,
    /// Volumetric weight of one package.
    pub desi: f64,
    /// Physical weight of one package; 0 for models without reference weight.
    pub physical_weight_kg: f64,
    /// `None` when no weight reference applies.
    pub unit_count: Option<UnitCount>,
    /// Per-unit packing recipe.
    pub bill_of_materials: Vec<BomLine>,
    pub short_label: String,
    pub quantity: u32,
    pub total_desi: f64,
    pub total_weight_kg: f64,
}

impl PackagingResult {
    /// `"W x H x D"` in cm for labels and checklists.
    pub fn dimension_string(&self) -> String {
        format!(
            "{} x {} x {}",
            self.packaged_width_cm, self.packaged_height_cm, self.packaged_depth_cm
        )
    }

    /// Total weight rounded for operator display.
    pub fn total_weight_display(&self) -> f64 {
        round_to(self.total_weight_kg, DISPLAY_DECIMALS)
    }
}

/// Result of running the calculator on a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Packaging {
    Packed(PackagingResult),
    /// The name carried no dimensions.
    NotComputable,
}

impl Packaging {
    pub fn packed(&self) -> Option<&PackagingResult> {
        match self {
            Packaging::Packed(result) => Some(result),
            Packaging::NotComputable => None,
        }
    }

    pub fn into_packed(self) -> Option<PackagingResult> {
        match self {
            Packaging::Packed(result) => Some(result),
            Packaging::NotComputable => None,
        }
    }

    pub fn is_computable(&self) -> bool {
        matches!(self, Packaging::Packed(_))
    }
}
