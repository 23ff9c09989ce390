//! Packaged size, volumetric weight and result assembly.

use tracing::debug;

use super::recipe::recipe_for;
use super::weight::physical_weight;
use super::PackagedSize;
use crate::config::{rounding::round_to, Catalog, CALC_DECIMALS, DESI_DIVISOR};
use crate::model::{Packaging, PackagingResult, ProductDescriptor};

/// Volumetric weight (desi) of a box in cm.
pub fn volumetric_weight(width_cm: f64, height_cm: f64, depth_cm: f64) -> f64 {
    round_to((width_cm * height_cm * depth_cm) / DESI_DIVISOR, CALC_DECIMALS)
}

/// Compute packaging for `quantity` units of a product.
///
/// Returns [`Packaging::NotComputable`] when the name had no dimensions.
pub fn calculate(descriptor: &ProductDescriptor, quantity: u32, catalog: &Catalog) -> Packaging {
    let Some(dimensions) = descriptor.dimensions else {
        debug!("No dimensions in '{}'", descriptor.raw_name);
        return Packaging::NotComputable;
    };

    let (raw_width, raw_height) = dimensions.oriented_cm(descriptor.category);
    let margins = catalog
        .margins
        .for_model(descriptor.category, &descriptor.model_key);

    let size = PackagedSize {
        width_cm: round_to(raw_width + margins.width, CALC_DECIMALS),
        height_cm: round_to(raw_height + margins.height, CALC_DECIMALS),
        depth_cm: round_to(descriptor.base_depth_cm + margins.depth, CALC_DECIMALS),
    };

    let desi = volumetric_weight(size.width_cm, size.height_cm, size.depth_cm);
    let weight = physical_weight(descriptor, raw_height, &size, catalog);
    let units = f64::from(quantity);

    debug!(
        "Packed '{}': {} x {} x {} cm, desi {}, {} kg",
        descriptor.raw_name, size.width_cm, size.height_cm, size.depth_cm, desi, weight.kg
    );

    Packaging::Packed(PackagingResult {
        category: descriptor.category,
        model_key: descriptor.model_key.clone(),
        display_model_name: descriptor.display_model_name.clone(),
        packaged_width_cm: size.width_cm,
        packaged_height_cm: size.height_cm,
        packaged_depth_cm: size.depth_cm,
        desi,
        physical_weight_kg: weight.kg,
        unit_count: weight.unit_count,
        bill_of_materials: recipe_for(descriptor, catalog),
        short_label: descriptor.short_label.clone(),
        quantity,
        total_desi: round_to(desi * units, CALC_DECIMALS),
        total_weight_kg: round_to(weight.kg * units, CALC_DECIMALS),
    })
}
