//! Physical weight estimation.
//!
//! Two families:
//! - segment models: `segments × (height / 60) × reference`
//! - pipe models: `pipes × reference × (width / 50)`

use super::PackagedSize;
use crate::config::{
    rounding::{round_count, round_to},
    Catalog, SegmentRule, CALC_DECIMALS, PIPE_REFERENCE_WIDTH_CM, SEGMENT_REFERENCE_HEIGHT_CM,
};
use crate::model::{ProductDescriptor, UnitCount};

/// Weight of one package and the count it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightEstimate {
    pub kg: f64,
    pub unit_count: Option<UnitCount>,
}

impl WeightEstimate {
    fn unknown() -> Self {
        Self {
            kg: 0.0,
            unit_count: None,
        }
    }
}

/// Estimate the physical weight of one packaged unit.
///
/// `raw_height_cm` is the unpackaged height; pipe tables are keyed on it.
pub fn physical_weight(
    descriptor: &ProductDescriptor,
    raw_height_cm: f64,
    size: &PackagedSize,
    catalog: &Catalog,
) -> WeightEstimate {
    let model_key = descriptor.model_key.as_str();
    let Some(reference) = catalog.weight_reference(model_key) else {
        return WeightEstimate::unknown();
    };

    if let Some(rule) = catalog.pipe_rule(model_key) {
        let pipes = rule.pipes_for(raw_height_cm);
        let kg = f64::from(pipes) * reference * (size.width_cm / PIPE_REFERENCE_WIDTH_CM);
        return WeightEstimate {
            kg: round_to(kg, CALC_DECIMALS),
            unit_count: Some(UnitCount::Pipes(pipes)),
        };
    }

    let unit_count = match descriptor.explicit_segments {
        Some(n) => UnitCount::StatedSegments(n),
        None => UnitCount::InferredSegments(
            catalog
                .segment_rule(model_key)
                .map_or(0, |rule| infer_segments(rule, size.width_cm)),
        ),
    };

    let kg = f64::from(unit_count.count())
        * (size.height_cm / SEGMENT_REFERENCE_HEIGHT_CM)
        * reference;

    WeightEstimate {
        kg: round_to(kg, CALC_DECIMALS),
        unit_count: Some(unit_count),
    }
}

/// Segment count from packaged width.
pub fn infer_segments(rule: &SegmentRule, packaged_width_cm: f64) -> u32 {
    round_count((packaged_width_cm + rule.offset) / rule.divisor)
}
