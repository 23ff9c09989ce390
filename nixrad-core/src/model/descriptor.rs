//! Structured description of a free-text product name.

use serde::{Deserialize, Serialize};

use crate::config::RAW_UNITS_PER_CM;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    /// Panel radiator (first dimension is height).
    #[default]
    Radiator,
    /// Towel warmer / havlupan (first dimension is width).
    TowelWarmer,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Radiator => write!(f, "RADYATÖR"),
            Category::TowelWarmer => write!(f, "HAVLUPAN"),
        }
    }
}

/// The two numbers of a `W/H` pattern, in the order they were written.
///
/// Values are millimetres (tenths of a centimetre).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDimensions {
    /// First number as written.
    pub raw_width: u32,
    /// Second number as written.
    pub raw_height: u32,
}

impl RawDimensions {
    pub fn new(raw_width: u32, raw_height: u32) -> Self {
        Self {
            raw_width,
            raw_height,
        }
    }

    /// First number in cm.
    pub fn first_cm(&self) -> f64 {
        f64::from(self.raw_width) / RAW_UNITS_PER_CM
    }

    /// Second number in cm.
    pub fn second_cm(&self) -> f64 {
        f64::from(self.raw_height) / RAW_UNITS_PER_CM
    }

    /// Actual `(width, height)` in cm.
    ///
    /// Towel warmers are written width first; radiators are written height
    /// first, so the axes swap.
    pub fn oriented_cm(&self, category: Category) -> (f64, f64) {
        match category {
            Category::TowelWarmer => (self.first_cm(), self.second_cm()),
            Category::Radiator => (self.second_cm(), self.first_cm()),
        }
    }

    /// `W/H` with the undivided numbers.
    pub fn label(&self) -> String {
        format!("{}/{}", self.raw_width, self.raw_height)
    }
}

/// Everything the interpreter extracts from one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    /// Name as supplied.
    pub raw_name: String,
    pub category: Category,
    /// Canonical lowercase model key.
    pub model_key: String,
    pub display_model_name: String,
    /// Body depth of the model before packing, in cm.
    pub base_depth_cm: f64,
    /// `None` when the name has no `W/H` pattern.
    pub dimensions: Option<RawDimensions>,
    /// Color token from the catalog vocabulary, or empty.
    pub color: String,
    /// Segment count stated as `<N> DILIM`.
    pub explicit_segments: Option<u32>,
    /// Whether the name is a radiator or towel warmer at all.
    pub recognized: bool,
    /// `"{MODEL} {W}/{H} {COLOR}"` with empty parts dropped.
    pub short_label: String,
}

impl ProductDescriptor {
    /// Check if dimensions were found.
    pub fn has_dimensions(&self) -> bool {
        self.dimensions.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oriented_dimensions_swap_for_radiator() {
        let dims = RawDimensions::new(500, 700);
        assert_eq!(dims.oriented_cm(Category::TowelWarmer), (50.0, 70.0));
        assert_eq!(dims.oriented_cm(Category::Radiator), (70.0, 50.0));
    }

    #[test]
    fn test_dimension_label_is_undivided() {
        assert_eq!(RawDimensions::new(500, 1270).label(), "500/1270");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::TowelWarmer.to_string(), "HAVLUPAN");
        assert_eq!(Category::default(), Category::Radiator);
    }
}
