//! Configuration constants and the product catalog.
//!
//! Every rule table the engine consults lives in [`Catalog`]. Tables that are
//! searched by substring are ordered `Vec`s: the first entry that matches wins,
//! so entry order is part of the catalog's meaning.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{read_non_empty, PackError, Result};
use crate::model::Category;
use crate::parser::casefold::fold_upper;

/// Logistics divisor for volumetric weight (cm³ per desi).
pub const DESI_DIVISOR: f64 = 3000.0;

/// Model key used when no catalog model appears in a name.
pub const DEFAULT_MODEL_KEY: &str = "standart";

/// Base depth of the default model, in cm.
pub const DEFAULT_BASE_DEPTH_CM: f64 = 4.5;

/// Raw dimension digits are millimetres; divide by this for centimetres.
pub const RAW_UNITS_PER_CM: f64 = 10.0;

/// Segment reference weights are quoted per segment of this height (cm).
pub const SEGMENT_REFERENCE_HEIGHT_CM: f64 = 60.0;

/// Pipe reference weights are quoted per pipe of this width (cm).
pub const PIPE_REFERENCE_WIDTH_CM: f64 = 50.0;

/// Decimal places used for calculated weights and desi.
pub const CALC_DECIMALS: i32 = 2;

/// Decimal places used when a total weight is shown to an operator.
pub const DISPLAY_DECIMALS: i32 = 1;

/// Token that follows an explicit segment count in a product name.
pub const SEGMENT_TOKEN: &str = "DILIM";

/// Largest number of units accepted from one order row. Larger quantities
/// are capped to this value and reported.
pub const MAX_UNITS_PER_ROW: u32 = 10_000;

/// A model key and its unpackaged body depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDepth {
    pub key: String,
    pub depth_cm: f64,
}

impl ModelDepth {
    pub fn new(key: &str, depth_cm: f64) -> Self {
        Self {
            key: key.to_string(),
            depth_cm,
        }
    }
}

/// Display name that does not follow simple capitalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    pub key: String,
    pub display: String,
}

/// Packing allowance added to each raw axis, in cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Per-model replacement for the radiator depth margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthOverride {
    pub key: String,
    pub depth: f64,
}

/// Margins for both categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginTable {
    pub towel_warmer: Margins,
    pub radiator: Margins,
    pub radiator_depth_overrides: Vec<DepthOverride>,
}

impl MarginTable {
    /// Margins for a category, with any per-model depth override applied.
    pub fn for_model(&self, category: Category, model_key: &str) -> Margins {
        match category {
            Category::TowelWarmer => self.towel_warmer,
            Category::Radiator => {
                let mut margins = self.radiator;
                if let Some(o) = self
                    .radiator_depth_overrides
                    .iter()
                    .find(|o| o.key == model_key)
                {
                    margins.depth = o.depth;
                }
                margins
            }
        }
    }
}

/// Reference weight of one segment (per 60 cm) or one pipe (per 50 cm), in kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightReference {
    pub key: String,
    pub kg: f64,
}

/// Segment count inferred from packaged width: `round((width + offset) / divisor)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRule {
    pub key: String,
    pub offset: f64,
    pub divisor: f64,
}

/// Pipe count for a known towel-warmer height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeHeight {
    pub height_cm: u32,
    pub pipes: u32,
}

/// Pipe-count model: table lookup by exact height, else `round(height / divisor)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeRule {
    pub key: String,
    pub divisor: f64,
    pub heights: Vec<PipeHeight>,
}

impl PipeRule {
    /// Pipe count for a raw height in cm.
    pub fn pipes_for(&self, height_cm: f64) -> u32 {
        if height_cm.fract() == 0.0 {
            if let Some(h) = self
                .heights
                .iter()
                .find(|h| f64::from(h.height_cm) == height_cm)
            {
                return h.pipes;
            }
        }
        rounding::round_count(height_cm / self.divisor)
    }
}

/// Item named by a recipe line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeItem {
    /// Literal item name.
    Fixed(String),
    /// Mounting set named after the model ("Nirvana Ayak Seti").
    ModelMounting,
}

/// One line of a per-unit packing recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub quantity: u32,
    pub unit: String,
    pub item: RecipeItem,
}

impl RecipeLine {
    fn fixed(quantity: u32, unit: &str, item: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
            item: RecipeItem::Fixed(item.to_string()),
        }
    }
}

/// Per-category packing recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipes {
    pub radiator: Vec<RecipeLine>,
    pub towel_warmer: Vec<RecipeLine>,
    /// Suffix appended to the display model name for [`RecipeItem::ModelMounting`].
    pub mounting_suffix: String,
    /// Mounting item used when the model is the default model.
    pub generic_mounting: String,
}

/// Every rule table used by the interpreter and calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Model keys with base depths, in match priority order.
    pub models: Vec<ModelDepth>,
    /// Fallback when no model key matches.
    pub default_model: ModelDepth,
    /// Models that are towel warmers whatever the name says.
    pub towel_warmer_models: Vec<String>,
    /// Lowercase keywords marking a towel warmer.
    pub towel_warmer_keywords: Vec<String>,
    /// Lowercase keywords marking a radiator.
    pub radiator_keywords: Vec<String>,
    /// Color vocabulary, in match priority order.
    pub colors: Vec<String>,
    pub display_names: Vec<DisplayName>,
    pub margins: MarginTable,
    pub weights: Vec<WeightReference>,
    pub segment_rules: Vec<SegmentRule>,
    pub pipe_rules: Vec<PipeRule>,
    pub recipes: Recipes,
}

impl Default for Catalog {
    fn default() -> Self {
        let names = |keys: &[&str]| keys.iter().map(|k| k.to_string()).collect::<Vec<_>>();
        let weight = |key: &str, kg: f64| WeightReference {
            key: key.to_string(),
            kg,
        };
        let segments = |key: &str, offset: f64, divisor: f64| SegmentRule {
            key: key.to_string(),
            offset,
            divisor,
        };
        let pipes = |key: &str, divisor: f64, table: &[(u32, u32)]| PipeRule {
            key: key.to_string(),
            divisor,
            heights: table
                .iter()
                .map(|&(height_cm, pipes)| PipeHeight { height_cm, pipes })
                .collect(),
        };

        Self {
            models: vec![
                ModelDepth::new("nirvana", 5.0),
                ModelDepth::new("prag", 6.0),
                ModelDepth::new("livera", 4.0),
                ModelDepth::new("lizyantus", 7.5),
                ModelDepth::new("kumbaros", 6.5),
                ModelDepth::new("zenith", 8.0),
                ModelDepth::new("akasya", 3.5),
                ModelDepth::new("papatya", 3.0),
                ModelDepth::new("yonca", 3.0),
                ModelDepth::new("mars", 3.5),
                ModelDepth::new(DEFAULT_MODEL_KEY, DEFAULT_BASE_DEPTH_CM),
            ],
            default_model: ModelDepth::new(DEFAULT_MODEL_KEY, DEFAULT_BASE_DEPTH_CM),
            towel_warmer_models: names(&["akasya", "papatya", "yonca", "mars"]),
            towel_warmer_keywords: names(&["havlupan"]),
            radiator_keywords: names(&["radyatör", "radyator"]),
            colors: names(&["BEYAZ", "SİYAH", "ANTRASİT", "GRİ", "KREM", "KROM", "ALTIN"]),
            display_names: vec![DisplayName {
                key: "livera".to_string(),
                display: "Livara".to_string(),
            }],
            margins: MarginTable {
                towel_warmer: Margins {
                    width: 1.5,
                    height: 0.5,
                    depth: 0.5,
                },
                radiator: Margins {
                    width: 3.5,
                    height: 0.5,
                    depth: 3.0,
                },
                radiator_depth_overrides: vec![DepthOverride {
                    key: "prag".to_string(),
                    depth: 2.0,
                }],
            },
            weights: vec![
                weight("nirvana", 1.25),
                weight("prag", 1.40),
                weight("livera", 0.95),
                weight("lizyantus", 1.10),
                weight("kumbaros", 1.05),
                weight("zenith", 1.80),
                weight("akasya", 0.85),
                weight("yonca", 0.42),
                weight("mars", 0.55),
            ],
            segment_rules: vec![
                segments("nirvana", 1.0, 8.0),
                segments("prag", 1.0, 8.0),
                segments("livera", 3.0, 6.0),
                segments("lizyantus", 0.5, 6.0),
                segments("kumbaros", 0.5, 6.0),
                segments("zenith", 1.0, 10.0),
            ],
            pipe_rules: vec![
                pipes("yonca", 9.0, &[(70, 8), (100, 11), (120, 13), (150, 16)]),
                pipes("mars", 11.0, &[(70, 6), (100, 9), (120, 11), (150, 14)]),
            ],
            recipes: Recipes {
                radiator: vec![
                    RecipeLine::fixed(2, "Adet", "Kör Tapa"),
                    RecipeLine::fixed(1, "Adet", "Hava Tahliye Tapası"),
                    RecipeLine {
                        quantity: 1,
                        unit: "Takım".to_string(),
                        item: RecipeItem::ModelMounting,
                    },
                    RecipeLine::fixed(4, "Adet", "Dübel"),
                    RecipeLine::fixed(4, "Adet", "Vida"),
                    RecipeLine::fixed(2, "Metre", "Streç Film"),
                ],
                towel_warmer: vec![
                    RecipeLine::fixed(2, "Adet", "Kör Tapa"),
                    RecipeLine::fixed(1, "Adet", "Hava Tahliye Tapası"),
                    RecipeLine::fixed(1, "Takım", "Havlupan Montaj Seti"),
                    RecipeLine::fixed(4, "Adet", "Dübel"),
                    RecipeLine::fixed(4, "Adet", "Vida"),
                    RecipeLine::fixed(1, "Metre", "Streç Film"),
                ],
                mounting_suffix: "Ayak Seti".to_string(),
                generic_mounting: "Standart Montaj Seti".to_string(),
            },
        }
    }
}

impl Catalog {
    /// Parse a catalog from JSON. Missing fields keep their built-in values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        let validation = crate::validation::validate_catalog(&catalog);
        for warning in &validation.warnings {
            tracing::warn!("{}", warning);
        }
        if !validation.passed {
            return Err(PackError::InvalidCatalog {
                errors: validation.errors,
            });
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_non_empty(path)?;
        Self::from_json_str(&content)
    }

    /// Body depth of a model, falling back to the default model.
    pub fn base_depth(&self, model_key: &str) -> f64 {
        self.models
            .iter()
            .find(|m| m.key == model_key)
            .map(|m| m.depth_cm)
            .unwrap_or(self.default_model.depth_cm)
    }

    /// Human-facing model name: an explicit mapping, else the key capitalized.
    pub fn display_name(&self, model_key: &str) -> String {
        if let Some(d) = self.display_names.iter().find(|d| d.key == model_key) {
            return d.display.clone();
        }
        let mut chars = model_key.chars();
        match chars.next() {
            Some(first) => fold_upper(&first.to_string()) + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn is_default_model(&self, model_key: &str) -> bool {
        model_key == self.default_model.key
    }

    pub fn weight_reference(&self, model_key: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.key == model_key)
            .map(|w| w.kg)
    }

    pub fn segment_rule(&self, model_key: &str) -> Option<&SegmentRule> {
        self.segment_rules.iter().find(|r| r.key == model_key)
    }

    pub fn pipe_rule(&self, model_key: &str) -> Option<&PipeRule> {
        self.pipe_rules.iter().find(|r| r.key == model_key)
    }
}

/// Rounding helpers.
///
/// Both helpers round half to even, matching the spreadsheet history the
/// figures are checked against.
pub mod rounding {
    /// Round to a number of decimal places.
    #[inline]
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round_ties_even() / factor
    }

    /// Round a non-negative ratio to a whole count.
    #[inline]
    pub fn round_count(value: f64) -> u32 {
        if !value.is_finite() || value <= 0.0 {
            return 0;
        }
        value.round_ties_even() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::rounding::{round_count, round_to};
    use super::*;

    #[test]
    fn test_default_catalog_ends_with_default_model() {
        let catalog = Catalog::default();
        assert_eq!(catalog.models.last(), Some(&catalog.default_model));
        assert_eq!(catalog.default_model.depth_cm, DEFAULT_BASE_DEPTH_CM);
        assert_eq!(catalog.colors.len(), 7);
    }

    #[test]
    fn test_base_depth_falls_back_to_default() {
        let catalog = Catalog::default();
        assert_eq!(catalog.base_depth("nirvana"), 5.0);
        assert_eq!(catalog.base_depth("unknown"), 4.5);
    }

    #[test]
    fn test_display_name() {
        let catalog = Catalog::default();
        assert_eq!(catalog.display_name("nirvana"), "Nirvana");
        assert_eq!(catalog.display_name("livera"), "Livara");
        assert_eq!(catalog.display_name("standart"), "Standart");
        assert_eq!(catalog.display_name(""), "");
    }

    #[test]
    fn test_prag_depth_override_is_radiator_only() {
        let margins = &Catalog::default().margins;
        assert_eq!(margins.for_model(Category::Radiator, "prag").depth, 2.0);
        assert_eq!(margins.for_model(Category::Radiator, "nirvana").depth, 3.0);
        assert_eq!(margins.for_model(Category::TowelWarmer, "prag").depth, 0.5);
    }

    #[test]
    fn test_pipe_rule_lookup_and_fallback() {
        let catalog = Catalog::default();
        let yonca = catalog.pipe_rule("yonca").unwrap();
        assert_eq!(yonca.pipes_for(100.0), 11);
        assert_eq!(yonca.pipes_for(80.0), 9); // 8.89
        assert_eq!(yonca.pipes_for(100.5), 11); // 11.17

        let mars = catalog.pipe_rule("mars").unwrap();
        assert_eq!(mars.pipes_for(70.0), 6);
        assert_eq!(mars.pipes_for(100.0), 9);
        assert_eq!(mars.pipes_for(120.0), 11);
        assert_eq!(mars.pipes_for(150.0), 14);
        assert_eq!(mars.pipes_for(90.0), 8); // 8.18
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(9.429375, 2), 9.43);
        assert_eq!(round_to(17.574, 2), 17.57);
        assert_eq!(round_to(16.8333, 1), 16.8);
    }

    #[test]
    fn test_round_count_half_even() {
        assert_eq!(round_count(16.4375), 16);
        assert_eq!(round_count(16.5), 16);
        assert_eq!(round_count(17.5), 18);
        assert_eq!(round_count(-3.0), 0);
        assert_eq!(round_count(f64::NAN), 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let catalog = Catalog::from_json_str(r#"{ "colors": ["MAVİ"] }"#).unwrap();
        assert_eq!(catalog.colors, vec!["MAVİ".to_string()]);
        assert_eq!(catalog.models, Catalog::default().models);
    }
}
