//! Catalog consistency checks.

use crate::config::{Catalog, Margins};
use crate::parser::casefold::match_form;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a catalog before it is used.
///
/// Errors make a catalog unusable; warnings flag entries that can never
/// match because an earlier entry always wins.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if catalog.default_model.key.trim().is_empty() {
        result.add_error("Default model has an empty key");
    }
    if catalog.default_model.depth_cm <= 0.0 {
        result.add_error(format!(
            "Default model '{}': depth must be positive, got {}",
            catalog.default_model.key, catalog.default_model.depth_cm
        ));
    }

    for (idx, model) in catalog.models.iter().enumerate() {
        if model.key.trim().is_empty() {
            result.add_error(format!("Model {}: empty key", idx + 1));
            continue;
        }
        if model.depth_cm <= 0.0 {
            result.add_error(format!(
                "Model '{}': depth must be positive, got {}",
                model.key, model.depth_cm
            ));
        }
        let key = match_form(&model.key);
        if let Some(earlier) = catalog.models[..idx]
            .iter()
            .find(|m| !m.key.trim().is_empty() && key.contains(&match_form(&m.key)))
        {
            result.add_warning(format!(
                "Model '{}' is never matched: '{}' comes first",
                model.key, earlier.key
            ));
        }
    }

    for (idx, color) in catalog.colors.iter().enumerate() {
        let form = match_form(color);
        if let Some(earlier) = catalog.colors[..idx]
            .iter()
            .find(|c| form.contains(&match_form(c)))
        {
            result.add_warning(format!(
                "Color '{}' is never matched: '{}' comes first",
                color, earlier
            ));
        }
    }
    if catalog.colors.is_empty() {
        result.add_warning("Color list is empty");
    }

    for model in &catalog.towel_warmer_models {
        if !catalog.models.iter().any(|m| &m.key == model) {
            result.add_warning(format!(
                "Towel-warmer model '{}' is not in the model table",
                model
            ));
        }
    }

    check_margins(&mut result, "towel warmer", &catalog.margins.towel_warmer);
    check_margins(&mut result, "radiator", &catalog.margins.radiator);
    for o in &catalog.margins.radiator_depth_overrides {
        if o.depth < 0.0 {
            result.add_error(format!("Depth override '{}': negative margin", o.key));
        }
    }

    for weight in &catalog.weights {
        if weight.kg <= 0.0 {
            result.add_error(format!(
                "Weight reference '{}': must be positive, got {}",
                weight.key, weight.kg
            ));
        }
    }
    for rule in &catalog.segment_rules {
        if rule.divisor <= 0.0 {
            result.add_error(format!("Segment rule '{}': divisor must be positive", rule.key));
        }
    }
    for rule in &catalog.pipe_rules {
        if rule.divisor <= 0.0 {
            result.add_error(format!("Pipe rule '{}': divisor must be positive", rule.key));
        }
        if catalog.weight_reference(&rule.key).is_none() {
            result.add_warning(format!(
                "Pipe rule '{}' has no weight reference and always weighs 0",
                rule.key
            ));
        }
    }

    if catalog.recipes.radiator.is_empty() || catalog.recipes.towel_warmer.is_empty() {
        result.add_warning("A category has an empty packing recipe");
    }

    result
}

fn check_margins(result: &mut ValidationResult, name: &str, margins: &Margins) {
    if margins.width < 0.0 || margins.height < 0.0 || margins.depth < 0.0 {
        result.add_error(format!("Negative {} margin", name));
    }
}
