//! Bill-of-materials lines and their aggregation across orders.

use serde::{Deserialize, Serialize};

/// One `(quantity, unit, item)` line of a packing recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub quantity: u32,
    pub unit: String,
    pub item: String,
}

impl BomLine {
    pub fn new(quantity: u32, unit: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            item: item.into(),
        }
    }
}

/// Bill of materials summed by item name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub lines: Vec<BomLine>,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `multiplier` units worth of recipe lines. Quantities saturate at
    /// `u32::MAX`.
    pub fn add_scaled(&mut self, lines: &[BomLine], multiplier: u32) {
        for line in lines {
            let quantity = line.quantity.saturating_mul(multiplier);
            match self.lines.iter_mut().find(|l| l.item == line.item) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
                None => self
                    .lines
                    .push(BomLine::new(quantity, line.unit.clone(), line.item.clone())),
            }
        }
    }

    /// Quantity for an item name, if present.
    pub fn quantity_of(&self, item: &str) -> Option<u32> {
        self.lines.iter().find(|l| l.item == item).map(|l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
