//! Packing list for a whole order.
//!
//! Rows are processed in input order. Each one ends up in exactly one place:
//! - skipped (quantity not usable)
//! - the accessory tally (not a heating product, or no dimensions)
//! - the packed items
//!
//! Package serial numbers are assigned afterwards in one pass over the packed
//! items, so they always follow row order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::calculate;
use crate::config::{
    rounding::round_to, Catalog, CALC_DECIMALS, DISPLAY_DECIMALS, MAX_UNITS_PER_ROW,
};
use crate::model::{BillOfMaterials, OrderLine, Packaging, PackagingResult};
use crate::parser::interpret;
use crate::validation::{DiagnosticKind, Diagnostics};

/// An order row that produced packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedItem {
    /// 1-based row number in the order table.
    pub row: usize,
    pub name: String,
    pub amount: Option<f64>,
    pub result: PackagingResult,
}

/// Non-packaged products summed by literal name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryTally {
    pub name: String,
    pub quantity: u32,
    pub amount: Option<f64>,
}

/// One physical box, numbered within the shipment.
#[derive(Debug, Clone, Copy)]
pub struct Package<'a> {
    /// 1-based serial number.
    pub serial: u32,
    /// Number of boxes in the shipment.
    pub total: u32,
    pub item: &'a PackedItem,
}

/// Everything derived from an order table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingList {
    pub items: Vec<PackedItem>,
    pub accessories: Vec<AccessoryTally>,
    /// Recipe lines summed over every packed unit.
    pub bill_of_materials: BillOfMaterials,
    pub diagnostics: Diagnostics,
    pub package_count: u32,
    pub total_desi: f64,
    pub total_weight_kg: f64,
}

impl PackingList {
    /// Total weight rounded for operator display.
    pub fn total_weight_display(&self) -> f64 {
        round_to(self.total_weight_kg, DISPLAY_DECIMALS)
    }

    /// One entry per physical box, serials 1..=N in row order.
    pub fn packages(&self) -> Vec<Package<'_>> {
        let total = self.package_count;
        let mut serial = 0;
        let mut packages = Vec::with_capacity(total as usize);

        for item in &self.items {
            for _ in 0..item.result.quantity {
                serial += 1;
                packages.push(Package {
                    serial,
                    total,
                    item,
                });
            }
        }

        packages
    }

    fn tally_accessory(&mut self, line: &OrderLine, quantity: u32) {
        match self.accessories.iter_mut().find(|a| a.name == line.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                if let Some(amount) = line.amount {
                    existing.amount = Some(existing.amount.unwrap_or(0.0) + amount);
                }
            }
            None => self.accessories.push(AccessoryTally {
                name: line.name.clone(),
                quantity,
                amount: line.amount,
            }),
        }
    }
}

/// Build the packing list for an order table.
pub fn build_packing_list(lines: &[OrderLine], catalog: &Catalog) -> PackingList {
    let mut list = PackingList::default();

    for (idx, line) in lines.iter().enumerate() {
        let row = idx + 1;
        let quantity = line.quantity.units();

        if quantity == 0 {
            if line.quantity.is_non_numeric() {
                list.diagnostics.push(
                    row,
                    DiagnosticKind::NonNumericQuantity,
                    format!("quantity '{}' is not a number; row skipped", line.quantity),
                );
            } else if line.quantity.value().is_some_and(|v| v > 0.0) {
                list.diagnostics.push(
                    row,
                    DiagnosticKind::FractionalQuantity,
                    format!("quantity {} is less than one unit; row skipped", line.quantity),
                );
            } else {
                list.diagnostics.push(
                    row,
                    DiagnosticKind::NonPositiveQuantity,
                    format!("quantity {} is not positive; row skipped", line.quantity),
                );
            }
            continue;
        }

        if line.quantity.is_capped() {
            list.diagnostics.push(
                row,
                DiagnosticKind::QuantityCapped,
                format!(
                    "quantity {} exceeds {}; row packed as {}",
                    line.quantity, MAX_UNITS_PER_ROW, quantity
                ),
            );
        }

        let descriptor = interpret(&line.name, catalog);
        if !descriptor.recognized {
            debug!("Row {}: '{}' tallied as accessory", row, line.name);
            list.tally_accessory(line, quantity);
            continue;
        }

        let result = match calculate(&descriptor, quantity, catalog) {
            Packaging::Packed(result) => result,
            Packaging::NotComputable => {
                list.diagnostics.push(
                    row,
                    DiagnosticKind::MissingDimensions,
                    format!("no W/H dimensions in '{}'; tallied as accessory", line.name),
                );
                list.tally_accessory(line, quantity);
                continue;
            }
        };

        match result.unit_count {
            None => list.diagnostics.push(
                row,
                DiagnosticKind::UnknownWeight,
                format!(
                    "no weight reference for model '{}'; weight reported as 0",
                    result.model_key
                ),
            ),
            Some(count) if count.count() == 0 => list.diagnostics.push(
                row,
                DiagnosticKind::UnknownWeight,
                format!(
                    "no unit count for model '{}'; weight reported as 0",
                    result.model_key
                ),
            ),
            Some(_) => {}
        }

        list.bill_of_materials
            .add_scaled(&result.bill_of_materials, quantity);
        list.package_count = list.package_count.saturating_add(quantity);
        list.total_desi += result.total_desi;
        list.total_weight_kg += result.total_weight_kg;

        list.items.push(PackedItem {
            row,
            name: line.name.clone(),
            amount: line.amount,
            result,
        });
    }

    list.total_desi = round_to(list.total_desi, CALC_DECIMALS);
    list.total_weight_kg = round_to(list.total_weight_kg, CALC_DECIMALS);

    info!(
        "Packing list: {} package(s), {} accessory line(s), {} notice(s)",
        list.package_count,
        list.accessories.len(),
        list.diagnostics.len()
    );

    list
}
