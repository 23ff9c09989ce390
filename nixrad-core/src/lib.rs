//! nixrad-core - Packaging engine for radiator and towel-warmer orders.
//!
//! This library interprets free-text product names (`NIRVANA 500/1270 BEYAZ`),
//! computes packaged dimensions, volumetric weight (desi), physical weight and
//! the packing recipe, and turns an order table into a packing list with
//! shipping-label and log-row data.
//!
//! # Example
//!
//! ```
//! use nixrad_core::{calculate, interpret, Catalog};
//!
//! let catalog = Catalog::default();
//! let descriptor = interpret("NIRVANA 500/1270 BEYAZ", &catalog);
//! let result = calculate(&descriptor, 3, &catalog).into_packed().unwrap();
//! assert_eq!(result.desi, 17.57);
//! assert_eq!(result.short_label, "NIRVANA 500/1270 BEYAZ");
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod model;
pub mod packing;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use calculator::{calculate, volumetric_weight};
pub use config::Catalog;
pub use error::{PackError, Result};
pub use model::{
    load_orders, BillOfMaterials, BomLine, Category, OrderLine, Packaging, PackagingResult,
    ProductDescriptor, QuantityInput, RawDimensions, UnitCount,
};
pub use packing::{
    audit_rows, build_labels, build_packing_list, pdf_safe, AuditContext, AuditRow, Consignee,
    PackingList, ShippingLabel,
};
pub use parser::{fold_lower, fold_upper, interpret};
pub use validation::{validate_catalog, Diagnostic, DiagnosticKind, Diagnostics, ValidationResult};

/// Build a packing list from an order file.
///
/// This is the main high-level function:
/// 1. Load the order lines (JSON array)
/// 2. Interpret and measure each line
/// 3. Aggregate packages, recipe and accessories
///
/// # Arguments
///
/// * `orders_path` - Path to the orders JSON file
/// * `catalog` - Rule tables to apply
pub fn pack_order_file(orders_path: &std::path::Path, catalog: &Catalog) -> Result<PackingList> {
    let lines = load_orders(orders_path)?;
    Ok(build_packing_list(&lines, catalog))
}
