//! Order-level output: packing list, shipping labels and log rows.

pub mod audit;
pub mod label;
pub mod list;

pub use audit::{audit_rows, AuditContext, AuditRow};
pub use label::{build_labels, pdf_safe, Consignee, ShippingLabel};
pub use list::{build_packing_list, AccessoryTally, Package, PackedItem, PackingList};
