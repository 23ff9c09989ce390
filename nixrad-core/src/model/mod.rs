//! Data model for the packaging engine.

pub mod bom;
pub mod descriptor;
pub mod order;
pub mod packaging;

pub use bom::{BillOfMaterials, BomLine};
pub use descriptor::{Category, ProductDescriptor, RawDimensions};
pub use order::{load_orders, OrderLine, QuantityInput};
pub use packaging::{Packaging, PackagingResult, UnitCount};
