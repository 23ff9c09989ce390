//! Rows for the append-only order log.
//!
//! The log itself lives elsewhere; this only flattens a packing list into
//! the row shape it expects.

use serde::{Deserialize, Serialize};

use super::list::PackingList;

/// Dimension column value for rows without dimensions.
pub const NO_DIMENSIONS: &str = "-";

/// Shared columns for every row of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditContext {
    pub date: String,
    pub customer: String,
    /// Free-text origin tag, e.g. the uploaded file name.
    pub source: String,
}

/// One log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRow {
    pub date: String,
    pub customer: String,
    pub item: String,
    pub dimensions: String,
    pub quantity: u32,
    pub amount: Option<f64>,
    pub source: String,
}

/// Packed items first, then accessories, each in list order.
pub fn audit_rows(list: &PackingList, context: &AuditContext) -> Vec<AuditRow> {
    let row = |item: &str, dimensions: String, quantity: u32, amount: Option<f64>| AuditRow {
        date: context.date.clone(),
        customer: context.customer.clone(),
        item: item.to_string(),
        dimensions,
        quantity,
        amount,
        source: context.source.clone(),
    };

    let packed = list.items.iter().map(|item| {
        row(
            &item.name,
            item.result.dimension_string(),
            item.result.quantity,
            item.amount,
        )
    });
    let accessories = list
        .accessories
        .iter()
        .map(|a| row(&a.name, NO_DIMENSIONS.to_string(), a.quantity, a.amount));

    packed.chain(accessories).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Catalog;
    use crate::model::OrderLine;
    use crate::packing::build_packing_list;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_audit_rows_flatten_items_then_accessories() {
        let list = build_packing_list(
            &[
                OrderLine::new("TERMOSTATİK VANA", 2).with_amount(300.0),
                OrderLine::new("NIRVANA 500/1270 BEYAZ", 3).with_amount(4500.0),
            ],
            &Catalog::default(),
        );
        let context = AuditContext {
            date: "2026-10-19".to_string(),
            customer: "Ayşe Yılmaz".to_string(),
            source: "siparis.xlsx".to_string(),
        };

        let rows = audit_rows(&list, &context);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            AuditRow {
                date: "2026-10-19".to_string(),
                customer: "Ayşe Yılmaz".to_string(),
                item: "NIRVANA 500/1270 BEYAZ".to_string(),
                dimensions: "130.5 x 50.5 x 8".to_string(),
                quantity: 3,
                amount: Some(4500.0),
                source: "siparis.xlsx".to_string(),
            }
        );
        assert_eq!(rows[1].item, "TERMOSTATİK VANA");
        assert_eq!(rows[1].dimensions, NO_DIMENSIONS);
    }
}
