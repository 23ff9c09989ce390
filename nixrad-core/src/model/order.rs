//! Order lines supplied by the spreadsheet reader.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MAX_UNITS_PER_ROW;
use crate::error::{read_non_empty, Result};

/// Quantity cell as it arrived: a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

impl Default for QuantityInput {
    fn default() -> Self {
        QuantityInput::Number(0.0)
    }
}

impl From<u32> for QuantityInput {
    fn from(value: u32) -> Self {
        QuantityInput::Number(f64::from(value))
    }
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        QuantityInput::Number(f64::from(value))
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

impl QuantityInput {
    /// Numeric value of the cell, if it reads as a finite number.
    ///
    /// Text accepts `,` as the decimal separator.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            QuantityInput::Number(n) => *n,
            QuantityInput::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Whole units ordered. Unusable values and values below 1 give 0.
    ///
    /// Fractions truncate toward zero. Anything above [`MAX_UNITS_PER_ROW`]
    /// is capped to it.
    pub fn units(&self) -> u32 {
        match self.value() {
            Some(value) if value >= 1.0 => {
                value.trunc().min(f64::from(MAX_UNITS_PER_ROW)) as u32
            }
            _ => 0,
        }
    }

    /// Check if the cell could not be read as a number at all.
    pub fn is_non_numeric(&self) -> bool {
        self.value().is_none()
    }

    /// Check if the value was cut down to [`MAX_UNITS_PER_ROW`].
    pub fn is_capped(&self) -> bool {
        self.value()
            .is_some_and(|v| v.trunc() > f64::from(MAX_UNITS_PER_ROW))
    }
}

impl std::fmt::Display for QuantityInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityInput::Number(n) => write!(f, "{}", n),
            QuantityInput::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One row of the order table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Free-text product-stock name.
    pub name: String,
    #[serde(default)]
    pub quantity: QuantityInput,
    /// Line amount, passed through to the audit log.
    #[serde(default)]
    pub amount: Option<f64>,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Load order lines from a JSON array file.
pub fn load_orders(path: &Path) -> Result<Vec<OrderLine>> {
    let content = read_non_empty(path)?;
    let lines: Vec<OrderLine> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} order line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_quantities() {
        assert_eq!(QuantityInput::Number(3.0).units(), 3);
        assert_eq!(QuantityInput::Number(2.9).units(), 2);
        assert_eq!(QuantityInput::Number(0.0).units(), 0);
        assert_eq!(QuantityInput::Number(-4.0).units(), 0);
        assert_eq!(QuantityInput::Number(f64::NAN).units(), 0);
        assert_eq!(QuantityInput::Number(0.5).units(), 0);
    }

    #[test]
    fn test_large_quantities_capped() {
        let huge = QuantityInput::Number(3e9);
        assert_eq!(huge.units(), MAX_UNITS_PER_ROW);
        assert!(huge.is_capped());

        let at_cap = QuantityInput::from("10000,9");
        assert_eq!(at_cap.units(), MAX_UNITS_PER_ROW);
        assert!(!at_cap.is_capped());
        assert!(!QuantityInput::Number(f64::INFINITY).is_capped());
    }

    #[test]
    fn test_text_quantities() {
        assert_eq!(QuantityInput::from(" 4 ").units(), 4);
        assert_eq!(QuantityInput::from("2,0").units(), 2);
        assert_eq!(QuantityInput::from("iki").units(), 0);
        assert_eq!(QuantityInput::from("").units(), 0);
    }

    #[test]
    fn test_non_numeric_detection() {
        assert!(QuantityInput::from("iki").is_non_numeric());
        assert!(!QuantityInput::from("-1").is_non_numeric());
        assert!(!QuantityInput::Number(0.0).is_non_numeric());
    }

    #[test]
    fn test_order_line_json_accepts_number_or_text() {
        let lines: Vec<OrderLine> = serde_json::from_str(
            r#"[
                { "name": "NIRVANA 500/1270 BEYAZ", "quantity": 3, "amount": 4500.0 },
                { "name": "TERMOSTATİK VANA", "quantity": "2" },
                { "name": "PRAG 600/1000" }
            ]"#,
        )
        .unwrap();

        assert_eq!(lines[0].quantity.units(), 3);
        assert_eq!(lines[0].amount, Some(4500.0));
        assert_eq!(lines[1].quantity, QuantityInput::Text("2".to_string()));
        assert_eq!(lines[2].quantity.units(), 0);
    }
}
