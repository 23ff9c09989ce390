//! Shipping label content, one label per package.
//!
//! Labels are 60 x 30 mm thermal stickers. This module fills in the fields;
//! drawing them is left to the renderer. Text stays in clean Unicode until
//! [`ShippingLabel::render_text`], which applies [`pdf_safe`] the way the
//! PDF fonts need it.

use serde::{Deserialize, Serialize};

use super::list::PackingList;

pub const SENDER_NAME: &str = "GONDEREN FIRMA: NIXRAD / KARPAN DIZAYN A.S.";
pub const SENDER_ADDRESS: &str = "Yeni Cami OSB Mah. 3.Cad. No:1 Kavak/SAMSUN Tel: 0262 658 11 58";

/// Characters per printed address line; at most two lines fit.
pub const ADDRESS_LINE_WIDTH: usize = 60;

const DEFAULT_NAME: &str = "MUSTERI ADI";
const DEFAULT_ADDRESS: &str = "ADRES GIRILMEDI";
const DEFAULT_PHONE: &str = "TELEFON YOK";

/// Recipient details as entered by the operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consignee {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Field content of one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingLabel {
    pub serial: u32,
    pub total: u32,
    pub recipient: String,
    /// One or two lines.
    pub address_lines: Vec<String>,
    pub phone: String,
    pub product: String,
    pub desi: f64,
}

impl ShippingLabel {
    /// `"3/5"`, printed in the bottom-right corner.
    pub fn number(&self) -> String {
        format!("{}/{}", self.serial, self.total)
    }

    /// Plain-text rendering in label order, transliterated for PDF fonts.
    pub fn render_text(&self) -> String {
        let mut out = Vec::with_capacity(9);
        out.push(SENDER_NAME.to_string());
        out.push(SENDER_ADDRESS.to_string());
        out.push(format!("ALICI MUSTERI: {}", pdf_safe(&self.recipient)));
        for (idx, line) in self.address_lines.iter().enumerate() {
            if idx == 0 {
                out.push(format!("ADRES :{}", pdf_safe(line)));
            } else {
                out.push(pdf_safe(line));
            }
        }
        out.push(format!("TEL : {}", self.phone));
        out.push(pdf_safe(&self.product));
        out.push(format!("DESI : {}    {}", self.desi, self.number()));
        out.join("\n")
    }
}

/// Split an address into at most two fixed-width lines; the rest is dropped.
pub fn wrap_address(address: &str) -> Vec<String> {
    let chars: Vec<char> = address.chars().collect();
    chars
        .chunks(ADDRESS_LINE_WIDTH)
        .take(2)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Replace Turkish letters the label fonts cannot draw.
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ğ' => 'g',
            'Ğ' => 'G',
            'ş' => 's',
            'Ş' => 'S',
            'ı' => 'i',
            'İ' => 'I',
            'ç' => 'c',
            'Ç' => 'C',
            'ö' => 'o',
            'Ö' => 'O',
            'ü' => 'u',
            'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// One label per package, in serial order.
pub fn build_labels(list: &PackingList, consignee: &Consignee) -> Vec<ShippingLabel> {
    let recipient = or_default(&consignee.name, DEFAULT_NAME);
    let address_lines = wrap_address(&or_default(&consignee.address, DEFAULT_ADDRESS));
    let phone = or_default(&consignee.phone, DEFAULT_PHONE);

    list.packages()
        .into_iter()
        .map(|package| ShippingLabel {
            serial: package.serial,
            total: package.total,
            recipient: recipient.clone(),
            address_lines: address_lines.clone(),
            phone: phone.clone(),
            product: package.item.result.short_label.clone(),
            desi: package.item.result.desi,
        })
        .collect()
}
