//! # Receipt Text Rendering
//!
//! Renders a [`Receipt`] into the plain-text block handed to the printer
//! gateway. The gateway never formats anything itself; it receives the
//! finished text and pushes it to the device as-is.
//!
//! ## Sample Output (32-column paper)
//! ```text
//!          COPRA TRADING
//! --------------------------------
//! Receipt No.             RCT-0001
//! Date            2026-08-06 09:15
//! Customer               Juan Cruz
//! --------------------------------
//! Gross weight          1000.00 kg
//! Deduction               50.00 kg
//! Net weight             950.00 kg
//! Price / kg                  8.50
//! Transport fee             100.00
//! --------------------------------
//! TOTAL                    8175.00
//! --------------------------------
//!            Thank you!
//! ```

use serde::{Deserialize, Serialize};

use crate::settlement::format_amount;
use crate::types::Receipt;

/// Layout parameters for printable receipts.
///
/// Loaded once by the embedding application and reused for every print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLayout {
    /// Station name printed centered at the top.
    pub store_name: String,

    /// Address lines printed centered under the name.
    pub address_lines: Vec<String>,

    /// Paper width in characters (typically 32, 42, or 48).
    pub paper_width: usize,

    /// Optional centered footer line.
    pub footer: Option<String>,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            store_name: "COPRA TRADING".to_string(),
            address_lines: Vec::new(),
            paper_width: 32,
            footer: Some("Thank you!".to_string()),
        }
    }
}

/// Renders one receipt as a printable text block.
///
/// Every line fits the configured paper width when the content allows it;
/// oversize values degrade to a single space separator rather than being
/// truncated, since losing digits on a settlement receipt is worse than an
/// ugly line.
pub fn render_receipt(receipt: &Receipt, layout: &ReceiptLayout) -> String {
    let width = layout.paper_width;
    let rule = "-".repeat(width);

    let mut lines: Vec<String> = Vec::new();

    lines.push(center(&layout.store_name, width));
    for address_line in &layout.address_lines {
        lines.push(center(address_line, width));
    }

    lines.push(rule.clone());
    lines.push(row("Receipt No.", &receipt.receipt_number, width));
    lines.push(row(
        "Date",
        &receipt.created_at.format("%Y-%m-%d %H:%M").to_string(),
        width,
    ));
    lines.push(row("Customer", &receipt.customer_name, width));
    if !receipt.address.is_empty() {
        lines.push(row("Address", &receipt.address, width));
    }

    lines.push(rule.clone());
    lines.push(row("Gross weight", &kg(receipt.gross_weight), width));
    lines.push(row("Deduction", &kg(receipt.deduction_weight), width));
    lines.push(row("Net weight", &kg(receipt.net_weight()), width));
    lines.push(row("Price / kg", &format_amount(receipt.unit_price), width));
    lines.push(row(
        "Transport fee",
        &format_amount(receipt.transport_fee),
        width,
    ));

    lines.push(rule.clone());
    lines.push(row("TOTAL", &format_amount(receipt.total), width));
    lines.push(rule);

    if let Some(footer) = &layout.footer {
        lines.push(center(footer, width));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Centers `text` within `width` columns. No trailing padding.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// One label/value line: label left, value right-aligned to the paper edge.
fn row(label: &str, value: &str, width: usize) -> String {
    let label_len = label.chars().count();
    let value_len = value.chars().count();

    if label_len + value_len + 1 <= width {
        format!("{}{:>pad$}", label, value, pad = width - label_len)
    } else {
        format!("{} {}", label, value)
    }
}

fn kg(weight: f64) -> String {
    format!("{} kg", format_amount(weight))
}

// =============================================================================
// Unit Tests
// =============================================================================
