//! Cart presentation: mock cart lines and the checkout receipt.

use crate::cart::{CartView, Receipt};
use crate::error::ApiError;
use comfy_table::Table;

pub fn format_cart_text(cart: &CartView) -> String {
    if cart.lines.is_empty() {
        return "Cart is empty.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Slot", "Item", "Price"]);
    for line in &cart.lines {
        table.add_row(vec![
            line.slot.clone(),
            line.name.clone(),
            format!("${:.2}", line.price),
        ]);
    }

    format!("{}\nCart total: ${:.2}", table, cart.total)
}

pub fn format_cart_json(cart: &CartView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(cart)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize cart: {}", e)))
}

pub fn format_receipt_text(receipt: &Receipt) -> String {
    let mut lines = vec![
        "Order placed (mock checkout, nothing was charged).".to_string(),
        format!("Order ref: {}", receipt.order_ref),
        format!("Issued at: {}", receipt.issued_at.to_rfc3339()),
        String::new(),
    ];
    for line in &receipt.lines {
        lines.push(format!("  {:<12} {:<30} ${:.2}", line.slot, line.name, line.price));
    }
    lines.push(String::new());
    lines.push(format!("Total: ${:.2}", receipt.total));
    lines.join("\n")
}
