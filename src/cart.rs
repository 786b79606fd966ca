//! Mock cart and checkout
//!
//! The cart is a pure derivation of the current build: one line per
//! occupied slot plus the running total. Checkout produces a mock receipt
//! and performs no payment; nothing here is persisted.

use crate::build::BuildState;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub slot: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

/// Mock order confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order_ref: String,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
    pub total: f64,
}

/// Project the build into cart lines.
pub fn cart_view(build: &BuildState) -> CartView {
    let lines = build
        .slots()
        .iter()
        .map(|(slot, part)| CartLine {
            slot: slot.clone(),
            name: part.name.clone(),
            price: part.price,
        })
        .collect();

    CartView {
        lines,
        total: build.total(),
    }
}

/// Mock checkout. Returns `None` for an empty cart.
pub fn checkout(build: &BuildState) -> Option<Receipt> {
    if build.is_empty() {
        return None;
    }

    let issued_at = Utc::now();
    let view = cart_view(build);
    Some(Receipt {
        order_ref: format!("RK-{}", issued_at.timestamp_millis()),
        issued_at,
        lines: view.lines,
        total: view.total,
    })
}
