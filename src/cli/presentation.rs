//! Presentation: result formatters for CLI output. Text formatters render
//! comfy-table views; json formatters serialize the view models verbatim.

mod build;
mod cart;
mod catalog;
mod compare;
mod status;

pub use build::{format_build_json, format_build_text, format_issues_json, format_issues_text};
pub use cart::{format_cart_json, format_cart_text, format_receipt_text};
pub use catalog::{format_catalog_list_json, format_catalog_list_text};
pub use compare::{format_comparison_json, format_comparison_text};
pub use status::{format_status_json, format_status_text, StatusReport};
