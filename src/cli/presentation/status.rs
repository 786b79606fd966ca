//! Unified status: catalog, build, totals, and compatibility in one view.

use crate::build::Slots;
use crate::compat::CompatIssue;
use crate::error::ApiError;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Status view model produced by the route layer.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub catalog_parts: usize,
    pub categories: Vec<String>,
    pub build_slots: Slots,
    pub total: f64,
    pub issues: Vec<CompatIssue>,
}

pub fn format_status_text(report: &StatusReport) -> String {
    let mut out = String::new();

    out.push_str("Catalog\n");
    out.push_str(&format!(
        "  {} part(s) across {} categorie(s)\n",
        report.catalog_parts,
        report.categories.len()
    ));
    if !report.categories.is_empty() {
        out.push_str(&format!("  Categories: {}\n", report.categories.join(", ")));
    }

    out.push_str("\nBuild\n");
    if report.build_slots.is_empty() {
        out.push_str("  Build is empty.\n");
    } else {
        for (slot, part) in &report.build_slots {
            out.push_str(&format!(
                "  {:<12} {} (${:.2})\n",
                slot, part.name, part.price
            ));
        }
        out.push_str(&format!("  Total: ${:.2}\n", report.total));
    }

    out.push_str("\nCompatibility\n");
    if report.issues.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            "No obvious compatibility issues detected.".green()
        ));
    } else {
        for issue in &report.issues {
            out.push_str(&format!("  {} {}\n", "!".red(), issue));
        }
    }

    out
}

pub fn format_status_json(report: &StatusReport) -> Result<String, ApiError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize status: {}", e)))
}
