//! Build presentation: slots, total, and the compatibility box.

use crate::build::Slots;
use crate::compat::CompatIssue;
use crate::error::ApiError;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

const ALL_CLEAR: &str = "No obvious compatibility issues detected.";

pub fn format_build_text(slots: &Slots, total: f64, issues: &[CompatIssue]) -> String {
    if slots.is_empty() {
        return "Build is empty.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Slot", "Part", "Price"]);
    for (slot, part) in slots {
        table.add_row(vec![
            slot.clone(),
            part.name.clone(),
            format!("${:.2}", part.price),
        ]);
    }

    let mut out = table.to_string();
    out.push_str(&format!("\nTotal: ${:.2}\n", total));
    out.push('\n');
    out.push_str(&format_issues_text(issues));
    out
}

pub fn format_build_json(
    slots: &Slots,
    total: f64,
    issues: &[CompatIssue],
) -> Result<String, ApiError> {
    let doc = json!({
        "slots": slots,
        "total": total,
        "issues": issues,
        "issue_messages": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&doc)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize build view: {}", e)))
}

pub fn format_issues_text(issues: &[CompatIssue]) -> String {
    if issues.is_empty() {
        return format!("{}", ALL_CLEAR.green());
    }

    let mut lines = vec![format!(
        "{}",
        format!("{} compatibility issue(s):", issues.len()).red()
    )];
    for issue in issues {
        lines.push(format!("  - {}", issue));
    }
    lines.join("\n")
}

pub fn format_issues_json(issues: &[CompatIssue]) -> Result<String, ApiError> {
    let doc = json!({
        "ok": issues.is_empty(),
        "issues": issues,
        "issue_messages": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&doc)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize issues: {}", e)))
}
