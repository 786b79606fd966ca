//! Comparison presentation: attribute rows as a side-by-side table.

use crate::compare::Comparison;
use crate::error::ApiError;
use comfy_table::Table;

pub fn format_comparison_text(comparison: &Comparison) -> String {
    if comparison.part_names.is_empty() {
        return format!("No {} parts selected for comparison.", comparison.category);
    }

    let mut header = vec!["Attribute".to_string()];
    header.extend(comparison.part_names.iter().cloned());

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(header);
    for row in &comparison.rows {
        let mut cells = vec![row.attribute.clone()];
        cells.extend(row.values.iter().cloned());
        table.add_row(cells);
    }
    table.to_string()
}

pub fn format_comparison_json(comparison: &Comparison) -> Result<String, ApiError> {
    serde_json::to_string_pretty(comparison)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize comparison: {}", e)))
}
