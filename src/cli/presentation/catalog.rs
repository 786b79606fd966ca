//! Catalog presentation: the filtered part list as a table or JSON.

use crate::error::ApiError;
use crate::part::Part;
use comfy_table::Table;

pub fn format_catalog_list_text(parts: &[Part]) -> String {
    if parts.is_empty() {
        return "No parts match.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Category", "Details", "Price"]);
    for part in parts {
        table.add_row(vec![
            part.id.to_string(),
            part.name.clone(),
            part.category.clone(),
            part.details(),
            format!("${:.2}", part.price),
        ]);
    }
    table.to_string()
}

pub fn format_catalog_list_json(parts: &[Part]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(parts)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize part list: {}", e)))
}
