//! Comparison view
//!
//! Side-by-side attribute table for a set of parts within one category.
//! Pure projection: unknown ids and ids from other categories are skipped
//! (a lookup miss is a no-op, not an error), and an empty selection is a
//! valid result.

use crate::part::Part;
use serde::Serialize;

/// One attribute row: label plus one value per compared part, "-" where a
/// part does not carry the attribute.
#[derive(Debug, Clone, Serialize)]
pub struct CompareRow {
    pub attribute: String,
    pub values: Vec<String>,
}

/// Comparison view model, rendered by the CLI as a table.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub category: String,
    pub part_names: Vec<String>,
    pub rows: Vec<CompareRow>,
}

const MISSING: &str = "-";

/// Build the comparison for the given ids within a category. A price row
/// is always present; optional attribute rows appear when any compared
/// part carries the attribute.
pub fn compare_parts(parts: &[Part], category: &str, ids: &[u32]) -> Comparison {
    let selected: Vec<&Part> = ids
        .iter()
        .filter_map(|id| parts.iter().find(|p| p.id == *id))
        .filter(|p| p.category == category)
        .collect();

    let part_names = selected.iter().map(|p| p.name.clone()).collect();

    let mut rows = vec![CompareRow {
        attribute: "Price".to_string(),
        values: selected.iter().map(|p| format!("${:.2}", p.price)).collect(),
    }];

    push_row(&mut rows, "Socket", &selected, |p| p.socket.clone());
    push_row(&mut rows, "RAM Type", &selected, |p| p.ram_type.clone());
    push_row(&mut rows, "Capacity", &selected, |p| {
        p.capacity_gb.map(|c| format!("{}GB", c))
    });
    push_row(&mut rows, "Interface", &selected, |p| p.interface.clone());
    push_row(&mut rows, "Wattage", &selected, |p| {
        p.wattage.map(|w| format!("{}W", w))
    });
    push_row(&mut rows, "TDP", &selected, |p| {
        p.tdp.map(|t| format!("{}W", t))
    });

    Comparison {
        category: category.to_string(),
        part_names,
        rows,
    }
}

fn push_row<F>(rows: &mut Vec<CompareRow>, label: &str, selected: &[&Part], attr: F)
where
    F: Fn(&Part) -> Option<String>,
{
    let values: Vec<Option<String>> = selected.iter().map(|p| attr(p)).collect();
    if values.iter().any(Option::is_some) {
        rows.push(CompareRow {
            attribute: label.to_string(),
            values: values
                .into_iter()
                .map(|v| v.unwrap_or_else(|| MISSING.to_string()))
                .collect(),
        });
    }
}
