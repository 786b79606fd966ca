//! Catalog view
//!
//! Pure filter/search/sort projection of the catalog into a display list.
//! Nothing here is persisted; an empty result is a valid, displayable
//! state rather than an error.

use crate::part::Part;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort key for the display list. `Unsorted` keeps insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Unsorted,
    /// Price ascending
    Price,
    /// Name, lexicographic
    Name,
    /// Category, lexicographic
    Category,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsorted" | "none" => Ok(SortKey::Unsorted),
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            other => Err(format!(
                "unknown sort key '{}' (expected unsorted, price, name, or category)",
                other
            )),
        }
    }
}

/// Catalog query: category filter (`None` = "All"), case-insensitive
/// substring search on name, and sort key.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Treats the literal "All" the same as no category filter, matching
    /// the wildcard entry the category picker offers.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| c != "All");
        self
    }
}

/// Project the catalog through the query. Sorts are stable, so equal keys
/// keep their insertion order.
pub fn select(parts: &[Part], query: &CatalogQuery) -> Vec<Part> {
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut list: Vec<Part> = parts
        .iter()
        .filter(|p| match query.category.as_deref() {
            Some(cat) => p.category == cat,
            None => true,
        })
        .filter(|p| match needle.as_deref() {
            Some(q) => p.name.to_lowercase().contains(q),
            None => true,
        })
        .cloned()
        .collect();

    match query.sort {
        SortKey::Unsorted => {}
        SortKey::Price => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Name => list.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Category => list.sort_by(|a, b| a.category.cmp(&b.category)),
    }

    list
}
