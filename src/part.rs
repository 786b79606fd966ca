//! Part model
//!
//! A `Part` is one purchasable hardware component with category-specific
//! optional attributes. Serialized field names keep the camelCase wire
//! shape (`ramType`, `capacityGB`) so persisted records and import files
//! from earlier versions of the data set parse unchanged.

use serde::{Deserialize, Serialize};

/// Well-known category names. The build slot key is the category string,
/// so these double as slot names.
pub mod category {
    pub const CPU: &str = "CPU";
    pub const MOTHERBOARD: &str = "Motherboard";
    pub const RAM: &str = "RAM";
    pub const STORAGE: &str = "Storage";
    pub const GPU: &str = "GPU";
    pub const PSU: &str = "PSU";
    pub const COOLER: &str = "Cooler";
    pub const CASE: &str = "Case";
}

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: u32,
    pub name: String,
    pub category: String,

    /// Missing or null prices deserialize to 0.
    #[serde(default)]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    #[serde(
        rename = "ramType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ram_type: Option<String>,

    #[serde(
        rename = "capacityGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity_gb: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp: Option<u32>,
}

impl Part {
    /// Build slot this part occupies: one part per category.
    pub fn slot(&self) -> &str {
        &self.category
    }

    /// Short attribute summary for table rendering, e.g.
    /// "AM5 / 105W TDP" or "DDR5 / 32GB".
    pub fn details(&self) -> String {
        let mut items: Vec<String> = Vec::new();
        if let Some(ref socket) = self.socket {
            items.push(socket.clone());
        }
        if let Some(ref ram_type) = self.ram_type {
            items.push(ram_type.clone());
        }
        if let Some(capacity) = self.capacity_gb {
            items.push(format!("{}GB", capacity));
        }
        if let Some(ref interface) = self.interface {
            items.push(interface.clone());
        }
        if let Some(wattage) = self.wattage {
            items.push(format!("{}W", wattage));
        }
        if let Some(tdp) = self.tdp {
            items.push(format!("{}W TDP", tdp));
        }
        items.join(" / ")
    }
}
