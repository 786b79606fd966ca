//! Fixed sample catalog
//!
//! Materialized on first use and whenever a persisted catalog record is
//! absent or corrupt. Ids are stable so builds exported against the seed
//! keep referring to the same parts.

use crate::part::{category, Part};

fn part(
    id: u32,
    name: &str,
    cat: &str,
    price: f64,
    socket: Option<&str>,
    ram_type: Option<&str>,
    capacity_gb: Option<u32>,
    interface: Option<&str>,
    wattage: Option<u32>,
    tdp: Option<u32>,
) -> Part {
    Part {
        id,
        name: name.to_string(),
        category: cat.to_string(),
        price,
        socket: socket.map(str::to_string),
        ram_type: ram_type.map(str::to_string),
        capacity_gb,
        interface: interface.map(str::to_string),
        wattage,
        tdp,
    }
}

/// The built-in sample part set.
pub fn sample_parts() -> Vec<Part> {
    vec![
        part(1, "AMD Ryzen 7 7700X", category::CPU, 329.0, Some("AM5"), None, None, None, None, Some(105)),
        part(2, "Intel Core i5-13600K", category::CPU, 299.0, Some("LGA1700"), None, None, None, None, Some(125)),
        part(3, "ASUS TUF Gaming B650-Plus", category::MOTHERBOARD, 189.0, Some("AM5"), Some("DDR5"), None, Some("NVMe"), None, None),
        part(4, "MSI PRO Z690-A", category::MOTHERBOARD, 219.0, Some("LGA1700"), Some("DDR4"), None, Some("NVMe"), None, None),
        part(5, "Corsair Vengeance 32GB", category::RAM, 109.0, None, Some("DDR5"), Some(32), None, None, None),
        part(6, "Kingston Fury Beast 16GB", category::RAM, 45.0, None, Some("DDR4"), Some(16), None, None, None),
        part(7, "Samsung 980 Pro 1TB", category::STORAGE, 99.0, None, None, Some(1000), Some("NVMe"), None, None),
        part(8, "WD Blue 2TB", category::STORAGE, 54.0, None, None, Some(2000), Some("SATA"), None, None),
        part(9, "GeForce RTX 4070", category::GPU, 599.0, None, None, None, None, None, Some(200)),
        part(10, "Radeon RX 7800 XT", category::GPU, 499.0, None, None, None, None, None, Some(263)),
        part(11, "Corsair RM750e", category::PSU, 99.0, None, None, None, None, Some(750), None),
        part(12, "EVGA 500 W1", category::PSU, 45.0, None, None, None, None, Some(500), None),
        part(13, "Noctua NH-U12S", category::COOLER, 69.0, None, None, None, None, None, None),
        part(14, "Fractal Design North", category::CASE, 129.0, None, None, None, None, None, None),
    ]
}
