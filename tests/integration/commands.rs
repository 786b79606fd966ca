//! Command routing through RunContext against a temp workspace

use rigkit::cli::{BuildCommands, CartCommands, CatalogCommands, Commands, RunContext};
use tempfile::TempDir;

fn context(temp: &TempDir) -> RunContext {
    RunContext::new(temp.path().to_path_buf(), None).unwrap()
}

#[test]
fn test_status_on_fresh_workspace() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Status {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(out.contains("14 part(s)"));
    assert!(out.contains("Build is empty."));
}

#[test]
fn test_catalog_list_filters_and_sorts() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::List {
                category: Some("CPU".to_string()),
                search: None,
                sort: "price".to_string(),
                format: "json".to_string(),
            },
        })
        .unwrap();

    let parts: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(parts.len(), 2);
    // Price ascending: the i5 before the 7700X
    assert_eq!(parts[0]["name"], "Intel Core i5-13600K");
}

#[test]
fn test_catalog_list_rejects_unknown_sort() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let result = ctx.execute(&Commands::Catalog {
        command: CatalogCommands::List {
            category: None,
            search: None,
            sort: "rating".to_string(),
            format: "text".to_string(),
        },
    });
    assert!(result.is_err());
}

#[test]
fn test_build_add_show_remove_flow() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Add { part_id: 1 },
        })
        .unwrap();
    assert_eq!(out, "Added AMD Ryzen 7 7700X to the CPU slot.");

    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Show {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(out.contains("Total: $329.00"));

    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Remove {
                slot: "CPU".to_string(),
            },
        })
        .unwrap();
    assert_eq!(out, "Removed AMD Ryzen 7 7700X from the CPU slot.");

    // Second removal is a polite no-op
    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Remove {
                slot: "CPU".to_string(),
            },
        })
        .unwrap();
    assert_eq!(out, "Slot CPU is empty.");
}

#[test]
fn test_build_add_unknown_id_is_notice_not_error() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Add { part_id: 9999 },
        })
        .unwrap();
    assert_eq!(out, "No part with id 9999 in the catalog.");
}

#[test]
fn test_build_check_reports_mismatch() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    // AM5 CPU on an LGA1700 board
    for id in [1, 4] {
        ctx.execute(&Commands::Build {
            command: BuildCommands::Add { part_id: id },
        })
        .unwrap();
    }

    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Check {
                format: "json".to_string(),
            },
        })
        .unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["ok"], false);
    assert_eq!(doc["issues"][0]["kind"], "socket_mismatch");
}

#[test]
fn test_build_state_survives_new_context() {
    let temp = TempDir::new().unwrap();
    {
        let ctx = context(&temp);
        ctx.execute(&Commands::Build {
            command: BuildCommands::Add { part_id: 9 },
        })
        .unwrap();
    }

    let ctx = context(&temp);
    let out = ctx
        .execute(&Commands::Build {
            command: BuildCommands::Show {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(out.contains("GeForce RTX 4070"));
}

#[test]
fn test_import_error_keeps_catalog() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, b"{{{{").unwrap();

    let result = ctx.execute(&Commands::Catalog {
        command: CatalogCommands::Import { file: bad },
    });
    assert!(result.is_err());

    let out = ctx
        .execute(&Commands::Status {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(out.contains("14 part(s)"));
}

#[test]
fn test_catalog_clear_and_seed_with_force() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::Clear { force: true },
        })
        .unwrap();
    assert_eq!(out, "Catalog cleared.");

    let out = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::Seed,
        })
        .unwrap();
    assert!(out.contains("14 parts"));
}

#[test]
fn test_compare_and_cart_flow() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx
        .execute(&Commands::Compare {
            category: "CPU".to_string(),
            ids: vec![1, 2],
            format: "text".to_string(),
        })
        .unwrap();
    assert!(out.contains("AM5"));
    assert!(out.contains("LGA1700"));

    // Empty cart
    let out = ctx
        .execute(&Commands::Cart {
            command: CartCommands::Checkout,
        })
        .unwrap();
    assert_eq!(out, "Cart is empty; nothing to check out.");

    ctx.execute(&Commands::Build {
        command: BuildCommands::Add { part_id: 14 },
    })
    .unwrap();

    let out = ctx
        .execute(&Commands::Cart {
            command: CartCommands::Show {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(out.contains("Cart total: $129.00"));

    let out = ctx
        .execute(&Commands::Cart {
            command: CartCommands::Checkout,
        })
        .unwrap();
    assert!(out.contains("Order ref: RK-"));
}

#[test]
fn test_init_writes_config_file() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);

    let out = ctx.execute(&Commands::Init { force: false }).unwrap();
    assert!(out.starts_with("Wrote default configuration to "));
    assert!(temp.path().join(".rigkit/config.toml").exists());

    // Second init without force refuses
    assert!(ctx.execute(&Commands::Init { force: false }).is_err());
}
