//! CLI route: single route table and run context. Dispatches to the
//! catalog/build stores and the pure views, then hands results to
//! presentation.

use crate::build::BuildState;
use crate::cart;
use crate::catalog::view::{select, CatalogQuery, SortKey};
use crate::catalog::CatalogStore;
use crate::cli::parse::{BuildCommands, CartCommands, CatalogCommands, Commands};
use crate::cli::presentation::{
    format_build_json, format_build_text, format_cart_json, format_cart_text,
    format_catalog_list_json, format_catalog_list_text, format_comparison_json,
    format_comparison_text, format_issues_json, format_issues_text, format_receipt_text,
    format_status_json, format_status_text, StatusReport,
};
use crate::compare::compare_parts;
use crate::compat::check_issues;
use crate::config::{ConfigLoader, RigConfig};
use crate::error::ApiError;
use crate::export;
use crate::store::{SledStateStore, StateStore};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Runtime context for CLI execution: workspace, config, and the two
/// state facades. Built once per invocation from the workspace path and
/// optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: RigConfig,
    catalog: RwLock<CatalogStore>,
    build: RwLock<BuildState>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let data_path = config.system.storage.resolve_data_path(&workspace_root);
        if let Some(parent) = data_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::StorageError(crate::error::StorageError::IoError(e)))?;
        }

        let store: Arc<dyn StateStore> = Arc::new(SledStateStore::open(&data_path)?);
        let catalog = CatalogStore::open_with_seed(store.clone(), config.catalog.seed_on_empty)?;
        let build = BuildState::open(store)?;

        Ok(Self {
            workspace_root,
            config,
            catalog: RwLock::new(catalog),
            build: RwLock::new(build),
        })
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Execute a parsed command and return its output string.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Init { force } => self.handle_init(*force),
            Commands::Status { format } => self.handle_status(format),
            Commands::Catalog { command } => self.handle_catalog(command),
            Commands::Build { command } => self.handle_build(command),
            Commands::Compare {
                category,
                ids,
                format,
            } => self.handle_compare(category, ids, format),
            Commands::Cart { command } => self.handle_cart(command),
        }
    }

    fn handle_init(&self, force: bool) -> Result<String, ApiError> {
        let path = ConfigLoader::write_default(&self.workspace_root, force)?;
        Ok(format!("Wrote default configuration to {}", path.display()))
    }

    fn handle_status(&self, format: &str) -> Result<String, ApiError> {
        let catalog = self.catalog.read();
        let build = self.build.read();

        let report = StatusReport {
            catalog_parts: catalog.len(),
            categories: catalog.categories(),
            build_slots: build.slots().clone(),
            total: build.total(),
            issues: check_issues(build.slots()),
        };

        if format == "json" {
            format_status_json(&report)
        } else {
            Ok(format_status_text(&report))
        }
    }

    fn handle_catalog(&self, command: &CatalogCommands) -> Result<String, ApiError> {
        match command {
            CatalogCommands::List {
                category,
                search,
                sort,
                format,
            } => {
                let sort: SortKey = sort.parse().map_err(ApiError::InvalidArgument)?;
                let query = CatalogQuery {
                    search: search.clone(),
                    sort,
                    ..Default::default()
                }
                .with_category(category.clone());

                let catalog = self.catalog.read();
                let list = select(catalog.parts(), &query);
                if format == "json" {
                    format_catalog_list_json(&list)
                } else {
                    Ok(format_catalog_list_text(&list))
                }
            }
            CatalogCommands::Import { file } => {
                let parts = export::read_catalog_file(file)?;
                let count = parts.len();
                self.catalog.write().replace(parts)?;
                info!("Imported {} parts from {}", count, file.display());
                Ok(format!("Imported {} part(s) from {}", count, file.display()))
            }
            CatalogCommands::Export { file } => {
                let catalog = self.catalog.read();
                export::write_catalog_file(file, catalog.parts())?;
                Ok(format!(
                    "Exported {} part(s) to {}",
                    catalog.len(),
                    file.display()
                ))
            }
            CatalogCommands::Seed => {
                let mut catalog = self.catalog.write();
                catalog.seed()?;
                Ok(format!(
                    "Catalog reset to the sample set ({} parts)",
                    catalog.len()
                ))
            }
            CatalogCommands::Clear { force } => {
                if !confirm(*force, "Empty the catalog?")? {
                    return Ok("Clear cancelled".to_string());
                }
                self.catalog.write().clear()?;
                info!("Catalog cleared");
                Ok("Catalog cleared.".to_string())
            }
        }
    }

    fn handle_build(&self, command: &BuildCommands) -> Result<String, ApiError> {
        match command {
            BuildCommands::Add { part_id } => {
                // A miss is a no-op notice, mirroring the lookup-miss policy.
                let part = match self.catalog.read().get(*part_id) {
                    Some(part) => part.clone(),
                    None => {
                        return Ok(format!("No part with id {} in the catalog.", part_id));
                    }
                };

                let name = part.name.clone();
                let slot = self.build.write().add_part(part)?;
                Ok(format!("Added {} to the {} slot.", name, slot))
            }
            BuildCommands::Remove { slot } => match self.build.write().remove_part(slot)? {
                Some(part) => Ok(format!("Removed {} from the {} slot.", part.name, slot)),
                None => Ok(format!("Slot {} is empty.", slot)),
            },
            BuildCommands::Show { format } => {
                let build = self.build.read();
                let issues = check_issues(build.slots());
                if format == "json" {
                    format_build_json(build.slots(), build.total(), &issues)
                } else {
                    Ok(format_build_text(build.slots(), build.total(), &issues))
                }
            }
            BuildCommands::Check { format } => {
                let build = self.build.read();
                let issues = check_issues(build.slots());
                if format == "json" {
                    format_issues_json(&issues)
                } else {
                    Ok(format_issues_text(&issues))
                }
            }
            BuildCommands::Clear { force } => {
                if !confirm(*force, "Empty the build?")? {
                    return Ok("Clear cancelled".to_string());
                }
                self.build.write().clear()?;
                Ok("Build cleared.".to_string())
            }
            BuildCommands::Export { file } => {
                let build = self.build.read();
                export::write_build_file(file, build.slots())?;
                Ok(format!(
                    "Exported build ({} slot(s)) to {}",
                    build.len(),
                    file.display()
                ))
            }
        }
    }

    fn handle_compare(
        &self,
        category: &str,
        ids: &[u32],
        format: &str,
    ) -> Result<String, ApiError> {
        let catalog = self.catalog.read();
        let comparison = compare_parts(catalog.parts(), category, ids);
        if format == "json" {
            format_comparison_json(&comparison)
        } else {
            Ok(format_comparison_text(&comparison))
        }
    }

    fn handle_cart(&self, command: &CartCommands) -> Result<String, ApiError> {
        match command {
            CartCommands::Show { format } => {
                let build = self.build.read();
                let view = cart::cart_view(&build);
                if format == "json" {
                    format_cart_json(&view)
                } else {
                    Ok(format_cart_text(&view))
                }
            }
            CartCommands::Checkout => {
                let build = self.build.read();
                match cart::checkout(&build) {
                    Some(receipt) => Ok(format_receipt_text(&receipt)),
                    None => Ok("Cart is empty; nothing to check out.".to_string()),
                }
            }
        }
    }
}

fn confirm(force: bool, prompt: &str) -> Result<bool, ApiError> {
    if force {
        return Ok(true);
    }
    use dialoguer::Confirm;
    Confirm::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))
}
