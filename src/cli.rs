//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; a single route table dispatches to the stores and views.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{BuildCommands, CartCommands, CatalogCommands, Cli, Commands};
pub use route::RunContext;
