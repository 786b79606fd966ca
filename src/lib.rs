//! Rigkit: PC parts catalog and build configurator
//!
//! A parts catalog with filter/search/sort views, a one-part-per-slot
//! build with a running price total, and a heuristic compatibility
//! checker, persisted through a local key-value store.

pub mod build;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod compare;
pub mod compat;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod part;
pub mod store;
