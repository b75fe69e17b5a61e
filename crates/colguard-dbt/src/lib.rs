//! dbt artifact parsing and model resolution
//!
//! This crate handles:
//! - Parsing catalog.json (dbt-generated compile artifacts)
//! - Filtering hook file arguments down to SQL models
//! - Resolving the selected file set against catalog nodes

pub mod catalog;
pub mod resolver;

pub use catalog::{
    Catalog, CatalogColumn, CatalogError, CatalogMetadata, CatalogNode, NodeMetadata,
};
pub use resolver::{filter_filenames, resolve_models, ResolvedModel};
