//! dbt catalog.json parsing
//!
//! Parses the dbt-generated catalog.json to extract compiled relation
//! metadata: model names and their columns' names and types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// dbt catalog.json structure (subset of fields we care about)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Metadata about the catalog artifact
    #[serde(default)]
    pub metadata: CatalogMetadata,

    /// Model, seed, and snapshot relations keyed by unique id
    pub nodes: HashMap<String, CatalogNode>,

    /// Source relations, same shape as nodes
    #[serde(default)]
    pub sources: HashMap<String, CatalogNode>,

    /// Errors dbt hit while building the catalog
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl Catalog {
    /// Load catalog from file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::IoError(path.display().to_string(), e.to_string()))?;

        Self::from_str(&contents)
    }

    /// Parse catalog from JSON string
    pub fn from_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    /// Get all model nodes (filters out seeds, snapshots, etc.)
    pub fn models(&self) -> impl Iterator<Item = (&String, &CatalogNode)> {
        self.nodes
            .iter()
            .filter(|(unique_id, _)| unique_id.split('.').next() == Some("model"))
    }

    /// Get a specific node by unique id
    pub fn get_node(&self, unique_id: &str) -> Option<&CatalogNode> {
        self.nodes.get(unique_id)
    }
}

/// Catalog artifact metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    #[serde(default)]
    pub dbt_schema_version: String,
    #[serde(default)]
    pub dbt_version: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub invocation_id: Option<String>,
}

/// A relation in the catalog (model, seed, snapshot, or source)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogNode {
    /// Unique identifier (e.g., "model.jaffle_shop.orders")
    #[serde(default)]
    pub unique_id: Option<String>,

    /// Relation metadata (name, schema, relation type)
    #[serde(default)]
    pub metadata: NodeMetadata,

    /// Column key to column descriptor
    #[serde(default)]
    pub columns: HashMap<String, CatalogColumn>,
}

/// Relation metadata from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Relation type (e.g., "BASE TABLE", "VIEW")
    #[serde(rename = "type", default)]
    pub relation_type: Option<String>,

    /// Schema the relation lives in
    #[serde(default)]
    pub schema: Option<String>,

    /// Relation name
    #[serde(default)]
    pub name: String,

    /// Database name
    #[serde(default)]
    pub database: Option<String>,

    /// Relation comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// Column descriptor from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogColumn {
    /// Column name; callers fall back to the map key when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Raw declared or inferred data type (warehouse-specific, not normalized)
    #[serde(rename = "type", default)]
    pub data_type: Option<String>,

    /// 1-based ordinal position within the relation
    #[serde(default)]
    pub index: Option<u64>,

    /// Column comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// Catalog parsing errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {0}: {1}")]
    IoError(String, String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),
}
