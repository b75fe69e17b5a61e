//! Model resolution
//!
//! Maps the file paths handed to the hook onto catalog entries: paths are
//! filtered to the wanted extensions and reduced to filename stems, then
//! catalog model nodes whose final id segment appears in the stem set are
//! selected for checking.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsStr;
use std::path::PathBuf;

use colguard_core::{ColumnMeta, ModelColumns};

use crate::catalog::{Catalog, CatalogColumn, CatalogNode};

/// Filter paths by extension and key them by filename stem.
///
/// Extensions may be given with or without the leading dot. Paths without a
/// usable UTF-8 stem are skipped.
pub fn filter_filenames(paths: &[PathBuf], extensions: &[&str]) -> BTreeMap<String, PathBuf> {
    let mut filenames = BTreeMap::new();

    for path in paths {
        let matches_extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map_or(false, |ext| {
                extensions
                    .iter()
                    .any(|wanted| wanted.strip_prefix('.').unwrap_or(wanted) == ext)
            });
        if !matches_extension {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
            filenames.insert(stem.to_string(), path.clone());
        }
    }

    filenames
}

/// A catalog model selected for this run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedModel<'a> {
    /// The node's unique id (e.g., "model.jaffle_shop.orders")
    pub unique_id: String,

    /// Human-readable model name for messages
    pub name: String,

    /// The catalog node backing this model
    pub node: &'a CatalogNode,
}

impl ResolvedModel<'_> {
    /// Flatten this model's columns into the checker's shape.
    ///
    /// Columns come out in catalog order: sorted by the `index` ordinal,
    /// with the map key as tie-break and as the name for descriptors that
    /// lack a `name` field (the key is the column name in dbt catalogs).
    pub fn to_model_columns(&self) -> ModelColumns {
        let mut entries: Vec<(&String, &CatalogColumn)> = self.node.columns.iter().collect();
        entries.sort_by(|(key_a, col_a), (key_b, col_b)| {
            let index_a = col_a.index.unwrap_or(u64::MAX);
            let index_b = col_b.index.unwrap_or(u64::MAX);
            index_a.cmp(&index_b).then_with(|| key_a.cmp(key_b))
        });

        ModelColumns {
            model_name: self.name.clone(),
            columns: entries
                .into_iter()
                .map(|(key, column)| ColumnMeta {
                    name: column.name.clone().unwrap_or_else(|| key.clone()),
                    data_type: column.data_type.clone(),
                })
                .collect(),
        }
    }
}

/// Select the catalog models whose source file is in the requested set.
///
/// A node qualifies when its unique id carries the `model` resource prefix
/// and its final dot-segment (the model's file stem) is in `filenames`.
/// Results are sorted by unique id so output order is reproducible for a
/// given catalog.
pub fn resolve_models<'a>(
    catalog: &'a Catalog,
    filenames: &HashSet<String>,
) -> Vec<ResolvedModel<'a>> {
    let mut models: Vec<ResolvedModel<'a>> = catalog
        .models()
        .filter_map(|(unique_id, node)| {
            let stem = unique_id.rsplit('.').next().unwrap_or(unique_id);
            if !filenames.contains(stem) {
                return None;
            }
            Some(ResolvedModel {
                unique_id: unique_id.clone(),
                name: display_name(unique_id, node),
                node,
            })
        })
        .collect();

    models.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
    models
}

/// Model name for messages: the relation name, else the id's final segment.
fn display_name(unique_id: &str, node: &CatalogNode) -> String {
    if node.metadata.name.is_empty() {
        unique_id
            .rsplit('.')
            .next()
            .unwrap_or(unique_id)
            .to_string()
    } else {
        node.metadata.name.clone()
    }
}
