//! Picks the winning type for each column once scanning has finished.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{catalog::Catalog, engine::ColumnState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub name: String,
    pub sql_type: String,
    pub nullable: bool,
}

/// Enum type synthesized for a column whose values form a small literal set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub table_name: String,
    pub columns: Vec<ResolvedColumn>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumType>,
}

pub fn resolve(catalog: &Catalog, columns: &[ColumnState], table_name: &str) -> ResolvedSchema {
    let mut enums = Vec::new();
    let resolved = columns
        .iter()
        .map(|column| {
            let sql_type = match catalog.resolve(column.possible) {
                Some((_, descriptor)) if descriptor.is_enum() => {
                    let enum_name = format!("{}_enum", column.name);
                    enums.push(EnumType {
                        name: enum_name.clone(),
                        members: column.enum_values.values().to_vec(),
                    });
                    enum_name
                }
                Some((_, descriptor)) => descriptor.name.clone(),
                // The catch-all is never removed, so this only happens for
                // columns that were never initialised against the catalog.
                None => catalog
                    .iter()
                    .last()
                    .map(|t| t.name.clone())
                    .unwrap_or_default(),
            };
            debug!(
                "Column '{}' resolved to {}{}",
                column.name,
                sql_type,
                if column.nullable { " (nullable)" } else { "" }
            );
            ResolvedColumn {
                name: column.name.clone(),
                sql_type,
                nullable: column.nullable,
            }
        })
        .collect();

    ResolvedSchema {
        table_name: table_name.to_string(),
        columns: resolved,
        enums,
    }
}

impl ResolvedSchema {
    pub fn column(&self, name: &str) -> Option<&ResolvedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Writes the schema as JSON for `.json` paths and YAML otherwise.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating schema file {path:?}"))?;
        if is_json(path) {
            serde_json::to_writer_pretty(file, self).context("Writing schema JSON")
        } else {
            serde_yaml::to_writer(file, self).context("Writing schema YAML")
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening schema file {path:?}"))?;
        let reader = BufReader::new(file);
        if is_json(path) {
            serde_json::from_reader(reader).context("Parsing schema JSON")
        } else {
            serde_yaml::from_reader(reader).context("Parsing schema YAML")
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
