//! Enum catalog files.
//!
//! A catalog is a versioned JSON document declaring named enums, each in any
//! of the shapes the builder accepts. It is loaded and validated up front so
//! a bad declaration is reported by name before any table is used.
use crate::builder::build_enum;
use crate::input::EnumInput;
use crate::table::EnumTable;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Named enum declarations, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumCatalog {
    pub schema_version: u32,
    #[serde(default)]
    pub enums: Map<String, Value>,
}

impl EnumCatalog {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }

    /// Build the enum declared under `name`.
    pub fn build(&self, name: &str) -> Result<EnumTable> {
        let declaration = self
            .enums
            .get(name)
            .ok_or_else(|| anyhow!("enum {name:?} is not declared in the catalog"))?;
        let input = EnumInput::from_json(declaration.clone())
            .with_context(|| format!("build enum {name:?}"))?;
        Ok(build_enum(input))
    }

    /// Build every declared enum, in document order.
    pub fn build_all(&self) -> Result<Vec<(String, EnumTable)>> {
        self.names()
            .map(|name| self.build(name).map(|table| (name.to_string(), table)))
            .collect()
    }
}

/// Catalog written for new projects: one enum per accepted shape.
pub fn default_catalog() -> EnumCatalog {
    let mut enums = Map::new();
    enums.insert(
        "statuses".to_string(),
        json!([
            {"key": "submitted", "value": 1, "label": "Submitted"},
            {"key": "accepted", "value": 2, "label": "Accepted"},
            {"key": "completed", "value": 31, "label": "All Done Yo", "finished": true}
        ]),
    );
    enums.insert(
        "days".to_string(),
        json!([
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday"
        ]),
    );
    enums.insert(
        "days_abbr".to_string(),
        json!({
            "su": "Sunday",
            "mo": "Monday",
            "tu": "Tuesday",
            "we": "Wednesday",
            "tr": "Thursday",
            "fi": "Friday",
            "sa": "Saturday"
        }),
    );
    EnumCatalog {
        schema_version: CATALOG_SCHEMA_VERSION,
        enums,
    }
}

/// Pretty JSON for the default catalog.
pub fn catalog_stub() -> String {
    let catalog = default_catalog();
    serde_json::to_string_pretty(&catalog).expect("serialize catalog stub")
}

/// Read, parse and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<EnumCatalog> {
    let bytes = fs::read(path).with_context(|| format!("read catalog {}", path.display()))?;
    let catalog: EnumCatalog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse catalog JSON {}", path.display()))?;
    validate_catalog(&catalog)?;
    tracing::info!(
        path = %path.display(),
        enum_count = catalog.enums.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Persist a catalog in a stable JSON format.
pub fn write_catalog(path: &Path, catalog: &EnumCatalog) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create catalog dir {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(catalog).context("serialize catalog")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Check the schema version and that every enum is declared as a sequence
/// or a mapping under a non-empty name.
pub fn validate_catalog(catalog: &EnumCatalog) -> Result<()> {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported catalog schema_version {}",
            catalog.schema_version
        ));
    }
    for (name, declaration) in &catalog.enums {
        if name.trim().is_empty() {
            return Err(anyhow!("enum names must be non-empty"));
        }
        if !matches!(declaration, Value::Array(_) | Value::Object(_)) {
            return Err(anyhow!(
                "enum {name:?} must be declared as a sequence or a mapping"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
