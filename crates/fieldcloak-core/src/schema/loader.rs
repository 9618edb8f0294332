//! Schema definition loading from JSON documents
//!
//! Type definitions are plain serde types, so a host can keep its
//! metadata side-table in JSON files and register them in bulk at
//! startup. A document holds either a single definition object or an
//! array of them.

use super::SchemaRegistry;
use crate::error::{Error, Result};
use crate::types::TypeDef;
use std::path::Path;

/// Parse type definitions from a JSON string
///
/// Accepts a single definition object or an array of definitions.
pub fn parse_type_defs(json: &str) -> Result<Vec<TypeDef>> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| Error::Json {
        message: "Failed to parse schema definition document".to_string(),
        source: e,
    })?;

    let defs = if value.is_array() {
        serde_json::from_value::<Vec<TypeDef>>(value)
    } else {
        serde_json::from_value::<TypeDef>(value).map(|def| vec![def])
    }
    .map_err(|e| Error::Json {
        message: "Schema definition document has an unexpected shape".to_string(),
        source: e,
    })?;

    Ok(defs)
}

/// Load type definitions from a JSON file
pub fn load_type_defs(path: &Path) -> Result<Vec<TypeDef>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        message: format!("Failed to read schema definitions from {:?}", path),
        source: e,
    })?;
    parse_type_defs(&content)
}

impl SchemaRegistry {
    /// Parse and register every definition in a JSON string
    pub fn register_from_json(&self, json: &str) -> Result<()> {
        for def in parse_type_defs(json)? {
            self.register_type(def)?;
        }
        Ok(())
    }

    /// Load and register every definition in a JSON file
    pub fn register_from_file(&self, path: &Path) -> Result<()> {
        for def in load_type_defs(path)? {
            self.register_type(def)?;
        }
        Ok(())
    }
}
