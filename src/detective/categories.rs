//! Extension-to-category reference table.
//!
//! A flat mapping from canonical extension to a category label, or to a short
//! ordered list of labels where the first one wins. The table is read-only
//! reference data: load it once (bundled or from a file) and share it across
//! investigations.

use super::classify::UNKNOWN;
use crate::error::{CasefileError, Result};
use crate::report::CategoryInfo;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Reference data compiled into the crate.
const BUNDLED_JSON: &str = include_str!("../../data/extensions.json");

static SHARED: OnceLock<CategoryTable> = OnceLock::new();

/// A table value: one label, or an ordered list where the first label wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    One(String),
    Many(Vec<String>),
}

impl CategoryValue {
    /// The effective label. An empty list carries none.
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryValue::One(label) => Some(label.as_str()),
            CategoryValue::Many(labels) => labels.first().map(String::as_str),
        }
    }
}

/// Read-only extension-to-category mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: HashMap<String, CategoryValue>,
}

impl CategoryTable {
    /// Parse a table from a JSON mapping of extension to label(s).
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CasefileError::CategoryTable(format!("invalid table JSON: {}", e)))
    }

    /// Load a table from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&json)?;
        debug!(
            path = %path.as_ref().display(),
            entries = table.len(),
            "loaded category table"
        );
        Ok(table)
    }

    /// The table compiled into the crate.
    pub fn bundled() -> Self {
        // Embedded constant, validated by the bundled-table test.
        Self::from_json_str(BUNDLED_JSON).expect("bundled extension table is valid JSON")
    }

    /// The process-wide shared table, loading the bundled data on first use.
    ///
    /// Initialization is race-free; concurrent investigations all observe the
    /// same instance.
    pub fn shared() -> &'static CategoryTable {
        SHARED.get_or_init(Self::bundled)
    }

    /// Install `table` as the process-wide shared table.
    ///
    /// Returns false when the shared table was already initialized; the
    /// existing table stays in place.
    pub fn install(table: CategoryTable) -> bool {
        SHARED.set(table).is_ok()
    }

    /// Number of extensions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw table value for a canonical extension.
    pub fn get(&self, extension: &str) -> Option<&CategoryValue> {
        self.entries.get(extension)
    }

    /// Category for a canonical extension. A missing key (or an entry with no
    /// usable label) yields `{type: "unknown", found: false}`, never an error.
    pub fn lookup(&self, extension: &str) -> CategoryInfo {
        match self.get(extension).and_then(CategoryValue::label) {
            Some(label) => CategoryInfo {
                kind: label.to_string(),
                found: true,
            },
            None => CategoryInfo {
                kind: UNKNOWN.to_string(),
                found: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_list_values() {
        let table = CategoryTable::from_json_str(
            r#"{"exe": "executable", "py": ["code", "script"], "odd": []}"#,
        )
        .unwrap();
        assert_eq!(table.len(), 3);

        let exe = table.lookup("exe");
        assert!(exe.found);
        assert_eq!(exe.kind, "executable");

        // First label wins for list values.
        let py = table.lookup("py");
        assert!(py.found);
        assert_eq!(py.kind, "code");

        // An empty list has no usable label.
        let odd = table.lookup("odd");
        assert!(!odd.found);
        assert_eq!(odd.kind, "unknown");
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let table = CategoryTable::from_json_str(r#"{"exe": "executable"}"#).unwrap();
        let info = table.lookup("xyzzy");
        assert!(!info.found);
        assert_eq!(info.kind, "unknown");
    }

    #[test]
    fn test_invalid_json_errors() {
        let err = CategoryTable::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CasefileError::CategoryTable(_)));
    }

    #[test]
    fn test_bundled_table() {
        let table = CategoryTable::bundled();
        assert!(!table.is_empty());
        assert_eq!(table.lookup("exe").kind, "executable");
        assert_eq!(table.lookup("zip").kind, "archive");
        // List-valued entry resolves to its first label.
        assert_eq!(table.lookup("py").kind, "code");
    }

    #[test]
    fn test_shared_is_single_instance() {
        let first = CategoryTable::shared();
        let second = CategoryTable::shared();
        assert!(std::ptr::eq(first, second));

        // Once initialized, installs are rejected and the instance stays.
        assert!(!CategoryTable::install(CategoryTable::default()));
        assert!(std::ptr::eq(first, CategoryTable::shared()));
    }
}
