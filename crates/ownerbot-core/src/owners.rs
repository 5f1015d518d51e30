use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OwnerbotError;

/// Static mapping from module name to its owners.
///
/// Loaded once per invocation from `owners.json` and immutable for the run.
/// The owner list for each module keeps the order stored in the file; the
/// module keys themselves carry no order.
///
/// # Examples
///
/// ```
/// use ownerbot_core::OwnersTable;
///
/// let table = OwnersTable::from_json(r#"{"foo": ["alice"], "bar": ["bob", "carol"]}"#).unwrap();
/// assert_eq!(table.owners_of("bar"), Some(&["bob".to_string(), "carol".to_string()][..]));
/// assert_eq!(table.owners_of("baz"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnersTable {
    entries: HashMap<String, Vec<String>>,
}

impl OwnersTable {
    /// Load the owners mapping from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::FileNotFound`] if the file does not exist,
    /// [`OwnerbotError::Io`] if it cannot be read, or
    /// [`OwnerbotError::Serialization`] if the content is not a JSON object
    /// of string arrays.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ownerbot_core::OwnersTable;
    /// use std::path::Path;
    ///
    /// let table = OwnersTable::from_file(Path::new(".github/owners.json")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, OwnerbotError> {
        if !path.exists() {
            return Err(OwnerbotError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse the owners mapping from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Serialization`] if parsing fails.
    pub fn from_json(content: &str) -> Result<Self, OwnerbotError> {
        let table: Self = serde_json::from_str(content)?;
        Ok(table)
    }

    /// Owners of `module` in stored order, or `None` if the module has no
    /// entry.
    pub fn owners_of(&self, module: &str) -> Option<&[String]> {
        self.entries.get(module).map(Vec::as_slice)
    }

    /// Number of modules in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
