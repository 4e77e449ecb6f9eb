//! Per-prefix credential lookup.
//!
//! A `CredentialTable` maps URL prefixes to opaque credential strings (cookie
//! values). For a given URL the most specific prefix, i.e. the longest one the
//! URL literally starts with, decides which credential is sent.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::ConfigError;

/// Mapping from URL prefix to credential value.
///
/// Deserializes from a flat JSON object:
///
/// ```json
/// { "https://intranet.example/": "session=abc" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable(HashMap<String, String>);

impl CredentialTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the credential for `prefix`.
    pub fn insert(&mut self, prefix: impl Into<String>, credential: impl Into<String>) {
        self.0.insert(prefix.into(), credential.into());
    }

    /// Number of configured prefixes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no prefixes are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Loads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a JSON object of strings.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: CredentialTable =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!(
            "Loaded {} credential prefix(es) from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Returns the credential for `url`, see [`resolve_credential`].
    pub fn credential_for(&self, url: &str) -> Option<&str> {
        resolve_credential(url, self)
    }
}

impl<K, V> FromIterator<(K, V)> for CredentialTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Picks the credential whose prefix is the longest literal prefix of `url`.
///
/// Returns `None` when no prefix matches. Two distinct prefixes of the same
/// length can never both match one URL, so the longest match is unique.
pub fn resolve_credential<'a>(url: &str, table: &'a CredentialTable) -> Option<&'a str> {
    table
        .0
        .iter()
        .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, credential)| credential.as_str())
}
