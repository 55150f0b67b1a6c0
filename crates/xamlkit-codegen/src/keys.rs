//! Resource key normalization and per-dictionary uniqueness.

use indexmap::IndexMap;

use crate::error::{CodegenError, Result};

/// Derive a XAML resource key from a design name.
///
/// Whitespace is removed, then the duplicate suffix is stripped from the
/// end for as long as something else remains. The result never ends with
/// the suffix unless the name is nothing but suffixes, which makes the
/// function idempotent.
pub fn normalize_key(raw: &str, duplicate_suffix: Option<&str>) -> String {
    let mut key = strip_whitespace(raw);
    let suffix = strip_whitespace(duplicate_suffix.unwrap_or_default());
    if suffix.is_empty() {
        return key;
    }

    while key.len() > suffix.len() && key.ends_with(&suffix) {
        key.truncate(key.len() - suffix.len());
    }
    key
}

/// Whether `name` is marked as a duplicate by `suffix`, under the same
/// whitespace-insensitive rule [`normalize_key`] strips by.
pub fn has_duplicate_suffix(name: &str, suffix: &str) -> bool {
    let name = strip_whitespace(name);
    let suffix = strip_whitespace(suffix);
    !suffix.is_empty() && name.len() > suffix.len() && name.ends_with(&suffix)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tracks keys emitted into one dictionary and rejects collisions.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    /// key -> source name that produced it
    keys: IndexMap<String, String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as produced by `source_name`.
    pub fn claim(&mut self, key: &str, source_name: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CodegenError::EmptyResourceKey {
                name: source_name.to_string(),
            });
        }
        if let Some(first) = self.keys.get(key) {
            return Err(CodegenError::DuplicateResourceKey {
                key: key.to_string(),
                first: first.clone(),
                second: source_name.to_string(),
            });
        }
        self.keys.insert(key.to_string(), source_name.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
