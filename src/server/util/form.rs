//! Parsing of urlencoded forms with indexed keys.
//!
//! Bulk forms submit rows as `item[0][id]=19019&item[0][character_id]=4`. Axum's `Form` extractor
//! hands us the raw key/value pairs, [`IndexedForm`] groups them into scalar fields and ordered
//! rows. Values are trimmed and empty values are treated as absent.

use std::collections::{BTreeMap, HashMap};

/// A single indexed row such as `item[3][...]`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub index: usize,
    values: HashMap<String, String>,
}

impl FormRow {
    /// Trimmed value for `key`, `None` when absent or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Checkbox style flag, absent means false
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }
}

#[derive(Debug, Default)]
pub struct IndexedForm {
    fields: HashMap<String, String>,
    groups: HashMap<String, BTreeMap<usize, FormRow>>,
}

impl IndexedForm {
    /// Groups raw pairs, when a key repeats the last value wins. Keys with a malformed
    /// index are ignored.
    pub fn parse(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();

        for (key, value) in pairs {
            match split_indexed_key(&key) {
                Some((group, index, field)) => {
                    let row = form
                        .groups
                        .entry(group.to_string())
                        .or_default()
                        .entry(index)
                        .or_insert_with(|| FormRow {
                            index,
                            ..Default::default()
                        });
                    row.values.insert(field.to_string(), value);
                }
                None if !key.contains('[') => {
                    form.fields.insert(key, value);
                }
                None => {}
            }
        }

        form
    }

    /// Trimmed scalar value, `None` when absent or empty
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn flag(&self, key: &str) -> bool {
        self.field(key).is_some_and(is_truthy)
    }

    /// Rows of a group ordered by index
    pub fn rows(&self, group: &str) -> Vec<&FormRow> {
        self.groups
            .get(group)
            .map(|rows| rows.values().collect())
            .unwrap_or_default()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on" | "yes")
}

/// Splits `group[index][field]` into its parts
fn split_indexed_key(key: &str) -> Option<(&str, usize, &str)> {
    let (group, rest) = key.split_once('[')?;
    let (index, rest) = rest.split_once(']')?;
    let field = rest.strip_prefix('[')?.strip_suffix(']')?;

    if group.is_empty() || field.is_empty() || field.contains(['[', ']']) {
        return None;
    }

    Some((group, index.parse().ok()?, field))
}
