//! In-memory contact directory keyed by name.

use crate::domain::ContactName;
use crate::error::{LookupError, LookupResult};
use crate::models::ContactRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// All contacts of the session, keyed by name.
///
/// Iteration is alphabetical by name.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: BTreeMap<ContactName, ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// Phone lists are not merged: the new record wins.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().clone();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(name = %name, "Replaced existing record");
        } else {
            debug!(name = %name, "Added record");
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> LookupResult<&ContactRecord> {
        self.records
            .get(name)
            .ok_or_else(|| LookupError::ContactNotFound(name.to_string()))
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> LookupResult<&mut ContactRecord> {
        self.records
            .get_mut(name)
            .ok_or_else(|| LookupError::ContactNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove a record by name, returning it.
    pub fn delete(&mut self, name: &str) -> LookupResult<ContactRecord> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| LookupError::ContactNotFound(name.to_string()))?;
        debug!(name = %name, "Deleted record");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Human-readable listing of every contact.
    pub fn show_all(&self) -> String {
        if self.records.is_empty() {
            return "There are no contacts.".to_string();
        }

        let mut result = String::from(">>> All Contacts:");
        for (name, record) in &self.records {
            result.push('\n');
            result.push_str(&format!("{}: {}", name, record));
        }
        result
    }
}
