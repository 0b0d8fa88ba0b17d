//! In-process backend with secret-service attribute semantics.
//!
//! Serves two roles: the default backend on platforms without a secret
//! service, and the test double for the store's unit and integration tests.
//! Matching follows the service's rules -- a filter matches a record when
//! every filtered attribute is present on the record with an equal value,
//! and a write replaces the record carrying the exact same attribute set.

use std::collections::HashMap;

use parking_lot::Mutex;
use zeroize::Zeroizing;

use crate::backend::{Lookup, SecretBackend};
use crate::error::Result;
use crate::schema::Schema;

struct Record {
    attributes: HashMap<String, String>,
    payload: Zeroizing<String>,
}

/// Volatile [`SecretBackend`] holding records in a mutex-guarded list.
///
/// Payloads are zeroed on drop, so deleted or replaced secrets do not
/// linger in memory. Nothing is persisted across process restarts.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<Vec<Record>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, across all namespaces.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

fn matches(record: &Record, filter: &HashMap<String, String>) -> bool {
    filter
        .iter()
        .all(|(key, value)| record.attributes.get(key) == Some(value))
}

impl SecretBackend for MemoryBackend {
    fn lookup(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<Lookup> {
        let filter = schema.scoped_attributes(attributes);
        let records = self.records.lock();
        Ok(records
            .iter()
            .find(|record| matches(record, &filter))
            .map(|record| Lookup::Found(record.payload.to_string()))
            .unwrap_or(Lookup::NotFound))
    }

    fn store(
        &self,
        schema: &Schema,
        _label: &str,
        payload: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<()> {
        let attributes = schema.scoped_attributes(attributes);
        let mut records = self.records.lock();
        records.retain(|record| record.attributes != attributes);
        records.push(Record {
            attributes,
            payload: Zeroizing::new(payload.to_owned()),
        });
        Ok(())
    }

    fn clear(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<()> {
        let filter = schema.scoped_attributes(attributes);
        self.records
            .lock()
            .retain(|record| !matches(record, &filter));
        Ok(())
    }
}
