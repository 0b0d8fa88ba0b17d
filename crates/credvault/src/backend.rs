//! The seam between the store facade and the OS secret service.

use std::collections::HashMap;

use crate::error::Result;
use crate::schema::Schema;

/// Outcome of a lookup that reached the backend.
///
/// Absence is an ordinary outcome here, not an error; transport and service
/// failures travel through the `Result` instead. The facade collapses both
/// to an empty string, but log lines and future callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A record matched the filter; this is its payload.
    Found(String),
    /// No record matched the filter.
    NotFound,
}

/// Synchronous secret-service primitives used by the store.
///
/// `clear` serves both single-record and namespace-wide deletion; the two
/// cases differ only in which attributes the caller filters on. Backends
/// must qualify every operation with the schema's namespace so stores over
/// different namespaces never touch each other's records.
pub trait SecretBackend: Send + Sync {
    /// Look up the single record matching `attributes` under `schema`.
    fn lookup(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<Lookup>;

    /// Write `payload` under `schema`, replacing any record with the same
    /// identifying attributes.
    fn store(
        &self,
        schema: &Schema,
        label: &str,
        payload: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<()>;

    /// Remove every record matching `attributes` under `schema`.
    fn clear(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<()>;
}
