//! Namespace-derived record schema.
//!
//! Every record written through a store carries two identifying attributes:
//! the app name, which distinguishes records within a namespace, and a
//! constant tag shared by all of them, which makes the whole namespace
//! matchable (and removable) in one attribute-filtered operation.

use std::collections::HashMap;

/// Attribute key holding the per-record application name.
pub const APP_NAME_KEY: &str = "app_name";

/// Attribute key for the constant tag present on every record.
pub const COMMON_KEY_ID: &str = "common_key_id";

/// Fixed value stored under [`COMMON_KEY_ID`] for all records in a namespace.
pub const COMMON_KEY_VALUE: &str = "common_key_value";

/// Attribute key the secret service uses to scope records to a schema.
const SCHEMA_KEY: &str = "xdg:schema";

/// Record schema bound to one namespace.
///
/// The schema name (the namespace itself) is stamped onto every record and
/// filtered on in every lookup, so two namespaces never observe each other's
/// records even when they share the same keyring collection. Distinct
/// applications must use distinct namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    namespace: String,
}

impl Schema {
    pub(crate) fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The namespace this schema is bound to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Filter identifying the single record for `app_name`.
    ///
    /// Used for loads and single-record deletes. Matches on the app name
    /// alone; the common tag is not needed to pin down one record.
    pub fn lookup_attributes(&self, app_name: &str) -> HashMap<String, String> {
        HashMap::from([(APP_NAME_KEY.to_owned(), app_name.to_owned())])
    }

    /// Full attribute set written on save: app name plus the common tag.
    pub fn record_attributes(&self, app_name: &str) -> HashMap<String, String> {
        HashMap::from([
            (APP_NAME_KEY.to_owned(), app_name.to_owned()),
            (COMMON_KEY_ID.to_owned(), COMMON_KEY_VALUE.to_owned()),
        ])
    }

    /// Filter matching every record ever written through this namespace.
    pub fn common_attributes(&self) -> HashMap<String, String> {
        HashMap::from([(COMMON_KEY_ID.to_owned(), COMMON_KEY_VALUE.to_owned())])
    }

    /// Copy of `attributes` with the schema scoping attribute added.
    ///
    /// Backends apply this to everything they send to the service so that
    /// records and filters are always namespace-qualified.
    pub(crate) fn scoped_attributes(
        &self,
        attributes: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        let mut scoped = attributes.clone();
        scoped.insert(SCHEMA_KEY.to_owned(), self.namespace.clone());
        scoped
    }
}
