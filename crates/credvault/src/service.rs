//! Secret Service (D-Bus) backend for Linux desktops.
//!
//! Talks to the session keyring (GNOME Keyring, KWallet) through the
//! freedesktop Secret Service API. Records land in the default collection,
//! identified by the attribute sets the [`Schema`] produces; replace-on-write
//! at the service gives the at-most-one-record-per-identity invariant.

use std::collections::HashMap;

use secret_service::blocking::SecretService;
use secret_service::EncryptionType;
use tracing::debug;

use crate::backend::{Lookup, SecretBackend};
use crate::error::{Result, StoreError};
use crate::schema::Schema;

/// Content type reported for stored payloads.
const CONTENT_TYPE: &str = "text/plain";

/// Backend speaking to the session keyring over D-Bus.
///
/// Connects per call; the service's handles borrow from the connection, and
/// every operation is an independent round-trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceBackend;

impl ServiceBackend {
    pub fn new() -> Self {
        Self
    }
}

fn connect_err(err: secret_service::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn backend_err(err: secret_service::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn borrowed(attributes: &HashMap<String, String>) -> HashMap<&str, &str> {
    attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

impl SecretBackend for ServiceBackend {
    fn lookup(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<Lookup> {
        let attributes = schema.scoped_attributes(attributes);
        let service = SecretService::connect(EncryptionType::Dh).map_err(connect_err)?;
        let search = service
            .search_items(borrowed(&attributes))
            .map_err(backend_err)?;

        if let Some(item) = search.unlocked.first() {
            let secret = item.get_secret().map_err(backend_err)?;
            let payload = String::from_utf8(secret).map_err(|_| StoreError::InvalidPayload)?;
            return Ok(Lookup::Found(payload));
        }

        if let Some(item) = search.locked.first() {
            item.unlock().map_err(backend_err)?;
            let secret = item.get_secret().map_err(backend_err)?;
            let payload = String::from_utf8(secret).map_err(|_| StoreError::InvalidPayload)?;
            return Ok(Lookup::Found(payload));
        }

        Ok(Lookup::NotFound)
    }

    fn store(
        &self,
        schema: &Schema,
        label: &str,
        payload: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<()> {
        let attributes = schema.scoped_attributes(attributes);
        let service = SecretService::connect(EncryptionType::Dh).map_err(connect_err)?;
        let collection = service.get_default_collection().map_err(backend_err)?;
        if collection.is_locked().map_err(backend_err)? {
            collection.unlock().map_err(backend_err)?;
        }

        debug!(namespace = schema.namespace(), "storing credential record");
        collection
            .create_item(
                label,
                borrowed(&attributes),
                payload.as_bytes(),
                true, // replace the record with the same attributes
                CONTENT_TYPE,
            )
            .map_err(backend_err)?;
        Ok(())
    }

    fn clear(&self, schema: &Schema, attributes: &HashMap<String, String>) -> Result<()> {
        let attributes = schema.scoped_attributes(attributes);
        let service = SecretService::connect(EncryptionType::Dh).map_err(connect_err)?;
        let search = service
            .search_items(borrowed(&attributes))
            .map_err(backend_err)?;

        debug!(
            namespace = schema.namespace(),
            unlocked = search.unlocked.len(),
            locked = search.locked.len(),
            "clearing credential records"
        );
        for item in search.unlocked {
            item.delete().map_err(backend_err)?;
        }
        for item in search.locked {
            item.unlock().map_err(backend_err)?;
            item.delete().map_err(backend_err)?;
        }
        Ok(())
    }
}
