//! The credential store facade.
//!
//! [`CredentialStore`] persists one opaque payload per application name
//! inside a caller-chosen namespace, backed by the OS secret service. The
//! contract is deliberately best-effort: no operation returns an error, a
//! missing or unreadable credential loads as the empty string, and a store
//! opened with an empty namespace is permanently inert. Callers treat an
//! empty load as "re-authenticate".

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::{Lookup, SecretBackend};
use crate::schema::Schema;

/// Label attached to every record written through the store.
const ITEM_LABEL: &str = "CredVault user data";

/// Whether the store reached the secret service at all.
///
/// An empty namespace disables the store at construction instead of failing
/// it: a mis-provisioned namespace must never crash the embedder or write
/// into some shared default vault. Every operation branches on this.
enum StoreState {
    Active(Schema),
    Disabled,
}

/// Namespace-scoped store for per-application user credentials.
///
/// Exactly one payload exists per (namespace, app name) pair; saves replace
/// in place. All calls are synchronous round-trips to the backend, safe to
/// issue from any thread as long as the backend serializes its own access.
pub struct CredentialStore {
    state: StoreState,
    backend: Arc<dyn SecretBackend>,
}

impl CredentialStore {
    /// Open a store over the platform's secret service.
    ///
    /// Never fails. An empty `namespace` yields a disabled store whose
    /// operations are all safe no-ops.
    pub fn open(namespace: &str) -> Self {
        Self::with_backend(namespace, default_backend())
    }

    /// Open a store over an explicit backend.
    ///
    /// Embedders use this to supply a test double or a platform backend of
    /// their own; the disabled-namespace behavior is identical to [`open`].
    ///
    /// [`open`]: Self::open
    pub fn with_backend(namespace: &str, backend: Arc<dyn SecretBackend>) -> Self {
        let state = if namespace.is_empty() {
            warn!("empty namespace, credential store disabled");
            StoreState::Disabled
        } else {
            StoreState::Active(Schema::new(namespace))
        };
        Self { state, backend }
    }

    fn schema(&self) -> Option<&Schema> {
        match &self.state {
            StoreState::Active(schema) => Some(schema),
            StoreState::Disabled => None,
        }
    }

    /// Whether the store was opened with a usable namespace.
    pub fn is_active(&self) -> bool {
        self.schema().is_some()
    }

    /// Load the payload stored for `app_name`.
    ///
    /// Returns the empty string when no record exists, when the backend
    /// fails, or when the store is disabled. The three cases are
    /// intentionally indistinguishable here; the caller's recovery path
    /// (obtain a fresh credential) is the same for all of them.
    pub fn load(&self, app_name: &str) -> String {
        let Some(schema) = self.schema() else {
            return String::new();
        };
        match self
            .backend
            .lookup(schema, &schema.lookup_attributes(app_name))
        {
            Ok(Lookup::Found(payload)) => payload,
            Ok(Lookup::NotFound) => {
                debug!(app_name, "no stored credential");
                String::new()
            }
            Err(err) => {
                warn!(app_name, %err, "credential lookup failed");
                String::new()
            }
        }
    }

    /// Save `payload` for `app_name`, replacing any previous payload.
    ///
    /// Fire-and-forget: backend failures are logged and swallowed, so a
    /// caller cannot observe whether the write landed.
    pub fn save(&self, app_name: &str, payload: &str) {
        let Some(schema) = self.schema() else {
            return;
        };
        if let Err(err) = self.backend.store(
            schema,
            ITEM_LABEL,
            payload,
            &schema.record_attributes(app_name),
        ) {
            warn!(app_name, %err, "credential save failed");
        }
    }

    /// Remove the record for `app_name`, if any.
    pub fn delete_user_data(&self, app_name: &str) {
        let Some(schema) = self.schema() else {
            return;
        };
        if let Err(err) = self
            .backend
            .clear(schema, &schema.lookup_attributes(app_name))
        {
            warn!(app_name, %err, "credential delete failed");
        }
    }

    /// Remove every record ever saved through this store's namespace.
    ///
    /// Matches on the common tag rather than enumerating app names, so
    /// records written by earlier runs of the process are wiped too.
    pub fn delete_all_data(&self) {
        let Some(schema) = self.schema() else {
            return;
        };
        if let Err(err) = self.backend.clear(schema, &schema.common_attributes()) {
            warn!(%err, "namespace-wide credential delete failed");
        }
    }
}

#[cfg(target_os = "linux")]
fn default_backend() -> Arc<dyn SecretBackend> {
    Arc::new(crate::service::ServiceBackend::new())
}

#[cfg(not(target_os = "linux"))]
fn default_backend() -> Arc<dyn SecretBackend> {
    warn!("no secret service on this platform; credentials will not persist across restarts");
    Arc::new(crate::memory::MemoryBackend::new())
}
