//! # credvault
//!
//! Namespace-scoped user credential storage backed by the OS secret service.
//!
//! The crate is a thin facade over the platform keyring:
//!
//! - **Store**: [`CredentialStore`] -- one opaque payload per (namespace,
//!   app name) pair, with best-effort, never-throw semantics
//! - **Schema**: namespace-derived attribute sets that address records and
//!   tag them for namespace-wide bulk deletion
//! - **Backends**: the [`SecretBackend`] seam, implemented over the
//!   freedesktop Secret Service on Linux and in process memory elsewhere

pub mod backend;
pub mod error;
pub mod memory;
pub mod schema;
#[cfg(target_os = "linux")]
pub mod service;
pub mod store;

// Re-exports for convenience
pub use backend::{Lookup, SecretBackend};
pub use error::{Result, StoreError};
pub use memory::MemoryBackend;
#[cfg(target_os = "linux")]
pub use service::ServiceBackend;
pub use store::CredentialStore;
