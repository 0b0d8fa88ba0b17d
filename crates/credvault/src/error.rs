//! Error types for credential storage.

use thiserror::Error;

/// Errors produced by secret-service backends.
///
/// These never cross the public facade: [`crate::CredentialStore`] collapses
/// every failure into its best-effort contract (empty string from a load,
/// nothing from a mutation). The taxonomy exists so that backends and log
/// output can tell "record absent" apart from "service broken".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The secret service could not be reached at all.
    #[error("secret service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but the operation failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// A stored payload came back as something other than UTF-8 text.
    #[error("stored payload is not valid UTF-8")]
    InvalidPayload,
}

/// Convenience result alias for backend operations.
pub type Result<T> = std::result::Result<T, StoreError>;
