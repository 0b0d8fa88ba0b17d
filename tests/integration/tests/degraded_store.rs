//! Degraded-path integration tests.
//!
//! A store with an empty namespace must never touch the backend, and a store
//! whose backend is unreachable must stay silent toward its caller.

use std::sync::Arc;

use credvault::CredentialStore;
use credvault_integration_tests::{FailingBackend, RecordingBackend};

#[test]
fn test_disabled_store_issues_no_backend_calls() {
    let backend = Arc::new(RecordingBackend::new());
    let store = CredentialStore::with_backend("", backend.clone());

    assert_eq!(store.load("app1"), "");
    store.save("app1", "payload");
    store.delete_user_data("app1");
    store.delete_all_data();

    assert_eq!(backend.calls(), 0);
}

#[test]
fn test_active_store_reaches_backend() {
    let backend = Arc::new(RecordingBackend::new());
    let store = CredentialStore::with_backend("com.example.product", backend.clone());

    store.save("app1", "payload");
    assert_eq!(store.load("app1"), "payload");
    assert_eq!(backend.calls(), 2);
}

#[test]
fn test_unreachable_backend_collapses_to_empty_load() {
    let store = CredentialStore::with_backend("com.example.product", Arc::new(FailingBackend));
    assert_eq!(store.load("app1"), "");
}

#[test]
fn test_unreachable_backend_mutations_stay_silent() {
    let store = CredentialStore::with_backend("com.example.product", Arc::new(FailingBackend));

    // None of these may panic or surface the failure.
    store.save("app1", "payload");
    store.delete_user_data("app1");
    store.delete_all_data();
}
