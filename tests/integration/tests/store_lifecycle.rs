//! Credential lifecycle integration tests.
//!
//! These tests drive the full public surface of [`CredentialStore`] against
//! an in-memory backend shared between stores, the same way an embedding
//! application would drive the real secret service.

use std::sync::Arc;

use credvault::{CredentialStore, MemoryBackend};

fn shared_backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new())
}

#[test]
fn test_roundtrip_through_public_surface() {
    let store = CredentialStore::with_backend("com.example.product", shared_backend());
    store.save("default", "serialized-auth-token");
    assert_eq!(store.load("default"), "serialized-auth-token");
}

#[test]
fn test_store_handles_share_backend_records() {
    // Two handles over the same namespace see the same records, as two
    // process runs sharing one OS keyring would.
    let backend = shared_backend();
    let writer = CredentialStore::with_backend("com.example.product", backend.clone());
    let reader = CredentialStore::with_backend("com.example.product", backend);

    writer.save("default", "token");
    assert_eq!(reader.load("default"), "token");
}

#[test]
fn test_delete_all_covers_records_from_other_handles() {
    let backend = shared_backend();
    let earlier_run = CredentialStore::with_backend("com.example.product", backend.clone());
    earlier_run.save("app1", "a");
    earlier_run.save("app2", "b");
    drop(earlier_run);

    // A fresh handle never saw those app names, yet wipes them via the
    // common tag.
    let current_run = CredentialStore::with_backend("com.example.product", backend.clone());
    current_run.delete_all_data();

    assert_eq!(current_run.load("app1"), "");
    assert_eq!(current_run.load("app2"), "");
    assert!(backend.is_empty());
}

#[test]
fn test_namespace_isolation_end_to_end() {
    let backend = shared_backend();
    let product_a = CredentialStore::with_backend("com.example.alpha", backend.clone());
    let product_b = CredentialStore::with_backend("com.example.beta", backend);

    product_a.save("default", "alpha-token");
    product_b.save("default", "beta-token");

    assert_eq!(product_a.load("default"), "alpha-token");
    assert_eq!(product_b.load("default"), "beta-token");

    product_a.delete_all_data();
    assert_eq!(product_a.load("default"), "");
    assert_eq!(product_b.load("default"), "beta-token");
}

#[test]
fn test_payloads_survive_unusual_content() {
    let store = CredentialStore::with_backend("com.example.product", shared_backend());

    // Payloads are opaque and must come back byte-for-byte.
    let payload = "{\"token\":\"abc\",\"note\":\"新しい鍵 \\n tab\\there\"}";
    store.save("default", payload);
    assert_eq!(store.load("default"), payload);

    store.save("default", "");
    assert_eq!(store.load("default"), "");
}
