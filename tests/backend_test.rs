//! Tests for RPC backend clients and endpoint binding

use callgate::backend::rpc::RpcBackend;
use callgate::catalog::Catalog;
use callgate::error::AppError;
use callgate::transport::{Credential, Outcome, Payload, AUTHORIZATION_CODE};
use serde_json::{json, Value};

fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

#[test]
fn test_every_catalogued_operation_is_bound() {
    let catalog = Catalog::builtin();
    let data = payload(json!({"object_type": "Node"}));
    let rendered = Value::Object(data.clone()).to_string();

    for family in catalog.families().collect::<Vec<_>>() {
        let backend = RpcBackend::new(&catalog, family, family, "url").unwrap();
        for spec in catalog.lookup(family).unwrap() {
            let outcome = backend
                .invoke(&spec.name, AUTHORIZATION_CODE, &data)
                .unwrap();
            assert_eq!(
                outcome.message(),
                format!(
                    "authorized {} request of {} on {} url",
                    spec.name, rendered, family
                )
            );
        }
    }
}

#[test]
fn test_wrong_credential_is_echoed_back() {
    let catalog = Catalog::builtin();
    let backend = RpcBackend::new(&catalog, "cob", "cob", "cob_url").unwrap();

    for bad in [0, 1, 910, 912, -911] {
        let outcome = backend
            .invoke("AddPerson", Credential(bad), &Payload::new())
            .unwrap();
        match outcome {
            Outcome::Unauthorized { credential, .. } => assert_eq!(credential, Credential(bad)),
            Outcome::Authorized { .. } => panic!("credential {} must not authorize", bad),
        }
    }
}

#[test]
fn test_get_slices_authorized() {
    let catalog = Catalog::builtin();
    let backend = RpcBackend::new(&catalog, "plc", "plc", "url").unwrap();
    let outcome = backend
        .invoke("GetSlices", Credential(911), &Payload::new())
        .unwrap();
    assert_eq!(
        outcome.message(),
        "authorized GetSlices request of {} on plc url"
    );
}

#[test]
fn test_get_slices_unauthorized() {
    let catalog = Catalog::builtin();
    let backend = RpcBackend::new(&catalog, "plc", "plc", "url").unwrap();
    let outcome = backend
        .invoke("GetSlices", Credential(0), &Payload::new())
        .unwrap();
    assert_eq!(outcome.message(), "!! UNAUTHORIZED !!, auth = 0 on plc url");
}

#[test]
fn test_unknown_operation_fails() {
    let catalog = Catalog::builtin();
    let backend = RpcBackend::new(&catalog, "plc", "plc", "url").unwrap();
    assert!(matches!(
        backend.invoke("ListAll", AUTHORIZATION_CODE, &Payload::new()),
        Err(AppError::UnknownOperation { .. })
    ));
}

#[test]
fn test_double_binding_is_idempotent() {
    let catalog = Catalog::builtin();
    let first = RpcBackend::new(&catalog, "onev", "onev", "onev_url").unwrap();
    let second = RpcBackend::new(&catalog, "onev", "onev", "onev_url").unwrap();

    let data = payload(json!({"object_type": "Site", "object_id": 7}));
    let a = first.invoke("Delete", AUTHORIZATION_CODE, &data).unwrap();
    let b = second.invoke("Delete", AUTHORIZATION_CODE, &data).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_late_target_mutation_does_not_rebind() {
    let catalog = Catalog::builtin();
    let mut backend = RpcBackend::new(&catalog, "plc", "plc", "old_url").unwrap();

    backend.set_address("new_url");
    backend.set_identity("other");
    assert_eq!(backend.address(), "new_url");

    // Endpoints keep the target they closed over at construction.
    let outcome = backend
        .invoke("GetSlices", AUTHORIZATION_CODE, &Payload::new())
        .unwrap();
    assert_eq!(
        outcome.message(),
        "authorized GetSlices request of {} on plc old_url"
    );
}

#[test]
fn test_explicit_rebind_takes_effect() {
    let catalog = Catalog::builtin();
    let mut backend = RpcBackend::new(&catalog, "plc", "plc", "old_url").unwrap();

    backend.set_address("new_url");
    backend.rebind(&catalog).unwrap();

    let outcome = backend
        .invoke("GetSlices", AUTHORIZATION_CODE, &Payload::new())
        .unwrap();
    assert_eq!(
        outcome.message(),
        "authorized GetSlices request of {} on plc new_url"
    );
}
