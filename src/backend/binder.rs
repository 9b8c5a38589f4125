//! Endpoint binder - table-driven construction of callable endpoints
//!
//! Turns the declarative catalog entry for a protocol family into a map
//! of concrete callables, built once at client construction. Two binding
//! shapes exist:
//!
//! - bound-target ([`bind`]): the closure captures the target identity
//!   and address, so RPC-style callers pass only `(credential, payload)`;
//! - unbound-target ([`VerbTable`]): the closure takes identity and
//!   address per call, so one small verb set serves many REST targets.

use std::collections::HashMap;

use crate::catalog::OperationSpec;
use crate::error::{AppError, Result};
use crate::transport::{self, Credential, Outcome, Payload};

type EndpointFn = Box<dyn Fn(Credential, &Payload) -> Outcome + Send + Sync>;
type VerbFn = Box<dyn Fn(Credential, &Payload, &str, &str) -> Outcome + Send + Sync>;

/// A callable produced once per operation, closing over its target
pub struct BoundEndpoint {
    operation: String,
    params: Vec<String>,
    call: EndpointFn,
}

impl BoundEndpoint {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Ordered parameter names declared for this operation
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn invoke(&self, credential: Credential, payload: &Payload) -> Outcome {
        (self.call)(credential, payload)
    }
}

impl std::fmt::Debug for BoundEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundEndpoint")
            .field("operation", &self.operation)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Build one bound endpoint per catalog operation, closing over the
/// target identity and address
pub fn bind(
    specs: &[OperationSpec],
    identity: &str,
    address: &str,
) -> HashMap<String, BoundEndpoint> {
    specs
        .iter()
        .map(|spec| {
            let operation = spec.name.clone();
            let identity = identity.to_string();
            let address = address.to_string();
            let call: EndpointFn = Box::new(move |credential, payload| {
                transport::send(&operation, credential, payload, &identity, &address)
            });
            (
                spec.name.clone(),
                BoundEndpoint {
                    operation: spec.name.clone(),
                    params: spec.params.clone(),
                    call,
                },
            )
        })
        .collect()
}

/// Unbound-target verb set: callables that take their target per call
pub struct VerbTable {
    verbs: HashMap<String, VerbFn>,
}

impl VerbTable {
    /// Bind an arbitrary verb list
    pub fn bind(verbs: &[&str]) -> Self {
        let verbs = verbs
            .iter()
            .map(|verb| {
                let name = verb.to_string();
                let call: VerbFn = Box::new(move |credential, payload, identity, address| {
                    transport::send(&name, credential, payload, identity, address)
                });
                (verb.to_string(), call)
            })
            .collect();
        Self { verbs }
    }

    /// The standard REST verb set
    pub fn standard() -> Self {
        Self::bind(&["get", "post", "put", "delete"])
    }

    pub fn invoke(
        &self,
        verb: &str,
        credential: Credential,
        payload: &Payload,
        identity: &str,
        address: &str,
    ) -> Result<Outcome> {
        let call = self.verbs.get(verb).ok_or_else(|| AppError::UnknownOperation {
            backend: identity.to_string(),
            operation: verb.to_string(),
        })?;
        Ok(call(credential, payload, identity, address))
    }

    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for VerbTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbTable")
            .field("verbs", &self.verbs.keys().collect::<Vec<_>>())
            .finish()
    }
}
