//! Composite router - one entry point over several RPC backends
//!
//! Owns one [`RpcBackend`] per configured protocol family and exposes
//! every one of their operations by name, resolving ownership through the
//! catalog's routing table. The routing table is global (operation names
//! are unique across families); the family-to-backend map is scoped to
//! this router instance, so several independently configured routers can
//! coexist.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::rpc::RpcBackend;
use crate::catalog::{Catalog, RoutingTable};
use crate::error::{AppError, Result};
use crate::transport::{Credential, Outcome, Payload};

pub struct CompositeRouter {
    routes: RoutingTable,
    backends: BTreeMap<String, RpcBackend>,
    credential: RwLock<Option<Credential>>,
}

impl CompositeRouter {
    /// Build one backend per `(family, address)` pair
    ///
    /// Each backend's target identity is its family name. `credential`
    /// is the default applied when a call carries no override.
    pub fn new(
        catalog: &Catalog,
        backends: &[(&str, &str)],
        credential: Option<Credential>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (family, address) in backends {
            let backend = RpcBackend::new(catalog, family, family, address)?;
            map.insert(family.to_string(), backend);
        }
        Ok(Self {
            routes: catalog.routing_table(),
            backends: map,
            credential: RwLock::new(credential),
        })
    }

    pub fn default_credential(&self) -> Option<Credential> {
        *self.credential.read()
    }

    /// Replace the default credential for subsequent calls
    pub fn set_credential(&self, credential: Option<Credential>) {
        *self.credential.write() = credential;
    }

    /// Backend configured for the given family, if any
    pub fn backend(&self, family: &str) -> Option<&RpcBackend> {
        self.backends.get(family)
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.backends.keys().map(String::as_str)
    }

    /// Route `operation` to its owning backend and invoke it
    pub fn call(
        &self,
        operation: &str,
        payload: &Payload,
        credential_override: Option<Credential>,
    ) -> Result<Outcome> {
        let family = self
            .routes
            .family_of(operation)
            .ok_or_else(|| AppError::UnroutableOperation(operation.to_string()))?;

        let backend = self
            .backends
            .get(family)
            .ok_or_else(|| AppError::BackendNotConfigured {
                operation: operation.to_string(),
                family: family.to_string(),
            })?;

        let credential = credential_override
            .or_else(|| self.default_credential())
            .ok_or_else(|| AppError::MissingCredential(operation.to_string()))?;

        let outcome = backend.invoke(operation, credential, payload)?;

        // Credential values are sensitive even in a mock: log presence only.
        debug!(
            backend = %family,
            operation = %operation,
            payload = %serde_json::Value::Object(payload.clone()),
            credential = if credential_override.is_some() { "override" } else { "default" },
            result = %outcome,
            "Routed RPC dispatch"
        );
        Ok(outcome)
    }
}

impl std::fmt::Debug for CompositeRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeRouter")
            .field("backends", &self.backends.keys().collect::<Vec<_>>())
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}
