//! RPC backend client - one instance per protocol family
//!
//! Binds its endpoint map eagerly from the catalog at construction.
//! Mutating the stored identity or address afterwards does NOT rebind the
//! endpoints: they keep the target they closed over. Rebinding is only
//! ever explicit, via [`RpcBackend::rebind`].

use std::collections::HashMap;

use tracing::debug;

use crate::backend::binder::{self, BoundEndpoint};
use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::transport::{Credential, Outcome, Payload};

pub struct RpcBackend {
    family: String,
    identity: String,
    address: String,
    endpoints: HashMap<String, BoundEndpoint>,
}

impl RpcBackend {
    /// Create a backend for `family`, binding every catalogued operation
    /// against the given target
    pub fn new(catalog: &Catalog, family: &str, identity: &str, address: &str) -> Result<Self> {
        let specs = catalog.lookup(family)?;
        let endpoints = binder::bind(specs, identity, address);
        debug!(
            backend = %family,
            address = %address,
            operations = endpoints.len(),
            "Bound RPC backend"
        );
        Ok(Self {
            family: family.to_string(),
            identity: identity.to_string(),
            address: address.to_string(),
            endpoints,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Operation names this backend can invoke
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    /// Invoke a bound operation
    ///
    /// No logging here: the router is the single observability choke
    /// point for RPC dispatch.
    pub fn invoke(
        &self,
        operation: &str,
        credential: Credential,
        payload: &Payload,
    ) -> Result<Outcome> {
        let endpoint = self
            .endpoints
            .get(operation)
            .ok_or_else(|| AppError::UnknownOperation {
                backend: self.family.clone(),
                operation: operation.to_string(),
            })?;
        Ok(endpoint.invoke(credential, payload))
    }

    /// Update the stored identity. Already-bound endpoints are unaffected.
    pub fn set_identity(&mut self, identity: &str) {
        self.identity = identity.to_string();
    }

    /// Update the stored address. Already-bound endpoints are unaffected.
    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    /// Rebuild the endpoint map against the current identity and address
    pub fn rebind(&mut self, catalog: &Catalog) -> Result<()> {
        let specs = catalog.lookup(&self.family)?;
        self.endpoints = binder::bind(specs, &self.identity, &self.address);
        debug!(backend = %self.family, address = %self.address, "Rebound RPC backend");
        Ok(())
    }
}

impl std::fmt::Debug for RpcBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcBackend")
            .field("family", &self.family)
            .field("identity", &self.identity)
            .field("address", &self.address)
            .field("operations", &self.endpoints.len())
            .finish()
    }
}
