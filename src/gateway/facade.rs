//! CDN facade - the macro client over REST and RPC backends
//!
//! Composes a [`CompositeRouter`] (the RPC side: `onev`, `cob`, `plc`)
//! with a [`RestClient`] (the `contentd` side) behind one object. The
//! facade establishes the authorization context once: every nested call
//! it makes carries the facade's stored credential as an explicit
//! override, so callers of the convenience operations never supply one.

use std::fmt;

use parking_lot::RwLock;
use serde_json::json;

use crate::backend::rest::RestClient;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::gateway::router::CompositeRouter;
use crate::transport::{Credential, Outcome, Payload};

const CDN_PREFIX_TEMPLATE: &str = "contentd/cdn_prefix/{cdn_prefix_id}";

pub struct CdnFacade {
    router: CompositeRouter,
    contentd: RestClient,
    credential: RwLock<Credential>,
}

impl CdnFacade {
    pub fn new(
        catalog: &Catalog,
        rest_name: &str,
        rest_url: &str,
        onev_url: &str,
        cob_url: &str,
        plc_url: &str,
        credential: Credential,
    ) -> Result<Self> {
        let router = CompositeRouter::new(
            catalog,
            &[("onev", onev_url), ("cob", cob_url), ("plc", plc_url)],
            None,
        )?;
        Ok(Self {
            router,
            contentd: RestClient::new(rest_name, rest_url, None),
            credential: RwLock::new(credential),
        })
    }

    pub fn credential(&self) -> Credential {
        *self.credential.read()
    }

    /// Swap the shared credential; every subsequent nested call uses it
    pub fn set_credential(&self, credential: Credential) {
        *self.credential.write() = credential;
    }

    pub fn router(&self) -> &CompositeRouter {
        &self.router
    }

    pub fn contentd(&self) -> &RestClient {
        &self.contentd
    }

    /// Fetch one CDN prefix record through the REST side
    pub fn get_cdn_prefix(&self, cdn_prefix_id: i64) -> Result<Outcome> {
        let mut args = Payload::new();
        args.insert("cdn_prefix_id".to_string(), json!(cdn_prefix_id));
        self.contentd.request(
            "get",
            CDN_PREFIX_TEMPLATE,
            &args,
            &Payload::new(),
            Some(self.credential()),
        )
    }

    /// Update one CDN prefix record through the REST side
    pub fn update_cdn_prefix(&self, cdn_prefix_id: i64, data: &Payload) -> Result<Outcome> {
        let mut args = Payload::new();
        args.insert("cdn_prefix_id".to_string(), json!(cdn_prefix_id));
        self.contentd.request(
            "put",
            CDN_PREFIX_TEMPLATE,
            &args,
            data,
            Some(self.credential()),
        )
    }

    /// List node types for an IP address through the `onev` backend
    pub fn list_node_types(&self, ip_address_id: i64) -> Result<Outcome> {
        let payload = match json!({
            "object_type": "IpAddress",
            "filter_attrs": { "ip_address_id": ip_address_id },
            "return_attrs": ["type"],
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        self.router
            .call("ListAll", &payload, Some(self.credential()))
    }

    /// Run the canned macro: one REST fetch plus one RPC listing,
    /// combined into a single report
    pub fn combined_report(&self) -> Result<CombinedReport> {
        Ok(CombinedReport {
            contentd: self.get_cdn_prefix(5)?,
            inventory: self.list_node_types(2)?,
        })
    }
}

impl fmt::Debug for CdnFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnFacade")
            .field("router", &self.router)
            .field("contentd", &self.contentd)
            .finish_non_exhaustive()
    }
}

/// Result of [`CdnFacade::combined_report`], one outcome per sub-backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedReport {
    pub contentd: Outcome,
    pub inventory: Outcome,
}

impl CombinedReport {
    pub fn is_fully_authorized(&self) -> bool {
        self.contentd.is_authorized() && self.inventory.is_authorized()
    }
}

impl fmt::Display for CombinedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "combined report:")?;
        writeln!(f, "contentd: {}", self.contentd)?;
        write!(f, "onevsh:   {}", self.inventory)
    }
}
