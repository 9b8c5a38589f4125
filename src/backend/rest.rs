//! REST backend client - unbound-target verbs against path templates
//!
//! Mock of an HTTP client: a small fixed verb set reused against many
//! endpoints, so the verbs take their target per call instead of closing
//! over one. The client stores a credential which a per-call override can
//! replace.

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::binder::VerbTable;
use crate::backend::path;
use crate::error::{AppError, Result};
use crate::transport::{Credential, Outcome, Payload};

pub struct RestClient {
    name: String,
    base_url: String,
    credential: RwLock<Option<Credential>>,
    verbs: VerbTable,
}

impl RestClient {
    pub fn new(name: &str, base_url: &str, credential: Option<Credential>) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            credential: RwLock::new(credential),
            verbs: VerbTable::standard(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> Option<Credential> {
        *self.credential.read()
    }

    /// Replace the stored credential used when no override is supplied
    pub fn set_credential(&self, credential: Option<Credential>) {
        *self.credential.write() = credential;
    }

    /// Dispatch one REST verb against a filled path template
    ///
    /// `args` fill the template's placeholders; `data` is the request
    /// body payload, echoed by the transport.
    pub fn request(
        &self,
        verb: &str,
        template: &str,
        args: &Payload,
        data: &Payload,
        credential_override: Option<Credential>,
    ) -> Result<Outcome> {
        let credential = credential_override
            .or_else(|| self.credential())
            .ok_or_else(|| AppError::MissingCredential(verb.to_string()))?;

        let endpoint = path::join(&self.base_url, &path::fill(template, args)?);
        let outcome = self
            .verbs
            .invoke(verb, credential, data, &self.name, &endpoint)?;

        debug!(
            backend = %self.name,
            verb = %verb,
            path = %template,
            args = %serde_json::Value::Object(args.clone()),
            credential = if credential_override.is_some() { "override" } else { "default" },
            result = %outcome,
            "REST dispatch"
        );
        Ok(outcome)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
