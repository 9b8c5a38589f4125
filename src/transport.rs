//! Transport stub - the single primitive every remote call funnels through
//!
//! Stands in for the real wire (HTTP, XML-RPC). Deterministic: a call is
//! authorized iff its credential equals [`AUTHORIZATION_CODE`], and the
//! result echoes the request back. The stub itself never logs; dispatch
//! logging belongs to the router and REST client layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The one credential value the mock transport accepts
pub const AUTHORIZATION_CODE: Credential = Credential(911);

/// Opaque authorization token, compared by equality only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(pub i64);

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Request payload: opaque JSON object handed through to the backend
pub type Payload = serde_json::Map<String, Value>;

/// Outcome of a transport call
///
/// `Unauthorized` is an expected business result, not an error: callers
/// inspect it rather than unwrap it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Authorized {
        message: String,
    },
    Unauthorized {
        /// The exact credential the backend rejected
        credential: Credential,
        message: String,
    },
}

impl Outcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Outcome::Authorized { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Authorized { message } | Outcome::Unauthorized { message, .. } => message,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

fn render_payload(payload: &Payload) -> String {
    Value::Object(payload.clone()).to_string()
}

/// Emulate a REST or RPC request on `address`
pub fn send(
    operation: &str,
    credential: Credential,
    payload: &Payload,
    identity: &str,
    address: &str,
) -> Outcome {
    if credential == AUTHORIZATION_CODE {
        Outcome::Authorized {
            message: format!(
                "authorized {} request of {} on {} {}",
                operation,
                render_payload(payload),
                identity,
                address
            ),
        }
    } else {
        Outcome::Unauthorized {
            credential,
            message: format!(
                "!! UNAUTHORIZED !!, auth = {} on {} {}",
                credential, identity, address
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_echo() {
        let outcome = send("GetSlices", AUTHORIZATION_CODE, &Payload::new(), "plc", "url");
        assert!(outcome.is_authorized());
        assert_eq!(
            outcome.message(),
            "authorized GetSlices request of {} on plc url"
        );
    }

    #[test]
    fn test_unauthorized_carries_credential() {
        let outcome = send("GetSlices", Credential(0), &Payload::new(), "plc", "url");
        assert_eq!(
            outcome,
            Outcome::Unauthorized {
                credential: Credential(0),
                message: "!! UNAUTHORIZED !!, auth = 0 on plc url".to_string(),
            }
        );
    }
}
