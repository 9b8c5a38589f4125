//! Call Gateway Client
//!
//! A protocol-agnostic remote-call facade: operations are declared once
//! in a static catalog, bound to concrete callables at client
//! construction, gated behind a credential check, and routed by name
//! through a composite router so several backends look like one.
//!
//! The wire itself is mocked by [`transport::send`]; everything above it
//! (binding, routing, credential injection, dispatch logging) is real.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod transport;

pub use error::{AppError, Result};
pub use transport::{Credential, Outcome, Payload, AUTHORIZATION_CODE};
