//! Configuration module

pub mod settings;

pub use settings::{LoggingConfig, RestConfig, RpcBackendConfig, Settings};
