//! Backend module - endpoint binding, RPC and REST clients

pub mod binder;
pub mod path;
pub mod rest;
pub mod rpc;
