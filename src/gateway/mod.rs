//! Gateway module - composite routing and the macro facade

pub mod facade;
pub mod router;
