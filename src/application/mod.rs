//! Application layer - use-case orchestration over the domain

pub mod ports;
pub mod services;
