//! Networking modules for the Drawing Mirror REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the request/response contract and the `Transport` seam,
//! `transport` provides the browser and native implementations of that seam,
//! `api` wraps individual backend endpoints, and `types` defines their JSON
//! schema.

pub mod api;
pub mod client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
