//! Public IP echo service.
//!
//! A minimal HTTP service with two endpoints: `GET /` proxies a single
//! lookup to the ipify API and returns the host's public IP, and
//! `GET /health` reports liveness for orchestration probes.
//!
//! The IP endpoint always answers with HTTP 200; an upstream failure is
//! encoded in the JSON body instead of the transport status:
//!
//! ```text
//! GET /        -> {"public_ip": "203.0.113.7"}
//! GET /        -> {"error": "Unable to retrieve IP address"}   (upstream down)
//! GET /health  -> {"status": "healthy"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`lookup`]: Outbound client for the upstream IP provider
//! - [`api`]: HTTP API for the IP and health endpoints
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
