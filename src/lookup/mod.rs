//! Outbound lookup against the upstream IP provider.
//!
//! This module handles:
//! - The reqwest client wrapper with a bounded request timeout
//! - The single-call lookup that returns the provider's response verbatim

pub mod client;

pub use client::LookupClient;
