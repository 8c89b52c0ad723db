//! HTTP transport seam.
//!
//! [`HttpClient`] is the only thing the provider client talks to, so tests can
//! swap the network out. [`ApiKey`] decorates any client with a credential
//! header.

mod basic;
mod client;
pub mod auth;

pub use auth::ApiKey;
pub use basic::BasicClient;
pub use client::HttpClient;
