#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Remote data gateway for the upstream movie metadata API.
//!
//! # Design
//! - Every operation makes a single attempt; no retries, backoff or timeouts.
//! - Failures never reach the caller: they are logged and replaced by a
//!   sentinel (empty list, `None`, or empty credits).
//! - HTTP is behind [`HttpTransport`] so the gateway runs natively in tests
//!   and over `gloo-net` in the browser.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod transport;

pub use config::GatewayConfig;
pub use endpoint::Endpoint;
pub use error::{ConfigError, GatewayError, TransportError};
pub use gateway::MovieGateway;
#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
pub use transport::HttpTransport;
