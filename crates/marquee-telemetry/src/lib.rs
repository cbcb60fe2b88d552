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
//! Logging primitives shared across the Marquee workspace.
//!
//! Library crates only emit `tracing` events. The entry point installs a
//! subscriber once through [`init_logging`]; in the browser the formatted
//! lines are forwarded to the developer console.

pub mod error;
pub mod init;

#[cfg(target_arch = "wasm32")]
mod console;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
