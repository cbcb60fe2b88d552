//! Mock sign-in service, login flows and the sign-in page.

pub mod flow;
pub mod service;
#[cfg(target_arch = "wasm32")]
pub mod view;
