//! Home page listing of popular movies.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
