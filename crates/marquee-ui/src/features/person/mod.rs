//! Person detail page: composed loading, derived display data and view.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
