//! Core, DOM-free primitives: state containers, persistence and helpers.
pub mod auth;
pub mod format;
pub mod loadable;
pub mod search;
pub mod storage;
pub mod store;
pub mod watchlist;
