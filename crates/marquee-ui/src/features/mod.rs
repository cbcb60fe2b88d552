//! Feature slices: orchestration, derived data and (on wasm) views.

pub mod auth;
pub mod home;
pub mod movies;
pub mod person;
pub mod watchlist;
