//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod movie_card;
pub(crate) mod spinner;

pub(crate) use empty_state::EmptyState;
pub(crate) use movie_card::{MovieCard, MovieGrid};
pub(crate) use spinner::Spinner;
