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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! DTOs for the upstream movie metadata API.
//!
//! The upstream schema is consumed as-is: unknown fields are ignored and
//! optional fields default so a sparse payload never fails to decode. The UI
//! and gateway share these types so there is a single mapping of the wire
//! format.

pub mod images;

mod credits;
mod movie;
mod person;

pub use credits::{CastMember, Credits, CrewMember};
pub use movie::{Genre, MovieDetails, MovieSummary, ProductionCompany, ResultsPage, Video};
pub use person::{Person, PersonCastCredit, PersonCredits, PersonCrewCredit, PersonDetails};

/// Numeric identifier used by the upstream API for movies and people.
pub type TmdbId = u64;
