//! Person profile and movie-credit payloads.

use serde::{Deserialize, Serialize};

use crate::TmdbId;

/// Person profile returned by `/person/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Person id.
    pub id: TmdbId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Long-form biography.
    #[serde(default)]
    pub biography: Option<String>,
    /// Birth date as `YYYY-MM-DD`.
    #[serde(default)]
    pub birthday: Option<String>,
    /// Death date as `YYYY-MM-DD`.
    #[serde(default)]
    pub deathday: Option<String>,
    /// Birthplace.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Profile image path fragment.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Department the person is best known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Upstream popularity score.
    #[serde(default)]
    pub popularity: f64,
}

/// Movie credits for a person, returned by `/person/{id}/movie_credits`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PersonCredits {
    /// Acting credits.
    #[serde(default)]
    pub cast: Vec<PersonCastCredit>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<PersonCrewCredit>,
}

/// Acting credit on a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCastCredit {
    /// Movie id.
    pub id: TmdbId,
    /// Movie title.
    #[serde(default)]
    pub title: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Poster path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Upstream popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Average user score.
    #[serde(default)]
    pub vote_average: f64,
    /// Credit id, unique per role.
    #[serde(default)]
    pub credit_id: Option<String>,
}

/// Crew credit on a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonCrewCredit {
    /// Movie id.
    pub id: TmdbId,
    /// Movie title.
    #[serde(default)]
    pub title: String,
    /// Job title.
    #[serde(default)]
    pub job: String,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Poster path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Credit id, unique per role.
    #[serde(default)]
    pub credit_id: Option<String>,
}

/// Person profile joined with their movie credits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDetails {
    /// Profile record.
    pub person: Person,
    /// Movie credits for the profile.
    pub credits: PersonCredits,
}
