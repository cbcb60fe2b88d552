//! Cast and crew payloads returned by `/movie/{id}/credits`.

use serde::{Deserialize, Serialize};

use crate::TmdbId;

/// Cast and crew for a movie. Defaults to empty lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Credits {
    /// Billed cast in upstream order.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew members.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Single cast entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
    /// Person id; links to the person page.
    pub id: TmdbId,
    /// Performer name.
    #[serde(default)]
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Profile image path fragment.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
    /// Credit id, unique per role.
    #[serde(default)]
    pub credit_id: Option<String>,
}

/// Single crew entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrewMember {
    /// Person id.
    pub id: TmdbId,
    /// Crew member name.
    #[serde(default)]
    pub name: String,
    /// Job title, e.g. `Director` or `Screenplay`.
    #[serde(default)]
    pub job: String,
    /// Department, e.g. `Writing`.
    #[serde(default)]
    pub department: Option<String>,
    /// Profile image path fragment.
    #[serde(default)]
    pub profile_path: Option<String>,
}
