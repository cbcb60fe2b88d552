//! Movie listing and detail payloads.

use serde::{Deserialize, Serialize};

use crate::TmdbId;

/// Paged list envelope returned by the popular and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResultsPage<T> {
    /// One-based page index.
    #[serde(default)]
    pub page: u32,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages available upstream.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results available upstream.
    #[serde(default)]
    pub total_results: u64,
}

/// Compact movie record used by listings, search results and the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MovieSummary {
    /// Upstream movie id; unique within the watchlist.
    pub id: TmdbId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Plot synopsis.
    #[serde(default)]
    pub overview: String,
    /// Poster path fragment, templated through [`crate::images::image_url`].
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date as `YYYY-MM-DD`; upstream sends an empty string when unknown.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average user score on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes behind the average.
    #[serde(default)]
    pub vote_count: u64,
    /// Upstream popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult content flag.
    #[serde(default)]
    pub adult: bool,
    /// Genre ids attached to the listing.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// Genre tag attached to a movie detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Genre id.
    pub id: u64,
    /// Genre display name.
    pub name: String,
}

/// Full movie record returned by `/movie/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    /// Upstream movie id.
    pub id: TmdbId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Marketing tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Plot synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Production budget in USD.
    #[serde(default)]
    pub budget: Option<u64>,
    /// Box office revenue in USD.
    #[serde(default)]
    pub revenue: Option<u64>,
    /// Average user score on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes behind the average.
    #[serde(default)]
    pub vote_count: u64,
    /// Upstream popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult content flag.
    #[serde(default)]
    pub adult: bool,
    /// Genres for the movie.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Release status, e.g. `Released`.
    #[serde(default)]
    pub status: Option<String>,
    /// Original language code.
    #[serde(default)]
    pub original_language: Option<String>,
    /// Studios credited for the production, in upstream order.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

/// Studio credited on a movie detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCompany {
    /// Upstream company id.
    #[serde(default)]
    pub id: u64,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Logo path fragment.
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl MovieDetails {
    /// Project the detail record onto the compact listing shape stored in the watchlist.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone().unwrap_or_default(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            adult: self.adult,
            genre_ids: self.genres.iter().map(|genre| genre.id).collect(),
        }
    }
}

/// Trailer, teaser or clip attached to a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Upstream video id.
    #[serde(default)]
    pub id: String,
    /// Site-specific key (the `v=` parameter on `YouTube`).
    pub key: String,
    /// Video title.
    #[serde(default)]
    pub name: String,
    /// Hosting site, e.g. `YouTube`.
    #[serde(default)]
    pub site: String,
    /// Video type, e.g. `Trailer` or `Teaser`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Whether the upstream marks the video as official.
    #[serde(default)]
    pub official: bool,
}
