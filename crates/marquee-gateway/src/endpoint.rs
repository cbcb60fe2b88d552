//! Upstream endpoints and URL construction.

use marquee_api_models::TmdbId;

use crate::config::GatewayConfig;

/// Upstream GET endpoints used by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Popular movies listing.
    Popular,
    /// Movie detail record.
    MovieDetails(TmdbId),
    /// Videos attached to a movie.
    MovieVideos(TmdbId),
    /// Cast and crew of a movie.
    MovieCredits(TmdbId),
    /// Free-text movie search.
    SearchMovies(String),
    /// Person profile.
    Person(TmdbId),
    /// Movie credits of a person.
    PersonMovieCredits(TmdbId),
}

impl Endpoint {
    /// Path relative to the API base, without query parameters.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Popular => "/movie/popular".to_string(),
            Self::MovieDetails(id) => format!("/movie/{id}"),
            Self::MovieVideos(id) => format!("/movie/{id}/videos"),
            Self::MovieCredits(id) => format!("/movie/{id}/credits"),
            Self::SearchMovies(_) => "/search/movie".to_string(),
            Self::Person(id) => format!("/person/{id}"),
            Self::PersonMovieCredits(id) => format!("/person/{id}/movie_credits"),
        }
    }

    /// Absolute URL including the API key and any endpoint parameters.
    #[must_use]
    pub fn url(&self, config: &GatewayConfig) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            config.base_url(),
            self.path(),
            urlencoding::encode(config.api_key())
        );
        if let Self::SearchMovies(query) = self {
            url.push_str("&query=");
            url.push_str(&urlencoding::encode(query));
        }
        url
    }
}
