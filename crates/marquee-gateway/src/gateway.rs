//! Sentinel-returning gateway operations.

use marquee_api_models::{
    Credits, MovieDetails, MovieSummary, Person, PersonCredits, PersonDetails, ResultsPage,
    TmdbId, Video,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::GatewayConfig;
use crate::endpoint::Endpoint;
use crate::error::GatewayError;
use crate::transport::HttpTransport;

/// Client for the upstream movie API.
///
/// Public operations never fail: see the crate docs for the sentinel policy.
#[derive(Debug, Clone)]
pub struct MovieGateway<T> {
    config: GatewayConfig,
    transport: T,
}

impl<T: HttpTransport> MovieGateway<T> {
    /// Create a gateway over the given transport.
    pub const fn new(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Active configuration.
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Popular movies; empty on failure.
    pub async fn fetch_popular(&self) -> Vec<MovieSummary> {
        self.get_json::<ResultsPage<MovieSummary>>(&Endpoint::Popular)
            .await
            .map_or_else(|err| sentinel("popular movies", &err), |page| page.results)
    }

    /// Movie detail record; `None` on failure.
    pub async fn fetch_movie_details(&self, id: TmdbId) -> Option<MovieDetails> {
        self.get_json::<MovieDetails>(&Endpoint::MovieDetails(id))
            .await
            .map_or_else(|err| sentinel("movie details", &err), Some)
    }

    /// Videos attached to a movie; empty on failure.
    pub async fn fetch_movie_videos(&self, id: TmdbId) -> Vec<Video> {
        self.get_json::<ResultsPage<Video>>(&Endpoint::MovieVideos(id))
            .await
            .map_or_else(|err| sentinel("movie videos", &err), |page| page.results)
    }

    /// Cast and crew; empty lists on failure.
    pub async fn fetch_movie_credits(&self, id: TmdbId) -> Credits {
        self.get_json::<Credits>(&Endpoint::MovieCredits(id))
            .await
            .unwrap_or_else(|err| sentinel("movie credits", &err))
    }

    /// Free-text movie search; empty on failure or for a blank query.
    pub async fn search_movies(&self, query: &str) -> Vec<MovieSummary> {
        let query = query.trim();
        if query.is_empty() {
            debug!("skipping search for blank query");
            return Vec::new();
        }
        self.get_json::<ResultsPage<MovieSummary>>(&Endpoint::SearchMovies(query.to_string()))
            .await
            .map_or_else(|err| sentinel("movie search", &err), |page| page.results)
    }

    /// Person profile joined with their movie credits.
    ///
    /// The profile is fetched first, then the credits. Either failing yields `None`.
    pub async fn fetch_person_details(&self, id: TmdbId) -> Option<PersonDetails> {
        self.person_details(id)
            .await
            .map_or_else(|err| sentinel("person details", &err), Some)
    }

    async fn person_details(&self, id: TmdbId) -> Result<PersonDetails, GatewayError> {
        let person = self.get_json::<Person>(&Endpoint::Person(id)).await?;
        let credits = self
            .get_json::<PersonCredits>(&Endpoint::PersonMovieCredits(id))
            .await?;
        Ok(PersonDetails { person, credits })
    }

    async fn get_json<D: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<D, GatewayError> {
        let body = self
            .transport
            .get(&endpoint.url(&self.config))
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.path(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| GatewayError::Decode {
            endpoint: endpoint.path(),
            source,
        })
    }
}

fn sentinel<D: Default>(operation: &'static str, err: &GatewayError) -> D {
    match err {
        GatewayError::Transport { source, .. } => {
            error!(operation, endpoint = err.endpoint(), error = %source, "error fetching {operation}");
        }
        GatewayError::Decode { source, .. } => {
            error!(operation, endpoint = err.endpoint(), error = %source, "error decoding {operation}");
        }
    }
    D::default()
}
