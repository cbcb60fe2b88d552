//! Home listing loading and the movie card model shared by grid views.

use crate::core::format::{format_vote, release_year};
use marquee_api_models::images::{ImageSize, image_url};
use marquee_api_models::{MovieSummary, TmdbId};
use marquee_gateway::{HttpTransport, MovieGateway};

/// Fetch the popular listing. Upstream failure yields an empty grid.
pub async fn load_home<T: HttpTransport>(gateway: &MovieGateway<T>) -> Vec<MovieSummary> {
    gateway.fetch_popular().await
}

/// Card rendered in listing, search and watchlist grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieCardModel {
    /// Movie id for the detail link.
    pub id: TmdbId,
    /// Title.
    pub title: String,
    /// Poster URL.
    pub poster_url: Option<String>,
    /// Release year.
    pub year: Option<i32>,
    /// Vote average to one decimal.
    pub vote: String,
}

impl From<&MovieSummary> for MovieCardModel {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: image_url(movie.poster_path.as_deref(), ImageSize::W500),
            year: release_year(movie.release_date.as_deref()),
            vote: format_vote(movie.vote_average),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_model_formats_summary() {
        let movie = MovieSummary {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/m.jpg".to_string()),
            release_date: Some("1999-03-31".to_string()),
            vote_average: 8.2,
            ..MovieSummary::default()
        };
        let card = MovieCardModel::from(&movie);
        assert_eq!(card.year, Some(1999));
        assert_eq!(card.vote, "8.2");
        assert_eq!(
            card.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/m.jpg")
        );
    }

    #[test]
    fn card_without_poster_has_no_url() {
        let card = MovieCardModel::from(&MovieSummary::default());
        assert!(card.poster_url.is_none());
        assert!(card.year.is_none());
    }
}
