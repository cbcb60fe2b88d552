//! Movie detail loading.

use futures_util::future::join3;
use marquee_api_models::{Credits, MovieDetails, TmdbId, Video};
use marquee_gateway::{HttpTransport, MovieGateway};

/// Message shown when the detail record is unavailable.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Data joined for one movie page.
#[derive(Clone, Debug, PartialEq)]
pub struct MoviePage {
    /// Detail record.
    pub details: MovieDetails,
    /// Videos; empty when the videos request failed.
    pub videos: Vec<Video>,
    /// Cast and crew; empty when the credits request failed.
    pub credits: Credits,
}

/// Fetch details, videos and credits concurrently.
///
/// Returns `None` only when the detail record is missing; the other two
/// concerns fall back to their empty sentinels.
pub async fn load_movie_page<T: HttpTransport>(
    gateway: &MovieGateway<T>,
    id: TmdbId,
) -> Option<MoviePage> {
    let (details, videos, credits) = join3(
        gateway.fetch_movie_details(id),
        gateway.fetch_movie_videos(id),
        gateway.fetch_movie_credits(id),
    )
    .await;
    Some(MoviePage {
        details: details?,
        videos,
        credits,
    })
}
