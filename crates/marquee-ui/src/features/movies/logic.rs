//! Derived display data for the movie detail page.

use crate::core::format::{
    NOT_AVAILABLE, format_runtime, format_usd, format_vote, rating_badge, release_year,
};
use crate::features::movies::state::MoviePage;
use marquee_api_models::images::{ImageSize, image_url};
use marquee_api_models::{CastMember, CrewMember, ProductionCompany, TmdbId, Video};

/// Number of billed cast members shown.
pub const TOP_CAST_LEN: usize = 8;
/// Number of production companies shown.
pub const STUDIOS_LEN: usize = 4;

const YOUTUBE: &str = "YouTube";
const TRAILER: &str = "Trailer";

/// Watch URL for the best trailer: an official `YouTube` trailer, then any
/// `YouTube` trailer, then any `YouTube` video.
#[must_use]
pub fn trailer_url(videos: &[Video]) -> Option<String> {
    let youtube = || videos.iter().filter(|video| video.site == YOUTUBE);
    youtube()
        .find(|video| video.kind == TRAILER && video.name.contains("Official"))
        .or_else(|| youtube().find(|video| video.kind == TRAILER))
        .or_else(|| youtube().next())
        .map(|video| format!("https://www.youtube.com/watch?v={}", video.key))
}

/// First crew member credited as director.
#[must_use]
pub fn director(crew: &[CrewMember]) -> Option<&CrewMember> {
    crew.iter().find(|member| member.job == "Director")
}

/// Crew members credited for writing or screenplay, in upstream order.
#[must_use]
pub fn writers(crew: &[CrewMember]) -> Vec<&CrewMember> {
    crew.iter()
        .filter(|member| member.job == "Writer" || member.job == "Screenplay")
        .collect()
}

/// First [`TOP_CAST_LEN`] billed cast members.
#[must_use]
pub fn top_cast(cast: &[CastMember]) -> &[CastMember] {
    &cast[..cast.len().min(TOP_CAST_LEN)]
}

/// First [`STUDIOS_LEN`] production companies.
#[must_use]
pub fn studios(companies: &[ProductionCompany]) -> &[ProductionCompany] {
    &companies[..companies.len().min(STUDIOS_LEN)]
}

/// Studio row on the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioTile {
    /// Company id, used as the row key.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Small logo URL.
    pub logo_url: Option<String>,
}

/// Cast tile on the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastTile {
    /// Person id for the profile link.
    pub person_id: TmdbId,
    /// Performer name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
    /// Profile image URL.
    pub photo_url: Option<String>,
}

/// Everything the detail view renders, precomputed from a loaded page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieDetailView {
    /// Movie title.
    pub title: String,
    /// Tagline, if any.
    pub tagline: Option<String>,
    /// Release year.
    pub year: Option<i32>,
    /// Formatted runtime.
    pub runtime: String,
    /// Content rating badge.
    pub rating: &'static str,
    /// Vote average to one decimal.
    pub vote: String,
    /// Genre names.
    pub genres: Vec<String>,
    /// Plot synopsis.
    pub overview: String,
    /// Poster URL.
    pub poster_url: Option<String>,
    /// Backdrop URL.
    pub backdrop_url: Option<String>,
    /// Trailer watch URL.
    pub trailer_url: Option<String>,
    /// Director name.
    pub director: Option<String>,
    /// Writer names.
    pub writers: Vec<String>,
    /// Top billed cast.
    pub cast: Vec<CastTile>,
    /// Formatted budget.
    pub budget: String,
    /// Formatted revenue.
    pub revenue: String,
    /// Release status, e.g. `Released`.
    pub status: String,
    /// Upper-cased original language code.
    pub language: String,
    /// Leading production companies.
    pub studios: Vec<StudioTile>,
}

impl MovieDetailView {
    /// Derive display data from a loaded page.
    #[must_use]
    pub fn from_page(page: &MoviePage) -> Self {
        let details = &page.details;
        Self {
            title: details.title.clone(),
            tagline: details.tagline.clone().filter(|tagline| !tagline.is_empty()),
            year: release_year(details.release_date.as_deref()),
            runtime: format_runtime(details.runtime),
            rating: rating_badge(details.adult),
            vote: format_vote(details.vote_average),
            genres: details.genres.iter().map(|genre| genre.name.clone()).collect(),
            overview: details.overview.clone().unwrap_or_default(),
            poster_url: image_url(details.poster_path.as_deref(), ImageSize::W500),
            backdrop_url: image_url(details.backdrop_path.as_deref(), ImageSize::Original),
            trailer_url: trailer_url(&page.videos),
            director: director(&page.credits.crew).map(|member| member.name.clone()),
            writers: writers(&page.credits.crew)
                .into_iter()
                .map(|member| member.name.clone())
                .collect(),
            cast: top_cast(&page.credits.cast)
                .iter()
                .map(|member| CastTile {
                    person_id: member.id,
                    name: member.name.clone(),
                    character: member.character.clone(),
                    photo_url: image_url(member.profile_path.as_deref(), ImageSize::W185),
                })
                .collect(),
            budget: format_usd(details.budget),
            revenue: format_usd(details.revenue),
            status: non_blank_or_na(details.status.as_deref()),
            language: non_blank_or_na(details.original_language.as_deref()).to_uppercase(),
            studios: studios(&details.production_companies)
                .iter()
                .map(|company| StudioTile {
                    id: company.id,
                    name: company.name.clone(),
                    logo_url: image_url(company.logo_path.as_deref(), ImageSize::W92),
                })
                .collect(),
        }
    }
}

fn non_blank_or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, name: &str, site: &str, kind: &str) -> Video {
        Video {
            id: key.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            site: site.to_string(),
            kind: kind.to_string(),
            official: false,
        }
    }

    fn crew(id: TmdbId, name: &str, job: &str) -> CrewMember {
        CrewMember {
            id,
            name: name.to_string(),
            job: job.to_string(),
            department: None,
            profile_path: None,
        }
    }

    #[test]
    fn official_trailer_wins() {
        let videos = vec![
            video("clip", "Behind the scenes", "YouTube", "Featurette"),
            video("t1", "Teaser Trailer", "YouTube", "Trailer"),
            video("vim", "Official Trailer", "Vimeo", "Trailer"),
            video("t2", "Official Trailer 2", "YouTube", "Trailer"),
        ];
        assert_eq!(
            trailer_url(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=t2")
        );
    }

    #[test]
    fn trailer_falls_back_to_any_youtube_video() {
        let videos = vec![
            video("vim", "Official Trailer", "Vimeo", "Trailer"),
            video("clip", "Clip", "YouTube", "Clip"),
        ];
        assert_eq!(
            trailer_url(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=clip")
        );
        assert!(trailer_url(&[]).is_none());
    }

    #[test]
    fn crew_roles_are_picked_out() {
        let crew = vec![
            crew(1, "Cinematographer", "Director of Photography"),
            crew(2, "Lana", "Director"),
            crew(3, "Lilly", "Director"),
            crew(4, "Writer A", "Writer"),
            crew(5, "Writer B", "Screenplay"),
            crew(6, "Novelist", "Novel"),
        ];
        assert_eq!(director(&crew).map(|m| m.name.as_str()), Some("Lana"));
        let names: Vec<_> = writers(&crew).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Writer A", "Writer B"]);
    }

    #[test]
    fn top_cast_is_capped() {
        let cast: Vec<CastMember> = (0..12)
            .map(|id| CastMember {
                id,
                name: format!("Actor {id}"),
                character: None,
                profile_path: None,
                order: None,
                credit_id: None,
            })
            .collect();
        assert_eq!(top_cast(&cast).len(), TOP_CAST_LEN);
        assert_eq!(top_cast(&cast[..3]).len(), 3);
    }

    #[test]
    fn studios_are_capped_and_logos_sized() {
        let companies: Vec<ProductionCompany> = (0..6)
            .map(|id| ProductionCompany {
                id,
                name: format!("Studio {id}"),
                logo_path: (id % 2 == 0).then(|| format!("/logo-{id}.png")),
            })
            .collect();
        assert_eq!(studios(&companies).len(), STUDIOS_LEN);
        assert_eq!(studios(&companies[..2]).len(), 2);
        assert!(studios(&[]).is_empty());

        let tiles: Vec<_> = studios(&companies)
            .iter()
            .map(|company| image_url(company.logo_path.as_deref(), ImageSize::W92))
            .collect();
        assert_eq!(
            tiles[0].as_deref(),
            Some("https://image.tmdb.org/t/p/w92/logo-0.png")
        );
        assert_eq!(tiles[1], None);
    }

    #[test]
    fn blank_status_and_language_read_as_unavailable() {
        assert_eq!(non_blank_or_na(Some("Released")), "Released");
        assert_eq!(non_blank_or_na(Some(" ")), NOT_AVAILABLE);
        assert_eq!(non_blank_or_na(None), NOT_AVAILABLE);
    }
}
