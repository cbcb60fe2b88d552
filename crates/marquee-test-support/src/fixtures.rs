//! Builders for upstream payloads used across suites.

use marquee_api_models::{
    CastMember, Credits, CrewMember, Genre, MovieDetails, MovieSummary, Person, PersonCastCredit,
    PersonCredits, ProductionCompany, ResultsPage, TmdbId, Video,
};
use serde::Serialize;

/// Listing record with a poster and sensible scores.
#[must_use]
pub fn movie_summary(id: TmdbId, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: format!("{title} overview"),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: Some("1999-03-31".to_string()),
        vote_average: 7.5,
        vote_count: 1200,
        popularity: 42.0,
        adult: false,
        genre_ids: vec![28],
    }
}

/// Detail record with runtime, money figures and two genres.
#[must_use]
pub fn movie_details(id: TmdbId, title: &str) -> MovieDetails {
    MovieDetails {
        id,
        title: title.to_string(),
        tagline: Some("Free your mind.".to_string()),
        overview: Some(format!("{title} overview")),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: Some(format!("/backdrop-{id}.jpg")),
        release_date: Some("1999-03-31".to_string()),
        runtime: Some(136),
        budget: Some(63_000_000),
        revenue: Some(463_517_383),
        vote_average: 8.2,
        vote_count: 24_000,
        popularity: 88.5,
        adult: false,
        genres: vec![
            Genre {
                id: 28,
                name: "Action".to_string(),
            },
            Genre {
                id: 878,
                name: "Science Fiction".to_string(),
            },
        ],
        status: Some("Released".to_string()),
        original_language: Some("en".to_string()),
        production_companies: vec![
            production_company(79, "Village Roadshow Pictures", Some("/village.png")),
            production_company(174, "Warner Bros. Pictures", None),
        ],
    }
}

/// Production company record.
#[must_use]
pub fn production_company(id: u64, name: &str, logo_path: Option<&str>) -> ProductionCompany {
    ProductionCompany {
        id,
        name: name.to_string(),
        logo_path: logo_path.map(str::to_string),
    }
}

/// Video record.
#[must_use]
pub fn video(key: &str, name: &str, site: &str, kind: &str) -> Video {
    Video {
        id: format!("video-{key}"),
        key: key.to_string(),
        name: name.to_string(),
        site: site.to_string(),
        kind: kind.to_string(),
        official: name.contains("Official"),
    }
}

/// Cast entry.
#[must_use]
pub fn cast_member(id: TmdbId, name: &str, character: &str) -> CastMember {
    CastMember {
        id,
        name: name.to_string(),
        character: Some(character.to_string()),
        profile_path: Some(format!("/profile-{id}.jpg")),
        order: None,
        credit_id: Some(format!("credit-{id}")),
    }
}

/// Crew entry.
#[must_use]
pub fn crew_member(id: TmdbId, name: &str, job: &str) -> CrewMember {
    CrewMember {
        id,
        name: name.to_string(),
        job: job.to_string(),
        department: None,
        profile_path: None,
    }
}

/// Credits with a director, two writers and `cast_len` billed performers.
#[must_use]
pub fn credits(cast_len: u64) -> Credits {
    Credits {
        cast: (1..=cast_len)
            .map(|id| cast_member(id, &format!("Actor {id}"), &format!("Role {id}")))
            .collect(),
        crew: vec![
            crew_member(900, "Lana Wachowski", "Director"),
            crew_member(901, "Lilly Wachowski", "Writer"),
            crew_member(902, "Script Doctor", "Screenplay"),
            crew_member(903, "Bill Pope", "Director of Photography"),
        ],
    }
}

/// Person profile.
#[must_use]
pub fn person(id: TmdbId, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        biography: Some(format!("{name} biography")),
        birthday: Some("1964-09-02".to_string()),
        deathday: None,
        place_of_birth: Some("Beirut, Lebanon".to_string()),
        profile_path: Some(format!("/person-{id}.jpg")),
        known_for_department: Some("Acting".to_string()),
        popularity: 55.0,
    }
}

/// Acting credit for a person.
#[must_use]
pub fn person_cast_credit(
    id: TmdbId,
    title: &str,
    popularity: f64,
    release_date: Option<&str>,
    poster: bool,
) -> PersonCastCredit {
    PersonCastCredit {
        id,
        title: title.to_string(),
        character: Some(format!("{title} lead")),
        poster_path: poster.then(|| format!("/poster-{id}.jpg")),
        release_date: release_date.map(str::to_string),
        popularity,
        vote_average: 7.0,
        credit_id: Some(format!("credit-{id}")),
    }
}

/// Person credits holding only the given cast entries.
#[must_use]
pub fn person_credits(cast: Vec<PersonCastCredit>) -> PersonCredits {
    PersonCredits {
        cast,
        crew: Vec::new(),
    }
}

/// Wrap items in the upstream paged envelope.
#[must_use]
pub fn results_page<T>(results: Vec<T>) -> ResultsPage<T> {
    ResultsPage {
        page: 1,
        results,
        total_pages: 1,
        total_results: 0,
    }
}

/// Serialise a fixture into a response body.
///
/// # Panics
/// Panics when the value cannot be encoded; fixtures are always encodable.
#[must_use]
pub fn json_body<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| panic!("fixture should encode: {err}"))
}
