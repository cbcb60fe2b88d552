//! Derived display data for the person page.

use crate::core::format::parse_date;
use chrono::{Datelike, NaiveDate};
use marquee_api_models::{Person, PersonCastCredit, PersonCredits};
use std::cmp::Ordering;

/// Number of credits in the "known for" strip; also the filmography threshold.
pub const KNOWN_FOR_LEN: usize = 12;

/// Age in whole years at death, or at `today` when alive.
#[must_use]
pub fn age(person: &Person, today: NaiveDate) -> Option<u32> {
    let born = parse_date(person.birthday.as_deref())?;
    let until = parse_date(person.deathday.as_deref()).unwrap_or(today);
    let mut years = until.year() - born.year();
    if (until.month(), until.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Cast credits with a poster, most popular first, capped at [`KNOWN_FOR_LEN`].
#[must_use]
pub fn known_for(credits: &PersonCredits) -> Vec<&PersonCastCredit> {
    let mut picked: Vec<_> = credits
        .cast
        .iter()
        .filter(|credit| credit.poster_path.is_some())
        .collect();
    picked.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    picked.truncate(KNOWN_FOR_LEN);
    picked
}

/// All cast credits, newest release first, undated credits last.
#[must_use]
pub fn filmography(credits: &PersonCredits) -> Vec<&PersonCastCredit> {
    let mut sorted: Vec<_> = credits.cast.iter().collect();
    sorted.sort_by(|a, b| {
        match (
            parse_date(a.release_date.as_deref()),
            parse_date(b.release_date.as_deref()),
        ) {
            (Some(left), Some(right)) => right.cmp(&left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

/// The full filmography is listed only beyond the "known for" strip.
#[must_use]
pub fn shows_filmography(credits: &PersonCredits) -> bool {
    credits.cast.len() > KNOWN_FOR_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(birthday: Option<&str>, deathday: Option<&str>) -> Person {
        Person {
            id: 1,
            name: "Someone".to_string(),
            biography: None,
            birthday: birthday.map(str::to_string),
            deathday: deathday.map(str::to_string),
            place_of_birth: None,
            profile_path: None,
            known_for_department: None,
            popularity: 0.0,
        }
    }

    fn credit(id: u64, popularity: f64, release: Option<&str>, poster: bool) -> PersonCastCredit {
        PersonCastCredit {
            id,
            title: format!("Film {id}"),
            character: None,
            poster_path: poster.then(|| format!("/p{id}.jpg")),
            release_date: release.map(str::to_string),
            popularity,
            vote_average: 0.0,
            credit_id: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn age_waits_for_the_anniversary() {
        let someone = person(Some("1964-09-02"), None);
        assert_eq!(age(&someone, date(2024, 9, 1)), Some(59));
        assert_eq!(age(&someone, date(2024, 9, 2)), Some(60));
    }

    #[test]
    fn age_stops_at_death() {
        let someone = person(Some("1930-08-25"), Some("2020-10-31"));
        assert_eq!(age(&someone, date(2030, 1, 1)), Some(90));
        assert_eq!(age(&person(None, None), date(2030, 1, 1)), None);
    }

    #[test]
    fn known_for_needs_posters_and_sorts_by_popularity() {
        let credits = PersonCredits {
            cast: vec![
                credit(1, 5.0, None, true),
                credit(2, 50.0, None, false),
                credit(3, 20.0, None, true),
            ],
            crew: Vec::new(),
        };
        let ids: Vec<_> = known_for(&credits).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn filmography_puts_undated_last() {
        let credits = PersonCredits {
            cast: vec![
                credit(1, 0.0, Some("2001-01-01"), true),
                credit(2, 0.0, None, true),
                credit(3, 0.0, Some("2010-06-15"), true),
                credit(4, 0.0, Some(""), true),
            ],
            crew: Vec::new(),
        };
        let ids: Vec<_> = filmography(&credits).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert!(!shows_filmography(&credits));
    }
}
