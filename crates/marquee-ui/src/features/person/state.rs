//! Person page loading.

use crate::core::loadable::Loadable;
use marquee_api_models::{PersonDetails, TmdbId};
use marquee_gateway::{HttpTransport, MovieGateway};

/// Message shown when the composed person call fails.
pub const PERSON_LOAD_FAILED: &str = "Failed to load person details";

/// Load the profile and credits as one unit.
pub async fn load_person_page<T: HttpTransport>(
    gateway: &MovieGateway<T>,
    id: TmdbId,
) -> Loadable<PersonDetails> {
    Loadable::from_option(gateway.fetch_person_details(id).await, PERSON_LOAD_FAILED)
}
