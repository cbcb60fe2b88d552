//! Routing definitions for the Marquee UI.
use marquee_api_models::TmdbId;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/movie/:id")]
    Movie { id: TmdbId },
    #[at("/person/:id")]
    Person { id: TmdbId },
    #[at("/watchlist")]
    Watchlist,
    #[at("/signin")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}
