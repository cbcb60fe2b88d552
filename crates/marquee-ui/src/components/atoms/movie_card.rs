//! Poster card and grid for movie listings.

use crate::app::Route;
use crate::features::home::state::MovieCardModel;
use marquee_api_models::MovieSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: MovieCardModel,
    /// Optional trailing action, e.g. a remove button on the watchlist.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    html! {
        <article class="movie-card">
            <Link<Route> to={Route::Movie { id: movie.id }} classes="movie-card-link">
                {match movie.poster_url.clone() {
                    Some(src) => html! { <img class="poster" src={src} alt={movie.title.clone()} loading="lazy" /> },
                    None => html! { <div class="poster poster-missing">{"No image"}</div> },
                }}
                <div class="movie-card-meta">
                    <h3>{movie.title.clone()}</h3>
                    <span class="year">{movie.year.map(|year| year.to_string()).unwrap_or_default()}</span>
                    <span class="vote">{format!("★ {}", movie.vote)}</span>
                </div>
            </Link<Route>>
            { for props.children.iter() }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieGridProps {
    pub movies: Vec<MovieSummary>,
}

#[function_component(MovieGrid)]
pub(crate) fn movie_grid(props: &MovieGridProps) -> Html {
    html! {
        <div class="movie-grid">
            { for props.movies.iter().map(|movie| html! {
                <MovieCard key={movie.id} movie={MovieCardModel::from(movie)} />
            }) }
        </div>
    }
}
