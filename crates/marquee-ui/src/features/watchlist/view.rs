//! Watchlist page: saved movies with remove and clear actions.

use crate::app::{Route, dispatch_action};
use crate::components::atoms::{EmptyState, MovieCard};
use crate::core::store::AppStore;
use crate::core::watchlist::{WatchlistAction, select_watchlist};
use crate::features::home::state::MovieCardModel;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(WatchlistPage)]
pub(crate) fn watchlist_page() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let items = select_watchlist(&store.watchlist);

    if items.is_empty() {
        return html! {
            <EmptyState title="Your watchlist is empty" description={Some(AttrValue::from("Save movies from their detail page to see them here."))}>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Browse popular movies"}</Link<Route>>
            </EmptyState>
        };
    }

    let on_clear = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch_action(&dispatch, WatchlistAction::Clear))
    };

    html! {
        <section class="watchlist">
            <header class="section-header">
                <h1>{format!("Your watchlist ({})", items.len())}</h1>
                <button class="btn btn-ghost" onclick={on_clear}>{"Clear all"}</button>
            </header>
            <div class="movie-grid">
                { for items.iter().map(|movie| {
                    let id = movie.id;
                    let dispatch = dispatch.clone();
                    let on_remove = Callback::from(move |_: MouseEvent| {
                        dispatch_action(&dispatch, WatchlistAction::Remove(id));
                    });
                    html! {
                        <MovieCard key={id} movie={MovieCardModel::from(movie)}>
                            <button class="btn btn-sm" onclick={on_remove}>{"Remove"}</button>
                        </MovieCard>
                    }
                }) }
            </div>
        </section>
    }
}
