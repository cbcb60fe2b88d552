//! Movie detail page.

use crate::app::{GatewayCtx, Route, dispatch_derived};
use crate::components::atoms::{EmptyState, Spinner};
use crate::core::loadable::{LoadSequence, Loadable};
use crate::core::store::AppStore;
use crate::core::watchlist::{select_is_in_watchlist, toggle};
use crate::features::movies::logic::{CastTile, MovieDetailView, StudioTile};
use crate::features::movies::state::{MOVIE_NOT_FOUND, MoviePage as LoadedPage, load_movie_page};
use marquee_api_models::TmdbId;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct MoviePageProps {
    pub id: TmdbId,
}

#[function_component(MoviePage)]
pub(crate) fn movie_page(props: &MoviePageProps) -> Html {
    let page = use_state(Loadable::<LoadedPage>::default);
    let gateway_ctx = use_context::<GatewayCtx>();
    let loads = use_mut_ref(LoadSequence::default);
    let (store, dispatch) = use_store::<AppStore>();

    {
        let page = page.clone();
        use_effect_with_deps(
            move |id| {
                page.set(Loadable::Loading);
                let token = loads.borrow_mut().begin();
                if let Some(ctx) = gateway_ctx {
                    let id = *id;
                    let loads = loads.clone();
                    spawn_local(async move {
                        let loaded = load_movie_page(&ctx.gateway, id).await;
                        if loads.borrow().is_current(token) {
                            page.set(Loadable::from_option(loaded, MOVIE_NOT_FOUND));
                        }
                    });
                }
                move || loads.borrow_mut().cancel()
            },
            props.id,
        );
    }

    let loaded = match &*page {
        Loadable::Loading => return html! { <Spinner label="Loading movie" /> },
        Loadable::Failed(message) => {
            return html! {
                <EmptyState title={message.clone()}>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </EmptyState>
            };
        }
        Loadable::Ready(loaded) => loaded,
    };

    let view = MovieDetailView::from_page(loaded);
    let saved = select_is_in_watchlist(&store.watchlist, props.id);
    let on_toggle = {
        let summary = loaded.details.summary();
        Callback::from(move |_: MouseEvent| {
            let summary = summary.clone();
            dispatch_derived(&dispatch, move |state| toggle(&state.watchlist, summary));
        })
    };

    html! {
        <article class="movie-detail">
            {view.backdrop_url.clone().map(|src| html! {
                <div class="backdrop" style={format!("background-image: url('{src}')")}></div>
            }).unwrap_or_default()}
            <div class="movie-detail-body">
                {view.poster_url.clone().map(|src| html! {
                    <img class="poster" src={src} alt={view.title.clone()} />
                }).unwrap_or_default()}
                <div class="movie-detail-info">
                    <h1>
                        {view.title.clone()}
                        {view.year.map(|year| html! { <span class="year">{format!(" ({year})")}</span> }).unwrap_or_default()}
                    </h1>
                    {view.tagline.clone().map(|tagline| html! { <p class="tagline">{tagline}</p> }).unwrap_or_default()}
                    <div class="facts">
                        <span class="badge">{view.rating}</span>
                        <span>{view.runtime.clone()}</span>
                        <span>{format!("★ {}", view.vote)}</span>
                        <span>{view.genres.join(", ")}</span>
                    </div>
                    <p class="overview">{view.overview.clone()}</p>
                    <dl class="credits">
                        <dt>{"Director"}</dt>
                        <dd>{view.director.clone().unwrap_or_else(|| "N/A".to_string())}</dd>
                        <dt>{"Writers"}</dt>
                        <dd>{if view.writers.is_empty() { "N/A".to_string() } else { view.writers.join(", ") }}</dd>
                        <dt>{"Budget"}</dt>
                        <dd>{view.budget.clone()}</dd>
                        <dt>{"Revenue"}</dt>
                        <dd>{view.revenue.clone()}</dd>
                        <dt>{"Status"}</dt>
                        <dd>{view.status.clone()}</dd>
                        <dt>{"Original language"}</dt>
                        <dd>{view.language.clone()}</dd>
                    </dl>
                    {if view.studios.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <section class="studios">
                                <h2>{"Production companies"}</h2>
                                <ul>{ for view.studios.iter().map(studio_row) }</ul>
                            </section>
                        }
                    }}
                    <div class="actions">
                        {view.trailer_url.clone().map(|href| html! {
                            <a class="btn btn-primary" href={href} target="_blank" rel="noopener noreferrer">{"Watch trailer"}</a>
                        }).unwrap_or_default()}
                        <button class="btn" onclick={on_toggle}>
                            {if saved { "In watchlist" } else { "+ Add to watchlist" }}
                        </button>
                    </div>
                </div>
            </div>
            {if view.cast.is_empty() {
                html! {}
            } else {
                html! {
                    <section class="cast">
                        <h2>{"Top cast"}</h2>
                        <div class="cast-grid">
                            { for view.cast.iter().map(cast_tile) }
                        </div>
                    </section>
                }
            }}
        </article>
    }
}

fn cast_tile(member: &CastTile) -> Html {
    html! {
        <Link<Route> to={Route::Person { id: member.person_id }} classes="cast-tile">
            {match member.photo_url.clone() {
                Some(src) => html! { <img src={src} alt={member.name.clone()} loading="lazy" /> },
                None => html! { <div class="photo-missing"></div> },
            }}
            <strong>{member.name.clone()}</strong>
            {member.character.clone().map(|character| html! { <span class="muted">{character}</span> }).unwrap_or_default()}
        </Link<Route>>
    }
}

fn studio_row(studio: &StudioTile) -> Html {
    html! {
        <li key={studio.id} class="studio">
            {studio.logo_url.clone().map(|src| html! {
                <img class="logo" src={src} alt={studio.name.clone()} />
            }).unwrap_or_default()}
            <span>{studio.name.clone()}</span>
        </li>
    }
}
