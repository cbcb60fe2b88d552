//! Home page: popular movies grid.

use crate::app::GatewayCtx;
use crate::components::atoms::{EmptyState, MovieGrid, Spinner};
use crate::core::loadable::Loadable;
use crate::features::home::state::load_home;
use marquee_api_models::MovieSummary;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let popular = use_state(Loadable::<Vec<MovieSummary>>::default);
    let gateway_ctx = use_context::<GatewayCtx>();

    {
        let popular = popular.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = gateway_ctx {
                    spawn_local(async move {
                        popular.set(Loadable::Ready(load_home(&ctx.gateway).await));
                    });
                }
                || ()
            },
            (),
        );
    }

    let body = match &*popular {
        Loadable::Loading => html! { <Spinner label="Loading popular movies" /> },
        Loadable::Ready(movies) if movies.is_empty() => html! {
            <EmptyState title="Nothing to show" description={Some(AttrValue::from("Popular movies could not be loaded."))} />
        },
        Loadable::Ready(movies) => html! { <MovieGrid movies={movies.clone()} /> },
        Loadable::Failed(message) => html! { <EmptyState title={message.clone()} /> },
    };

    html! {
        <section class="home">
            <h1>{"Popular movies"}</h1>
            {body}
        </section>
    }
}
