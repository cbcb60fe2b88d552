//! Application shell: logging, store hydration, gateway context and routing.

use crate::components::atoms::EmptyState;
use crate::components::navbar::Navbar;
use crate::features::auth::view::SignInPage;
use crate::features::home::view::HomePage;
use crate::features::movies::view::MoviePage;
use crate::features::person::view::PersonPage;
use crate::features::watchlist::view::WatchlistPage;
use marquee_telemetry::{LoggingConfig, init_logging};
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) use api::GatewayCtx;
pub(crate) use preferences::{dispatch_action, dispatch_derived};
pub(crate) use routes::Route;

mod api;
mod preferences;
mod routes;

#[function_component(MarqueeApp)]
pub(crate) fn marquee_app() -> Html {
    let gateway_ctx = use_memo(|_| GatewayCtx::from_build_env(), ());

    html! {
        <ContextProvider<GatewayCtx> context={(*gateway_ctx).clone()}>
            <BrowserRouter>
                <Navbar />
                <main class="page">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<GatewayCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Movie { id } => html! { <MoviePage id={id} /> },
        Route::Person { id } => html! { <PersonPage id={id} /> },
        Route::Watchlist => html! { <WatchlistPage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::NotFound => html! {
            <EmptyState title="Page not found" description={Some(AttrValue::from("Use the navigation to get back to the catalog."))}>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Go home"}</Link<Route>>
            </EmptyState>
        },
    }
}

/// Entry point for wasm startup.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        gloo::console::warn!(err.to_string());
    }
    preferences::hydrate_store();
    tracing::info!(build = marquee_telemetry::build_sha(), "marquee ui starting");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MarqueeApp>::with_root(root).render();
    } else {
        yew::Renderer::<MarqueeApp>::new().render();
    }
}
