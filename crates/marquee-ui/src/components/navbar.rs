//! Top navigation: brand, search, watchlist link and account menu.

use crate::app::{Route, dispatch_action};
use crate::components::search_bar::SearchBar;
use crate::core::auth::{AuthAction, select_user};
use crate::core::store::AppStore;
use crate::core::watchlist::select_watchlist;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let user = use_selector(|store: &AppStore| select_user(&store.auth).cloned());
    let saved = use_selector(|store: &AppStore| select_watchlist(&store.watchlist).len());
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        dispatch_action(&Dispatch::<AppStore>::new(), AuthAction::Logout);
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <header class="navbar">
            <Link<Route> to={Route::Home} classes="brand">{"Marquee"}</Link<Route>>
            <SearchBar />
            <nav class="navbar-actions">
                <Link<Route> to={Route::Watchlist} classes="btn btn-ghost">
                    {"Watchlist"}
                    {if *saved > 0 {
                        html! { <span class="badge">{*saved}</span> }
                    } else {
                        html! {}
                    }}
                </Link<Route>>
                {match (*user).clone() {
                    Some(user) => html! {
                        <div class="account">
                            <img class="avatar" src={user.avatar_url.clone()} alt={user.name.clone()} />
                            <span class="account-name">{user.name}</span>
                            <button class="btn btn-ghost" onclick={on_logout}>{"Sign out"}</button>
                        </div>
                    },
                    None => html! {
                        <Link<Route> to={Route::SignIn} classes="btn btn-primary">{"Sign in"}</Link<Route>>
                    },
                }}
            </nav>
        </header>
    }
}
