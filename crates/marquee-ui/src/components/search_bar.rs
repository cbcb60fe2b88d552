//! Debounced movie search with a suggestion dropdown.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Issue one suggestion query per debounce window; results only land when
//!   their ticket is still the latest.

use crate::app::{GatewayCtx, Route};
use crate::core::search::{SUGGESTION_DEBOUNCE_MS, SuggestionState, dismiss};
use crate::features::home::state::MovieCardModel;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SearchBar)]
pub(crate) fn search_bar() -> Html {
    let input = use_state(String::new);
    let suggestions = use_mut_ref(SuggestionState::default);
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let refresh = use_force_update();
    let gateway_ctx = use_context::<GatewayCtx>();
    let navigator = use_navigator();

    let oninput = {
        let input = input.clone();
        let suggestions = suggestions.clone();
        let timer = timer.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: InputEvent| {
            let Some(element) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let next = element.value();
            input.set(next.clone());
            if let Some(timeout) = timer.borrow_mut().take() {
                drop(timeout);
            }
            let suggestions = suggestions.clone();
            let refresh = refresh.clone();
            let gateway_ctx = gateway_ctx.clone();
            *timer.borrow_mut() = Some(Timeout::new(SUGGESTION_DEBOUNCE_MS, move || {
                let ticket = suggestions.borrow_mut().issue(&next);
                refresh.force_update();
                let (Some(ticket), Some(ctx)) = (ticket, gateway_ctx) else {
                    return;
                };
                spawn_local(async move {
                    let results = ctx.gateway.search_movies(ticket.query()).await;
                    if suggestions.borrow_mut().resolve(&ticket, results) {
                        refresh.force_update();
                    }
                });
            }));
        })
    };

    let choose = {
        let input = input.clone();
        let suggestions = suggestions.clone();
        let refresh = refresh.clone();
        Callback::from(move |id| {
            input.set(String::new());
            dismiss(&mut *timer.borrow_mut(), &mut *suggestions.borrow_mut());
            refresh.force_update();
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Movie { id });
            }
        })
    };

    let state = suggestions.borrow();
    let dropdown = if state.query().is_empty() {
        html! {}
    } else if state.suggestions().is_empty() {
        html! {
            <ul class="suggestions">
                <li class="muted">{if state.is_pending() { "Searching..." } else { "No matches" }}</li>
            </ul>
        }
    } else {
        html! {
            <ul class="suggestions" role="listbox">
                { for state.suggestions().iter().map(|movie| {
                    let card = MovieCardModel::from(movie);
                    let choose = choose.clone();
                    let id = card.id;
                    html! {
                        <li key={id} role="option" onclick={Callback::from(move |_: MouseEvent| choose.emit(id))}>
                            {card.poster_url.clone().map(|src| html! {
                                <img class="thumb" src={src} alt="" />
                            }).unwrap_or_default()}
                            <span class="title">{card.title.clone()}</span>
                            <span class="year">{card.year.map(|year| year.to_string()).unwrap_or_default()}</span>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search movies"
                aria-label="Search movies"
                value={(*input).clone()}
                oninput={oninput}
            />
            {dropdown}
        </div>
    }
}
