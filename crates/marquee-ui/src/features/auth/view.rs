//! Sign-in page: provider buttons and the create-account form.

use crate::app::{Route, dispatch_action};
use crate::core::auth::{AuthAction, AuthProvider, AuthStatus, select_auth_error};
use crate::core::store::AppStore;
use crate::features::auth::flow::{create_account, sign_in};
use crate::features::auth::service::{
    CREATE_ACCOUNT_DELAY_MS, MockAuthService, NewAccount, SIGN_IN_DELAY_MS, SignInInput,
};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

fn browser_service() -> MockAuthService<fn() -> f64> {
    MockAuthService::new(js_sys::Math::random)
}

fn store_dispatcher() -> impl Fn(AuthAction) {
    let dispatch = Dispatch::<AppStore>::new();
    move |action| dispatch_action(&dispatch, action)
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

#[function_component(SignInPage)]
pub(crate) fn sign_in_page() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let signing_up = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);

    if store.auth.status() == AuthStatus::Authenticated {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }
    let busy = store.auth.loading;

    let on_provider = |provider: AuthProvider| {
        Callback::from(move |_: MouseEvent| {
            spawn_local(async move {
                sign_in(
                    &browser_service(),
                    provider,
                    SignInInput::default(),
                    TimeoutFuture::new(SIGN_IN_DELAY_MS),
                    store_dispatcher(),
                )
                .await;
            });
        })
    };

    let on_create = {
        let (name, email, password, confirm) =
            (name.clone(), email.clone(), password.clone(), confirm.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let account = NewAccount {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm).clone(),
            };
            spawn_local(async move {
                create_account(
                    &browser_service(),
                    account,
                    TimeoutFuture::new(CREATE_ACCOUNT_DELAY_MS),
                    store_dispatcher(),
                )
                .await;
            });
        })
    };

    let toggle_mode = {
        let signing_up = signing_up.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch_action(&dispatch, AuthAction::ClearError);
            signing_up.set(!*signing_up);
        })
    };

    let error = select_auth_error(&store.auth).map(|message| {
        let dispatch = dispatch.clone();
        html! {
            <div class="alert alert-error" role="alert">
                <span>{message.to_string()}</span>
                <button class="btn btn-ghost btn-sm" onclick={Callback::from(move |_: MouseEvent| {
                    dispatch_action(&dispatch, AuthAction::ClearError);
                })}>{"Dismiss"}</button>
            </div>
        }
    });

    let panel = if *signing_up {
        html! {
            <form class="signup-form" onsubmit={on_create}>
                <label>{"Name"}<input type="text" value={(*name).clone()} oninput={text_input(&name)} /></label>
                <label>{"Email"}<input type="email" value={(*email).clone()} oninput={text_input(&email)} /></label>
                <label>{"Password"}<input type="password" value={(*password).clone()} oninput={text_input(&password)} /></label>
                <label>{"Confirm password"}<input type="password" value={(*confirm).clone()} oninput={text_input(&confirm)} /></label>
                <button class="btn btn-primary" type="submit" disabled={busy}>
                    {if busy { "Creating account..." } else { "Create your account" }}
                </button>
            </form>
        }
    } else {
        html! {
            <div class="providers">
                { for AuthProvider::ALL.into_iter().map(|provider| html! {
                    <button class="btn btn-outline" disabled={busy} onclick={on_provider(provider)}>
                        {format!("Sign in with {}", provider.label())}
                    </button>
                }) }
            </div>
        }
    };

    html! {
        <section class="sign-in">
            <h1>{if *signing_up { "Create account" } else { "Sign in" }}</h1>
            {error.unwrap_or_default()}
            {panel}
            {if busy { html! { <p class="muted">{"Signing you in..."}</p> } } else { html! {} }}
            <button class="btn btn-link" onclick={toggle_mode}>
                {if *signing_up { "Already have an account? Sign in" } else { "Create an account" }}
            </button>
        </section>
    }
}
