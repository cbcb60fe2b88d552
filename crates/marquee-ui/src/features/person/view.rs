//! Person detail page.

use crate::app::{GatewayCtx, Route};
use crate::components::atoms::{EmptyState, Spinner};
use crate::core::format::release_year;
use crate::core::loadable::{LoadSequence, Loadable};
use crate::features::person::logic::{age, filmography, known_for, shows_filmography};
use crate::features::person::state::load_person_page;
use chrono::Utc;
use marquee_api_models::images::{ImageSize, image_url};
use marquee_api_models::{PersonCastCredit, PersonDetails, TmdbId};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PersonPageProps {
    pub id: TmdbId,
}

#[function_component(PersonPage)]
pub(crate) fn person_page(props: &PersonPageProps) -> Html {
    let details = use_state(Loadable::<PersonDetails>::default);
    let gateway_ctx = use_context::<GatewayCtx>();
    let navigator = use_navigator();
    let loads = use_mut_ref(LoadSequence::default);

    {
        let details = details.clone();
        use_effect_with_deps(
            move |id| {
                details.set(Loadable::Loading);
                let token = loads.borrow_mut().begin();
                if let Some(ctx) = gateway_ctx {
                    let id = *id;
                    let loads = loads.clone();
                    spawn_local(async move {
                        let loaded = load_person_page(&ctx.gateway, id).await;
                        if loads.borrow().is_current(token) {
                            details.set(loaded);
                        }
                    });
                }
                move || loads.borrow_mut().cancel()
            },
            props.id,
        );
    }

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.back();
        }
    });

    let loaded = match &*details {
        Loadable::Loading => return html! { <Spinner label="Loading person" /> },
        Loadable::Failed(message) => {
            return html! {
                <EmptyState title={message.clone()}>
                    <button class="btn btn-primary" onclick={on_back}>{"Go back"}</button>
                </EmptyState>
            };
        }
        Loadable::Ready(loaded) => loaded,
    };

    let person = &loaded.person;
    let age_years = age(person, Utc::now().date_naive());
    let highlights = known_for(&loaded.credits);

    html! {
        <article class="person-detail">
            <button class="btn btn-ghost" onclick={on_back}>{"← Back"}</button>
            <div class="person-header">
                {image_url(person.profile_path.as_deref(), ImageSize::W500).map(|src| html! {
                    <img class="profile" src={src} alt={person.name.clone()} />
                }).unwrap_or_default()}
                <div>
                    <h1>{person.name.clone()}</h1>
                    <dl class="facts">
                        {person.known_for_department.clone().map(|department| html! {
                            <><dt>{"Known for"}</dt><dd>{department}</dd></>
                        }).unwrap_or_default()}
                        {person.birthday.clone().map(|birthday| html! {
                            <><dt>{"Born"}</dt><dd>{birthday}</dd></>
                        }).unwrap_or_default()}
                        {person.deathday.clone().map(|deathday| html! {
                            <><dt>{"Died"}</dt><dd>{deathday}</dd></>
                        }).unwrap_or_default()}
                        {age_years.map(|years| html! {
                            <><dt>{"Age"}</dt><dd>{years}</dd></>
                        }).unwrap_or_default()}
                        {person.place_of_birth.clone().map(|place| html! {
                            <><dt>{"Place of birth"}</dt><dd>{place}</dd></>
                        }).unwrap_or_default()}
                    </dl>
                    {person.biography.clone().filter(|bio| !bio.is_empty()).map(|bio| html! {
                        <p class="biography">{bio}</p>
                    }).unwrap_or_default()}
                </div>
            </div>
            {if highlights.is_empty() {
                html! {}
            } else {
                html! {
                    <section class="known-for">
                        <h2>{"Known for"}</h2>
                        <div class="movie-grid">
                            { for highlights.into_iter().map(known_for_card) }
                        </div>
                    </section>
                }
            }}
            {if shows_filmography(&loaded.credits) {
                html! {
                    <section class="filmography">
                        <h2>{"Filmography"}</h2>
                        <ul>
                            { for filmography(&loaded.credits).into_iter().map(filmography_row) }
                        </ul>
                    </section>
                }
            } else {
                html! {}
            }}
        </article>
    }
}

fn known_for_card(credit: &PersonCastCredit) -> Html {
    html! {
        <Link<Route> to={Route::Movie { id: credit.id }} classes="movie-card">
            {image_url(credit.poster_path.as_deref(), ImageSize::W185).map(|src| html! {
                <img class="poster" src={src} alt={credit.title.clone()} loading="lazy" />
            }).unwrap_or_default()}
            <h3>{credit.title.clone()}</h3>
            {credit.character.clone().map(|character| html! { <span class="muted">{character}</span> }).unwrap_or_default()}
        </Link<Route>>
    }
}

fn filmography_row(credit: &PersonCastCredit) -> Html {
    let year = release_year(credit.release_date.as_deref())
        .map_or_else(|| "TBA".to_string(), |year| year.to_string());
    html! {
        <li key={credit.credit_id.clone().unwrap_or_else(|| credit.id.to_string())}>
            <span class="year">{year}</span>
            <Link<Route> to={Route::Movie { id: credit.id }}>{credit.title.clone()}</Link<Route>>
            {credit.character.clone().map(|character| html! { <span class="muted">{format!(" as {character}")}</span> }).unwrap_or_default()}
        </li>
    }
}
