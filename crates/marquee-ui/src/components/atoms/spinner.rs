//! Loading indicator.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SpinnerProps {
    #[prop_or(AttrValue::Static("Loading"))]
    pub label: AttrValue,
}

#[function_component(Spinner)]
pub(crate) fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="loading loading-spinner loading-lg"></span>
            <span class="sr-only">{props.label.clone()}</span>
        </div>
    }
}
