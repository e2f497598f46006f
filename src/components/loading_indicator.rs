use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    pub active: bool,
}

/// Spinner shown while a search sequence is in flight.
#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    if !props.active {
        return html! {};
    }

    html! {
        <div class="loading-indicator">
            <div class="spinner"></div>
            <p>{"Loading aurora data..."}</p>
        </div>
    }
}
