use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Error region below the search bar; collapses to nothing when the last
/// search succeeded.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="search-error" role="alert">
                <p>{message}</p>
            </div>
        },
        None => html! {},
    }
}
