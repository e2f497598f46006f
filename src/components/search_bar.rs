use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_city::use_city;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
}

/// City input with its search trigger. The typed value is persisted so a
/// revisit restores the last query.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let handle = use_city();

    let oninput = {
        let set_city = handle.set_city.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            set_city.emit(target.value());
        })
    };

    let onclick = {
        let city = handle.city.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(city.clone()))
    };

    html! {
        <div class="search-bar">
            <input
                class="city-input"
                type="text"
                placeholder="City name"
                value={handle.city.clone()}
                {oninput}
                aria-label="City to check aurora visibility for"
            />
            <button class="search-button" {onclick}>{"Search"}</button>
        </div>
    }
}
