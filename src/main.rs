use yew::prelude::*;

use aurora_dashboard::components::{
    ConditionsPanel, ErrorNotice, ForecastPanel, HistoricalPanel, LoadingIndicator, SearchBar,
};
use aurora_dashboard::hooks::use_search::use_aurora_search;

#[function_component(App)]
fn app() -> Html {
    let search = use_aurora_search();

    let on_search = search.search.clone();
    let error_message = search.state.error().map(str::to_string);

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Aurora Visibility Dashboard"}</h1>
            </header>

            <main class="app-main">
                <section class="search-section">
                    <SearchBar {on_search} />
                    <LoadingIndicator active={search.state.is_loading()} />
                    <ErrorNotice message={error_message} />
                </section>

                if let Some(report) = &search.report {
                    <section class="data-section">
                        <h2>{"Current Conditions"}</h2>
                        <ConditionsPanel report={report.clone()} />
                    </section>

                    <section class="data-section">
                        <h2>{"Historical Visibility"}</h2>
                        <HistoricalPanel report={report.clone()} />
                    </section>

                    <section class="data-section">
                        <h2>{"Aurora Forecast"}</h2>
                        <ForecastPanel report={report.clone()} />
                    </section>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
