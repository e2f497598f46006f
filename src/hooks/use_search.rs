use std::rc::Rc;
use yew::prelude::*;

use crate::models::aurora::AuroraReport;
use crate::services::aurora_api;
use wasm_bindgen_futures::spawn_local;

/// Message shown for every failed search; the concrete error goes to the
/// console only.
pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";

#[derive(Clone, PartialEq, Debug)]
pub enum SearchState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl SearchState {
    /// Returns true while a search sequence is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Returns the user-facing message if the last search failed
    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Trims raw search input; `None` means the search must not run.
pub fn normalize_query(raw: &str) -> Option<String> {
    let city = raw.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

/// Handle returned by the `use_aurora_search` hook
#[derive(Clone, PartialEq)]
pub struct SearchHandle {
    pub state: SearchState,
    /// Most recent successful report; left in place when a later search
    /// fails, so the error notice appears alongside the old data.
    pub report: Option<Rc<AuroraReport>>,
    pub search: Callback<String>,
}

#[hook]
pub fn use_aurora_search() -> SearchHandle {
    let state = use_state(|| SearchState::Idle);
    let report = use_state(|| None::<Rc<AuroraReport>>);
    let generation = use_mut_ref(|| 0u32); // In-flight guard

    let search = {
        let state = state.clone();
        let report = report.clone();
        let generation = generation.clone();

        Callback::from(move |raw: String| {
            let Some(city) = normalize_query(&raw) else {
                return; // Empty input: no request, no indicator
            };

            *generation.borrow_mut() += 1;
            let token = *generation.borrow();

            state.set(SearchState::Loading);

            let state = state.clone();
            let report = report.clone();
            let generation = generation.clone();

            spawn_local(async move {
                let outcome = aurora_api::fetch_report(&city).await;

                // A newer search owns the indicator now; drop this outcome
                if *generation.borrow() != token {
                    return;
                }

                match outcome {
                    Ok(new_report) => {
                        gloo::console::debug!(format!(
                            "Search '{}' loaded: {} historical, {} forecast records",
                            city,
                            new_report.historical.as_ref().map_or(0, Vec::len),
                            new_report.forecast.as_ref().map_or(0, Vec::len),
                        ));
                        report.set(Some(Rc::new(new_report)));
                        state.set(SearchState::Loaded);
                    }
                    Err(error) => {
                        gloo::console::error!(format!("Search '{city}' failed: {error}"));
                        state.set(SearchState::Error(SEARCH_ERROR_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    SearchHandle {
        state: (*state).clone(),
        report: (*report).clone(),
        search,
    }
}
