use gloo_storage::Storage;
use yew::prelude::*;

const STORAGE_KEY: &str = "city";

/// Handle returned by the `use_city` hook
#[derive(Clone, PartialEq)]
pub struct CityHandle {
    pub city: String,
    pub set_city: Callback<String>,
}

/// Custom hook for the city input with localStorage persistence
#[hook]
pub fn use_city() -> CityHandle {
    // Load the last searched city from localStorage, fallback to empty
    let city = use_state(|| load_city_preference().unwrap_or_default());

    // Effect: Persist city to localStorage on change
    {
        let city_value = (*city).clone();
        use_effect_with(city_value, move |city| {
            save_city_preference(city);
            || ()
        });
    }

    // Set city callback
    let set_city = {
        let city = city.clone();
        Callback::from(move |new_city| city.set(new_city))
    };

    CityHandle {
        city: (*city).clone(),
        set_city,
    }
}

/// Load city preference from localStorage
fn load_city_preference() -> Option<String> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

/// Save city preference to localStorage
fn save_city_preference(city: &str) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, city) {
        gloo::console::warn!(format!("Failed to save city: {e:?}"));
    }
}
