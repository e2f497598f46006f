pub mod use_city;
pub mod use_search;
