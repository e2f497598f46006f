pub mod conditions;
pub mod error_notice;
pub mod forecast;
pub mod historical;
pub mod loading_indicator;
pub mod search_bar;

pub use conditions::{ConditionsPanel, format_weather_data};
pub use error_notice::ErrorNotice;
pub use forecast::{ForecastPanel, format_forecast_data};
pub use historical::{HistoricalPanel, format_historical_data};
pub use loading_indicator::LoadingIndicator;
pub use search_bar::SearchBar;
