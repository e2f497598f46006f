use serde::Deserialize;
use std::fmt;

/// Ground weather relevant to aurora spotting, as returned by the
/// `/current` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Air temperature in °C
    pub temperature: f64,

    /// Cloud coverage in percent
    pub cloud_coverage: f64,

    /// Wind speed in km/h
    pub wind_speed: f64,
}

/// Aurora visibility as reported by the API.
///
/// The wire value is either free text (`"10km"`, `"poor"`) or a plain
/// number, depending on the record; both forms are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Visibility {
    Text(String),
    Level(f64),
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Text(text) => f.write_str(text),
            Visibility::Level(level) => write!(f, "{level}"),
        }
    }
}

/// One entry of the `/historical` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    pub date: String,
    pub visibility: Visibility,
    pub activity_level: String,
}

/// One entry of the `/forecast` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub time: String,
    pub visibility: Visibility,
    pub activity_level: String,
}

/// Combined result of one full search: the payloads of all three
/// endpoints. Constructed only when every request in the sequence
/// succeeded, so a partially fetched report cannot exist.
///
/// Each endpoint may legitimately answer with JSON `null`, hence the
/// `Option` fields; the formatters render a fixed notice for those.
#[derive(Debug, Clone, PartialEq)]
pub struct AuroraReport {
    pub current: Option<CurrentConditions>,
    pub historical: Option<Vec<HistoricalRecord>>,
    pub forecast: Option<Vec<ForecastRecord>>,
}

/// Returns the badge CSS class for an activity level label.
///
/// The API does not document a closed vocabulary, so unrecognized labels
/// fall back to a neutral class; the label itself is always rendered
/// verbatim.
pub fn activity_css_class(level: &str) -> &'static str {
    match level.trim().to_lowercase().as_str() {
        "quiet" | "low" => "activity-low",
        "unsettled" | "moderate" => "activity-moderate",
        "active" | "high" => "activity-high",
        "storm" | "severe" | "extreme" => "activity-storm",
        _ => "activity-unknown",
    }
}
