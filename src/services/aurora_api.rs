use crate::models::{
    aurora::{AuroraReport, CurrentConditions, ForecastRecord, HistoricalRecord},
    error::AppError,
};
use chrono::NaiveDate;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;

// CONSTANTS
const BASE_URL: &str = "http://auroraslive.io/api/v1";

/// Default window for the `/historical` endpoint, matching the range the
/// upstream API documents sample data for.
fn default_historical_range() -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2021, 9, 1).expect("valid date literal");
    let end = NaiveDate::from_ymd_opt(2021, 9, 30).expect("valid date literal");
    (start, end)
}

/// Percent-encodes a value for use inside a query string.
fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

// API CONFIGURATION
/// Configuration for the aurora API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: Option<String>,
    historical_start: NaiveDate,
    historical_end: NaiveDate,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the bearer token attached to requests, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the date window queried on the historical endpoint.
    pub fn historical_range(&self) -> (NaiveDate, NaiveDate) {
        (self.historical_start, self.historical_end)
    }

    /// Constructs the full URL for current conditions.
    pub fn current_url(&self, city: &str) -> String {
        format!("{}/current?city={}", self.base_url, encode(city))
    }

    /// Constructs the full URL for historical visibility records.
    pub fn historical_url(&self, city: &str) -> String {
        format!(
            "{}/historical?city={}&start={}&end={}",
            self.base_url,
            encode(city),
            self.historical_start.format("%Y-%m-%d"),
            self.historical_end.format("%Y-%m-%d")
        )
    }

    /// Constructs the full URL for the visibility forecast.
    pub fn forecast_url(&self, city: &str) -> String {
        format!("{}/forecast?city={}", self.base_url, encode(city))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    historical_range: Option<(NaiveDate, NaiveDate)>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the bearer token sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the date window queried on the historical endpoint.
    pub fn historical_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.historical_range = Some((start, end));
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let (historical_start, historical_end) =
            self.historical_range.unwrap_or_else(default_historical_range);

        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            api_key: self
                .api_key
                .or_else(|| crate::config::Config::API_KEY.map(str::to_string)),
            historical_start,
            historical_end,
        }
    }
}

// AURORA CLIENT
/// HTTP client for the aurora visibility API.
pub struct AuroraClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AuroraClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches current conditions for a city. The endpoint answers `null`
    /// when it has no reading.
    pub async fn fetch_current(&self, city: &str) -> Result<Option<CurrentConditions>, AppError> {
        self.get_json(&self.config.current_url(city)).await
    }

    /// Fetches historical visibility records for the configured range.
    pub async fn fetch_historical(
        &self,
        city: &str,
    ) -> Result<Option<Vec<HistoricalRecord>>, AppError> {
        self.get_json(&self.config.historical_url(city)).await
    }

    /// Fetches the visibility forecast for a city.
    pub async fn fetch_forecast(
        &self,
        city: &str,
    ) -> Result<Option<Vec<ForecastRecord>>, AppError> {
        self.get_json(&self.config.forecast_url(city)).await
    }

    /// Fetches all three datasets for one report.
    ///
    /// The requests run strictly one after another; the first failure
    /// aborts the rest of the sequence and no report is produced.
    pub async fn fetch_report(&self, city: &str) -> Result<AuroraReport, AppError> {
        let current = self.fetch_current(city).await?;
        let historical = self.fetch_historical(city).await?;
        let forecast = self.fetch_forecast(city).await?;

        Ok(AuroraReport {
            current,
            historical,
            forecast,
        })
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let mut request = self.http.get(url);
        if let Some(key) = self.config.api_key() {
            request = request
                .bearer_auth(key)
                .header("Content-Type", "application/json");
        }

        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest send error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::NetworkError(format!("request timed out: {error}"))
        } else if error.is_request() {
            AppError::NetworkError(format!("request failed: {error}"))
        } else {
            AppError::NetworkError(format!("connection error: {error}"))
        }
    }
}

impl Default for AuroraClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches a full aurora report for a city using default configuration.
pub async fn fetch_report(city: &str) -> Result<AuroraReport, AppError> {
    AuroraClient::new()?.fetch_report(city).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::aurora::Visibility;

    #[test]
    fn test_client_creation() {
        let client = AuroraClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();

        assert_eq!(
            config.current_url("Oslo"),
            "http://auroraslive.io/api/v1/current?city=Oslo"
        );
        assert_eq!(
            config.forecast_url("Oslo"),
            "http://auroraslive.io/api/v1/forecast?city=Oslo"
        );
    }

    #[test]
    fn test_historical_url_uses_default_range() {
        let config = ApiConfig::default();

        let url = config.historical_url("Oslo");
        assert!(url.starts_with("http://auroraslive.io/api/v1/historical?"));
        assert!(url.contains("start=2021-09-01"));
        assert!(url.contains("end=2021-09-30"));
    }

    #[test]
    fn test_city_is_percent_encoded() {
        let config = ApiConfig::default();

        let url = config.current_url("New York");
        assert!(url.ends_with("city=New%20York"));
    }

    #[test]
    fn test_config_builder_overrides() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/api/v1")
            .api_key("secret")
            .historical_range(start, end)
            .build();

        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.historical_range(), (start, end));

        let url = config.historical_url("Oslo");
        assert!(url.starts_with("http://localhost:8080/api/v1/historical?"));
        assert!(url.contains("start=2022-01-01"));
        assert!(url.contains("end=2022-01-31"));
    }

    #[test]
    fn test_config_builder_defaults_have_no_key() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_current_response_parsing() {
        let json = r#"{
            "temperature": -5,
            "cloudCoverage": 80,
            "windSpeed": 12
        }"#;

        let current: Option<CurrentConditions> = serde_json::from_str(json).unwrap();
        let current = current.unwrap();
        assert_eq!(current.temperature, -5.0);
        assert_eq!(current.cloud_coverage, 80.0);
        assert_eq!(current.wind_speed, 12.0);
    }

    #[test]
    fn test_null_current_response_parses_to_none() {
        let current: Option<CurrentConditions> = serde_json::from_str("null").unwrap();
        assert!(current.is_none());
    }

    #[test]
    fn test_historical_response_parsing() {
        let json = r#"[
            {"date": "2021-09-01", "visibility": "10km", "activityLevel": "low"},
            {"date": "2021-09-02", "visibility": 7, "activityLevel": "high"}
        ]"#;

        let records: Option<Vec<HistoricalRecord>> = serde_json::from_str(json).unwrap();
        let records = records.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].visibility, Visibility::Text("10km".to_string()));
        assert_eq!(records[1].visibility, Visibility::Level(7.0));
    }
}
