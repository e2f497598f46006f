/// Configuration constants for the application
pub struct Config;

impl Config {
    /// API key for auroraslive.io, sent as a bearer token on every
    /// request when set. Leave as `None` to query the API without
    /// authentication headers.
    pub const API_KEY: Option<&'static str> = None;
}
