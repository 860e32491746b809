use std::env;

/// Default OpenWeatherMap API root.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Default IPGeolocation API root.
pub const DEFAULT_GEOLOCATION_BASE_URL: &str = "https://api.ipgeolocation.io";
/// Response language requested from the weather API.
pub const DEFAULT_LANG: &str = "en";

/// Settings for the weather API client.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherConfig {
    /// API credential; `None` means requests fail with a configuration error
    pub api_key: Option<String>,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Language tag sent as `lang=`
    pub lang: String,
}

impl WeatherConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Point the client at another API root (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Reads `OPENWEATHER_API_KEY` and the optional `OPENWEATHER_BASE_URL`.
    pub fn from_env() -> Self {
        let config = Self::new(env::var("OPENWEATHER_API_KEY").ok());
        match env::var("OPENWEATHER_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Settings for the IP-based geolocation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GeolocationConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_GEOLOCATION_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Reads `IP_GEOLOCATION_API_KEY` and the optional `IP_GEOLOCATION_BASE_URL`.
    pub fn from_env() -> Self {
        let config = Self::new(env::var("IP_GEOLOCATION_API_KEY").ok());
        match env::var("IP_GEOLOCATION_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}
