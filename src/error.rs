use thiserror::Error;

/// Fallback text shown when the weather API rejects a request without a usable `message`.
pub const CITY_NOT_FOUND: &str = "city not found";

/// Error types for the weather widget.
///
/// The `Display` output of every variant is the exact text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Error when no API key is configured
    #[error("API key is not configured. Set OPENWEATHER_API_KEY")]
    Configuration,

    /// Error reported by the weather API itself (unknown place, bad key, ...)
    #[error("{0}")]
    NotFound(String),

    /// Error when the request could not be completed or the response could not be read.
    /// `detail` is kept for logging and is never shown.
    #[error("Failed to fetch weather data. Check the city name and try again")]
    Network { detail: String },

    /// Error when the host could not provide a position
    #[error("Unable to determine your location: {0}")]
    Geolocation(String),

    /// Error when the host has no geolocation capability at all
    #[error("Geolocation is not supported on this host")]
    GeolocationUnsupported,
}

impl AppError {
    pub(crate) fn network(detail: impl ToString) -> Self {
        AppError::Network {
            detail: detail.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        AppError::network(err.without_url())
    }
}
