use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::WeatherConfig;
use crate::error::{AppError, CITY_NOT_FOUND};
use crate::types::{Locator, Mode, WeatherReport};

pub mod response;

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";
const ICON_ENDPOINT: &str = "http://openweathermap.org/img/wn";
const UNITS: &str = "metric";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// URL of the 2x icon for a condition's icon code.
pub fn icon_url(icon: &str) -> String {
    format!("{}/{}@2x.png", ICON_ENDPOINT, icon)
}

/// A fully built request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub mode: Mode,
    pub url: String,
    /// Locator description for logs; the URL carries the credential
    label: String,
}

/// Client for the OpenWeatherMap current weather and forecast endpoints.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self, AppError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Builds the request URL for `locator` in `mode`.
    ///
    /// # Returns
    /// * `AppError::Configuration` if no API key is configured; nothing is sent in that case
    pub fn prepare(&self, locator: &Locator, mode: Mode) -> Result<WeatherRequest, AppError> {
        let api_key = self.config.api_key.as_deref().ok_or(AppError::Configuration)?;

        let endpoint = match mode {
            Mode::Current => CURRENT_ENDPOINT,
            Mode::Forecast => FORECAST_ENDPOINT,
        };

        let (query, label) = match locator {
            Locator::Place(name) => (format!("q={}", urlencoding::encode(name)), name.clone()),
            Locator::Coordinates(coords) => (
                format!("lat={}&lon={}", coords.latitude, coords.longitude),
                format!("{},{}", coords.latitude, coords.longitude),
            ),
        };

        let url = format!(
            "{}/{}?{}&appid={}&units={}&lang={}",
            self.config.base_url,
            endpoint,
            query,
            urlencoding::encode(api_key),
            UNITS,
            self.config.lang
        );

        Ok(WeatherRequest { mode, url, label })
    }

    /// Sends a prepared request and normalizes the outcome.
    pub async fn execute(&self, request: &WeatherRequest) -> Result<WeatherReport, AppError> {
        info!("Fetching {} weather for: {}", request.mode, request.label);

        let response = self.http.get(&request.url).send().await.map_err(|e| {
            let e = e.without_url();
            error!("Weather request failed: {}", e);
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch weather data: {}", status);
            // An unreadable body still yields the fallback message.
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(&body));
        }

        let body = response.text().await?;
        let report = parse_report(request.mode, &body)?;
        debug!("Weather data fetched successfully: {:?}", report);
        Ok(report)
    }

    /// `prepare` followed by `execute`.
    pub async fn fetch(&self, locator: &Locator, mode: Mode) -> Result<WeatherReport, AppError> {
        let request = self.prepare(locator, mode)?;
        self.execute(&request).await
    }
}

/// Maps the body of a non-success response to a user-facing error.
fn api_error(body: &str) -> AppError {
    let message = serde_json::from_str::<response::ErrorResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| CITY_NOT_FOUND.to_string());
    AppError::NotFound(message)
}

fn parse_report(mode: Mode, body: &str) -> Result<WeatherReport, AppError> {
    match mode {
        Mode::Current => {
            let response: response::SnapshotResponse = serde_json::from_str(body).map_err(|e| {
                error!("Failed to parse current weather: {}", e);
                AppError::network(e)
            })?;
            response
                .into_snapshot()
                .map(WeatherReport::Current)
                .ok_or_else(|| AppError::network("current weather has no conditions"))
        }
        Mode::Forecast => {
            let response: response::ForecastResponse = serde_json::from_str(body).map_err(|e| {
                error!("Failed to parse forecast: {}", e);
                AppError::network(e)
            })?;
            response
                .into_bundle()
                .map(WeatherReport::Forecast)
                .ok_or_else(|| AppError::network("forecast sample has no conditions"))
        }
    }
}
