// Module containing response data structures for the geolocation service
mod response;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::GeolocationConfig;
use crate::error::AppError;
use crate::types::Coordinates;

const IPGEO_ENDPOINT: &str = "ipgeo";
const UNREACHABLE: &str = "location service unreachable";
const UNREADABLE: &str = "unreadable response from location service";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The host's ability to report where the user is.
pub trait Geolocator {
    /// Resolves the current position.
    ///
    /// # Returns
    /// * `AppError::Geolocation` with a human-readable reason if the host fails
    /// * `AppError::GeolocationUnsupported` if the host has no such capability
    fn locate(&self) -> impl Future<Output = Result<Coordinates, AppError>> + Send;
}

/// Locates the user by public IP address using the IPGeolocation API.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    http: Client,
    api_key: String,
    base_url: String,
}

impl IpGeolocator {
    /// Returns `None` when no API key is configured.
    pub fn new(config: GeolocationConfig) -> Result<Option<Self>, AppError> {
        let Some(api_key) = config.api_key else {
            return Ok(None);
        };
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Some(Self {
            http,
            api_key,
            base_url: config.base_url,
        }))
    }
}

impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, AppError> {
        info!("Resolving location by IP address");

        let url = format!(
            "{}/{}?apiKey={}&fields=geo",
            self.base_url,
            IPGEO_ENDPOINT,
            urlencoding::encode(&self.api_key)
        );

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("Geolocation request failed: {}", e.without_url());
            AppError::Geolocation(UNREACHABLE.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to resolve location: {}", status);
            let reason = response
                .json::<response::IpGeoError>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("location service returned {}", status));
            return Err(AppError::Geolocation(reason));
        }

        let body: response::IpGeoResponse = response
            .json()
            .await
            .map_err(|e| {
                error!("Failed to parse location: {}", e.without_url());
                AppError::Geolocation(UNREADABLE.to_string())
            })?;
        debug!("Location resolved: {:?}", body);

        parse_coordinates(&body)
    }
}

fn parse_coordinates(body: &response::IpGeoResponse) -> Result<Coordinates, AppError> {
    let latitude: f64 = body
        .latitude
        .trim()
        .parse()
        .map_err(|_| AppError::Geolocation(format!("invalid latitude {:?}", body.latitude)))?;
    let longitude: f64 = body
        .longitude
        .trim()
        .parse()
        .map_err(|_| AppError::Geolocation(format!("invalid longitude {:?}", body.longitude)))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::Geolocation(format!(
            "coordinates out of range: {}, {}",
            latitude, longitude
        )));
    }

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

/// Geolocation as available on this host: IP lookup when configured, nothing otherwise.
#[derive(Debug, Clone)]
pub enum HostGeolocator {
    Ip(IpGeolocator),
    Unsupported,
}

impl HostGeolocator {
    pub fn from_config(config: GeolocationConfig) -> Result<Self, AppError> {
        Ok(match IpGeolocator::new(config)? {
            Some(ip) => HostGeolocator::Ip(ip),
            None => HostGeolocator::Unsupported,
        })
    }
}

impl Geolocator for HostGeolocator {
    async fn locate(&self) -> Result<Coordinates, AppError> {
        match self {
            HostGeolocator::Ip(ip) => ip.locate().await,
            HostGeolocator::Unsupported => Err(AppError::GeolocationUnsupported),
        }
    }
}
