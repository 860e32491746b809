/// Response structure for the IPGeolocation `ipgeo` API.
/// Coordinates come back as decimal strings, e.g. `"37.38605"`.
#[derive(serde::Deserialize, Debug)]
pub struct IpGeoResponse {
    pub latitude: String,
    pub longitude: String,
}

/// Error body returned with a non-success status
#[derive(serde::Deserialize, Debug)]
pub struct IpGeoError {
    pub message: Option<String>,
}
