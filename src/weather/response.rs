use crate::types::{ConditionDescriptor, ForecastBundle, WeatherSnapshot};

/// Response structure for the OpenWeatherMap current weather endpoint
/// (`/data/2.5/weather`). Forecast list entries share this shape minus `name`.
#[derive(serde::Deserialize, Debug)]
pub struct SnapshotResponse {
    /// Observation time, seconds since the Unix epoch
    pub dt: i64,
    /// Temperature and humidity readings
    pub main: MainReadings,
    /// Condition descriptors, most significant first
    pub weather: Vec<ConditionResponse>,
    pub wind: WindReadings,
    /// Place name, only present on current weather responses
    pub name: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
pub struct MainReadings {
    /// Temperature in Celsius (`units=metric`)
    pub temp: f64,
    pub feels_like: f64,
    /// Humidity percentage (0-100)
    pub humidity: u8,
}

#[derive(serde::Deserialize, Debug)]
pub struct WindReadings {
    /// Wind speed in metres per second
    pub speed: f64,
}

#[derive(serde::Deserialize, Debug)]
pub struct ConditionResponse {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Response structure for the forecast endpoint (`/data/2.5/forecast`)
#[derive(serde::Deserialize, Debug)]
pub struct ForecastResponse {
    /// Samples in chronological order, roughly three hours apart
    pub list: Vec<SnapshotResponse>,
    pub city: CityResponse,
}

#[derive(serde::Deserialize, Debug)]
pub struct CityResponse {
    pub name: String,
}

/// Body of a non-success response, e.g. `{"cod":"404","message":"city not found"}`
#[derive(serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

impl SnapshotResponse {
    /// Converts into a snapshot; `None` when the condition list is empty.
    pub fn into_snapshot(self) -> Option<WeatherSnapshot> {
        let conditions = self
            .weather
            .into_iter()
            .map(|c| ConditionDescriptor {
                id: c.id,
                category: c.main,
                description: c.description,
                icon: c.icon,
            })
            .collect();

        WeatherSnapshot::new(
            self.dt,
            self.main.temp,
            self.main.feels_like,
            self.main.humidity,
            self.wind.speed,
            conditions,
            self.name,
        )
    }
}

impl ForecastResponse {
    pub fn into_bundle(self) -> Option<ForecastBundle> {
        let samples = self
            .list
            .into_iter()
            .map(SnapshotResponse::into_snapshot)
            .collect::<Option<Vec<_>>>()?;

        Some(ForecastBundle {
            samples,
            place: self.city.name,
        })
    }
}
