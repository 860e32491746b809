//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use serde_json::{Value, json};
use weather_widget::{WeatherClient, WeatherConfig};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

// 2024-03-01T12:00:00Z
pub const NOON: i64 = 1_709_294_400;

pub fn client_for(server: &MockServer) -> WeatherClient {
    let config = WeatherConfig::new(Some(API_KEY.into())).with_base_url(server.uri());
    WeatherClient::new(config).unwrap()
}

pub fn unconfigured_client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(WeatherConfig::new(None).with_base_url(server.uri())).unwrap()
}

/// Body of `/weather` for `place`.
pub fn current_body(place: &str, temp: f64) -> Value {
    json!({
        "coord": { "lon": 2.35, "lat": 48.85 },
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
        "main": { "temp": temp, "feels_like": temp - 2.0, "humidity": 71, "pressure": 1018 },
        "wind": { "speed": 5.1, "deg": 240 },
        "dt": NOON,
        "name": place,
        "cod": 200
    })
}

fn sample(dt: i64) -> Value {
    json!({
        "dt": dt,
        "main": { "temp": 8.0, "feels_like": 6.5, "humidity": 64 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10n" }],
        "wind": { "speed": 3.3 }
    })
}

/// Body of `/forecast`: `days` days of three-hourly samples starting at noon.
pub fn forecast_body(place: &str, days: i64) -> Value {
    let list: Vec<Value> = (0..days * 8).map(|i| sample(NOON + i * 3 * 3_600)).collect();
    json!({
        "cod": "200",
        "cnt": list.len(),
        "list": list,
        "city": { "name": place, "country": "FR" }
    })
}
