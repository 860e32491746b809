//! Integration tests for WeatherClient against a mock OpenWeatherMap server.

mod common;

use common::{API_KEY, client_for, current_body, forecast_body, unconfigured_client};
use weather_widget::{
    AppError, Coordinates, Locator, Mode, WeatherClient, WeatherConfig, WeatherReport,
};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_current_weather_by_city() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris", 7.6)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = client_for(&mock_server)
        .fetch(&Locator::place("Paris"), Mode::Current)
        .await
        .unwrap();

    let WeatherReport::Current(snapshot) = report else {
        panic!("expected current conditions");
    };
    assert_eq!(snapshot.place.as_deref(), Some("Paris"));
    assert_eq!(snapshot.temperature, 7.6);
    assert_eq!(snapshot.humidity, 71);
    assert_eq!(snapshot.wind_speed, 5.1);
    assert_eq!(snapshot.condition().icon, "04d");
}

#[tokio::test]
async fn test_forecast_by_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "59.91"))
        .and(query_param("lon", "10.75"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body("Oslo", 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coords = Coordinates {
        latitude: 59.91,
        longitude: 10.75,
    };
    let report = client_for(&mock_server)
        .fetch(&coords.into(), Mode::Forecast)
        .await
        .unwrap();

    let WeatherReport::Forecast(bundle) = report else {
        panic!("expected a forecast");
    };
    assert_eq!(bundle.place, "Oslo");
    assert_eq!(bundle.samples.len(), 40);
    assert!(bundle.samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[tokio::test]
async fn test_place_name_is_sent_percent_encoded() {
    let mock_server = MockServer::start().await;

    // wiremock matches on the decoded value
    Mock::given(path("/weather"))
        .and(query_param("q", "Nizhny Novgorod & Co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Nizhny Novgorod", 1.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = client
        .prepare(&Locator::place("Nizhny Novgorod & Co"), Mode::Current)
        .unwrap();
    assert!(request.url.contains("q=Nizhny%20Novgorod%20%26%20Co&"));

    client.execute(&request).await.unwrap();
}

#[tokio::test]
async fn test_404_surfaces_api_message() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch(&Locator::place("Atlantis"), Mode::Current)
        .await
        .unwrap_err();

    assert_eq!(err, AppError::NotFound("city not found".into()));
    assert_eq!(err.to_string(), "city not found");
}

#[tokio::test]
async fn test_401_surfaces_other_api_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch(&Locator::place("Paris"), Mode::Forecast)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Invalid API key."));
}

#[tokio::test]
async fn test_error_status_with_non_json_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch(&Locator::place("Paris"), Mode::Current)
        .await
        .unwrap_err();

    assert_eq!(err, AppError::NotFound("city not found".into()));
}

#[tokio::test]
async fn test_malformed_success_body_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"list\": ["))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch(&Locator::place("Paris"), Mode::Forecast)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to fetch weather data. Check the city name and try again"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Grab a free port and release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = WeatherConfig::new(Some("owm-secret-key".into()))
        .with_base_url(format!("http://127.0.0.1:{}", port));
    let client = WeatherClient::new(config).unwrap();

    let err = client
        .fetch(&Locator::place("Paris"), Mode::Current)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network { .. }));
    // The request URL carries the key; neither the message nor the detail may
    assert!(!err.to_string().contains("owm-secret-key"));
    assert!(!format!("{:?}", err).contains("owm-secret-key"));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = unconfigured_client(&mock_server)
        .fetch(&Locator::place("Paris"), Mode::Current)
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Configuration);
}
