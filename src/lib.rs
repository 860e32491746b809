//! Weather lookup widget
//!
//! Looks up current conditions or a 5-day forecast from OpenWeatherMap by
//! place name or by the host's location, and keeps the result in a
//! subscribable view state.

pub mod action;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geo_location;
pub mod reducer;
pub mod render;
pub mod state;
pub mod types;
pub mod view;
pub mod weather;

pub use config::{GeolocationConfig, WeatherConfig};
pub use error::AppError;
pub use forecast::{select_daily_samples, select_daily_samples_in};
pub use geo_location::{Geolocator, HostGeolocator, IpGeolocator};
pub use render::Screen;
pub use state::{Phase, View, ViewState};
pub use types::*;
pub use view::{PendingFetch, ViewController};
pub use weather::{WeatherClient, icon_url};
