use std::fmt;

/// One weather condition as reported by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionDescriptor {
    pub id: u32,
    /// Short category label, e.g. "Rain"
    pub category: String,
    /// Free-text description, e.g. "light rain"
    pub description: String,
    /// Opaque icon code, see [`crate::weather::icon_url`]
    pub icon: String,
}

/// A point-in-time weather observation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    conditions: Vec<ConditionDescriptor>,
    pub place: Option<String>,
}

impl WeatherSnapshot {
    /// Builds a snapshot. Returns `None` if `conditions` is empty.
    pub fn new(
        timestamp: i64,
        temperature: f64,
        feels_like: f64,
        humidity: u8,
        wind_speed: f64,
        conditions: Vec<ConditionDescriptor>,
        place: Option<String>,
    ) -> Option<Self> {
        if conditions.is_empty() {
            return None;
        }
        Some(Self {
            timestamp,
            temperature,
            feels_like,
            humidity,
            wind_speed,
            conditions,
            place,
        })
    }

    /// The primary condition. Only this one is displayed.
    pub fn condition(&self) -> &ConditionDescriptor {
        &self.conditions[0]
    }

    pub fn conditions(&self) -> &[ConditionDescriptor] {
        &self.conditions
    }
}

/// Forecast for one place: samples in chronological order, about three hours apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub samples: Vec<WeatherSnapshot>,
    pub place: String,
}

/// Successful result of a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Current(WeatherSnapshot),
    Forecast(ForecastBundle),
}

/// Which endpoint to query and which snapshot to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Current,
    Forecast,
}

impl Mode {
    pub fn toggle(&self) -> Self {
        match self {
            Mode::Current => Mode::Forecast,
            Mode::Forecast => Mode::Current,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Current => write!(f, "now"),
            Mode::Forecast => write!(f, "5 days"),
        }
    }
}

/// A resolved position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What to look the weather up for.
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    /// Free-text place name, sent as-is (percent-encoded)
    Place(String),
    Coordinates(Coordinates),
}

impl Locator {
    pub fn place(name: impl Into<String>) -> Self {
        Locator::Place(name.into())
    }
}

impl From<Coordinates> for Locator {
    fn from(coords: Coordinates) -> Self {
        Locator::Coordinates(coords)
    }
}
