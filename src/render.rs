//! Plain-text rendering of the view state

use std::fmt;

use chrono::{Local, TimeZone};

use crate::state::{View, ViewState};
use crate::types::{Mode, WeatherSnapshot};
use crate::weather::icon_url;

/// Formats a whole screen: mode tabs, loader, error banner, weather.
pub struct Screen<'a>(pub &'a ViewState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "{}", tabs(state.mode))?;
        if state.is_loading {
            writeln!(f, "Loading...")?;
        }
        if let Some(error) = &state.error {
            writeln!(f, "! {}", error)?;
        }

        match state.view() {
            View::Empty => Ok(()),
            View::Current(snapshot) => write_current(f, snapshot),
            View::Forecast { place, days } => {
                writeln!(f, "{}", place)?;
                for day in days {
                    write_day(f, day)?;
                }
                Ok(())
            }
        }
    }
}

fn tabs(mode: Mode) -> String {
    let tab = |m: Mode| {
        if m == mode {
            format!("[{}]", m)
        } else {
            format!(" {} ", m)
        }
    };
    format!("{} {}", tab(Mode::Current), tab(Mode::Forecast))
}

fn write_current(f: &mut fmt::Formatter<'_>, snapshot: &WeatherSnapshot) -> fmt::Result {
    let condition = snapshot.condition();
    if let Some(place) = &snapshot.place {
        writeln!(f, "{}", place)?;
    }
    writeln!(f, "{}°C  {}", round(snapshot.temperature), condition.description)?;
    writeln!(f, "  icon: {}", icon_url(&condition.icon))?;
    writeln!(f, "  Feels like: {}°C", round(snapshot.feels_like))?;
    writeln!(f, "  Humidity: {}%", snapshot.humidity)?;
    writeln!(f, "  Wind: {} m/s", round(snapshot.wind_speed))
}

fn write_day(f: &mut fmt::Formatter<'_>, day: &WeatherSnapshot) -> fmt::Result {
    let condition = day.condition();
    writeln!(
        f,
        "  {:<12} {:>4}°C  {}  ({})",
        day_label(day.timestamp),
        round(day.temperature),
        condition.description,
        icon_url(&condition.icon)
    )
}

/// Short weekday and date, e.g. "Sat, 2 Mar".
fn day_label(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%a, %-d %b").to_string())
        .unwrap_or_default()
}

/// Whole degrees, half away from zero.
fn round(value: f64) -> i64 {
    value.round() as i64
}
