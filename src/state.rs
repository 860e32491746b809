//! View state - single source of truth for what the widget shows
//!
//! Only the reducer mutates it; everything else reads it.

use crate::forecast::select_daily_samples;
use crate::types::{ForecastBundle, Mode, WeatherSnapshot};

/// Everything the UI needs to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Last current-conditions result (None = not fetched, or replaced by a forecast)
    pub current: Option<WeatherSnapshot>,

    /// Last forecast result (None = not fetched, or replaced by current conditions)
    pub forecast: Option<ForecastBundle>,

    /// Which of the two is displayed
    pub mode: Mode,

    /// Error shown to the user, if the last action failed
    pub error: Option<String>,

    /// A fetch is in flight
    pub is_loading: bool,
}

/// Coarse lifecycle phase derived from the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What should be on screen for the current mode.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    /// Nothing fetched yet for this mode
    Empty,
    Current(&'a WeatherSnapshot),
    Forecast {
        place: &'a str,
        /// One sample per day, at most five
        days: Vec<&'a WeatherSnapshot>,
    },
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.current.is_some() || self.forecast.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Selects the snapshot matching `mode`. Forecasts are reduced to daily samples here.
    pub fn view(&self) -> View<'_> {
        match (self.mode, &self.current, &self.forecast) {
            (Mode::Current, Some(snapshot), _) => View::Current(snapshot),
            (Mode::Forecast, _, Some(bundle)) => View::Forecast {
                place: &bundle.place,
                days: select_daily_samples(bundle),
            },
            _ => View::Empty,
        }
    }
}
