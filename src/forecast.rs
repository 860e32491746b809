//! Reduces a three-hourly forecast to one sample per calendar day.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, TimeZone};

use crate::types::{ForecastBundle, WeatherSnapshot};

/// Maximum number of days shown in forecast mode.
pub const MAX_FORECAST_DAYS: usize = 5;

/// First sample of each local calendar day, at most [`MAX_FORECAST_DAYS`] of them.
pub fn select_daily_samples(bundle: &ForecastBundle) -> Vec<&WeatherSnapshot> {
    select_daily_samples_in(&bundle.samples, &Local)
}

/// Same as [`select_daily_samples`] with calendar dates taken in `tz`.
///
/// Samples are expected in chronological order and are not re-sorted. A
/// sample whose timestamp cannot be represented as a date is skipped.
pub fn select_daily_samples_in<'a, Tz: TimeZone>(
    samples: &'a [WeatherSnapshot],
    tz: &Tz,
) -> Vec<&'a WeatherSnapshot> {
    let mut seen: HashSet<NaiveDate> = HashSet::new();

    samples
        .iter()
        .filter(|sample| match local_date(sample.timestamp, tz) {
            Some(date) => seen.insert(date),
            None => false,
        })
        .take(MAX_FORECAST_DAYS)
        .collect()
}

fn local_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.date_naive())
}
