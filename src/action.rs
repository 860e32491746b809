//! Actions - every state transition the widget knows about
//!
//! Naming follows intent/result: `FetchStart` is dispatched when a request
//! goes out, `FetchDid*` when its single result arrives.

use crate::types::{Mode, WeatherReport};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A request was sent: show the loader, drop the previous error
    FetchStart,

    /// Result: a report arrived
    FetchDidLoad(WeatherReport),

    /// Result: the request failed
    FetchDidError(String),

    /// Something failed before any request was sent (missing key, no location)
    ErrorShow(String),

    /// Switch between current conditions and the 5-day forecast
    ModeSet(Mode),
}
