//! Reducer - pure function: (state, action) -> changed
//!
//! Returns `true` if the state changed and subscribers should re-render.
//! No side effects here; requests are issued by the view controller.

use crate::action::Action;
use crate::state::ViewState;
use crate::types::WeatherReport;

pub fn reducer(state: &mut ViewState, action: Action) -> bool {
    match action {
        Action::FetchStart => {
            // Error clears when the request starts, not when it finishes
            state.is_loading = true;
            state.error = None;
            true
        }

        Action::FetchDidLoad(report) => {
            match report {
                WeatherReport::Current(snapshot) => {
                    state.current = Some(snapshot);
                    state.forecast = None;
                }
                WeatherReport::Forecast(bundle) => {
                    state.forecast = Some(bundle);
                    state.current = None;
                }
            }
            state.is_loading = false;
            state.error = None;
            true
        }

        Action::FetchDidError(msg) => {
            // Previously loaded data stays visible under the error
            state.is_loading = false;
            state.error = Some(msg);
            true
        }

        Action::ErrorShow(msg) => {
            if state.error.as_deref() == Some(msg.as_str()) {
                return false;
            }
            state.error = Some(msg);
            true
        }

        Action::ModeSet(mode) => {
            if state.mode == mode {
                return false;
            }
            state.mode = mode;
            true
        }
    }
}
