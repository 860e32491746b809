//! View controller - turns user input into requests and results into state
//!
//! Requests are split into a synchronous `begin_*` step, which dispatches
//! `FetchStart` and hands back a [`PendingFetch`], and an async step that runs
//! it and feeds the outcome to [`ViewController::complete`]. Results are
//! applied in arrival order; when fetches overlap the last one to finish wins.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::AppError;
use crate::geo_location::Geolocator;
use crate::reducer::reducer;
use crate::state::ViewState;
use crate::types::{Locator, Mode, WeatherReport};
use crate::weather::{WeatherClient, WeatherRequest};

/// A request that has been announced (`FetchStart`) but not sent yet.
#[derive(Debug, Clone)]
#[must_use = "a pending fetch leaves the widget loading until it is run and completed"]
pub struct PendingFetch {
    request: WeatherRequest,
}

impl PendingFetch {
    pub fn mode(&self) -> Mode {
        self.request.mode
    }

    /// Sends the request. Does not touch the view state.
    pub async fn run(&self, client: &WeatherClient) -> Result<WeatherReport, AppError> {
        client.execute(&self.request).await
    }
}

pub struct ViewController<G> {
    client: WeatherClient,
    geolocator: G,
    state: watch::Sender<ViewState>,
}

impl<G: Geolocator> ViewController<G> {
    pub fn new(client: WeatherClient, geolocator: G) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            client,
            geolocator,
            state,
        }
    }

    /// Receiver notified after every transition that changed the state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn client(&self) -> &WeatherClient {
        &self.client
    }

    fn dispatch(&self, action: Action) -> bool {
        debug!("Dispatching {:?}", action);
        self.state.send_if_modified(|state| reducer(state, action))
    }

    /// Starts a search for a place name in the current mode.
    ///
    /// Blank input is ignored. Without an API key the configuration error is
    /// shown and nothing is sent.
    pub fn submit_search(&self, text: &str) -> Option<PendingFetch> {
        if text.trim().is_empty() {
            return None;
        }
        self.begin(Locator::place(text))
    }

    /// Switches the displayed mode. Never fetches and never clears data.
    pub fn toggle_mode(&self, mode: Mode) {
        if self.dispatch(Action::ModeSet(mode)) {
            info!("Display mode switched to {}", mode);
        }
    }

    /// Asks the host for a position and, on success, starts a fetch for it.
    pub async fn request_geolocation(&self) -> Option<PendingFetch> {
        if !self.client.is_configured() {
            self.dispatch(Action::ErrorShow(AppError::Configuration.to_string()));
            return None;
        }

        match self.geolocator.locate().await {
            Ok(coords) => self.begin(coords.into()),
            Err(err) => {
                warn!("Geolocation failed: {}", err);
                self.dispatch(Action::ErrorShow(err.to_string()));
                None
            }
        }
    }

    /// Applies the outcome of a fetch.
    pub fn complete(&self, outcome: Result<WeatherReport, AppError>) {
        match outcome {
            Ok(report) => {
                self.dispatch(Action::FetchDidLoad(report));
            }
            Err(err) => {
                warn!("Fetch failed: {:?}", err);
                self.dispatch(Action::FetchDidError(err.to_string()));
            }
        }
    }

    /// `submit_search`, then run and complete the fetch.
    pub async fn search(&self, text: &str) {
        if let Some(pending) = self.submit_search(text) {
            self.finish(pending).await;
        }
    }

    /// `request_geolocation`, then run and complete the fetch.
    pub async fn locate(&self) {
        if let Some(pending) = self.request_geolocation().await {
            self.finish(pending).await;
        }
    }

    async fn finish(&self, pending: PendingFetch) {
        let outcome = pending.run(&self.client).await;
        self.complete(outcome);
    }

    fn begin(&self, locator: Locator) -> Option<PendingFetch> {
        let mode = self.state.borrow().mode;
        match self.client.prepare(&locator, mode) {
            Ok(request) => {
                self.dispatch(Action::FetchStart);
                Some(PendingFetch { request })
            }
            Err(err) => {
                self.dispatch(Action::ErrorShow(err.to_string()));
                None
            }
        }
    }
}
