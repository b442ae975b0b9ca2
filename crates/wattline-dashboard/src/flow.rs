//! The prediction client flow.

use chrono::{Datelike, Timelike};

use crate::clock::{Clock, SystemClock};
use crate::state::DashboardState;
use wattline_client::PredictClient;
use wattline_types::{Machine, PredictionRequest};

/// Composes a prediction request for `machine` at the clock's current
/// time.
#[must_use]
pub fn request_at<C: Clock>(machine: Machine, clock: &C) -> PredictionRequest {
    let now = clock.now();
    PredictionRequest::new(machine, now.hour(), now.day())
        .expect("wall clock produces in-range hour and day")
}

/// Drives the prediction flow: composes requests from the injected clock,
/// sends them through the client, and folds each outcome into the
/// dashboard state.
///
/// One attempt means one outbound call. There are no retries, no
/// cancellation, and no ordering guarantees across attempts beyond the
/// stale-outcome protection in [`DashboardState`].
#[derive(Debug)]
pub struct Dashboard<C = SystemClock> {
    client: PredictClient,
    clock: C,
    state: DashboardState,
}

impl Dashboard<SystemClock> {
    /// Creates a dashboard on the system clock.
    #[must_use]
    pub fn new(client: PredictClient) -> Self {
        Self::with_clock(client, SystemClock)
    }
}

impl<C: Clock> Dashboard<C> {
    /// Creates a dashboard with an injected clock.
    #[must_use]
    pub fn with_clock(client: PredictClient, clock: C) -> Self {
        Self {
            client,
            clock,
            state: DashboardState::new(),
        }
    }

    /// Returns the current published state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &PredictClient {
        &self.client
    }

    /// Runs one prediction attempt for `machine`.
    ///
    /// The in-flight indicator is raised before the call and clears when
    /// the attempt resolves, whatever the outcome.
    pub async fn predict(&mut self, machine: Machine) -> &DashboardState {
        let (pending, tag) = self.state.begin();
        self.state = pending;

        let request = request_at(machine, &self.clock);
        let outcome = self.client.predict(&request).await;

        self.state = self.state.resolve(tag, machine, outcome);
        &self.state
    }
}
