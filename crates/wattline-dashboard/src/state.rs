//! Immutable-per-update dashboard state.
//!
//! The dashboard publishes three values: the current prediction, the
//! current recommendation, and the in-flight indicator. They are modeled
//! as one state value with explicit transitions instead of independent
//! mutable cells, and every issued request carries a monotonic tag so a
//! late response from a superseded request can never overwrite newer
//! state.

use crate::advice::{Recommendation, recommend};
use wattline_client::PredictError;
use wattline_types::{EnergyForecast, Machine};

/// Tag identifying one issued request.
///
/// Tags are monotonic within a state lineage; only the outcome carrying
/// the latest issued tag is accepted by [`DashboardState::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTag(u64);

/// What the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A forecast, with the recommendation derived from it (if any).
    Forecast {
        /// The machine the forecast is for.
        machine: Machine,
        /// Predicted energy in kWh.
        predicted_kwh: f64,
        /// High-usage recommendation, when the forecast exceeds the
        /// threshold.
        recommendation: Option<Recommendation>,
    },
    /// A failed attempt, with user-facing guidance.
    Failed {
        /// The guidance message to show.
        message: String,
    },
}

/// The published dashboard state.
///
/// Updates produce a new value via [`Self::begin`] and [`Self::resolve`];
/// nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    view: View,
    in_flight: bool,
    latest: u64,
}

impl DashboardState {
    /// Creates an idle state with no request outstanding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what the dashboard currently shows.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns the predicted energy in kWh, if the view shows a forecast.
    #[must_use]
    pub fn prediction(&self) -> Option<f64> {
        match &self.view {
            View::Forecast { predicted_kwh, .. } => Some(*predicted_kwh),
            View::Idle | View::Failed { .. } => None,
        }
    }

    /// Returns the current recommendation, if the view carries one.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.view {
            View::Forecast { recommendation, .. } => recommendation.as_ref(),
            View::Idle | View::Failed { .. } => None,
        }
    }

    /// Issues a new request: raises the in-flight indicator and returns
    /// the tag the eventual outcome must carry.
    #[must_use]
    pub fn begin(&self) -> (Self, RequestTag) {
        let tag = RequestTag(self.latest + 1);
        let next = Self {
            view: self.view.clone(),
            in_flight: true,
            latest: tag.0,
        };
        (next, tag)
    }

    /// Applies the outcome of the tagged request.
    ///
    /// A success publishes the forecast and the recommendation derived
    /// from it; a failure publishes the guidance text for its kind. Either
    /// way the in-flight indicator clears.
    ///
    /// An outcome for anything but the latest issued request is stale: it
    /// is dropped and the state returned unchanged, since a newer request
    /// is still outstanding.
    #[must_use]
    pub fn resolve(
        &self,
        tag: RequestTag,
        machine: Machine,
        outcome: Result<EnergyForecast, PredictError>,
    ) -> Self {
        if tag.0 != self.latest {
            tracing::debug!(
                tag = tag.0,
                latest = self.latest,
                "dropping stale prediction outcome"
            );
            return self.clone();
        }

        let view = match outcome {
            Ok(forecast) => View::Forecast {
                machine,
                predicted_kwh: forecast.predicted_energy,
                recommendation: recommend(machine, forecast.predicted_energy),
            },
            Err(err) => View::Failed {
                message: err.guidance().to_string(),
            },
        };

        Self {
            view,
            in_flight: false,
            latest: self.latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use wattline_client::FAILED_CALL_GUIDANCE;

    fn status_error() -> PredictError {
        PredictError::Status {
            url: "http://localhost:8000/predict".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[test]
    fn test_begin_raises_in_flight() {
        let state = DashboardState::new();
        assert!(!state.in_flight());

        let (pending, _tag) = state.begin();
        assert!(pending.in_flight());
        assert_eq!(pending.view(), &View::Idle);
    }

    #[test]
    fn test_success_publishes_forecast_and_clears_in_flight() {
        let (pending, tag) = DashboardState::new().begin();
        let resolved = pending.resolve(
            tag,
            Machine::B,
            Ok(EnergyForecast {
                predicted_energy: 500.0,
            }),
        );

        assert!(!resolved.in_flight());
        assert_eq!(resolved.prediction(), Some(500.0));
        let rec = resolved.recommendation().expect("500 kWh exceeds threshold");
        assert!(rec.to_string().contains("Machine_B"));
    }

    #[test]
    fn test_low_forecast_clears_recommendation() {
        let (pending, tag) = DashboardState::new().begin();
        let resolved = pending.resolve(
            tag,
            Machine::A,
            Ok(EnergyForecast {
                predicted_energy: 200.0,
            }),
        );

        assert_eq!(resolved.prediction(), Some(200.0));
        assert_eq!(resolved.recommendation(), None);
    }

    #[test]
    fn test_failure_publishes_guidance_and_clears_in_flight() {
        let (pending, tag) = DashboardState::new().begin();
        let resolved = pending.resolve(tag, Machine::C, Err(status_error()));

        assert!(!resolved.in_flight());
        assert_eq!(resolved.prediction(), None);
        assert_eq!(
            resolved.view(),
            &View::Failed {
                message: FAILED_CALL_GUIDANCE.to_string()
            }
        );
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let state = DashboardState::new();
        let (state, first_tag) = state.begin();
        let (state, second_tag) = state.begin();

        // The superseded request resolves late; nothing may change.
        let after_stale = state.resolve(
            first_tag,
            Machine::A,
            Ok(EnergyForecast {
                predicted_energy: 999.0,
            }),
        );
        assert_eq!(after_stale, state);
        assert!(after_stale.in_flight());
        assert_eq!(after_stale.prediction(), None);

        // The latest request resolves normally.
        let resolved = after_stale.resolve(
            second_tag,
            Machine::B,
            Ok(EnergyForecast {
                predicted_energy: 100.0,
            }),
        );
        assert!(!resolved.in_flight());
        assert_eq!(resolved.prediction(), Some(100.0));
    }

    #[test]
    fn test_failure_after_success_keeps_no_prediction() {
        let (pending, tag) = DashboardState::new().begin();
        let shown = pending.resolve(
            tag,
            Machine::B,
            Ok(EnergyForecast {
                predicted_energy: 480.0,
            }),
        );

        let (pending, tag) = shown.begin();
        let failed = pending.resolve(tag, Machine::B, Err(status_error()));
        assert_eq!(failed.prediction(), None);
        assert_eq!(failed.recommendation(), None);
    }
}
