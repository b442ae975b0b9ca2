//! Prediction request payload.

use crate::Machine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for out-of-range time fields in a prediction request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Hour outside 0..=23.
    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    /// Day-of-month outside 1..=31.
    #[error("Invalid day: {0} (expected 1-31)")]
    InvalidDay(u32),
}

/// The JSON body POSTed to the prediction service.
///
/// Wire shape: `{"machine": "<id>", "hour": <0-23>, "day": <1-31>}`.
/// `hour` and `day` describe the moment the prediction is for and are
/// normally derived from the caller's wall clock, not typed in by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// The machine to predict for.
    pub machine: Machine,
    /// Hour of day, 0..=23.
    pub hour: u32,
    /// Day of month, 1..=31.
    pub day: u32,
}

impl PredictionRequest {
    /// Creates a request, validating the time fields.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour` or `day` is out of range.
    pub const fn new(machine: Machine, hour: u32, day: u32) -> Result<Self, RequestError> {
        if hour > 23 {
            return Err(RequestError::InvalidHour(hour));
        }
        if day == 0 || day > 31 {
            return Err(RequestError::InvalidDay(day));
        }
        Ok(Self { machine, hour, day })
    }
}
