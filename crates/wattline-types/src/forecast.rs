//! Response payloads from the prediction service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Successful response from `POST /predict`.
///
/// Only `predicted_energy` is consumed; any other fields the service
/// returns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyForecast {
    /// Predicted energy consumption in kWh.
    pub predicted_energy: f64,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Service status string, e.g. `"healthy"`.
    pub status: String,
    /// Whether the prediction model is loaded and serving.
    pub model_loaded: bool,
}

impl HealthReport {
    /// Returns true if the service reports itself healthy and serving.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

/// Response from `GET /machines`: the machines the service knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineList {
    /// Wire identifiers of the available machines.
    pub machines: Vec<String>,
    /// Per-machine descriptions keyed by wire identifier.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}
