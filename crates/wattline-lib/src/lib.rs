//! Client library for the wattline energy prediction service.
//!
//! This is a facade crate that re-exports functionality from the wattline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use wattline_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PredictClient::from_env()?;
//!     let mut dashboard = Dashboard::new(client);
//!
//!     let state = dashboard.predict(Machine::B).await;
//!     match state.view() {
//!         View::Forecast { predicted_kwh, recommendation, .. } => {
//!             println!("{predicted_kwh} kWh");
//!             if let Some(rec) = recommendation {
//!                 println!("{rec}");
//!             }
//!         }
//!         View::Failed { message } => eprintln!("{message}"),
//!         View::Idle => {}
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wattline/wattline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use wattline_types::*;

// Re-export the HTTP client
pub use wattline_client::{
    API_URL_ENV, ClientConfig, DEFAULT_BASE_URL, FAILED_CALL_GUIDANCE, PredictClient,
    PredictError, UNREACHABLE_GUIDANCE,
};

// Re-export the dashboard flow
pub use wattline_dashboard::{
    Clock, Dashboard, DashboardState, FixedClock, HIGH_USAGE_THRESHOLD_KWH, Recommendation,
    RequestTag, SystemClock, View, recommend, request_at,
};

/// Prelude module for convenient imports.
///
/// ```
/// use wattline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use wattline_types::{
        EnergyForecast, HealthReport, Machine, MachineList, MachineParseError, PredictionRequest,
        RequestError,
    };

    pub use wattline_client::{ClientConfig, PredictClient, PredictError};

    pub use wattline_dashboard::{
        Clock, Dashboard, DashboardState, FixedClock, Recommendation, SystemClock, View,
    };
}
