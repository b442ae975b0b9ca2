//! Prediction client flow and dashboard state for wattline.
//!
//! This crate ties the pieces together: an injectable [`Clock`] supplies
//! the hour and day-of-month for the request body, [`Dashboard`] sends the
//! request through `wattline-client`, and the outcome is folded into an
//! immutable-per-update [`DashboardState`] value holding the prediction,
//! the recommendation, and the in-flight indicator.
//!
//! # Example
//!
//! ```no_run
//! use wattline_client::PredictClient;
//! use wattline_dashboard::Dashboard;
//! use wattline_types::Machine;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PredictClient::from_env()?;
//! let mut dashboard = Dashboard::new(client);
//!
//! let state = dashboard.predict(Machine::B).await;
//! if let Some(kwh) = state.prediction() {
//!     println!("{kwh} kWh");
//! }
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wattline/wattline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advice;
mod clock;
mod flow;
mod state;

pub use advice::{HIGH_USAGE_THRESHOLD_KWH, Recommendation, recommend};
pub use clock::{Clock, FixedClock, SystemClock};
pub use flow::{Dashboard, request_at};
pub use state::{DashboardState, RequestTag, View};
