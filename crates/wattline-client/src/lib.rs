//! HTTP client for the wattline energy prediction service.
//!
//! The service exposes a single prediction endpoint plus two auxiliary
//! ones; this crate wraps all three behind [`PredictClient`] and maps
//! failures into the two kinds the UI distinguishes (server unreachable
//! vs. call failed).
//!
//! # Example
//!
//! ```no_run
//! use wattline_client::PredictClient;
//! use wattline_types::{Machine, PredictionRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PredictClient::from_env()?;
//! let request = PredictionRequest::new(Machine::B, 14, 9)?;
//! let forecast = client.predict(&request).await?;
//! println!("{} kWh", forecast.predicted_energy);
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wattline/wattline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod error;

pub use client::PredictClient;
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::{FAILED_CALL_GUIDANCE, PredictError, UNREACHABLE_GUIDANCE};
