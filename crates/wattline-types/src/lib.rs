//! Core types for the wattline energy prediction client.
//!
//! This crate provides the fundamental data structures used throughout
//! wattline:
//!
//! - [`Machine`] - A factory machine from the fixed known set
//! - [`PredictionRequest`] - The JSON body sent to the prediction service
//! - [`EnergyForecast`] - The predicted energy value returned on success
//! - [`HealthReport`] / [`MachineList`] - Auxiliary service payloads

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wattline/wattline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod forecast;
mod machine;
mod request;

pub use forecast::{EnergyForecast, HealthReport, MachineList};
pub use machine::{Machine, MachineParseError};
pub use request::{PredictionRequest, RequestError};
