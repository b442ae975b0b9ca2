//! CLI command implementations.

pub(crate) mod health;
pub(crate) mod machines;
pub(crate) mod predict;

use anyhow::{Context, Result};
use wattline_lib::prelude::*;

/// Builds the HTTP client from the `--api-url` flag, the environment, or
/// the local default, in that order.
pub(crate) fn build_client(api_url: Option<&str>) -> Result<PredictClient> {
    let config = match api_url {
        Some(url) => ClientConfig::default().with_base_url(url),
        None => ClientConfig::from_env(),
    };
    PredictClient::new(config).context("Failed to build HTTP client")
}
