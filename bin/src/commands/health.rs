//! Health command implementation.

use anyhow::{Result, bail};
use wattline_lib::prelude::*;

/// Check that the prediction service is up and its model is loaded.
pub(crate) async fn health(api_url: Option<&str>) -> Result<()> {
    let client = super::build_client(api_url)?;

    match client.health().await {
        Ok(report) => {
            println!("Endpoint:     {}", client.config().base_url);
            println!("Status:       {}", report.status);
            println!("Model loaded: {}", report.model_loaded);
            if !report.is_healthy() {
                bail!("Service is reachable but not serving predictions");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.guidance());
            Err(err.into())
        }
    }
}
