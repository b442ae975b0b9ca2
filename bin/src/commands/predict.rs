//! Predict command implementation.
//!
//! Runs the prediction flow for one machine (or all of them), showing a
//! spinner while the request is in flight and rendering the resulting
//! forecast, recommendation, or guidance message.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use wattline_lib::prelude::*;

use crate::display;

/// Request an energy forecast for a machine (or for every machine).
pub(crate) async fn predict(
    api_url: Option<&str>,
    machine: Option<&str>,
    all: bool,
    hour: Option<u32>,
    day: Option<u32>,
    quiet: bool,
) -> Result<()> {
    let client = super::build_client(api_url)?;

    // Pin the clock once so every machine in an --all run gets the same
    // hour and day.
    let clock = FixedClock::with_overrides(hour, day)
        .context("Hour/day override does not name a valid time")?;

    let machines: Vec<Machine> = if all {
        Machine::all().to_vec()
    } else {
        vec![resolve_machine(machine)?]
    };

    let mut dashboard = Dashboard::with_clock(client, clock);
    let mut failures = 0usize;

    for machine in machines {
        let spinner = in_flight_spinner(quiet, machine);
        let state = dashboard.predict(machine).await;
        spinner.finish_and_clear();

        if !display::render_state(machine, state) {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} prediction attempt(s) failed");
    }
    Ok(())
}

/// Resolves the machine argument, prompting interactively when omitted.
fn resolve_machine(machine: Option<&str>) -> Result<Machine> {
    match machine {
        Some(id) => id
            .parse::<Machine>()
            .with_context(|| format!("Unknown machine: {id}")),
        None => {
            let options = Machine::all().to_vec();
            inquire::Select::new("Select machine:", options)
                .prompt()
                .context("No machine selected")
        }
    }
}

/// The CLI's in-flight indicator: a spinner that runs exactly as long as
/// the request is outstanding.
fn in_flight_spinner(quiet: bool, machine: Machine) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Predicting energy for {}...", machine.label()));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
