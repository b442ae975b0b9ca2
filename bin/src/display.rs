//! Output rendering for the wattline CLI.

use wattline_lib::prelude::*;

/// Prints the resolved dashboard state for one attempt.
///
/// Returns false if the attempt failed, so callers can set the exit code.
pub(crate) fn render_state(machine: Machine, state: &DashboardState) -> bool {
    match state.view() {
        View::Forecast {
            predicted_kwh,
            recommendation,
            ..
        } => {
            println!(
                "{}: predicted energy {} kWh",
                machine.label(),
                format_kwh(*predicted_kwh)
            );
            if let Some(rec) = recommendation {
                println!("  Recommendation: {rec}");
            }
            true
        }
        View::Failed { message } => {
            eprintln!("{}: {message}", machine.label());
            false
        }
        // predict() always resolves before rendering.
        View::Idle => false,
    }
}

/// Formats a kWh value the way the service reports it: whole numbers
/// without a fraction, everything else with two decimals.
fn format_kwh(kwh: f64) -> String {
    if kwh.fract().abs() < f64::EPSILON {
        format!("{kwh:.0}")
    } else {
        format!("{kwh:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kwh() {
        assert_eq!(format_kwh(500.0), "500");
        assert_eq!(format_kwh(123.456), "123.46");
        assert_eq!(format_kwh(88.5), "88.50");
    }
}
