//! Threshold-based usage recommendation.

use wattline_types::Machine;

/// Forecasts strictly above this many kWh trigger a high-usage
/// recommendation.
pub const HIGH_USAGE_THRESHOLD_KWH: f64 = 450.0;

/// A high-usage recommendation for a machine.
///
/// Derived, never stored: it lives exactly as long as the forecast it was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// The machine the recommendation is about.
    pub machine: Machine,
    /// The forecast that triggered it, in kWh.
    pub predicted_kwh: f64,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "High energy usage detected! Consider reducing load on {}.",
            self.machine.id()
        )
    }
}

/// Applies the fixed business rule: a forecast strictly above
/// [`HIGH_USAGE_THRESHOLD_KWH`] yields a recommendation naming the
/// machine; anything at or below it yields none.
#[must_use]
pub fn recommend(machine: Machine, predicted_kwh: f64) -> Option<Recommendation> {
    (predicted_kwh > HIGH_USAGE_THRESHOLD_KWH).then_some(Recommendation {
        machine,
        predicted_kwh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_or_below_threshold_yields_nothing() {
        assert_eq!(recommend(Machine::A, 200.0), None);
        assert_eq!(recommend(Machine::B, 450.0), None);
        assert_eq!(recommend(Machine::C, 0.0), None);
    }

    #[test]
    fn test_above_threshold_names_the_machine() {
        let rec = recommend(Machine::B, 500.0).expect("should recommend");
        let text = rec.to_string();
        assert!(text.contains("Machine_B"));
        assert!(text.contains("High energy usage"));
    }

    #[test]
    fn test_just_above_threshold() {
        assert!(recommend(Machine::A, 450.01).is_some());
    }
}
