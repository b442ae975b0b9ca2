//! Factory machine definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A factory machine that the prediction service knows about.
///
/// The set is fixed: the prediction service is trained on exactly these
/// three machines and falls back to `Machine_A` for anything else, so the
/// client refuses unknown identifiers up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Machine {
    /// Base machine with standard energy consumption.
    #[serde(rename = "Machine_A")]
    A,
    /// Mid-tier machine with moderate energy consumption.
    #[serde(rename = "Machine_B")]
    B,
    /// Heavy-duty machine with high energy consumption.
    #[serde(rename = "Machine_C")]
    C,
}

impl Machine {
    /// Returns the wire identifier sent to the prediction service.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::A => "Machine_A",
            Self::B => "Machine_B",
            Self::C => "Machine_C",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "Machine A",
            Self::B => "Machine B",
            Self::C => "Machine C",
        }
    }

    /// Returns a short description of the machine's consumption profile.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Base machine - Standard energy consumption",
            Self::B => "Mid-tier machine - Moderate energy consumption",
            Self::C => "Heavy-duty machine - High energy consumption",
        }
    }

    /// Returns all known machines.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::A, Self::B, Self::C]
    }
}

impl std::fmt::Display for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when parsing an unknown machine identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown machine: {0} (expected one of Machine_A, Machine_B, Machine_C)")]
pub struct MachineParseError(pub String);

impl FromStr for Machine {
    type Err = MachineParseError;

    /// Parses a machine identifier case-insensitively.
    ///
    /// Accepts the wire id (`Machine_A`), the bare suffix (`a`), and the
    /// label form (`machine a`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "machine_a" | "a" => Ok(Self::A),
            "machine_b" | "b" => Ok(Self::B),
            "machine_c" | "c" => Ok(Self::C),
            _ => Err(MachineParseError(s.to_string())),
        }
    }
}
