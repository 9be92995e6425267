/// Melt-scenario presets.
///
/// Each preset is a melt-rate coefficient in cm of ice per thawing degree
/// day, standing in for the lake's exposure to sun, wind and rain.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_FACTOR, LOW_FACTOR, MID_FACTOR};
use crate::error::IceMeltError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Low,
    #[default]
    Mid,
    High,
}

impl Scenario {
    /// All presets, slowest melt first.
    pub const ALL: [Scenario; 3] = [Scenario::Low, Scenario::Mid, Scenario::High];

    /// Melt factor [cm/TDD].
    pub fn factor(self) -> f64 {
        match self {
            Scenario::Low => LOW_FACTOR,
            Scenario::Mid => MID_FACTOR,
            Scenario::High => HIGH_FACTOR,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Low => "low",
            Scenario::Mid => "mid",
            Scenario::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Low => "Cautious (0.5 cm/TDD)",
            Scenario::Mid => "Typical (0.75 cm/TDD)",
            Scenario::High => "Fast (1.0 cm/TDD)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Low => "sheltered lake, little wind",
            Scenario::Mid => "average conditions",
            Scenario::High => "lots of sun, rain, wind",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Scenario {
    type Err = IceMeltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Scenario::Low),
            "mid" => Ok(Scenario::Mid),
            "high" => Ok(Scenario::High),
            _ => Err(IceMeltError::UnknownScenario(s.to_string())),
        }
    }
}
