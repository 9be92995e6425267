//! Headline values derived from a projected window.
//!
//! Both threshold days are found in a single pass, first match wins. A day
//! that never comes within the window is reported as `None`, not as an error.

use serde::Serialize;

use crate::constants::{SOLID_FRACTION, WEAKENING_FRACTION};
use crate::projector::DerivedDay;
use crate::weather::WeatherWindow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Index of the first day with less than the unsafe fraction remaining.
    pub unsafe_day: Option<usize>,
    /// Index of the first day with no ice remaining.
    pub ice_gone_day: Option<usize>,
}

impl Summary {
    /// Scan projected days for both threshold crossings.
    ///
    /// `unsafe_below` is the remaining thickness [cm] under which the ice is
    /// unsafe (starting thickness times the unsafe fraction).
    pub fn from_days(days: &[DerivedDay], unsafe_below: f64) -> Self {
        let mut summary = Summary::default();
        for (i, day) in days.iter().enumerate() {
            if summary.unsafe_day.is_none() && day.remaining < unsafe_below {
                summary.unsafe_day = Some(i);
            }
            if summary.ice_gone_day.is_none() && day.remaining <= 0.0 {
                summary.ice_gone_day = Some(i);
            }
            if summary.unsafe_day.is_some() && summary.ice_gone_day.is_some() {
                break;
            }
        }
        summary
    }
}

/// Callout text for a threshold day: `~DD.MM` when it falls inside the
/// window, otherwise `after DD.MM` naming the window's last day.
pub fn headline(day: Option<&DerivedDay>, window: &WeatherWindow) -> String {
    match day {
        Some(d) => format!("~{}", d.weather.date),
        None => format!("after {}", window.last().date),
    }
}

/// Coarse state of the ice, by the fraction of starting thickness left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IceCondition {
    /// More than 60% left.
    Solid,
    /// More than 30% left.
    Weakening,
    /// Some ice left.
    Critical,
    Gone,
}

impl IceCondition {
    pub fn classify(remaining: f64, ice_thickness: f64) -> Self {
        if remaining <= 0.0 {
            return IceCondition::Gone;
        }
        // remaining > 0 implies ice_thickness > 0
        let fraction = remaining / ice_thickness;
        if fraction > SOLID_FRACTION {
            IceCondition::Solid
        } else if fraction > WEAKENING_FRACTION {
            IceCondition::Weakening
        } else {
            IceCondition::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IceCondition::Solid => "solid",
            IceCondition::Weakening => "weakening",
            IceCondition::Critical => "critical",
            IceCondition::Gone => "gone",
        }
    }
}
