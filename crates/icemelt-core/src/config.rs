/// Heuristic melt constants gathered into one value.
///
/// The projector reads these instead of the raw constants so front ends can
/// print what a projection was computed with.
use serde::{Deserialize, Serialize};

use crate::constants::{
    RAIN_BONUS, RAIN_MIN_AVERAGE, SUN_BONUS, SUN_MIN_HOURS, UNSAFE_FRACTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeltConfig {
    /// Added to the melt factor on warm rainy days [cm/TDD].
    pub rain_bonus: f64,
    /// Rain only counts when the daily average is strictly above this [C].
    pub rain_min_average: f64,
    /// Added to the melt factor on sunny days [cm/TDD].
    pub sun_bonus: f64,
    /// A day is sunny when sunshine strictly exceeds this [h].
    pub sun_min_hours: u32,
    /// Ice is unsafe below this fraction of the starting thickness.
    pub unsafe_fraction: f64,
}

impl Default for MeltConfig {
    fn default() -> Self {
        Self {
            rain_bonus: RAIN_BONUS,
            rain_min_average: RAIN_MIN_AVERAGE,
            sun_bonus: SUN_BONUS,
            sun_min_hours: SUN_MIN_HOURS,
            unsafe_fraction: UNSAFE_FRACTION,
        }
    }
}
