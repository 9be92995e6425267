//! Ice-melt numerical constants.
//!
//! Heuristic values for the degree-day ice projection. They carry no
//! physical derivation and are treated as fixed configuration.

// -- Melt bonuses --

/// Additive melt factor on rainy days [cm/TDD].
pub const RAIN_BONUS: f64 = 0.15;

/// Daily average temperature above which rain counts as warm rain [C].
pub const RAIN_MIN_AVERAGE: f64 = 2.0;

/// Additive melt factor on sunny days [cm/TDD].
pub const SUN_BONUS: f64 = 0.10;

/// Sunshine hours above which a day counts as sunny [h].
pub const SUN_MIN_HOURS: u32 = 4;

// -- Thresholds --

/// Ice is unsafe once less than this fraction of the starting thickness remains.
pub const UNSAFE_FRACTION: f64 = 0.5;

/// Remaining fraction above which the ice still reads as solid.
pub const SOLID_FRACTION: f64 = 0.6;

/// Remaining fraction above which the ice reads as weakening rather than critical.
pub const WEAKENING_FRACTION: f64 = 0.3;

// -- Scenario melt factors [cm/TDD] --

pub const LOW_FACTOR: f64 = 0.5;
pub const MID_FACTOR: f64 = 0.75;
pub const HIGH_FACTOR: f64 = 1.0;

// -- Ice thickness input [cm] --

/// Inclusive bounds on the user-adjustable starting thickness.
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

pub const THICKNESS_BOUNDS: Bounds = Bounds { min: 10, max: 40 };

/// Starting thickness before the user touches the slider.
pub const DEFAULT_THICKNESS: i32 = 25;

/// Length of the compiled-in forecast window [days].
pub const WINDOW_DAYS: usize = 14;
