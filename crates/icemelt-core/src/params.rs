/// Projection inputs.
///
/// - `Parameters`: raw projector inputs, never validated
/// - `IceThickness`: the slider value, bounded to [10, 40] cm
use serde::{Deserialize, Serialize};

use crate::config::MeltConfig;
use crate::constants::{DEFAULT_THICKNESS, THICKNESS_BOUNDS};
use crate::error::{IceMeltError, Result};

/// Inputs to a single projection run.
///
/// Out-of-range values still compute; bounding is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameters {
    /// Starting ice thickness [cm].
    pub ice_thickness: f64,
    /// Melt factor [cm/TDD].
    pub melt_factor: f64,
    /// Bonus and threshold constants.
    pub config: MeltConfig,
}

impl Parameters {
    /// Inputs with the default heuristic constants.
    pub fn new(ice_thickness: f64, melt_factor: f64) -> Self {
        Self::with_config(ice_thickness, melt_factor, MeltConfig::default())
    }

    pub fn with_config(ice_thickness: f64, melt_factor: f64, config: MeltConfig) -> Self {
        Self {
            ice_thickness,
            melt_factor,
            config,
        }
    }

    /// Remaining thickness below which the ice counts as unsafe [cm].
    pub fn unsafe_below(&self) -> f64 {
        self.ice_thickness * self.config.unsafe_fraction
    }
}

/// User-adjustable starting thickness in whole centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct IceThickness(i32);

impl IceThickness {
    /// Create a thickness, returning an error outside [10, 40] cm.
    pub fn new(cm: i32) -> Result<Self> {
        if !(THICKNESS_BOUNDS.min..=THICKNESS_BOUNDS.max).contains(&cm) {
            return Err(IceMeltError::ThicknessOutOfRange {
                value: cm,
                min: THICKNESS_BOUNDS.min,
                max: THICKNESS_BOUNDS.max,
            });
        }
        Ok(Self(cm))
    }

    pub fn cm(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Every valid slider position, thinnest first.
    pub fn range() -> impl Iterator<Item = IceThickness> {
        (THICKNESS_BOUNDS.min..=THICKNESS_BOUNDS.max).map(IceThickness)
    }
}

impl Default for IceThickness {
    fn default() -> Self {
        Self(DEFAULT_THICKNESS)
    }
}

impl TryFrom<i32> for IceThickness {
    type Error = IceMeltError;

    fn try_from(cm: i32) -> Result<Self> {
        Self::new(cm)
    }
}

impl From<IceThickness> for i32 {
    fn from(t: IceThickness) -> i32 {
        t.0
    }
}
