//! Error type for the fallible edges around the projector.
//!
//! The projection itself is total. Errors only arise when user input is
//! parsed or bounded before it reaches the projector.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IceMeltError {
    /// Scenario key other than `low`, `mid` or `high`.
    #[error("unknown scenario '{0}', expected one of: low, mid, high")]
    UnknownScenario(String),

    /// Starting thickness outside the slider range.
    #[error("ice thickness {value} cm is out of bounds [{min}, {max}]")]
    ThicknessOutOfRange { value: i32, min: i32, max: i32 },

    /// A weather window needs at least one day.
    #[error("weather window is empty")]
    EmptyWeather,
}

pub type Result<T> = std::result::Result<T, IceMeltError>;
