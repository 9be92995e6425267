//! icemelt-core — degree-day lake ice melt projection.
//!
//! Projects how a lake ice sheet thins over a short forecast window from
//! daily max/min temperature, rain and sunshine. The projector is a pure
//! function; front ends drive it through [`controller::Controller`].
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod params;
pub mod processes;
pub mod projector;
pub mod scenario;
pub mod state;
pub mod summary;
pub mod traits;
pub mod weather;

pub use config::MeltConfig;
pub use controller::Controller;
pub use error::{IceMeltError, Result};
pub use params::{IceThickness, Parameters};
pub use projector::{project, project_with, DayFluxes, DayFluxesSeries, DerivedDay, Projection};
pub use scenario::Scenario;
pub use summary::{headline, IceCondition, Summary};
pub use weather::{Condition, DailyWeather, WeatherWindow};
