//! Presentation controller.
//!
//! Owns the two user inputs and the projection they produce. Every input
//! change recomputes the whole window and drops the previous result.

use crate::params::IceThickness;
use crate::projector::{self, Projection};
use crate::scenario::Scenario;
use crate::summary::headline;
use crate::weather::WeatherWindow;

#[derive(Debug, Clone)]
pub struct Controller {
    weather: WeatherWindow,
    thickness: IceThickness,
    scenario: Scenario,
    projection: Projection,
}

impl Controller {
    /// Start from the default inputs (25 cm, typical scenario).
    pub fn new(weather: WeatherWindow) -> Self {
        Self::with_inputs(weather, IceThickness::default(), Scenario::default())
    }

    pub fn with_inputs(weather: WeatherWindow, thickness: IceThickness, scenario: Scenario) -> Self {
        let projection = projector::project(&weather, thickness.as_f64(), scenario.factor());
        let controller = Self {
            weather,
            thickness,
            scenario,
            projection,
        };
        controller.log_recompute();
        controller
    }

    pub fn set_thickness(&mut self, thickness: IceThickness) {
        self.thickness = thickness;
        self.recompute();
    }

    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.recompute();
    }

    pub fn thickness(&self) -> IceThickness {
        self.thickness
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn weather(&self) -> &WeatherWindow {
        &self.weather
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Callout text for the unsafe-ice day.
    pub fn unsafe_headline(&self) -> String {
        headline(self.projection.unsafe_day(), &self.weather)
    }

    /// Callout text for the ice-gone day.
    pub fn ice_gone_headline(&self) -> String {
        headline(self.projection.ice_gone_day(), &self.weather)
    }

    fn recompute(&mut self) {
        self.projection =
            projector::project(&self.weather, self.thickness.as_f64(), self.scenario.factor());
        self.log_recompute();
    }

    fn log_recompute(&self) {
        let summary = self.projection.summary();
        tracing::debug!(
            thickness_cm = self.thickness.cm(),
            scenario = %self.scenario,
            unsafe_day = ?summary.unsafe_day,
            ice_gone_day = ?summary.ice_gone_day,
            "projection recomputed"
        );
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(WeatherWindow::forecast())
    }
}
