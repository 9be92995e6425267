/// Daily weather records and the forecast window they form.
///
/// The window is the projector's only forcing. It is compiled in and
/// never mutated once built.
use serde::Serialize;
use smallvec::SmallVec;

use crate::constants::WINDOW_DAYS;
use crate::error::{IceMeltError, Result};

/// Sky condition shown next to each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
}

impl Condition {
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::Rain => "🌧️",
        }
    }
}

/// One forecast day. Temperatures in [C], sunshine in [h].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyWeather {
    pub date: &'static str,
    pub day_of_week: &'static str,
    pub max_temp: i32,
    pub min_temp: i32,
    pub condition: Condition,
    pub rain: bool,
    pub sun_hours: u32,
}

impl DailyWeather {
    pub const fn new(
        date: &'static str,
        day_of_week: &'static str,
        max_temp: i32,
        min_temp: i32,
        condition: Condition,
        rain: bool,
        sun_hours: u32,
    ) -> Self {
        Self {
            date,
            day_of_week,
            max_temp,
            min_temp,
            condition,
            rain,
            sun_hours,
        }
    }
}

use self::Condition::{Cloudy, PartlyCloudy, Rain, Sunny};

/// Poznań area, 20 February to 5 March.
pub const FORECAST: [DailyWeather; WINDOW_DAYS] = [
    DailyWeather::new("20.02", "Pt", 0, -9, Sunny, false, 8),
    DailyWeather::new("21.02", "So", 5, -5, Rain, true, 0),
    DailyWeather::new("22.02", "Nd", 8, 3, Rain, true, 0),
    DailyWeather::new("23.02", "Pn", 9, 7, Rain, true, 0),
    DailyWeather::new("24.02", "Wt", 8, 2, PartlyCloudy, false, 4),
    DailyWeather::new("25.02", "Śr", 11, 1, Sunny, false, 7),
    DailyWeather::new("26.02", "Cz", 14, 2, PartlyCloudy, false, 5),
    DailyWeather::new("27.02", "Pt", 14, 7, Rain, true, 1),
    DailyWeather::new("28.02", "So", 11, 4, Cloudy, false, 3),
    DailyWeather::new("01.03", "Nd", 11, 4, Sunny, false, 5),
    DailyWeather::new("02.03", "Pn", 10, 2, Sunny, false, 4),
    DailyWeather::new("03.03", "Wt", 13, 4, Sunny, false, 5),
    DailyWeather::new("04.03", "Śr", 11, 2, Sunny, false, 6),
    DailyWeather::new("05.03", "Cz", 12, 3, Sunny, false, 5),
];

/// Ordered, non-empty sequence of forecast days in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherWindow {
    days: SmallVec<[DailyWeather; WINDOW_DAYS]>,
}

impl WeatherWindow {
    /// Build a window, rejecting an empty sequence.
    pub fn new(days: impl IntoIterator<Item = DailyWeather>) -> Result<Self> {
        let days: SmallVec<[DailyWeather; WINDOW_DAYS]> = days.into_iter().collect();
        if days.is_empty() {
            return Err(IceMeltError::EmptyWeather);
        }
        Ok(Self { days })
    }

    /// The compiled-in 14-day forecast.
    pub fn forecast() -> Self {
        Self {
            days: SmallVec::from_buf(FORECAST),
        }
    }

    pub fn days(&self) -> &[DailyWeather] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyWeather> {
        self.days.iter()
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false` for a constructed window.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first(&self) -> &DailyWeather {
        // Non-empty by construction.
        &self.days[0]
    }

    pub fn last(&self) -> &DailyWeather {
        &self.days[self.days.len() - 1]
    }
}

impl Default for WeatherWindow {
    fn default() -> Self {
        Self::forecast()
    }
}

impl<'a> IntoIterator for &'a WeatherWindow {
    type Item = &'a DailyWeather;
    type IntoIter = std::slice::Iter<'a, DailyWeather>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
