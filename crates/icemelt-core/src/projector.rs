/// Melt projector orchestration.
///
/// - `step()`: project one day -> (State, DerivedDay)
/// - `project()` / `project_with()`: project a whole window -> Projection
use icemelt_macros::Series;
use serde::Serialize;

use crate::config::MeltConfig;
use crate::params::Parameters;
use crate::processes;
use crate::state::State;
use crate::summary::{IceCondition, Summary};
use crate::traits::DegreeDayModel;
use crate::weather::{DailyWeather, WeatherWindow};

/// A forecast day extended with its melt balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedDay {
    #[serde(flatten)]
    pub weather: DailyWeather,
    /// Daily average temperature [C].
    pub average_temp: f64,
    /// Thawing degree days [C day].
    pub tdd: f64,
    /// Ice melted this day [cm].
    pub daily_melt: f64,
    /// Ice melted since the window start [cm].
    pub cumulative_melt: f64,
    /// Ice left at the end of the day [cm].
    pub remaining: f64,
}

impl DerivedDay {
    pub fn fluxes(&self) -> DayFluxes {
        DayFluxes {
            average_temp: self.average_temp,
            tdd: self.tdd,
            daily_melt: self.daily_melt,
            cumulative_melt: self.cumulative_melt,
            remaining: self.remaining,
        }
    }

    pub fn condition(&self, ice_thickness: f64) -> IceCondition {
        IceCondition::classify(self.remaining, ice_thickness)
    }
}

/// Numeric part of a derived day, collected column-wise as `DayFluxesSeries`.
#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct DayFluxes {
    pub average_temp: f64,
    pub tdd: f64,
    pub daily_melt: f64,
    pub cumulative_melt: f64,
    pub remaining: f64,
}

/// Degree-day ice melt model.
pub struct IceMelt;

impl DegreeDayModel for IceMelt {
    type Params = Parameters;
    type State = State;
    type Forcing = DailyWeather;
    type Output = DerivedDay;

    fn initialize_state(_params: &Parameters) -> State {
        State::initialize()
    }

    fn step(state: &State, params: &Parameters, day: &DailyWeather) -> (State, DerivedDay) {
        step(state, params, day)
    }
}

/// Project one day.
///
/// Takes the melt accumulated so far, returns the new state and the day's
/// derived values. The input state is not mutated.
pub fn step(state: &State, params: &Parameters, day: &DailyWeather) -> (State, DerivedDay) {
    let config = &params.config;

    // 1. Daily average
    let average = processes::average_temperature(day.max_temp, day.min_temp);

    // 2. Thawing degree days
    let tdd = processes::thawing_degree_days(average);

    // 3-4. Bonuses
    let rain = processes::rain_bonus(day.rain, average, config.rain_bonus, config.rain_min_average);
    let sun = processes::sun_bonus(day.sun_hours, config.sun_bonus, config.sun_min_hours);

    // 5. Melt
    let melt = processes::daily_melt(tdd, params.melt_factor, rain, sun);

    // 6. Accumulate
    let cumulative_melt = state.cumulative_melt + melt;

    // 7. Remaining ice
    let remaining = processes::remaining_thickness(params.ice_thickness, cumulative_melt);

    tracing::trace!(
        date = day.date,
        average,
        tdd,
        melt,
        cumulative_melt,
        remaining,
        "projected day"
    );

    let derived = DerivedDay {
        weather: *day,
        average_temp: average,
        tdd,
        daily_melt: melt,
        cumulative_melt,
        remaining,
    };

    (State { cumulative_melt }, derived)
}

/// Project a window with the default heuristic constants.
pub fn project(weather: &WeatherWindow, ice_thickness: f64, melt_factor: f64) -> Projection {
    project_with(&MeltConfig::default(), weather, ice_thickness, melt_factor)
}

/// Project a window from scratch.
///
/// Never fails and never validates: out-of-range thickness or factors still
/// compute. Every call builds a fresh sequence.
pub fn project_with(
    config: &MeltConfig,
    weather: &WeatherWindow,
    ice_thickness: f64,
    melt_factor: f64,
) -> Projection {
    let params = Parameters::with_config(ice_thickness, melt_factor, *config);
    let days = IceMelt::run(&params, weather, None);
    let summary = Summary::from_days(&days, params.unsafe_below());
    Projection {
        params,
        days,
        summary,
    }
}

/// Result of projecting a whole window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(flatten)]
    params: Parameters,
    days: Vec<DerivedDay>,
    summary: Summary,
}

impl Projection {
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn ice_thickness(&self) -> f64 {
        self.params.ice_thickness
    }

    pub fn melt_factor(&self) -> f64 {
        self.params.melt_factor
    }

    pub fn days(&self) -> &[DerivedDay] {
        &self.days
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// First day with less than half the starting ice left.
    pub fn unsafe_day(&self) -> Option<&DerivedDay> {
        self.summary.unsafe_day.map(|i| &self.days[i])
    }

    /// First day with no ice left.
    pub fn ice_gone_day(&self) -> Option<&DerivedDay> {
        self.summary.ice_gone_day.map(|i| &self.days[i])
    }

    /// Cumulative melt at the end of the window [cm]. Independent of the
    /// starting thickness.
    pub fn total_melt(&self) -> f64 {
        self.days.last().map_or(0.0, |d| d.cumulative_melt)
    }

    /// Thawing degree days summed over the window.
    pub fn total_tdd(&self) -> f64 {
        self.days.iter().map(|d| d.tdd).sum()
    }

    /// Column-wise view of the numeric per-day values.
    pub fn fluxes(&self) -> DayFluxesSeries {
        let mut series = DayFluxesSeries::with_capacity(self.days.len());
        for d in &self.days {
            series.push(&d.fluxes());
        }
        series
    }

    /// Number of projected days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no days were projected.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::weather::{Condition, FORECAST};

    const EPS: f64 = 1e-9;

    fn custom_day(max_temp: i32, min_temp: i32, rain: bool, sun_hours: u32) -> DailyWeather {
        DailyWeather::new("01.01", "Pn", max_temp, min_temp, Condition::Cloudy, rain, sun_hours)
    }

    fn forecast_run(ice_thickness: f64, melt_factor: f64) -> Projection {
        project(&WeatherWindow::forecast(), ice_thickness, melt_factor)
    }

    // -- step() --

    #[test]
    fn step_plain_mid_day() {
        // avg +6, no rain, 4h sun -> no bonus
        let p = Parameters::new(25.0, Scenario::Mid.factor());
        let (_, d) = step(&State::initialize(), &p, &custom_day(11, 1, false, 4));
        assert_eq!(d.average_temp, 6.0);
        assert!((d.daily_melt - 4.5).abs() < EPS);
    }

    #[test]
    fn step_warm_rain_day() {
        // avg +8, rain, no sun -> rain bonus only
        let p = Parameters::new(25.0, 0.75);
        let (_, d) = step(&State::initialize(), &p, &custom_day(9, 7, true, 0));
        assert!((d.daily_melt - 7.2).abs() < EPS);
    }

    #[test]
    fn step_freezing_day_melts_nothing() {
        let p = Parameters::new(25.0, 1.0);
        let (s, d) = step(&State::initialize(), &p, &custom_day(0, -9, true, 8));
        assert_eq!(d.tdd, 0.0);
        assert_eq!(d.daily_melt, 0.0);
        assert_eq!(s.cumulative_melt, 0.0);
        assert_eq!(d.remaining, 25.0);
    }

    #[test]
    fn step_does_not_mutate_input_state() {
        let p = Parameters::new(25.0, 0.75);
        let s = State { cumulative_melt: 3.0 };
        let (new_state, d) = step(&s, &p, &custom_day(10, 2, false, 0));
        assert_eq!(s.cumulative_melt, 3.0);
        assert!((new_state.cumulative_melt - 7.5).abs() < EPS);
        assert!((d.remaining - 17.5).abs() < EPS);
    }

    #[test]
    fn step_carries_weather_through() {
        let p = Parameters::new(25.0, 0.75);
        let (_, d) = step(&State::initialize(), &p, &FORECAST[2]);
        assert_eq!(d.weather, FORECAST[2]);
    }

    // -- project(): invariants --

    #[test]
    fn output_length_matches_window() {
        let r = forecast_run(25.0, 0.75);
        assert_eq!(r.len(), 14);
        assert!(!r.is_empty());
    }

    #[test]
    fn tdd_never_negative() {
        let r = forecast_run(25.0, 0.75);
        for d in r.days() {
            assert!(d.tdd >= 0.0);
            if d.average_temp <= 0.0 {
                assert_eq!(d.tdd, 0.0, "{}", d.weather.date);
            }
        }
    }

    #[test]
    fn cumulative_is_prefix_sum_and_remaining_clamped() {
        let r = forecast_run(25.0, 0.75);
        let mut sum = 0.0;
        for d in r.days() {
            sum += d.daily_melt;
            assert!((d.cumulative_melt - sum).abs() < EPS);
            assert!((d.remaining - (25.0 - sum).max(0.0)).abs() < EPS);
            assert!(d.remaining >= 0.0);
        }
    }

    #[test]
    fn cumulative_non_decreasing_remaining_non_increasing() {
        for s in Scenario::ALL {
            let r = forecast_run(40.0, s.factor());
            for w in r.days().windows(2) {
                assert!(w[1].cumulative_melt >= w[0].cumulative_melt);
                assert!(w[1].remaining <= w[0].remaining);
            }
        }
    }

    #[test]
    fn total_melt_independent_of_thickness() {
        let a = forecast_run(10.0, 0.75);
        let b = forecast_run(40.0, 0.75);
        assert_eq!(a.total_melt(), b.total_melt());
    }

    #[test]
    fn melt_monotonic_in_factor() {
        let low = forecast_run(25.0, 0.5);
        let high = forecast_run(25.0, 1.0);
        for (l, h) in low.days().iter().zip(high.days()) {
            assert!(h.daily_melt >= l.daily_melt, "{}", l.weather.date);
        }
    }

    #[test]
    fn deterministic() {
        let a = forecast_run(25.0, 0.75);
        let b = forecast_run(25.0, 0.75);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_inputs_still_compute() {
        let r = forecast_run(100.0, 0.01);
        assert_eq!(r.len(), 14);
        assert_eq!(r.ice_gone_day(), None);

        let r = forecast_run(-5.0, 0.75);
        assert!(r.days().iter().all(|d| d.remaining == 0.0));
        assert_eq!(r.summary().ice_gone_day, Some(0));
    }

    // -- project(): golden values for the forecast window --

    #[test]
    fn golden_mid_25cm() {
        let r = forecast_run(25.0, 0.75);
        assert_eq!(r.summary().unsafe_day, Some(4));
        assert_eq!(r.summary().ice_gone_day, Some(6));
        assert_eq!(r.unsafe_day().map(|d| d.weather.date), Some("24.02"));
        assert_eq!(r.ice_gone_day().map(|d| d.weather.date), Some("26.02"));
        assert!((r.total_melt() - 72.875).abs() < EPS);
    }

    #[test]
    fn golden_mid_25cm_early_days() {
        let r = forecast_run(25.0, 0.75);
        let d = r.days();
        // 20.02 and 21.02 are at or below zero on average
        assert_eq!(d[0].remaining, 25.0);
        assert_eq!(d[1].remaining, 25.0);
        // 22.02: avg 5.5, warm rain
        assert!((d[2].daily_melt - 4.95).abs() < EPS);
        // 23.02: avg 8, warm rain
        assert!((d[3].daily_melt - 7.2).abs() < EPS);
        assert!((d[3].remaining - 12.85).abs() < EPS);
        // 24.02: avg 5, 4h sun is not enough for the bonus
        assert!((d[4].daily_melt - 3.75).abs() < EPS);
    }

    #[test]
    fn golden_other_scenarios() {
        let cases = [
            (25.0, 0.5, Some(5), Some(7)),
            (25.0, 1.0, Some(3), Some(5)),
            (40.0, 0.5, Some(7), Some(11)),
            (10.0, 0.75, Some(3), Some(3)),
        ];
        for (thickness, factor, unsafe_day, gone) in cases {
            let s = forecast_run(thickness, factor).summary();
            assert_eq!(s.unsafe_day, unsafe_day, "{thickness} cm @ {factor}");
            assert_eq!(s.ice_gone_day, gone, "{thickness} cm @ {factor}");
        }
    }

    #[test]
    fn golden_totals_per_scenario() {
        assert!((forecast_run(25.0, 0.5).total_melt() - 51.25).abs() < EPS);
        assert!((forecast_run(25.0, 1.0).total_melt() - 94.5).abs() < EPS);
        assert!((forecast_run(25.0, 0.75).total_tdd() - 86.5).abs() < EPS);
    }

    #[test]
    fn cold_window_reports_absence() {
        let w = WeatherWindow::new([custom_day(-1, -8, false, 6), custom_day(1, -3, true, 2)]).unwrap();
        let r = project(&w, 25.0, 1.0);
        assert_eq!(r.unsafe_day(), None);
        assert_eq!(r.ice_gone_day(), None);
        assert_eq!(r.total_melt(), 0.0);
    }

    // -- Custom config --

    #[test]
    fn custom_config_changes_bonus() {
        let config = MeltConfig {
            rain_bonus: 0.0,
            ..MeltConfig::default()
        };
        let w = WeatherWindow::new([custom_day(9, 7, true, 0)]).unwrap();
        let r = project_with(&config, &w, 25.0, 0.75);
        assert!((r.days()[0].daily_melt - 6.0).abs() < EPS);
    }

    // -- fluxes() --

    #[test]
    fn fluxes_mirror_days() {
        let r = forecast_run(25.0, 0.75);
        let f = r.fluxes();
        assert_eq!(f.len(), r.len());
        for (i, d) in r.days().iter().enumerate() {
            assert_eq!(f.remaining[i], d.remaining);
            assert_eq!(f.row(i), Some(d.fluxes()));
        }
        assert_eq!(f.column("tdd").map(<[f64]>::len), Some(14));
    }

    #[test]
    fn condition_follows_remaining() {
        let r = forecast_run(25.0, 0.75);
        assert_eq!(r.days()[0].condition(25.0), IceCondition::Solid);
        assert_eq!(r.days()[6].condition(25.0), IceCondition::Gone);
    }

    // -- Trait default run --

    #[test]
    fn trait_run_with_initial_state() {
        let p = Parameters::new(25.0, 0.75);
        let start = State { cumulative_melt: 20.0 };
        let days = IceMelt::run(&p, &FORECAST[2..3], Some(&start));
        assert_eq!(days.len(), 1);
        assert!((days[0].cumulative_melt - 24.95).abs() < EPS);
        assert!((days[0].remaining - 0.05).abs() < EPS);
    }

    // -- Serialization --

    #[test]
    fn json_flattens_weather_and_params() {
        let r = forecast_run(25.0, 0.75);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["ice_thickness"], 25.0);
        assert_eq!(v["melt_factor"], 0.75);
        assert_eq!(v["days"][0]["date"], "20.02");
        assert_eq!(v["days"][0]["condition"], "sunny");
        assert_eq!(v["summary"]["unsafe_day"], 4);
    }
}
