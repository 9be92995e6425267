use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use icemelt_core::{project as core_project, DayFluxesSeries, Scenario, WeatherWindow};

define_series_result! {
    /// Projection over the forecast window with typed NumPy array attributes.
    pub struct ProjectionResult from DayFluxesSeries {
        average_temp, tdd, daily_melt, cumulative_melt, remaining,
    }
    extra {
        dates: Vec<String>,
        days_of_week: Vec<String>,
        /// Index of the first day below half the starting thickness.
        unsafe_day: Option<usize>,
        /// Index of the first day with no ice left.
        ice_gone_day: Option<usize>,
        total_melt: f64,
    }
}

#[pymethods]
impl ProjectionResult {
    fn __len__(&self) -> usize {
        self.dates.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ProjectionResult(days={}, unsafe_day={:?}, ice_gone_day={:?}, total_melt={:.3})",
            self.dates.len(),
            self.unsafe_day,
            self.ice_gone_day,
            self.total_melt
        )
    }
}

/// Project the forecast window for a named scenario.
#[pyfunction]
#[pyo3(signature = (ice_thickness, scenario="mid"))]
fn project(py: Python<'_>, ice_thickness: f64, scenario: &str) -> PyResult<ProjectionResult> {
    let scenario: Scenario = scenario
        .parse()
        .map_err(|e: icemelt_core::IceMeltError| PyValueError::new_err(e.to_string()))?;

    let window = WeatherWindow::forecast();
    let projection = core_project(&window, ice_thickness, scenario.factor());
    let summary = projection.summary();

    Ok(ProjectionResult::from_series(
        py,
        projection.fluxes(),
        window.iter().map(|d| d.date.to_string()).collect(),
        window.iter().map(|d| d.day_of_week.to_string()).collect(),
        summary.unsafe_day,
        summary.ice_gone_day,
        projection.total_melt(),
    ))
}

/// Project the forecast window for an arbitrary melt factor.
///
/// Returns the per-day columns as a dict of NumPy arrays.
#[pyfunction]
fn project_factor<'py>(
    py: Python<'py>,
    ice_thickness: f64,
    melt_factor: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let projection = core_project(&WeatherWindow::forecast(), ice_thickness, melt_factor);
    let series = projection.fluxes();
    Ok(series_to_dict!(
        py, series, average_temp, tdd, daily_melt, cumulative_melt, remaining,
    ))
}

/// Scenario presets: key -> (factor, label, description).
#[pyfunction]
fn scenarios<'py>(py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for s in Scenario::ALL {
        dict.set_item(s.key(), (s.factor(), s.label(), s.description()))?;
    }
    Ok(dict)
}

/// The compiled-in forecast as a list of dicts.
#[pyfunction]
fn forecast<'py>(py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for d in &WeatherWindow::forecast() {
        let day = PyDict::new(py);
        day.set_item("date", d.date)?;
        day.set_item("day_of_week", d.day_of_week)?;
        day.set_item("max_temp", d.max_temp)?;
        day.set_item("min_temp", d.min_temp)?;
        day.set_item("condition", d.condition.icon())?;
        day.set_item("rain", d.rain)?;
        day.set_item("sun_hours", d.sun_hours)?;
        list.append(day)?;
    }
    Ok(list)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "projection")?;
    m.add_function(wrap_pyfunction!(project, &m)?)?;
    m.add_function(wrap_pyfunction!(project_factor, &m)?)?;
    m.add_function(wrap_pyfunction!(scenarios, &m)?)?;
    m.add_function(wrap_pyfunction!(forecast, &m)?)?;
    m.add_class::<ProjectionResult>()?;
    parent.add_submodule(&m)?;

    // Flat access from the top-level module as well
    parent.add_function(wrap_pyfunction!(project, parent)?)?;
    parent.add_function(wrap_pyfunction!(project_factor, parent)?)?;
    parent.add_function(wrap_pyfunction!(scenarios, parent)?)?;
    parent.add_function(wrap_pyfunction!(forecast, parent)?)?;
    Ok(())
}
