/// Ice-melt process functions.
///
/// Pure functions implementing each term of the daily degree-day balance.

/// Daily average temperature [C] from integer max and min.
pub fn average_temperature(max_temp: i32, min_temp: i32) -> f64 {
    (f64::from(max_temp) + f64::from(min_temp)) / 2.0
}

/// Thawing degree days: the positive part of the daily average.
pub fn thawing_degree_days(average: f64) -> f64 {
    average.max(0.0)
}

/// Warm-rain bonus. Applies only when it rains and the average is strictly
/// above `min_average`.
pub fn rain_bonus(rain: bool, average: f64, bonus: f64, min_average: f64) -> f64 {
    if rain && average > min_average {
        bonus
    } else {
        0.0
    }
}

/// Sunshine bonus. Applies only when sunshine strictly exceeds `min_hours`.
pub fn sun_bonus(sun_hours: u32, bonus: f64, min_hours: u32) -> f64 {
    if sun_hours > min_hours {
        bonus
    } else {
        0.0
    }
}

/// Ice melted in one day [cm].
pub fn daily_melt(tdd: f64, melt_factor: f64, rain_bonus: f64, sun_bonus: f64) -> f64 {
    tdd * (melt_factor + rain_bonus + sun_bonus)
}

/// Thickness left after `cumulative_melt`, clamped at zero [cm].
pub fn remaining_thickness(ice_thickness: f64, cumulative_melt: f64) -> f64 {
    (ice_thickness - cumulative_melt).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- average_temperature --

    #[test]
    fn average_of_max_and_min() {
        assert_eq!(average_temperature(11, 1), 6.0);
        assert_eq!(average_temperature(0, -9), -4.5);
        assert_eq!(average_temperature(5, -5), 0.0);
    }

    // -- thawing_degree_days --

    #[test]
    fn tdd_positive_part() {
        assert_eq!(thawing_degree_days(6.0), 6.0);
        assert_eq!(thawing_degree_days(-4.5), 0.0);
        assert_eq!(thawing_degree_days(0.0), 0.0);
    }

    // -- rain_bonus --

    #[test]
    fn rain_bonus_needs_warm_rain() {
        assert_eq!(rain_bonus(true, 5.5, 0.15, 2.0), 0.15);
        assert_eq!(rain_bonus(false, 5.5, 0.15, 2.0), 0.0);
    }

    #[test]
    fn rain_bonus_threshold_is_strict() {
        assert_eq!(rain_bonus(true, 2.0, 0.15, 2.0), 0.0);
        assert_eq!(rain_bonus(true, 2.5, 0.15, 2.0), 0.15);
    }

    // -- sun_bonus --

    #[test]
    fn sun_bonus_threshold_is_strict() {
        assert_eq!(sun_bonus(4, 0.10, 4), 0.0);
        assert_eq!(sun_bonus(5, 0.10, 4), 0.10);
        assert_eq!(sun_bonus(0, 0.10, 4), 0.0);
    }

    // -- daily_melt --

    #[test]
    fn plain_mid_day() {
        // +6C, no rain, 4h sun under the 0.75 preset
        assert!((daily_melt(6.0, 0.75, 0.0, 0.0) - 4.5).abs() < 1e-10);
    }

    #[test]
    fn warm_rain_day() {
        // +8C with rain: 8 * (0.75 + 0.15)
        assert!((daily_melt(8.0, 0.75, 0.15, 0.0) - 7.2).abs() < 1e-10);
    }

    #[test]
    fn no_melt_without_tdd() {
        assert_eq!(daily_melt(0.0, 1.0, 0.15, 0.10), 0.0);
    }

    // -- remaining_thickness --

    #[test]
    fn remaining_clamped_at_zero() {
        assert_eq!(remaining_thickness(25.0, 4.95), 20.05);
        assert_eq!(remaining_thickness(25.0, 27.8), 0.0);
        assert_eq!(remaining_thickness(25.0, 25.0), 0.0);
    }
}
