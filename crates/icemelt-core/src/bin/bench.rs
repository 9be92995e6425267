/// Projector benchmark.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for window
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use icemelt_core::{project, Condition, DailyWeather, Scenario, WeatherWindow};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic window generation.
fn make_window(n: usize, seed: u64) -> Option<WeatherWindow> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let days: Vec<DailyWeather> = (0..n)
        .map(|_| {
            let min_temp = (-15.0 + next_f64() * 20.0) as i32;
            let max_temp = min_temp + (next_f64() * 12.0) as i32;
            let rain = next_f64() < 0.3;
            let sun_hours = (next_f64() * 10.0) as u32;
            let condition = if rain { Condition::Rain } else { Condition::Sunny };
            DailyWeather::new("--.--", "--", max_temp, min_temp, condition, rain, sun_hours)
        })
        .collect();
    WeatherWindow::new(days).ok()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_project(sizes: &[usize]) -> Vec<(Scenario, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let Some(window) = make_window(n, 42) else {
            continue;
        };
        for scenario in Scenario::ALL {
            // Warmup
            black_box(project(&window, 25.0, scenario.factor()));

            let dur = median_time(|| {
                black_box(project(&window, 25.0, scenario.factor()));
            });
            results.push((scenario, n, dur));
        }
    }
    results
}

fn main() {
    println!("Ice Melt Projector Benchmarks");
    println!("============================================================");
    println!("{:<10} {:>8}   {:>12}", "Scenario", "Days", "Median (us)");
    println!("--------------------------------------------");

    for (scenario, n, dur) in bench_project(&[14, 365, 36500]) {
        let us = dur.as_secs_f64() * 1e6;
        println!("{:<10} {:>8}      {:>8.2}", scenario.key(), n, us);
    }

    println!("============================================================");
}
