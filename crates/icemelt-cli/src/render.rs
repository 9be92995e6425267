//! Text rendering of a projection: callouts, day table, scenario list.

use std::io::Write;

use anyhow::{anyhow, Result};
use icemelt_core::{Controller, DerivedDay, IceCondition, Scenario};
use tabwriter::TabWriter;

/// Method summary printed by `icemelt explain`.
pub const EXPLAIN: &str = "\
How the projection is computed

1. Daily average temperature = (max + min) / 2.
   A day with max +11 and min +1 averages +6 C.
2. Thawing degree days (TDD) = the positive part of the average.
   An average of +6 gives 6 TDD; an average of -4.5 gives 0 (no melt).
3. Melt factor = cm of ice melted per TDD. It depends on sun, rain, wind
   and how exposed the lake is; 0.5 to 1.0 cm/TDD is the usual range.
4. Daily melt = TDD x (factor + bonuses). Warm rain (average above +2 C)
   adds 0.15, more than 4 hours of sunshine adds 0.10.
   A +8 C rainy day at 0.75 melts 8 x 0.90 = 7.2 cm.
5. Daily melt is summed day by day and subtracted from the starting
   thickness. Ice is unsafe once less than half of it remains.
";

fn signed_degrees(t: i32) -> String {
    if t > 0 {
        format!("+{t}")
    } else {
        t.to_string()
    }
}

fn remaining_cell(day: &DerivedDay, ice_thickness: f64) -> String {
    match day.condition(ice_thickness) {
        IceCondition::Gone => "0".to_string(),
        c => format!("{:.1} ({})", day.remaining, c.label()),
    }
}

fn finish(tw: TabWriter<Vec<u8>>) -> Result<String> {
    let bytes = tw
        .into_inner()
        .map_err(|_| anyhow!("failed to flush table"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Three headline callouts: unsafe day, ice-gone day, total melt.
pub fn headlines(controller: &Controller) -> String {
    let projection = controller.projection();
    format!(
        "Unsafe ice (below 50%): {}\nIce gone:               {}\nTotal melt (to {}):  {:.1} cm\n",
        controller.unsafe_headline(),
        controller.ice_gone_headline(),
        controller.weather().last().date,
        projection.total_melt(),
    )
}

/// Day-by-day table, tab-aligned.
pub fn day_table(controller: &Controller) -> Result<String> {
    let projection = controller.projection();
    let mut tw = TabWriter::new(Vec::new()).padding(2);
    writeln!(
        tw,
        "Date\tSky\tMax\tMin\tAvg\tTDD\tMelt/day\tCumulative\tRemaining"
    )?;
    for d in projection.days() {
        writeln!(
            tw,
            "{} {}\t{}\t{}\t{}\t{:.1}\t{:.1}\t{:.1} cm\t{:.1} cm\t{}",
            d.weather.day_of_week,
            d.weather.date,
            d.weather.condition.icon(),
            signed_degrees(d.weather.max_temp),
            signed_degrees(d.weather.min_temp),
            d.average_temp,
            d.tdd,
            d.daily_melt,
            d.cumulative_melt,
            remaining_cell(d, projection.ice_thickness()),
        )?;
    }
    finish(tw)
}

/// Preset list for `icemelt scenarios`.
pub fn scenario_list() -> Result<String> {
    let mut tw = TabWriter::new(Vec::new()).padding(2);
    writeln!(tw, "Key\tFactor\tLabel\tConditions")?;
    for s in Scenario::ALL {
        writeln!(
            tw,
            "{}\t{:.2}\t{}\t{}",
            s.key(),
            s.factor(),
            s.label(),
            s.description()
        )?;
    }
    finish(tw)
}
