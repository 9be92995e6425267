use icemelt_macros::Series;

#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct MeltRow {
    pub tdd: f64,
    pub daily_melt: f64,
    pub remaining: f64,
}

fn main() {
    let row = MeltRow { tdd: 6.0, daily_melt: 4.5, remaining: 20.5 };
    let mut series = MeltRowSeries::with_capacity(14);
    assert!(series.is_empty());
    series.push(&row);
    assert_eq!(series.len(), 1);
    assert_eq!(series.column("daily_melt"), Some(&[4.5][..]));
    assert_eq!(series.column("missing"), None);
    assert_eq!(series.row(0), Some(row));
    assert_eq!(series.row(1), None);
    assert_eq!(MeltRow::field_names(), &["tdd", "daily_melt", "remaining"]);
}
