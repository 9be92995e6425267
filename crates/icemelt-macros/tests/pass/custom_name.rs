use icemelt_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "ThicknessColumns")]
pub struct Thickness {
    pub cumulative_melt: f64,
    pub remaining: f64,
}

fn main() {
    let t = Thickness { cumulative_melt: 4.95, remaining: 20.05 };
    let mut cols = ThicknessColumns::with_capacity(2);
    cols.push(&t);
    cols.push(&t);
    assert_eq!(cols.len(), 2);
    assert_eq!(cols.remaining, vec![20.05, 20.05]);
    assert_eq!(Thickness::field_names(), &["cumulative_melt", "remaining"]);
}
