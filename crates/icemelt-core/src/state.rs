/// Ice-melt model state carried from one day to the next.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct State {
    /// Ice melted since the start of the window [cm].
    pub cumulative_melt: f64,
}

impl State {
    /// State before the first day: nothing melted yet.
    pub fn initialize() -> Self {
        Self::default()
    }
}
