/// Core trait for sequential degree-day models.
///
/// Defines the interface a day-stepped model implements: initialize state,
/// step one day, and run over a forcing window.
pub trait DegreeDayModel {
    type Params;
    type State: Clone;
    type Forcing;
    type Output;

    /// Create the state before the first day from parameters.
    fn initialize_state(params: &Self::Params) -> Self::State;

    /// Execute one day: given state, params and forcing, return the new
    /// state and that day's output.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
    ) -> (Self::State, Self::Output);

    /// Run the model over a forcing window.
    ///
    /// Default implementation: initialize or use the provided state, then
    /// fold `step` over the window in order.
    fn run<'a, I>(
        params: &Self::Params,
        forcing: I,
        initial_state: Option<&Self::State>,
    ) -> Vec<Self::Output>
    where
        I: IntoIterator<Item = &'a Self::Forcing>,
        Self::Forcing: 'a,
    {
        let mut state = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(params),
        };

        let forcing = forcing.into_iter();
        let mut outputs = Vec::with_capacity(forcing.size_hint().0);

        for f in forcing {
            let (new_state, output) = Self::step(&state, params, f);
            outputs.push(output);
            state = new_state;
        }

        outputs
    }
}
