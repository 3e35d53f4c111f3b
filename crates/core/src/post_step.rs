use crate::StateVector;

/// Normalizes a state right after a step, before it is recorded.
///
/// The integrator calls [`apply`](PostStep::apply) on every new state. The
/// `()` implementation is the identity, [`AngleWrap`](crate::AngleWrap) keeps
/// an angle in `(−π, π]`, and closures `Fn(StateVector<N>) -> StateVector<N>`
/// implement the trait automatically.
pub trait PostStep<const N: usize> {
    /// Returns the normalized state.
    fn apply(&self, state: StateVector<N>) -> StateVector<N>;
}

/// The identity policy: states are recorded exactly as stepped.
impl<const N: usize> PostStep<N> for () {
    fn apply(&self, state: StateVector<N>) -> StateVector<N> {
        state
    }
}

/// Blanket implementation for normalization closures.
impl<F, const N: usize> PostStep<N> for F
where
    F: Fn(StateVector<N>) -> StateVector<N>,
{
    fn apply(&self, state: StateVector<N>) -> StateVector<N> {
        self(state)
    }
}
