use strobe_core::StateVector;

/// Event emitted by the fixed-step integrator for each recorded sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..=n are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// Grid time of this sample.
    pub t: f64,

    /// State after the post-step normalization.
    pub state: StateVector<N>,
}
