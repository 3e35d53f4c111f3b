use strobe_core::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed every step of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the integrator terminated.
    pub status: Status,

    /// Recorded samples, starting with the initial state.
    pub trajectory: Trajectory<N>,

    /// Number of integration steps completed.
    pub steps: usize,
}
