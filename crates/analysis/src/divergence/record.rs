use strobe_core::Trajectory;

use crate::fit::LinearFit;

/// How the separation of two runs evolved inside the fit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Divergence {
    /// The log-separation was fitted by a line; its slope is the exponent.
    Exponential(LinearFit),

    /// The separation never rose above the floor, so there is nothing to fit.
    Degenerate,
}

impl Divergence {
    /// The Lyapunov exponent λ, or `0.0` when degenerate.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        match self {
            Divergence::Exponential(fit) => fit.slope,
            Divergence::Degenerate => 0.0,
        }
    }

    /// The Lyapunov time `1/λ`, defined only for a positive exponent.
    #[must_use]
    pub fn timescale(&self) -> Option<f64> {
        let lambda = self.exponent();
        (lambda > 0.0).then(|| lambda.recip())
    }

    /// Whether nearby trajectories separate exponentially.
    #[must_use]
    pub fn is_chaotic(&self) -> bool {
        self.exponent() > 0.0
    }
}

/// The two runs of a divergence analysis and what was fitted to them.
#[derive(Debug, Clone)]
pub struct DivergenceRecord<const N: usize> {
    /// Run from the first initial state.
    pub reference: Trajectory<N>,

    /// Run from the second initial state, on the same grid.
    pub perturbed: Trajectory<N>,

    /// `ln(max(|a - b|, floor))` for every sample.
    pub log_separation: Vec<f64>,

    /// Inclusive fit window `(start, end)`.
    pub window: (f64, f64),

    /// The fitted result.
    pub divergence: Divergence,
}

impl<const N: usize> DivergenceRecord<N> {
    /// Sample times shared by both runs.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.reference.times()
    }

    /// Pairs `(t, ln separation)` for every sample.
    pub fn log_separation_curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times().zip(self.log_separation.iter().copied())
    }

    /// See [`Divergence::exponent`].
    #[must_use]
    pub fn lyapunov_exponent(&self) -> f64 {
        self.divergence.exponent()
    }

    /// See [`Divergence::timescale`].
    #[must_use]
    pub fn timescale(&self) -> Option<f64> {
        self.divergence.timescale()
    }

    /// See [`Divergence::is_chaotic`].
    #[must_use]
    pub fn is_chaotic(&self) -> bool {
        self.divergence.is_chaotic()
    }
}
