use crate::fit::FitError;

/// Errors that can occur during a divergence analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("integration failed: {0}")]
    Solve(#[from] strobe_solvers::Error),

    #[error("fit window holds {found} samples, need at least 2")]
    InsufficientSamples { found: usize },

    #[error("fit window [{start}, {end}] must be finite and ordered")]
    InvalidWindow { start: f64, end: f64 },

    #[error("separation floor must be finite and positive, got {0}")]
    InvalidFloor(f64),

    #[error("component {component} is out of range for a {dimension}-component state")]
    InvalidComponent { component: usize, dimension: usize },

    #[error("line fit failed: {0}")]
    Fit(#[from] FitError),
}
