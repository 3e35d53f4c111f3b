/// Errors that can occur during a bifurcation sweep.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("integration failed: {0}")]
    Solve(#[from] strobe_solvers::Error),

    #[error("forcing period must be finite and positive, got {period} at control value {control}")]
    InvalidPeriod { control: f64, period: f64 },

    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors that can occur when validating a sweep configuration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("samples_per_value must be at least 1")]
    NoSamples,

    #[error("steps per period must be at least 1")]
    NoStepsPerPeriod,

    #[error("requested time step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("component {component} is out of range for a {dimension}-component state")]
    ComponentOutOfRange { component: usize, dimension: usize },
}
