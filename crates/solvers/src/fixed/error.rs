use std::error::Error as StdError;

use strobe_core::{DimensionMismatch, StepError};

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid time grid: {0}")]
    InvalidStep(#[from] StepError),

    #[error("derivative has {found} components, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("state became non-finite at step {step} (t = {t})")]
    NumericOverflow { step: usize, t: f64 },

    #[error("derivative error: {0}")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Wraps a derivative error, lifting dimension mismatches into their own variant.
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(err);
        match boxed.downcast::<DimensionMismatch>() {
            Ok(mismatch) => Self::DimensionMismatch {
                expected: mismatch.expected,
                found: mismatch.found,
            },
            Err(other) => Self::Derivative(other),
        }
    }
}
