use thiserror::Error;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,

    /// Number of points the line was fitted to.
    pub samples: usize,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Errors that can occur when fitting a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    #[error("need at least 2 points to fit a line, found {found}")]
    InsufficientSamples { found: usize },

    #[error("abscissa and ordinate lengths differ ({xs} vs {ys})")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("all abscissa values are equal")]
    DegenerateAbscissa,
}

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// Uses the centered normal equations, so large offsets in `xs` (such as
/// absolute times) do not cost precision.
///
/// # Errors
///
/// Returns a [`FitError`] if the slices differ in length, hold fewer than two
/// points, or if every `x` is the same.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let n = xs.len();
    if n < 2 {
        return Err(FitError::InsufficientSamples { found: n });
    }

    #[allow(clippy::cast_precision_loss)]
    let count = n as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

    if sxx == 0.0 {
        return Err(FitError::DegenerateAbscissa);
    }

    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
        samples: n,
    })
}
