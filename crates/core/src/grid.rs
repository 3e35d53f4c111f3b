use thiserror::Error;

/// A fixed-step time grid `t_i = t0 + i·dt` for `i` in `0..=n_steps`.
///
/// Construct with [`TimeGrid::from_steps`] when the step count is known, or
/// [`TimeGrid::from_duration`] to derive it from a run length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t0: f64,
    dt: f64,
    n_steps: usize,
}

/// Errors that can occur when building a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("time step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("start time must be finite, got {0}")]
    NonFiniteStart(f64),

    #[error("run length must be finite and non-negative, got {0}")]
    InvalidDuration(f64),

    #[error("grid would need {0} steps, more than a grid can index")]
    TooManySteps(f64),
}

impl TimeGrid {
    /// Creates a grid of `n_steps` intervals of width `dt` starting at `t0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, `t0` is not finite,
    /// or `n_steps + 1` grid points cannot be counted in a `usize`.
    pub fn from_steps(t0: f64, dt: f64, n_steps: usize) -> Result<Self, StepError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(StepError::NonPositiveStep(dt));
        }
        if !t0.is_finite() {
            return Err(StepError::NonFiniteStart(t0));
        }
        if n_steps == usize::MAX {
            #[allow(clippy::cast_precision_loss)]
            let requested = n_steps as f64;
            return Err(StepError::TooManySteps(requested));
        }
        Ok(Self { t0, dt, n_steps })
    }

    /// Creates a grid covering `[t0, t0 + t_max]` with `floor(t_max / dt)` steps.
    ///
    /// The final grid point may fall short of `t0 + t_max` by less than `dt`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, `t0` is not finite,
    /// `t_max` is negative or not finite, or the step count overflows a `usize`.
    pub fn from_duration(t0: f64, dt: f64, t_max: f64) -> Result<Self, StepError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(StepError::NonPositiveStep(dt));
        }
        if !t_max.is_finite() || t_max < 0.0 {
            return Err(StepError::InvalidDuration(t_max));
        }

        // Absorb representation error so that 10.0 / 0.1 gives 100 steps.
        let ratio = t_max / dt;
        let steps = (ratio + ratio * 1e-12).floor();
        if !steps.is_finite() || steps >= max_step_count() {
            return Err(StepError::TooManySteps(steps));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;
        Self::from_steps(t0, dt, steps)
    }

    /// Returns the start time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the time step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps (grid intervals).
    #[must_use]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of grid points, `n_steps + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n_steps + 1
    }

    /// A grid always contains its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the time of grid point `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, index: usize) -> f64 {
        self.t0 + index as f64 * self.dt
    }

    /// Returns the time of the last grid point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.time(self.n_steps)
    }

    /// Iterates over all grid times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.n_steps).map(|i| self.time(i))
    }
}

/// Exclusive upper bound on a step count derived from a float ratio.
///
/// `usize::MAX as f64` rounds up to `2^64`, so every float below it converts
/// to a `usize` without saturating.
#[must_use]
pub fn max_step_count() -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let bound = usize::MAX as f64;
    bound
}
