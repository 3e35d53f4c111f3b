use strobe_core::{StepError, max_step_count};

use super::ConfigError;

/// How the time step inside one forcing period is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    /// A fixed number of steps per forcing period, `dt = T / n`.
    PerPeriod(usize),

    /// A target step size, snapped so that a whole number of steps spans
    /// exactly one period: `n = max(1, round(T / dt))`, then `dt = T / n`.
    Requested(f64),
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::PerPeriod(200)
    }
}

impl TimeStep {
    /// Returns `(steps, dt)` for one period of length `period`.
    ///
    /// `period` must already be finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::TooManySteps`] if `period / dt` does not fit a
    /// grid step count.
    pub(crate) fn resolve(self, period: f64) -> Result<(usize, f64), StepError> {
        let steps = match self {
            TimeStep::PerPeriod(steps) => steps,
            TimeStep::Requested(dt) => {
                let steps = (period / dt).round();
                if !steps.is_finite() || steps >= max_step_count() {
                    return Err(StepError::TooManySteps(steps));
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let steps = steps as usize;
                steps.max(1)
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let dt = period / steps as f64;
        Ok((steps, dt))
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self {
            TimeStep::PerPeriod(0) => Err(ConfigError::NoStepsPerPeriod),
            TimeStep::Requested(dt) if !(dt.is_finite() && dt > 0.0) => {
                Err(ConfigError::NonPositiveStep(dt))
            }
            _ => Ok(self),
        }
    }
}

/// Configuration for a stroboscopic bifurcation sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    transient_periods: usize,
    samples_per_value: usize,
    time_step: TimeStep,
    component: usize,
}

impl Default for Config {
    /// 200 transient periods, 100 samples, 200 steps per period, component 0.
    fn default() -> Self {
        Self {
            transient_periods: 200,
            samples_per_value: 100,
            time_step: TimeStep::default(),
            component: 0,
        }
    }
}

impl Config {
    /// Creates a validated config sampling component 0.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `samples_per_value` is zero or the time
    /// step policy cannot produce a positive step.
    pub fn new(
        transient_periods: usize,
        samples_per_value: usize,
        time_step: TimeStep,
    ) -> Result<Self, ConfigError> {
        if samples_per_value == 0 {
            return Err(ConfigError::NoSamples);
        }

        Ok(Self {
            transient_periods,
            samples_per_value,
            time_step: time_step.validate()?,
            component: 0,
        })
    }

    /// Returns a copy sampling the angle stored at `component`.
    #[must_use]
    pub fn with_component(self, component: usize) -> Self {
        Self { component, ..self }
    }

    /// Returns the number of discarded forcing periods.
    #[must_use]
    pub fn transient_periods(&self) -> usize {
        self.transient_periods
    }

    /// Returns the number of stroboscopic samples per control value.
    #[must_use]
    pub fn samples_per_value(&self) -> usize {
        self.samples_per_value
    }

    /// Returns the time step policy.
    #[must_use]
    pub fn time_step(&self) -> TimeStep {
        self.time_step
    }

    /// Returns the sampled (and wrapped) state component.
    #[must_use]
    pub fn component(&self) -> usize {
        self.component
    }
}
