//! Stroboscopic bifurcation sweeps over a control parameter.
//!
//! For each control value the system restarts from the same initial state,
//! runs through a transient of whole forcing periods, and then records the
//! wrapped angle once per period:
//!
//! ```text
//! for value in control_values:
//!     y = y0
//!     repeat transient_periods: y = one_period(y)         (discarded)
//!     repeat samples_per_value: y = one_period(y); record y[c]
//! ```
//!
//! Period `k` always starts at `t0 + k T` on a grid of `n` steps of `T / n`,
//! so the sampling instants stay locked to the forcing phase.
//!
//! With the `parallel` feature the control values run on the rayon pool.
//! Results are merged in sweep order either way.

mod config;
mod diagram;
mod error;
mod sample;

pub use config::{Config, TimeStep};
pub use diagram::{BifurcationDiagram, Branch};
pub use error::{ConfigError, Error};
pub use sample::BifurcationSample;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use strobe_core::{AngleWrap, DerivativeFunction, Forced, StateVector, TimeGrid};
use strobe_solvers::{Stepper, fixed};
use tracing::{debug, trace};

/// Sweeps `control_values`, returning every stroboscopic sample in order.
///
/// `set_control(&base_params, value)` builds the parameters for one control
/// value, for example `PendulumParams::with_forcing_amplitude`. The forcing
/// period comes from the resulting parameters through [`Forced`].
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the configured component is out of
/// range, [`Error::InvalidPeriod`] if a control value yields a non-finite or
/// non-positive forcing period, and [`Error::Solve`] if an integration fails.
/// The first failing control value (in sweep order) is reported.
#[allow(clippy::too_many_arguments)]
pub fn sweep<F, S, C, const N: usize>(
    deriv: &F,
    base_params: &F::Params,
    control_values: &[f64],
    set_control: C,
    y0: StateVector<N>,
    t0: f64,
    stepper: S,
    config: &Config,
) -> Result<Vec<BifurcationSample>, Error>
where
    F: DerivativeFunction<N> + Sync,
    F::Params: Forced + Sync,
    S: Stepper + Sync,
    C: Fn(&F::Params, f64) -> F::Params + Sync,
{
    if config.component() >= N {
        return Err(ConfigError::ComponentOutOfRange {
            component: config.component(),
            dimension: N,
        }
        .into());
    }

    let run = |&control: &f64| {
        let params = set_control(base_params, control);
        sample_value(deriv, &params, control, y0, t0, &stepper, config)
    };

    #[cfg(feature = "parallel")]
    let groups: Vec<Vec<BifurcationSample>> = control_values
        .par_iter()
        .map(run)
        .collect::<Result<_, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let groups: Vec<Vec<BifurcationSample>> = control_values
        .iter()
        .map(run)
        .collect::<Result<_, _>>()?;

    Ok(groups.into_iter().flatten().collect())
}

/// Evenly spaced values from `min` to `max` inclusive.
///
/// Returns an empty vector for `n = 0` and `[min]` for `n = 1`.
#[must_use]
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        max
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let offset = i as f64 * step;
                        min + offset
                    }
                })
                .collect()
        }
    }
}

/// Runs the transient and sampling phases for one control value.
fn sample_value<F, S, const N: usize>(
    deriv: &F,
    params: &F::Params,
    control: f64,
    y0: StateVector<N>,
    t0: f64,
    stepper: &S,
    config: &Config,
) -> Result<Vec<BifurcationSample>, Error>
where
    F: DerivativeFunction<N>,
    F::Params: Forced,
    S: Stepper,
{
    let period = params.forcing_period();
    if !(period.is_finite() && period > 0.0) {
        return Err(Error::InvalidPeriod { control, period });
    }

    let (steps, dt) = config
        .time_step()
        .resolve(period)
        .map_err(strobe_solvers::Error::from)?;
    let wrap = AngleWrap::new(config.component());

    let one_period = |state: StateVector<N>, k: usize| -> Result<StateVector<N>, Error> {
        #[allow(clippy::cast_precision_loss)]
        let start = t0 + k as f64 * period;
        let grid = TimeGrid::from_steps(start, dt, steps).map_err(strobe_solvers::Error::from)?;
        Ok(fixed::advance(deriv, params, state, grid, stepper, wrap)?)
    };

    let transient = config.transient_periods();
    let mut state = (0..transient).try_fold(y0, |state, k| one_period(state, k))?;

    let mut samples = Vec::with_capacity(config.samples_per_value());
    for index in 0..config.samples_per_value() {
        state = one_period(state, transient + index)?;

        let angle = state[config.component()];
        trace!(control, index, angle, "stroboscopic sample");
        samples.push(BifurcationSample {
            control,
            angle,
            index,
        });
    }

    debug!(
        control,
        period,
        steps_per_period = steps,
        samples = samples.len(),
        "control value sampled"
    );

    Ok(samples)
}
