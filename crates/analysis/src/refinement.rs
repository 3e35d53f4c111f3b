//! Order-of-accuracy measurements.
//!
//! Halving `dt` divides a method's local (one-step) error by about
//! `2^(p+1)` and its global error at fixed final time by about `2^p`, where
//! `p` is the method's order. [`observed_order`] turns a pair of measured
//! errors back into `p`.

use strobe_core::{DerivativeFunction, StateVector, TimeGrid};
use strobe_solvers::{Error, Stepper, fixed};

/// Order implied by two errors measured at step sizes differing by `ratio`.
///
/// `log(coarse / fine) / log(ratio)`. Feeding local errors yields `p + 1`,
/// global errors yield `p`.
#[must_use]
pub fn observed_order(coarse_error: f64, fine_error: f64, ratio: f64) -> f64 {
    (coarse_error / fine_error).ln() / ratio.ln()
}

/// Largest component error of a single step from `(t0, y0)` against `exact`.
///
/// # Errors
///
/// Returns an [`Error`] if `dt` is not finite and positive or the step fails.
pub fn local_error<F, S, E, const N: usize>(
    deriv: &F,
    params: &F::Params,
    stepper: S,
    y0: StateVector<N>,
    t0: f64,
    dt: f64,
    exact: E,
) -> Result<f64, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    E: Fn(f64) -> StateVector<N>,
{
    let grid = TimeGrid::from_steps(t0, dt, 1)?;
    let stepped = fixed::advance(deriv, params, y0, grid, stepper, ())?;
    Ok(max_abs_difference(&stepped, &exact(grid.end())))
}

/// Largest component error at the end of `grid` against `exact`.
///
/// # Errors
///
/// Returns an [`Error`] if the integration fails.
pub fn global_error<F, S, E, const N: usize>(
    deriv: &F,
    params: &F::Params,
    stepper: S,
    y0: StateVector<N>,
    grid: TimeGrid,
    exact: E,
) -> Result<f64, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    E: Fn(f64) -> StateVector<N>,
{
    let last = fixed::advance(deriv, params, y0, grid, stepper, ())?;
    Ok(max_abs_difference(&last, &exact(grid.end())))
}

fn max_abs_difference<const N: usize>(a: &StateVector<N>, b: &StateVector<N>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
