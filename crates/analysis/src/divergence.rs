//! Lyapunov exponent estimation from two nearby runs.
//!
//! Two trajectories are integrated on the same grid from slightly different
//! initial states. Their separation on one component is floored and
//! log-transformed:
//!
//! ```text
//! ecart(t) = |a[c](t) - b[c](t)|
//! l(t)     = ln(max(ecart(t), floor))
//! ```
//!
//! and a least-squares line `l(t) ≈ λ t + b` is fitted over the configured
//! window. A positive slope λ means the runs separate exponentially.
//!
//! With the `parallel` feature the two runs execute on the rayon pool.

mod config;
mod error;
mod record;

pub use config::Config;
pub use error::Error;
pub use record::{Divergence, DivergenceRecord};

use strobe_core::{DerivativeFunction, PostStep, StateVector, TimeGrid};
use strobe_solvers::{Solution, Stepper, fixed};
use tracing::debug;

use crate::fit::linear_fit;

/// Integrates from `y0_a` and `y0_b` and fits the growth of their separation.
///
/// Both runs share `deriv`, `params`, `grid`, `stepper`, and `post_step`.
/// The window bounds are inclusive, with a slack of `1e-9 dt` so grid times
/// that land on a bound through rounding are kept.
///
/// # Errors
///
/// Returns [`Error::Solve`] if either integration fails,
/// [`Error::InvalidComponent`] if the configured component is out of range,
/// and [`Error::InsufficientSamples`] if fewer than two samples fall inside
/// the window. A separation that never exceeds the floor is not an error; it
/// yields [`Divergence::Degenerate`].
#[allow(clippy::too_many_arguments)]
pub fn analyze<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    y0_a: StateVector<N>,
    y0_b: StateVector<N>,
    grid: TimeGrid,
    stepper: S,
    post_step: P,
    config: &Config,
) -> Result<DivergenceRecord<N>, Error>
where
    F: DerivativeFunction<N> + Sync,
    F::Params: Sync,
    S: Stepper + Sync,
    P: PostStep<N> + Sync,
{
    let component = config.component();
    if component >= N {
        return Err(Error::InvalidComponent {
            component,
            dimension: N,
        });
    }

    let run = |initial: StateVector<N>| -> Result<Solution<N>, strobe_solvers::Error> {
        fixed::solve_unobserved(
            deriv,
            params,
            initial,
            grid,
            &stepper,
            |state: StateVector<N>| post_step.apply(state),
        )
    };

    #[cfg(feature = "parallel")]
    let (a, b) = rayon::join(|| run(y0_a), || run(y0_b));
    #[cfg(not(feature = "parallel"))]
    let (a, b) = (run(y0_a), run(y0_b));

    let (reference, perturbed) = (a?.trajectory, b?.trajectory);

    let floor = config.floor();
    let separation: Vec<f64> = reference
        .component(component)
        .zip(perturbed.component(component))
        .map(|(a, b)| (a - b).abs())
        .collect();
    let log_separation: Vec<f64> = separation.iter().map(|e| e.max(floor).ln()).collect();

    let (start, end) = config.window();
    let slack = grid.dt() * 1e-9;
    let in_window: Vec<usize> = reference
        .times()
        .enumerate()
        .filter(|&(_, t)| t >= start - slack && t <= end + slack)
        .map(|(i, _)| i)
        .collect();

    if in_window.len() < 2 {
        return Err(Error::InsufficientSamples {
            found: in_window.len(),
        });
    }

    let divergence = if in_window.iter().all(|&i| separation[i] <= floor) {
        Divergence::Degenerate
    } else {
        let ts: Vec<f64> = in_window.iter().map(|&i| grid.time(i)).collect();
        let ls: Vec<f64> = in_window.iter().map(|&i| log_separation[i]).collect();
        Divergence::Exponential(linear_fit(&ts, &ls)?)
    };

    debug!(
        exponent = divergence.exponent(),
        window_samples = in_window.len(),
        degenerate = matches!(divergence, Divergence::Degenerate),
        "divergence analysis complete"
    );

    Ok(DivergenceRecord {
        reference,
        perturbed,
        log_separation,
        window: (start, end),
        divergence,
    })
}

/// Runs [`analyze`] from `y0` and a copy of `y0` whose configured component
/// is shifted by `delta`.
///
/// # Errors
///
/// Same as [`analyze`].
#[allow(clippy::too_many_arguments)]
pub fn analyze_perturbed<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    y0: StateVector<N>,
    delta: f64,
    grid: TimeGrid,
    stepper: S,
    post_step: P,
    config: &Config,
) -> Result<DivergenceRecord<N>, Error>
where
    F: DerivativeFunction<N> + Sync,
    F::Params: Sync,
    S: Stepper + Sync,
    P: PostStep<N> + Sync,
{
    let perturbed = y0.map_component(config.component(), |x| x + delta);
    analyze(deriv, params, y0, perturbed, grid, stepper, post_step, config)
}
