//! Fixed-step integration over a [`TimeGrid`].
//!
//! The integrator calls a [`Stepper`] once per grid interval, normalizes each
//! new state with a [`PostStep`] policy, checks it is finite, and records it:
//!
//! ```text
//! y_0     = initial
//! y_{i+1} = post_step(stepper.step(t_i, dt, y_i))
//! t_i     = t0 + i * dt
//! ```
//!
//! # Example
//!
//! ```ignore
//! use strobe_core::TimeGrid;
//! use strobe_solvers::{fixed, Rk4};
//!
//! let grid = TimeGrid::from_duration(0.0, 0.1, 10.0)?;
//! let solution = fixed::solve_unobserved(&model, &params, initial, grid, Rk4, ())?;
//!
//! for sample in &solution.trajectory {
//!     println!("t={}: {:?}", sample.t, sample.state);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use strobe_core::{
    DerivativeFunction, Observer, PostStep, Sample, StateVector, TimeGrid, Trajectory,
};
use tracing::warn;

use crate::Stepper;

/// Integrates `deriv` over `grid`, recording every state.
///
/// # Algorithm
///
/// 1. Check that the initial state is finite, record it, and emit step 0.
/// 2. For each step `i` in `1..=n_steps`:
///    - Step the previous state from `t_{i-1}` with the stepper.
///    - Apply the post-step normalization.
///    - Check every component is finite.
///    - Record the sample and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after each
/// step, and may return [`Action::StopEarly`] to end the run early.
///
/// # Errors
///
/// Returns [`Error::NumericOverflow`] if a state becomes NaN or infinite, and
/// [`Error::DimensionMismatch`] or [`Error::Derivative`] if the derivative fails.
pub fn solve<F, S, P, Obs, const N: usize>(
    deriv: &F,
    params: &F::Params,
    initial: StateVector<N>,
    grid: TimeGrid,
    stepper: S,
    post_step: P,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    P: PostStep<N>,
    Obs: Observer<Event<N>, Action>,
{
    ensure_finite(&initial, 0, grid.t0())?;

    let mut samples = Vec::with_capacity(grid.len());
    samples.push(Sample::new(grid.t0(), initial));

    let event = Event {
        step: 0,
        t: grid.t0(),
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory: Trajectory::from_samples(samples),
            steps: 0,
        });
    }

    let mut current = initial;

    for step in 1..=grid.n_steps() {
        let next = step_once(deriv, params, &current, &grid, step, &stepper, &post_step)?;
        let t = grid.time(step);

        samples.push(Sample::new(t, next));

        let event = Event {
            step,
            t,
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory: Trajectory::from_samples(samples),
                steps: step,
            });
        }

        current = next;
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory: Trajectory::from_samples(samples),
        steps: grid.n_steps(),
    })
}

/// Integrates `deriv` over `grid` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    initial: StateVector<N>,
    grid: TimeGrid,
    stepper: S,
    post_step: P,
) -> Result<Solution<N>, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    P: PostStep<N>,
{
    solve(deriv, params, initial, grid, stepper, post_step, ())
}

/// Integrates `n_steps` steps of size `dt` from `t0`, returning the trajectory.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] if `dt` is not finite and positive or `t0`
/// is not finite, otherwise the same errors as [`solve`].
#[allow(clippy::too_many_arguments)]
pub fn integrate<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    initial: StateVector<N>,
    t0: f64,
    dt: f64,
    n_steps: usize,
    stepper: S,
    post_step: P,
) -> Result<Trajectory<N>, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    P: PostStep<N>,
{
    let grid = TimeGrid::from_steps(t0, dt, n_steps)?;
    let solution = solve_unobserved(deriv, params, initial, grid, stepper, post_step)?;
    Ok(solution.trajectory)
}

/// Runs the same loop as [`solve`] but keeps only the final state.
///
/// # Errors
///
/// Same as [`solve`].
pub fn advance<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    initial: StateVector<N>,
    grid: TimeGrid,
    stepper: S,
    post_step: P,
) -> Result<StateVector<N>, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    P: PostStep<N>,
{
    ensure_finite(&initial, 0, grid.t0())?;

    (1..=grid.n_steps()).try_fold(initial, |current, step| {
        step_once(deriv, params, &current, &grid, step, &stepper, &post_step)
    })
}

/// Produces the state at grid index `step` from the state at `step - 1`.
fn step_once<F, S, P, const N: usize>(
    deriv: &F,
    params: &F::Params,
    current: &StateVector<N>,
    grid: &TimeGrid,
    step: usize,
    stepper: &S,
    post_step: &P,
) -> Result<StateVector<N>, Error>
where
    F: DerivativeFunction<N>,
    S: Stepper,
    P: PostStep<N>,
{
    let next = stepper
        .step(grid.time(step - 1), grid.dt(), current, deriv, params)
        .map_err(Error::derivative)?;
    let next = post_step.apply(next);

    ensure_finite(&next, step, grid.time(step))?;
    Ok(next)
}

fn ensure_finite<const N: usize>(
    state: &StateVector<N>,
    step: usize,
    t: f64,
) -> Result<(), Error> {
    if state.is_finite() {
        Ok(())
    } else {
        warn!(step, t, "integration aborted: state is no longer finite");
        Err(Error::NumericOverflow { step, t })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use strobe_core::{AngleWrap, StepError, from_fn};

    use crate::{Euler, Rk4};

    // --- Test fixtures ---

    /// dx/dt = v for a constant velocity `v`.
    struct ConstantVelocity;

    impl DerivativeFunction<1> for ConstantVelocity {
        type Params = f64;
        type Error = Infallible;

        fn derivative(
            &self,
            _t: f64,
            _y: &StateVector<1>,
            velocity: &f64,
        ) -> Result<StateVector<1>, Infallible> {
            Ok(StateVector::new([*velocity]))
        }
    }

    /// dx/dt = 1e200 x, which overflows on the first large step.
    struct Explosive;

    impl DerivativeFunction<1> for Explosive {
        type Params = ();
        type Error = Infallible;

        fn derivative(
            &self,
            _t: f64,
            y: &StateVector<1>,
            _params: &(),
        ) -> Result<StateVector<1>, Infallible> {
            Ok(StateVector::new([y[0] * 1e200]))
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("model refused t = {0}")]
    struct Refused(f64);

    /// Fails once time passes `0.5`.
    struct Fragile;

    impl DerivativeFunction<1> for Fragile {
        type Params = ();
        type Error = Refused;

        fn derivative(
            &self,
            t: f64,
            _y: &StateVector<1>,
            _params: &(),
        ) -> Result<StateVector<1>, Refused> {
            if t > 0.5 {
                Err(Refused(t))
            } else {
                Ok(StateVector::new([1.0]))
            }
        }
    }

    fn grid(dt: f64, n_steps: usize) -> TimeGrid {
        TimeGrid::from_steps(0.0, dt, n_steps).unwrap()
    }

    // --- Tests ---

    #[test]
    fn constant_velocity_motion() {
        let solution = solve_unobserved(
            &ConstantVelocity,
            &2.0,
            StateVector::new([0.0]),
            grid(0.1, 10),
            Euler,
            (),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.trajectory.len(), 11); // initial + 10 steps

        // After 10 steps at v=2, dt=0.1: position = 2.0
        let last = solution.trajectory.last().unwrap();
        assert_relative_eq!(last.state[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(last.t, 1.0);
    }

    #[test]
    fn sample_times_follow_the_grid() {
        let trajectory = integrate(
            &ConstantVelocity,
            &1.0,
            StateVector::new([0.0]),
            1.0,
            0.1,
            30,
            Rk4,
            (),
        )
        .expect("should solve");

        for (i, t) in trajectory.times().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = 1.0 + i as f64 * 0.1;
            assert_eq!(t, expected);
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<1>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(
            &ConstantVelocity,
            &1.0,
            StateVector::new([0.0]),
            grid(0.1, 100),
            Euler,
            (),
            observer,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6); // initial + 5 steps
    }

    #[test]
    fn zero_steps_returns_initial() {
        let solution = solve_unobserved(
            &ConstantVelocity,
            &1.0,
            StateVector::new([5.0]),
            grid(0.1, 0),
            Rk4,
            (),
        )
        .expect("should return initial");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.trajectory.len(), 1);
        assert_relative_eq!(solution.trajectory.samples()[0].state[0], 5.0);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut step_values = Vec::new();
        solve(
            &ConstantVelocity,
            &1.0,
            StateVector::new([0.0]),
            grid(0.25, 4),
            Euler,
            (),
            |event: &Event<1>| {
                step_values.push(event.step);
                None
            },
        )
        .expect("should solve");

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn post_step_applies_to_every_recorded_state() {
        // Spin at 1 rad per unit time for 10 units: the raw angle leaves (−π, π].
        let spin = from_fn(|_t, _y: &StateVector<2>, _p: &()| vec![1.0, 0.0]);

        let solution = solve_unobserved(
            &spin,
            &(),
            StateVector::new([0.0, 1.0]),
            grid(0.1, 100),
            Euler,
            AngleWrap::new(0),
        )
        .expect("should solve");

        for state in solution.trajectory.states() {
            assert!(state[0] > -std::f64::consts::PI && state[0] <= std::f64::consts::PI);
            assert_relative_eq!(state[1], 1.0);
        }
    }

    #[test]
    fn advance_matches_last_recorded_state() {
        let decay = from_fn(|_t, y: &StateVector<1>, k: &f64| vec![-k * y[0]]);
        let initial = StateVector::new([1.0]);

        let full = solve_unobserved(&decay, &0.7, initial, grid(0.05, 40), Rk4, ()).unwrap();
        let last = advance(&decay, &0.7, initial, grid(0.05, 40), Rk4, ()).unwrap();

        assert_eq!(full.trajectory.last().unwrap().state, last);
    }

    #[test]
    fn overflow_is_reported_with_its_step() {
        let result = solve_unobserved(
            &Explosive,
            &(),
            StateVector::new([1.0]),
            grid(1e200, 10),
            Euler,
            (),
        );

        match result {
            Err(Error::NumericOverflow { step, .. }) => assert!(step >= 1),
            other => panic!("expected NumericOverflow, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_initial_state_is_rejected() {
        let result = advance(
            &ConstantVelocity,
            &1.0,
            StateVector::new([f64::NAN]),
            grid(0.1, 5),
            Euler,
            (),
        );

        assert!(matches!(result, Err(Error::NumericOverflow { step: 0, .. })));
    }

    #[test]
    fn wrong_dimension_is_a_dimension_mismatch() {
        let short = from_fn(|_t, _y: &StateVector<2>, _p: &()| vec![0.0]);

        let result = solve_unobserved(&short, &(), StateVector::zeros(), grid(0.1, 3), Rk4, ());

        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn derivative_errors_are_boxed() {
        let result = solve_unobserved(
            &Fragile,
            &(),
            StateVector::zeros(),
            grid(0.25, 8),
            Euler,
            (),
        );

        let Err(Error::Derivative(source)) = result else {
            panic!("expected a derivative error");
        };
        assert_eq!(source.to_string(), "model refused t = 0.75");
    }

    #[test]
    fn invalid_step_is_rejected_before_integration() {
        let result = integrate(
            &ConstantVelocity,
            &1.0,
            StateVector::new([0.0]),
            0.0,
            -0.1,
            10,
            Euler,
            (),
        );

        assert!(matches!(
            result,
            Err(Error::InvalidStep(StepError::NonPositiveStep(_)))
        ));
    }
}
