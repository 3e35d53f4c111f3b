//! One-step methods for advancing a [`StateVector`] by a single time increment.
//!
//! A [`Stepper`] knows nothing about time grids or trajectories: given
//! `(t, dt, y)`, a derivative function, and its parameters, it returns the
//! state at `t + dt`. Steppers only fail when the derivative itself fails.
//! Non-finite values pass through untouched and are caught by the integrator.
//!
//! # Methods
//!
//! | Method    | Evaluations per step | Local error | Global error |
//! |-----------|----------------------|-------------|--------------|
//! | [`Euler`] | 1                    | O(dt²)      | O(dt)        |
//! | [`Rk4`]   | 4                    | O(dt⁵)      | O(dt⁴)       |

mod euler;
mod method;
mod rk4;

pub use euler::Euler;
pub use method::Method;
pub use rk4::Rk4;

use strobe_core::{DerivativeFunction, StateVector};

/// Advances a state by one fixed time step.
pub trait Stepper {
    /// Nominal global order of accuracy.
    fn order(&self) -> u32;

    /// Returns the state at `t + dt` given the state `y` at `t`.
    ///
    /// # Errors
    ///
    /// Returns the derivative's error if any evaluation fails.
    fn step<F, const N: usize>(
        &self,
        t: f64,
        dt: f64,
        y: &StateVector<N>,
        deriv: &F,
        params: &F::Params,
    ) -> Result<StateVector<N>, F::Error>
    where
        F: DerivativeFunction<N>;
}

impl<S: Stepper> Stepper for &S {
    fn order(&self) -> u32 {
        (**self).order()
    }

    fn step<F, const N: usize>(
        &self,
        t: f64,
        dt: f64,
        y: &StateVector<N>,
        deriv: &F,
        params: &F::Params,
    ) -> Result<StateVector<N>, F::Error>
    where
        F: DerivativeFunction<N>,
    {
        (**self).step(t, dt, y, deriv, params)
    }
}
