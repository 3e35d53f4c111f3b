use strobe_core::{DerivativeFunction, StateVector, StepIntegrable};

use super::Stepper;

/// Classic fourth-order Runge-Kutta:
///
/// ```text
/// d1 = f(t,        y)
/// d2 = f(t + dt/2, y + dt/2 * d1)
/// d3 = f(t + dt/2, y + dt/2 * d2)
/// d4 = f(t + dt,   y + dt * d3)
///
/// y_{n+1} = y_n + dt/6 * (d1 + 2 d2 + 2 d3 + d4)
/// ```
///
/// Halving `dt` shrinks the one-step error by about 32 and the error at a
/// fixed final time by about 16.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn order(&self) -> u32 {
        4
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
        let half = dt / 2.0;

        let d1 = deriv.derivative(t, y, params)?;
        let d2 = deriv.derivative(t + half, &y.step(&d1, half), params)?;
        let d3 = deriv.derivative(t + half, &y.step(&d2, half), params)?;
        let d4 = deriv.derivative(t + dt, &y.step(&d3, dt), params)?;

        let slope = d1 + d2 * 2.0 + d3 * 2.0 + d4;
        Ok(y.step(&slope, dt / 6.0))
    }
}
