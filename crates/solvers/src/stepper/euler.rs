use strobe_core::{DerivativeFunction, StateVector, StepIntegrable};

use super::Stepper;

/// Explicit (forward) Euler:
///
/// ```text
/// y_{n+1} = y_n + dt * f(t_n, y_n)
/// ```
///
/// First-order accurate. On undamped oscillators the amplitude grows every
/// step, so long runs need a very small `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    fn order(&self) -> u32 {
        1
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
        let slope = deriv.derivative(t, y, params)?;
        Ok(y.step(&slope, dt))
    }
}
