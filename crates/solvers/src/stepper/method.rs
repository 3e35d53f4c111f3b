use serde::{Deserialize, Serialize};
use strobe_core::{DerivativeFunction, StateVector};

use super::{Euler, Rk4, Stepper};

/// A stepper chosen at run time, for example from a scenario configuration.
///
/// Deserializes from `"euler"` or `"rk4"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Forward Euler, see [`Euler`].
    Euler,

    /// Classic fourth-order Runge-Kutta, see [`Rk4`].
    #[default]
    Rk4,
}

impl Stepper for Method {
    fn order(&self) -> u32 {
        match self {
            Method::Euler => Euler.order(),
            Method::Rk4 => Rk4.order(),
        }
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
        match self {
            Method::Euler => Euler.step(t, dt, y, deriv, params),
            Method::Rk4 => Rk4.step(t, dt, y, deriv, params),
        }
    }
}
