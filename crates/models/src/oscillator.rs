use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use strobe_core::{DerivativeFunction, StateVector};

/// Parameters of a harmonic oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorParams {
    /// Natural angular frequency `ω`.
    pub omega: f64,

    /// Damping coefficient `q`; zero for an undamped oscillator.
    #[serde(default)]
    pub q: f64,
}

impl OscillatorParams {
    /// Undamped oscillator with natural frequency `omega`.
    #[must_use]
    pub fn undamped(omega: f64) -> Self {
        Self { omega, q: 0.0 }
    }

    /// Mechanical energy per unit mass, `(v² + ω² x²) / 2`.
    #[must_use]
    pub fn energy(&self, state: &StateVector<2>) -> f64 {
        let (x, v) = (state[0], state[1]);
        0.5 * (v * v + self.omega * self.omega * x * x)
    }
}

/// Harmonic oscillator, `dx/dt = v` and `dv/dt = -q v - ω² x`.
///
/// State: `[x, v]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Oscillator;

impl Oscillator {
    /// Analytic solution of the undamped oscillator from `initial = [x0, v0]`.
    ///
    /// Damping is not modelled here; callers compare against it only for `q = 0`.
    #[must_use]
    pub fn exact(initial: &StateVector<2>, omega: f64, t: f64) -> StateVector<2> {
        let (x0, v0) = (initial[0], initial[1]);
        let (sin, cos) = (omega * t).sin_cos();

        StateVector::new([x0 * cos + v0 / omega * sin, -x0 * omega * sin + v0 * cos])
    }
}

impl DerivativeFunction<2> for Oscillator {
    type Params = OscillatorParams;
    type Error = Infallible;

    fn derivative(
        &self,
        _t: f64,
        y: &StateVector<2>,
        params: &OscillatorParams,
    ) -> Result<StateVector<2>, Infallible> {
        let OscillatorParams { omega, q } = *params;
        let (x, v) = (y[0], y[1]);
        Ok(StateVector::new([v, -q * v - omega * omega * x]))
    }
}
