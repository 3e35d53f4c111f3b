use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use strobe_core::{DerivativeFunction, StateVector};

/// Parameters of a single radioactive decay `X -> Y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayParams {
    /// Decay rate `k` (1/time).
    pub k: f64,
}

/// Single decay, `dx/dt = -k x`.
///
/// State: `[x]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decay;

impl Decay {
    /// Analytic solution `x0 e^{-k t}`.
    #[must_use]
    pub fn exact(x0: f64, k: f64, t: f64) -> f64 {
        x0 * (-k * t).exp()
    }
}

impl DerivativeFunction<1> for Decay {
    type Params = DecayParams;
    type Error = Infallible;

    fn derivative(
        &self,
        _t: f64,
        y: &StateVector<1>,
        params: &DecayParams,
    ) -> Result<StateVector<1>, Infallible> {
        Ok(StateVector::new([-params.k * y[0]]))
    }
}

/// Parameters of a decay chain `X -> Y -> Z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayChainParams {
    /// Decay rate of `X`.
    pub k: f64,

    /// Decay rate of `Y`.
    pub k2: f64,
}

impl DecayChainParams {
    /// Creates chain parameters where `Y` decays ten times slower than `X`.
    #[must_use]
    pub fn with_slow_daughter(k: f64) -> Self {
        Self { k, k2: 0.1 * k }
    }
}

/// Decay chain, `dx/dt = -k x` and `dy/dt = k x - k2 y`.
///
/// State: `[x, y]`. The final product `Z` is implied by `x + y + z = const`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayChain;

impl DecayChain {
    /// Analytic (Bateman) solution from `initial = [x0, y0]`.
    #[must_use]
    pub fn exact(initial: &StateVector<2>, params: &DecayChainParams, t: f64) -> StateVector<2> {
        let DecayChainParams { k, k2 } = *params;
        let (x0, y0) = (initial[0], initial[1]);

        let x = x0 * (-k * t).exp();
        let fed = if (k2 - k).abs() <= f64::EPSILON * k.abs().max(1.0) {
            k * x0 * t * (-k * t).exp()
        } else {
            k * x0 / (k2 - k) * ((-k * t).exp() - (-k2 * t).exp())
        };

        StateVector::new([x, fed + y0 * (-k2 * t).exp()])
    }
}

impl DerivativeFunction<2> for DecayChain {
    type Params = DecayChainParams;
    type Error = Infallible;

    fn derivative(
        &self,
        _t: f64,
        y: &StateVector<2>,
        params: &DecayChainParams,
    ) -> Result<StateVector<2>, Infallible> {
        let DecayChainParams { k, k2 } = *params;
        Ok(StateVector::new([-k * y[0], k * y[0] - k2 * y[1]]))
    }
}
