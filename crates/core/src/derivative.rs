use std::{f64::consts::TAU, marker::PhantomData};

use thiserror::Error;

use crate::StateVector;

/// The right-hand side of an ODE system `dy/dt = f(t, y, params)`.
///
/// Each physical model implements this trait once, with its own typed
/// [`Params`](DerivativeFunction::Params). Steppers and integrators depend only
/// on this capability, never on a concrete model.
///
/// Implementations must be pure: the same `(t, y, params)` always yields the
/// same derivative, and `params` is never modified.
pub trait DerivativeFunction<const N: usize> {
    /// Model-specific parameters, passed unchanged to every evaluation.
    type Params;

    /// Error returned when the derivative cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the rate of change of `y` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot produce a derivative.
    fn derivative(
        &self,
        t: f64,
        y: &StateVector<N>,
        params: &Self::Params,
    ) -> Result<StateVector<N>, Self::Error>;
}

impl<T, const N: usize> DerivativeFunction<N> for &T
where
    T: DerivativeFunction<N> + ?Sized,
{
    type Params = T::Params;
    type Error = T::Error;

    fn derivative(
        &self,
        t: f64,
        y: &StateVector<N>,
        params: &Self::Params,
    ) -> Result<StateVector<N>, Self::Error> {
        (**self).derivative(t, y, params)
    }
}

/// Parameters of a periodically forced system.
pub trait Forced {
    /// Angular frequency of the forcing term (rad/s).
    fn forcing_frequency(&self) -> f64;

    /// Period of the forcing term, `2π / forcing_frequency`.
    fn forcing_period(&self) -> f64 {
        TAU / self.forcing_frequency()
    }
}

/// A derivative returned a vector of the wrong length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("derivative has {found} components, expected {expected}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}

/// A [`DerivativeFunction`] backed by a closure that returns a `Vec<f64>`.
///
/// The closure's output length is only known at run time, so every evaluation
/// checks it against `N` and reports [`DimensionMismatch`] on disagreement.
/// Construct with [`from_fn`].
pub struct FromFn<F, P, const N: usize> {
    f: F,
    _params: PhantomData<fn(&P)>,
}

/// Wraps a closure `f(t, y, params) -> Vec<f64>` as a derivative function.
pub fn from_fn<const N: usize, P, F>(f: F) -> FromFn<F, P, N>
where
    F: Fn(f64, &StateVector<N>, &P) -> Vec<f64>,
{
    FromFn {
        f,
        _params: PhantomData,
    }
}

impl<F, P, const N: usize> DerivativeFunction<N> for FromFn<F, P, N>
where
    F: Fn(f64, &StateVector<N>, &P) -> Vec<f64>,
{
    type Params = P;
    type Error = DimensionMismatch;

    fn derivative(
        &self,
        t: f64,
        y: &StateVector<N>,
        params: &P,
    ) -> Result<StateVector<N>, DimensionMismatch> {
        let dy = (self.f)(t, y, params);
        let found = dy.len();
        <[f64; N]>::try_from(dy)
            .map(StateVector::new)
            .map_err(|_| DimensionMismatch { expected: N, found })
    }
}
