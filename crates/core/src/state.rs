use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::StepIntegrable;

/// The instantaneous state of a dynamical system with `N` components.
///
/// A `StateVector` is a plain value: steppers never mutate one in place, they
/// return the next state. The same type doubles as the derivative of a state,
/// since both live in the same `N`-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector<const N: usize>([f64; N]);

impl<const N: usize> StateVector<N> {
    /// Creates a state from its components.
    #[must_use]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Returns the state with every component set to zero.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; N])
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true for the zero-dimensional state.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the component at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the underlying array.
    #[must_use]
    pub const fn into_array(self) -> [f64; N] {
        self.0
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Returns true if every component is finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|value| value.is_finite())
    }

    /// Returns a copy with one component replaced by `f(component)`.
    ///
    /// An out-of-range `index` leaves the state unchanged.
    #[must_use]
    pub fn map_component(mut self, index: usize, f: impl FnOnce(f64) -> f64) -> Self {
        if let Some(value) = self.0.get_mut(index) {
            *value = f(*value);
        }
        self
    }
}

impl<const N: usize> Default for StateVector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for StateVector<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<StateVector<N>> for [f64; N] {
    fn from(state: StateVector<N>) -> Self {
        state.0
    }
}

impl<const N: usize> Index<usize> for StateVector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for StateVector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<const N: usize> Add for StateVector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const N: usize> Sub for StateVector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const N: usize> Mul<f64> for StateVector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|value| value * rhs))
    }
}

impl<const N: usize> Mul<StateVector<N>> for f64 {
    type Output = StateVector<N>;

    fn mul(self, rhs: StateVector<N>) -> StateVector<N> {
        rhs * self
    }
}

impl<const N: usize> StepIntegrable<f64> for StateVector<N> {
    type Derivative = StateVector<N>;

    fn step(&self, derivative: &StateVector<N>, delta: f64) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + derivative.0[i] * delta))
    }
}
