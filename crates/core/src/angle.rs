use std::f64::consts::{PI, TAU};

use crate::{PostStep, StateVector};

/// Wraps an angle into the half-open interval `(−π, π]`.
///
/// Angles already in range are returned unchanged, so wrapping is exactly
/// idempotent. Non-finite input is returned as-is.
#[must_use]
pub fn wrap_angle(theta: f64) -> f64 {
    if !theta.is_finite() || (theta > -PI && theta <= PI) {
        return theta;
    }

    let mut wrapped = (theta + PI).rem_euclid(TAU) - PI;

    // Rounding in the shift above can land exactly on a boundary.
    if wrapped <= -PI {
        wrapped += TAU;
    }
    if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}

/// Post-step policy that keeps one angular state component in `(−π, π]`.
///
/// Only the configured component is touched; angular velocity and any other
/// components pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleWrap {
    component: usize,
}

impl AngleWrap {
    /// Wraps the state component at `component`.
    #[must_use]
    pub const fn new(component: usize) -> Self {
        Self { component }
    }

    /// Returns the index of the wrapped component.
    #[must_use]
    pub const fn component(&self) -> usize {
        self.component
    }
}

impl Default for AngleWrap {
    /// Wraps component 0, the angle in `[θ, dθ/dt]` pendulum states.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const N: usize> PostStep<N> for AngleWrap {
    fn apply(&self, state: StateVector<N>) -> StateVector<N> {
        state.map_component(self.component, wrap_angle)
    }
}
