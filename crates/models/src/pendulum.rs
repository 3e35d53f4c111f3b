use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use strobe_core::{DerivativeFunction, Forced, StateVector};

/// Parameters of a damped, driven pendulum.
///
/// ```text
/// dθ/dt = ω
/// dω/dt = -q ω - Ω² g(θ) + Fe sin(Ωe t)
/// ```
///
/// where `g(θ) = θ` for [`LinearPendulum`] and `sin θ` for [`NonlinearPendulum`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumParams {
    /// Natural angular frequency `Ω`.
    pub omega: f64,

    /// Damping coefficient `q`.
    pub q: f64,

    /// Forcing amplitude `Fe`.
    pub fe: f64,

    /// Forcing angular frequency `Ωe`.
    pub omega_e: f64,
}

impl PendulumParams {
    /// Creates pendulum parameters.
    #[must_use]
    pub fn new(omega: f64, q: f64, fe: f64, omega_e: f64) -> Self {
        Self {
            omega,
            q,
            fe,
            omega_e,
        }
    }

    /// A free, undamped pendulum with the default forcing frequency `2Ω/3`.
    #[must_use]
    pub fn free(omega: f64) -> Self {
        Self::new(omega, 0.0, 0.0, 2.0 * omega / 3.0)
    }

    /// Returns a copy with the forcing amplitude replaced.
    ///
    /// This is the control setter used by bifurcation sweeps over `Fe`.
    #[must_use]
    pub fn with_forcing_amplitude(self, fe: f64) -> Self {
        Self { fe, ..self }
    }

    /// Returns a copy with the damping replaced.
    #[must_use]
    pub fn with_damping(self, q: f64) -> Self {
        Self { q, ..self }
    }

    /// Driving torque per unit inertia at time `t`.
    #[must_use]
    pub fn forcing(&self, t: f64) -> f64 {
        self.fe * (self.omega_e * t).sin()
    }

    fn acceleration(&self, t: f64, restoring: f64, velocity: f64) -> f64 {
        -self.q * velocity - self.omega * self.omega * restoring + self.forcing(t)
    }
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self::free(1.0)
    }
}

impl Forced for PendulumParams {
    fn forcing_frequency(&self) -> f64 {
        self.omega_e
    }
}

/// Small-angle pendulum, restoring term `Ω² θ`.
///
/// State: `[θ, ω]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearPendulum;

impl DerivativeFunction<2> for LinearPendulum {
    type Params = PendulumParams;
    type Error = Infallible;

    fn derivative(
        &self,
        t: f64,
        y: &StateVector<2>,
        params: &PendulumParams,
    ) -> Result<StateVector<2>, Infallible> {
        let (theta, omega) = (y[0], y[1]);
        Ok(StateVector::new([omega, params.acceleration(t, theta, omega)]))
    }
}

/// Full pendulum, restoring term `Ω² sin θ`.
///
/// State: `[θ, ω]`. Chaotic for suitable damping and forcing, such as
/// `q = 0.5`, `Fe = 1.5`, `Ωe = 2/3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonlinearPendulum;

impl DerivativeFunction<2> for NonlinearPendulum {
    type Params = PendulumParams;
    type Error = Infallible;

    fn derivative(
        &self,
        t: f64,
        y: &StateVector<2>,
        params: &PendulumParams,
    ) -> Result<StateVector<2>, Infallible> {
        let (theta, omega) = (y[0], y[1]);
        Ok(StateVector::new([omega, params.acceleration(t, theta.sin(), omega)]))
    }
}
