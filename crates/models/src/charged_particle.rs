use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use strobe_core::{DerivativeFunction, StateVector};

/// A uniform electric field `E ux` crossed with a magnetic field `B uz`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorentzParams {
    /// Charge-to-mass ratio `q/m`.
    pub charge_to_mass: f64,

    /// Electric field magnitude along `x`.
    pub e_field: f64,

    /// Magnetic field magnitude along `z`.
    pub b_field: f64,
}

impl LorentzParams {
    /// Cyclotron angular frequency `(q/m) B`.
    #[must_use]
    pub fn cyclotron_frequency(&self) -> f64 {
        self.charge_to_mass * self.b_field
    }

    /// The `E × B` drift velocity `[0, -E/B]`.
    #[must_use]
    pub fn drift_velocity(&self) -> [f64; 2] {
        [0.0, -self.e_field / self.b_field]
    }
}

impl Default for LorentzParams {
    /// Reduced units `q/m = E = B = 1`.
    fn default() -> Self {
        Self {
            charge_to_mass: 1.0,
            e_field: 1.0,
            b_field: 1.0,
        }
    }
}

/// A charged particle in the plane under the Lorentz force `q (E + v × B)`.
///
/// State: `[x, y, vx, vy]`.
///
/// ```text
/// dvx/dt =  (q/m) (E + vy B)
/// dvy/dt = -(q/m) vx B
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChargedParticle;

impl DerivativeFunction<4> for ChargedParticle {
    type Params = LorentzParams;
    type Error = Infallible;

    fn derivative(
        &self,
        _t: f64,
        y: &StateVector<4>,
        params: &LorentzParams,
    ) -> Result<StateVector<4>, Infallible> {
        let LorentzParams {
            charge_to_mass,
            e_field,
            b_field,
        } = *params;
        let (vx, vy) = (y[2], y[3]);

        Ok(StateVector::new([
            vx,
            vy,
            charge_to_mass * (e_field + vy * b_field),
            -charge_to_mass * vx * b_field,
        ]))
    }
}
