//! Scenario configuration read from TOML.
//!
//! A scenario names the physical parameters, the initial condition, the time
//! grid, and the integration method of a run:
//!
//! ```toml
//! omega = 1.0
//! q = 0.5
//! Fe = 1.5
//! Omega_e = 0.6666666666666666
//! theta0 = 10.0      # degrees
//! dt = 0.05
//! t_max = 100.0
//! method = "rk4"
//! ```
//!
//! Exactly one of `t_max` or `n_steps` sets the run length. Reading files is
//! left to the caller; [`Scenario::from_toml`] takes the TOML text.

use serde::Deserialize;
use strobe_core::{StateVector, StepError, TimeGrid};
use strobe_solvers::Method;
use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::{DecayChainParams, DecayParams, OscillatorParams, PendulumParams};

/// Errors that can occur when loading a [`Scenario`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("time step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("`{key}` must be finite, got {value}")]
    NonFinite { key: &'static str, value: f64 },

    #[error("set exactly one of `t_max` or `n_steps`, found {found}")]
    RunLength { found: &'static str },

    #[error("missing required key `{0}`")]
    MissingKey(&'static str),

    #[error(transparent)]
    Grid(#[from] StepError),
}

/// A validated run description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Decay rate of the parent species.
    #[serde(default)]
    pub k: Option<f64>,

    /// Decay rate of the daughter species; defaults to `k / 10`.
    #[serde(default)]
    pub k2: Option<f64>,

    /// Natural angular frequency.
    #[serde(default = "default_omega")]
    pub omega: f64,

    /// Damping coefficient.
    #[serde(default)]
    pub q: f64,

    /// Forcing amplitude.
    #[serde(rename = "Fe", default)]
    pub fe: f64,

    /// Forcing angular frequency; defaults to `2 omega / 3`.
    #[serde(rename = "Omega_e", default)]
    pub omega_e: Option<f64>,

    /// Time step.
    pub dt: f64,

    /// Run length in time units.
    #[serde(default)]
    pub t_max: Option<f64>,

    /// Run length in steps.
    #[serde(default)]
    pub n_steps: Option<usize>,

    /// Initial pendulum angle in degrees.
    #[serde(default)]
    pub theta0: f64,

    /// Initial pendulum angular velocity in rad/s.
    #[serde(default)]
    pub omega0: f64,

    /// Initial amount of the parent species, or initial oscillator position.
    #[serde(default = "default_x0")]
    pub x0: f64,

    /// Initial amount of the daughter species.
    #[serde(default)]
    pub y0: f64,

    /// Initial oscillator velocity.
    #[serde(default)]
    pub v0: f64,

    /// Integration method.
    #[serde(default)]
    pub method: Method,
}

fn default_omega() -> f64 {
    1.0
}

fn default_x0() -> f64 {
    1.0
}

impl Scenario {
    /// Parses and validates a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text is not valid TOML for a scenario
    /// or if any value fails validation.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let scenario: Self = toml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the time step, the run length, and that every value is finite.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.dt));
        }

        match (self.t_max, self.n_steps) {
            (Some(_), Some(_)) => return Err(ConfigError::RunLength { found: "both" }),
            (None, None) => return Err(ConfigError::RunLength { found: "neither" }),
            _ => {}
        }

        let values = [
            ("k", self.k),
            ("k2", self.k2),
            ("omega", Some(self.omega)),
            ("q", Some(self.q)),
            ("Fe", Some(self.fe)),
            ("Omega_e", self.omega_e),
            ("t_max", self.t_max),
            ("theta0", Some(self.theta0)),
            ("omega0", Some(self.omega0)),
            ("x0", Some(self.x0)),
            ("y0", Some(self.y0)),
            ("v0", Some(self.v0)),
        ];
        for (key, value) in values {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite { key, value });
            }
        }

        Ok(())
    }

    /// The time grid, starting at `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the run length is invalid.
    pub fn grid(&self) -> Result<TimeGrid, ConfigError> {
        match (self.t_max, self.n_steps) {
            (Some(t_max), None) => Ok(TimeGrid::from_duration(0.0, self.dt, t_max)?),
            (None, Some(n_steps)) => Ok(TimeGrid::from_steps(0.0, self.dt, n_steps)?),
            (Some(_), Some(_)) => Err(ConfigError::RunLength { found: "both" }),
            (None, None) => Err(ConfigError::RunLength { found: "neither" }),
        }
    }

    /// The integration method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Pendulum parameters, with `Omega_e` defaulting to `2 omega / 3`.
    #[must_use]
    pub fn pendulum_params(&self) -> PendulumParams {
        let omega_e = self.omega_e.unwrap_or(2.0 * self.omega / 3.0);
        PendulumParams::new(self.omega, self.q, self.fe, omega_e)
    }

    /// Initial pendulum state `[θ0, ω0]` with `θ0` converted to radians.
    #[must_use]
    pub fn pendulum_initial_state(&self) -> StateVector<2> {
        let theta = Angle::new::<degree>(self.theta0);
        StateVector::new([theta.get::<radian>(), self.omega0])
    }

    /// Oscillator parameters.
    #[must_use]
    pub fn oscillator_params(&self) -> OscillatorParams {
        OscillatorParams {
            omega: self.omega,
            q: self.q,
        }
    }

    /// Initial oscillator state `[x0, v0]`.
    #[must_use]
    pub fn oscillator_initial_state(&self) -> StateVector<2> {
        StateVector::new([self.x0, self.v0])
    }

    /// Decay parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if `k` is not set.
    pub fn decay_params(&self) -> Result<DecayParams, ConfigError> {
        let k = self.k.ok_or(ConfigError::MissingKey("k"))?;
        Ok(DecayParams { k })
    }

    /// Decay chain parameters, with `k2` defaulting to `k / 10`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if `k` is not set.
    pub fn decay_chain_params(&self) -> Result<DecayChainParams, ConfigError> {
        let DecayParams { k } = self.decay_params()?;
        Ok(match self.k2 {
            Some(k2) => DecayChainParams { k, k2 },
            None => DecayChainParams::with_slow_daughter(k),
        })
    }

    /// Initial decay state `[x0]`.
    #[must_use]
    pub fn decay_initial_state(&self) -> StateVector<1> {
        StateVector::new([self.x0])
    }

    /// Initial decay chain state `[x0, y0]`.
    #[must_use]
    pub fn decay_chain_initial_state(&self) -> StateVector<2> {
        StateVector::new([self.x0, self.y0])
    }
}
