//! Physical models for strobe.
//!
//! Each model is a unit struct implementing
//! [`DerivativeFunction`](strobe_core::DerivativeFunction) with its own typed
//! parameters:
//!
//! | Model                 | N | Parameters          |
//! |-----------------------|---|---------------------|
//! | [`Decay`]             | 1 | [`DecayParams`]     |
//! | [`DecayChain`]        | 2 | [`DecayChainParams`]|
//! | [`Oscillator`]        | 2 | [`OscillatorParams`]|
//! | [`LinearPendulum`]    | 2 | [`PendulumParams`]  |
//! | [`NonlinearPendulum`] | 2 | [`PendulumParams`]  |
//! | [`ChargedParticle`]   | 4 | [`LorentzParams`]   |
//!
//! The [`scenario`] module reads these parameters from TOML.

mod charged_particle;
mod decay;
mod oscillator;
mod pendulum;
pub mod scenario;

pub use charged_particle::{ChargedParticle, LorentzParams};
pub use decay::{Decay, DecayChain, DecayChainParams, DecayParams};
pub use oscillator::{Oscillator, OscillatorParams};
pub use pendulum::{LinearPendulum, NonlinearPendulum, PendulumParams};
pub use scenario::{ConfigError, Scenario};
