//! Core traits and types for the strobe integrators.
//!
//! This crate defines the shared abstractions that steppers, integrators,
//! models, and analyses build on:
//!
//! - [`StateVector`]: a fixed-size state of a dynamical system
//! - [`DerivativeFunction`]: maps `(t, state, params)` to a rate of change
//! - [`PostStep`]: a normalization applied to every freshly stepped state,
//!   such as [`AngleWrap`]
//! - [`TimeGrid`]: a validated fixed-step time grid
//! - [`Trajectory`]: the ordered history of states produced by a run
//! - [`Observer`]: watches each recorded step of a run and may stop it

mod angle;
mod derivative;
mod grid;
mod observer;
mod post_step;
mod state;
mod step;
mod trajectory;

pub use angle::{AngleWrap, wrap_angle};
pub use derivative::{DerivativeFunction, DimensionMismatch, Forced, FromFn, from_fn};
pub use grid::{StepError, TimeGrid, max_step_count};
pub use observer::Observer;
pub use post_step::PostStep;
pub use state::StateVector;
pub use step::StepIntegrable;
pub use trajectory::{Sample, Trajectory};
