//! Fixed-step integrators for strobe.
//!
//! - [`stepper`]: one-step methods ([`Euler`], [`Rk4`]) and the run-time
//!   selectable [`Method`]
//! - [`fixed`]: drives a stepper across a [`TimeGrid`], producing a
//!   [`Trajectory`]
//!
//! [`TimeGrid`]: strobe_core::TimeGrid
//! [`Trajectory`]: strobe_core::Trajectory

pub mod fixed;
pub mod stepper;

pub use fixed::{Action, Error, Event, Solution, Status};
pub use stepper::{Euler, Method, Rk4, Stepper};
