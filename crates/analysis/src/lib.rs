//! Sensitivity and bifurcation analysis built on strobe integrators.
//!
//! - [`divergence`]: Lyapunov exponent from the separation of two nearby runs
//! - [`bifurcation`]: stroboscopic sampling over a control-parameter sweep
//! - [`refinement`]: observed order of accuracy under step refinement
//! - [`fit`]: least-squares line fitting used by the analyses
//!
//! The `parallel` feature (on by default) runs independent integrations on
//! the rayon thread pool. Outputs are identical with or without it.

pub mod bifurcation;
pub mod divergence;
pub mod fit;
pub mod refinement;

pub use bifurcation::{BifurcationDiagram, BifurcationSample};
pub use divergence::{Divergence, DivergenceRecord};
pub use fit::{FitError, LinearFit, linear_fit};
