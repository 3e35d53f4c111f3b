use super::Error;

/// Configuration for a divergence analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    window_start: f64,
    window_end: f64,
    component: usize,
    floor: f64,
}

impl Default for Config {
    /// Fit over `[10, 40]` on component 0 with a `1e-10` separation floor.
    fn default() -> Self {
        Self {
            window_start: 10.0,
            window_end: 40.0,
            component: 0,
            floor: 1e-10,
        }
    }
}

impl Config {
    /// Creates a config fitting over the inclusive window `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if either bound is non-finite or
    /// `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self, Error> {
        if !(start.is_finite() && end.is_finite()) || start > end {
            return Err(Error::InvalidWindow { start, end });
        }

        Ok(Self {
            window_start: start,
            window_end: end,
            ..Self::default()
        })
    }

    /// Returns a copy measuring separation on state component `component`.
    #[must_use]
    pub fn with_component(self, component: usize) -> Self {
        Self { component, ..self }
    }

    /// Returns a copy with a different separation floor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFloor`] unless `floor` is finite and positive.
    pub fn with_floor(self, floor: f64) -> Result<Self, Error> {
        if !(floor.is_finite() && floor > 0.0) {
            return Err(Error::InvalidFloor(floor));
        }
        Ok(Self { floor, ..self })
    }

    /// Returns the fit window as `(start, end)`.
    #[must_use]
    pub fn window(&self) -> (f64, f64) {
        (self.window_start, self.window_end)
    }

    /// Returns the state component whose separation is measured.
    #[must_use]
    pub fn component(&self) -> usize {
        self.component
    }

    /// Returns the separation floor applied before taking the logarithm.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}
