use crate::StateVector;

/// A single recorded point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<const N: usize> {
    /// Time of the sample.
    pub t: f64,

    /// State at time `t`.
    pub state: StateVector<N>,
}

impl<const N: usize> Sample<N> {
    /// Creates a sample from a time and a state.
    #[must_use]
    pub fn new(t: f64, state: StateVector<N>) -> Self {
        Self { t, state }
    }
}

/// The ordered history of states produced by an integration run.
///
/// Samples are stored in insertion order, which is time order. A trajectory is
/// built once by a solver and only read afterward.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory<const N: usize> {
    samples: Vec<Sample<N>>,
}

impl<const N: usize> Trajectory<N> {
    /// Wraps samples that are already in time order.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample<N>>) -> Self {
        Self { samples }
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the trajectory has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns all samples.
    #[must_use]
    pub fn samples(&self) -> &[Sample<N>] {
        &self.samples
    }

    /// Returns the first sample (the initial state).
    #[must_use]
    pub fn first(&self) -> Option<&Sample<N>> {
        self.samples.first()
    }

    /// Returns the last sample (the final state).
    #[must_use]
    pub fn last(&self) -> Option<&Sample<N>> {
        self.samples.last()
    }

    /// Iterates over the samples in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<N>> {
        self.samples.iter()
    }

    /// Iterates over the sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }

    /// Iterates over the states.
    pub fn states(&self) -> impl Iterator<Item = &StateVector<N>> + '_ {
        self.samples.iter().map(|s| &s.state)
    }

    /// Iterates over one state component across all samples.
    ///
    /// This is the per-component array a plotting layer needs, for example the
    /// angle `θ(t)` of a pendulum run.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn component(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(index < N, "component {index} out of range for dimension {N}");
        self.samples.iter().map(move |s| s.state[index])
    }

    /// Consumes the trajectory, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample<N>> {
        self.samples
    }
}

impl<const N: usize> FromIterator<Sample<N>> for Trajectory<N> {
    fn from_iter<I: IntoIterator<Item = Sample<N>>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}

impl<'a, const N: usize> IntoIterator for &'a Trajectory<N> {
    type Item = &'a Sample<N>;
    type IntoIter = std::slice::Iter<'a, Sample<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
