use std::f64::consts::TAU;

use super::BifurcationSample;

/// The stroboscopic angles recorded at one control value.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub control: f64,
    pub angles: Vec<f64>,
}

impl Branch {
    /// Counts clusters of angles closer than `tolerance`, treating angles as
    /// points on the circle so `-π` and `π` are neighbours.
    ///
    /// One cluster is a period-1 orbit, two a period doubling, and a count
    /// close to the number of samples a chaotic band.
    #[must_use]
    pub fn distinct_angles(&self, tolerance: f64) -> usize {
        let mut sorted = self.angles.clone();
        sorted.sort_by(f64::total_cmp);

        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return 0;
        };

        let gaps = sorted
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > tolerance)
            .count();

        // The gap across ±π joins the first and last clusters when small.
        if gaps > 0 && first + TAU - last <= tolerance {
            gaps
        } else {
            gaps + 1
        }
    }
}

/// Stroboscopic samples grouped by control value, in sweep order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BifurcationDiagram {
    branches: Vec<Branch>,
}

impl BifurcationDiagram {
    /// Groups consecutive samples sharing a control value.
    #[must_use]
    pub fn from_samples(samples: &[BifurcationSample]) -> Self {
        let mut branches: Vec<Branch> = Vec::new();

        for sample in samples {
            match branches.last_mut() {
                Some(branch) if branch.control.to_bits() == sample.control.to_bits() => {
                    branch.angles.push(sample.angle);
                }
                _ => branches.push(Branch {
                    control: sample.control,
                    angles: vec![sample.angle],
                }),
            }
        }

        Self { branches }
    }

    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Pairs each control value with its number of distinct angles.
    #[must_use]
    pub fn periodicity(&self, tolerance: f64) -> Vec<(f64, usize)> {
        self.branches
            .iter()
            .map(|branch| (branch.control, branch.distinct_angles(tolerance)))
            .collect()
    }
}
