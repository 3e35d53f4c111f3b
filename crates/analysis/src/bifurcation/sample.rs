/// One stroboscopic sample of a bifurcation sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BifurcationSample {
    /// The control parameter value this sample was taken at.
    pub control: f64,

    /// The wrapped angle at the start of a forcing period.
    pub angle: f64,

    /// Position of the sample within its control value, from 0.
    pub index: usize,
}
