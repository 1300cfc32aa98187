use crate::{confidence_half_width, Accumulator, Distribution, Policy};
use serde::Serialize;

/// Everything there is to report about one stream of samples.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub stddev: f64,
    pub stderr: f64,
    /// The confidence level `half_width` was computed at
    pub level: f64,
    pub half_width: f64,
    /// `half_width` as a percentage of `mean`
    pub percent_half_width: f64,
    pub distribution: Distribution,
}

impl Summary {
    /// Returns `None` if no samples have been ingested.
    pub fn new(stats: &Accumulator, level: f64, policy: Policy) -> Option<Summary> {
        let (min, max) = (stats.min()?, stats.max()?);
        let est = confidence_half_width(stats.variance(), stats.count(), level, policy);
        Some(Summary {
            count: stats.count(),
            sum: stats.sum(),
            min,
            max,
            mean: stats.mean(),
            variance: stats.variance(),
            stddev: stats.stddev(),
            stderr: stats.stderr(),
            level,
            half_width: est.half_width,
            percent_half_width: 100. * est.half_width / stats.mean(),
            distribution: est.distribution,
        })
    }
}
