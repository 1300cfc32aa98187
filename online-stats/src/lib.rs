/*! Descriptive statistics over a stream of samples, computed in a single
pass, plus a confidence interval for the mean.

## Example

Feed samples into an [`Accumulator`] one at a time, then ask how far the
true mean might plausibly be from the sample mean.

```
# use online_stats::*;
let stats = vec![2., 4., 4., 4., 5., 5., 7., 9.]
    .into_iter()
    .collect::<Accumulator>();
assert_eq!(stats.mean(), 5.);

let est = confidence_half_width(stats.variance(), stats.count(), 0.95, Policy::Auto);
assert_eq!(est.distribution, Distribution::T { ndf: 7 });
let msg = format!("μ = {:.2} ± {:.2} (p=95%)", stats.mean(), est.half_width);
assert_eq!(msg, "μ = 5.00 ± 1.78 (p=95%)");
```

*/

pub mod quantile;
mod stats;
mod summary;

use log::*;
use serde::Serialize;
use std::fmt;
pub use stats::*;
pub use summary::*;

/// Below this many samples the t-distribution is used instead of the normal.
pub const SMALL_SAMPLE: u64 = 30;

/// Which distribution to take the critical value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Policy {
    /// Student's t for `2 <= count < 30`, the normal otherwise
    #[default]
    Auto,
    /// Student's t whenever there are enough samples to have any degrees of
    /// freedom
    ForceT,
    /// Always the normal
    ForceZ,
}

impl Policy {
    pub fn select(self, count: u64) -> Distribution {
        match self {
            Policy::Auto if (2..SMALL_SAMPLE).contains(&count) => {
                Distribution::T { ndf: count - 1 }
            }
            Policy::ForceT if count >= 2 => Distribution::T { ndf: count - 1 },
            _ => Distribution::Z,
        }
    }
}

/// The distribution a critical value was actually taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Distribution {
    Z,
    T { ndf: u64 },
}

impl Distribution {
    /// The critical value with an upper-tail probability of `p`.
    pub fn quantile(self, p: f64) -> f64 {
        match self {
            Distribution::Z => quantile::z(p),
            Distribution::T { ndf } => quantile::t(p, ndf),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distribution::Z => f.write_str("z"),
            Distribution::T { ndf } => write!(f, "t({})", ndf),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// The `i` in `mean ± i`
    pub half_width: f64,
    pub distribution: Distribution,
    /// Set when there were fewer than two samples.  The half-width is still
    /// computed but it doesn't mean anything.
    pub degenerate: bool,
}

/// The half-width of a two-sided confidence interval for the population
/// mean, ie. the `i` in `mean ± i`.
///
/// `variance` and `count` describe the sample; `level` is the confidence
/// level, eg. 0.95, and must lie strictly between 0 and 1.
///
/// We estimate the standard deviation of the sample mean by the standard
/// error `sqrt(s²/n)` and scale it by the critical value of the chosen
/// distribution.  With fewer than two samples there is no estimate of the
/// variance; we log a warning and return a number anyway.
pub fn confidence_half_width(variance: f64, count: u64, level: f64, policy: Policy) -> Estimate {
    let std_error = (variance / count as f64).sqrt();

    // Convert `level`, which is two-sided, into `alpha`, which is one-sided
    let alpha = (1. - level) / 2.;

    let degenerate = count < 2;
    if degenerate {
        warn!(
            "Less than two points are available to compute the confidence interval (n={})",
            count
        );
    }
    let distribution = policy.select(count);
    let quantile = distribution.quantile(alpha);
    debug!("Critical value at alpha={} from {}: {}", alpha, distribution, quantile);

    Estimate {
        half_width: quantile * std_error,
        distribution,
        degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn four_values() {
        let stats = vec![1.0_f64, 2., 3., 4.]
            .into_iter()
            .collect::<Accumulator>();
        let est = |level| {
            confidence_half_width(stats.variance(), stats.count(), level, Policy::Auto)
        };
        assert_abs_diff_eq!(est(0.95).half_width, 2.0039382, epsilon = 1e-7);
        assert_abs_diff_eq!(est(0.99).half_width, 3.4905535, epsilon = 1e-7);
        assert_eq!(est(0.95).distribution, Distribution::T { ndf: 3 });
        assert!(!est(0.95).degenerate);
    }

    #[test]
    fn textbook_sample() {
        let stats = vec![2.0_f64, 4., 4., 4., 5., 5., 7., 9.]
            .into_iter()
            .collect::<Accumulator>();
        assert_eq!(stats.count(), 8);
        assert_eq!(stats.mean(), 5.);
        assert_abs_diff_eq!(stats.variance(), 4.5714, epsilon = 1e-4);
        assert_abs_diff_eq!(stats.stddev(), 2.1381, epsilon = 1e-4);
        assert_abs_diff_eq!(stats.stderr(), 0.7559, epsilon = 1e-4);

        let est = confidence_half_width(stats.variance(), stats.count(), 0.95, Policy::Auto);
        assert_eq!(est.distribution, Distribution::T { ndf: 7 });
        assert_relative_eq!(
            est.half_width,
            quantile::t(0.025, 7) * stats.stderr(),
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(est.half_width, 1.7822, epsilon = 1e-2);
    }

    #[test]
    fn switches_to_z_at_thirty() {
        let stats = (0..29).map(f64::from).collect::<Accumulator>();
        let est = confidence_half_width(stats.variance(), stats.count(), 0.95, Policy::Auto);
        assert_eq!(est.distribution, Distribution::T { ndf: 28 });
        assert_relative_eq!(est.half_width, 3.239427554076219, max_relative = 1e-9);

        let stats = (0..30).map(f64::from).collect::<Accumulator>();
        let est = confidence_half_width(stats.variance(), stats.count(), 0.95, Policy::Auto);
        assert_eq!(est.distribution, Distribution::Z);
        assert_relative_eq!(est.half_width, 3.150889808246316, max_relative = 1e-9);
    }

    #[test]
    fn auto_policy() {
        assert_eq!(Policy::Auto.select(0), Distribution::Z);
        assert_eq!(Policy::Auto.select(1), Distribution::Z);
        assert_eq!(Policy::Auto.select(2), Distribution::T { ndf: 1 });
        assert_eq!(Policy::Auto.select(29), Distribution::T { ndf: 28 });
        assert_eq!(Policy::Auto.select(30), Distribution::Z);
        assert_eq!(Policy::Auto.select(10_000), Distribution::Z);
    }

    #[test]
    fn forced_policies() {
        assert_eq!(Policy::ForceT.select(500), Distribution::T { ndf: 499 });
        assert_eq!(Policy::ForceT.select(1), Distribution::Z);
        assert_eq!(Policy::ForceZ.select(5), Distribution::Z);

        let forced = confidence_half_width(4., 100, 0.95, Policy::ForceT);
        let auto = confidence_half_width(4., 100, 0.95, Policy::Auto);
        assert!(forced.half_width > auto.half_width);
    }

    #[test]
    fn single_sample_is_degenerate() {
        let mut stats = Accumulator::new();
        stats.ingest(3.);
        let est = confidence_half_width(stats.variance(), stats.count(), 0.95, Policy::Auto);
        assert!(est.degenerate);
        assert_eq!(est.distribution, Distribution::Z);
        assert_eq!(est.half_width, 0.);
    }

    #[test]
    fn distribution_names() {
        assert_eq!(Distribution::Z.to_string(), "z");
        assert_eq!(Distribution::T { ndf: 7 }.to_string(), "t(7)");
    }
}
