/// Running statistics over a stream of samples.
///
/// Holds a fixed amount of state no matter how many samples are ingested.
/// The mean and variance are updated with the recursive definitions in
/// Ross, _Simulation_ (2nd ed., 1997), p. 116.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Accumulator {
    /// the number of samples seen so far
    count: u64,
    /// the smallest sample seen so far
    min: Option<f64>,
    /// the largest sample seen so far
    max: Option<f64>,
    /// the mean of the samples seen so far
    mean: f64,
    /// the unbiased sample variance; zero until the second sample
    variance: f64,
}

impl Accumulator {
    pub fn new() -> Accumulator {
        Accumulator::default()
    }

    /// Forget every sample seen so far.
    pub fn reset(&mut self) {
        *self = Accumulator::default();
    }

    pub fn ingest(&mut self, x: f64) {
        let old_mean = self.mean;
        let old_count = self.count as f64;
        self.min = Some(self.min.map_or(x, |min| min.min(x)));
        self.max = Some(self.max.map_or(x, |max| max.max(x)));
        self.mean = old_mean + (x - old_mean) / (old_count + 1.);
        // The variance term needs the new mean but the old count
        if self.count > 0 {
            let shift = self.mean - old_mean;
            self.variance =
                (1. - 1. / old_count) * self.variance + (old_count + 1.) * (shift * shift);
        }
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` until a sample has been ingested.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// `None` until a sample has been ingested.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sum(&self) -> f64 {
        self.count as f64 * self.mean
    }

    /// The unbiased sample variance.  Not meaningful with fewer than two
    /// samples, in which case it's zero.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn stddev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// The standard error of the mean, ie. an estimate of the standard
    /// deviation of `mean()`.  NaN when no samples have been ingested.
    pub fn stderr(&self) -> f64 {
        (self.variance / self.count as f64).sqrt()
    }
}

impl Extend<f64> for Accumulator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for x in iter {
            self.ingest(x);
        }
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Accumulator {
        let mut acc = Accumulator::new();
        acc.extend(iter);
        acc
    }
}
