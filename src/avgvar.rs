/// AvgVar incrementally accumulates samples to compute their mean,
/// variance and standard deviation, without holding on to the samples.
///
/// Used by [`Llrb::height_stats`] to summarise node depths.
///
/// [`Llrb::height_stats`]: crate::Llrb::height_stats
#[derive(Clone, Default, Debug)]
pub struct AvgVar {
    samples: usize,
    sum: f64,
    sumsq: f64,
}

impl AvgVar {
    /// Create an empty accumulator.
    pub fn new() -> AvgVar {
        Default::default()
    }

    /// Add a sample.
    pub fn add(&mut self, sample: f64) {
        self.samples += 1;
        self.sum += sample;
        self.sumsq += sample * sample;
    }

    /// Return number of samples added so far.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return the sum of all samples.
    #[inline]
    pub fn total(&self) -> f64 {
        self.sum
    }

    /// Return the mean of samples, 0.0 when there are no samples.
    pub fn mean(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.sum / (self.samples as f64)
        }
    }

    /// Return the population variance of samples.
    pub fn variance(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let mean = self.mean();
        // rounding can push this a hair below zero for constant samples.
        (self.sumsq / (self.samples as f64) - mean * mean).max(0.0)
    }

    /// Return the population standard deviation of samples.
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avgvar_empty() {
        let av = AvgVar::new();
        assert_eq!(av.samples(), 0);
        assert_eq!(av.mean(), 0.0);
        assert_eq!(av.stddev(), 0.0);
    }

    #[test]
    fn test_avgvar() {
        let mut av = AvgVar::new();
        for sample in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].iter() {
            av.add(*sample);
        }
        assert_eq!(av.samples(), 8);
        assert_eq!(av.total(), 40.0);
        assert!((av.mean() - 5.0).abs() < 1e-9);
        assert!((av.variance() - 4.0).abs() < 1e-9);
        assert!((av.stddev() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_avgvar_constant() {
        let mut av = AvgVar::new();
        (0..1000).for_each(|_| av.add(0.1));
        assert!((av.mean() - 0.1).abs() < 1e-9);
        assert!(av.stddev() < 1e-6);
    }
}
