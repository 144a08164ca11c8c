use std::fmt;

#[allow(unused_imports)]
use crate::Llrb;

/// Depth calculates minimum, maximum, average and percentile of leaf-node
/// depths in the [`Llrb`] tree. Depth is counted in edges from the root,
/// so a tree holding a single key has one leaf at depth 0.
#[derive(Clone, Default, Debug)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: Vec<u64>, // histogram, indexed by depth.
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        if self.depths.len() <= depth {
            self.depths.resize(depth + 1, 0);
        }
        self.depths[depth] += 1;
    }

    /// Return number of leaf-nodes sampled in [`Llrb`] instance.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of leaf-node in [`Llrb`] instance.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of leaf-node in [`Llrb`] instance.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of leaf-nodes in [`Llrb`] instance.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Only percentiles from 90 and above are
    /// reported.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.depths.iter().enumerate().filter(|(_, &n)| n > 0);
        for (depth, samples) in iter {
            acc += *samples;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn to_json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(p, d)| format!(r#""{}": {}"#, p, d))
            .collect();
        format!(
            r#"{{ "samples": {}, "min": {}, "mean": {}, "max": {}, "percentiles": {{ {} }} }}"#,
            self.samples,
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "depth (min, avg, max): {:?}",
            (self.min, self.mean(), self.max)
        )?;
        for (perc, depth) in self.percentiles().into_iter() {
            write!(f, "\n  {} percentile = {}", perc, depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_empty() {
        let depth = Depth::new();
        assert_eq!(depth.samples(), 0);
        assert_eq!(depth.min(), 0);
        assert_eq!(depth.max(), 0);
        assert_eq!(depth.mean(), 0);
        assert!(depth.percentiles().is_empty());
    }

    #[test]
    fn test_depth_sample() {
        let mut depth = Depth::new();
        for d in [3, 4, 4, 5, 5, 5, 6, 6, 7, 9].iter() {
            depth.sample(*d);
        }
        assert_eq!(depth.samples(), 10);
        assert_eq!(depth.min(), 3);
        assert_eq!(depth.max(), 9);
        assert_eq!(depth.mean(), 5);
        assert_eq!(depth.percentiles(), vec![(90, 7), (100, 9)]);

        let json = depth.to_json();
        assert!(json.contains(r#""min": 3"#), "{}", json);
        assert!(json.contains(r#""90": 7"#), "{}", json);
        assert!(depth.to_string().starts_with("depth (min, avg, max): (3, 5, 9)"));
    }

    #[test]
    fn test_depth_zero() {
        let mut depth = Depth::new();
        depth.sample(2);
        depth.sample(0);
        assert_eq!(depth.min(), 0);
        assert_eq!(depth.max(), 2);
        assert_eq!(depth.mean(), 1);
    }
}
