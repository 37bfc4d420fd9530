//! Difference statistics

/// Statistics from a per-channel comparison
#[derive(Debug, Clone, Default)]
pub struct DiffStats {
    /// Mean absolute difference across all channels
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// Number of compared values
    pub count: usize,
}

impl DiffStats {
    /// Compare two sequences of triples
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ([f64; 3], [f64; 3])>,
    {
        let mut sum = 0.0;
        let mut max: f64 = 0.0;
        let mut count = 0;

        for (a, b) in pairs {
            for i in 0..3 {
                let d = (a[i] - b[i]).abs();
                sum += d;
                max = max.max(d);
                count += 1;
            }
        }

        Self {
            mean: if count == 0 { 0.0 } else { sum / count as f64 },
            max,
            count,
        }
    }

    /// True if every difference is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Smallest angular distance between two hues in degrees
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_stats() {
        let stats = DiffStats::from_pairs([([0.0, 0.0, 0.0], [0.1, 0.0, -0.2])]);
        assert_eq!(stats.count, 3);
        assert!((stats.max - 0.2).abs() < 1e-12);
        assert!((stats.mean - 0.1).abs() < 1e-12);
        assert!(stats.within(0.2));
        assert!(!stats.within(0.1));
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert!((hue_distance(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((hue_distance(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }
}
