//! Finalization of a merged record into the reported moments

use crate::error::{Error, Result};

use super::partial::PartialMoments;

/// Reported moments for a single feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureMoments {
    /// Sum of all observations
    pub sum: f64,
    /// Sum of squared observations
    pub sum_squares: f64,
    /// Smallest observation (implicit zeros included)
    pub minimum: f64,
    /// Largest observation (implicit zeros included)
    pub maximum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Standard deviation
    pub std_dev: f64,
    /// Variation coefficient, or `None` when the mean is zero and the
    /// coefficient is undefined
    pub variation: Option<f64>,
    /// Second raw moment (`sum_squares / n`)
    pub second_raw_moment: f64,
}

/// Final per-feature moments derived from one fully-merged record
#[derive(Debug, Clone)]
pub struct MomentsReport {
    observation_count: u64,
    features: Vec<FeatureMoments>,
}

impl MomentsReport {
    /// Total number of observations across all partitions
    pub fn observation_count(&self) -> u64 {
        self.observation_count
    }

    /// Number of feature columns
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// All per-feature moments
    pub fn features(&self) -> &[FeatureMoments] {
        &self.features
    }

    /// Moments of one feature
    ///
    /// # Panics
    ///
    /// Panics if `feature` is out of range.
    pub fn feature(&self, feature: usize) -> &FeatureMoments {
        &self.features[feature]
    }

    /// Variation coefficient of one feature
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateMoment`] when the feature's mean is zero.
    /// The failure is per-feature; other features stay fully reported.
    pub fn variation(&self, feature: usize) -> Result<f64> {
        self.features[feature]
            .variation
            .ok_or(Error::DegenerateMoment { feature })
    }

    /// Features whose variation coefficient is undefined
    pub fn degenerate_features(&self) -> impl Iterator<Item = usize> + '_ {
        self.features
            .iter()
            .enumerate()
            .filter(|(_, m)| m.variation.is_none())
            .map(|(f, _)| f)
    }
}

impl PartialMoments {
    /// Derive the reported moments, consuming the merged record
    ///
    /// For each feature: `mean = sum / n`, population
    /// `variance = sum_squares / n - mean^2`, `std_dev = sqrt(variance)`,
    /// `second_raw_moment = sum_squares / n`, and
    /// `variation = std_dev / mean` where the mean is nonzero. A zero-mean
    /// feature is marked degenerate in the report instead of producing a
    /// NaN; all its other moments are still computed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDataset`] when the record holds zero
    /// observations.
    pub fn finalize(self) -> Result<MomentsReport> {
        if self.observation_count == 0 {
            return Err(Error::EmptyDataset);
        }

        let n = self.observation_count as f64;
        let features = (0..self.num_features())
            .map(|f| {
                let sum = self.sum[f];
                let sum_squares = self.sum_squares[f];
                let mean = sum / n;
                let second_raw_moment = sum_squares / n;
                let variance = second_raw_moment - mean * mean;
                let std_dev = variance.sqrt();
                let variation = if mean == 0.0 {
                    None
                } else {
                    Some(std_dev / mean)
                };

                FeatureMoments {
                    sum,
                    sum_squares,
                    minimum: self.min[f],
                    maximum: self.max[f],
                    mean,
                    variance,
                    std_dev,
                    variation,
                    second_raw_moment,
                }
            })
            .collect();

        Ok(MomentsReport {
            observation_count: self.observation_count,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::decode_partition;

    #[test]
    fn test_finalize_empty_dataset() {
        let err = PartialMoments::identity(4).finalize().unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_finalize_moments() {
        // Feature 1 observations: {2.0, 4.0}; feature 2: {0.0, 1.0}.
        let matrix = decode_partition(b"1,2,4\n1,1,2\n2.0,4.0,1.0\n").unwrap();
        let report = PartialMoments::from_csr(&matrix).finalize().unwrap();

        assert_eq!(report.observation_count(), 2);
        assert_eq!(report.num_features(), 2);

        let f0 = report.feature(0);
        assert_eq!(f0.mean, 3.0);
        assert_eq!(f0.second_raw_moment, 10.0);
        assert_eq!(f0.variance, 1.0);
        assert_eq!(f0.std_dev, 1.0);
        assert_eq!(f0.variation, Some(1.0 / 3.0));
        assert_eq!(f0.minimum, 2.0);
        assert_eq!(f0.maximum, 4.0);

        let f1 = report.feature(1);
        assert_eq!(f1.mean, 0.5);
        assert_eq!(f1.variance, 0.25);
        assert_eq!(f1.std_dev, 0.5);
        assert_eq!(f1.variation, Some(1.0));
    }

    #[test]
    fn test_finalize_degenerate_variation() {
        // Feature 1 sums to zero, feature 2 does not.
        let matrix = decode_partition(b"1,3,5\n1,2,1,2\n3.0,1.0,-3.0,1.0\n").unwrap();
        let report = PartialMoments::from_csr(&matrix).finalize().unwrap();

        assert_eq!(report.feature(0).variation, None);
        assert!(matches!(
            report.variation(0),
            Err(Error::DegenerateMoment { feature: 0 })
        ));

        // The degenerate feature still reports its other moments.
        assert_eq!(report.feature(0).mean, 0.0);
        assert_eq!(report.feature(0).variance, 9.0);
        assert_eq!(report.variation(1).unwrap(), 0.0);

        let degenerate: Vec<usize> = report.degenerate_features().collect();
        assert_eq!(degenerate, vec![0]);
    }
}
