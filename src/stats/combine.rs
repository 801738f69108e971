//! Order-insensitive merging of partial statistics records

use crate::error::{Error, Result};

use super::partial::PartialMoments;

impl PartialMoments {
    /// Merge two records feature-wise
    ///
    /// Observation counts and sums add, extrema take the feature-wise
    /// min/max. The operation is associative and commutative, so any number
    /// of records may be folded pairwise in any order or tree shape; only
    /// floating-point summation order can differ between shapes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the records cover different
    /// feature counts. That indicates inconsistent partitioning and is fatal
    /// to the whole job.
    pub fn combine(mut self, other: PartialMoments) -> Result<PartialMoments> {
        if self.num_features() != other.num_features() {
            return Err(Error::dimension_mismatch(
                self.num_features(),
                other.num_features(),
            ));
        }

        self.observation_count += other.observation_count;
        for f in 0..self.num_features() {
            self.sum[f] += other.sum[f];
            self.sum_squares[f] += other.sum_squares[f];
            self.min[f] = self.min[f].min(other.min[f]);
            self.max[f] = self.max[f].max(other.max[f]);
        }
        Ok(self)
    }
}

/// Fold any number of partial records into one
///
/// Applies [`PartialMoments::combine`] sequentially. Returns `Ok(None)` when
/// the iterator yields no records at all.
///
/// # Errors
///
/// Propagates the first [`Error::DimensionMismatch`] from a combine step.
pub fn merge_all<I>(records: I) -> Result<Option<PartialMoments>>
where
    I: IntoIterator<Item = PartialMoments>,
{
    let mut iter = records.into_iter();
    let Some(mut acc) = iter.next() else {
        return Ok(None);
    };
    for record in iter {
        acc = acc.combine(record)?;
    }
    Ok(Some(acc))
}
