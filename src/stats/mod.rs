//! Partial statistics, the combine algebra, and finalization
//!
//! Each partition reduces to a [`PartialMoments`] record: an observation
//! count plus feature-wise sum, sum of squares, minimum, and maximum. Those
//! are sufficient statistics for the reported moments, and they merge with
//! an operation that is associative and commutative, so partial records can
//! be folded pairwise in any order or tree shape and the result does not
//! depend on how the dataset was partitioned.
//!
//! [`PartialMoments::finalize`] turns one fully-merged record into a
//! [`MomentsReport`] with per-feature mean, variance, standard deviation,
//! variation coefficient, and second raw moment.
//!
//! # Usage
//!
//! ```
//! use momentr::sparse::decode_partition;
//! use momentr::stats::{merge_all, PartialMoments};
//!
//! let a = PartialMoments::from_csr(&decode_partition(b"1,3\n1,2\n2.0,3.0\n")?);
//! let b = PartialMoments::from_csr(&decode_partition(b"1,3\n1,2\n4.0,1.0\n")?);
//!
//! let merged = merge_all([a, b])?.expect("two records");
//! let report = merged.finalize()?;
//! assert_eq!(report.feature(0).mean, 3.0);
//! # Ok::<(), momentr::error::Error>(())
//! ```

mod combine;
mod moments;
mod partial;

pub use combine::merge_all;
pub use moments::{FeatureMoments, MomentsReport};
pub use partial::{PartialMoments, TaggedPartial};
