//! # momentr
//!
//! **Partitioned low-order moments over sparse CSR data.**
//!
//! momentr computes count, sum, sum-of-squares, minimum, maximum, mean,
//! variance, standard deviation, variation coefficient, and second raw
//! moment over a dataset stored as a sparse matrix and split across many
//! independently processed partitions.
//!
//! ## How it works
//!
//! - **Decode**: a partition is three lines of comma-separated decimals
//!   (1-based row offsets, 1-based column indices, nonzero values),
//!   validated into a [`sparse::CsrMatrix`].
//! - **Accumulate**: each worker reduces its partition to a
//!   [`stats::PartialMoments`] record and tags it with a deterministic
//!   sequence key for auditing.
//! - **Combine**: partial records merge pairwise in any order or tree
//!   shape; the merge is associative and commutative, so the result does
//!   not depend on how the input was partitioned.
//! - **Finalize**: one fully-merged record yields the per-feature
//!   [`stats::MomentsReport`].
//!
//! Rows' unlisted columns count as exact zeros: they leave sums untouched
//! and pull per-feature extrema toward zero.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use momentr::prelude::*;
//!
//! let source = DirectorySource::new("data");
//! let partitions = vec!["part-0.csv".to_string(), "part-1.csv".to_string()];
//!
//! let report = run_job(&source, &partitions, WorkerIdentity::single())?;
//! println!("mean of feature 0: {}", report.feature(0).mean);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): process partitions on multiple threads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod partition;
pub mod sparse;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::partition::{
        run_job, DirectorySource, MergePoint, PartialSink, PartitionSource, WorkerIdentity,
        MERGE_KEY,
    };
    pub use crate::sparse::{decode_partition, CsrMatrix};
    pub use crate::stats::{
        merge_all, FeatureMoments, MomentsReport, PartialMoments, TaggedPartial,
    };
}
