//! The in-process partition pipeline

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::sparse::decode_partition;
use crate::stats::{MomentsReport, PartialMoments, TaggedPartial};

use super::source::{MergePoint, PartialSink, PartitionSource, MERGE_KEY};
use super::tagger::WorkerIdentity;

/// Decode one partition and compute its partial statistics record
///
/// # Errors
///
/// Propagates source and decode errors. Such a failure is fatal to this
/// partition only; no partial record is produced for it.
pub fn process_partition<S: PartitionSource>(source: &S, name: &str) -> Result<PartialMoments> {
    let bytes = source.read_partition(name)?;
    let matrix = decode_partition(&bytes)?;
    debug!(
        partition = name,
        rows = matrix.num_rows(),
        features = matrix.num_features(),
        nnz = matrix.nnz(),
        "decoded partition"
    );
    Ok(PartialMoments::from_csr(&matrix))
}

/// Run a whole job over the named partitions and finalize the result
///
/// Each partition is processed by exactly one worker: decoded, reduced to a
/// partial record, tagged with `identity.sequence_tag(k)` for its position
/// `k` in this worker's sequence, and emitted to the single merge point.
/// With the `rayon` feature (default) partitions are processed on multiple
/// threads; workers share no mutable state beyond the merge point's
/// accumulator.
///
/// # Errors
///
/// The first failing partition aborts the job with its error, as does a
/// dimension mismatch at the merge point. A job over zero partitions (or
/// zero observations) fails with [`Error::EmptyDataset`].
///
/// [`Error::EmptyDataset`]: crate::error::Error::EmptyDataset
pub fn run_job<S, P>(
    source: &S,
    partitions: &[P],
    identity: WorkerIdentity,
) -> Result<MomentsReport>
where
    S: PartitionSource + Sync,
    P: AsRef<str> + Sync,
{
    let merge = MergePoint::new();

    let process = |occurrence: usize, name: &str| -> Result<()> {
        let record = process_partition(source, name).map_err(|err| {
            warn!(partition = name, %err, "partition failed");
            err
        })?;
        let tagged = TaggedPartial {
            sequence_tag: identity.sequence_tag(occurrence as u64),
            record,
        };
        merge.emit_partial(MERGE_KEY, tagged)
    };

    #[cfg(feature = "rayon")]
    partitions
        .par_iter()
        .enumerate()
        .try_for_each(|(k, name)| process(k, name.as_ref()))?;

    #[cfg(not(feature = "rayon"))]
    partitions
        .iter()
        .enumerate()
        .try_for_each(|(k, name)| process(k, name.as_ref()))?;

    let merged = merge
        .into_merged()
        .unwrap_or_else(|| PartialMoments::identity(0));
    info!(
        partitions = partitions.len(),
        observations = merged.observation_count(),
        "job merged"
    );
    merged.finalize()
}
