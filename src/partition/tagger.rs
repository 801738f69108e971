//! Deterministic partition sequence tagging

/// Identity of one worker within the scheduled worker set
///
/// `base_partition_index` is the worker's zero-based index and
/// `partition_stride` is the total number of concurrently scheduled
/// workers, as resolved by the orchestrating collaborator. The k-th
/// partition a worker processes gets the tag `base + k * stride`, so tags
/// are globally unique across workers and reconstruct which original
/// partition produced which record without any shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerIdentity {
    /// Zero-based index of this worker
    pub base_partition_index: u64,
    /// Total number of concurrently scheduled workers
    pub partition_stride: u64,
}

impl WorkerIdentity {
    /// Identity for a single-worker job (base 0, stride 1)
    pub fn single() -> Self {
        Self {
            base_partition_index: 0,
            partition_stride: 1,
        }
    }

    /// Sequence tag of this worker's `occurrence`-th partition
    pub fn sequence_tag(&self, occurrence: u64) -> u64 {
        self.base_partition_index + occurrence * self.partition_stride
    }
}
