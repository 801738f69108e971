//! Partition byte retrieval and partial record emission

use std::io;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{Error, Result};
use crate::stats::{PartialMoments, TaggedPartial};

/// Merge key shared by every partial record
///
/// All records of a job target the single merge point, so the key is a
/// constant.
pub const MERGE_KEY: u32 = 0;

/// Read raw bytes for a named partition
pub trait PartitionSource {
    /// Fetch the partition's content
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartitionNotFound`] when no partition of that name
    /// exists at the source.
    fn read_partition(&self, name: &str) -> Result<Vec<u8>>;
}

/// Partition source backed by a directory of partition files
///
/// Each partition name resolves to a file directly under the root
/// directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Source reading partitions as files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PartitionSource for DirectorySource {
    fn read_partition(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::PartitionNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Accept tagged partial records bound for one merge point
pub trait PartialSink {
    /// Emit one tagged record under `merge_key`
    fn emit_partial(&self, merge_key: u32, tagged: TaggedPartial) -> Result<()>;
}

/// The single merge point of a job
///
/// Combines records sequentially as they arrive. The accumulator is behind
/// a lock so concurrent workers may emit directly; since the combine
/// operation is associative and commutative, arrival order does not affect
/// the merged result.
#[derive(Debug, Default)]
pub struct MergePoint {
    merged: Mutex<Option<PartialMoments>>,
}

impl MergePoint {
    /// Empty merge point
    pub fn new() -> Self {
        Self::default()
    }

    /// The fully-merged record, or `None` if nothing was emitted
    pub fn into_merged(self) -> Option<PartialMoments> {
        self.merged.into_inner()
    }
}

impl PartialSink for MergePoint {
    fn emit_partial(&self, merge_key: u32, tagged: TaggedPartial) -> Result<()> {
        trace!(
            merge_key,
            tag = tagged.sequence_tag,
            observations = tagged.record.observation_count(),
            "partial record arrived"
        );
        let mut merged = self.merged.lock();
        let next = match merged.take() {
            Some(acc) => acc.combine(tagged.record)?,
            None => tagged.record,
        };
        *merged = Some(next);
        Ok(())
    }
}
