//! Partition collaborator seams and the worker pipeline
//!
//! The engine consumes two primitives from the surrounding batch framework:
//! reading the bytes of a named partition ([`PartitionSource`]) and emitting
//! a tagged partial record to a single downstream merge point
//! ([`PartialSink`]). [`DirectorySource`] and [`MergePoint`] are the
//! in-process implementations of those seams, [`WorkerIdentity`] assigns
//! the deterministic sequence tags, and [`run_job`] wires the whole flow:
//! decode, accumulate, tag, merge, finalize.
//!
//! Workers share no mutable state; each owns its partition bytes
//! exclusively. All partial records converge on one merge point, which
//! combines them as they arrive. Arrival order is irrelevant to the result.

mod pipeline;
mod source;
mod tagger;

pub use pipeline::{process_partition, run_job};
pub use source::{DirectorySource, MergePoint, PartialSink, PartitionSource, MERGE_KEY};
pub use tagger::WorkerIdentity;
