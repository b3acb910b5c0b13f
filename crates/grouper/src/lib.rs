//! Partition-to-task grouping for Tributary jobs
//!
//! This crate decides which task owns which stream partition when a job is
//! deployed. The decision is made once per (re)deployment by the job
//! coordinator and must stay stable across restarts and partition-count
//! changes: a stateful task's local state is only addressable if the same
//! partition keeps landing on the same task.
//!
//! Two cooperating pieces:
//! - [`GroupByPartition`]: the literal grouping, purely from partition
//!   numbers, with no memory of history
//! - [`GrouperProxy`]: wraps a literal grouper and, for stateful jobs, folds
//!   expanded partitions of previously known streams back onto their
//!   historical task

pub mod error;
pub mod group_by_partition;
pub mod key;
pub mod metadata;
pub mod proxy;

pub use error::{GrouperError, GrouperResult};
pub use group_by_partition::GroupByPartition;
pub use key::{Grouping, PartitionId, SystemStream, SystemStreamPartition, TaskName};
pub use metadata::GrouperMetadata;
pub use proxy::GrouperProxy;

use std::collections::HashSet;

/// Strategy interface for assigning stream partitions to tasks.
///
/// Implementations must be pure: the same input set always yields the same
/// grouping, with no side effects. The grouping is a partitioning of the
/// input, never a replication: every input key lands in exactly one task's
/// set, and no task maps to an empty set.
pub trait SspGrouper {
    /// Assign every partition in `ssps` to a task
    fn group(&self, ssps: &HashSet<SystemStreamPartition>) -> Grouping;
}
