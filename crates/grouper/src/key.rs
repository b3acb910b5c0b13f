use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every derived task name
pub const TASK_NAME_PREFIX: &str = "Partition ";

/// Index of one partition within a stream
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PartitionId(pub u32);

impl PartitionId {
    /// Create a new partition id
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw partition index
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PartitionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one stream within one messaging system
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemStream {
    /// Name of the messaging system the stream lives in
    pub system: String,
    /// Name of the stream
    pub stream: String,
}

impl SystemStream {
    /// Create a new system/stream pair
    pub fn new(system: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            stream: stream.into(),
        }
    }
}

impl fmt::Display for SystemStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.system, self.stream)
    }
}

/// One partition of one stream, the unit of parallel consumption
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemStreamPartition {
    /// The stream this partition belongs to
    pub system_stream: SystemStream,
    /// The partition index within the stream
    pub partition: PartitionId,
}

impl SystemStreamPartition {
    /// Create a new stream partition key
    pub fn new(
        system: impl Into<String>,
        stream: impl Into<String>,
        partition: impl Into<PartitionId>,
    ) -> Self {
        Self {
            system_stream: SystemStream::new(system, stream),
            partition: partition.into(),
        }
    }
}

impl fmt::Display for SystemStreamPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.system_stream, self.partition)
    }
}

/// Name of a logical processing unit.
///
/// Task names are always derived as `"Partition N"`; they are never
/// arbitrary labels. Previous groupings loaded from external storage are
/// validated against this convention before being trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskName(String);

impl TaskName {
    /// Wrap a raw task name, e.g. one loaded from a stored grouping
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The canonical task name owning a partition index
    pub fn for_partition(partition: PartitionId) -> Self {
        Self(format!("{TASK_NAME_PREFIX}{partition}"))
    }

    /// Parse the partition index back out of a canonical task name
    pub fn partition_index(&self) -> Option<PartitionId> {
        self.0
            .strip_prefix(TASK_NAME_PREFIX)?
            .parse()
            .ok()
            .map(PartitionId)
    }

    /// The task name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A partitioning of stream partitions across tasks
pub type Grouping = HashMap<TaskName, HashSet<SystemStreamPartition>>;
