use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::key::{SystemStreamPartition, TaskName};

/// Coordinator-supplied snapshot of the last successful deployment.
///
/// Loaded by the job coordinator from whatever mechanism persists the
/// previous assignment, and treated as immutable for the duration of one
/// grouping call. Absent (empty) on first deployment.
///
/// Grouping only consumes [`GrouperMetadata::previous_grouping`]; the
/// locality fields are carried for the coordinator's container placement and
/// are not consulted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrouperMetadata {
    /// Previous task to its ordered partition assignment. Order is retained
    /// for compatibility with stored groupings; only membership and counts
    /// carry meaning for grouping.
    previous_task_to_partitions: HashMap<TaskName, Vec<SystemStreamPartition>>,
    /// Processor id to the host it last ran on
    processor_locality: HashMap<String, String>,
    /// Previous task to the processor that owned it
    previous_task_to_processor: HashMap<TaskName, String>,
}

impl GrouperMetadata {
    /// Create metadata from all coordinator-held fields
    pub fn new(
        previous_task_to_partitions: HashMap<TaskName, Vec<SystemStreamPartition>>,
        processor_locality: HashMap<String, String>,
        previous_task_to_processor: HashMap<TaskName, String>,
    ) -> Self {
        Self {
            previous_task_to_partitions,
            processor_locality,
            previous_task_to_processor,
        }
    }

    /// Metadata for a first deployment, with no history
    pub fn empty() -> Self {
        Self::default()
    }

    /// Metadata carrying only a previous grouping
    pub fn with_previous_grouping(
        previous_task_to_partitions: HashMap<TaskName, Vec<SystemStreamPartition>>,
    ) -> Self {
        Self {
            previous_task_to_partitions,
            ..Self::default()
        }
    }

    /// The previous deployment's task-to-partition assignment
    pub fn previous_grouping(&self) -> &HashMap<TaskName, Vec<SystemStreamPartition>> {
        &self.previous_task_to_partitions
    }

    /// Host locality of processors from the previous deployment
    pub fn processor_locality(&self) -> &HashMap<String, String> {
        &self.processor_locality
    }

    /// Processor ownership of tasks from the previous deployment
    pub fn previous_task_to_processor(&self) -> &HashMap<TaskName, String> {
        &self.previous_task_to_processor
    }
}
