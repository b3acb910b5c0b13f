use std::collections::HashSet;

use tracing::{debug, info};
use tributary_config::{JobConfig, StorageConfig};

use crate::SspGrouper;
use crate::error::{GrouperError, GrouperResult};
use crate::key::{Grouping, PartitionId, SystemStream, SystemStreamPartition, TaskName};
use crate::metadata::GrouperMetadata;

/// Locality-preserving wrapper around a literal grouper.
///
/// For stateless jobs the literal grouping is always correct and maximizes
/// parallelism, so it is returned unchanged. For stateful jobs, partitions
/// that appeared since the last deployment through stream expansion are
/// folded back onto the task that owned their `p mod R` predecessor, where
/// `R` is the previous deployment's task count. Streams with no history are
/// grouped literally; they have no state to preserve, and folding them would
/// gratuitously reduce parallelism.
pub struct GrouperProxy {
    grouper: Box<dyn SspGrouper + Send + Sync>,
    stateful: bool,
}

impl GrouperProxy {
    /// Create a proxy delegating to `grouper`, deriving statefulness from
    /// the job's store declarations
    pub fn new(config: &JobConfig, grouper: Box<dyn SspGrouper + Send + Sync>) -> Self {
        let stateful = StorageConfig::new(config).has_durable_stores();
        Self { grouper, stateful }
    }

    /// Whether the job declares any state store
    pub fn is_stateful(&self) -> bool {
        self.stateful
    }

    /// Assign every partition in `ssps` to a task, consulting the previous
    /// grouping in `metadata` when the job is stateful.
    ///
    /// Fails fast if a previous-grouping task name does not follow the
    /// `"Partition N"` convention; a wrong grouping reaching the stateful
    /// runtime is worse than a stopped deployment.
    pub fn group(
        &self,
        ssps: &HashSet<SystemStreamPartition>,
        metadata: &GrouperMetadata,
    ) -> GrouperResult<Grouping> {
        let literal = self.grouper.group(ssps);

        if !self.stateful {
            debug!(
                "job is stateless; keeping the literal grouping of {} tasks",
                literal.len()
            );
            return Ok(literal);
        }

        let previous = metadata.previous_grouping();
        if previous.is_empty() {
            info!(
                "no previous grouping; keeping the literal grouping of {} tasks",
                literal.len()
            );
            return Ok(literal);
        }

        for task in previous.keys() {
            if task.partition_index().is_none() {
                return Err(GrouperError::UnrecognizedTaskName {
                    name: task.as_str().to_string(),
                });
            }
        }

        let reference_task_count = previous.len() as u32;
        let prior_streams: HashSet<&SystemStream> = previous
            .values()
            .flatten()
            .map(|ssp| &ssp.system_stream)
            .collect();

        let mut grouping = Grouping::new();
        let mut folded = 0usize;
        for (task, task_ssps) in literal {
            for ssp in task_ssps {
                let target = if prior_streams.contains(&ssp.system_stream)
                    && ssp.partition.0 >= reference_task_count
                {
                    // Expansion artifact of a previously known stream: keep
                    // it on the task that owned its pre-expansion state.
                    let target = TaskName::for_partition(PartitionId(
                        ssp.partition.0 % reference_task_count,
                    ));
                    debug!("folding {} from {} onto {}", ssp, task, target);
                    folded += 1;
                    target
                } else {
                    task.clone()
                };
                grouping.entry(target).or_default().insert(ssp);
            }
        }

        info!(
            "grouped {} partitions into {} tasks ({} folded against {} previous tasks over {} streams)",
            ssps.len(),
            grouping.len(),
            folded,
            reference_task_count,
            prior_streams.len()
        );

        Ok(grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use maplit::{hashmap, hashset};
    use tracing_test::traced_test;

    use crate::GroupByPartition;

    fn proxy(stateful: bool) -> GrouperProxy {
        let config: JobConfig = if stateful {
            [("stores.test-store.factory", "rocksdb")].into_iter().collect()
        } else {
            JobConfig::default()
        };
        GrouperProxy::new(&config, Box::new(GroupByPartition::new()))
    }

    fn pve(partition: u32) -> SystemStreamPartition {
        SystemStreamPartition::new("kafka", "PVE", partition)
    }

    #[test]
    fn test_statefulness_derived_from_store_declarations() {
        assert!(proxy(true).is_stateful());
        assert!(!proxy(false).is_stateful());
    }

    #[test]
    fn test_malformed_previous_task_name_fails_fast() {
        let metadata = GrouperMetadata::with_previous_grouping(hashmap! {
            TaskName::new("Partition 0") => vec![pve(0)],
            TaskName::new("custom-task") => vec![pve(1)],
        });

        let result = proxy(true).group(&hashset! { pve(0), pve(1) }, &metadata);
        assert_matches!(
            result,
            Err(GrouperError::UnrecognizedTaskName { name }) if name == "custom-task"
        );
    }

    #[test]
    fn test_malformed_previous_task_name_ignored_when_stateless() {
        let metadata = GrouperMetadata::with_previous_grouping(hashmap! {
            TaskName::new("custom-task") => vec![pve(0)],
        });

        let grouping = proxy(false)
            .group(&hashset! { pve(0) }, &metadata)
            .unwrap();
        assert_eq!(grouping.len(), 1);
    }

    #[test]
    fn test_shrunk_stream_never_folds() {
        // Previous deployment ran 4 tasks; the stream shrank to 2 partitions
        let metadata = GrouperMetadata::with_previous_grouping(hashmap! {
            TaskName::new("Partition 0") => vec![pve(0)],
            TaskName::new("Partition 1") => vec![pve(1)],
            TaskName::new("Partition 2") => vec![pve(2)],
            TaskName::new("Partition 3") => vec![pve(3)],
        });

        let grouping = proxy(true)
            .group(&hashset! { pve(0), pve(1) }, &metadata)
            .unwrap();

        assert_eq!(
            grouping,
            hashmap! {
                TaskName::new("Partition 0") => hashset! { pve(0) },
                TaskName::new("Partition 1") => hashset! { pve(1) },
            }
        );
    }

    #[traced_test]
    #[test]
    fn test_fold_decisions_are_logged() {
        let metadata = GrouperMetadata::with_previous_grouping(hashmap! {
            TaskName::new("Partition 0") => vec![pve(0)],
            TaskName::new("Partition 1") => vec![pve(1)],
        });

        proxy(true)
            .group(&hashset! { pve(0), pve(1), pve(2), pve(3) }, &metadata)
            .unwrap();

        assert!(logs_contain("folding kafka.PVE.2"));
        assert!(logs_contain("folding kafka.PVE.3"));
    }
}
