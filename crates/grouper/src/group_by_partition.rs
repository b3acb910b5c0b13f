use std::collections::HashSet;

use crate::SspGrouper;
use crate::key::{Grouping, SystemStreamPartition, TaskName};

/// Literal grouping by partition number.
///
/// Every partition with index `p` is assigned to task `"Partition p"`,
/// regardless of which stream it belongs to. Partitions of different streams
/// sharing an index are colocated on the same task, which is what lets a
/// stateful job join co-partitioned streams by partition number.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByPartition;

impl GroupByPartition {
    /// Create a new literal grouper
    pub fn new() -> Self {
        Self
    }
}

impl SspGrouper for GroupByPartition {
    fn group(&self, ssps: &HashSet<SystemStreamPartition>) -> Grouping {
        let mut grouping = Grouping::new();
        for ssp in ssps {
            grouping
                .entry(TaskName::for_partition(ssp.partition))
                .or_default()
                .insert(ssp.clone());
        }
        grouping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashset;

    use crate::key::PartitionId;

    #[test]
    fn test_one_task_per_partition_index() {
        let ssps = hashset! {
            SystemStreamPartition::new("kafka", "PVE", 0),
            SystemStreamPartition::new("kafka", "PVE", 1),
            SystemStreamPartition::new("kafka", "PVE", 2),
        };

        let grouping = GroupByPartition::new().group(&ssps);

        assert_eq!(grouping.len(), 3);
        for ssp in &ssps {
            let task = TaskName::for_partition(ssp.partition);
            assert_eq!(grouping[&task], hashset! { ssp.clone() });
        }
    }

    #[test]
    fn test_streams_sharing_an_index_are_colocated() {
        let ssps = hashset! {
            SystemStreamPartition::new("kafka", "PVE", 0),
            SystemStreamPartition::new("kafka", "URE", 0),
            SystemStreamPartition::new("kinesis", "BOB", 0),
            SystemStreamPartition::new("kafka", "PVE", 1),
        };

        let grouping = GroupByPartition::new().group(&ssps);

        assert_eq!(grouping.len(), 2);
        assert_eq!(
            grouping[&TaskName::for_partition(PartitionId(0))].len(),
            3
        );
        assert_eq!(
            grouping[&TaskName::for_partition(PartitionId(1))].len(),
            1
        );
    }

    #[test]
    fn test_empty_input() {
        let grouping = GroupByPartition::new().group(&HashSet::new());
        assert!(grouping.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let ssps = hashset! {
            SystemStreamPartition::new("kafka", "PVE", 0),
            SystemStreamPartition::new("kafka", "URE", 3),
            SystemStreamPartition::new("kafka", "URE", 5),
        };

        let grouper = GroupByPartition::new();
        assert_eq!(grouper.group(&ssps), grouper.group(&ssps));
    }
}
