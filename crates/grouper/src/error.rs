//! Error types for grouping operations

use thiserror::Error;

/// Result type for grouping operations
pub type GrouperResult<T> = Result<T, GrouperError>;

/// Grouping-related errors.
///
/// The algorithm itself is total; errors only arise from malformed caller
/// input. Propagating a wrong grouping into a stateful runtime is worse than
/// stopping deployment, so validation fails fast.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrouperError {
    /// A previous-grouping task name does not follow the derived convention
    #[error("previous grouping task name '{name}' does not match the \"Partition N\" convention")]
    UnrecognizedTaskName {
        /// The offending task name
        name: String,
    },
}
