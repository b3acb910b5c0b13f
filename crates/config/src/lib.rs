//! Job configuration for Tributary
//!
//! This crate provides:
//! - The flat string-keyed job configuration (`JobConfig`)
//! - Typed views over well-known key families (`StorageConfig`)

pub mod job;
pub mod storage;

pub use job::JobConfig;
pub use storage::StorageConfig;
