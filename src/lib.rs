//! majmua is the cluster post-processing stage of a string-matching pipeline.
//! It takes the strings that went into a clustering run together with the
//! per-string labels the clusterer produced, and partitions the strings into
//! their clusters with a deterministic, reproducible ordering.

// Module declarations
pub mod cluster;
pub mod error;
pub mod types;

// Re-exports
pub use cluster::{cluster_groups, group_by_label, ClusterGroup, ClusterGroups};
pub use error::{Error, Result};
pub use types::StringRecord;
