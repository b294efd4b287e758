// cluster/mod.rs
pub mod groups;

// Re-export the main API at the module root
pub use self::groups::{cluster_groups, group_by_label, ClusterGroup, ClusterGroups};
