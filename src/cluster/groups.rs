use std::hash::Hash;

use ahash::AHashMap;
use log::{debug, log_enabled, trace, Level};

use crate::error::{Error, Result};
use crate::types::StringRecord;

/// One cluster: a label and the names of every record assigned that label,
/// in ascending row order. The names borrow from the input records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGroup<'a, L> {
    pub label: L,
    pub names: Vec<&'a str>,
}

/// The full grouping produced by [`cluster_groups`], one group per distinct
/// label, ordered by the label's first occurrence in the label sequence.
/// Every group holds at least one name, since labels are drawn directly from
/// the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGroups<'a, L> {
    groups: Vec<ClusterGroup<'a, L>>,
}

impl<'a, L> ClusterGroups<'a, L> {
    /// Number of groups, i.e. the number of distinct labels seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClusterGroup<'a, L>> {
        self.groups.iter()
    }

    /// Per-group name counts, in group order.
    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.names.len()).collect()
    }

    /// Drops the labels, keeping only the name groups in group order.
    pub fn into_name_groups(self) -> Vec<Vec<&'a str>> {
        self.groups.into_iter().map(|g| g.names).collect()
    }
}

impl<'a, L: PartialEq> ClusterGroups<'a, L> {
    /// The group carrying `label`, if any record was assigned it.
    pub fn find(&self, label: &L) -> Option<&ClusterGroup<'a, L>> {
        self.groups.iter().find(|g| g.label == *label)
    }

    /// Splits off the group whose label is the noise sentinel (e.g. `-1`
    /// from a DBSCAN-style clusterer). The remaining groups keep their
    /// relative order.
    pub fn split_noise(self, noise: &L) -> (Self, Option<ClusterGroup<'a, L>>) {
        let mut noise_group = None;
        let mut kept = Vec::with_capacity(self.groups.len());

        for group in self.groups {
            if group.label == *noise {
                noise_group = Some(group);
            } else {
                kept.push(group);
            }
        }

        (Self { groups: kept }, noise_group)
    }
}

impl<'a, L> IntoIterator for ClusterGroups<'a, L> {
    type Item = ClusterGroup<'a, L>;
    type IntoIter = std::vec::IntoIter<ClusterGroup<'a, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups records into clusters according to their labels, keeping the label
/// on each group.
///
/// `labels[i]` names the cluster assignment of `records[i]`; the two slices
/// must be the same length or the call fails with
/// [`Error::LabelAlignment`] before doing any work. Empty input yields an
/// empty grouping.
///
/// Ordering policy: groups appear in first-occurrence order of their label,
/// and names within a group in ascending row order. Both follow only from
/// the input order, so results are reproducible across runs and platforms.
pub fn cluster_groups<'a, L>(records: &'a [StringRecord], labels: &[L]) -> Result<ClusterGroups<'a, L>>
where
    L: Eq + Hash + Clone,
{
    if records.len() != labels.len() {
        return Err(Error::alignment(records.len(), labels.len()));
    }

    debug!("Grouping {} records by cluster label", records.len());

    // Map each label to its group slot, slots assigned in first-occurrence
    // order so the output never depends on hash iteration order.
    let mut slots: AHashMap<L, usize> = AHashMap::new();
    let mut groups: Vec<ClusterGroup<'a, L>> = Vec::new();

    // Records and labels are aligned by position; a single zipped pass keeps
    // them that way.
    for (record, label) in records.iter().zip(labels) {
        let slot = *slots.entry(label.clone()).or_insert_with(|| {
            groups.push(ClusterGroup {
                label: label.clone(),
                names: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].names.push(record.name.as_str());
    }

    if log_enabled!(Level::Trace) {
        for (i, group) in groups.iter().enumerate() {
            trace!("Cluster #{}: {} names", i, group.names.len());
        }
    }

    debug!(
        "Built {} cluster groups from {} records",
        groups.len(),
        records.len()
    );

    Ok(ClusterGroups { groups })
}

/// Groups record names into clusters according to their labels.
///
/// The minimal form of [`cluster_groups`]: same alignment check, same
/// ordering policy, but each group is just the sequence of names. Every
/// record's name lands in exactly one group and duplicates are preserved.
pub fn group_by_label<'a, L>(records: &'a [StringRecord], labels: &[L]) -> Result<Vec<Vec<&'a str>>>
where
    L: Eq + Hash + Clone,
{
    Ok(cluster_groups(records, labels)?.into_name_groups())
}
