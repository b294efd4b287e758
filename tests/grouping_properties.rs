use majmua::{cluster_groups, group_by_label, StringRecord};
use proptest::prelude::*;

fn records(names: &[String]) -> Vec<StringRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| StringRecord::new(i as u64, name.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_every_name_lands_in_exactly_one_group(
        names in prop::collection::vec("[a-z]{1,6}", 0..40),
        seed_labels in prop::collection::vec(-1i64..5, 0..40)
    ) {
        // Align labels with the record count; length mismatch is covered separately.
        let labels: Vec<i64> = (0..names.len())
            .map(|i| seed_labels.get(i % seed_labels.len().max(1)).copied().unwrap_or(0))
            .collect();
        let recs = records(&names);

        let groups = group_by_label(&recs, &labels).unwrap();

        let total: usize = groups.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, recs.len());

        // Multiset of grouped names equals the multiset of input names.
        let mut grouped: Vec<&str> = groups.iter().flatten().copied().collect();
        let mut input: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        grouped.sort_unstable();
        input.sort_unstable();
        prop_assert_eq!(grouped, input);
    }

    #[test]
    fn prop_group_count_matches_distinct_labels(
        names in prop::collection::vec("[a-z]{1,6}", 1..40),
        seed_labels in prop::collection::vec(-1i64..5, 1..40)
    ) {
        let labels: Vec<i64> = (0..names.len())
            .map(|i| seed_labels[i % seed_labels.len()])
            .collect();
        let recs = records(&names);

        let grouping = cluster_groups(&recs, &labels).unwrap();

        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(grouping.len(), distinct.len());

        // No group may come out empty.
        for size in grouping.group_sizes() {
            prop_assert!(size >= 1);
        }
    }

    #[test]
    fn prop_mismatched_lengths_always_fail(
        names in prop::collection::vec("[a-z]{1,6}", 1..20),
        extra in 1usize..5
    ) {
        let labels = vec![0i64; names.len() + extra];
        let recs = records(&names);

        prop_assert!(group_by_label(&recs, &labels).is_err());
    }
}

#[test]
fn record_round_trips_through_json() {
    let record = StringRecord::new(7, "maktaba");
    let json = serde_json::to_string(&record).unwrap();
    let back: StringRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}
