use serde::{Deserialize, Serialize};

/// One input string with its identifier from the wider pipeline.
///
/// Records are passed to the grouper as an ordered slice; a record's position
/// in that slice is its row index, which is what the label sequence is
/// aligned against. The `id` is carried for the caller's benefit and plays no
/// part in grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: u64,
    pub name: String,
}

impl StringRecord {
    pub fn new<S: Into<String>>(id: u64, name: S) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
