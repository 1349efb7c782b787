//! Space layout command

use crate::core::{Index, Space};

/// One length bucket of the space
pub struct BucketRow {
    pub length: usize,
    pub offset: Index,
    pub count: Index,
}

/// Layout of every length bucket plus the total
pub struct SpaceSummary {
    pub buckets: Vec<BucketRow>,
    pub total: Index,
}

#[must_use]
pub fn summarize_space() -> SpaceSummary {
    let space = Space::global();
    let buckets = Space::lengths()
        .map(|length| BucketRow {
            length,
            offset: space.offset(length).clone(),
            count: space.count(length).clone(),
        })
        .collect();

    SpaceSummary {
        buckets,
        total: space.total().clone(),
    }
}
