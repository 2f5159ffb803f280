//! One finished tracked interval for one member.

use std::sync::atomic::{AtomicU64, Ordering};

/// Serialized form: `[member_id, start, end, comment]`.
pub type RangeData = (String, i64, i64, String);

static NEXT_RANGE_ID: AtomicU64 = AtomicU64::new(1);

/// A completed, bounded interval of tracked time.
///
/// `range_id` is a process-local counter used only as an ephemeral UI/session
/// key. It is never serialized; persisted identity is position/content within
/// the owning collection.
#[derive(Debug, Clone)]
pub struct Range {
    member_id: String,
    pub start: i64,
    pub end: i64,
    pub comment: String,
    range_id: u64,
}

impl Range {
    pub fn new(member_id: impl Into<String>, start: i64, end: i64, comment: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            start,
            end,
            comment: comment.into(),
            range_id: NEXT_RANGE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn range_id(&self) -> u64 {
        self.range_id
    }

    /// Tracked seconds in this interval.
    pub fn diff(&self) -> i64 {
        self.end - self.start
    }

    pub fn serialize(&self) -> RangeData {
        (
            self.member_id.clone(),
            self.start,
            self.end,
            self.comment.clone(),
        )
    }

    /// Rebuild from a stored tuple; the reconstructed range gets a fresh id.
    pub fn from_data(data: RangeData) -> Self {
        Self::new(data.0, data.1, data.2, data.3)
    }
}
