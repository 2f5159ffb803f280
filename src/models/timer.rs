//! One in-progress tracking session.

/// Serialized form: `[member_id, list_id, start]`.
pub type TimerData = (String, String, i64);

/// An unterminated tracking session for one member. `list_id` captures the
/// list the card was in when tracking started, for later reporting context.
#[derive(Debug, Clone)]
pub struct Timer {
    member_id: String,
    list_id: String,
    pub start: i64,
}

impl Timer {
    pub fn new(member_id: impl Into<String>, list_id: impl Into<String>, start: i64) -> Self {
        Self {
            member_id: member_id.into(),
            list_id: list_id.into(),
            start,
        }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Elapsed seconds at `now`; computed at read time, never stored.
    pub fn time_in_seconds(&self, now: i64) -> i64 {
        now - self.start
    }

    pub fn serialize(&self) -> TimerData {
        (self.member_id.clone(), self.list_id.clone(), self.start)
    }

    pub fn from_data(data: TimerData) -> Self {
        Self::new(data.0, data.1, data.2)
    }
}
