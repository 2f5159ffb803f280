//! Per-member effort estimate.

/// Serialized form: `[member_id, seconds]`.
pub type EstimateData = (String, i64);

#[derive(Debug, Clone)]
pub struct Estimate {
    member_id: String,
    pub seconds: i64,
}

impl Estimate {
    pub fn new(member_id: impl Into<String>, seconds: i64) -> Self {
        Self {
            member_id: member_id.into(),
            seconds,
        }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn serialize(&self) -> EstimateData {
        (self.member_id.clone(), self.seconds)
    }

    pub fn from_data(data: EstimateData) -> Self {
        Self::new(data.0, data.1)
    }
}
