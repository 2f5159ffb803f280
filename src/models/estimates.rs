//! Effort estimates for one card.

use crate::errors::AppResult;
use crate::models::estimate::{Estimate, EstimateData};
use crate::store::{CardStore, ESTIMATES_KEY, Scope};

/// Per-member estimates of one card; one entry per member, `set_by_member`
/// replaces.
#[derive(Debug, Clone)]
pub struct Estimates {
    card_id: String,
    items: Vec<Estimate>,
}

impl Estimates {
    pub fn new(card_id: impl Into<String>, items: Vec<Estimate>) -> Self {
        Self {
            card_id: card_id.into(),
            items,
        }
    }

    pub fn empty(card_id: impl Into<String>) -> Self {
        Self::new(card_id, Vec::new())
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn items(&self) -> &[Estimate] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whole-card estimate in seconds.
    pub fn total_estimate(&self) -> i64 {
        self.items.iter().map(|item| item.seconds).sum()
    }

    pub fn get_by_member(&self, member_id: &str) -> Option<&Estimate> {
        self.items
            .iter()
            .filter(|item| item.member_id() == member_id)
            .next_back()
    }

    pub fn set_by_member(&mut self, member_id: &str, seconds: i64) {
        self.items.retain(|item| item.member_id() != member_id);
        self.items.push(Estimate::new(member_id, seconds));
    }

    pub fn remove_by_member(&mut self, member_id: &str) {
        self.items.retain(|item| item.member_id() != member_id);
    }

    pub fn serialize(&self) -> Vec<EstimateData> {
        self.items.iter().map(Estimate::serialize).collect()
    }

    pub fn unserialize(card_id: impl Into<String>, data: Vec<EstimateData>) -> Estimates {
        Estimates::new(card_id, data.into_iter().map(Estimate::from_data).collect())
    }

    pub fn load(store: &dyn CardStore, card_id: &str) -> AppResult<Estimates> {
        let data = match store.get(card_id, Scope::Shared, ESTIMATES_KEY)? {
            Some(value) => serde_json::from_value::<Vec<EstimateData>>(value)?,
            None => Vec::new(),
        };
        Ok(Estimates::unserialize(card_id, data))
    }

    pub fn save(&self, store: &mut dyn CardStore) -> AppResult<()> {
        let value = serde_json::to_value(self.serialize())?;
        store.set(&self.card_id, Scope::Shared, ESTIMATES_KEY, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_estimate_sums_member_entries() {
        let mut estimates = Estimates::empty("c1");
        estimates.set_by_member("m1", 3600);
        estimates.set_by_member("m2", 1800);

        assert_eq!(estimates.total_estimate(), 5400);
    }

    #[test]
    fn set_by_member_replaces_the_existing_entry() {
        let mut estimates = Estimates::empty("c1");
        estimates.set_by_member("m1", 3600);
        estimates.set_by_member("m1", 7200);

        assert_eq!(estimates.items().len(), 1);
        assert_eq!(estimates.total_estimate(), 7200);
    }

    #[test]
    fn serialize_round_trip_preserves_entries() {
        let mut estimates = Estimates::empty("c1");
        estimates.set_by_member("m1", 600);
        estimates.set_by_member("m2", 900);

        let rebuilt = Estimates::unserialize("c1", estimates.serialize());
        assert_eq!(rebuilt.total_estimate(), 1500);
        assert_eq!(rebuilt.get_by_member("m2").unwrap().seconds, 900);
    }
}
