//! Running tracking sessions for one card.

use crate::errors::AppResult;
use crate::models::timer::{Timer, TimerData};
use crate::store::{CardStore, RUNNING_KEY, Scope};

/// All in-progress sessions of one card. `start_by_member` is the enforcement
/// point for the at-most-one-timer-per-member invariant.
#[derive(Debug, Clone)]
pub struct Timers {
    card_id: String,
    items: Vec<Timer>,
}

impl Timers {
    pub fn new(card_id: impl Into<String>, items: Vec<Timer>) -> Self {
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

    pub fn items(&self) -> &[Timer] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, member_id: &str, list_id: &str, start: i64) {
        self.items.push(Timer::new(member_id, list_id, start));
    }

    /// Replace any running timer for the member with a fresh one at `now`.
    pub fn start_by_member(&mut self, member_id: &str, list_id: &str, now: i64) {
        self.items.retain(|item| item.member_id() != member_id);
        self.add(member_id, list_id, now);
    }

    pub fn remove_by_member(&mut self, member_id: &str) {
        self.items.retain(|item| item.member_id() != member_id);
    }

    pub fn get_by_member(&self, member_id: &str) -> Option<&Timer> {
        self.items
            .iter()
            .filter(|item| item.member_id() == member_id)
            .next_back()
    }

    pub fn serialize(&self) -> Vec<TimerData> {
        self.items.iter().map(Timer::serialize).collect()
    }

    pub fn unserialize(card_id: impl Into<String>, data: Vec<TimerData>) -> Timers {
        Timers::new(card_id, data.into_iter().map(Timer::from_data).collect())
    }

    pub fn load(store: &dyn CardStore, card_id: &str) -> AppResult<Timers> {
        let data = match store.get(card_id, Scope::Shared, RUNNING_KEY)? {
            Some(value) => serde_json::from_value::<Vec<TimerData>>(value)?,
            None => Vec::new(),
        };
        Ok(Timers::unserialize(card_id, data))
    }

    pub fn save(&self, store: &mut dyn CardStore) -> AppResult<()> {
        let value = serde_json::to_value(self.serialize())?;
        store.set(&self.card_id, Scope::Shared, RUNNING_KEY, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_by_member_replaces_rather_than_duplicates() {
        let mut timers = Timers::empty("c1");
        timers.start_by_member("m1", "l1", 1000);
        timers.start_by_member("m1", "l2", 2000);

        assert_eq!(timers.items().len(), 1);
        let timer = timers.get_by_member("m1").unwrap();
        assert_eq!(timer.start, 2000);
        assert_eq!(timer.list_id(), "l2");
    }

    #[test]
    fn timers_for_other_members_are_untouched() {
        let mut timers = Timers::empty("c1");
        timers.start_by_member("m1", "l1", 1000);
        timers.start_by_member("m2", "l1", 1100);
        timers.start_by_member("m1", "l1", 1200);

        assert_eq!(timers.items().len(), 2);
        assert_eq!(timers.get_by_member("m2").unwrap().start, 1100);
    }

    #[test]
    fn remove_by_member_is_a_noop_for_unknown_members() {
        let mut timers = Timers::empty("c1");
        timers.start_by_member("m1", "l1", 1000);
        timers.remove_by_member("m2");

        assert_eq!(timers.items().len(), 1);
    }

    #[test]
    fn serialize_round_trip_preserves_fields() {
        let mut timers = Timers::empty("c1");
        timers.add("m1", "l1", 1000);
        timers.add("m2", "l2", 1100);

        let rebuilt = Timers::unserialize("c1", timers.serialize());
        assert_eq!(rebuilt.items().len(), 2);
        assert_eq!(rebuilt.items()[1].member_id(), "m2");
        assert_eq!(rebuilt.items()[1].list_id(), "l2");
        assert_eq!(rebuilt.items()[1].start, 1100);
    }
}
