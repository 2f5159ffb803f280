//! Lifecycle operations on one card's tracked time.

use crate::errors::{AppError, AppResult};
use crate::models::estimates::Estimates;
use crate::models::range::Range;
use crate::models::ranges::Ranges;
use crate::models::timers::Timers;
use crate::store::{CardStore, ESTIMATES_KEY, RANGES_KEY, RUNNING_KEY, Scope};

/// One card bound to a store. Every operation is read-modify-write over the
/// card's stored collections; there is no cross-key transaction, so the write
/// order inside each operation is part of the contract.
pub struct TrackedCard<'a> {
    store: &'a mut dyn CardStore,
    card_id: String,
}

impl<'a> TrackedCard<'a> {
    pub fn new(store: &'a mut dyn CardStore, card_id: impl Into<String>) -> Self {
        Self {
            store,
            card_id: card_id.into(),
        }
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn ranges(&self) -> AppResult<Ranges> {
        Ranges::load(self.store, &self.card_id)
    }

    pub fn timers(&self) -> AppResult<Timers> {
        Timers::load(self.store, &self.card_id)
    }

    pub fn estimates(&self) -> AppResult<Estimates> {
        Estimates::load(self.store, &self.card_id)
    }

    /// Total tracked seconds over the card's finished ranges.
    pub fn time_spent(&self) -> AppResult<i64> {
        Ok(self.ranges()?.time_spent())
    }

    pub fn total_estimate(&self) -> AppResult<i64> {
        Ok(self.estimates()?.total_estimate())
    }

    /// Start tracking for a member at `now`, replacing any timer the member
    /// already has on this card.
    pub fn start_tracking(&mut self, member_id: &str, list_id: &str, now: i64) -> AppResult<()> {
        let mut timers = self.timers()?;
        timers.start_by_member(member_id, list_id, now);
        timers.save(self.store)
    }

    /// Stop the member's running timer at `now` and materialize a range.
    ///
    /// Stopping with nothing running is tolerated and returns `Ok(None)`.
    /// The range write lands before the timer removal: a failure in between
    /// leaves a ghost timer to clean up, never a lost range.
    pub fn stop_tracking(&mut self, member_id: &str, now: i64) -> AppResult<Option<Range>> {
        let mut timers = self.timers()?;
        let Some(timer) = timers.get_by_member(member_id) else {
            return Ok(None);
        };

        let range = Range::new(member_id, timer.start, now, "");
        self.ranges()?.added(range.clone()).save(self.store)?;

        timers.remove_by_member(member_id);
        timers.save(self.store)?;

        Ok(Some(range))
    }

    /// Drop the member's running timer without recording a range.
    pub fn discard_tracking(&mut self, member_id: &str) -> AppResult<bool> {
        let mut timers = self.timers()?;
        if timers.get_by_member(member_id).is_none() {
            return Ok(false);
        }

        timers.remove_by_member(member_id);
        timers.save(self.store)?;
        Ok(true)
    }

    /// Append a manually entered range.
    pub fn add_range(
        &mut self,
        member_id: &str,
        start: i64,
        end: i64,
        comment: &str,
    ) -> AppResult<()> {
        self.ranges()?
            .added(Range::new(member_id, start, end, comment))
            .save(self.store)
    }

    /// Rewrite the range at `index` in the current snapshot.
    pub fn update_range(
        &mut self,
        index: usize,
        start: Option<i64>,
        end: Option<i64>,
        comment: Option<String>,
    ) -> AppResult<()> {
        self.ranges()?
            .with_updated(index, start, end, comment)
            .ok_or(AppError::RangeIndex(index))?
            .save(self.store)
    }

    /// Delete the range at `index` in the current snapshot.
    pub fn delete_range(&mut self, index: usize) -> AppResult<()> {
        self.ranges()?
            .without_index(index)
            .ok_or(AppError::RangeIndex(index))?
            .save(self.store)
    }

    pub fn set_estimate(&mut self, member_id: &str, seconds: i64) -> AppResult<()> {
        let mut estimates = self.estimates()?;
        estimates.set_by_member(member_id, seconds);
        estimates.save(self.store)
    }

    pub fn remove_estimate(&mut self, member_id: &str) -> AppResult<bool> {
        let mut estimates = self.estimates()?;
        if estimates.get_by_member(member_id).is_none() {
            return Ok(false);
        }

        estimates.remove_by_member(member_id);
        estimates.save(self.store)?;
        Ok(true)
    }

    /// Remove the card's ranges and running-timer entries entirely (the keys
    /// are deleted, not emptied). Estimates are left in place; they have
    /// their own clear operation.
    pub fn clear(&mut self) -> AppResult<()> {
        self.store.remove(&self.card_id, Scope::Shared, RANGES_KEY)?;
        self.store.remove(&self.card_id, Scope::Shared, RUNNING_KEY)
    }

    pub fn clear_estimates(&mut self) -> AppResult<()> {
        self.store
            .remove(&self.card_id, Scope::Shared, ESTIMATES_KEY)
    }
}
