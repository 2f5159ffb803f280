//! Ordered collection of time ranges scoped to one card.

use crate::errors::AppResult;
use crate::models::range::{Range, RangeData};
use crate::store::{CardStore, RANGES_KEY, Scope};

/// All finished ranges of one card, in insertion order (display order, not
/// time order).
///
/// Operations that "modify" the collection return a new `Ranges` over a new
/// item list; the store only ever sees whole-collection writes.
#[derive(Debug, Clone)]
pub struct Ranges {
    card_id: String,
    items: Vec<Range>,
}

impl Ranges {
    pub fn new(card_id: impl Into<String>, items: Vec<Range>) -> Self {
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

    pub fn items(&self) -> &[Range] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total tracked seconds across all items.
    pub fn time_spent(&self) -> i64 {
        self.items.iter().map(Range::diff).sum()
    }

    /// New collection with `range` appended.
    pub fn added(&self, range: Range) -> Ranges {
        let mut items = self.items.clone();
        items.push(range);
        Ranges::new(self.card_id.clone(), items)
    }

    /// New collection holding only ranges tracked by the given members.
    pub fn filtered_by_members(&self, member_ids: &[String]) -> Ranges {
        let items = self
            .items
            .iter()
            .filter(|item| member_ids.iter().any(|id| id == item.member_id()))
            .cloned()
            .collect();
        Ranges::new(self.card_id.clone(), items)
    }

    /// New collection with the item at `index` removed; `None` when the index
    /// is outside the current snapshot.
    pub fn without_index(&self, index: usize) -> Option<Ranges> {
        if index >= self.items.len() {
            return None;
        }
        let mut items = self.items.clone();
        items.remove(index);
        Some(Ranges::new(self.card_id.clone(), items))
    }

    /// New collection with the item at `index` rewritten.
    pub fn with_updated(
        &self,
        index: usize,
        start: Option<i64>,
        end: Option<i64>,
        comment: Option<String>,
    ) -> Option<Ranges> {
        if index >= self.items.len() {
            return None;
        }
        let mut items = self.items.clone();
        let item = &mut items[index];
        if let Some(start) = start {
            item.start = start;
        }
        if let Some(end) = end {
            item.end = end;
        }
        if let Some(comment) = comment {
            item.comment = comment;
        }
        Some(Ranges::new(self.card_id.clone(), items))
    }

    pub fn serialize(&self) -> Vec<RangeData> {
        self.items.iter().map(Range::serialize).collect()
    }

    pub fn unserialize(card_id: impl Into<String>, data: Vec<RangeData>) -> Ranges {
        Ranges::new(card_id, data.into_iter().map(Range::from_data).collect())
    }

    /// Read the card's stored ranges; an absent key is an empty collection.
    pub fn load(store: &dyn CardStore, card_id: &str) -> AppResult<Ranges> {
        let data = match store.get(card_id, Scope::Shared, RANGES_KEY)? {
            Some(value) => serde_json::from_value::<Vec<RangeData>>(value)?,
            None => Vec::new(),
        };
        Ok(Ranges::unserialize(card_id, data))
    }

    pub fn save(&self, store: &mut dyn CardStore) -> AppResult<()> {
        let value = serde_json::to_value(self.serialize())?;
        store.set(&self.card_id, Scope::Shared, RANGES_KEY, value)
    }
}
