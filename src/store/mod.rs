//! Card-scoped key-value storage capability.
//!
//! The host environment of the original add-on provided scoped plugin-data
//! storage per card; this trait is that contract, injected into the core so
//! it never touches a concrete backend. Writes are all-or-nothing per key
//! with no transaction across keys; concurrent writers are last-write-wins.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use serde_json::Value;

/// Stored tuple array of finished ranges.
pub const RANGES_KEY: &str = "act-timer-ranges";
/// Stored tuple array of running timers.
pub const RUNNING_KEY: &str = "act-timer-running";
/// Stored tuple array of member estimates.
pub const ESTIMATES_KEY: &str = "act-timer-estimates";

/// Visibility scope of a stored entry. All of this crate's keys live in the
/// shared scope; the enum keeps the host contract's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Shared,
    Private,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Shared => "shared",
            Scope::Private => "private",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "shared" => Some(Scope::Shared),
            "private" => Some(Scope::Private),
            _ => None,
        }
    }
}

/// Scoped get/set/remove keyed by `(card, scope, key)`.
///
/// An absent key reads back as `None`; callers map that to their empty
/// default rather than treating it as an error.
pub trait CardStore {
    fn get(&self, card_id: &str, scope: Scope, key: &str) -> AppResult<Option<Value>>;

    fn set(&mut self, card_id: &str, scope: Scope, key: &str, value: Value) -> AppResult<()>;

    fn remove(&mut self, card_id: &str, scope: Scope, key: &str) -> AppResult<()>;
}
