use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TrackedCard;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

/// Remove a card's ranges and running-timer entries from the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { card } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut tracked = TrackedCard::new(&mut store, card.clone());

        tracked.clear()?;
        success(format!("Tracked time on '{card}' cleared"));
    }
    Ok(())
}
