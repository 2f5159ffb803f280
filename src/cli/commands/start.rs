use crate::cli::commands::resolve_member;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TrackedCard;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Start a timer on a card; any timer the member already has on the card is
/// replaced, never duplicated.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { card, member, list } = cmd {
        let member = resolve_member(member.as_ref(), cfg)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut tracked = TrackedCard::new(&mut store, card.clone());
        tracked.start_tracking(&member, list, date::now())?;

        success(format!("Tracking started on '{card}' for '{member}'"));
    }
    Ok(())
}
