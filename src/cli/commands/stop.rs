use crate::cli::commands::resolve_member;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TrackedCard;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::format_time;

/// Stop (or discard) the member's running timer on a card.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop {
        card,
        member,
        discard,
    } = cmd
    {
        let member = resolve_member(member.as_ref(), cfg)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut tracked = TrackedCard::new(&mut store, card.clone());

        if *discard {
            if tracked.discard_tracking(&member)? {
                success(format!("Running timer on '{card}' discarded for '{member}'"));
            } else {
                info(format!("No running timer on '{card}' for '{member}'"));
            }
            return Ok(());
        }

        match tracked.stop_tracking(&member, date::now())? {
            Some(range) => success(format!(
                "Tracking stopped on '{card}' for '{member}': {}",
                format_time(range.diff(), true)
            )),
            None => info(format!("No running timer on '{card}' for '{member}'")),
        }
    }
    Ok(())
}
