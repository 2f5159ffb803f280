use crate::cli::commands::resolve_member;
use crate::cli::parser::{Commands, RangeAction};
use crate::config::Config;
use crate::core::TrackedCard;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;
use crate::utils::date::parse_datetime;

/// Manual range management: add, edit or delete by index.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range { card, action } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut tracked = TrackedCard::new(&mut store, card.clone());

        match action {
            RangeAction::Add {
                member,
                start,
                end,
                comment,
            } => {
                let member = resolve_member(member.as_ref(), cfg)?;
                let start = parse_datetime(start)?;
                let end = parse_datetime(end)?;

                tracked.add_range(&member, start, end, comment)?;
                success(format!("Range added to '{card}' for '{member}'"));
            }

            RangeAction::Edit {
                index,
                start,
                end,
                comment,
            } => {
                let start = start.as_deref().map(parse_datetime).transpose()?;
                let end = end.as_deref().map(parse_datetime).transpose()?;

                tracked.update_range(*index, start, end, comment.clone())?;
                success(format!("Range {index} on '{card}' updated"));
            }

            RangeAction::Del { index } => {
                tracked.delete_range(*index)?;
                success(format!("Range {index} on '{card}' deleted"));
            }
        }
    }
    Ok(())
}
