use crate::cli::commands::resolve_member;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TrackedCard;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use crate::utils::duration::{format_duration, parse_duration};

/// Set or clear a member's effort estimate.
///
/// The duration string goes through the codec before anything is written:
/// a malformed entry aborts here and never touches the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Estimate {
        card,
        time,
        member,
        clear,
    } = cmd
    {
        let member = resolve_member(member.as_ref(), cfg)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut tracked = TrackedCard::new(&mut store, card.clone());

        if *clear {
            if tracked.remove_estimate(&member)? {
                success(format!("Estimate on '{card}' cleared for '{member}'"));
            } else {
                info(format!("No estimate on '{card}' for '{member}'"));
            }
            return Ok(());
        }

        let Some(time) = time else {
            return Err(AppError::InputFormat(
                "estimate requires a duration (or --clear)".to_string(),
            ));
        };

        let minutes = parse_duration(time, cfg.working_days, cfg.working_hours)?;
        tracked.set_estimate(&member, minutes * 60)?;

        let canonical = format_duration(Some(minutes), cfg.working_days, cfg.working_hours)
            .unwrap_or_else(|| "0h".to_string());
        success(format!("Estimate on '{card}' set to {canonical} for '{member}'"));
    }
    Ok(())
}
