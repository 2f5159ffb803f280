use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::estimates::Estimates;
use crate::models::ranges::Ranges;
use crate::models::timers::Timers;
use crate::store::SqliteStore;
use crate::utils::date;
use crate::utils::formatting::{format_datetime, format_time};

/// Show tracked ranges, running timers and estimates for one card or for
/// every tracked card.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { card } = cmd {
        let store = SqliteStore::open(&cfg.database)?;

        let cards = match card {
            Some(card_id) => vec![card_id.clone()],
            None => store.tracked_cards()?,
        };

        if cards.is_empty() {
            println!("No tracked cards.");
            return Ok(());
        }

        for card_id in cards {
            print_card(&store, &card_id)?;
        }
    }
    Ok(())
}

fn print_card(store: &SqliteStore, card_id: &str) -> AppResult<()> {
    let ranges = Ranges::load(store, card_id)?;
    let timers = Timers::load(store, card_id)?;
    let estimates = Estimates::load(store, card_id)?;

    if ranges.is_empty() && timers.is_empty() && estimates.is_empty() {
        println!("No activity on '{card_id}' yet.");
        return Ok(());
    }

    println!("\n=== {card_id} ===");

    for (index, range) in ranges.items().iter().enumerate() {
        // Same-day ends render time-only, like the manage view did.
        let same_day = date::same_local_day(range.start, range.end);
        let comment = if range.comment.is_empty() {
            String::new()
        } else {
            format!("  # {}", range.comment)
        };

        println!(
            "[{index}] {}  {} - {} ({}){comment}",
            range.member_id(),
            format_datetime(range.start, false),
            format_datetime(range.end, same_day),
            format_time(range.diff(), false),
        );
    }

    let now = date::now();
    for timer in timers.items() {
        println!(
            "Running: {} since {} ({})",
            timer.member_id(),
            format_datetime(timer.start, false),
            format_time(timer.time_in_seconds(now), true),
        );
    }

    println!("Time spent: {}", format_time(ranges.time_spent(), false));

    if !estimates.is_empty() {
        println!("Estimate:   {}", format_time(estimates.total_estimate(), false));
    }

    Ok(())
}
