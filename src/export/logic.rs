// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::metadata::{BoardMetadata, CardData};
use crate::report::build_report;
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use std::fs;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export report rows for every tracked card.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `members`: optional member-id filter applied to tracked ranges
    /// - `meta_path`: optional board-metadata JSON file (names, lists, cards)
    pub fn export(
        store: &SqliteStore,
        format: &ExportFormat,
        file: &str,
        members: &[String],
        meta_path: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let meta = load_metadata(meta_path)?;
        let cards = collect_cards(store, &meta)?;

        let rows = build_report(&meta.board, &cards, &meta.lists, &meta.members, members)?;

        if rows.is_empty() {
            warning("⚠️  No tracked cards found.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}

/// Read the metadata file, or fall back to an anonymous board (rows still
/// export, display fields render their N/A defaults).
fn load_metadata(meta_path: Option<&str>) -> AppResult<BoardMetadata> {
    match meta_path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(BoardMetadata::default()),
    }
}

/// Pair every tracked card id in the store with its metadata entry (or a
/// bare placeholder) and attach the stored plugin-data fragments.
fn collect_cards(store: &SqliteStore, meta: &BoardMetadata) -> AppResult<Vec<CardData>> {
    let mut cards = Vec::new();

    for card_id in store.tracked_cards()? {
        let mut card = meta
            .cards
            .iter()
            .find(|card| card.id == card_id)
            .cloned()
            .unwrap_or_else(|| CardData::bare(&card_id));

        card.plugin_data = store.fragments_for(&card_id)?;
        cards.push(card);
    }

    Ok(cards)
}
