//! Flat per-card report row for export.
//!
//! The serialized key names (`board.name`, `card.title`, ...) are the
//! contract consumed by downstream spreadsheets; renaming a field here is a
//! breaking change for every saved report.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CardReportRow {
    pub id: String,
    #[serde(rename = "board.name")]
    pub board_name: String,
    #[serde(rename = "board.id")]
    pub board_id: String,
    #[serde(rename = "card.id")]
    pub card_id: String,
    #[serde(rename = "card.title")]
    pub card_title: String,
    #[serde(rename = "card.description")]
    pub card_description: String,
    #[serde(rename = "card.labels")]
    pub card_labels: String,
    #[serde(rename = "list.id")]
    pub list_id: String,
    #[serde(rename = "list.name")]
    pub list_name: String,
    #[serde(rename = "member.id")]
    pub member_id: String,
    #[serde(rename = "member.name")]
    pub member_name: String,
    pub start_datetime: String,
    pub end_datetime: String,
    pub time_seconds: i64,
    pub time_formatted: String,
    pub estimate_seconds: i64,
    pub estimate_formatted: String,
}

/// Header row for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "board.name",
        "board.id",
        "card.id",
        "card.title",
        "card.description",
        "card.labels",
        "list.id",
        "list.name",
        "member.id",
        "member.name",
        "start_datetime",
        "end_datetime",
        "time_seconds",
        "time_formatted",
        "estimate_seconds",
        "estimate_formatted",
    ]
}

/// Convert a row into a table of strings (for XLSX).
pub(crate) fn row_to_strings(row: &CardReportRow) -> Vec<String> {
    vec![
        row.id.clone(),
        row.board_name.clone(),
        row.board_id.clone(),
        row.card_id.clone(),
        row.card_title.clone(),
        row.card_description.clone(),
        row.card_labels.clone(),
        row.list_id.clone(),
        row.list_name.clone(),
        row.member_id.clone(),
        row.member_name.clone(),
        row.start_datetime.clone(),
        row.end_datetime.clone(),
        row.time_seconds.to_string(),
        row.time_formatted.clone(),
        row.estimate_seconds.to_string(),
        row.estimate_formatted.clone(),
    ]
}
