//! Report row construction: stored time data joined with board metadata.

use crate::errors::AppResult;
use crate::models::estimate::EstimateData;
use crate::models::estimates::Estimates;
use crate::models::metadata::{Board, CardData, List, Member};
use crate::models::range::RangeData;
use crate::models::ranges::Ranges;
use crate::report::model::CardReportRow;
use crate::store::{ESTIMATES_KEY, RANGES_KEY};
use crate::utils::formatting::{format_datetime, format_member_name, format_time};
use serde_json::Value;
use std::collections::HashMap;

/// Pull every ranges- and estimates-shaped payload out of the card's
/// plugin-data fragments and concatenate them. Cards accumulate fragments
/// over time; a single fragment must never be assumed.
fn parse_fragments(card: &CardData) -> AppResult<(Vec<RangeData>, Vec<EstimateData>)> {
    let mut ranges = Vec::new();
    let mut estimates = Vec::new();

    for raw in &card.plugin_data {
        if !raw.contains(RANGES_KEY) && !raw.contains(ESTIMATES_KEY) {
            continue;
        }

        let value: Value = serde_json::from_str(raw)?;

        if let Some(part) = value.get(RANGES_KEY) {
            ranges.extend(serde_json::from_value::<Vec<RangeData>>(part.clone())?);
        }
        if let Some(part) = value.get(ESTIMATES_KEY) {
            estimates.extend(serde_json::from_value::<Vec<EstimateData>>(part.clone())?);
        }
    }

    Ok((ranges, estimates))
}

/// Build the report row for one card.
///
/// The member filter applies to ranges only; estimates stay whole-card.
/// The end bound is the `end` of the latest-started range, not the maximal
/// `end` overall.
pub fn build_report_row(
    board: &Board,
    card: &CardData,
    lists_by_id: &HashMap<String, List>,
    members_by_id: &HashMap<String, Member>,
    selected_members: &[String],
) -> AppResult<CardReportRow> {
    let (range_data, estimate_data) = parse_fragments(card)?;

    let all_ranges = Ranges::unserialize(&card.id, range_data);
    let ranges = if selected_members.is_empty() {
        all_ranges
    } else {
        all_ranges.filtered_by_members(selected_members)
    };

    let estimates = Estimates::unserialize(&card.id, estimate_data);

    let time_spent = ranges.time_spent();
    let total_estimate = estimates.total_estimate();

    let mut member_ids: Vec<String> = Vec::new();
    for item in ranges.items() {
        if !member_ids.iter().any(|id| id == item.member_id()) {
            member_ids.push(item.member_id().to_string());
        }
    }

    let mut earliest_start: Option<i64> = None;
    let mut latest_started: Option<(i64, i64)> = None;
    for item in ranges.items() {
        if earliest_start.map_or(true, |cur| item.start < cur) {
            earliest_start = Some(item.start);
        }
        if latest_started.map_or(true, |(start, _)| item.start > start) {
            latest_started = Some((item.start, item.end));
        }
    }

    let member_names: Vec<String> = member_ids
        .iter()
        .filter_map(|id| members_by_id.get(id))
        .map(format_member_name)
        .collect();

    let labels: Vec<&str> = card.labels.iter().map(|label| label.name.as_str()).collect();

    Ok(CardReportRow {
        id: card.id.clone(),
        board_name: board.name.clone(),
        board_id: board.id.clone(),
        card_id: card.id.clone(),
        card_title: card.name.clone(),
        card_description: card.desc.clone(),
        card_labels: labels.join(", "),
        list_id: card.id_list.clone(),
        list_name: lists_by_id
            .get(&card.id_list)
            .map(|list| list.name.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        member_id: member_ids.join(", "),
        member_name: member_names.join(", "),
        start_datetime: earliest_start
            .map(|start| format_datetime(start, false))
            .unwrap_or_else(|| "N/A".to_string()),
        end_datetime: latest_started
            .map(|(_, end)| format_datetime(end, false))
            .unwrap_or_else(|| "N/A".to_string()),
        time_seconds: time_spent,
        time_formatted: format_time(time_spent, true),
        estimate_seconds: total_estimate,
        estimate_formatted: format_time(total_estimate, true),
    })
}

/// One row per card, joined with the supplied board metadata.
pub fn build_report(
    board: &Board,
    cards: &[CardData],
    lists: &[List],
    members: &[Member],
    selected_members: &[String],
) -> AppResult<Vec<CardReportRow>> {
    let lists_by_id: HashMap<String, List> = lists
        .iter()
        .map(|list| (list.id.clone(), list.clone()))
        .collect();
    let members_by_id: HashMap<String, Member> = members
        .iter()
        .map(|member| (member.id.clone(), member.clone()))
        .collect();

    cards
        .iter()
        .map(|card| build_report_row(board, card, &lists_by_id, &members_by_id, selected_members))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metadata::Label;
    use serde_json::json;

    fn board() -> Board {
        Board {
            id: "b1".into(),
            name: "Sprint board".into(),
        }
    }

    fn card_with_fragments(fragments: Vec<String>) -> CardData {
        CardData {
            id: "c1".into(),
            name: "Fix login flow".into(),
            desc: "OAuth regression".into(),
            labels: vec![
                Label { name: "bug".into() },
                Label {
                    name: "backend".into(),
                },
            ],
            id_list: "l1".into(),
            plugin_data: fragments,
        }
    }

    fn meta_lists() -> Vec<List> {
        vec![List {
            id: "l1".into(),
            name: "In progress".into(),
        }]
    }

    fn meta_members() -> Vec<Member> {
        vec![
            Member {
                id: "m1".into(),
                username: Some("jdoe".into()),
                full_name: Some("Jane Doe".into()),
            },
            Member {
                id: "m2".into(),
                username: Some("bob".into()),
                full_name: None,
            },
        ]
    }

    #[test]
    fn merges_payloads_across_fragments() {
        let card = card_with_fragments(vec![
            json!({ "act-timer-ranges": [["m1", 100, 400, ""]] }).to_string(),
            json!({
                "act-timer-ranges": [["m2", 500, 800, ""]],
                "act-timer-estimates": [["m1", 3600]]
            })
            .to_string(),
            json!({ "act-timer-estimates": [["m2", 1800]] }).to_string(),
        ]);

        let rows = build_report(&board(), &[card], &meta_lists(), &meta_members(), &[]).unwrap();
        let row = &rows[0];

        assert_eq!(row.time_seconds, 600);
        assert_eq!(row.estimate_seconds, 5400);
        assert_eq!(row.member_id, "m1, m2");
        assert_eq!(row.member_name, "Jane Doe, bob");
    }

    #[test]
    fn member_filter_applies_to_ranges_but_not_estimates() {
        let card = card_with_fragments(vec![
            json!({
                "act-timer-ranges": [["m1", 100, 400, ""], ["m2", 500, 800, ""]],
                "act-timer-estimates": [["m1", 3600], ["m2", 1800]]
            })
            .to_string(),
        ]);

        let rows = build_report(
            &board(),
            &[card],
            &meta_lists(),
            &meta_members(),
            &["m1".to_string()],
        )
        .unwrap();
        let row = &rows[0];

        assert_eq!(row.time_seconds, 300);
        assert_eq!(row.member_id, "m1");
        // Estimates stay whole-card even while ranges are filtered.
        assert_eq!(row.estimate_seconds, 5400);
    }

    #[test]
    fn end_datetime_follows_latest_started_range() {
        // The first range starts earlier but ends latest; the reported end
        // bound still comes from the range with the maximal start. A true
        // "global maximum end" would pick 900 here.
        let card = card_with_fragments(vec![
            json!({
                "act-timer-ranges": [["m1", 100, 900, ""], ["m1", 200, 300, ""]]
            })
            .to_string(),
        ]);

        let rows = build_report(&board(), &[card], &meta_lists(), &meta_members(), &[]).unwrap();
        let row = &rows[0];

        assert_eq!(row.start_datetime, format_datetime(100, false));
        assert_eq!(row.end_datetime, format_datetime(300, false));
    }

    #[test]
    fn missing_metadata_renders_na() {
        let mut card = card_with_fragments(vec![]);
        card.id_list = "unknown-list".into();

        let rows = build_report(&board(), &[card], &meta_lists(), &meta_members(), &[]).unwrap();
        let row = &rows[0];

        assert_eq!(row.list_name, "N/A");
        assert_eq!(row.start_datetime, "N/A");
        assert_eq!(row.end_datetime, "N/A");
        assert_eq!(row.time_seconds, 0);
        assert_eq!(row.time_formatted, "0s");
        assert_eq!(row.member_id, "");
    }

    #[test]
    fn unknown_members_keep_their_id_but_get_no_name() {
        let card = card_with_fragments(vec![
            json!({ "act-timer-ranges": [["ghost", 100, 200, ""], ["m1", 300, 400, ""]] })
                .to_string(),
        ]);

        let rows = build_report(&board(), &[card], &meta_lists(), &meta_members(), &[]).unwrap();
        let row = &rows[0];

        assert_eq!(row.member_id, "ghost, m1");
        assert_eq!(row.member_name, "Jane Doe");
    }

    #[test]
    fn fragments_without_tracker_payloads_are_skipped() {
        let card = card_with_fragments(vec![
            json!({ "some-other-plugin": true }).to_string(),
            json!({ "act-timer-ranges": [["m1", 0, 60, ""]] }).to_string(),
        ]);

        let rows = build_report(&board(), &[card], &meta_lists(), &meta_members(), &[]).unwrap();
        assert_eq!(rows[0].time_seconds, 60);
    }
}
