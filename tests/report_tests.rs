//! Library-level pipeline tests: core operations through the SQLite store,
//! fragments back out, report rows built against board metadata.

use cardtime::core::TrackedCard;
use cardtime::models::metadata::{Board, CardData, Label, List, Member};
use cardtime::report::build_report;
use cardtime::store::SqliteStore;

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().expect("open store");

    let mut card = TrackedCard::new(&mut store, "c1");
    card.start_tracking("m1", "l1", 1_000).unwrap();
    card.stop_tracking("m1", 1_600).unwrap();
    card.add_range("m2", 2_000, 2_300, "pairing").unwrap();
    card.set_estimate("m1", 3_600).unwrap();
    card.set_estimate("m2", 1_800).unwrap();

    store
}

fn metadata() -> (Board, Vec<List>, Vec<Member>) {
    let board = Board {
        id: "b1".into(),
        name: "Sprint board".into(),
    };
    let lists = vec![List {
        id: "l1".into(),
        name: "In progress".into(),
    }];
    let members = vec![
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
    ];
    (board, lists, members)
}

fn card_from_store(store: &SqliteStore, id: &str, id_list: &str) -> CardData {
    CardData {
        id: id.into(),
        name: "Fix login flow".into(),
        desc: "OAuth regression".into(),
        labels: vec![Label { name: "bug".into() }],
        id_list: id_list.into(),
        plugin_data: store.fragments_for(id).unwrap(),
    }
}

#[test]
fn tracked_time_round_trips_into_report_rows() {
    let store = seeded_store();
    let (board, lists, members) = metadata();

    assert_eq!(store.tracked_cards().unwrap(), vec!["c1"]);

    let card = card_from_store(&store, "c1", "l1");
    let rows = build_report(&board, &[card], &lists, &members, &[]).unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    assert_eq!(row.board_name, "Sprint board");
    assert_eq!(row.card_title, "Fix login flow");
    assert_eq!(row.list_name, "In progress");
    assert_eq!(row.member_id, "m1, m2");
    assert_eq!(row.member_name, "Jane Doe, bob");
    assert_eq!(row.time_seconds, 600 + 300);
    assert_eq!(row.time_formatted, "15m");
    assert_eq!(row.estimate_seconds, 5_400);
    assert_eq!(row.estimate_formatted, "1h 30m");
}

#[test]
fn member_filter_narrows_time_but_not_estimates() {
    let store = seeded_store();
    let (board, lists, members) = metadata();

    let card = card_from_store(&store, "c1", "l1");
    let rows = build_report(&board, &[card], &lists, &members, &["m2".to_string()]).unwrap();
    let row = &rows[0];

    assert_eq!(row.time_seconds, 300);
    assert_eq!(row.member_id, "m2");
    assert_eq!(row.estimate_seconds, 5_400);
}

#[test]
fn cleared_cards_still_report_their_estimates() {
    let mut store = seeded_store();

    let mut card = TrackedCard::new(&mut store, "c1");
    card.clear().unwrap();

    let (board, lists, members) = metadata();
    let card = card_from_store(&store, "c1", "l1");
    let rows = build_report(&board, &[card], &lists, &members, &[]).unwrap();
    let row = &rows[0];

    assert_eq!(row.time_seconds, 0);
    assert_eq!(row.start_datetime, "N/A");
    assert_eq!(row.end_datetime, "N/A");
    assert_eq!(row.estimate_seconds, 5_400);
}
