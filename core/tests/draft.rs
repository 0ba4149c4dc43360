// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Draft session lifecycle through the public API: load, edit, commit.

use cursus_core::{
    BlockField, DraftSchedule, EnrollmentStatus, MAX_BLOCKS, ScheduleRecord, Weekday,
    parse_snapshot,
};

#[test]
fn session_bounds_hold_under_repeated_edits() {
    let mut draft = DraftSchedule::new();

    for _ in 0..5 {
        draft.add_block();
    }
    assert_eq!(draft.blocks().len(), MAX_BLOCKS);

    draft.remove_block(1);
    draft.remove_block(1);
    assert_eq!(draft.blocks().len(), 1);

    // The last block stays put.
    assert!(!draft.remove_block(0));
    assert_eq!(draft.blocks().len(), 1);
    assert_eq!(draft.active_index(), 0);
}

#[test]
fn loading_prefers_blocks_then_legacy_then_default() {
    let both = parse_snapshot(
        r#"[{
            "id": "c1", "name": "Algebra", "status": "in-progress",
            "blocks": [{"day": "WE", "hour": 9, "duration": 2, "room": null}],
            "day": "MO", "hour": 18, "duration": 2, "room": null
        }]"#,
    )
    .unwrap();
    let draft = DraftSchedule::from_course(&both[0]);
    assert_eq!(draft.blocks().len(), 1);
    assert_eq!(draft.blocks()[0].day(), Weekday::We);

    let legacy_only = parse_snapshot(
        r#"[{
            "id": "c1", "name": "Algebra", "status": "in-progress",
            "day": "FR", "hour": 8, "duration": 1, "room": "Aula 4"
        }]"#,
    )
    .unwrap();
    let draft = DraftSchedule::from_course(&legacy_only[0]);
    assert_eq!(draft.blocks().len(), 1);
    assert_eq!(draft.blocks()[0].day(), Weekday::Fr);
    assert_eq!(draft.blocks()[0].room(), Some("Aula 4"));

    let bare = parse_snapshot(r#"[{"id": "c1", "name": "Algebra"}]"#).unwrap();
    let draft = DraftSchedule::from_course(&bare[0]);
    assert_eq!(draft, DraftSchedule::new());
}

#[test]
fn committed_payload_round_trips_through_the_wire_shape() {
    let mut draft = DraftSchedule::new();
    draft
        .update_field(0, BlockField::Room("Lab 3".to_string()))
        .unwrap();
    draft.add_block();
    draft.update_field(1, BlockField::Day(Weekday::Sa)).unwrap();
    draft.update_field(1, BlockField::StartHour(10)).unwrap();

    let records = draft.commit_records(EnrollmentStatus::InProgress);
    let json = serde_json::to_string(&records).unwrap();
    let parsed: Vec<ScheduleRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);

    let reloaded = DraftSchedule::from_blocks(
        parsed.iter().filter_map(ScheduleRecord::to_block).collect(),
    );
    assert_eq!(reloaded.blocks(), draft.blocks());
}

#[test]
fn unscheduled_commit_is_the_all_null_sentinel() {
    let draft = DraftSchedule::new();
    let records = draft.commit_records(EnrollmentStatus::Pending);

    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(json, r#"[{"day":null,"hour":null,"duration":null,"room":null}]"#);
}
