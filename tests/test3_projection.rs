mod common;

use std::collections::HashMap;

use rusty_darts::args::Args;
use rusty_darts::controller::request::{Layout, parse_display_request};
use rusty_darts::model::{GameState, Snapshot, TargetSpec};
use rusty_darts::view::table::{
    ColumnSpec, OrderPolicy, dart_display_name, default_table_columns, format_average,
    format_average_or_zero, format_hit_rate, format_overall_hit_rate, merge_columns, project,
};

#[test]
fn override_replaces_default_in_place() {
    let snapshot = common::x01_snapshot();
    let defaults = default_table_columns(&snapshot);
    let merged = merge_columns(
        defaults,
        vec![ColumnSpec::text("score", |_| "overridden".to_string())],
    );
    let selectors: Vec<_> = merged.iter().map(|c| c.selector).collect();
    assert_eq!(selectors, vec!["player-name", "score", "legs-sets"]);

    let rows = project(&snapshot.players, 0, &merged, OrderPolicy::ServerOrder);
    assert_eq!(rows[0].cells[1].content.0, "overridden");
}

#[test]
fn unknown_override_is_appended() {
    let snapshot = common::x01_snapshot();
    let defaults = default_table_columns(&snapshot);
    let merged = merge_columns(
        defaults,
        vec![ColumnSpec::text("avg-m", |_| String::new())],
    );
    assert_eq!(merged.last().map(|c| c.selector), Some("avg-m"));
    assert_eq!(merged.len(), 4);
}

#[test]
fn stable_order_sorts_by_display_order() {
    let mut snapshot = common::x01_snapshot();
    snapshot.players[0].display_order = Some(2);
    snapshot.players[1].display_order = Some(1);

    let columns = default_table_columns(&snapshot);
    let rows = project(&snapshot.players, 0, &columns, OrderPolicy::Stable);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
}

#[test]
fn stable_order_is_idempotent_across_renders() {
    let mut snapshot = common::x01_snapshot();
    snapshot.players[0].display_order = Some(2);
    snapshot.players[1].display_order = Some(1);

    let columns = default_table_columns(&snapshot);
    let first = project(&snapshot.players, 0, &columns, OrderPolicy::Stable);
    let second = project(&snapshot.players, 0, &columns, OrderPolicy::Stable);
    let first_names: Vec<_> = first.iter().map(|r| r.name.as_str()).collect();
    let second_names: Vec<_> = second.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(first_names, second_names);
}

#[test]
fn stable_order_falls_back_to_server_order_without_display_order() {
    let mut snapshot = common::x01_snapshot();
    snapshot.players[0].display_order = None;
    snapshot.players[1].display_order = None;

    let columns = default_table_columns(&snapshot);
    let rows = project(&snapshot.players, 0, &columns, OrderPolicy::Stable);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn server_order_keeps_delivery_order() {
    let mut snapshot = common::x01_snapshot();
    snapshot.players[0].display_order = Some(2);
    snapshot.players[1].display_order = Some(1);

    let columns = default_table_columns(&snapshot);
    let rows = project(&snapshot.players, 0, &columns, OrderPolicy::ServerOrder);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn active_player_follows_reordering() {
    let mut snapshot = common::x01_snapshot();
    snapshot.players[0].display_order = Some(2);
    snapshot.players[1].display_order = Some(1);
    snapshot.current_player_index = 0;

    let columns = default_table_columns(&snapshot);
    let rows = project(&snapshot.players, 0, &columns, OrderPolicy::Stable);
    // Alice is rendered second now but stays the active row.
    assert!(!rows[0].active);
    assert_eq!(rows[1].name, "Alice");
    assert!(rows[1].active);
}

#[test]
fn query_parameters_override_cli_defaults() {
    let args = Args {
        server_order: true,
        card_view: true,
        ..Args::default()
    };

    let query: HashMap<String, String> = HashMap::new();
    let req = parse_display_request(&query, &args);
    assert_eq!(req.order, OrderPolicy::ServerOrder);
    assert_eq!(req.layout, Layout::Cards);

    let query: HashMap<String, String> = [
        ("rs".to_string(), String::new()),
        ("xt".to_string(), String::new()),
    ]
    .into();
    let req = parse_display_request(&query, &args);
    assert_eq!(req.order, OrderPolicy::ForceStable);
    assert_eq!(req.layout, Layout::Table);
}

#[test]
fn conflicting_query_parameters_have_fixed_winners() {
    let args = Args::default();
    let query: HashMap<String, String> = [
        ("rn".to_string(), String::new()),
        ("rs".to_string(), String::new()),
        ("xt".to_string(), String::new()),
        ("xc".to_string(), String::new()),
    ]
    .into();
    let req = parse_display_request(&query, &args);
    assert_eq!(req.order, OrderPolicy::ServerOrder);
    assert_eq!(req.layout, Layout::Table);
}

#[test]
fn dart_names_map_bull_variants() {
    assert_eq!(dart_display_name("Bull"), "\u{1F441}");
    assert_eq!(dart_display_name("25"), "Bull");
    assert_eq!(dart_display_name("T20"), "T20");
}

#[test]
fn averages_and_hit_rates_format_consistently() {
    assert_eq!(format_average(Some(42.666)), "42.67");
    assert_eq!(format_average(None), "-");
    assert_eq!(format_average_or_zero(Some(42.666)), "42.67");
    assert_eq!(format_average_or_zero(None), "0.00");
    assert_eq!(format_hit_rate(Some(0.5), 0), "50%");
    assert_eq!(format_hit_rate(None, 1), "0.0%");
    assert_eq!(format_overall_hit_rate(Some(0.25), 1), "25.0%");
    assert_eq!(format_overall_hit_rate(None, 0), "-");
    assert_eq!(format_overall_hit_rate(Some(0.0), 0), "-");
}

#[test]
fn snapshot_decodes_backend_payload() -> Result<(), serde_json::Error> {
    let payload = r#"{
        "players": [
            {"name": "Alice", "score": 301, "legs_won": 1, "display_order": 1,
             "player_type": "owner"},
            {"name": "Bob", "score": 501, "display_order": 2}
        ],
        "match": {"game_mode": "X01", "start_score": 501, "legs_to_win": 3,
                  "in_mode": "Straight", "out_mode": "Double", "use_db": true},
        "turn": {"target": "", "throws": [{"segment": {"name": "T20"}}],
                 "busted": false, "current_round": 2},
        "current_player_index": 0,
        "game_state": "in_progress",
        "checkout_guide": [{"name": "T20", "is_image": false}]
    }"#;

    let snapshot: Snapshot = serde_json::from_str(payload)?;
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.game_mode(), Some("X01"));
    assert_eq!(snapshot.game_state, GameState::InProgress);
    assert_eq!(snapshot.current_player().map(|p| p.name.as_str()), Some("Alice"));
    assert_eq!(snapshot.checkout_guide[0].name, "T20");
    Ok(())
}

#[test]
fn structured_turn_target_decodes_segment_and_mode() -> Result<(), serde_json::Error> {
    let spec: TargetSpec = serde_json::from_str(r#"{"segment": "19", "mode": "Triple"}"#)?;
    assert_eq!(spec.segment_and_mode(), ("19", "Triple"));

    let spec: TargetSpec = serde_json::from_str(r#""D16""#)?;
    assert_eq!(spec.text(), "D16");
    assert_eq!(spec.segment_and_mode(), ("D16", "Full"));
    Ok(())
}
