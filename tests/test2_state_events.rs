mod common;

use rusty_darts::model::GameState;
use rusty_darts::state::{DisplayState, Fireworks, InboundEvent};

fn connected(modes: &[&str]) -> InboundEvent {
    InboundEvent::Connected {
        modes: modes.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn connect_stores_modes_and_marks_reachable() {
    let mut state = DisplayState::default();
    state.apply(connected(&["X01", "Cricket"]));
    assert!(state.cache.reachable());
    assert_eq!(state.available_modes, vec!["X01", "Cricket"]);
    assert!(state.cache.get().is_none());
}

#[test]
fn updates_before_connect_are_dropped() {
    let mut state = DisplayState::default();
    state.apply(InboundEvent::StateUpdate(common::x01_snapshot()));
    assert!(state.cache.get().is_none());
    assert!(state.cache.last_update().is_none());
}

#[test]
fn update_replaces_snapshot_wholesale() {
    let mut state = DisplayState::default();
    state.apply(connected(&["X01"]));

    let mut first = common::x01_snapshot();
    first.players[0].score = 441;
    state.apply(InboundEvent::StateUpdate(first));

    let mut second = common::x01_snapshot();
    second.players[0].score = 381;
    state.apply(InboundEvent::StateUpdate(second));

    let cached = state.cache.get().expect("snapshot cached");
    assert_eq!(cached.players[0].score, 381);
    assert!(state.cache.last_update().is_some());
}

#[test]
fn disconnect_clears_cache_and_stops_fireworks() {
    let mut state = DisplayState::default();
    state.apply(connected(&["X01"]));
    state.apply(InboundEvent::StateUpdate(common::won_snapshot(
        GameState::MatchWon,
        "Alice",
        "Match",
    )));
    assert!(state.fireworks.is_running());

    state.apply(InboundEvent::Disconnected);
    assert!(!state.cache.reachable());
    assert!(state.cache.get().is_none());
    assert!(!state.fireworks.is_running());
}

#[test]
fn match_win_starts_fireworks_and_next_leg_stops_them() {
    let mut state = DisplayState::default();
    state.apply(connected(&["X01"]));

    state.apply(InboundEvent::StateUpdate(common::won_snapshot(
        GameState::MatchWon,
        "Alice",
        "Match",
    )));
    assert!(state.fireworks.is_running());

    state.apply(InboundEvent::StateUpdate(common::x01_snapshot()));
    assert!(!state.fireworks.is_running());
}

#[test]
fn leg_win_does_not_start_fireworks() {
    let mut state = DisplayState::default();
    state.apply(connected(&["X01"]));
    state.apply(InboundEvent::StateUpdate(common::won_snapshot(
        GameState::LegWon,
        "Alice",
        "Leg",
    )));
    assert!(!state.fireworks.is_running());
}

#[test]
fn fireworks_start_and_stop_are_idempotent() {
    let mut fireworks = Fireworks::default();
    fireworks.start();
    fireworks.start();
    assert!(fireworks.is_running());
    fireworks.stop();
    fireworks.stop();
    assert!(!fireworks.is_running());
}
