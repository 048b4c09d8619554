mod common;

use rusty_darts::model::GameState;
use rusty_darts::notify::{self, FireworksCommand, OverlayState, WinKind};

#[test]
fn in_progress_stays_live() {
    let notification = notify::evaluate(&common::x01_snapshot());
    assert_eq!(notification.overlay, OverlayState::Live);
    assert_eq!(notification.fireworks, FireworksCommand::Stop);
}

#[test]
fn leg_win_shows_leg_overlay_without_fireworks() {
    let snapshot = common::won_snapshot(GameState::LegWon, "Alice", "Leg");
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::Winner {
            player: "Alice".to_string(),
            kind: WinKind::Leg,
        }
    );
    assert_eq!(notification.fireworks, FireworksCommand::Stop);
}

#[test]
fn match_win_starts_fireworks() {
    let snapshot = common::won_snapshot(GameState::MatchWon, "Alice", "Match");
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::Winner {
            player: "Alice".to_string(),
            kind: WinKind::Match,
        }
    );
    assert_eq!(notification.fireworks, FireworksCommand::Start);
}

#[test]
fn set_win_when_sets_played_and_leg_counter_reset() {
    let mut snapshot = common::won_snapshot(GameState::LegWon, "Alice", "Leg");
    if let Some(info) = snapshot.match_info.as_mut() {
        info.sets_to_win = 3;
    }
    snapshot.players[0].sets_won = 1;
    snapshot.players[0].legs_won = 0;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::Winner {
            player: "Alice".to_string(),
            kind: WinKind::Set,
        }
    );
    assert_eq!(notification.fireworks, FireworksCommand::Stop);
}

#[test]
fn final_set_counts_as_match_win() {
    let mut snapshot = common::won_snapshot(GameState::LegWon, "Alice", "Leg");
    if let Some(info) = snapshot.match_info.as_mut() {
        info.sets_to_win = 3;
    }
    snapshot.players[0].sets_won = 3;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::Winner {
            player: "Alice".to_string(),
            kind: WinKind::Match,
        }
    );
    assert_eq!(notification.fireworks, FireworksCommand::Start);
}

#[test]
fn bull_off_win_uses_bull_off_kind() {
    let snapshot = common::won_snapshot(GameState::LegWon, "Bob", "Bull-off");
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::Winner {
            player: "Bob".to_string(),
            kind: WinKind::BullOff,
        }
    );
}

#[test]
fn missing_winner_info_falls_back_to_live() {
    let mut snapshot = common::x01_snapshot();
    snapshot.game_state = GameState::LegWon;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(notification.overlay, OverlayState::Live);
}

#[test]
fn unresolved_winner_name_falls_back_to_live() {
    let snapshot = common::won_snapshot(GameState::LegWon, "Carol", "Leg");
    let notification = notify::evaluate(&snapshot);
    assert_eq!(notification.overlay, OverlayState::Live);
}

#[test]
fn bull_off_tie_shows_tie_overlay() {
    let mut snapshot = common::x01_snapshot();
    snapshot.game_state = GameState::BullOffTie;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(notification.overlay, OverlayState::Tie);
    assert_eq!(notification.fireworks, FireworksCommand::Stop);
}

#[test]
fn bobs27_bust_ends_with_loss_message() {
    let mut snapshot = common::x01_snapshot();
    snapshot.match_info = Some(common::match_info("Bob's 27"));
    snapshot.game_state = GameState::Busted;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::ModeEnd {
            title: "Bob's 27 Verloren".to_string(),
            message: "Punktestand ist unter 1 gefallen".to_string(),
        }
    );
}

#[test]
fn bobs27_game_over_reports_final_score() {
    let mut snapshot = common::x01_snapshot();
    snapshot.match_info = Some(common::match_info("Bob's 27"));
    snapshot.game_state = GameState::GameOver;
    snapshot.players[0].score = 73;
    let notification = notify::evaluate(&snapshot);
    assert_eq!(
        notification.overlay,
        OverlayState::ModeEnd {
            title: "Bob's 27 Beendet".to_string(),
            message: "Finaler Punktestand: 73".to_string(),
        }
    );
}

#[test]
fn bobs27_end_beats_generic_winner_overlay() {
    let mut snapshot = common::won_snapshot(GameState::Busted, "Alice", "Leg");
    snapshot.match_info = Some(common::match_info("Bob's 27"));
    let notification = notify::evaluate(&snapshot);
    assert!(matches!(
        notification.overlay,
        OverlayState::ModeEnd { .. }
    ));
}
