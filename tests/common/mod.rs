use std::collections::HashMap;

use rusty_darts::model::{
    Dart, GameState, MatchInfo, Player, SegmentRef, Snapshot, TargetSpec, Turn, WinnerInfo,
};

#[must_use]
pub fn player(name: &str, score: i64, display_order: Option<i64>) -> Player {
    Player {
        name: name.to_string(),
        score,
        display_order,
        ..Player::default()
    }
}

#[must_use]
pub fn match_info(game_mode: &str) -> MatchInfo {
    MatchInfo {
        game_mode: game_mode.to_string(),
        start_score: 501,
        legs_to_win: 3,
        max_rounds: 20,
        ..MatchInfo::default()
    }
}

/// A mid-leg X01 match: Alice to throw, one dart already in the board.
#[must_use]
pub fn x01_snapshot() -> Snapshot {
    Snapshot {
        players: vec![
            player("Alice", 441, Some(1)),
            player("Bob", 501, Some(2)),
        ],
        match_info: Some(match_info("X01")),
        turn: Some(Turn {
            target: TargetSpec::Text(String::new()),
            throws: vec![Dart {
                segment: SegmentRef {
                    name: "T20".to_string(),
                },
            }],
            busted: false,
            current_round: 3,
        }),
        current_player_index: 0,
        game_state: GameState::InProgress,
        ..Snapshot::default()
    }
}

/// The same match after a win: `winner` took the leg or the match
/// depending on `game_state`.
#[must_use]
pub fn won_snapshot(game_state: GameState, winner: &str, win_type: &str) -> Snapshot {
    let mut snapshot = x01_snapshot();
    snapshot.game_state = game_state;
    snapshot.winner_info = Some(WinnerInfo {
        player: winner.to_string(),
        win_type: win_type.to_string(),
    });
    snapshot
}

#[must_use]
pub fn cricket_snapshot() -> Snapshot {
    let mut alice = player("Alice", 0, Some(1));
    alice.hits = HashMap::from([("20".to_string(), 2), ("Bull".to_string(), 3)]);
    let bob = player("Bob", 0, Some(2));
    let mut info = match_info("Cricket");
    info.targets = ["15", "16", "17", "18", "19", "20", "Bull"]
        .iter()
        .map(ToString::to_string)
        .collect();
    Snapshot {
        players: vec![alice, bob],
        match_info: Some(info),
        current_player_index: 1,
        game_state: GameState::InProgress,
        ..Snapshot::default()
    }
}
