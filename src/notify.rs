use crate::model::{GameState, Snapshot};

/// What the display shows instead of the live table, if anything.
/// Re-derived from scratch on every snapshot; an overlay never outlives the
/// snapshot that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayState {
    Live,
    Winner { player: String, kind: WinKind },
    Tie,
    ModeEnd { title: String, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinKind {
    Leg,
    Set,
    Match,
    BullOff,
}

impl WinKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WinKind::Leg => "Leg",
            WinKind::Set => "Set",
            WinKind::Match => "Match",
            WinKind::BullOff => "Ausbullen",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            WinKind::Leg => "win-type--leg",
            WinKind::Set => "win-type--set",
            WinKind::Match => "win-type--match",
            WinKind::BullOff => "win-type--bull",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireworksCommand {
    Start,
    Stop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub overlay: OverlayState,
    pub fireworks: FireworksCommand,
}

fn live() -> Notification {
    Notification {
        overlay: OverlayState::Live,
        fireworks: FireworksCommand::Stop,
    }
}

/// Pure transition function from a snapshot to the overlay decision and the
/// celebration command, evaluated once per incoming snapshot.
///
/// Priority order: the Bob's 27 end states beat the generic winner overlay,
/// which beats the bull-off tie; anything else is the live view.
#[must_use]
pub fn evaluate(snapshot: &Snapshot) -> Notification {
    if snapshot.game_mode() == Some("Bob's 27")
        && matches!(
            snapshot.game_state,
            GameState::GameOver | GameState::Busted
        )
    {
        return bobs27_end(snapshot);
    }

    if matches!(
        snapshot.game_state,
        GameState::LegWon | GameState::MatchWon
    ) {
        return winner(snapshot);
    }

    if snapshot.game_state == GameState::BullOffTie {
        return Notification {
            overlay: OverlayState::Tie,
            fireworks: FireworksCommand::Stop,
        };
    }

    live()
}

fn bobs27_end(snapshot: &Snapshot) -> Notification {
    let (title, message) = if snapshot.game_state == GameState::Busted {
        (
            "Bob's 27 Verloren".to_string(),
            "Punktestand ist unter 1 gefallen".to_string(),
        )
    } else {
        let final_score = snapshot
            .players
            .first()
            .map_or_else(|| "N/A".to_string(), |p| p.score.to_string());
        (
            "Bob's 27 Beendet".to_string(),
            format!("Finaler Punktestand: {final_score}"),
        )
    };
    Notification {
        overlay: OverlayState::ModeEnd { title, message },
        fireworks: FireworksCommand::Stop,
    }
}

fn winner(snapshot: &Snapshot) -> Notification {
    // Missing winner info or an unresolved winner name falls back to the
    // live view rather than showing a broken overlay.
    let Some(info) = &snapshot.winner_info else {
        return live();
    };
    let Some(winner) = snapshot.players.iter().find(|p| p.name == info.player) else {
        return live();
    };

    let sets_to_win = snapshot.match_info.as_ref().map_or(0, |m| m.sets_to_win);
    let kind = if snapshot.game_state == GameState::MatchWon
        || (sets_to_win > 0 && winner.sets_won == sets_to_win)
    {
        WinKind::Match
    } else if sets_to_win > 0 && winner.legs_won == 0 {
        WinKind::Set
    } else if info.win_type == "Bull-off" {
        WinKind::BullOff
    } else {
        WinKind::Leg
    };

    let fireworks = if kind == WinKind::Match {
        FireworksCommand::Start
    } else {
        FireworksCommand::Stop
    };

    Notification {
        overlay: OverlayState::Winner {
            player: winner.name.clone(),
            kind,
        },
        fireworks,
    }
}
