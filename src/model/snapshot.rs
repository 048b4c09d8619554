use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One complete, authoritative description of match state at an instant.
/// The backend replaces it wholesale on every throw; the display never
/// mutates game semantics.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(rename = "match", default)]
    pub match_info: Option<MatchInfo>,
    #[serde(default)]
    pub turn: Option<Turn>,
    #[serde(default)]
    pub current_player_index: usize,
    #[serde(default)]
    pub game_state: GameState,
    #[serde(default)]
    pub winner_info: Option<WinnerInfo>,
    #[serde(default)]
    pub checkout_guide: Vec<Suggestion>,
}

impl Snapshot {
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn game_mode(&self) -> Option<&str> {
        self.match_info.as_ref().map(|m| m.game_mode.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    Idle,
    InProgress,
    LegWon,
    MatchWon,
    Busted,
    GameOver,
    BullOffTie,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    #[default]
    Plain,
    Owner,
    Registered,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub legs_won: u32,
    #[serde(default)]
    pub sets_won: u32,
    /// Assigned once per player for the lifetime of a match, independent of
    /// the per-update ordering the backend delivers.
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub player_type: PlayerType,

    // Mode-specific statistics; absent unless the mode reports them.
    #[serde(default)]
    pub overall_average: Option<f64>,
    #[serde(default)]
    pub match_average: Option<f64>,
    #[serde(default)]
    pub leg_average: Option<f64>,
    #[serde(default)]
    pub overall_ppr: Option<f64>,
    #[serde(default)]
    pub overall_mpr: Option<f64>,
    #[serde(default)]
    pub mpr: Option<f64>,
    #[serde(default)]
    pub overall_hit_rate: Option<f64>,
    #[serde(default)]
    pub match_hit_rate: Option<f64>,
    #[serde(default)]
    pub leg_hit_rate: Option<f64>,
    #[serde(default)]
    pub darts_thrown_leg: Option<u32>,
    #[serde(default)]
    pub current_target: Option<String>,
    #[serde(default)]
    pub hits: HashMap<String, u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MatchInfo {
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub start_score: i64,
    #[serde(default)]
    pub legs_to_win: u32,
    #[serde(default)]
    pub sets_to_win: u32,
    #[serde(default)]
    pub in_mode: Option<String>,
    #[serde(default)]
    pub out_mode: Option<String>,
    #[serde(default)]
    pub max_rounds: u32,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub scoring_mode: Option<String>,
    #[serde(default)]
    pub hits_per_target: u32,
    #[serde(default)]
    pub ends_after_value: u32,
    #[serde(default)]
    pub ends_after_type: Option<String>,
    /// Gates the optional overall-statistics columns.
    #[serde(default)]
    pub use_db: bool,
    /// Cardinality distinguishes Cricket (7 targets) from Tactics (12).
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Turn {
    #[serde(default)]
    pub target: TargetSpec,
    #[serde(default)]
    pub throws: Vec<Dart>,
    #[serde(default)]
    pub busted: bool,
    #[serde(default)]
    pub current_round: u32,
}

/// The turn target is mode-dependent: most modes send a plain string
/// ("20", "D5", "Bull"), Segment Training sends a segment/mode pair.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum TargetSpec {
    Structured { segment: String, mode: String },
    Text(String),
}

impl Default for TargetSpec {
    fn default() -> Self {
        TargetSpec::Text(String::new())
    }
}

impl TargetSpec {
    /// The plain display text of the target.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            TargetSpec::Text(s) => s,
            TargetSpec::Structured { segment, .. } => segment,
        }
    }

    /// Segment and highlight mode, with "Full" for plain-text targets.
    #[must_use]
    pub fn segment_and_mode(&self) -> (&str, &str) {
        match self {
            TargetSpec::Text(s) => (s, "Full"),
            TargetSpec::Structured { segment, mode } => (segment, mode),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Dart {
    pub segment: SegmentRef,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SegmentRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WinnerInfo {
    #[serde(default)]
    pub player: String,
    #[serde(rename = "type", default)]
    pub win_type: String,
}

/// A server-suggested dart toward finishing the leg, shown interleaved
/// with the darts already thrown.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Suggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_image: bool,
}
