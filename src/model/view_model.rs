use maud::{Markup, html};

use crate::model::{Snapshot, Suggestion, Turn};

/// Ephemeral description of the upper focus area, rebuilt on every render
/// cycle. The base builder fills the mode-agnostic fields; per-mode view
/// builders refine it before anything is drawn.
#[derive(Clone, Debug)]
pub struct FocusViewModel {
    pub details: Details,
    pub focus: Focus,
    pub darts: DartsArea,
    pub is_busted: bool,
}

#[derive(Clone, Debug)]
pub struct Details {
    pub gamemode: TextBlock,
    pub gamerules: MarkupBlock,
}

#[derive(Clone, Debug)]
pub struct Focus {
    pub player_name: TextBlock,
    pub score: TextBlock,
    pub score_label: TextBlock,
    pub graphic: Graphic,
}

#[derive(Clone, Debug)]
pub struct Graphic {
    pub visible: bool,
    pub target: Option<String>,
    pub mode: String,
}

#[derive(Clone, Debug)]
pub struct DartsArea {
    pub visible: bool,
    pub turn_info: Option<Turn>,
    pub checkout_guide: Vec<Suggestion>,
}

#[derive(Clone, Debug)]
pub struct TextBlock {
    pub text: String,
    pub visible: bool,
}

impl TextBlock {
    fn new(text: &str, visible: bool) -> Self {
        Self {
            text: text.to_string(),
            visible,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MarkupBlock {
    pub html: Markup,
    pub visible: bool,
}

impl Default for FocusViewModel {
    fn default() -> Self {
        Self {
            details: Details {
                gamemode: TextBlock::new("", true),
                gamerules: MarkupBlock {
                    html: html! {},
                    visible: true,
                },
            },
            focus: Focus {
                player_name: TextBlock::new("", false),
                score: TextBlock::new("", true),
                score_label: TextBlock::new("Punkte", false),
                graphic: Graphic {
                    visible: false,
                    target: None,
                    mode: "Full".to_string(),
                },
            },
            darts: DartsArea {
                visible: true,
                turn_info: None,
                checkout_guide: Vec::new(),
            },
            is_busted: false,
        }
    }
}

/// Build the mode-agnostic view model from a snapshot: game-mode label,
/// human-readable rule summary, focus player/score, turn info.
#[must_use]
pub fn base_view_model(snapshot: &Snapshot) -> FocusViewModel {
    let mut vm = FocusViewModel::default();
    let Some(match_info) = &snapshot.match_info else {
        return vm;
    };

    vm.details.gamemode.text = match_info.game_mode.clone();

    let mut rules: Vec<String> = Vec::new();
    if match_info.sets_to_win > 0 {
        rules.push(format!(
            "First to {} Sets / {} Legs",
            match_info.sets_to_win, match_info.legs_to_win
        ));
    } else if match_info.legs_to_win > 0 {
        rules.push(format!("First to {} Legs", match_info.legs_to_win));
    }
    if let Some(in_mode) = match_info.in_mode.as_deref()
        && in_mode != "Straight"
    {
        rules.push(format!("{in_mode}-In"));
    }
    if let Some(out_mode) = match_info.out_mode.as_deref()
        && out_mode != "Straight"
    {
        rules.push(format!("{out_mode}-Out"));
    }
    if match_info.max_rounds > 0
        && let Some(turn) = &snapshot.turn
    {
        rules.push(format!(
            "Runde: {}/{}",
            turn.current_round, match_info.max_rounds
        ));
    }
    vm.details.gamerules.html = rule_lines(&rules);

    if let Some(current) = snapshot.current_player() {
        vm.focus.player_name.text = current.name.clone();
        vm.focus.score.text = current.score.to_string();
    }

    vm.darts.turn_info = snapshot.turn.clone();
    vm.is_busted = snapshot.turn.as_ref().is_some_and(|t| t.busted);

    vm
}

/// Join rule lines with line breaks, in the fixed order they were pushed.
#[must_use]
pub fn rule_lines(rules: &[String]) -> Markup {
    html! {
        @for (idx, rule) in rules.iter().enumerate() {
            @if idx > 0 { br; }
            (rule)
        }
    }
}
