use ahash::RandomState;
use maud::{Markup, html};
use std::collections::HashMap;

use crate::model::{Player, PlayerType, Snapshot};

/// Logical column id; the css class of a cell is derived from it per view
/// (table cell vs. card field).
pub type ColumnId = &'static str;

/// How one cell is produced from a player: plain text or markup. Exactly one
/// of the two, never a mix.
pub enum CellRender<'a> {
    Text(Box<dyn Fn(&Player) -> String + 'a>),
    Markup(Box<dyn Fn(&Player) -> Markup + 'a>),
}

pub struct ColumnSpec<'a> {
    pub selector: ColumnId,
    pub render: CellRender<'a>,
}

impl<'a> ColumnSpec<'a> {
    pub fn text(selector: ColumnId, f: impl Fn(&Player) -> String + 'a) -> Self {
        Self {
            selector,
            render: CellRender::Text(Box::new(f)),
        }
    }

    pub fn markup(selector: ColumnId, f: impl Fn(&Player) -> Markup + 'a) -> Self {
        Self {
            selector,
            render: CellRender::Markup(Box::new(f)),
        }
    }
}

/// Default columns every game table starts from: name, score, legs/sets.
#[must_use]
pub fn default_table_columns<'a>(snapshot: &'a Snapshot) -> Vec<ColumnSpec<'a>> {
    let sets_to_win = snapshot.match_info.as_ref().map_or(0, |m| m.sets_to_win);
    vec![
        ColumnSpec::text("player-name", |p| p.name.clone()),
        ColumnSpec::text("score", |p| p.score.to_string()),
        ColumnSpec::markup("legs-sets", move |p| legs_sets_html(p, sets_to_win)),
    ]
}

/// Default fields of a player card; mirrors the table defaults.
#[must_use]
pub fn default_card_columns<'a>(snapshot: &'a Snapshot) -> Vec<ColumnSpec<'a>> {
    default_table_columns(snapshot)
}

/// Merge overrides into a default column set. An override with a known
/// selector replaces the default entry wholesale; unknown selectors are
/// appended. The default order is preserved.
#[must_use]
pub fn merge_columns<'a>(
    defaults: Vec<ColumnSpec<'a>>,
    overrides: Vec<ColumnSpec<'a>>,
) -> Vec<ColumnSpec<'a>> {
    let mut merged = defaults;
    let mut index: HashMap<ColumnId, usize, RandomState> = merged
        .iter()
        .enumerate()
        .map(|(idx, col)| (col.selector, idx))
        .collect();
    for over in overrides {
        if let Some(&idx) = index.get(over.selector) {
            merged[idx] = over;
        } else {
            index.insert(over.selector, merged.len());
            merged.push(over);
        }
    }
    merged
}

/// Which player ordering a render uses. The default sorts by the stable
/// per-match `display_order` whenever the first player carries one; the two
/// overrides force one behavior regardless of the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderPolicy {
    #[default]
    Stable,
    ForceStable,
    ServerOrder,
}

#[derive(Clone, Debug)]
pub struct RowCell {
    pub selector: ColumnId,
    pub content: Markup,
}

/// A materialized row/card, consumable by the markup step and by tests.
#[derive(Clone, Debug)]
pub struct PlayerRow {
    pub name: String,
    pub player_type: PlayerType,
    pub active: bool,
    pub cells: Vec<RowCell>,
}

/// Evaluate every column per player and mark the row of the player at
/// `current_player_index` active. The active player is resolved by name
/// before ordering, since ordering may move them. The snapshot itself is
/// never reordered.
#[must_use]
pub fn project(
    players: &[Player],
    current_player_index: usize,
    columns: &[ColumnSpec<'_>],
    policy: OrderPolicy,
) -> Vec<PlayerRow> {
    let active_name = players.get(current_player_index).map(|p| p.name.as_str());

    let mut ordered: Vec<&Player> = players.iter().collect();
    let sort = match policy {
        OrderPolicy::ServerOrder => false,
        OrderPolicy::ForceStable => true,
        OrderPolicy::Stable => players.first().is_some_and(|p| p.display_order.is_some()),
    };
    if sort {
        // sort_by_key is stable: ties keep their server-delivered position.
        ordered.sort_by_key(|p| p.display_order.unwrap_or(i64::MAX));
    }

    ordered
        .into_iter()
        .map(|player| PlayerRow {
            name: player.name.clone(),
            player_type: player.player_type,
            active: active_name == Some(player.name.as_str()),
            cells: columns
                .iter()
                .map(|col| RowCell {
                    selector: col.selector,
                    content: match &col.render {
                        CellRender::Text(f) => html! { (f(player)) },
                        CellRender::Markup(f) => f(player),
                    },
                })
                .collect(),
        })
        .collect()
}

/// Render projected rows as a game table. Headers are given per mode and
/// must line up with the projected columns.
#[must_use]
pub fn render_game_table(
    table_id: &str,
    headers: &[(ColumnId, &str)],
    rows: &[PlayerRow],
) -> Markup {
    html! {
        table id=(table_id) class="game-table" {
            thead {
                tr {
                    @for (selector, label) in headers {
                        th class=(format!("game-table__header--{selector}")) { (label) }
                    }
                }
            }
            tbody {
                @for row in rows {
                    tr class=[row.active.then_some("active-player-row")] {
                        @for cell in &row.cells {
                            td class=(format!("game-table__cell--{}", cell.selector)) {
                                (cell.content)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Render projected rows as player cards.
#[must_use]
pub fn render_player_cards(container_id: &str, rows: &[PlayerRow]) -> Markup {
    html! {
        div id=(container_id) class="player-cards-section" {
            @for row in rows {
                div .player-card .player-card--is-active[row.active] {
                    span class="player-card__status-icon" { (player_status_icon(row.player_type)) }
                    @for cell in &row.cells {
                        div class=(format!("player-card__{}", cell.selector)) {
                            (cell.content)
                        }
                    }
                }
            }
        }
    }
}

/// Legs badge, plus the sets badge when the match is played in sets.
#[must_use]
pub fn legs_sets_html(player: &Player, sets_to_win: u32) -> Markup {
    html! {
        div class="legs-sets-container" {
            div class="legs-won" title="Gewonnene Legs" { (player.legs_won) }
            @if sets_to_win > 0 {
                div class="sets-won" title="Gewonnene Sets" { (player.sets_won) }
            }
        }
    }
}

/// Two decimals, or a dash for zero/absent values.
#[must_use]
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) if v > 0.0 => format!("{v:.2}"),
        _ => "-".to_string(),
    }
}

/// Two decimals with absent values counting as zero.
#[must_use]
pub fn format_average_or_zero(avg: Option<f64>) -> String {
    format!("{:.2}", avg.unwrap_or(0.0))
}

/// Average cell with an optional owner/registered icon next to the value.
#[must_use]
pub fn overall_average_html(value: Option<f64>, player: &Player, show_icons: bool) -> Markup {
    html! {
        div class="avg-cell-wrapper" {
            span class="avg-cell-text" { (format_average(value)) }
            @if show_icons { (player_status_icon(player.player_type)) }
        }
    }
}

#[must_use]
pub fn player_status_icon(player_type: PlayerType) -> Markup {
    html! {
        @match player_type {
            PlayerType::Owner => {
                img class="player-status-icon" src="/static/images/owner.svg" title="Board-Owner";
            }
            PlayerType::Registered => {
                img class="player-status-icon" src="/static/images/registered.svg" title="Registrierter Spieler";
            }
            PlayerType::Plain => {}
        }
    }
}

/// Hit rate as a percentage with the given number of decimals.
#[must_use]
pub fn format_hit_rate(rate: Option<f64>, decimals: usize) -> String {
    let v = rate.unwrap_or(0.0) * 100.0;
    format!("{v:.decimals$}%")
}

/// Overall hit rate as a percentage, dash when no history exists yet.
#[must_use]
pub fn format_overall_hit_rate(rate: Option<f64>, decimals: usize) -> String {
    match rate {
        Some(v) if v > 0.0 => format_hit_rate(Some(v), decimals),
        _ => "-".to_string(),
    }
}

/// Display name for a thrown or suggested dart: the inner bull gets an eye,
/// the outer bull its common name.
#[must_use]
pub fn dart_display_name(name: &str) -> &str {
    match name {
        "Bull" => "\u{1F441}",
        "25" => "Bull",
        other => other,
    }
}
