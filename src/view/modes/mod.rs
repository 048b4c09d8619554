pub mod atc;
pub mod bermuda;
pub mod bobs27;
pub mod bull_off;
pub mod countup;
pub mod cricket;
pub mod gotcha;
pub mod random_checkout;
pub mod rtw;
pub mod segment_training;
pub mod shanghai;
pub mod x01;

use maud::{Markup, html};

use crate::controller::request::DisplayRequest;
use crate::model::Snapshot;
use crate::view::table::{
    ColumnId, ColumnSpec, default_card_columns, default_table_columns, merge_columns, project,
    render_game_table, render_player_cards,
};

/// Merge overrides into the default table columns, project the players and
/// render the table.
#[must_use]
pub fn table_from<'a>(
    snapshot: &'a Snapshot,
    req: &DisplayRequest,
    table_id: &str,
    headers: &[(ColumnId, &str)],
    overrides: Vec<ColumnSpec<'a>>,
) -> Markup {
    let columns = merge_columns(default_table_columns(snapshot), overrides);
    let rows = project(
        &snapshot.players,
        snapshot.current_player_index,
        &columns,
        req.order,
    );
    render_game_table(table_id, headers, &rows)
}

/// Same as [`table_from`] for the card layout.
#[must_use]
pub fn cards_from<'a>(
    snapshot: &'a Snapshot,
    req: &DisplayRequest,
    container_id: &str,
    overrides: Vec<ColumnSpec<'a>>,
) -> Markup {
    let columns = merge_columns(default_card_columns(snapshot), overrides);
    let rows = project(
        &snapshot.players,
        snapshot.current_player_index,
        &columns,
        req.order,
    );
    render_player_cards(container_id, &rows)
}

/// Label/value rows for the rule summary of the training-style modes.
#[must_use]
pub fn setting_rows(rows: &[(&str, &str)]) -> Markup {
    html! {
        @for (label, value) in rows {
            div class="setting-row" {
                span class="setting-label" { (label) ":" }
                span class="setting-value" { (value) }
            }
        }
    }
}

/// Display text for an Around-the-Clock target: T/D/OS prefix per scoring
/// mode, the bull unprefixed, "?" when no target exists yet.
#[must_use]
pub fn format_atc_target(target: Option<&str>, scoring_mode: Option<&str>) -> String {
    let Some(target) = target.filter(|t| !t.is_empty()) else {
        return "?".to_string();
    };
    if target == "Bull" || target == "?" {
        return target.to_string();
    }
    match scoring_mode {
        Some("Triple") => format!("T{target}"),
        Some("Double") => format!("D{target}"),
        Some("Outer Single") => format!("OS{target}"),
        _ => target.to_string(),
    }
}

/// Display text for a structured segment target ("T20", "Bullseye", ...).
#[must_use]
pub fn segment_display_name(segment: &str, mode: &str) -> String {
    if segment == "Bull" {
        return match mode {
            "Double" | "Triple" => "Bullseye".to_string(),
            _ => "Bull".to_string(),
        };
    }
    match mode {
        "Triple" => format!("T{segment}"),
        "Double" => format!("D{segment}"),
        "Outer Single" => format!("OS{segment}"),
        _ => segment.to_string(),
    }
}

/// The plain text of the current turn target, empty when no turn exists.
#[must_use]
pub fn turn_target_text(snapshot: &Snapshot) -> String {
    snapshot
        .turn
        .as_ref()
        .map(|t| t.target.text().to_string())
        .unwrap_or_default()
}
