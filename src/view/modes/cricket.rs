use maud::{Markup, html};

use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Player, Snapshot};
use crate::router::ModeView;
use crate::view::modes::table_from;
use crate::view::table::{ColumnId, ColumnSpec, format_average, overall_average_html};

const CRICKET_TARGETS: [&str; 7] = ["15", "16", "17", "18", "19", "20", "Bull"];
const TACTICS_TARGETS: [&str; 12] = [
    "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "Bull",
];

/// Hit marks are capped at three, the point where a target closes.
fn hit_cell_html(player: &Player, target: &str) -> Markup {
    let hits = player.hits.get(target).copied().unwrap_or(0).min(3);
    html! {
        div class=(format!("cricket-hit-mark cricket-hit-{hits}")) {}
    }
}

/// Cricket and Tactics share this builder; the Tactics layout is chosen by
/// the target list the match carries.
pub fn view(snapshot: &Snapshot, vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let match_info = snapshot.match_info.as_ref();
    let is_tactics = match_info.is_some_and(|m| m.targets.len() > 7);
    let use_db = match_info.is_some_and(|m| m.use_db);

    let targets: &[&'static str] = if is_tactics {
        &TACTICS_TARGETS
    } else {
        &CRICKET_TARGETS
    };

    let mut overrides: Vec<ColumnSpec<'_>> = targets
        .iter()
        .map(|target| ColumnSpec::markup(hit_selector(target), move |p| hit_cell_html(p, target)))
        .collect();
    overrides.push(ColumnSpec::text("mpr", |p| format_average(p.mpr)));
    if use_db {
        overrides.push(ColumnSpec::markup("avg-g", |p| {
            overall_average_html(p.overall_mpr, p, false)
        }));
    }

    let mut headers: Vec<(ColumnId, &str)> = vec![
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    for target in targets {
        headers.push((hit_selector(target), *target));
    }
    headers.push(("mpr", "MPR"));
    if use_db {
        headers.push(("avg-g", "ø Gesamt"));
    }

    let table_id = if is_tactics {
        "tactics-table"
    } else {
        "cricket-table"
    };
    let content = table_from(snapshot, req, table_id, &headers, overrides);

    ModeView { vm, content }
}

fn hit_selector(target: &str) -> ColumnId {
    match target {
        "10" => "hits-10",
        "11" => "hits-11",
        "12" => "hits-12",
        "13" => "hits-13",
        "14" => "hits-14",
        "15" => "hits-15",
        "16" => "hits-16",
        "17" => "hits-17",
        "18" => "hits-18",
        "19" => "hits-19",
        "20" => "hits-20",
        _ => "hits-bull",
    }
}
