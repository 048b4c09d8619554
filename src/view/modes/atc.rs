use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{format_atc_target, setting_rows, table_from};
use crate::view::table::{ColumnId, ColumnSpec, format_hit_rate, format_overall_hit_rate};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let match_info = snapshot.match_info.as_ref();
    let use_db = match_info.is_some_and(|m| m.use_db);
    let scoring_mode = match_info.and_then(|m| m.scoring_mode.as_deref());

    vm.details.gamemode.text = "Around the Clock".to_string();

    let order = match_info.and_then(|m| m.order.as_deref()).unwrap_or("-");
    let mode_label = scoring_mode.unwrap_or("-");
    let mut rules: Vec<(&str, String)> = vec![
        ("Reihenfolge", order.to_string()),
        ("Modus", mode_label.to_string()),
    ];
    if let Some(m) = match_info
        && m.hits_per_target > 0
    {
        rules.push(("Hits pro Ziel", m.hits_per_target.to_string()));
    }
    let rule_refs: Vec<(&str, &str)> = rules
        .iter()
        .map(|(label, value)| (*label, value.as_str()))
        .collect();
    vm.details.gamerules.html = setting_rows(&rule_refs);

    let current_target = snapshot
        .current_player()
        .and_then(|p| p.current_target.as_deref());
    vm.focus.score.text = format_atc_target(current_target, scoring_mode);
    vm.focus.graphic.visible = true;
    vm.focus.graphic.target = current_target.map(str::to_string);
    vm.focus.graphic.mode = scoring_mode.unwrap_or("Single").to_string();

    let mut overrides = vec![ColumnSpec::text("target", move |p| {
        format_atc_target(p.current_target.as_deref(), scoring_mode)
    })];
    if use_db {
        overrides.push(ColumnSpec::text("avg-g", |p| {
            format_overall_hit_rate(p.overall_hit_rate, 0)
        }));
    }
    overrides.push(ColumnSpec::text("match-hr", |p| {
        format_hit_rate(p.match_hit_rate, 0)
    }));
    overrides.push(ColumnSpec::text("leg-hr", |p| {
        format_hit_rate(p.leg_hit_rate, 0)
    }));

    let mut headers: Vec<(ColumnId, &str)> = vec![
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
        ("target", "Ziel"),
    ];
    if use_db {
        headers.push(("avg-g", "Quote Gesamt"));
    }
    headers.push(("match-hr", "Quote Match"));
    headers.push(("leg-hr", "Quote Leg"));

    let content = table_from(snapshot, req, "atc-table", &headers, overrides);

    ModeView { vm, content }
}
