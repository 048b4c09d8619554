use maud::html;

use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{segment_display_name, table_from};
use crate::view::table::{ColumnId, ColumnSpec, format_hit_rate, format_overall_hit_rate};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let match_info = snapshot.match_info.as_ref();
    let use_db = match_info.is_some_and(|m| m.use_db);

    let (segment, mode) = snapshot
        .turn
        .as_ref()
        .map_or(("", "Full"), |t| t.target.segment_and_mode());

    if let Some(m) = match_info {
        let unit = if m.ends_after_type.as_deref() == Some("hits") {
            "Treffer"
        } else {
            "Darts"
        };
        let ends_after = format!("Ziel: {} {unit}", m.ends_after_value);
        vm.details.gamerules.html = html! {
            (format!("Segment: {segment} ({mode})"))
            br;
            (ends_after)
        };
    }

    vm.focus.score.text = segment_display_name(segment, mode);
    vm.focus.graphic.visible = true;
    vm.focus.graphic.target = Some(segment.to_string());
    vm.focus.graphic.mode = mode.to_string();

    let mut overrides = vec![ColumnSpec::text("darts-thrown", |p| {
        p.darts_thrown_leg.unwrap_or(0).to_string()
    })];
    if use_db {
        overrides.push(ColumnSpec::text("avg-g", |p| {
            format_overall_hit_rate(p.overall_hit_rate, 1)
        }));
    }
    overrides.push(ColumnSpec::text("leg-hitrate", |p| {
        format_hit_rate(p.leg_hit_rate, 1)
    }));
    overrides.push(ColumnSpec::text("match-hitrate", |p| {
        format_hit_rate(p.match_hit_rate, 1)
    }));

    let mut headers: Vec<(ColumnId, &str)> = vec![
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
        ("darts-thrown", "Darts"),
    ];
    if use_db {
        headers.push(("avg-g", "Quote Gesamt"));
    }
    headers.push(("leg-hitrate", "Quote Leg"));
    headers.push(("match-hitrate", "Quote Match"));

    let content = table_from(snapshot, req, "segment-training-table", &headers, overrides);

    ModeView { vm, content }
}
