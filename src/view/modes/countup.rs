use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::table_from;
use crate::view::table::{ColumnId, ColumnSpec, format_average_or_zero, overall_average_html};

pub fn view(snapshot: &Snapshot, vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let use_db = snapshot.match_info.as_ref().is_some_and(|m| m.use_db);

    let mut overrides = Vec::new();
    if use_db {
        overrides.push(ColumnSpec::markup("avg-g", |p| {
            overall_average_html(p.overall_ppr, p, false)
        }));
    }
    overrides.push(ColumnSpec::text("leg-avg", |p| {
        format_average_or_zero(p.leg_average)
    }));
    overrides.push(ColumnSpec::text("match-avg", |p| {
        format_average_or_zero(p.match_average)
    }));

    let mut headers: Vec<(ColumnId, &str)> = vec![
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    if use_db {
        headers.push(("avg-g", "ø Gesamt"));
    }
    headers.push(("leg-avg", "ø Leg"));
    headers.push(("match-avg", "ø Match"));

    let content = table_from(snapshot, req, "countup-table", &headers, overrides);

    ModeView { vm, content }
}
