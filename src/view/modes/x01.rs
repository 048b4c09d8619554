use crate::controller::request::{DisplayRequest, Layout};
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{cards_from, table_from};
use crate::view::table::{ColumnId, ColumnSpec, format_average, overall_average_html};

fn override_columns(use_db: bool) -> Vec<ColumnSpec<'static>> {
    let mut overrides = Vec::new();
    if use_db {
        overrides.push(ColumnSpec::markup("avg-g", |p| {
            overall_average_html(p.overall_average, p, true)
        }));
    }
    overrides.push(ColumnSpec::text("avg-m", |p| format_average(p.match_average)));
    overrides.push(ColumnSpec::text("avg-l", |p| format_average(p.leg_average)));
    overrides
}

fn headers(use_db: bool) -> Vec<(ColumnId, &'static str)> {
    let mut headers = vec![
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    if use_db {
        headers.push(("avg-g", "ø Gesamt"));
    }
    headers.push(("avg-m", "ø Match"));
    headers.push(("avg-l", "ø Leg"));
    headers
}

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let use_db = snapshot.match_info.as_ref().is_some_and(|m| m.use_db);
    if let Some(match_info) = &snapshot.match_info {
        vm.details.gamemode.text = format!("X{}", match_info.start_score);
    }
    vm.darts.checkout_guide = snapshot.checkout_guide.clone();

    let content = match req.layout {
        Layout::Table => table_from(
            snapshot,
            req,
            "x01-table",
            &headers(use_db),
            override_columns(use_db),
        ),
        Layout::Cards => cards_from(snapshot, req, "x01-cards", override_columns(use_db)),
    };

    ModeView { vm, content }
}
