use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{setting_rows, table_from, turn_target_text};
use crate::view::table::{ColumnSpec, ColumnId};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let match_info = snapshot.match_info.as_ref();

    let order = match_info.and_then(|m| m.order.as_deref()).unwrap_or("-");
    let scoring_mode = match_info
        .and_then(|m| m.scoring_mode.as_deref())
        .unwrap_or("-");
    let scoring_label = if scoring_mode == "Allow Negative Score" {
        "Negativ erl."
    } else {
        scoring_mode
    };
    vm.details.gamerules.html =
        setting_rows(&[("Reihenfolge", order), ("Modus", scoring_label)]);

    // The target is always a double ("D1".."D20"); the drawing wants the
    // bare wedge number with the double ring highlighted.
    let target = turn_target_text(snapshot);
    vm.focus.score.text = target.clone();
    vm.focus.graphic.visible = true;
    vm.focus.graphic.target = Some(target.replace('D', ""));
    vm.focus.graphic.mode = "Double".to_string();

    let turn_target = turn_target_text(snapshot);
    let overrides = vec![ColumnSpec::text("target", move |_| turn_target.clone())];
    let headers: [(ColumnId, &str); 4] = [
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
        ("target", "Ziel"),
    ];
    let content = table_from(snapshot, req, "bobs27-table", &headers, overrides);

    ModeView { vm, content }
}
