use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{setting_rows, table_from, turn_target_text};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    vm.details.gamemode.text = "Round the World".to_string();

    let order = snapshot
        .match_info
        .as_ref()
        .and_then(|m| m.order.as_deref())
        .unwrap_or("-");
    vm.details.gamerules.html = setting_rows(&[("Reihenfolge", order)]);

    let target = turn_target_text(snapshot);
    vm.focus.score.text = target.clone();
    vm.focus.graphic.visible = true;
    vm.focus.graphic.target = Some(target);

    let headers = [
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    let content = table_from(snapshot, req, "rtw-table", &headers, Vec::new());

    ModeView { vm, content }
}
