use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{table_from, turn_target_text};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    let target = turn_target_text(snapshot);
    vm.focus.score.text = target.clone();
    vm.focus.graphic.visible = true;
    vm.focus.graphic.target = Some(target);

    let headers = [
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    let content = table_from(snapshot, req, "shanghai-table", &headers, Vec::new());

    ModeView { vm, content }
}
