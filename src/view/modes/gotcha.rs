use crate::controller::request::{DisplayRequest, Layout};
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::{cards_from, table_from};

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    if let Some(match_info) = &snapshot.match_info {
        vm.details.gamemode.text =
            format!("{} {}", match_info.game_mode, match_info.start_score);
    }

    let headers = [
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    let content = match req.layout {
        Layout::Table => table_from(snapshot, req, "gotcha-table", &headers, Vec::new()),
        Layout::Cards => cards_from(snapshot, req, "gotcha-cards", Vec::new()),
    };

    ModeView { vm, content }
}
