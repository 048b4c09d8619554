use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::table::{ColumnSpec, project, render_game_table};

/// The starting-player decider shown before the actual match: no legs/sets
/// badge, no darts row, no mode label.
pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    vm.focus.score.text = "Ausbullen".to_string();
    vm.darts.visible = false;
    vm.details.gamemode.visible = false;

    let columns = vec![
        ColumnSpec::text("player-name", |p| p.name.clone()),
        ColumnSpec::text("score", |p| p.score.to_string()),
    ];
    let rows = project(
        &snapshot.players,
        snapshot.current_player_index,
        &columns,
        req.order,
    );
    let headers = [("player-name", "Spieler"), ("score", "Punkte")];
    let content = render_game_table("bull-off-table", &headers, &rows);

    ModeView { vm, content }
}
