use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::router::ModeView;
use crate::view::modes::table_from;

pub fn view(snapshot: &Snapshot, mut vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
    vm.darts.checkout_guide = snapshot.checkout_guide.clone();

    let headers = [
        ("player-name", "Spieler"),
        ("score", "Punkte"),
        ("legs-sets", "Legs"),
    ];
    let content = table_from(snapshot, req, "random-checkout-table", &headers, Vec::new());

    ModeView { vm, content }
}
