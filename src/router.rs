use maud::Markup;

use crate::controller::request::DisplayRequest;
use crate::model::{FocusViewModel, Snapshot};
use crate::view::modes;

/// The closed set of game modes the display can render. Adding a mode means
/// adding a variant here, not scattering string matches across call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    X01,
    /// Also handles the "Tactics" identifier; the two are distinguished by
    /// the cardinality of `match.targets`.
    Cricket,
    Bermuda,
    Shanghai,
    Gotcha,
    Atc,
    Rtw,
    RandomCheckout,
    BullOff,
    CountUp,
    SegmentTraining,
    Bobs27,
}

/// What a mode builder produces: the refined focus view model and the
/// content of the mode's container.
pub struct ModeView {
    pub vm: FocusViewModel,
    pub content: Markup,
}

impl GameMode {
    pub const ALL: [GameMode; 12] = [
        GameMode::X01,
        GameMode::Cricket,
        GameMode::Bermuda,
        GameMode::Shanghai,
        GameMode::Gotcha,
        GameMode::Atc,
        GameMode::Rtw,
        GameMode::RandomCheckout,
        GameMode::BullOff,
        GameMode::CountUp,
        GameMode::SegmentTraining,
        GameMode::Bobs27,
    ];

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "X01" => Some(GameMode::X01),
            "Cricket" | "Tactics" => Some(GameMode::Cricket),
            "Bermuda" => Some(GameMode::Bermuda),
            "Shanghai" => Some(GameMode::Shanghai),
            "Gotcha" => Some(GameMode::Gotcha),
            "ATC" => Some(GameMode::Atc),
            "RTW" => Some(GameMode::Rtw),
            "Random Checkout" => Some(GameMode::RandomCheckout),
            "Bull-off" => Some(GameMode::BullOff),
            "CountUp" => Some(GameMode::CountUp),
            "Segment Training" => Some(GameMode::SegmentTraining),
            "Bob's 27" => Some(GameMode::Bobs27),
            _ => None,
        }
    }

    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            GameMode::X01 => "x01-view-container",
            GameMode::Cricket => "cricket-view-container",
            GameMode::Bermuda => "bermuda-view-container",
            GameMode::Shanghai => "shanghai-view-container",
            GameMode::Gotcha => "gotcha-view-container",
            GameMode::Atc => "atc-view-container",
            GameMode::Rtw => "rtw-view-container",
            GameMode::RandomCheckout => "random-checkout-view-container",
            GameMode::BullOff => "bull-off-view-container",
            GameMode::CountUp => "countup-view-container",
            GameMode::SegmentTraining => "segment-training-view-container",
            GameMode::Bobs27 => "bobs27-view-container",
        }
    }

    /// Invoke the mode's view builder with the base view model.
    #[must_use]
    pub fn build(self, snapshot: &Snapshot, vm: FocusViewModel, req: &DisplayRequest) -> ModeView {
        match self {
            GameMode::X01 => modes::x01::view(snapshot, vm, req),
            GameMode::Cricket => modes::cricket::view(snapshot, vm, req),
            GameMode::Bermuda => modes::bermuda::view(snapshot, vm, req),
            GameMode::Shanghai => modes::shanghai::view(snapshot, vm, req),
            GameMode::Gotcha => modes::gotcha::view(snapshot, vm, req),
            GameMode::Atc => modes::atc::view(snapshot, vm, req),
            GameMode::Rtw => modes::rtw::view(snapshot, vm, req),
            GameMode::RandomCheckout => modes::random_checkout::view(snapshot, vm, req),
            GameMode::BullOff => modes::bull_off::view(snapshot, vm, req),
            GameMode::CountUp => modes::countup::view(snapshot, vm, req),
            GameMode::SegmentTraining => modes::segment_training::view(snapshot, vm, req),
            GameMode::Bobs27 => modes::bobs27::view(snapshot, vm, req),
        }
    }
}
