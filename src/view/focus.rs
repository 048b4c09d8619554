use maud::{Markup, html};

use crate::model::{FocusViewModel, Suggestion, Turn};
use crate::view::board::{BoardStyle, render_target};
use crate::view::table::dart_display_name;

/// Render the upper info area from the view model: game details, focus
/// player/score, the target drawing and the darts display.
#[must_use]
pub fn render_focus_area(vm: &FocusViewModel, style: &BoardStyle) -> Markup {
    html! {
        div id="info-area__details" {
            @if vm.details.gamemode.visible {
                div id="info-area__details-gamemode" { (vm.details.gamemode.text) }
            }
            @if vm.details.gamerules.visible {
                div id="info-area__details-gamerules" { (vm.details.gamerules.html) }
            }
        }
        div id="info-area__focus" {
            @if vm.focus.player_name.visible {
                div id="info-area__focus-player-name" { (vm.focus.player_name.text) }
            }
            @if vm.focus.score.visible {
                div id="info-area__focus-score" { (vm.focus.score.text) }
            }
            @if vm.focus.score_label.visible {
                div id="info-area__focus-score-label" { (vm.focus.score_label.text) }
            }
            div id="info-area__focus-graphic" {
                @if vm.focus.graphic.visible {
                    @if let Some(target) = &vm.focus.graphic.target {
                        (render_target(target, &vm.focus.graphic.mode, style))
                    }
                }
            }
        }
        @if vm.darts.visible {
            div id="info-area__darts" {
                (render_darts_display(vm.darts.turn_info.as_ref(), &vm.darts.checkout_guide))
            }
        }
        @if vm.is_busted {
            div id="bust-overlay-container" {
                div id="bust-overlay-left" { "BUST" }
                div id="bust-overlay-right" { "BUST" }
            }
        }
    }
}

fn arrow_slot() -> Markup {
    html! {
        div class="dart" {
            img class="checkout-guide-arrow" src="/static/images/Pfeil.svg";
        }
    }
}

/// Three dart slots: thrown darts first, then checkout-guide suggestions,
/// then empty arrow placeholders.
#[must_use]
pub fn render_darts_display(turn: Option<&Turn>, checkout_guide: &[Suggestion]) -> Markup {
    let thrown: &[_] = turn.map_or(&[], |t| t.throws.as_slice());
    html! {
        @for slot in 0..3usize {
            @if let Some(dart) = thrown.get(slot) {
                div class="dart dart-thrown" {
                    div class="dart-value" { (dart_display_name(&dart.segment.name)) }
                }
            } @else if let Some(guide) = checkout_guide.get(slot - thrown.len()) {
                @if guide.is_image {
                    (arrow_slot())
                } @else {
                    div class="dart dart-checkout-guide" {
                        div class="dart-value" { (dart_display_name(&guide.name)) }
                    }
                }
            } @else {
                (arrow_slot())
            }
        }
    }
}
