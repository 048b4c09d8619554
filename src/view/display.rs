use maud::{Markup, html};

use crate::controller::request::DisplayRequest;
use crate::model::{Snapshot, base_view_model};
use crate::notify::{self, OverlayState};
use crate::router::{GameMode, ModeView};
use crate::state::DisplayState;
use crate::view::board::BoardStyle;
use crate::view::focus::render_focus_area;
use crate::view::overlay::{
    render_offline, render_overlay, render_unsupported, render_waiting,
};

/// Render the whole scoreboard from the current display state. Pure given
/// the state: the same state and request always produce the same markup.
#[must_use]
pub fn render_display(state: &DisplayState, req: &DisplayRequest, style: &BoardStyle) -> Markup {
    if !state.cache.reachable() {
        return render_offline();
    }

    let Some(snapshot) = state.cache.get() else {
        return render_waiting(&state.available_modes);
    };
    if snapshot.players.is_empty() {
        return render_waiting(&state.available_modes);
    }

    let notification = notify::evaluate(snapshot);

    html! {
        div id="main-container" {
            div id="info-area" {
                @match &notification.overlay {
                    OverlayState::Live => {
                        div id="info-area__content" {
                            (render_live(snapshot, req, style))
                        }
                    }
                    overlay => { (render_overlay(overlay)) }
                }
            }
        }
        canvas id="fireworks-canvas"
            class=[state.fireworks.is_running().then_some("active")] {}
        @if let Some(last_update) = state.cache.last_update() {
            footer id="last-update" {
                (format!("Stand: {}", last_update.format("%H:%M:%S")))
            }
        }
    }
}

/// The live view: focus area plus the container set, with exactly the
/// routed mode's container visible. An overlay cycle never reaches this.
fn render_live(snapshot: &Snapshot, req: &DisplayRequest, style: &BoardStyle) -> Markup {
    let Some(mode) = snapshot.game_mode().and_then(GameMode::from_id) else {
        return render_unsupported(snapshot.game_mode().unwrap_or("?"));
    };

    let vm = base_view_model(snapshot);
    let ModeView { vm, content } = mode.build(snapshot, vm, req);

    html! {
        (render_focus_area(&vm, style))
        div id="game-specific-area" {
            @for registered in GameMode::ALL {
                div id=(registered.container_id())
                    class="game-view"
                    hidden[registered != mode] {
                    @if registered == mode { (content) }
                }
            }
        }
    }
}
