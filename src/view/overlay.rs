use maud::{Markup, html};

use crate::notify::{OverlayState, WinKind};

/// Full-screen message replacing the live view: winner, tie or a
/// mode-specific end state. `Live` renders nothing.
#[must_use]
pub fn render_overlay(overlay: &OverlayState) -> Markup {
    match overlay {
        OverlayState::Live => html! {},
        OverlayState::Winner { player, kind } => {
            let overlay_class = if *kind == WinKind::Set {
                "set-win-bg"
            } else {
                ""
            };
            html! {
                div id="info-area__overlay--winner" class=(overlay_class) {
                    div id="info-area__overlay-title" {
                        span class="winner-name" { (player) }
                    }
                    div id="info-area__overlay-text" class=(kind.css_class()) {
                        "gewinnt das " (kind.label())
                    }
                }
            }
        }
        OverlayState::Tie => html! {
            div id="info-area__overlay--winner" class="tie-bg" {
                div id="info-area__overlay-title" { "Unentschieden!" }
                div id="info-area__overlay-text" { "Das Ausbullen wird wiederholt." }
            }
        },
        OverlayState::ModeEnd { title, message } => html! {
            div id="info-area__overlay--winner" {
                div id="info-area__overlay-title" { (title) }
                div id="info-area__overlay-text" { (message) }
            }
        },
    }
}

/// The start screen: connection status plus the selectable-mode list.
#[must_use]
pub fn render_initial_view(status: &str, modes: &[String]) -> Markup {
    html! {
        div id="initial-view" {
            div id="initial-view__status" { (status) }
            @if !modes.is_empty() {
                div id="initial-view__modes" {
                    span id="initial-view__modes-label" { "Verfügbare Modi:" }
                    div id="initial-view__modes-list" {
                        @for mode in modes {
                            span class="game-mode-item" { (mode) }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_offline() -> Markup {
    render_initial_view("Verbindung zum Backend verloren. Versuche Neuverbindung...", &[])
}

#[must_use]
pub fn render_waiting(modes: &[String]) -> Markup {
    render_initial_view("Verbunden! Warte auf Match...", modes)
}

#[must_use]
pub fn render_unsupported(mode: &str) -> Markup {
    html! {
        div id="initial-view__status" class="mode-unsupported" {
            (format!("Spielmodus '{mode}' wird nicht unterstützt."))
        }
    }
}
