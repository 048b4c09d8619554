use actix_web::{HttpResponse, Responder, web};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::args::Args;
use crate::controller::request::parse_display_request;
use crate::error::AppError;
use crate::model::Snapshot;
use crate::state::{DisplayState, InboundEvent};
use crate::view::board::BoardStyle;
use crate::view::display::render_display;
use crate::view::index::render_index_template;

pub type SharedState = web::Data<RwLock<DisplayState>>;

fn apply(state: &SharedState, event: InboundEvent) -> Result<(), AppError> {
    let mut guard = state
        .write()
        .map_err(|e| AppError::Lock(e.to_string()))?;
    guard.apply(event);
    Ok(())
}

#[derive(Deserialize)]
pub struct ConnectedPayload {
    #[serde(default)]
    pub modes: Vec<String>,
}

/// `connectivity_established`: the backend is reachable again and announces
/// the selectable game modes.
pub async fn connected(
    state: SharedState,
    payload: web::Json<ConnectedPayload>,
) -> Result<HttpResponse, AppError> {
    apply(
        &state,
        InboundEvent::Connected {
            modes: payload.into_inner().modes,
        },
    )?;
    Ok(HttpResponse::Ok().finish())
}

/// `connectivity_lost`: drop cached state and fall back to the offline
/// presentation until the next connect.
pub async fn disconnected(state: SharedState) -> Result<HttpResponse, AppError> {
    apply(&state, InboundEvent::Disconnected)?;
    Ok(HttpResponse::Ok().finish())
}

/// `state_update`: the sole trigger for the full pipeline. One snapshot is
/// processed to completion before the next is accepted (the write lock
/// serializes delivery order).
pub async fn state_update(
    state: SharedState,
    snapshot: web::Json<Snapshot>,
) -> Result<HttpResponse, AppError> {
    let snapshot = snapshot.into_inner();
    debug!(
        "state update: mode={:?} game_state={:?} players={}",
        snapshot.game_mode(),
        snapshot.game_state,
        snapshot.players.len()
    );
    apply(&state, InboundEvent::StateUpdate(snapshot))?;
    Ok(HttpResponse::Ok().finish())
}

/// Render the scoreboard for the htmx poll.
pub async fn scoreboard(
    state: SharedState,
    query: web::Query<HashMap<String, String>>,
    args: web::Data<Args>,
) -> Result<HttpResponse, AppError> {
    let req = parse_display_request(&query, &args);
    let style = BoardStyle::default();
    let guard = state
        .read()
        .map_err(|e| AppError::Lock(e.to_string()))?;
    let markup = render_display(&guard, &req, &style);
    Ok(HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string()))
}

pub async fn index() -> impl Responder {
    let markup = render_index_template("Dart Scoreboard");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
