use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use log::info;
use std::sync::RwLock;

use rusty_darts::args;
use rusty_darts::controller::events;
use rusty_darts::state::DisplayState;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = args::args_checks();
    let bind = (args.bind.clone(), args.port);

    let state = Data::new(RwLock::new(DisplayState::default()));
    let args_for_web = args.clone();

    info!("starting scoreboard server on {}:{}", args.bind, args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(events::index))
            .route("/scoreboard", web::get().to(events::scoreboard))
            .route("/events/connected", web::post().to(events::connected))
            .route("/events/disconnected", web::post().to(events::disconnected))
            .route("/events/state", web::post().to(events::state_update))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
