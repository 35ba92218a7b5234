// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Rejecting requests move selection cannot handle
// - Extracting Bot instance from Rocket's managed state
// - Serializing responses

use log::warn;
use rocket::fairing::AdHoc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket};
use serde_json::Value;

use crate::bot::Bot;
use crate::types::GameState;

/// Builds the Rocket instance serving `bot`
pub fn build(bot: Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/sawtooth-snake");
            })
        }))
        .mount("/", routes![index, ping, start, get_move, end])
}

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /ping endpoint
/// Liveness check used by the legacy engine
#[post("/ping")]
pub fn ping() -> &'static str {
    "pong"
}

/// POST /start endpoint
/// Called when a game starts, answers with the snake's appearance
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameState>) -> Json<Value> {
    Json(bot.start(
        &start_req.game,
        &start_req.turn,
        &start_req.board,
        &start_req.you,
    ))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub async fn get_move(
    bot: &rocket::State<Bot>,
    move_req: Json<GameState>,
) -> Result<Json<Value>, Status> {
    if let Err(e) = move_req.validate() {
        warn!("Turn {}: rejecting move request: {}", move_req.turn, e);
        return Err(Status::BadRequest);
    }

    let response = bot.get_move(
        &move_req.game,
        &move_req.turn,
        &move_req.board,
        &move_req.you,
    );

    Ok(Json(response))
}

/// POST /end endpoint
/// Called when a game ends - allows cleanup and logging
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<GameState>) -> Status {
    bot.end(&end_req.game, &end_req.turn, &end_req.board, &end_req.you);

    Status::Ok
}
