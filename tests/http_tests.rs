// Integration tests for the HTTP surface
//
// Runs the real Rocket instance through the local blocking client and checks
// each Battlesnake endpoint: metadata, legacy ping/start, moves, end, and the
// rejection of requests move selection cannot handle.

use rocket::http::{ContentType, Status};
use rocket::local::blocking::{Client, LocalResponse};
use sawtooth_snake::bot::Bot;
use sawtooth_snake::config::Config;
use sawtooth_snake::handler;
use serde_json::{json, Value};

fn client_with(config: Config) -> Client {
    Client::tracked(handler::build(Bot::new(config))).expect("valid rocket instance")
}

fn client() -> Client {
    client_with(Config::default_hardcoded())
}

fn game_state(width: i32, height: i32, body: Value) -> Value {
    json!({
        "game": { "id": "http-test", "ruleset": { "name": "standard" }, "timeout": 500 },
        "turn": 7,
        "board": {
            "height": height,
            "width": width,
            "food": [{ "x": 0, "y": 0 }],
            "snakes": [],
            "hazards": []
        },
        "you": {
            "id": "sawtooth",
            "name": "Sawtooth",
            "health": 80,
            "body": body,
            "latency": "12",
            "length": 3
        }
    })
}

fn post_move<'c>(client: &'c Client, payload: &Value) -> LocalResponse<'c> {
    client
        .post("/move")
        .header(ContentType::JSON)
        .body(payload.to_string())
        .dispatch()
}

#[test]
fn test_index_returns_metadata() {
    let client = client();
    let response = client.get("/").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Server"),
        Some("battlesnake/github/sawtooth-snake")
    );

    let body: Value = response.into_json().expect("index should return JSON");
    assert_eq!(body["apiversion"], "1");
    assert_eq!(body["color"], "#600AAA");
    assert_eq!(body["head"], "fang");
    assert_eq!(body["tail"], "sharp");
}

#[test]
fn test_ping_answers_pong() {
    let client = client();
    let response = client.post("/ping").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().as_deref(), Some("pong"));
}

#[test]
fn test_start_returns_appearance() {
    let client = client();
    let response = client
        .post("/start")
        .header(ContentType::JSON)
        .body(game_state(11, 11, json!([{ "x": 5, "y": 5 }])).to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("start should return JSON");
    assert_eq!(body["color"], "#600AAA");
    assert_eq!(body["headType"], "fang");
    assert_eq!(body["tailType"], "sharp");
}

#[test]
fn test_move_heads_for_nearest_wall() {
    let client = client();
    let payload = game_state(7, 7, json!([{ "x": 3, "y": 1 }, { "x": 3, "y": 2 }]));
    let response = post_move(&client, &payload);

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("move should return JSON");
    assert_eq!(body["move"], "up");
    assert!(body.get("shout").is_none());
}

#[test]
fn test_move_follows_perimeter() {
    let client = client();
    let cases = [
        ((0, 0), "right"),
        ((10, 0), "down"),
        ((10, 10), "left"),
        ((0, 10), "up"),
    ];

    for ((x, y), want) in cases.iter() {
        let payload = game_state(11, 11, json!([{ "x": x, "y": y }]));
        let body: Value = post_move(&client, &payload)
            .into_json()
            .expect("move should return JSON");
        assert_eq!(body["move"], *want, "head ({}, {})", x, y);
    }
}

#[test]
fn test_move_includes_configured_shout() {
    let mut config = Config::default_hardcoded();
    config.moves.shout = Some("Sawtooth lives!".to_string());
    let client = client_with(config);

    let payload = game_state(5, 5, json!([{ "x": 2, "y": 0 }]));
    let body: Value = post_move(&client, &payload).into_json().unwrap();
    assert_eq!(body["move"], "right");
    assert_eq!(body["shout"], "Sawtooth lives!");
}

#[test]
fn test_move_accepts_legacy_payload() {
    let client = client();
    let payload = json!({
        "game": { "id": "legacy" },
        "turn": 1,
        "board": { "height": 7, "width": 7, "food": [], "snakes": [] },
        "you": { "id": "me", "name": "Sawtooth", "health": 100, "body": [{ "x": 2, "y": 5 }] }
    });

    let body: Value = post_move(&client, &payload).into_json().unwrap();
    assert_eq!(body["move"], "down");
}

#[test]
fn test_move_rejects_empty_body() {
    let client = client();
    let response = post_move(&client, &game_state(5, 5, json!([])));
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn test_move_rejects_head_off_board() {
    let client = client();
    let response = post_move(&client, &game_state(5, 5, json!([{ "x": 5, "y": 2 }])));
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn test_move_rejects_malformed_json() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(r#"{"game": {"id": "broken"}}"#)
        .dispatch();

    assert!(response.status().class().is_client_error());
}

#[test]
fn test_end_acknowledges() {
    let client = client();
    let response = client
        .post("/end")
        .header(ContentType::JSON)
        .body(game_state(11, 11, json!([{ "x": 0, "y": 0 }])).to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
}
