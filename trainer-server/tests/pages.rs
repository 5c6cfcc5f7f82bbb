use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::Value;
use trainer_server::providers::{OpenGames, SituationLibrary};

fn seeded() -> (Client, OpenGames) {
    let library = SituationLibrary::standard();
    let games = OpenGames::default();
    games.ensure_seeded(&library);
    let client = Client::tracked(trainer_server::app(library, games.clone())).unwrap();
    (client, games)
}

fn empty_roster() -> Client {
    let app = trainer_server::app(SituationLibrary::standard(), OpenGames::default());
    Client::tracked(app).unwrap()
}

#[test]
fn open_games_page_lists_the_roster() {
    let (client, _) = seeded();
    let response = client.get("/open-games").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.contains("K83 rainbow, CO vs. BTN"));
    assert!(body.contains("BB vs. a steal"));
    assert!(body.contains("Join"));
}

#[test]
fn open_games_page_with_an_empty_roster() {
    let client = empty_roster();
    let response = client.get("/open-games").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.contains("No games are waiting for an opponent"));
    assert!(!body.contains("Join"));
}

#[test]
fn confirm_join_shows_the_game() {
    let (client, games) = seeded();
    let game = games.all().into_iter().next().unwrap();
    let response = client
        .get(format!("/confirm-join?gameid={}", game.gameid))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.contains(&game.description));
}

#[test]
fn confirm_join_handles_unknown_games() {
    let (client, _) = seeded();
    for uri in ["/confirm-join?gameid=zzzzzzzzzz", "/confirm-join"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", uri);
        let body = response.into_string().unwrap();
        assert!(body.contains("no longer open"), "{}", uri);
    }
}

#[test]
fn game_pages_render() {
    let (client, _) = seeded();
    for uri in ["/game/not-started", "/game/acting", "/game/waiting"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", uri);
    }
}

#[test]
fn error_page_messages() {
    let (client, _) = seeded();
    let cases = [
        ("/error?id=0", "choose a situation"),
        ("/error?id=1", "It may have been retired"),
        ("/error?id=2", "match the path you chose"),
        ("/error?id=3", "from the front page"),
        ("/error?id=99", "from the front page"),
        ("/error?id=abc", "from the front page"),
        ("/error", "from the front page"),
    ];
    for (uri, fragment) in cases {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", uri);
        let body = response.into_string().unwrap();
        assert!(body.contains(fragment), "{} missing {:?}", uri, fragment);
    }
}

#[test]
fn robots_txt_is_plain_text() {
    let (client, _) = seeded();
    let response = client.get("/robots.txt").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::Plain));
    let body = response.into_string().unwrap();
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Disallow: /game/"));
}

#[test]
fn range_api_reports_counts() {
    let (client, _) = seeded();
    let response = client.get("/api/range?spec=22%2B").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let v: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(v["valid"], true);
    assert_eq!(v["classes"], 1);
    assert_eq!(v["combos"], 78);
}

#[test]
fn range_api_reports_errors() {
    let (client, _) = seeded();
    for uri in ["/api/range?spec=XX", "/api/range?spec=", "/api/range"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", uri);
        let v: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(v["valid"], false, "{}", uri);
        assert!(v["error"].is_string(), "{}", uri);
    }
}
