use super::*;

pub fn get_endpoints() -> Vec<rocket::route::Route> {
    routes![
        open_games,
        confirm_join,
        game_not_started,
        game_acting,
        game_waiting,
    ]
}

#[get("/open-games")]
fn open_games(games: &State<OpenGames>) -> Template {
    let list = games.all();
    let mut c = Context::new();
    if list.is_empty() {
        c.insert("title", "No open games");
        Template::render("no_open_games", &c.into_json())
    } else {
        c.insert("title", "Open games");
        c.insert("games", &list);
        Template::render("open_games", &c.into_json())
    }
}

// TODO seat the joiner once games can actually run.
#[get("/confirm-join?<gameid>")]
fn confirm_join(games: &State<OpenGames>, gameid: Option<&str>) -> Template {
    let game = gameid.and_then(|id| games.find(id));
    let mut c = Context::new();
    c.insert("title", "Confirm join");
    c.insert("found", &game.is_some());
    if let Some(g) = game {
        c.insert("game", &g);
    }
    Template::render("confirm_join", &c.into_json())
}

#[get("/game/not-started")]
fn game_not_started() -> Template {
    let mut c = Context::new();
    c.insert("title", "Waiting for an opponent");
    Template::render("game_not_started", &c.into_json())
}

#[get("/game/acting")]
fn game_acting() -> Template {
    let mut c = Context::new();
    c.insert("title", "Your turn");
    Template::render("game_acting", &c.into_json())
}

#[get("/game/waiting")]
fn game_waiting() -> Template {
    let mut c = Context::new();
    c.insert("title", "Waiting on your opponent");
    Template::render("game_waiting", &c.into_json())
}
