use super::*;

pub fn get_endpoints() -> Vec<rocket::route::Route> {
    routes![start_get, start_post, robots]
}

fn start_context(games: &OpenGames, error: &str) -> Context {
    let mut c = Context::new();
    c.insert("title", "Practice a spot");
    c.insert("matching_games", &games.count_all());
    c.insert("error", error);
    c
}

#[get("/")]
fn start_get(games: &State<OpenGames>) -> Template {
    Template::render("start", &start_context(games, "").into_json())
}

#[post("/", data = "<choice>")]
fn start_post(
    games: &State<OpenGames>,
    choice: Form<forms::PathChoice>,
) -> Result<Redirect, Template> {
    match choice.path.as_deref() {
        Some("situations") => Ok(Redirect::to("/situation")),
        Some("preflop") => Ok(Redirect::to("/preflop")),
        _ => Err(Template::render(
            "start",
            &start_context(games, "Pick one of the two paths first.").into_json(),
        )),
    }
}

#[get("/robots.txt")]
fn robots() -> &'static str {
    "User-agent: *\nDisallow: /confirm-situation\nDisallow: /game/\nDisallow: /error\n"
}
