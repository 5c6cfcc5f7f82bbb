use super::*;

/// Canned page errors, indexed by the numeric id in /error?id=N.
pub const MESSAGES: [&str; 3] = [
    "Please choose a situation before continuing.",
    "That situation doesn't exist. It may have been retired.",
    "The confirmation didn't match the path you chose. Please start over.",
];

const FALLBACK: &str = "Something went wrong. Please start over from the front page.";

/// Ids are handled leniently. Anything that isn't an index into MESSAGES
/// gets the fallback text.
pub fn message_for(id: Option<&str>) -> &'static str {
    id.and_then(|raw| raw.trim().parse::<usize>().ok())
        .and_then(|i| MESSAGES.get(i).copied())
        .unwrap_or(FALLBACK)
}

pub fn get_endpoints() -> Vec<rocket::route::Route> {
    routes![error_page]
}

#[get("/error?<id>")]
fn error_page(id: Option<&str>) -> Template {
    let mut c = Context::new();
    c.insert("title", "Error");
    c.insert("message", message_for(id));
    Template::render("error", &c.into_json())
}
