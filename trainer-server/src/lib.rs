#[macro_use]
extern crate rocket;

pub mod endpoints;
pub mod providers;

use providers::{OpenGames, SituationLibrary};
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

/// Assemble the rocket. Callers hand in the state, so tests can seed their
/// own library and roster.
pub fn app(library: SituationLibrary, games: OpenGames) -> Rocket<Build> {
    // Pin the template dir to this crate so the server runs from any cwd.
    let figment = rocket::Config::figment().merge((
        "template_dir",
        concat!(env!("CARGO_MANIFEST_DIR"), "/templates"),
    ));
    rocket::custom(figment)
        .attach(Template::fairing())
        .manage(library)
        .manage(games)
        .mount("/", endpoints::get_all_endpoints())
}
