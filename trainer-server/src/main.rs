#[macro_use]
extern crate rocket;

use trainer_server::providers::{OpenGames, SituationLibrary};

#[launch]
fn rocket() -> _ {
    let library = SituationLibrary::standard();
    let games = OpenGames::default();
    games.ensure_seeded(&library);
    trainer_server::app(library, games)
}
