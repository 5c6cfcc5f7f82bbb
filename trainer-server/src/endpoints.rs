pub use crate::providers::{OpenGame, OpenGames, SituationFamily, SituationLibrary};
pub use logic::PageError;
pub use rocket::form::Form;
pub use rocket::response::Redirect;
pub use rocket::State;
pub use rocket_dyn_templates::{tera::Context, Template};

mod api;
pub mod errors;
pub mod forms;
pub mod funnel;
pub mod games;
pub mod index;
pub mod logic;

pub fn get_all_endpoints() -> Vec<rocket::route::Route> {
    let mut v = index::get_endpoints();
    v.append(&mut funnel::get_endpoints());
    v.append(&mut games::get_endpoints());
    v.append(&mut errors::get_endpoints());
    v.append(&mut api::get_endpoints());
    v
}
