use super::logic::{self, SituationView, TextureView};
use super::*;
use log::warn;
use trainer_core::situation::{Situation, Street};

pub fn get_endpoints() -> Vec<rocket::route::Route> {
    routes![
        situation_get,
        situation_post,
        texture_get,
        texture_post,
        preflop_get,
        preflop_post,
        confirm_get,
        confirm_post,
    ]
}

fn situation_context(library: &SituationLibrary, games: &OpenGames, error: &str) -> Context {
    let situations: Vec<SituationView> =
        library.postflop_families().map(SituationView::from).collect();
    let mut c = Context::new();
    c.insert("title", "Choose a situation");
    c.insert("situations", &situations);
    c.insert("matching_games", &games.count_postflop());
    c.insert("error", error);
    c
}

#[get("/situation")]
fn situation_get(library: &State<SituationLibrary>, games: &State<OpenGames>) -> Template {
    Template::render("situation", &situation_context(library, games, "").into_json())
}

#[post("/situation", data = "<choice>")]
fn situation_post(
    library: &State<SituationLibrary>,
    games: &State<OpenGames>,
    choice: Form<forms::SituationChoice>,
) -> Result<Redirect, Template> {
    // Only catalogue slugs go back out in the Location header.
    let rerender = |msg: &str| {
        Template::render("situation", &situation_context(library, games, msg).into_json())
    };
    match logic::non_empty(choice.situationid.as_deref()) {
        None => Err(rerender("Pick a situation first.")),
        Some(id) => match library.family(id).filter(|f| f.street != Street::Preflop) {
            Some(family) => Ok(Redirect::to(format!("/texture?situationid={}", family.slug))),
            None => Err(rerender("Pick a situation from the list.")),
        },
    }
}

/// The texture step only makes sense for a postflop situation that exists.
fn resolve_postflop<'a>(
    library: &'a SituationLibrary,
    situationid: Option<&str>,
) -> Result<&'a SituationFamily, Redirect> {
    let id = logic::non_empty(situationid).ok_or_else(|| PageError::MissingSituation.redirect())?;
    library
        .family(id)
        .filter(|f| f.street != Street::Preflop)
        .ok_or_else(|| PageError::UnknownSituation.redirect())
}

fn texture_context(family: &SituationFamily, games: &OpenGames, error: &str) -> Context {
    let textures: Vec<TextureView> = family.textures().iter().map(TextureView::from).collect();
    let mut c = Context::new();
    c.insert("title", "Choose a texture");
    c.insert("situation", &SituationView::from(family));
    c.insert("textures", &textures);
    c.insert("matching_games", &games.count_situation(&family.slug));
    c.insert("error", error);
    c
}

#[get("/texture?<situationid>")]
fn texture_get(
    library: &State<SituationLibrary>,
    games: &State<OpenGames>,
    situationid: Option<&str>,
) -> Result<Template, Redirect> {
    let family = resolve_postflop(library, situationid)?;
    Ok(Template::render(
        "texture",
        &texture_context(family, games, "").into_json(),
    ))
}

#[post("/texture?<situationid>", data = "<choice>")]
fn texture_post(
    library: &State<SituationLibrary>,
    games: &State<OpenGames>,
    situationid: Option<&str>,
    choice: Form<forms::TextureChoice>,
) -> Result<Redirect, Template> {
    let family = match resolve_postflop(library, situationid) {
        Ok(f) => f,
        Err(to_error_page) => return Ok(to_error_page),
    };
    let rerender = |msg: &str| {
        Template::render("texture", &texture_context(family, games, msg).into_json())
    };
    match logic::non_empty(choice.texture.as_deref()) {
        None => Err(rerender("Pick a texture first.")),
        Some(texture) if family.variant(texture).is_none() => {
            Err(rerender("Pick a texture from the list."))
        }
        Some(texture) => Ok(Redirect::to(format!(
            "/confirm-situation?path=postflop&situationid={}&texture={}",
            family.slug, texture
        ))),
    }
}

fn preflop_context(library: &SituationLibrary, games: &OpenGames, error: &str) -> Context {
    let situations: Vec<SituationView> =
        library.preflop_families().map(SituationView::from).collect();
    let mut c = Context::new();
    c.insert("title", "Choose a preflop situation");
    c.insert("situations", &situations);
    c.insert("matching_games", &games.count_preflop());
    c.insert("error", error);
    c
}

#[get("/preflop")]
fn preflop_get(library: &State<SituationLibrary>, games: &State<OpenGames>) -> Template {
    Template::render("preflop", &preflop_context(library, games, "").into_json())
}

#[post("/preflop", data = "<choice>")]
fn preflop_post(
    library: &State<SituationLibrary>,
    games: &State<OpenGames>,
    choice: Form<forms::SituationChoice>,
) -> Result<Redirect, Template> {
    let rerender = |msg: &str| {
        Template::render("preflop", &preflop_context(library, games, msg).into_json())
    };
    match logic::non_empty(choice.situationid.as_deref()) {
        None => Err(rerender("Pick a situation first.")),
        Some(id) => match library.family(id).filter(|f| f.street == Street::Preflop) {
            Some(family) => Ok(Redirect::to(format!(
                "/confirm-situation?path=preflop&situationid={}",
                family.slug
            ))),
            None => Err(rerender("Pick a situation from the list.")),
        },
    }
}

struct Confirmed<'a> {
    family: &'a SituationFamily,
    situation: &'a Situation,
    /// URL the confirm form posts back to.
    action: String,
}

/// Validate the query, then resolve it against the library. The street of
/// the resolved family has to agree with the path the query claims.
fn resolve_confirmed<'a>(
    library: &'a SituationLibrary,
    path: Option<&str>,
    situationid: Option<&str>,
    texture: Option<&str>,
) -> Result<Confirmed<'a>, Redirect> {
    let choice = match logic::validate_confirmation(path, situationid, texture) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Rejecting confirmation path={:?} situationid={:?} texture={:?}: {}",
                path, situationid, texture, e
            );
            return Err(PageError::BadConfirmation.redirect());
        }
    };
    let family = library
        .family(choice.situationid)
        .ok_or_else(|| PageError::UnknownSituation.redirect())?;
    let (situation, action) = if choice.postflop {
        if family.street == Street::Preflop {
            return Err(PageError::BadConfirmation.redirect());
        }
        let texture = choice.texture.unwrap_or_default();
        let situation = family
            .variant(texture)
            .ok_or_else(|| PageError::BadConfirmation.redirect())?;
        let action = format!(
            "/confirm-situation?path=postflop&situationid={}&texture={}",
            family.slug, texture
        );
        (situation, action)
    } else {
        if family.street != Street::Preflop {
            return Err(PageError::BadConfirmation.redirect());
        }
        let situation = family
            .single()
            .ok_or_else(|| PageError::UnknownSituation.redirect())?;
        let action = format!("/confirm-situation?path=preflop&situationid={}", family.slug);
        (situation, action)
    };
    Ok(Confirmed {
        family,
        situation,
        action,
    })
}

#[get("/confirm-situation?<path>&<situationid>&<texture>")]
fn confirm_get(
    library: &State<SituationLibrary>,
    path: Option<&str>,
    situationid: Option<&str>,
    texture: Option<&str>,
) -> Result<Template, Redirect> {
    let confirmed = resolve_confirmed(library, path, situationid, texture)?;
    let s = confirmed.situation;
    let mut c = Context::new();
    c.insert("title", "Confirm your game");
    c.insert("situation", s);
    c.insert("street", &s.current_round.to_string());
    c.insert("pot", &s.pot());
    c.insert("action", &confirmed.action);
    Ok(Template::render("confirmation", &c.into_json()))
}

#[post("/confirm-situation?<path>&<situationid>&<texture>")]
fn confirm_post(
    library: &State<SituationLibrary>,
    games: &State<OpenGames>,
    path: Option<&str>,
    situationid: Option<&str>,
    texture: Option<&str>,
) -> Redirect {
    match resolve_confirmed(library, path, situationid, texture) {
        Ok(confirmed) => {
            games.register(&confirmed.family.slug, confirmed.situation);
            Redirect::to("/game/not-started")
        }
        Err(to_error_page) => to_error_page,
    }
}
