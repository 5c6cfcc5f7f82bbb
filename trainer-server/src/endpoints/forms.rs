//! Form schemas for the funnel pages. Every field is optional so a manual
//! post with a field missing re-renders with a message instead of a 422.

#[derive(FromForm)]
pub struct PathChoice {
    pub path: Option<String>,
}

#[derive(FromForm)]
pub struct SituationChoice {
    pub situationid: Option<String>,
}

#[derive(FromForm)]
pub struct TextureChoice {
    pub texture: Option<String>,
}
