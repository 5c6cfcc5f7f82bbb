use super::*;
use serde::Serialize;

/// Pages bail out to the shared error page with one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    MissingSituation,
    UnknownSituation,
    BadConfirmation,
}

impl PageError {
    pub fn code(self) -> u8 {
        match self {
            Self::MissingSituation => 0,
            Self::UnknownSituation => 1,
            Self::BadConfirmation => 2,
        }
    }

    pub fn redirect(self) -> Redirect {
        Redirect::to(format!("/error?id={}", self.code()))
    }
}

/// A query value counts as present only if it is non empty.
pub fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

#[derive(Debug, PartialEq, Eq, derive_more::Display)]
pub enum ConfirmError {
    MissingSituationId,
    UnknownPath,
    TextureMismatch,
}

/// A confirm-situation query that passed [`validate_confirmation`].
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedChoice<'a> {
    pub situationid: &'a str,
    pub postflop: bool,
    pub texture: Option<&'a str>,
}

/// Check a confirm-situation query against the funnel rules: a situation id
/// must be present, `path` must be `preflop` or `postflop`, and a texture
/// travels with postflop confirmations and only those. The query is the
/// authority here, whatever the referring page rendered.
pub fn validate_confirmation<'a>(
    path: Option<&'a str>,
    situationid: Option<&'a str>,
    texture: Option<&'a str>,
) -> Result<ConfirmedChoice<'a>, ConfirmError> {
    let situationid = non_empty(situationid).ok_or(ConfirmError::MissingSituationId)?;
    let postflop = match non_empty(path) {
        Some("preflop") => false,
        Some("postflop") => true,
        _ => return Err(ConfirmError::UnknownPath),
    };
    let texture = non_empty(texture);
    if texture.is_some() != postflop {
        return Err(ConfirmError::TextureMismatch);
    }
    Ok(ConfirmedChoice {
        situationid,
        postflop,
        texture,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct SituationView {
    pub id: String,
    pub label: String,
    pub street: String,
}

impl From<&SituationFamily> for SituationView {
    fn from(f: &SituationFamily) -> Self {
        Self {
            id: f.slug.clone(),
            label: f.label.clone(),
            street: f.street.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextureView {
    pub id: String,
    pub label: String,
    pub board: String,
}

impl From<&crate::providers::TextureVariant> for TextureView {
    fn from(v: &crate::providers::TextureVariant) -> Self {
        Self {
            id: v.slug.clone(),
            label: v.label.clone(),
            board: v.situation.board_raw.clone(),
        }
    }
}
