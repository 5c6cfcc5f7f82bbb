//! In memory stores the handlers pull from. Both are cheap to clone and
//! hand out snapshots, so handlers never hold a lock across a render.

use log::{info, warn};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use trainer_core::situation::{fixtures, Situation, Street};
use trainer_core::util::random_string;
use trainer_core::GameId;

const GAME_ID_LEN: usize = 10;

/// One board texture variant of a situation family.
#[derive(Debug, Clone)]
pub struct TextureVariant {
    pub slug: String,
    pub label: String,
    pub situation: Situation,
}

/// A selectable entry in the situation funnel. Postflop families carry one
/// variant per board texture; preflop families have exactly one variant.
#[derive(Debug, Clone)]
pub struct SituationFamily {
    pub slug: String,
    pub label: String,
    pub street: Street,
    variants: Vec<TextureVariant>,
}

impl SituationFamily {
    pub fn textures(&self) -> &[TextureVariant] {
        &self.variants
    }

    pub fn variant(&self, texture: &str) -> Option<&Situation> {
        self.variants
            .iter()
            .find(|v| v.slug == texture)
            .map(|v| &v.situation)
    }

    /// The first variant. For preflop families it is the only one.
    pub fn single(&self) -> Option<&Situation> {
        self.variants.first().map(|v| &v.situation)
    }
}

/// Read only catalogue of registered situations.
#[derive(Debug, Default)]
pub struct SituationLibrary {
    families: Vec<SituationFamily>,
}

impl SituationLibrary {
    /// The shipped catalogue.
    pub fn standard() -> Self {
        let mut lib = Self::default();
        lib.add_postflop(
            "co-vs-btn-srp",
            "CO vs. BTN, single-raised pot",
            vec![
                ("dry", "Dry (rainbow)", fixtures::dry_flop_co_vs_btn()),
                ("paired", "Paired", fixtures::paired_flop_co_vs_btn()),
            ],
        );
        lib.add_postflop(
            "bb-vs-btn-srp",
            "BB vs. BTN, single-raised pot",
            vec![
                ("wet", "Wet (two-tone)", fixtures::wet_flop_bb_vs_btn()),
                ("monotone", "Monotone", fixtures::monotone_flop_bb_vs_btn()),
            ],
        );
        lib.add_postflop(
            "limit-bb-vs-co",
            "Limit BB vs. CO, single-raised pot",
            vec![("dry", "Dry (rainbow)", fixtures::limit_flop_bb_vs_co())],
        );
        lib.add_preflop("bb-vs-steal", fixtures::bb_vs_steal());
        lib.add_preflop("co-vs-3bet", fixtures::co_vs_three_bet());
        lib
    }

    /// Register a postflop family. Variants that fail validation are dropped
    /// with a warning rather than taking the whole catalogue down.
    pub fn add_postflop(
        &mut self,
        slug: &str,
        label: &str,
        variants: Vec<(&str, &str, Situation)>,
    ) {
        let mut kept = Vec::new();
        for (texture, texture_label, mut situation) in variants {
            if situation.current_round == Street::Preflop {
                warn!("Skipping {}:{}: preflop variant in a postflop family", slug, texture);
                continue;
            }
            if let Err(e) = situation.validate() {
                warn!("Skipping {}:{}: {}", slug, texture, e);
                continue;
            }
            situation.situationid = Some(format!("{}:{}", slug, texture));
            kept.push(TextureVariant {
                slug: texture.to_string(),
                label: texture_label.to_string(),
                situation,
            });
        }
        let street = match kept.first() {
            Some(v) => v.situation.current_round,
            None => {
                warn!("Skipping {}: no valid variants", slug);
                return;
            }
        };
        self.families.push(SituationFamily {
            slug: slug.to_string(),
            label: label.to_string(),
            street,
            variants: kept,
        });
    }

    /// Register a preflop family. Its listing label is the situation's own
    /// description.
    pub fn add_preflop(&mut self, slug: &str, mut situation: Situation) {
        if situation.current_round != Street::Preflop {
            warn!("Skipping {}: not a preflop situation", slug);
            return;
        }
        if let Err(e) = situation.validate() {
            warn!("Skipping {}: {}", slug, e);
            return;
        }
        situation.situationid = Some(slug.to_string());
        let label = situation.description.clone();
        self.families.push(SituationFamily {
            slug: slug.to_string(),
            label,
            street: Street::Preflop,
            variants: vec![TextureVariant {
                slug: String::new(),
                label: String::new(),
                situation,
            }],
        });
    }

    pub fn family(&self, slug: &str) -> Option<&SituationFamily> {
        self.families.iter().find(|f| f.slug == slug)
    }

    pub fn families(&self) -> impl Iterator<Item = &SituationFamily> {
        self.families.iter()
    }

    pub fn postflop_families(&self) -> impl Iterator<Item = &SituationFamily> {
        self.families.iter().filter(|f| f.street != Street::Preflop)
    }

    pub fn preflop_families(&self) -> impl Iterator<Item = &SituationFamily> {
        self.families.iter().filter(|f| f.street == Street::Preflop)
    }
}

/// A seat waiting for an opponent.
#[derive(Debug, Clone, Serialize)]
pub struct OpenGame {
    pub gameid: GameId,
    pub situationid: String,
    pub description: String,
    pub street: Street,
}

/// Roster of games waiting for an opponent. Clones share the same roster.
#[derive(Debug, Clone, Default)]
pub struct OpenGames {
    inner: Arc<RwLock<Vec<OpenGame>>>,
}

impl OpenGames {
    /// Open a seat for the given situation and return the new game's id.
    pub fn register(&self, family_slug: &str, situation: &Situation) -> GameId {
        let gameid = random_string(GAME_ID_LEN);
        let game = OpenGame {
            gameid: gameid.clone(),
            situationid: family_slug.to_string(),
            description: situation.description.clone(),
            street: situation.current_round,
        };
        info!("Opened game {} ({})", gameid, game.description);
        self.inner.write().unwrap().push(game);
        gameid
    }

    pub fn count_all(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn count_preflop(&self) -> usize {
        self.inner
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.street == Street::Preflop)
            .count()
    }

    pub fn count_postflop(&self) -> usize {
        self.inner
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.street != Street::Preflop)
            .count()
    }

    pub fn count_situation(&self, family_slug: &str) -> usize {
        self.inner
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.situationid == family_slug)
            .count()
    }

    pub fn find(&self, gameid: &str) -> Option<OpenGame> {
        self.inner
            .read()
            .unwrap()
            .iter()
            .find(|g| g.gameid == gameid)
            .cloned()
    }

    pub fn all(&self) -> Vec<OpenGame> {
        self.inner.read().unwrap().clone()
    }

    /// Open one game per family that has none yet, so a fresh deploy shows
    /// a populated lobby. Safe to call more than once.
    pub fn ensure_seeded(&self, library: &SituationLibrary) {
        for family in library.families() {
            if self.count_situation(&family.slug) > 0 {
                continue;
            }
            if let Some(situation) = family.single() {
                self.register(&family.slug, situation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_library_slugs() {
        let lib = SituationLibrary::standard();
        for slug in [
            "co-vs-btn-srp",
            "bb-vs-btn-srp",
            "limit-bb-vs-co",
            "bb-vs-steal",
            "co-vs-3bet",
        ] {
            assert!(lib.family(slug).is_some(), "{} missing", slug);
        }
        assert_eq!(lib.postflop_families().count(), 3);
        assert_eq!(lib.preflop_families().count(), 2);
    }

    #[test]
    fn variants_get_ids_on_registration() {
        let lib = SituationLibrary::standard();
        let family = lib.family("co-vs-btn-srp").unwrap();
        let dry = family.variant("dry").unwrap();
        assert_eq!(dry.situationid.as_deref(), Some("co-vs-btn-srp:dry"));
        assert!(family.variant("monotone").is_none());
        let preflop = lib.family("bb-vs-steal").unwrap();
        assert_eq!(preflop.single().unwrap().situationid.as_deref(), Some("bb-vs-steal"));
    }

    #[test]
    fn invalid_registrations_are_skipped() {
        let mut lib = SituationLibrary::default();
        let mut broken = fixtures::dry_flop_co_vs_btn();
        broken.players.truncate(1);
        lib.add_postflop("broken", "Broken", vec![("dry", "Dry", broken)]);
        assert!(lib.family("broken").is_none());

        lib.add_preflop("not-preflop", fixtures::dry_flop_co_vs_btn());
        assert!(lib.family("not-preflop").is_none());

        lib.add_postflop(
            "mixed",
            "Mixed",
            vec![
                ("steal", "Steal", fixtures::bb_vs_steal()),
                ("dry", "Dry", fixtures::dry_flop_co_vs_btn()),
            ],
        );
        let mixed = lib.family("mixed").unwrap();
        assert!(mixed.variant("steal").is_none());
        assert!(mixed.variant("dry").is_some());
    }

    #[test]
    fn roster_counts() {
        let lib = SituationLibrary::standard();
        let games = OpenGames::default();
        assert_eq!(games.count_all(), 0);
        games.ensure_seeded(&lib);
        assert_eq!(games.count_all(), 5);
        assert_eq!(games.count_preflop(), 2);
        assert_eq!(games.count_postflop(), 3);
        assert_eq!(games.count_situation("co-vs-btn-srp"), 1);
        assert_eq!(games.count_situation("nope"), 0);
        // Seeding again must not double up.
        games.ensure_seeded(&lib);
        assert_eq!(games.count_all(), 5);
    }

    #[test]
    fn register_and_find() {
        let lib = SituationLibrary::standard();
        let games = OpenGames::default();
        let family = lib.family("bb-vs-steal").unwrap();
        let id = games.register(&family.slug, family.single().unwrap());
        assert_eq!(id.len(), GAME_ID_LEN);
        let found = games.find(&id).unwrap();
        assert_eq!(found.description, "BB vs. a steal");
        assert_eq!(found.street, Street::Preflop);
        assert!(games.find("missing").is_none());
    }

    #[test]
    fn clones_share_the_roster() {
        let games = OpenGames::default();
        let other = games.clone();
        let lib = SituationLibrary::standard();
        let family = lib.family("co-vs-btn-srp").unwrap();
        games.register(&family.slug, family.variant("dry").unwrap());
        assert_eq!(other.count_all(), 1);
    }

    #[test]
    fn postflop_count_stays_consistent_under_writes() {
        let lib = SituationLibrary::standard();
        let games = OpenGames::default();
        let family = lib.family("bb-vs-steal").unwrap().clone();
        let writer_games = games.clone();
        let writer = std::thread::spawn(move || {
            for _ in 0..500 {
                writer_games.register(&family.slug, family.single().unwrap());
            }
        });
        // An all-preflop roster must never report postflop games, however
        // the reads interleave with the writer.
        for _ in 0..500 {
            assert_eq!(games.count_postflop(), 0);
        }
        writer.join().unwrap();
        assert_eq!(games.count_all(), 500);
        assert_eq!(games.count_preflop(), 500);
        assert_eq!(games.count_postflop(), 0);
    }
}
