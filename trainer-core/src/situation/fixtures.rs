//! Canned training situations. Each builder freezes one decision point;
//! the library layer assigns ids when it registers them.

use super::{Situation, SituationPlayer, Street};

/// Every legal holding. The big blind holds this before acting preflop.
const ANY_TWO: &str = "22+,A2s+,K2s+,Q2s+,J2s+,T2s+,92s+,82s+,72s+,62s+,52s+,42s+,32s,\
                       A2o+,K2o+,Q2o+,J2o+,T2o+,92o+,82o+,72o+,62o+,52o+,42o+,32o";

const CO_SRP_RANGE: &str =
    "22+,A2s+,K2s+,Q2s+,J2s+,T5s+,95s+,85s+,74s+,64s+,53s+,43s,A2o+,K8o+,QTo+,JTo,T9o,98o";
const BTN_SRP_RANGE: &str =
    "99-22,AJs-A6s,K8s+,Q8s+,J8s+,T8s+,97s+,86s+,75s+,64s+,53s+,43s,AJo-A2o,KTo+,QTo+,JTo";

const BB_DEFEND_RANGE: &str =
    "22+,A2s+,K2s+,Q2s+,J2s+,T4s+,95s+,84s+,74s+,63s+,53s+,43s,A2o+,K7o+,Q9o+,J9o+,T8o+,98o,87o";
const BTN_STEAL_RANGE: &str =
    "22+,A2s+,K2s+,Q4s+,J6s+,T6s+,96s+,86s+,75s+,65s,54s,A2o+,K9o+,Q9o+,J9o+,T8o+,98o";

/// Dry CO vs. BTN flop.
pub fn dry_flop_co_vs_btn() -> Situation {
    let co = SituationPlayer::new(194, 0, true, CO_SRP_RANGE);
    let btn = SituationPlayer::new(194, 0, true, BTN_SRP_RANGE);
    Situation {
        situationid: None,
        description: "K83 rainbow, CO vs. BTN".to_string(),
        // CO acts first in future rounds too.
        players: vec![co, btn],
        current_player: 0,
        is_limit: false,
        big_blind: 2,
        board_raw: "Ks8h3d".to_string(),
        current_round: Street::Flop,
        pot_pre: 12,
        increment: 2,
        bet_count: 0,
    }
}

/// Paired CO vs. BTN flop. Same pot as the dry spot, different runout.
pub fn paired_flop_co_vs_btn() -> Situation {
    let co = SituationPlayer::new(194, 0, true, CO_SRP_RANGE);
    let btn = SituationPlayer::new(194, 0, true, BTN_SRP_RANGE);
    Situation {
        situationid: None,
        description: "JJ4 paired, CO vs. BTN".to_string(),
        players: vec![co, btn],
        current_player: 0,
        is_limit: false,
        big_blind: 2,
        board_raw: "JsJd4c".to_string(),
        current_round: Street::Flop,
        pot_pre: 12,
        increment: 2,
        bet_count: 0,
    }
}

/// Wet BB vs. BTN flop after a steal and a call.
pub fn wet_flop_bb_vs_btn() -> Situation {
    let bb = SituationPlayer::new(196, 0, true, BB_DEFEND_RANGE);
    let btn = SituationPlayer::new(196, 0, true, BTN_STEAL_RANGE);
    Situation {
        situationid: None,
        description: "T98 two-tone, BB vs. BTN".to_string(),
        players: vec![bb, btn],
        current_player: 0,
        is_limit: false,
        big_blind: 2,
        board_raw: "Th9h8c".to_string(),
        current_round: Street::Flop,
        pot_pre: 8,
        increment: 2,
        bet_count: 0,
    }
}

/// Monotone BB vs. BTN flop, same preflop action as the wet spot.
pub fn monotone_flop_bb_vs_btn() -> Situation {
    let bb = SituationPlayer::new(196, 0, true, BB_DEFEND_RANGE);
    let btn = SituationPlayer::new(196, 0, true, BTN_STEAL_RANGE);
    Situation {
        situationid: None,
        description: "752 monotone, BB vs. BTN".to_string(),
        players: vec![bb, btn],
        current_player: 0,
        is_limit: false,
        big_blind: 2,
        board_raw: "7h5h2h".to_string(),
        current_round: Street::Flop,
        pot_pre: 8,
        increment: 2,
        bet_count: 0,
    }
}

/// Fixed limit BB vs. CO flop. The increment is the small bet.
pub fn limit_flop_bb_vs_co() -> Situation {
    let bb = SituationPlayer::new(
        196,
        0,
        true,
        "22+,A2s+,K2s+,Q2s+,J2s+,T2s+,93s+,84s+,74s+,63s+,53s+,43s,A2o+,K4o+,Q6o+,J7o+,T7o+,97o+,87o",
    );
    let co = SituationPlayer::new(
        196,
        0,
        true,
        "22+,A2s+,K5s+,Q7s+,J7s+,T7s+,97s+,86s+,76s,65s,A2o+,K9o+,Q9o+,J9o+,T9o",
    );
    Situation {
        situationid: None,
        description: "A94 rainbow, limit BB vs. CO".to_string(),
        players: vec![bb, co],
        current_player: 0,
        is_limit: true,
        big_blind: 2,
        board_raw: "As9c4d".to_string(),
        current_round: Street::Flop,
        pot_pre: 8,
        increment: 2,
        bet_count: 0,
    }
}

/// BB deciding against a button steal.
pub fn bb_vs_steal() -> Situation {
    let bb = SituationPlayer::new(198, 2, true, ANY_TWO);
    let btn = SituationPlayer::new(196, 4, false, BTN_STEAL_RANGE);
    Situation {
        situationid: None,
        description: "BB vs. a steal".to_string(),
        players: vec![bb, btn],
        current_player: 0,
        is_limit: false,
        big_blind: 2,
        board_raw: String::new(),
        current_round: Street::Preflop,
        pot_pre: 0,
        increment: 2,
        bet_count: 2,
    }
}

/// CO open facing a BB 3-bet.
pub fn co_vs_three_bet() -> Situation {
    let bb = SituationPlayer::new(188, 12, false, "99+,AQs+,A5s-A4s,KQs,AQo+");
    let co = SituationPlayer::new(
        196,
        4,
        true,
        "22+,A2s+,K9s+,Q9s+,J8s+,T8s+,97s+,87s,76s,65s,A9o+,KTo+,QTo+,JTo",
    );
    Situation {
        situationid: None,
        description: "CO open vs. BB 3-bet".to_string(),
        players: vec![bb, co],
        current_player: 1,
        is_limit: false,
        big_blind: 2,
        board_raw: String::new(),
        current_round: Street::Preflop,
        pot_pre: 0,
        increment: 8,
        bet_count: 3,
    }
}

pub fn all() -> Vec<Situation> {
    vec![
        dry_flop_co_vs_btn(),
        paired_flop_co_vs_btn(),
        wet_flop_bb_vs_btn(),
        monotone_flop_bb_vs_btn(),
        limit_flop_bb_vs_co(),
        bb_vs_steal(),
        co_vs_three_bet(),
    ]
}
