use crown_shared::{
    faction::{Faction, Side},
    record::{Income, Outcome, Record},
};

use super::EngineState;
use crate::economy;

pub fn income(state: &EngineState, side: Side) -> Record {
    Record::Income(Income {
        side,
        amount: economy::income_for(state, side.faction()),
    })
}

/// The game result, if the Player holds every territory or none at all.
pub fn winner(state: &EngineState) -> Option<Outcome> {
    let held = state.territory_counts()[Faction::Player];
    if held == state.territories().len() {
        Some(Outcome::Victory)
    } else if held == 0 {
        Some(Outcome::Defeat)
    } else {
        None
    }
}
