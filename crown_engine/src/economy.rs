use crown_shared::{
    error::{ActionError, GameError},
    faction::{Faction, Side},
    map::TerritoryId,
    record::{Move, MoveRecruit, Record},
};
use enum_map::EnumMap;
use tracing::debug;

use crate::{state::EngineState, RECRUIT_ARMY, RECRUIT_COST};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Recruitment {
    pub territory: TerritoryId,
    pub gold: u32,
    pub army: u32,
}

/// Gold `faction` earns per turn from the territories it currently holds.
pub fn income_for(state: &EngineState, faction: Faction) -> u32 {
    state
        .territories()
        .iter()
        .filter(|x| x.owner == faction)
        .map(|x| state.map().gold_income(x.id))
        .sum()
}

pub fn income_by_faction(state: &EngineState) -> EnumMap<Faction, u32> {
    EnumMap::from_fn(|faction| income_for(state, faction))
}

/// Validates a recruitment without touching the session.
pub fn check_recruit(
    state: &EngineState,
    side: Side,
    territory: Option<TerritoryId>,
) -> Result<MoveRecruit, GameError> {
    let territory = territory.ok_or(ActionError::NoSelection)?;

    if state.territory(territory).owner != side.faction() {
        return Err(ActionError::NotOwned(state.map().name(territory).to_owned()).into());
    }

    let gold = state.gold(side);
    if gold < RECRUIT_COST {
        return Err(ActionError::InsufficientFunds {
            gold,
            cost: RECRUIT_COST,
        }
        .into());
    }

    Ok(MoveRecruit {
        territory,
        cost: RECRUIT_COST,
        army: RECRUIT_ARMY,
    })
}

/// Spends [`RECRUIT_COST`] gold of `side` for [`RECRUIT_ARMY`] army in `territory`.
pub fn recruit(
    state: &mut EngineState,
    side: Side,
    territory: Option<TerritoryId>,
) -> Result<Recruitment, GameError> {
    let mov = check_recruit(state, side, territory)?;
    state.commit(Record::Move(side, Move::Recruit(mov)));

    let recruitment = Recruitment {
        territory: mov.territory,
        gold: state.gold(side),
        army: state.territory(mov.territory).army,
    };

    debug!(
        %side,
        territory = state.map().name(mov.territory),
        gold = recruitment.gold,
        army = recruitment.army,
        "recruited"
    );

    Ok(recruitment)
}
