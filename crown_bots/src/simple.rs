use crown_engine::{dice::Dice, policy::EnemyPolicy, state::EngineState, RECRUIT_COST};
use crown_shared::{
    faction::{Faction, Side},
    map::TerritoryId,
};

/// Territories above this army size go on the attack.
pub const ATTACK_THRESHOLD: u32 = 30;

/// The stock Enemy: recruits in a random territory whenever it can afford to,
/// then attacks a random hostile neighbor from every territory above
/// [`ATTACK_THRESHOLD`].
pub struct SimpleEnemy<R: Dice> {
    rng: R,
}

impl<R: Dice> SimpleEnemy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Dice> EnemyPolicy for SimpleEnemy<R> {
    fn reset(&mut self) {}

    fn query_recruit(&mut self, state: &EngineState) -> Option<TerritoryId> {
        if state.gold(Side::Enemy) < RECRUIT_COST {
            return None;
        }

        let my_territories = state.territories_owned_by(Faction::Enemy);
        if my_territories.is_empty() {
            return None;
        }

        Some(my_territories[self.rng.pick(my_territories.len())])
    }

    fn query_attack(&mut self, state: &EngineState, territory: TerritoryId) -> Option<TerritoryId> {
        if state.territory(territory).army <= ATTACK_THRESHOLD {
            return None;
        }

        let targets = state
            .map()
            .neighbors_of(territory)
            .iter()
            .copied()
            .filter(|&x| !state.territory(x).owner.is_enemy())
            .collect::<Vec<_>>();

        if targets.is_empty() {
            return None;
        }

        Some(targets[self.rng.pick(targets.len())])
    }
}
