use std::ops::DerefMut;

use crown_shared::map::TerritoryId;

use crate::state::EngineState;

/// Decision procedure for the Enemy side. The engine calls `query_recruit`
/// once per Enemy turn after crediting income, then `query_attack` once for
/// every territory the Enemy held when the attack phase began, in scenario
/// order. Answers are validated by the engine; rejected ones are skipped.
pub trait EnemyPolicy {
    fn reset(&mut self);

    fn query_recruit(&mut self, state: &EngineState) -> Option<TerritoryId>;

    fn query_attack(&mut self, state: &EngineState, territory: TerritoryId) -> Option<TerritoryId>;
}

impl EnemyPolicy for Box<dyn EnemyPolicy> {
    fn reset(&mut self) {
        self.deref_mut().reset();
    }

    fn query_recruit(&mut self, state: &EngineState) -> Option<TerritoryId> {
        self.deref_mut().query_recruit(state)
    }

    fn query_attack(&mut self, state: &EngineState, territory: TerritoryId) -> Option<TerritoryId> {
        self.deref_mut().query_attack(state, territory)
    }
}

/// Never recruits and never attacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl EnemyPolicy for Passive {
    fn reset(&mut self) {}

    fn query_recruit(&mut self, _: &EngineState) -> Option<TerritoryId> {
        None
    }

    fn query_attack(&mut self, _: &EngineState, _: TerritoryId) -> Option<TerritoryId> {
        None
    }
}
