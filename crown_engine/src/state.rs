pub mod mutate;
pub mod record;

use crown_shared::{
    error::{GameError, ScenarioError},
    faction::{Faction, Side},
    map::{Map, TerritoryId},
    record::{Outcome, Record},
    scenario::Scenario,
    Territory,
};
use enum_map::EnumMap;

use crate::config::EngineConfig;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    PlayerTurn,
    EnemyTurn,
    GameOver(Outcome),
}

impl Phase {
    /// Returns `true` if the phase is [`GameOver`].
    ///
    /// [`GameOver`]: Phase::GameOver
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver(..))
    }
}

/// Board, gold and turn of one game, plus the log of every change made to them.
#[derive(Clone, Debug)]
pub struct EngineState {
    map: Map,
    territories: Vec<Territory>,
    gold: EnumMap<Side, u32>,
    turn: Side,
    outcome: Option<Outcome>,
    recording: Vec<Record>,
}

impl EngineState {
    pub fn new(scenario: &Scenario, config: &EngineConfig) -> Result<Self, ScenarioError> {
        let (map, territories) = Map::from_scenario(scenario)?;

        Ok(Self {
            map,
            territories,
            gold: config.starting_gold(),
            turn: Side::Player,
            outcome: None,
            recording: Vec::new(),
        })
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn territory(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.index()]
    }

    pub fn get(&self, name: &str) -> Result<&Territory, GameError> {
        Ok(self.territory(self.map.id(name)?))
    }

    /// Territories held by `faction`, in scenario order.
    pub fn territories_owned_by(&self, faction: Faction) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|x| x.owner == faction)
            .map(|x| x.id)
            .collect()
    }

    pub fn territory_counts(&self) -> EnumMap<Faction, usize> {
        let mut counts = EnumMap::default();
        for territory in &self.territories {
            counts[territory.owner] += 1;
        }

        counts
    }

    pub fn gold(&self, side: Side) -> u32 {
        self.gold[side]
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match (self.outcome, self.turn) {
            (Some(outcome), _) => Phase::GameOver(outcome),
            (None, Side::Player) => Phase::PlayerTurn,
            (None, Side::Enemy) => Phase::EnemyTurn,
        }
    }

    pub fn recording(&self) -> &[Record] {
        &self.recording
    }

    pub(crate) fn set_owner(&mut self, id: TerritoryId, faction: Faction) {
        self.territories[id.index()].owner = faction;
    }

    pub(crate) fn add_army(&mut self, id: TerritoryId, delta: i64) -> u32 {
        self.territories[id.index()].add_army(delta)
    }
}
