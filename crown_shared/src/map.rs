use std::collections::HashMap;

use crate::{
    error::{GameError, ScenarioError},
    scenario::Scenario,
    Territory,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TerritoryId(u16);

/// Largest board a [`TerritoryId`] can address.
pub const MAX_TERRITORIES: usize = u16::MAX as usize + 1;

impl TerritoryId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u16)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Display coordinate of a territory. Only the renderer reads it.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// The static part of the board: names, adjacency, income and positions.
#[derive(Clone, Debug)]
pub struct Map {
    names: Vec<String>,
    lookup: HashMap<String, TerritoryId>,
    edges: Vec<Vec<TerritoryId>>,
    gold_income: Vec<u32>,
    positions: Vec<Position>,
}

impl Map {
    /// Builds the board and the initial territory states, rejecting any
    /// scenario whose adjacency is not a well formed symmetric graph.
    pub fn from_scenario(scenario: &Scenario) -> Result<(Self, Vec<Territory>), ScenarioError> {
        if scenario.territories.is_empty() {
            return Err(ScenarioError::Empty);
        }

        if scenario.territories.len() > MAX_TERRITORIES {
            return Err(ScenarioError::TooManyTerritories(scenario.territories.len()));
        }

        let mut lookup = HashMap::with_capacity(scenario.territories.len());
        for (i, territory) in scenario.territories.iter().enumerate() {
            if lookup
                .insert(territory.name.clone(), TerritoryId::new(i))
                .is_some()
            {
                return Err(ScenarioError::DuplicateTerritory(territory.name.clone()));
            }
        }

        let mut edges = Vec::with_capacity(scenario.territories.len());
        for territory in &scenario.territories {
            let mut neighbors = Vec::with_capacity(territory.neighbors.len());
            for neighbor in &territory.neighbors {
                let Some(&id) = lookup.get(neighbor) else {
                    return Err(ScenarioError::UnknownNeighbor {
                        territory: territory.name.clone(),
                        neighbor: neighbor.clone(),
                    });
                };

                if *neighbor == territory.name {
                    return Err(ScenarioError::SelfAdjacent(territory.name.clone()));
                }

                if !neighbors.contains(&id) {
                    neighbors.push(id);
                }
            }

            edges.push(neighbors);
        }

        for (i, neighbors) in edges.iter().enumerate() {
            let origin = TerritoryId::new(i);
            if let Some(&neighbor) = neighbors
                .iter()
                .find(|x| !edges[x.index()].contains(&origin))
            {
                return Err(ScenarioError::AsymmetricAdjacency {
                    territory: scenario.territories[i].name.clone(),
                    neighbor: scenario.territories[neighbor.index()].name.clone(),
                });
            }
        }

        let map = Self {
            names: scenario.territories.iter().map(|x| x.name.clone()).collect(),
            lookup,
            edges,
            gold_income: scenario.territories.iter().map(|x| x.gold_income).collect(),
            positions: scenario.territories.iter().map(|x| x.position).collect(),
        };

        let territories = scenario
            .territories
            .iter()
            .enumerate()
            .map(|(i, x)| Territory::new(TerritoryId::new(i), x.owner, x.army))
            .collect();

        Ok((map, territories))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All territories in scenario order.
    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> {
        (0..self.names.len()).map(TerritoryId::new)
    }

    pub fn id(&self, name: &str) -> Result<TerritoryId, GameError> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| GameError::NotFound(name.to_owned()))
    }

    pub fn name(&self, id: TerritoryId) -> &str {
        &self.names[id.index()]
    }

    pub fn neighbors_of(&self, id: TerritoryId) -> &[TerritoryId] {
        &self.edges[id.index()]
    }

    pub fn is_adjacent(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.edges[a.index()].contains(&b)
    }

    pub fn gold_income(&self, id: TerritoryId) -> u32 {
        self.gold_income[id.index()]
    }

    pub fn position(&self, id: TerritoryId) -> Position {
        self.positions[id.index()]
    }

    /// Territories in `territories` with at least one neighbor outside the set.
    pub fn border_territories(&self, territories: &[TerritoryId]) -> Vec<TerritoryId> {
        let included = self.membership(territories);

        territories
            .iter()
            .filter(|&&x| self.edges[x.index()].iter().any(|x| !included[x.index()]))
            .copied()
            .collect()
    }

    /// Territories outside `territories` that border at least one of them.
    pub fn adjacent_territories(&self, territories: &[TerritoryId]) -> Vec<TerritoryId> {
        let mut included = self.membership(territories);

        let mut adjacent = Vec::new();
        for &territory in territories {
            for &territory in &self.edges[territory.index()] {
                if !included[territory.index()] {
                    adjacent.push(territory);
                    included[territory.index()] = true;
                }
            }
        }

        adjacent
    }

    fn membership(&self, territories: &[TerritoryId]) -> Vec<bool> {
        let mut included = vec![false; self.len()];
        for &territory in territories {
            included[territory.index()] = true;
        }

        included
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{faction::Faction, scenario::ScenarioTerritory};

    fn territory(name: &str, neighbors: &[&str]) -> ScenarioTerritory {
        ScenarioTerritory {
            name: name.to_owned(),
            position: Position::default(),
            owner: Faction::Neutral,
            army: 10,
            gold_income: 5,
            neighbors: neighbors.iter().map(|x| x.to_string()).collect(),
        }
    }

    #[test]
    fn crown_conquest_is_symmetric() {
        let (map, territories) = Map::from_scenario(&Scenario::crown_conquest()).unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(territories.len(), 6);

        for a in map.ids() {
            for &b in map.neighbors_of(a) {
                assert!(map.is_adjacent(b, a), "{} / {}", map.name(a), map.name(b));
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        let (map, territories) = Map::from_scenario(&Scenario::crown_conquest()).unwrap();
        let northland = map.id("Northland").unwrap();
        let highland = map.id("Highland").unwrap();
        let southland = map.id("Southland").unwrap();

        assert_eq!(map.name(northland), "Northland");
        assert_eq!(map.gold_income(northland), 15);
        assert_eq!(territories[northland.index()].army, 50);
        assert!(map.is_adjacent(northland, highland));
        assert!(!map.is_adjacent(northland, southland));
        assert_eq!(
            map.id("Atlantis"),
            Err(GameError::NotFound("Atlantis".to_owned()))
        );
    }

    #[test]
    fn rejects_unknown_neighbor() {
        let scenario = Scenario {
            territories: vec![territory("A", &["B"])],
        };

        assert!(matches!(
            Map::from_scenario(&scenario),
            Err(ScenarioError::UnknownNeighbor { neighbor, .. }) if neighbor == "B"
        ));
    }

    #[test]
    fn rejects_asymmetric_adjacency() {
        let scenario = Scenario {
            territories: vec![territory("A", &["B"]), territory("B", &[])],
        };

        assert!(matches!(
            Map::from_scenario(&scenario),
            Err(ScenarioError::AsymmetricAdjacency { territory, neighbor })
                if territory == "A" && neighbor == "B"
        ));
    }

    #[test]
    fn rejects_duplicates_self_loops_and_empty() {
        let duplicate = Scenario {
            territories: vec![territory("A", &[]), territory("A", &[])],
        };
        assert!(matches!(
            Map::from_scenario(&duplicate),
            Err(ScenarioError::DuplicateTerritory(name)) if name == "A"
        ));

        let self_loop = Scenario {
            territories: vec![territory("A", &["A"])],
        };
        assert!(matches!(
            Map::from_scenario(&self_loop),
            Err(ScenarioError::SelfAdjacent(name)) if name == "A"
        ));

        let empty = Scenario {
            territories: vec![],
        };
        assert!(matches!(Map::from_scenario(&empty), Err(ScenarioError::Empty)));
    }

    #[test]
    fn rejects_boards_too_large_to_address() {
        let names = (0..=MAX_TERRITORIES)
            .map(|i| format!("T{i}"))
            .collect::<Vec<_>>();
        let scenario = Scenario {
            territories: names.iter().map(|x| territory(x, &[])).collect(),
        };

        assert!(matches!(
            Map::from_scenario(&scenario),
            Err(ScenarioError::TooManyTerritories(n)) if n == MAX_TERRITORIES + 1
        ));

        let scenario = Scenario {
            territories: scenario.territories[1..].to_vec(),
        };
        let (map, _) = Map::from_scenario(&scenario).unwrap();
        let last = map.id(&format!("T{MAX_TERRITORIES}")).unwrap();
        assert_eq!(last.index(), MAX_TERRITORIES - 1);
        assert_eq!(map.name(last), format!("T{MAX_TERRITORIES}"));
    }

    #[test]
    fn repeated_neighbor_entries_collapse() {
        let scenario = Scenario {
            territories: vec![territory("A", &["B", "B"]), territory("B", &["A"])],
        };

        let (map, _) = Map::from_scenario(&scenario).unwrap();
        assert_eq!(map.neighbors_of(map.id("A").unwrap()).len(), 1);
    }

    #[test]
    fn borders_and_adjacent() {
        let (map, _) = Map::from_scenario(&Scenario::crown_conquest()).unwrap();
        let id = |name| map.id(name).unwrap();

        let held = [id("Northland"), id("Highland")];
        assert_eq!(map.border_territories(&held), held.to_vec());

        let adjacent = map.adjacent_territories(&held);
        assert_eq!(adjacent, vec![id("Westland"), id("Eastland"), id("Midland")]);
    }
}
