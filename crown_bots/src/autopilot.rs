use crown_engine::{
    dice::Dice,
    game_engine::GameEngine,
    state::{EngineState, Phase},
    RECRUIT_COST,
};
use crown_shared::{
    error::GameError,
    faction::{Faction, Side},
    map::TerritoryId,
};
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Plan {
    Attack {
        source: TerritoryId,
        target: TerritoryId,
    },
    Fortify {
        source: TerritoryId,
        target: TerritoryId,
        amount: u32,
    },
}

/// Plays the Player side through the same entry points a UI uses: select the
/// strongest border territory, recruit there when gold allows, then attack a
/// random hostile neighbor. With nothing to attack from, spare troops are
/// marched from the interior towards the border.
pub struct Autopilot<R: Dice> {
    rng: R,
}

impl<R: Dice> Autopilot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Plays one Player action. Returns `false` when it is not the Player's
    /// turn or no action is available.
    pub fn play_turn(&mut self, engine: &mut GameEngine) -> Result<bool, GameError> {
        if engine.help_visible() {
            engine.on_toggle_help();
        }

        if engine.phase() != Phase::PlayerTurn {
            return Ok(false);
        }

        engine.on_cancel();
        let Some(plan) = self.plan(engine.state()) else {
            return Ok(false);
        };
        debug!(?plan, "autopilot");

        let name = |id| engine.state().map().name(id).to_owned();
        match plan {
            Plan::Attack { source, target } => {
                let (source, target) = (name(source), name(target));
                engine.on_territory_clicked(&source)?;
                if engine.state().gold(Side::Player) >= RECRUIT_COST {
                    engine.on_recruit_requested()?;
                }

                engine.on_territory_clicked(&target)?;
            }
            Plan::Fortify {
                source,
                target,
                amount,
            } => {
                let (source, target) = (name(source), name(target));
                engine.on_territory_clicked(&source)?;
                engine.on_territory_clicked(&target)?;
                engine.on_move_amount_entered(amount)?;
            }
        }

        Ok(true)
    }

    fn plan(&mut self, state: &EngineState) -> Option<Plan> {
        let map = state.map();
        let my_territories = state.territories_owned_by(Faction::Player);
        let border = map.border_territories(&my_territories);

        let can_recruit = state.gold(Side::Player) >= RECRUIT_COST;
        let attacker = border
            .iter()
            .copied()
            .filter(|&x| can_recruit || state.territory(x).army > 0)
            .max_by_key(|&x| state.territory(x).army);

        if let Some(source) = attacker {
            let targets = map
                .neighbors_of(source)
                .iter()
                .copied()
                .filter(|&x| !state.territory(x).owner.is_player())
                .collect::<Vec<_>>();

            return Some(Plan::Attack {
                source,
                target: targets[self.rng.pick(targets.len())],
            });
        }

        my_territories
            .iter()
            .copied()
            .filter(|&x| !border.contains(&x) && state.territory(x).army > 1)
            .find_map(|source| {
                let friendly = map
                    .neighbors_of(source)
                    .iter()
                    .copied()
                    .filter(|&x| state.territory(x).owner.is_player());

                let target = friendly
                    .clone()
                    .find(|x| border.contains(x))
                    .or_else(|| friendly.clone().next())?;

                Some(Plan::Fortify {
                    source,
                    target,
                    amount: state.territory(source).army - 1,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use crown_engine::{config::EngineConfig, dice::FixedRolls, policy::Passive};
    use crown_shared::{
        map::Position,
        scenario::{Scenario, ScenarioTerritory},
    };

    use super::*;

    fn territory(name: &str, owner: Faction, army: u32, neighbors: &[&str]) -> ScenarioTerritory {
        ScenarioTerritory {
            name: name.to_owned(),
            position: Position::default(),
            owner,
            army,
            gold_income: 5,
            neighbors: neighbors.iter().map(|x| x.to_string()).collect(),
        }
    }

    fn engine(scenario: &Scenario, player_gold: u32) -> GameEngine {
        let config = EngineConfig {
            player_gold,
            ..EngineConfig::default()
        };

        GameEngine::new(
            scenario,
            config,
            Box::new(Passive),
            Box::new(FixedRolls::new([0.0, 0.99])),
        )
        .unwrap()
    }

    #[test]
    fn attacks_from_the_strongest_border() {
        let mut engine = engine(&Scenario::crown_conquest(), 100);
        let mut autopilot = Autopilot::new(FixedRolls::new([0.0]));

        assert!(autopilot.play_turn(&mut engine).unwrap());
        assert!(!engine.help_visible());
        assert_eq!(engine.phase(), Phase::EnemyTurn);

        // Northland recruits to 60, then rolls 30 against Westland's 29
        assert_eq!(engine.state().gold(Side::Player), 80 + 27);
        assert_eq!(engine.state().get("Northland").unwrap().army, 60);
        let westland = engine.state().get("Westland").unwrap();
        assert_eq!(westland.owner, Faction::Neutral);
        assert_eq!(westland.army, 5);
        assert_eq!(engine.status(), "Attack weakened Westland!");
        assert!(!autopilot.play_turn(&mut engine).unwrap());
    }

    #[test]
    fn marches_interior_troops_to_the_border() {
        let scenario = Scenario {
            territories: vec![
                territory("Keep", Faction::Player, 12, &["Wall"]),
                territory("Wall", Faction::Player, 0, &["Keep", "Moor"]),
                territory("Moor", Faction::Enemy, 10, &["Wall"]),
            ],
        };
        let mut engine = engine(&scenario, 0);
        let mut autopilot = Autopilot::new(FixedRolls::new([0.0]));

        assert!(autopilot.play_turn(&mut engine).unwrap());
        assert_eq!(engine.state().get("Keep").unwrap().army, 1);
        assert_eq!(engine.state().get("Wall").unwrap().army, 11);
        assert_eq!(engine.status(), "Moved 11 armies to Wall");
    }

    #[test]
    fn gives_up_without_a_legal_action() {
        let scenario = Scenario {
            territories: vec![
                territory("Keep", Faction::Player, 1, &["Wall"]),
                territory("Wall", Faction::Player, 0, &["Keep", "Moor"]),
                territory("Moor", Faction::Enemy, 10, &["Wall"]),
            ],
        };
        let mut engine = engine(&scenario, 0);
        let mut autopilot = Autopilot::new(FixedRolls::new([0.0]));

        assert!(!autopilot.play_turn(&mut engine).unwrap());
        assert_eq!(engine.phase(), Phase::PlayerTurn);
    }
}
