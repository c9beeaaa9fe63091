use crown_shared::{
    error::{ActionError, GameError, ScenarioError},
    faction::{Faction, Side},
    map::TerritoryId,
    record::{Attack, CombatOutcome, MoveAttack, MoveFortify, Outcome, Record},
    scenario::Scenario,
};
use tracing::{debug, info, warn};

use crate::{
    combat,
    config::{EngineConfig, IncomeCadence},
    dice::Dice,
    economy,
    policy::EnemyPolicy,
    snapshot::{PendingMoveView, Snapshot, TerritoryView},
    state::{record, EngineState, Phase},
    RECRUIT_ARMY,
};

/// An army move waiting for the host to supply an amount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingMove {
    pub source: TerritoryId,
    pub target: TerritoryId,
}

/// One game session and its turn controller.
///
/// The host forwards input through the `on_*` entry points and calls [`tick`]
/// once per frame; the Enemy turn runs inside `tick`. Entry points must not be
/// called concurrently. Rejected actions return an error, set [`status`] to
/// its message and leave the session unchanged.
///
/// [`tick`]: GameEngine::tick
/// [`status`]: GameEngine::status
pub struct GameEngine {
    config: EngineConfig,
    enemy: Box<dyn EnemyPolicy>,
    dice: Box<dyn Dice>,
    state: EngineState,
    selection: Option<TerritoryId>,
    pending_move: Option<PendingMove>,
    help_visible: bool,
    status: String,
}

impl GameEngine {
    pub fn new(
        scenario: &Scenario,
        config: EngineConfig,
        enemy: Box<dyn EnemyPolicy>,
        dice: Box<dyn Dice>,
    ) -> Result<Self, ScenarioError> {
        let state = EngineState::new(scenario, &config)?;

        Ok(Self {
            config,
            enemy,
            dice,
            state,
            selection: None,
            pending_move: None,
            help_visible: true,
            status: String::new(),
        })
    }

    /// Throws the current game away and starts `scenario` from scratch.
    pub fn restart(&mut self, scenario: &Scenario) -> Result<(), ScenarioError> {
        self.state = EngineState::new(scenario, &self.config)?;
        self.enemy.reset();
        self.selection = None;
        self.pending_move = None;
        self.help_visible = true;
        self.status.clear();
        Ok(())
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn selection(&self) -> Option<TerritoryId> {
        self.selection
    }

    pub fn pending_move(&self) -> Option<PendingMove> {
        self.pending_move
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Per-frame update: detects the end of the game and plays the Enemy turn
    /// when one is due.
    pub fn tick(&mut self) -> Phase {
        if self.check_game_over().is_none() && self.state.turn() == Side::Enemy {
            self.run_enemy_turn();
            self.check_game_over();
        }

        self.state.phase()
    }

    pub fn on_territory_clicked(&mut self, name: &str) -> Result<(), GameError> {
        let result = self.territory_clicked(name);
        self.report(result)
    }

    pub fn on_move_amount_entered(&mut self, amount: u32) -> Result<(), GameError> {
        let result = self.move_amount_entered(amount);
        self.report(result)
    }

    pub fn on_recruit_requested(&mut self) -> Result<(), GameError> {
        let result = self.recruit_requested();
        self.report(result)
    }

    /// Returns whether help is now visible.
    pub fn on_toggle_help(&mut self) -> bool {
        self.help_visible = !self.help_visible;
        self.help_visible
    }

    /// Drops the selection and any pending move.
    pub fn on_cancel(&mut self) {
        self.selection = None;
        self.pending_move = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        let map = self.state.map();
        let territories = self
            .state
            .territories()
            .iter()
            .map(|x| TerritoryView {
                name: map.name(x.id).to_owned(),
                owner: x.owner,
                army: x.army,
                gold_income: map.gold_income(x.id),
                position: map.position(x.id),
                selected: self.selection == Some(x.id),
            })
            .collect();

        let pending_move = self.pending_move.map(|x| PendingMoveView {
            source: map.name(x.source).to_owned(),
            target: map.name(x.target).to_owned(),
            max: self.state.territory(x.source).army.saturating_sub(1),
        });

        Snapshot {
            territories,
            player_gold: self.state.gold(Side::Player),
            enemy_gold: self.state.gold(Side::Enemy),
            turn: self.state.turn(),
            status: self.status.clone(),
            selected_territory: self.selection.map(|x| map.name(x).to_owned()),
            pending_move,
            help_visible: self.help_visible,
            game_over: self.state.outcome().is_some(),
            outcome: self.state.outcome(),
        }
    }

    fn report<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        match &result {
            // Keep the victory or defeat message on screen.
            Err(GameError::InvalidAction(ActionError::GameOver)) => {}
            Err(err) => {
                debug!(%err, "action rejected");
                self.status = err.to_string();
            }
            Ok(_) => {}
        }

        result
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state.phase() {
            Phase::PlayerTurn => Ok(()),
            Phase::EnemyTurn => Err(ActionError::NotYourTurn),
            Phase::GameOver(_) => Err(ActionError::GameOver),
        }
    }

    fn territory_clicked(&mut self, name: &str) -> Result<(), GameError> {
        if self.help_visible {
            self.help_visible = false;
            return Ok(());
        }

        self.ensure_player_turn()?;
        let target = self.state.map().id(name)?;

        let Some(source) = self.selection else {
            if !self.state.territory(target).owner.is_player() {
                return Err(ActionError::NotOwned(name.to_owned()).into());
            }

            self.selection = Some(target);
            self.status = format!("Selected: {name}");
            debug!(territory = name, "selected");
            return Ok(());
        };

        if source == target {
            self.on_cancel();
            self.status = format!("Deselected: {name}");
            return Ok(());
        }

        let map = self.state.map();
        if !map.is_adjacent(source, target) {
            return Err(ActionError::NotAdjacent {
                from: map.name(source).to_owned(),
                to: name.to_owned(),
            }
            .into());
        }

        if self.state.territory(target).owner.is_player() {
            let max = self.state.territory(source).army.saturating_sub(1);
            self.status = format!(
                "Move armies from {} to {name} (Max: {max})",
                map.name(source)
            );
            self.pending_move = Some(PendingMove { source, target });
            Ok(())
        } else {
            let outcome = self.attack(Side::Player, source, target)?;
            self.status = combat::describe(&outcome, self.state.map());
            self.end_player_turn();
            Ok(())
        }
    }

    fn move_amount_entered(&mut self, amount: u32) -> Result<(), GameError> {
        self.ensure_player_turn()?;
        let PendingMove { source, target } = self.pending_move.ok_or(ActionError::NoPendingMove)?;

        let available = self.state.territory(source).army;
        if amount == 0 || amount >= available {
            return Err(ActionError::InvalidMoveAmount {
                amount,
                max: available.saturating_sub(1),
            }
            .into());
        }

        self.state.commit(Record::move_fortify(
            Side::Player,
            MoveFortify {
                source_territory: source,
                target_territory: target,
                troop_count: amount,
            },
        ));

        let map = self.state.map();
        debug!(
            source = map.name(source),
            target = map.name(target),
            amount,
            "moved armies"
        );
        self.status = format!("Moved {amount} armies to {}", map.name(target));
        self.end_player_turn();
        Ok(())
    }

    fn recruit_requested(&mut self) -> Result<(), GameError> {
        self.ensure_player_turn()?;
        let recruitment = economy::recruit(&mut self.state, Side::Player, self.selection)?;
        self.status = format!(
            "Recruited {RECRUIT_ARMY} soldiers in {}",
            self.state.map().name(recruitment.territory)
        );
        Ok(())
    }

    /// Resolves and commits one attack from `source` into `target`.
    fn attack(
        &mut self,
        side: Side,
        source: TerritoryId,
        target: TerritoryId,
    ) -> Result<CombatOutcome, GameError> {
        let map = self.state.map();
        if !map.is_adjacent(source, target) {
            return Err(ActionError::NotAdjacent {
                from: map.name(source).to_owned(),
                to: map.name(target).to_owned(),
            }
            .into());
        }

        let attacker = self.state.territory(source);
        if attacker.owner != side.faction() {
            return Err(ActionError::NotOwned(map.name(source).to_owned()).into());
        }

        let outcome = combat::resolve(
            attacker,
            self.state.territory(target),
            self.config.strength_model,
            &mut *self.dice,
        )?;

        self.state.commit(Record::move_attack(
            side,
            MoveAttack {
                attacking_territory: source,
                defending_territory: target,
            },
        ));
        let move_attack_id = self.state.recording().len() - 1;
        self.state.commit(Record::Attack(Attack {
            move_attack_id,
            outcome,
        }));

        let map = self.state.map();
        info!(
            %side,
            attacker = map.name(source),
            defender = map.name(target),
            attack_roll = outcome.attack_roll,
            defend_roll = outcome.defend_roll,
            conquered = outcome.conquered,
            "battle"
        );

        Ok(outcome)
    }

    fn end_player_turn(&mut self) {
        self.selection = None;
        self.pending_move = None;
        self.credit_income(Side::Player);
        self.start_turn(Side::Enemy);
        self.check_game_over();
    }

    fn run_enemy_turn(&mut self) {
        self.credit_income(Side::Enemy);

        if let Some(territory) = self.enemy.query_recruit(&self.state) {
            match economy::recruit(&mut self.state, Side::Enemy, Some(territory)) {
                Ok(recruitment) => {
                    self.status = format!(
                        "Enemy recruited in {}",
                        self.state.map().name(recruitment.territory)
                    );
                }
                Err(err) => warn!(%err, "enemy recruitment rejected"),
            }
        }

        for source in self.state.territories_owned_by(Faction::Enemy) {
            let Some(target) = self.enemy.query_attack(&self.state, source) else {
                continue;
            };

            match self.attack(Side::Enemy, source, target) {
                Ok(outcome) => self.status = combat::describe(&outcome, self.state.map()),
                Err(err) => warn!(%err, "enemy attack rejected"),
            }
        }

        if self.config.income_cadence == IncomeCadence::Twice {
            self.credit_income(Side::Player);
        }

        self.start_turn(Side::Player);
    }

    fn credit_income(&mut self, side: Side) {
        let record = record::income(&self.state, side);
        debug!(?record, "income");
        self.state.commit(record);
    }

    fn start_turn(&mut self, side: Side) {
        info!(%side, "turn started");
        self.state.commit(Record::StartTurn(side));
    }

    fn check_game_over(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.state.outcome() {
            return Some(outcome);
        }

        let outcome = record::winner(&self.state)?;
        self.state.commit(Record::Winner(outcome));
        self.selection = None;
        self.pending_move = None;
        self.status = outcome.to_string();
        info!(?outcome, "game over");
        Some(outcome)
    }
}
