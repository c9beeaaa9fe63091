use crown_shared::{
    faction::Side,
    record::{Attack, Income, Move, MoveFortify, MoveRecruit, Outcome, Record},
};

use super::EngineState;

impl EngineState {
    pub fn commit(&mut self, record: Record) {
        self.recording.push(record.clone());
        match record {
            Record::Attack(r) => self.commit_record_attack(r),
            Record::Income(r) => self.commit_record_income(r),
            Record::StartTurn(side) => self.commit_record_start_turn(side),
            Record::Winner(outcome) => self.commit_record_winner(outcome),
            Record::Move(side, mov) => match mov {
                Move::Attack(_) => {}
                Move::Fortify(r) => self.commit_move_fortify(side, r),
                Move::Recruit(r) => self.commit_move_recruit(side, r),
            },
        }
    }

    fn commit_move_fortify(&mut self, _: Side, r: MoveFortify) {
        self.add_army(r.source_territory, -i64::from(r.troop_count));
        self.add_army(r.target_territory, i64::from(r.troop_count));
    }

    fn commit_move_recruit(&mut self, side: Side, r: MoveRecruit) {
        self.gold[side] = self.gold[side].saturating_sub(r.cost);
        self.add_army(r.territory, i64::from(r.army));
    }

    fn commit_record_attack(&mut self, r: Attack) {
        let outcome = r.outcome;
        self.territories[outcome.attacking_territory.index()].army = outcome.attacker_army;
        self.territories[outcome.defending_territory.index()].army = outcome.defender_army;
        self.set_owner(outcome.defending_territory, outcome.defender_owner);
    }

    fn commit_record_income(&mut self, r: Income) {
        self.gold[r.side] = self.gold[r.side].saturating_add(r.amount);
    }

    fn commit_record_start_turn(&mut self, side: Side) {
        self.turn = side;
    }

    fn commit_record_winner(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use crown_shared::{
        faction::Faction,
        record::{CombatOutcome, MoveAttack},
        scenario::Scenario,
    };

    use super::*;
    use crate::{config::EngineConfig, state::Phase};

    fn state() -> EngineState {
        EngineState::new(&Scenario::crown_conquest(), &EngineConfig::default()).unwrap()
    }

    #[test]
    fn fortify_moves_troops() {
        let mut state = state();
        let northland = state.map().id("Northland").unwrap();
        let highland = state.map().id("Highland").unwrap();

        state.commit(Record::move_fortify(
            Side::Player,
            MoveFortify {
                source_territory: northland,
                target_territory: highland,
                troop_count: 20,
            },
        ));

        assert_eq!(state.territory(northland).army, 30);
        assert_eq!(state.territory(highland).army, 55);
        assert_eq!(state.recording().len(), 1);
    }

    #[test]
    fn attack_record_applies_outcome() {
        let mut state = state();
        let northland = state.map().id("Northland").unwrap();
        let eastland = state.map().id("Eastland").unwrap();

        state.commit(Record::move_attack(
            Side::Player,
            MoveAttack {
                attacking_territory: northland,
                defending_territory: eastland,
            },
        ));
        state.commit(Record::Attack(Attack {
            move_attack_id: 0,
            outcome: CombatOutcome {
                attacking_territory: northland,
                defending_territory: eastland,
                attacker_faction: Faction::Player,
                attack_roll: 90.0,
                defend_roll: 10.0,
                attacker_won: true,
                conquered: true,
                attacker_army: 25,
                defender_army: 25,
                defender_owner: Faction::Player,
            },
        }));

        assert_eq!(state.territory(northland).army, 25);
        assert_eq!(state.territory(eastland).army, 25);
        assert_eq!(state.territory(eastland).owner, Faction::Player);
        assert_eq!(state.territories_owned_by(Faction::Player).len(), 3);
    }

    #[test]
    fn turn_gold_and_winner() {
        let mut state = state();
        assert_eq!(state.phase(), Phase::PlayerTurn);

        state.commit(Record::Income(Income {
            side: Side::Enemy,
            amount: 22,
        }));
        state.commit(Record::StartTurn(Side::Enemy));
        assert_eq!(state.gold(Side::Enemy), 122);
        assert_eq!(state.phase(), Phase::EnemyTurn);

        state.commit(Record::Winner(Outcome::Defeat));
        assert_eq!(state.phase(), Phase::GameOver(Outcome::Defeat));
    }
}
