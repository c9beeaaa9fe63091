mod mov;

use std::fmt;

use crate::{
    faction::{Faction, Side},
    map::TerritoryId,
};
pub use mov::*;

/// One entry of the session log. Every change to territories, gold or turn
/// is committed as a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Attack(Attack),
    Income(Income),
    StartTurn(Side),
    Winner(Outcome),
    Move(Side, Move),
}

impl Record {
    pub fn move_attack(side: Side, attack: MoveAttack) -> Self {
        Record::Move(side, Move::Attack(attack))
    }

    pub fn move_fortify(side: Side, fortify: MoveFortify) -> Self {
        Record::Move(side, Move::Fortify(fortify))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    /// Returns `true` if the outcome is [`Victory`].
    ///
    /// [`Victory`]: Outcome::Victory
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory)
    }

    /// Returns `true` if the outcome is [`Defeat`].
    ///
    /// [`Defeat`]: Outcome::Defeat
    #[must_use]
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeat)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => f.write_str("Victory! You are the King!"),
            Outcome::Defeat => f.write_str("Defeat! The enemy prevails."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attack {
    pub move_attack_id: usize,
    pub outcome: CombatOutcome,
}

/// Result of one battle. Armies and owner are the values after the battle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatOutcome {
    pub attacking_territory: TerritoryId,
    pub defending_territory: TerritoryId,
    pub attacker_faction: Faction,
    pub attack_roll: f64,
    pub defend_roll: f64,
    pub attacker_won: bool,
    pub conquered: bool,
    pub attacker_army: u32,
    pub defender_army: u32,
    pub defender_owner: Faction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Income {
    pub side: Side,
    pub amount: u32,
}
