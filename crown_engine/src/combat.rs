use crown_shared::{error::ActionError, map::Map, record::CombatOutcome, Territory};

use crate::{config::StrengthModel, dice::Dice};

/// Resolves one attack. Attacker rolls first, then defender; ties go to the
/// defender. The returned outcome carries the post-battle armies and owner,
/// and is applied to the session by committing it.
pub fn resolve<D: Dice + ?Sized>(
    attacker: &Territory,
    defender: &Territory,
    model: StrengthModel,
    dice: &mut D,
) -> Result<CombatOutcome, ActionError> {
    if attacker.army == 0 {
        return Err(ActionError::EmptyArmy);
    }

    if attacker.owner == defender.owner {
        return Err(ActionError::FriendlyTarget);
    }

    let attack_roll = model.roll(attacker.army, dice.roll());
    let defend_roll = model.roll(defender.army, dice.roll());

    let mut outcome = CombatOutcome {
        attacking_territory: attacker.id,
        defending_territory: defender.id,
        attacker_faction: attacker.owner,
        attack_roll,
        defend_roll,
        attacker_won: attack_roll > defend_roll,
        conquered: false,
        attacker_army: attacker.army,
        defender_army: defender.army,
        defender_owner: defender.owner,
    };

    if outcome.attacker_won {
        outcome.defender_army = defender.army.saturating_sub(model.losses(attack_roll));

        // A territory never sits at zero army: it falls to the attacker,
        // who splits its army to garrison it.
        if outcome.defender_army == 0 {
            outcome.conquered = true;
            outcome.defender_owner = attacker.owner;
            outcome.defender_army = attacker.army / 2;
            outcome.attacker_army = attacker.army / 2;
        }
    } else {
        outcome.attacker_army = attacker.army.saturating_sub(model.losses(defend_roll));
    }

    Ok(outcome)
}

/// Status line for the UI.
pub fn describe(outcome: &CombatOutcome, map: &Map) -> String {
    let defender = map.name(outcome.defending_territory);
    if outcome.conquered {
        format!("{} conquered {}!", outcome.attacker_faction, defender)
    } else if outcome.attacker_won {
        format!("Attack weakened {}!", defender)
    } else {
        format!("{}'s attack failed!", outcome.attacker_faction)
    }
}
