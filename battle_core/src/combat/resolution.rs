//! Exchange resolution - dodge check, skill check, damage

use super::result::{ExchangeOutcome, ExchangeReport, NarrationLine, Tone};
use crate::combatant::Combatant;
use crate::dice::Dice;
use crate::types::{Skill, SkillKind};
use tracing::debug;

/// Flat damage dealt by a counter attack
pub const COUNTER_ATTACK_DAMAGE: i32 = 10;

/// Result of a dodge attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DodgeResult {
    pub dodged: bool,
    pub countered: bool,
}

/// Resolve one attack from `attacker` against `opponent`
///
/// 1. A stunned attacker loses the turn (the stun is consumed)
/// 2. The opponent tries to dodge, possibly countering
/// 3. An offensive skill may fire, otherwise an ordinary attack lands
pub fn launch_attack(
    attacker: &mut Combatant,
    opponent: &mut Combatant,
    dice: &mut (impl Dice + ?Sized),
) -> ExchangeReport {
    let mut narration = Vec::new();

    let outcome = if attacker.take_skip() {
        narration.push(NarrationLine::new(
            Tone::Skip,
            format!("{} loses their turn.", attacker.display_name()),
        ));
        ExchangeOutcome::Skipped
    } else {
        let dodge = attempt_dodge(opponent, attacker, dice, &mut narration);
        if dodge.dodged {
            ExchangeOutcome::Dodged {
                countered: dodge.countered,
            }
        } else if attacker.skill().kind() == SkillKind::Offensive
            && skill_triggers(attacker.skill_level(), dice)
        {
            let damage = use_special_skill(attacker, opponent, &mut narration);
            ExchangeOutcome::Hit {
                skill: Some(attacker.skill()),
                damage,
            }
        } else {
            let damage = strike(attacker.strength(), opponent);
            narration.push(NarrationLine::new(
                Tone::Hit,
                format!(
                    "{}'s attack succeeds. {}'s health is down to {}%.",
                    attacker.display_name(),
                    opponent.display_name(),
                    opponent.health()
                ),
            ));
            ExchangeOutcome::Hit {
                skill: None,
                damage,
            }
        }
    };

    debug!(
        attacker = %attacker.display_name(),
        opponent = %opponent.display_name(),
        ?outcome,
        attacker_health = attacker.health(),
        opponent_health = opponent.health(),
        "exchange resolved"
    );

    ExchangeReport {
        outcome,
        narration,
        attacker_health: attacker.health(),
        opponent_health: opponent.health(),
    }
}

/// Let `defender` try to dodge `attacker`
///
/// The dodge succeeds when a marker is at most `luck * 100`. A successful
/// dodge gives a defensive skill its own trigger check.
pub fn attempt_dodge(
    defender: &mut Combatant,
    attacker: &mut Combatant,
    dice: &mut (impl Dice + ?Sized),
    narration: &mut Vec<NarrationLine>,
) -> DodgeResult {
    if !dodge_succeeds(defender.luck(), dice) {
        return DodgeResult {
            dodged: false,
            countered: false,
        };
    }

    narration.push(NarrationLine::new(
        Tone::Dodge,
        format!(
            "{} dodges {}'s attack.",
            defender.display_name(),
            attacker.display_name()
        ),
    ));

    let countered = defender.skill().kind() == SkillKind::Defensive
        && skill_triggers(defender.skill_level(), dice);
    if countered {
        use_special_skill(defender, attacker, narration);
    }

    DodgeResult {
        dodged: true,
        countered,
    }
}

/// Dodge check: marker in `[0, 100]` at most `luck * 100`
pub fn dodge_succeeds(luck: f64, dice: &mut (impl Dice + ?Sized)) -> bool {
    f64::from(dice.marker()) <= (luck * 100.0).round()
}

/// Skill-trigger check: marker in `[0, 100]` at most `skill_level`
pub fn skill_triggers(skill_level: u32, dice: &mut (impl Dice + ?Sized)) -> bool {
    dice.marker() <= skill_level
}

/// Ordinary damage formula: `power - defence`
pub fn attack_damage(power: u32, defence: u32) -> i32 {
    power as i32 - defence as i32
}

/// Hit `target` with `power`, returning the health actually lost
fn strike(power: u32, target: &mut Combatant) -> u32 {
    let before = target.health();
    target.reduce_health(attack_damage(power, target.defence()));
    before - target.health()
}

/// Apply `owner`'s special skill to `target`, returning the health lost
fn use_special_skill(
    owner: &Combatant,
    target: &mut Combatant,
    narration: &mut Vec<NarrationLine>,
) -> u32 {
    let skill = owner.skill();
    let owner_name = owner.display_name();
    let target_name = target.display_name();

    let (damage, text) = match skill {
        Skill::LuckyStrike => {
            let damage = strike(owner.strength() * 2, target);
            let text = format!(
                "{owner_name} strikes {target_name} with the {skill} special skill. \
                 {target_name}'s health is down to {}%.",
                target.health()
            );
            (damage, text)
        }
        Skill::StunningBlow => {
            target.stun();
            let damage = strike(owner.strength(), target);
            let text = format!(
                "{owner_name} strikes {target_name} with the {skill} special skill. \
                 {target_name} will have to miss a turn, and their health is down to {}%.",
                target.health()
            );
            (damage, text)
        }
        Skill::CounterAttack => {
            let before = target.health();
            target.reduce_health(COUNTER_ATTACK_DAMAGE);
            let text = format!(
                "{owner_name} does not just dodge {target_name}'s attack, but responds with \
                 the {skill} special skill. {target_name}'s health is down to {}%.",
                target.health()
            );
            (before - target.health(), text)
        }
    };

    narration.push(NarrationLine::new(Tone::Special, text));
    damage
}
