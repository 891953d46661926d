//! Combatant - identity, live stats and turn-skip status

mod name;

pub use name::{normalize_name, NAME_MAX_LENGTH, NAME_MIN_LENGTH};

use crate::archetype::Archetype;
use crate::combat::{self, ExchangeReport, NarrationLine};
use crate::dice::Dice;
use crate::error::{BoundScope, CombatantError};
use crate::types::{Attribute, LuckRange, Skill, StatRange, Stats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fighter in a battle
///
/// All attributes except `health` and the turn-skip flag are fixed at
/// creation. Health only ever goes down and is floored at zero.
///
/// Deserialisation runs the same name and bound checks as the constructors;
/// `skill` and `skill_level` always come from the archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CombatantRecord")]
pub struct Combatant {
    archetype: Archetype,
    name: String,
    health: u32,
    strength: u32,
    defence: u32,
    speed: u32,
    luck: f64,
    skill: Skill,
    skill_level: u32,
    skip_next_turn: bool,
}

impl Combatant {
    /// Create a combatant with attributes rolled from the archetype's ranges
    pub fn new(
        archetype: Archetype,
        name: &str,
        dice: &mut (impl Dice + ?Sized),
    ) -> Result<Self, CombatantError> {
        let name = normalize_name(name)?;
        let stats = archetype.profile().roll_stats(dice);
        Self::build(archetype, name, stats)
    }

    /// Create a combatant with explicit attributes
    ///
    /// The same bound checks apply as for rolled attributes.
    pub fn with_stats(
        archetype: Archetype,
        name: &str,
        stats: Stats,
    ) -> Result<Self, CombatantError> {
        let name = normalize_name(name)?;
        Self::build(archetype, name, stats)
    }

    fn build(archetype: Archetype, name: String, stats: Stats) -> Result<Self, CombatantError> {
        validate_stats(archetype, &stats)?;
        let profile = archetype.profile();

        Ok(Combatant {
            archetype,
            name,
            health: stats.health,
            strength: stats.strength,
            defence: stats.defence,
            speed: stats.speed,
            luck: stats.luck,
            skill: profile.skill,
            skill_level: profile.skill_level,
            skip_next_turn: false,
        })
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Normalised name without the archetype prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as used in narration, e.g. "Swordsman Aria"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.archetype, self.name)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn defence(&self) -> u32 {
        self.defence
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn luck(&self) -> f64 {
        self.luck
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    pub fn skill_level(&self) -> u32 {
        self.skill_level
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Current attribute values
    pub fn stats(&self) -> Stats {
        Stats {
            health: self.health,
            strength: self.strength,
            defence: self.defence,
            speed: self.speed,
            luck: self.luck,
        }
    }

    /// Whether this combatant will lose their next turn
    pub fn skips_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Make this combatant lose their next turn
    pub fn stun(&mut self) {
        self.skip_next_turn = true;
    }

    /// Consume a pending turn skip, returning whether one was pending
    pub(crate) fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next_turn)
    }

    /// Apply damage: `health = max(0, health - amount)`
    ///
    /// A negative amount is treated as zero; health is never raised.
    pub fn reduce_health(&mut self, amount: i32) {
        let amount = amount.max(0).unsigned_abs();
        self.health = self.health.saturating_sub(amount);
    }

    /// Attack `opponent`, resolving dodge and skill checks
    pub fn launch_attack(
        &mut self,
        opponent: &mut Combatant,
        dice: &mut (impl Dice + ?Sized),
    ) -> ExchangeReport {
        combat::launch_attack(self, opponent, dice)
    }

    /// Try to dodge `attacker`, possibly countering
    ///
    /// Returns whether the attack was dodged; narration is appended to `log`.
    pub fn attempt_dodge(
        &mut self,
        attacker: &mut Combatant,
        dice: &mut (impl Dice + ?Sized),
        log: &mut Vec<NarrationLine>,
    ) -> bool {
        combat::attempt_dodge(self, attacker, dice, log).dodged
    }

    /// Multi-line statistics card used in the introduction
    pub fn statistics(&self) -> String {
        format!(
            "{}:\nDesignation: {}\nHealth: {}\nStrength: {}\nDefence: {}\nSpeed: {}\nLuck: {}\nSpecial skill: {}\n",
            self.name,
            self.archetype,
            self.health,
            self.strength,
            self.defence,
            self.speed,
            self.luck,
            self.skill,
        )
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statistics())
    }
}

/// Serialised form of a [`Combatant`], checked before it becomes one
#[derive(Deserialize)]
struct CombatantRecord {
    archetype: Archetype,
    name: String,
    health: u32,
    strength: u32,
    defence: u32,
    speed: u32,
    luck: f64,
    #[serde(default)]
    skip_next_turn: bool,
}

impl TryFrom<CombatantRecord> for Combatant {
    type Error = CombatantError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        // Health may have fallen below the archetype's starting range mid-battle
        let starting_health = record.health.max(record.archetype.profile().health.min);
        let stats = Stats {
            health: starting_health,
            strength: record.strength,
            defence: record.defence,
            speed: record.speed,
            luck: record.luck,
        };

        let mut combatant = Combatant::with_stats(record.archetype, &record.name, stats)?;
        combatant.health = record.health;
        combatant.skip_next_turn = record.skip_next_turn;
        Ok(combatant)
    }
}

/// Check every attribute against the universal and archetype bounds
pub fn validate_stats(archetype: Archetype, stats: &Stats) -> Result<(), CombatantError> {
    let profile = archetype.profile();

    check_int(Attribute::Health, stats.health, profile.health, archetype)?;
    check_int(Attribute::Strength, stats.strength, profile.strength, archetype)?;
    check_int(Attribute::Defence, stats.defence, profile.defence, archetype)?;
    check_int(Attribute::Speed, stats.speed, profile.speed, archetype)?;
    check_luck(stats.luck, profile.luck, archetype)
}

fn check_int(
    attribute: Attribute,
    value: u32,
    range: StatRange,
    archetype: Archetype,
) -> Result<(), CombatantError> {
    for (bound, scope) in [
        (StatRange::UNIVERSAL, BoundScope::Universal),
        (range, BoundScope::Archetype(archetype)),
    ] {
        if !bound.contains(value) {
            return Err(CombatantError::InvalidAttribute {
                attribute,
                value: f64::from(value),
                min: f64::from(bound.min),
                max: f64::from(bound.max),
                scope,
            });
        }
    }
    Ok(())
}

fn check_luck(value: f64, range: LuckRange, archetype: Archetype) -> Result<(), CombatantError> {
    for (bound, scope) in [
        (LuckRange::UNIVERSAL, BoundScope::Universal),
        (range, BoundScope::Archetype(archetype)),
    ] {
        if !bound.contains(value) {
            return Err(CombatantError::InvalidAttribute {
                attribute: Attribute::Luck,
                value,
                min: bound.min,
                max: bound.max,
                scope,
            });
        }
    }
    Ok(())
}

/// Create a combatant of `archetype` with rolled attributes
pub fn create_combatant(
    archetype: Archetype,
    name: &str,
    dice: &mut (impl Dice + ?Sized),
) -> Result<Combatant, CombatantError> {
    Combatant::new(archetype, name, dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ARCHETYPES;
    use crate::dice::ScriptedDice;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn aria() -> Combatant {
        Combatant::with_stats(
            Archetype::Swordsman,
            "aria",
            Stats {
                health: 50,
                strength: 70,
                defence: 25,
                speed: 100,
                luck: 0.3,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_assigns_skill_from_archetype() {
        let mut rng = StdRng::seed_from_u64(1);
        let grappler = create_combatant(Archetype::Grappler, "gus", &mut rng).unwrap();
        assert_eq!(grappler.skill(), Skill::CounterAttack);
        assert_eq!(grappler.skill_level(), 4);
        assert!(!grappler.skips_next_turn());
    }

    #[test]
    fn test_create_rejects_bad_name() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = create_combatant(Archetype::Brute, "", &mut rng).unwrap_err();
        assert_eq!(err, CombatantError::InvalidName { length: 0 });
    }

    #[test]
    fn test_rolled_attributes_within_bounds() {
        let mut rng = StdRng::seed_from_u64(2024);
        for profile in &ARCHETYPES {
            for _ in 0..10_000 {
                let c = create_combatant(profile.archetype, "x", &mut rng).unwrap();
                let stats = c.stats();
                assert!(profile.health.contains(stats.health));
                assert!(profile.strength.contains(stats.strength));
                assert!(profile.defence.contains(stats.defence));
                assert!(profile.speed.contains(stats.speed));
                assert!(profile.luck.contains(stats.luck));
                assert!(StatRange::UNIVERSAL.contains(stats.health));
                assert!(LuckRange::UNIVERSAL.contains(stats.luck));
            }
        }
    }

    #[test]
    fn test_with_stats_rejects_archetype_violation() {
        let err = Combatant::with_stats(
            Archetype::Swordsman,
            "aria",
            Stats {
                health: 90,
                strength: 70,
                defence: 25,
                speed: 100,
                luck: 0.3,
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            CombatantError::InvalidAttribute {
                attribute: Attribute::Health,
                value: 90.0,
                min: 40.0,
                max: 60.0,
                scope: BoundScope::Archetype(Archetype::Swordsman),
            }
        );
    }

    #[test]
    fn test_with_stats_rejects_universal_violation_first() {
        let err = Combatant::with_stats(
            Archetype::Brute,
            "boran",
            Stats {
                health: 100,
                strength: 65,
                defence: 40,
                speed: 40,
                luck: 1.5,
            },
        )
        .unwrap_err();

        match err {
            CombatantError::InvalidAttribute { attribute, scope, .. } => {
                assert_eq!(attribute, Attribute::Luck);
                assert_eq!(scope, BoundScope::Universal);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_name_and_statistics() {
        let c = aria();
        assert_eq!(c.display_name(), "Swordsman Aria");

        let card = c.statistics();
        assert!(card.starts_with("Aria:\n"));
        assert!(card.contains("Designation: Swordsman\n"));
        assert!(card.contains("Luck: 0.3\n"));
        assert!(card.contains("Special skill: Lucky Strike\n"));
    }

    #[test]
    fn test_reduce_health_floors_at_zero() {
        let mut c = aria();
        c.reduce_health(30);
        assert_eq!(c.health(), 20);
        c.reduce_health(500);
        assert_eq!(c.health(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_negative_damage_does_not_heal() {
        let mut c = aria();
        c.reduce_health(-15);
        assert_eq!(c.health(), 50);
    }

    #[test]
    fn test_skip_is_consumed_once() {
        let mut c = aria();
        c.stun();
        assert!(c.skips_next_turn());
        assert!(c.take_skip());
        assert!(!c.take_skip());
    }

    #[test]
    fn test_combatant_serializes() {
        let json = serde_json::to_string(&aria()).unwrap();
        assert!(json.contains("\"archetype\":\"swordsman\""));
        assert!(json.contains("\"skill\":\"lucky_strike\""));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_attributes() {
        let json = r#"{
            "archetype": "swordsman",
            "name": "Aria",
            "health": 500,
            "strength": 70,
            "defence": 25,
            "speed": 100,
            "luck": 7.5,
            "skill": "counter_attack",
            "skill_level": 4,
            "skip_next_turn": false
        }"#;

        let err = serde_json::from_str::<Combatant>(json).unwrap_err();
        assert!(err.to_string().contains("Combatant's health of 500"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_name() {
        let json = r#"{"archetype":"brute","name":"","health":95,"strength":70,
            "defence":45,"speed":50,"luck":0.3}"#;

        let err = serde_json::from_str::<Combatant>(json).unwrap_err();
        assert!(err.to_string().contains("name must range from 1 to 30"));
    }

    #[test]
    fn test_deserialize_takes_skill_from_archetype() {
        let json = r#"{"archetype":"swordsman","name":"aria","health":50,"strength":70,
            "defence":25,"speed":100,"luck":0.3,"skill":"counter_attack","skill_level":90}"#;

        let c: Combatant = serde_json::from_str(json).unwrap();
        assert_eq!(c.name(), "Aria");
        assert_eq!(c.skill(), Skill::LuckyStrike);
        assert_eq!(c.skill_level(), 5);
    }

    #[test]
    fn test_deserialize_keeps_battle_damage() {
        let mut c = aria();
        c.reduce_health(50);
        c.stun();

        let json = serde_json::to_string(&c).unwrap();
        let restored: Combatant = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, c);
        assert_eq!(restored.health(), 0);
        assert!(restored.skips_next_turn());
    }

    #[test]
    fn test_scripted_roll_hits_range_maximum() {
        let c =
            create_combatant(Archetype::Grappler, "gus", &mut ScriptedDice::constant(100)).unwrap();
        assert_eq!(c.health(), 100);
        assert_eq!(c.speed(), 80);
        assert!((c.luck() - 0.4).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_reduce_health_never_negative(health in 60u32..=100, damage in -200i32..200) {
            let mut c = Combatant::with_stats(
                Archetype::Grappler,
                "gus",
                Stats {
                    health,
                    strength: 75,
                    defence: 35,
                    speed: 60,
                    luck: 0.3,
                },
            )
            .unwrap();

            c.reduce_health(damage);

            prop_assert!(c.health() <= health);
            if damage >= 0 {
                prop_assert_eq!(c.health() as i64, (health as i64 - damage as i64).max(0));
            } else {
                prop_assert_eq!(c.health(), health);
            }
        }

        #[test]
        fn prop_rolled_stats_always_valid(seed in any::<u64>(), pick in 0usize..3) {
            let mut rng = StdRng::seed_from_u64(seed);
            let profile = &ARCHETYPES[pick];
            let stats = profile.roll_stats(&mut rng);
            prop_assert!(validate_stats(profile.archetype, &stats).is_ok());
        }
    }
}
