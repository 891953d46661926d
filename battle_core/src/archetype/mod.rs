//! Archetype registry - the three combatant templates
//!
//! Each archetype is plain data: stat ranges, a special skill and the skill
//! level (trigger threshold out of 100). Behaviour that differs per archetype
//! is selected by matching on [`Skill`], never by archetype.

use crate::dice::{roll_luck, Dice};
use crate::types::{LuckRange, Skill, StatRange, Stats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combatant template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Swordsman,
    Brute,
    Grappler,
}

/// Stat ranges and skill assignment of an archetype
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub health: StatRange,
    pub strength: StatRange,
    pub defence: StatRange,
    pub speed: StatRange,
    pub luck: LuckRange,
    pub skill: Skill,
    /// Marker threshold for the skill to fire (lower is rarer)
    pub skill_level: u32,
}

/// Registry table, in selection order
pub const ARCHETYPES: [ArchetypeProfile; 3] = [
    ArchetypeProfile {
        archetype: Archetype::Swordsman,
        health: StatRange::new(40, 60),
        strength: StatRange::new(60, 70),
        defence: StatRange::new(20, 30),
        speed: StatRange::new(90, 100),
        luck: LuckRange::new(0.3, 0.5),
        skill: Skill::LuckyStrike,
        skill_level: 5,
    },
    ArchetypeProfile {
        archetype: Archetype::Brute,
        health: StatRange::new(90, 100),
        strength: StatRange::new(65, 75),
        defence: StatRange::new(40, 50),
        speed: StatRange::new(40, 65),
        luck: LuckRange::new(0.3, 0.35),
        skill: Skill::StunningBlow,
        skill_level: 2,
    },
    ArchetypeProfile {
        archetype: Archetype::Grappler,
        health: StatRange::new(60, 100),
        strength: StatRange::new(75, 80),
        defence: StatRange::new(35, 40),
        speed: StatRange::new(60, 80),
        luck: LuckRange::new(0.3, 0.4),
        skill: Skill::CounterAttack,
        skill_level: 4,
    },
];

impl Archetype {
    /// Get all archetypes
    pub fn all() -> &'static [Archetype] {
        &[Archetype::Swordsman, Archetype::Brute, Archetype::Grappler]
    }

    /// Look up this archetype's profile
    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Archetype::Swordsman => &ARCHETYPES[0],
            Archetype::Brute => &ARCHETYPES[1],
            Archetype::Grappler => &ARCHETYPES[2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Swordsman => "Swordsman",
            Archetype::Brute => "Brute",
            Archetype::Grappler => "Grappler",
        }
    }

    pub fn skill(self) -> Skill {
        self.profile().skill
    }

    pub fn skill_level(self) -> u32 {
        self.profile().skill_level
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ArchetypeProfile {
    /// Roll all five attributes inside this profile's ranges
    pub fn roll_stats(&self, dice: &mut (impl Dice + ?Sized)) -> Stats {
        Stats {
            health: dice.roll(self.health.min, self.health.max),
            strength: dice.roll(self.strength.min, self.strength.max),
            defence: dice.roll(self.defence.min, self.defence.max),
            speed: dice.roll(self.speed.min, self.speed.max),
            luck: roll_luck(dice, self.luck.min, self.luck.max),
        }
    }
}

/// Pick one of the three archetypes uniformly
pub fn pick_random_archetype(dice: &mut (impl Dice + ?Sized)) -> Archetype {
    let index = dice.roll(0, ARCHETYPES.len() as u32 - 1) as usize;
    ARCHETYPES[index].archetype
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_profiles_match_their_archetype() {
        for &archetype in Archetype::all() {
            assert_eq!(archetype.profile().archetype, archetype);
        }
    }

    #[test]
    fn test_skill_assignment() {
        assert_eq!(Archetype::Swordsman.skill(), Skill::LuckyStrike);
        assert_eq!(Archetype::Brute.skill(), Skill::StunningBlow);
        assert_eq!(Archetype::Grappler.skill(), Skill::CounterAttack);
        assert_eq!(Archetype::Swordsman.skill_level(), 5);
        assert_eq!(Archetype::Brute.skill_level(), 2);
        assert_eq!(Archetype::Grappler.skill_level(), 4);
    }

    #[test]
    fn test_profile_ranges_within_universal_bounds() {
        for profile in &ARCHETYPES {
            for range in [profile.health, profile.strength, profile.defence, profile.speed] {
                assert!(StatRange::UNIVERSAL.contains(range.min));
                assert!(StatRange::UNIVERSAL.contains(range.max));
                assert!(range.min <= range.max);
            }
            assert!(LuckRange::UNIVERSAL.contains(profile.luck.min));
            assert!(LuckRange::UNIVERSAL.contains(profile.luck.max));
        }
    }

    #[test]
    fn test_pick_random_archetype_is_uniform() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0u32; 3];
        for _ in 0..30_000 {
            match pick_random_archetype(&mut rng) {
                Archetype::Swordsman => counts[0] += 1,
                Archetype::Brute => counts[1] += 1,
                Archetype::Grappler => counts[2] += 1,
            }
        }
        for count in counts {
            assert!((9_000..=11_000).contains(&count), "skewed pick: {:?}", counts);
        }
    }

    #[test]
    fn test_pick_follows_table_order() {
        let mut dice = ScriptedDice::new([0, 1, 2], 0);
        assert_eq!(pick_random_archetype(&mut dice), Archetype::Swordsman);
        assert_eq!(pick_random_archetype(&mut dice), Archetype::Brute);
        assert_eq!(pick_random_archetype(&mut dice), Archetype::Grappler);
    }

    #[test]
    fn test_roll_stats_at_range_edges() {
        let profile = Archetype::Brute.profile();

        let low = profile.roll_stats(&mut ScriptedDice::constant(0));
        assert_eq!(low.health, 90);
        assert_eq!(low.speed, 40);
        assert!((low.luck - 0.3).abs() < f64::EPSILON);

        let high = profile.roll_stats(&mut ScriptedDice::constant(100));
        assert_eq!(high.health, 100);
        assert_eq!(high.strength, 75);
        assert!((high.luck - 0.35).abs() < f64::EPSILON);
    }
}
