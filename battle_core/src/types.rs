//! Core types shared by the archetype table, combatants and combat resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Special skill owned by an archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Double strength before defence is subtracted
    LuckyStrike,
    /// Opponent loses their next turn, then an ordinary hit lands
    StunningBlow,
    /// Flat damage back at the attacker after a successful dodge
    CounterAttack,
}

/// When a skill gets a chance to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// Checked when the owner lands an attack
    Offensive,
    /// Checked when the owner dodges an attack
    Defensive,
}

impl Skill {
    /// Get all skills
    pub fn all() -> &'static [Skill] {
        &[Skill::LuckyStrike, Skill::StunningBlow, Skill::CounterAttack]
    }

    pub fn kind(self) -> SkillKind {
        match self {
            Skill::LuckyStrike | Skill::StunningBlow => SkillKind::Offensive,
            Skill::CounterAttack => SkillKind::Defensive,
        }
    }

    /// Display name used in narration
    pub fn name(self) -> &'static str {
        match self {
            Skill::LuckyStrike => "Lucky Strike",
            Skill::StunningBlow => "Stunning Blow",
            Skill::CounterAttack => "Counter Attack",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five rolled attributes of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Health,
    Strength,
    Defence,
    Speed,
    Luck,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Health => "health",
            Attribute::Strength => "strength",
            Attribute::Defence => "defence",
            Attribute::Speed => "speed",
            Attribute::Luck => "luck",
        };
        f.write_str(name)
    }
}

/// Inclusive integer range for health, strength, defence and speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    /// Bound every integer attribute must respect regardless of archetype
    pub const UNIVERSAL: StatRange = StatRange::new(0, 100);

    pub const fn new(min: u32, max: u32) -> Self {
        StatRange { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive fractional range for luck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckRange {
    pub min: f64,
    pub max: f64,
}

impl LuckRange {
    /// Luck is a probability
    pub const UNIVERSAL: LuckRange = LuckRange::new(0.0, 1.0);

    pub const fn new(min: f64, max: f64) -> Self {
        LuckRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Attribute values of a combatant at creation time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: u32,
    pub strength: u32,
    pub defence: u32,
    pub speed: u32,
    pub luck: f64,
}
