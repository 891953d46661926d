//! ExchangeReport - Outcome of one attack attempt

use crate::types::Skill;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened during an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExchangeOutcome {
    /// The attacker was stunned and lost the turn
    Skipped,
    /// The opponent dodged; `countered` when the dodge fired a counter attack
    Dodged { countered: bool },
    /// The attack landed, with the offensive skill used (if any)
    Hit {
        skill: Option<Skill>,
        damage: u32,
    },
}

impl ExchangeOutcome {
    /// Health the opponent lost in this exchange
    pub fn damage_dealt(&self) -> u32 {
        match self {
            ExchangeOutcome::Hit { damage, .. } => *damage,
            _ => 0,
        }
    }
}

/// Category of a narration line, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Separators and round headers
    Heading,
    /// Combatant introductions
    Introduction,
    Hit,
    /// A special skill fired
    Special,
    Dodge,
    Skip,
    /// Winner or tie announcement
    Announcement,
}

/// One line of battle narration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationLine {
    pub tone: Tone,
    pub text: String,
}

impl NarrationLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        NarrationLine {
            tone,
            text: text.into(),
        }
    }
}

impl fmt::Display for NarrationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of `launch_attack`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeReport {
    pub outcome: ExchangeOutcome,
    /// Narration produced by the exchange, in order
    pub narration: Vec<NarrationLine>,
    /// Attacker health afterwards (a counter attack may lower it)
    pub attacker_health: u32,
    /// Opponent health afterwards
    pub opponent_health: u32,
}

impl ExchangeReport {
    /// Narration as plain text
    pub fn text(&self) -> Vec<&str> {
        self.narration.iter().map(|line| line.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_dealt() {
        let hit = ExchangeOutcome::Hit {
            skill: None,
            damage: 30,
        };
        assert_eq!(hit.damage_dealt(), 30);
        assert_eq!(ExchangeOutcome::Skipped.damage_dealt(), 0);
        assert_eq!(ExchangeOutcome::Dodged { countered: true }.damage_dealt(), 0);
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_string(&ExchangeOutcome::Dodged { countered: false }).unwrap();
        assert_eq!(json, r#"{"kind":"dodged","countered":false}"#);
    }

    #[test]
    fn test_narration_line_displays_text() {
        let line = NarrationLine::new(Tone::Hit, "Brute Boran's attack succeeds.");
        assert_eq!(line.to_string(), "Brute Boran's attack succeeds.");
    }
}
