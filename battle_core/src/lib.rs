//! battle_core - Turn-based battle engine for two randomly statted combatants
//!
//! This library provides:
//! - Archetype registry: the Swordsman, Brute and Grappler templates
//! - Combatant: validated name, rolled attributes, turn-skip status
//! - Combat resolution: dodge checks, special skills, damage
//! - Battle: the round loop driving a match to a winner or a tie
//!
//! All randomness flows through [`Dice`], so a seeded RNG or
//! [`ScriptedDice`] makes a battle fully reproducible. The engine performs
//! no I/O; narration is returned as [`NarrationLine`]s.

pub mod archetype;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod dice;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use archetype::{pick_random_archetype, Archetype, ArchetypeProfile, ARCHETYPES};
pub use battle::{run_match, Battle, BattleState, Conclusion, MatchResult, MAX_ROUNDS};
pub use combat::{attack_order, ExchangeOutcome, ExchangeReport, NarrationLine, Side, Tone};
pub use combatant::{create_combatant, Combatant};
pub use dice::{Dice, ScriptedDice};
pub use error::{BoundScope, CombatantError};
pub use types::{Attribute, LuckRange, Skill, SkillKind, StatRange, Stats};
