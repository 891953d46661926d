//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Skill, SkillKind, Stats};

// Registry and combatants
pub use crate::archetype::{pick_random_archetype, Archetype};
pub use crate::combatant::{create_combatant, Combatant};

// Combat and battle
pub use crate::battle::{run_match, Battle, BattleState, MatchResult};
pub use crate::combat::{ExchangeOutcome, NarrationLine, Side, Tone};

// Randomness and errors
pub use crate::dice::{Dice, ScriptedDice};
pub use crate::error::CombatantError;
