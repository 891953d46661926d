//! Combat resolution - one combatant attacking another

mod order;
mod resolution;
mod result;

pub use order::{attack_order, Side};
pub use resolution::{
    attack_damage, attempt_dodge, dodge_succeeds, launch_attack, skill_triggers, DodgeResult,
    COUNTER_ATTACK_DAMAGE,
};
pub use result::{ExchangeOutcome, ExchangeReport, NarrationLine, Tone};
