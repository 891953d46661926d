//! Errors raised while creating combatants

use crate::archetype::Archetype;
use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which bound an attribute value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundScope {
    /// The 0-100 (0.0-1.0 for luck) range every combatant shares
    Universal,
    /// The sub-range of a specific archetype
    Archetype(Archetype),
}

/// Combatant creation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatantError {
    #[error(
        "Combatant's name must range from {} to {} characters (got {length})",
        crate::combatant::NAME_MIN_LENGTH,
        crate::combatant::NAME_MAX_LENGTH
    )]
    InvalidName { length: usize },

    #[error("{} {attribute} of {value} is outside {min}..={max}", scope_label(.scope))]
    InvalidAttribute {
        attribute: Attribute,
        value: f64,
        min: f64,
        max: f64,
        scope: BoundScope,
    },
}

fn scope_label(scope: &BoundScope) -> String {
    match scope {
        BoundScope::Universal => "Combatant's".to_string(),
        BoundScope::Archetype(archetype) => format!("{}'s", archetype),
    }
}

impl CombatantError {
    /// Returns true when the caller may retry with different input
    ///
    /// A bad name is user input; a bad attribute is a defect in the roller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CombatantError::InvalidName { .. })
    }
}
