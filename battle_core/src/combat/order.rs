//! Attack order - who swings first in a round

use crate::combatant::Combatant;
use serde::{Deserialize, Serialize};

/// One of the two combatants in a battle, by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Decide which of `first` and `second` attacks first
///
/// Higher speed goes first. On a speed tie the combatant with lower or
/// equal defence goes first, so a full tie favours `first`.
pub fn attack_order(first: &Combatant, second: &Combatant) -> Side {
    if first.speed() != second.speed() {
        if first.speed() > second.speed() {
            Side::First
        } else {
            Side::Second
        }
    } else if first.defence() <= second.defence() {
        Side::First
    } else {
        Side::Second
    }
}
