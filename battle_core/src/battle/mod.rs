//! Battle - the match loop driving two combatants to a conclusion
//!
//! ```text
//! NotStarted -> InProgress -> Concluded(Winner | Tie)
//! ```
//!
//! Each round recomputes the attack order, then the first attacker swings,
//! then the second. The battle concludes as soon as either combatant's
//! health reaches zero, or as a tie after [`MAX_ROUNDS`] rounds.

pub mod narration;

use crate::combat::{attack_order, ExchangeReport, NarrationLine, Side};
use crate::combatant::Combatant;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Rounds fought before the battle is declared a tie
pub const MAX_ROUNDS: u32 = 15;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Winner(Side),
    Tie,
}

/// Match state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleState {
    NotStarted,
    InProgress,
    Concluded(Conclusion),
}

impl BattleState {
    pub fn is_concluded(&self) -> bool {
        matches!(self, BattleState::Concluded(_))
    }
}

/// Final outcome handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Every narration line, in order
    pub narration: Vec<NarrationLine>,
    /// Winner's name, `None` for a tie
    pub winner: Option<String>,
    /// Which side won, unambiguous even when both names match
    pub conclusion: Conclusion,
    pub rounds: u32,
    /// Both combatants as they ended the battle
    pub combatants: [Combatant; 2],
}

impl MatchResult {
    pub fn is_tie(&self) -> bool {
        self.conclusion == Conclusion::Tie
    }

    pub fn winner_side(&self) -> Option<Side> {
        match self.conclusion {
            Conclusion::Winner(side) => Some(side),
            Conclusion::Tie => None,
        }
    }

    /// Narration as plain text lines
    pub fn narration_text(&self) -> Vec<&str> {
        self.narration.iter().map(|line| line.text.as_str()).collect()
    }
}

/// A battle between two combatants
#[derive(Debug, Clone)]
pub struct Battle {
    combatants: [Combatant; 2],
    round: u32,
    state: BattleState,
    narration: Vec<NarrationLine>,
}

impl Battle {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Battle {
            combatants: [first, second],
            round: 0,
            state: BattleState::NotStarted,
            narration: Vec::new(),
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Rounds started so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn narration(&self) -> &[NarrationLine] {
        &self.narration
    }

    /// The winner once concluded with one
    pub fn winner(&self) -> Option<&Combatant> {
        match self.state {
            BattleState::Concluded(Conclusion::Winner(side)) => Some(self.combatant(side)),
            _ => None,
        }
    }

    /// Play one round (two exchanges), returning the new state
    ///
    /// Does nothing once the battle has concluded.
    pub fn play_round(&mut self, dice: &mut (impl Dice + ?Sized)) -> BattleState {
        match self.state {
            BattleState::Concluded(_) => return self.state,
            BattleState::NotStarted => self.start(),
            BattleState::InProgress => {}
        }

        self.round += 1;
        self.narration.extend(narration::round_header(self.round));

        let order = attack_order(&self.combatants[0], &self.combatants[1]);
        debug!(round = self.round, first = ?order, "round started");

        for attacker in [order, order.other()] {
            let report = self.exchange(attacker, dice);
            self.narration.extend(report.narration);

            if let Some(winner) = self.check_for_winner(order) {
                self.conclude(Conclusion::Winner(winner));
                return self.state;
            }
        }

        if self.round >= MAX_ROUNDS {
            self.conclude(Conclusion::Tie);
        }

        self.state
    }

    /// Play rounds until the battle concludes
    pub fn run(mut self, dice: &mut (impl Dice + ?Sized)) -> MatchResult {
        let conclusion = loop {
            if let BattleState::Concluded(conclusion) = self.play_round(dice) {
                break conclusion;
            }
        };

        MatchResult {
            winner: self.winner().map(|c| c.name().to_string()),
            conclusion,
            rounds: self.round,
            narration: self.narration,
            combatants: self.combatants,
        }
    }

    fn start(&mut self) {
        info!(
            first = %self.combatants[0].display_name(),
            second = %self.combatants[1].display_name(),
            "battle started"
        );
        self.narration.extend(narration::introduction(&self.combatants));
        self.state = BattleState::InProgress;
    }

    fn exchange(&mut self, attacker: Side, dice: &mut (impl Dice + ?Sized)) -> ExchangeReport {
        let [first, second] = &mut self.combatants;
        let (attacker, defender) = match attacker {
            Side::First => (first, second),
            Side::Second => (second, first),
        };
        attacker.launch_attack(defender, dice)
    }

    /// Checked in attack order: the first attacker falling loses first
    fn check_for_winner(&self, order: Side) -> Option<Side> {
        if !self.combatant(order).is_alive() {
            Some(order.other())
        } else if !self.combatant(order.other()).is_alive() {
            Some(order)
        } else {
            None
        }
    }

    fn conclude(&mut self, conclusion: Conclusion) {
        self.state = BattleState::Concluded(conclusion);
        let winner = self.winner();
        let winner_name = winner.map_or_else(|| "tie".to_string(), Combatant::display_name);
        info!(rounds = self.round, winner = %winner_name, "battle concluded");
        let closing = narration::announcement(winner);
        self.narration.extend(closing);
    }
}

/// Run a full battle between two combatants
pub fn run_match(
    first: Combatant,
    second: Combatant,
    dice: &mut (impl Dice + ?Sized),
) -> MatchResult {
    Battle::new(first, second).run(dice)
}
