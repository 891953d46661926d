//! Simulator flow: banners, name prompts, the battle and its narration

use crate::config::SimulatorConfig;
use crate::console::Console;
use battle_core::{
    create_combatant, pick_random_archetype, run_match, Combatant, CombatantError, Conclusion,
    Dice, MatchResult,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{info, warn};

/// Number of combatants in a battle
pub const NUMBER_OF_COMBATANTS: usize = 2;

/// Simulator run error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended before combatant #{number} was named")]
    InputClosed { number: usize },
    #[error("Combatant creation failed: {0}")]
    Combatant(#[from] CombatantError),
    #[error("Failed to encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Machine-readable result printed when `json_summary` is enabled
#[derive(Debug, Serialize)]
pub struct MatchSummary<'a> {
    pub winner: Option<&'a str>,
    pub conclusion: Conclusion,
    pub rounds: u32,
    pub combatants: &'a [Combatant; 2],
}

impl<'a> From<&'a MatchResult> for MatchSummary<'a> {
    fn from(result: &'a MatchResult) -> Self {
        MatchSummary {
            winner: result.winner.as_deref(),
            conclusion: result.conclusion,
            rounds: result.rounds,
            combatants: &result.combatants,
        }
    }
}

/// Run one complete simulation against `console`
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SimulatorConfig,
    dice: &mut (impl Dice + ?Sized),
) -> Result<MatchResult, AppError> {
    console.welcome(&config.title)?;

    let [first, second] = select_combatants(console, dice)?;
    let result = run_match(first, second, dice);

    for line in &result.narration {
        console.narrate(line)?;
    }

    if config.json_summary {
        let summary = serde_json::to_string_pretty(&MatchSummary::from(&result))?;
        console.print_line(&summary)?;
    }

    console.goodbye(&config.title)?;
    Ok(result)
}

/// Name both combatants, re-prompting until each name is valid
pub fn select_combatants<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dice: &mut (impl Dice + ?Sized),
) -> Result<[Combatant; NUMBER_OF_COMBATANTS], AppError> {
    Ok([
        select_combatant(console, dice, 1)?,
        select_combatant(console, dice, 2)?,
    ])
}

/// Prompt for combatant `number` until a valid name is given
///
/// Each attempt picks a fresh random archetype. An invalid name is reported
/// and asked for again; an invalid attribute is a defect and aborts.
fn select_combatant<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dice: &mut (impl Dice + ?Sized),
    number: usize,
) -> Result<Combatant, AppError> {
    loop {
        let name = console
            .prompt_name(number)?
            .ok_or(AppError::InputClosed { number })?;
        let archetype = pick_random_archetype(dice);

        match create_combatant(archetype, &name, dice) {
            Ok(combatant) => {
                info!(number, combatant = %combatant.display_name(), "combatant ready");
                return Ok(combatant);
            }
            Err(err) if err.is_recoverable() => {
                warn!(number, %err, "rejected combatant name");
                console.print_line(&err.to_string())?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
