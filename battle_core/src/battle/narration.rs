//! Narration text for the parts of a battle that are not exchanges

use crate::combat::{NarrationLine, Tone};
use crate::combatant::Combatant;

const CARD_RULE: &str = "===========================";
const ROUND_RULE: &str = "-------------------------------------------";
const RESULT_RULE: &str = "================================================";

/// Opening lines: both statistics cards joined by "and"
pub fn introduction(combatants: &[Combatant]) -> Vec<NarrationLine> {
    let mut lines = vec![NarrationLine::new(
        Tone::Heading,
        "This is the fight you've all been waiting for... Introducing;",
    )];

    for (i, combatant) in combatants.iter().enumerate() {
        if i > 0 {
            lines.push(NarrationLine::new(Tone::Introduction, "and"));
        }
        lines.push(NarrationLine::new(Tone::Heading, CARD_RULE));
        lines.extend(
            combatant
                .statistics()
                .lines()
                .map(|line| NarrationLine::new(Tone::Introduction, line)),
        );
        lines.push(NarrationLine::new(Tone::Heading, CARD_RULE));
    }

    lines
}

/// Header announcing round `round` (1-based)
pub fn round_header(round: u32) -> Vec<NarrationLine> {
    vec![
        NarrationLine::new(Tone::Heading, ROUND_RULE),
        NarrationLine::new(Tone::Heading, format!("Round #{}. FIGHT!!!", round)),
        NarrationLine::new(Tone::Heading, ROUND_RULE),
    ]
}

/// Closing lines naming the winner, or declaring a tie
pub fn announcement(winner: Option<&Combatant>) -> Vec<NarrationLine> {
    let verdict = match winner {
        Some(combatant) => format!("The winner is... {}", combatant.display_name()),
        None => "The battle ended in a tie.".to_string(),
    };

    vec![
        NarrationLine::new(Tone::Heading, RESULT_RULE),
        NarrationLine::new(Tone::Announcement, verdict),
        NarrationLine::new(Tone::Heading, RESULT_RULE),
    ]
}
