//! Dice - the random source behind attribute rolls and probability checks
//!
//! Every random decision in a battle goes through [`Dice`]:
//! - attribute rolls at combatant creation (`roll(min, max)`)
//! - dodge and skill-trigger checks (`marker()`, an integer in `[0, 100]`)
//!
//! Any `rand::Rng` is a `Dice`, so a seeded `StdRng` replays a whole match.
//! [`ScriptedDice`] forces exact sequences for scenario tests.

use rand::Rng;
use std::collections::VecDeque;

/// Upper bound of a probability marker (inclusive)
pub const MARKER_MAX: u32 = 100;

/// Source of bounded random integers
pub trait Dice {
    /// Roll an integer uniformly in `[min, max]`
    fn roll(&mut self, min: u32, max: u32) -> u32;

    /// Draw a probability marker in `[0, 100]`
    fn marker(&mut self) -> u32 {
        self.roll(0, MARKER_MAX)
    }
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Roll a luck value with two-decimal granularity
///
/// Rolls an integer in `[min * 100, max * 100]` and divides by 100.
pub fn roll_luck(dice: &mut (impl Dice + ?Sized), min: f64, max: f64) -> f64 {
    let low = (min * 100.0).round() as u32;
    let high = (max * 100.0).round() as u32;
    f64::from(dice.roll(low, high)) / 100.0
}

/// Deterministic dice that replay queued values, then a fallback
///
/// Each value is clamped into the range requested by the caller, so
/// `ScriptedDice::constant(100)` yields the maximum of every roll and
/// a marker of 100 (never dodges, never triggers a skill).
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    queue: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedDice {
    /// Replay `values` in order, then return `fallback` forever
    pub fn new(values: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        ScriptedDice {
            queue: values.into_iter().collect(),
            fallback,
        }
    }

    /// Always return `value`
    pub fn constant(value: u32) -> Self {
        Self::new(Vec::new(), value)
    }

    /// Values not consumed yet
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let value = self.queue.pop_front().unwrap_or(self.fallback);
        value.clamp(min, max.max(min))
    }
}
