//! battle_cli - Console front-end for battle_core
//!
//! Prompts for two names, picks each combatant's archetype at random,
//! runs the battle and prints its narration.

pub mod app;
pub mod config;
pub mod console;
pub mod telemetry;

pub use app::{run, select_combatants, AppError, MatchSummary};
pub use config::{ConfigError, SimulatorConfig};
pub use console::Console;
pub use telemetry::{init_telemetry, log_filter};
