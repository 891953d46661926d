//! battle_cli - Console battle simulator between two named combatants

use anyhow::{Context, Result};
use battle_cli::{Console, SimulatorConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

fn main() -> Result<()> {
    battle_cli::init_telemetry();

    let config = SimulatorConfig::from_env().context("Failed to load simulator configuration")?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, "simulator starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.color);

    let result = battle_cli::run(&mut console, &config, &mut rng)?;
    tracing::info!(
        winner = ?result.winner,
        conclusion = ?result.conclusion,
        rounds = result.rounds,
        "simulation finished"
    );

    Ok(())
}
