//! Battle simulator binary.
//!
//! Loads a battle from the content directory and lets every unit attack
//! until one side falls.
//!
//! ```bash
//! BATTLE_SEED=7 RUST_LOG=runtime::driver=debug cargo run -p battle-client
//! ```
mod config;
mod sim;

use anyhow::Result;
use config::SimConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let mut driver = sim::load(&config)?;

    match sim::run(&mut driver, config.max_turns)? {
        Some(outcome) => tracing::info!("Battle over after {} turns: {}", driver.turns(), outcome),
        None => tracing::info!("No result after {} turns", driver.turns()),
    }
    Ok(())
}
