//! Auto-battle loop: every ready unit attacks the first standing opponent.
use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_core::{RandomSource, Side, UnitId};
use battle_runtime::{Driver, Outcome, ThreadRandom};
use tracing::{info, warn};

use crate::config::SimConfig;

/// Loads the battle described by `config.data_dir` and seeds its random
/// source.
pub fn load(config: &SimConfig) -> Result<Driver<ThreadRandom>> {
    info!("Loading content from {}", config.data_dir.display());

    let factory = ContentFactory::new(config.data_dir.clone());
    let (battle_config, roster) = factory
        .load_battle()
        .with_context(|| format!("loading battle from {}", config.data_dir.display()))?;

    let random = match config.seed {
        Some(seed) => ThreadRandom::seeded(seed),
        None => ThreadRandom::new(),
    };
    Ok(Driver::with_config(roster.party, roster.enemies, battle_config, random))
}

/// Plays turns until the battle ends or `max_turns` have been taken.
pub fn run<R: RandomSource>(driver: &mut Driver<R>, max_turns: u64) -> Result<Option<Outcome>> {
    while driver.outcome().is_none() && driver.turns() < max_turns {
        let ready = driver.advance_to_next_turn();
        if ready.is_empty() {
            warn!("no unit can act");
            break;
        }

        for actor in ready {
            if driver.outcome().is_some() || driver.turns() >= max_turns {
                break;
            }
            if !driver.unit(actor)?.is_alive() {
                continue;
            }
            let Some(target) = first_opponent(driver, actor)? else {
                continue;
            };

            let result = driver.resolve(actor, target, |engine, a, t| engine.attack(a, t))?;
            let (attacker, defender) = (&driver.unit(actor)?.name, &driver.unit(target)?.name);
            info!("{} -> {}: {}", attacker, defender, result);

            driver.apply(&result)?;
            driver.end_turn(actor)?;
        }
    }
    Ok(driver.outcome())
}

fn first_opponent<R: RandomSource>(driver: &Driver<R>, actor: UnitId) -> Result<Option<UnitId>> {
    let side = Side::of(driver.unit(actor)?).opposing();
    Ok(driver
        .engine()
        .members(side)
        .iter()
        .find(|u| u.is_alive())
        .map(|u| u.id))
}
