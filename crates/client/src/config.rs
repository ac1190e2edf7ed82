//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "crates/game/content/data";
const DEFAULT_MAX_TURNS: u64 = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory holding `config.toml`, `equipment.ron` and `units.ron`.
    pub data_dir: PathBuf,
    /// Turn limit before the simulation gives up.
    pub max_turns: u64,
    /// Fixed seed for reproducible runs; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - content directory (default: `crates/game/content/data`)
    /// - `BATTLE_MAX_TURNS` - turn limit (default: 200, at least 1)
    /// - `BATTLE_SEED` - RNG seed
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("BATTLE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(turns) = parse::<u64>(lookup("BATTLE_MAX_TURNS")) {
            config.max_turns = turns.max(1);
        }
        config.seed = parse(lookup("BATTLE_SEED"));

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
