//! Content loaders for reading battle data from files.

pub mod config;
pub mod equipment;
pub mod factory;
pub mod roster;

pub use config::ConfigLoader;
pub use equipment::{EquipmentCatalog, EquipmentLoader, GearSpec, WeaponSpec};
pub use factory::ContentFactory;
pub use roster::{BattleRoster, RosterLoader, UnitSpec};

use std::path::Path;

use ron::extensions::Extensions;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses RON with newtype unwrapping, so flag sets read as `"FIRE | HOLY"`
/// instead of `Elements("FIRE | HOLY")`.
pub(crate) fn parse_ron<T: DeserializeOwned>(content: &str) -> ron::error::SpannedResult<T> {
    ron::Options::default()
        .with_default_extension(Extensions::UNWRAP_NEWTYPES)
        .from_str(content)
}
