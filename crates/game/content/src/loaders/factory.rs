//! Content factory for loading a battle from a data directory.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::loaders::{
    BattleRoster, ConfigLoader, EquipmentCatalog, EquipmentLoader, LoadResult, RosterLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// └── units.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalogue from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalog> {
        let path = self.data_dir.join("equipment.ron");
        EquipmentLoader::load(&path)
    }

    /// Load both sides from `units.ron`, resolving equipment against
    /// `catalog`.
    pub fn load_roster(&self, catalog: &EquipmentCatalog) -> LoadResult<BattleRoster> {
        let path = self.data_dir.join("units.ron");
        RosterLoader::load(&path, catalog)
    }

    /// Load everything a battle needs.
    pub fn load_battle(&self) -> LoadResult<(BattleConfig, BattleRoster)> {
        let config = self.load_config()?;
        let catalog = self.load_equipment()?;
        let roster = self.load_roster(&catalog)?;
        Ok((config, roster))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
