//! Equipment catalogue loader.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{Elements, Gear, StatBonuses, Statuses, Weapon, WeaponType};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Weapon entry as written in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub bonuses: StatBonuses,
    #[serde(default)]
    pub element: Elements,
    #[serde(default)]
    pub elem_atk: Elements,
    /// Status affix and its accuracy in percent.
    #[serde(default)]
    pub status: Option<(Statuses, i32)>,
}

impl WeaponSpec {
    pub fn build(&self) -> LoadResult<Weapon> {
        let mut builder = Weapon::builder(&self.name, self.weapon_type)
            .bonuses(self.bonuses)
            .element(self.element)
            .elem_atk(self.elem_atk);
        if let Some((affix, accuracy)) = self.status {
            builder = builder.status(affix, accuracy);
        }
        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid weapon '{}': {}", self.name, e))
    }
}

/// Head, wrist, armour and accessory entries share one shape.
pub type GearSpec = Gear;

/// Equipment catalogue structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    weapons: Vec<WeaponSpec>,
    #[serde(default)]
    gear: Vec<GearSpec>,
}

/// Validated equipment, looked up by item name.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    weapons: HashMap<String, Weapon>,
    gear: HashMap<String, Gear>,
}

impl EquipmentCatalog {
    pub fn weapon(&self, name: &str) -> LoadResult<Weapon> {
        self.weapons
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown weapon '{}'", name))
    }

    pub fn gear(&self, name: &str) -> LoadResult<Gear> {
        self.gear
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown gear '{}'", name))
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gear.len()
    }
}

/// Loader for the equipment catalogue from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load and validate an equipment catalogue.
    ///
    /// Duplicate names and out-of-range status accuracies are rejected.
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EquipmentCatalog> {
        let file: CatalogFile = parse_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalogue RON: {}", e))?;

        let mut catalog = EquipmentCatalog::default();
        for spec in &file.weapons {
            let weapon = spec.build()?;
            if catalog.weapons.insert(spec.name.clone(), weapon).is_some() {
                anyhow::bail!("Duplicate weapon '{}'", spec.name);
            }
        }
        for gear in file.gear {
            let name = gear.name.clone();
            if catalog.gear.insert(name.clone(), gear).is_some() {
                anyhow::bail!("Duplicate gear '{}'", name);
            }
        }

        Ok(catalog)
    }
}
