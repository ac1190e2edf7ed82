//! Unit roster loader.
//!
//! Rosters reference equipment by name; the catalogue must be loaded first.

use std::path::Path;

use battle_core::{
    BaseStats, Elements, Enemies, EnemyType, Equipment, Party, StealSlot, StealSlots, Statuses,
    SupportAbilities, Unit, UnitId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{EquipmentCatalog, LoadResult, parse_ron, read_file};

/// Unit entry as written in RON. Every field except `id` and `name` is
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSpec {
    pub id: u32,
    pub name: String,
    pub stats: BaseStats,
    /// Current HP and MP; full when omitted.
    pub current_hp: Option<i32>,
    pub current_mp: Option<i32>,
    pub weapon: Option<String>,
    pub head: Option<String>,
    pub wrist: Option<String>,
    pub armor: Option<String>,
    pub accessory: Option<String>,
    pub enemy_type: EnemyType,
    pub statuses: Statuses,
    pub abilities: SupportAbilities,
    pub status_immunities: Statuses,
    pub weaknesses: Elements,
    pub resistances: Elements,
    pub immunities: Elements,
    pub absorbs: Elements,
    pub boss: bool,
    pub steal: Vec<(StealSlot, String)>,
    pub gil: i32,
}

impl UnitSpec {
    /// Resolves equipment names and builds the unit. `ai` marks enemies.
    pub fn build(&self, catalog: &EquipmentCatalog, ai: bool) -> LoadResult<Unit> {
        let context = |e: anyhow::Error| anyhow::anyhow!("Unit '{}': {}", self.name, e);
        let gear = |slot: &Option<String>| {
            slot.as_deref()
                .map(|name| catalog.gear(name))
                .transpose()
                .map_err(context)
        };

        let equipment = Equipment {
            weapon: self
                .weapon
                .as_deref()
                .map(|name| catalog.weapon(name))
                .transpose()
                .map_err(context)?,
            head: gear(&self.head)?,
            wrist: gear(&self.wrist)?,
            armor: gear(&self.armor)?,
            accessory: gear(&self.accessory)?,
        };

        let steal_slots = self
            .steal
            .iter()
            .fold(StealSlots::new(), |slots, (slot, item)| slots.with(*slot, item));

        let mut builder = Unit::builder(UnitId(self.id), &self.name)
            .stats(self.stats.clone())
            .equipment(equipment)
            .enemy_type(self.enemy_type)
            .status(self.statuses)
            .ability(self.abilities)
            .steal_slots(steal_slots)
            .gil(self.gil);
        if let Some(hp) = self.current_hp {
            builder = builder.current_hp(hp);
        }
        if let Some(mp) = self.current_mp {
            builder = builder.current_mp(mp);
        }
        if ai {
            builder = builder.ai();
        }
        if self.boss {
            builder = builder.boss();
        }

        let mut unit = builder.build();
        unit.add_status_immune(self.status_immunities);
        unit.add_weakness(self.weaknesses);
        unit.add_resistance(self.resistances);
        unit.add_immunity(self.immunities);
        unit.add_absorb(self.absorbs);
        Ok(unit)
    }
}

/// Roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    party: Vec<UnitSpec>,
    #[serde(default)]
    enemies: Vec<UnitSpec>,
}

/// Both sides of a battle, ready to hand to an engine.
#[derive(Debug, Clone)]
pub struct BattleRoster {
    pub party: Party,
    pub enemies: Enemies,
}

/// Loader for unit rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster and resolve every unit against `catalog`.
    ///
    /// Unit ids must be unique across both sides.
    pub fn load(path: &Path, catalog: &EquipmentCatalog) -> LoadResult<BattleRoster> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &EquipmentCatalog) -> LoadResult<BattleRoster> {
        let file: RosterFile = parse_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut ids: Vec<u32> = file.party.iter().chain(&file.enemies).map(|u| u.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            anyhow::bail!("Duplicate unit id {}", pair[0]);
        }

        let mut party = Party::new();
        for spec in &file.party {
            party
                .push(spec.build(catalog, false)?)
                .map_err(|e| anyhow::anyhow!("Party: {}", e))?;
        }
        let mut enemies = Enemies::new();
        for spec in &file.enemies {
            enemies
                .push(spec.build(catalog, true)?)
                .map_err(|e| anyhow::anyhow!("Enemies: {}", e))?;
        }

        Ok(BattleRoster { party, enemies })
    }
}
