//! Combat units and the equipment that feeds their derived stats.
//!
//! A [`Unit`] stores only intrinsic values. Every derived stat getter adds
//! the equipment contribution on read, and every setter writes the intrinsic
//! part alone:
//!
//! ```
//! use battle_core::{Equipment, Gear, StatBonuses, Unit, UnitId};
//!
//! let mut unit = Unit::builder(UnitId(1), "Zidane")
//!     .spr(10)
//!     .equipment(Equipment::new().with_armor(Gear::new("Vest", StatBonuses::NONE.spr(5))))
//!     .build();
//! assert_eq!(unit.spr(), 15);
//!
//! unit.set_spr(5);
//! assert_eq!(unit.spr(), 10);
//! ```

mod equipment;
mod flags;
mod group;
mod stats;
mod steal;

pub use equipment::{Equipment, Gear, Weapon, WeaponBuilder};
pub(crate) use flags::matches_non_empty;
pub use flags::{Elements, EnemyType, Statuses, SupportAbilities, WeaponType};
pub use group::{Enemies, Group, Party, Side};
pub use stats::{BaseStats, StatBonuses};
pub use steal::{StealSlot, StealSlots};

use crate::config::BattleConfig;

/// Stable identity of a unit within one battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    base: BaseStats,
    pub current_hp: i32,
    pub current_mp: i32,
    pub equipment: Equipment,
    statuses: Statuses,
    abilities: SupportAbilities,
    status_immunities: Statuses,
    weaknesses: Elements,
    resistances: Elements,
    immunities: Elements,
    absorptions: Elements,
    pub enemy_type: EnemyType,
    /// Turn gauge, `0..=atb_bar_length()`.
    pub atb: i32,
    /// Trance gauge, `0..=BattleConfig::TRANCE_BAR_LENGTH`.
    pub trance: i32,
    pub is_ai: bool,
    pub is_boss: bool,
    pub steal_slots: StealSlots,
    pub gil: i32,
    pub successful_steals: i32,
}

impl Unit {
    pub fn builder(id: UnitId, name: impl Into<String>) -> UnitBuilder {
        UnitBuilder::new(id, name)
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    fn bonuses(&self) -> StatBonuses {
        self.equipment.total_bonuses()
    }

    // ===== intrinsic stats =====

    pub fn str(&self) -> i32 {
        self.base.str
    }

    pub fn set_str(&mut self, value: i32) {
        self.base.str = value;
    }

    pub fn lvl(&self) -> i32 {
        self.base.lvl
    }

    pub fn set_lvl(&mut self, value: i32) {
        self.base.lvl = value;
    }

    pub fn spd(&self) -> i32 {
        self.base.spd
    }

    pub fn set_spd(&mut self, value: i32) {
        self.base.spd = value;
    }

    /// Maximum HP.
    pub fn hp(&self) -> i32 {
        self.base.hp
    }

    pub fn set_hp(&mut self, value: i32) {
        self.base.hp = value;
    }

    /// Maximum MP.
    pub fn mp(&self) -> i32 {
        self.base.mp
    }

    pub fn set_mp(&mut self, value: i32) {
        self.base.mp = value;
    }

    // ===== derived stats (base + equipment) =====

    pub fn atk(&self) -> i32 {
        self.base.atk + self.bonuses().atk
    }

    pub fn set_atk(&mut self, value: i32) {
        self.base.atk = value;
    }

    pub fn def(&self) -> i32 {
        self.base.def + self.bonuses().def
    }

    pub fn set_def(&mut self, value: i32) {
        self.base.def = value;
    }

    pub fn spr(&self) -> i32 {
        self.base.spr + self.bonuses().spr
    }

    pub fn set_spr(&mut self, value: i32) {
        self.base.spr = value;
    }

    pub fn mag(&self) -> i32 {
        self.base.mag + self.bonuses().mag
    }

    pub fn set_mag(&mut self, value: i32) {
        self.base.mag = value;
    }

    pub fn mag_def(&self) -> i32 {
        self.base.mag_def + self.bonuses().mag_def
    }

    pub fn set_mag_def(&mut self, value: i32) {
        self.base.mag_def = value;
    }

    pub fn eva(&self) -> i32 {
        self.base.eva + self.bonuses().eva
    }

    pub fn set_eva(&mut self, value: i32) {
        self.base.eva = value;
    }

    pub fn mag_eva(&self) -> i32 {
        self.base.mag_eva + self.bonuses().mag_eva
    }

    pub fn set_mag_eva(&mut self, value: i32) {
        self.base.mag_eva = value;
    }

    // ===== gauges and liveness =====

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn is_near_death(&self) -> bool {
        self.current_hp <= self.hp() / 8
    }

    /// Capacity of the turn gauge. Non-positive once `Spd >= 60`.
    pub fn atb_bar_length(&self) -> i32 {
        (60 - self.spd()) * 160
    }

    pub fn is_ready(&self) -> bool {
        self.atb == self.atb_bar_length()
    }

    pub fn is_trance_full(&self) -> bool {
        self.trance >= BattleConfig::TRANCE_BAR_LENGTH
    }

    // ===== flag sets =====

    pub fn statuses(&self) -> Statuses {
        self.statuses
    }

    pub fn has_status(&self, status: Statuses) -> bool {
        matches_non_empty(self.statuses, status)
    }

    pub fn add_status(&mut self, status: Statuses) {
        self.statuses |= status;
    }

    /// The only removal in the model; the driver uses it to end Trance.
    pub fn remove_status(&mut self, status: Statuses) {
        self.statuses.remove(status);
    }

    pub fn abilities(&self) -> SupportAbilities {
        self.abilities
    }

    pub fn has_ability(&self, ability: SupportAbilities) -> bool {
        matches_non_empty(self.abilities, ability)
    }

    pub fn add_ability(&mut self, ability: SupportAbilities) {
        self.abilities |= ability;
    }

    pub fn add_status_immune(&mut self, status: Statuses) {
        self.status_immunities |= status;
    }

    pub fn status_immune_to(&self, status: Statuses) -> bool {
        matches_non_empty(self.status_immunities, status)
    }

    pub fn add_weakness(&mut self, element: Elements) {
        self.weaknesses |= element;
    }

    pub fn is_weak_to(&self, element: Elements) -> bool {
        matches_non_empty(self.weaknesses, element)
    }

    pub fn add_resistance(&mut self, element: Elements) {
        self.resistances |= element;
    }

    pub fn is_resistant_to(&self, element: Elements) -> bool {
        matches_non_empty(self.resistances, element)
    }

    pub fn add_immunity(&mut self, element: Elements) {
        self.immunities |= element;
    }

    pub fn is_immune_to(&self, element: Elements) -> bool {
        matches_non_empty(self.immunities, element)
    }

    pub fn add_absorb(&mut self, element: Elements) {
        self.absorptions |= element;
    }

    pub fn absorbs(&self, element: Elements) -> bool {
        matches_non_empty(self.absorptions, element)
    }

    pub fn is_undead(&self) -> bool {
        self.enemy_type.contains(EnemyType::UNDEAD)
    }
}

/// Builder for [`Unit`]. Current HP and MP default to their maximums.
#[derive(Clone, Debug)]
pub struct UnitBuilder {
    unit: Unit,
    current_hp: Option<i32>,
    current_mp: Option<i32>,
}

impl UnitBuilder {
    fn new(id: UnitId, name: impl Into<String>) -> Self {
        Self {
            unit: Unit {
                id,
                name: name.into(),
                base: BaseStats::default(),
                current_hp: 0,
                current_mp: 0,
                equipment: Equipment::default(),
                statuses: Statuses::empty(),
                abilities: SupportAbilities::empty(),
                status_immunities: Statuses::empty(),
                weaknesses: Elements::empty(),
                resistances: Elements::empty(),
                immunities: Elements::empty(),
                absorptions: Elements::empty(),
                enemy_type: EnemyType::empty(),
                atb: 0,
                trance: 0,
                is_ai: false,
                is_boss: false,
                steal_slots: StealSlots::default(),
                gil: 0,
                successful_steals: 0,
            },
            current_hp: None,
            current_mp: None,
        }
    }

    pub fn stats(mut self, base: BaseStats) -> Self {
        self.unit.base = base;
        self
    }

    pub fn str(mut self, value: i32) -> Self {
        self.unit.base.str = value;
        self
    }

    pub fn lvl(mut self, value: i32) -> Self {
        self.unit.base.lvl = value;
        self
    }

    pub fn spd(mut self, value: i32) -> Self {
        self.unit.base.spd = value;
        self
    }

    pub fn hp(mut self, value: i32) -> Self {
        self.unit.base.hp = value;
        self
    }

    pub fn mp(mut self, value: i32) -> Self {
        self.unit.base.mp = value;
        self
    }

    pub fn mag(mut self, value: i32) -> Self {
        self.unit.base.mag = value;
        self
    }

    pub fn spr(mut self, value: i32) -> Self {
        self.unit.base.spr = value;
        self
    }

    pub fn eva(mut self, value: i32) -> Self {
        self.unit.base.eva = value;
        self
    }

    pub fn current_hp(mut self, value: i32) -> Self {
        self.current_hp = Some(value);
        self
    }

    pub fn current_mp(mut self, value: i32) -> Self {
        self.current_mp = Some(value);
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.unit.equipment = equipment;
        self
    }

    pub fn weapon(mut self, weapon: Weapon) -> Self {
        self.unit.equipment.weapon = Some(weapon);
        self
    }

    pub fn enemy_type(mut self, enemy_type: EnemyType) -> Self {
        self.unit.enemy_type = enemy_type;
        self
    }

    pub fn ai(mut self) -> Self {
        self.unit.is_ai = true;
        self
    }

    pub fn boss(mut self) -> Self {
        self.unit.is_boss = true;
        self
    }

    pub fn status(mut self, status: Statuses) -> Self {
        self.unit.add_status(status);
        self
    }

    pub fn ability(mut self, ability: SupportAbilities) -> Self {
        self.unit.add_ability(ability);
        self
    }

    pub fn steal_slots(mut self, slots: StealSlots) -> Self {
        self.unit.steal_slots = slots;
        self
    }

    pub fn gil(mut self, gil: i32) -> Self {
        self.unit.gil = gil;
        self
    }

    pub fn build(self) -> Unit {
        let mut unit = self.unit;
        unit.current_hp = self.current_hp.unwrap_or(unit.base.hp);
        unit.current_mp = self.current_mp.unwrap_or(unit.base.mp);
        unit
    }
}
