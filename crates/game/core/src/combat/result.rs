//! Action outcomes.

use crate::unit::{StealSlot, StealSlots, Statuses, UnitId};

/// HP or MP restored to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restore {
    pub unit: UnitId,
    pub amount: i32,
}

impl Restore {
    pub const fn new(unit: UnitId, amount: i32) -> Self {
        Self { unit, amount }
    }
}

/// Stats that the break sword arts can lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ReducibleStat {
    Str,
    Def,
    MagDef,
    Mag,
}

/// Permanent reduction of a target stat. `amount` is subtracted from the
/// target's base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatReduction {
    pub stat: ReducibleStat,
    pub amount: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StolenItem {
    pub slot: StealSlot,
    pub item: String,
}

/// Outcome of one action.
///
/// A pure value: the engine never mutates units. The caller applies the
/// deltas to its unit store. Damage lands on [`Self::damage_receiver`];
/// when [`Self::is_absorbed`] is set it heals that unit instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub attacker: UnitId,
    /// `None` for gauge-only or group-wide actions.
    pub target: Option<UnitId>,

    pub is_miss: bool,
    pub is_evaded: bool,
    pub is_critical: bool,
    pub is_counter_attack: bool,
    pub is_reflected: bool,
    pub is_absorbed: bool,
    pub is_status_immune: bool,
    pub is_escaped: bool,
    pub is_sacrificed: bool,
    pub is_revived: bool,

    pub base: i32,
    pub bonus: i32,
    pub damage: i32,
    pub reflected_to: Option<UnitId>,
    pub hp_restored: Option<Restore>,
    pub mp_restored: Option<Restore>,
    /// MP drained from the damage receiver.
    pub mp_damage: i32,
    /// HP the attacker pays to act.
    pub attacker_hp_cost: i32,
    pub trance_increase: i32,
    pub trance_decrease: i32,
    pub stat_reduction: Option<StatReduction>,
    pub mag_increase: i32,
    pub stolen_item: Option<StolenItem>,
    pub stolen_gil: i32,
    /// Gil the party drops when fleeing.
    pub gil_lost: i32,

    /// Weapon status affix that landed on the target.
    pub applicable_statuses: Statuses,
    /// Statuses to add, in order.
    pub inflict_status: Vec<(Statuses, UnitId)>,
    pub sub_results: Vec<AttackResult>,
    pub detected_items: Option<StealSlots>,
}

impl AttackResult {
    pub fn new(attacker: UnitId, target: Option<UnitId>) -> Self {
        Self {
            attacker,
            target,
            ..Self::default()
        }
    }

    pub fn targeted(attacker: UnitId, target: UnitId) -> Self {
        Self::new(attacker, Some(target))
    }

    /// Unit that takes [`Self::damage`]: the reflect target when reflected.
    pub fn damage_receiver(&self) -> Option<UnitId> {
        self.reflected_to.or(self.target)
    }

    pub fn missed(mut self) -> Self {
        self.is_miss = true;
        self
    }

    pub fn inflict(&mut self, status: Statuses, unit: UnitId) {
        self.inflict_status.push((status, unit));
    }
}

impl core::fmt::Display for AttackResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.attacker)?;
        if let Some(target) = self.target {
            write!(f, " -> {target}")?;
        }
        if let Some(to) = self.reflected_to {
            write!(f, " (reflected to {to})")?;
        }
        if self.is_miss {
            return write!(f, ": miss");
        }
        if self.is_evaded {
            return write!(f, ": evaded");
        }
        write!(f, ": {} damage", self.damage)?;
        if self.is_critical {
            write!(f, ", critical")?;
        }
        if self.is_absorbed {
            write!(f, ", absorbed")?;
        }
        if self.is_counter_attack {
            write!(f, ", counter")?;
        }
        if !self.applicable_statuses.is_empty() {
            write!(f, ", statuses {:?}", self.applicable_statuses)?;
        }
        Ok(())
    }
}
