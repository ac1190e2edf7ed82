//! Flag sets carried by units and equipment.
//!
//! Units expose `add_*` mutators that OR new bits in. The engine never
//! clears a bit; [`crate::Unit::remove_status`] exists for the driver's
//! Trance bookkeeping. Queries made with the empty set never match, even
//! when the unit's own set is non-empty.

use bitflags::bitflags;

bitflags! {
    /// Status conditions a unit can be under.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Statuses: u32 {
        const CONFUSE          = 1 << 0;
        const DARKNESS         = 1 << 1;
        const DEFEND           = 1 << 2;
        const DISTRACT         = 1 << 3;
        const VANISH           = 1 << 4;
        const EYE_FOR_EYE      = 1 << 5;
        const TRANCE           = 1 << 6;
        const BERSERK          = 1 << 7;
        const FACING_BACKWARDS = 1 << 8;
        const SLEEP            = 1 << 9;
        const MINI             = 1 << 10;
        const BACKROW          = 1 << 11;
        const PROTECT          = 1 << 12;
        const SILENCE          = 1 << 13;
        const SHELL            = 1 << 14;
        const SLOW             = 1 << 15;
        const HASTE            = 1 << 16;
        const REFLECT          = 1 << 17;
        const REFLECT_2X       = 1 << 18;
        const HIGH_TIDE        = 1 << 19;
        const POISON           = 1 << 20;
        const DEATH            = 1 << 21;
        const TROUBLE          = 1 << 22;
        const STOP             = 1 << 23;
    }
}

bitflags! {
    /// Support abilities equipped on a unit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SupportAbilities: u16 {
        const MAN_EATER    = 1 << 0;
        const MP_ATTACK    = 1 << 1;
        const ADD_STATUS   = 1 << 2;
        const BANDIT       = 1 << 3;
        const MASTER_THIEF = 1 << 4;
        const MUG          = 1 << 5;
        const STEAL_GIL    = 1 << 6;
    }
}

bitflags! {
    /// Elemental domain shared by weapons, spells and unit affinities.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Elements: u8 {
        const FIRE    = 1 << 0;
        const ICE     = 1 << 1;
        const THUNDER = 1 << 2;
        const EARTH   = 1 << 3;
        const WATER   = 1 << 4;
        const WIND    = 1 << 5;
        const HOLY    = 1 << 6;
        const SHADOW  = 1 << 7;
    }
}

bitflags! {
    /// Creature classification used by type-specific rules.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EnemyType: u8 {
        const HUMAN  = 1 << 0;
        const NORMAL = 1 << 1;
        const UNDEAD = 1 << 2;
    }
}

/// Weapon category. Each category selects an attack formula branch.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponType {
    /// Unarmed. Deals no damage through the weapon formulas.
    #[default]
    None,
    Dagger,
    Sword,
    Staff,
    Rod,
    Spear,
    Claw,
    Flute,
    KnightSword,
    ThiefSword,
    Fork,
    Hammer,
    Racket,
}

impl WeaponType {
    /// Weapons that share the plain `Str + variance` bonus formula.
    pub fn is_standard(&self) -> bool {
        matches!(
            self,
            WeaponType::Dagger
                | WeaponType::Sword
                | WeaponType::Staff
                | WeaponType::Rod
                | WeaponType::Spear
                | WeaponType::Claw
                | WeaponType::Flute
        )
    }
}

/// Returns true when `set` contains every bit of `query` and `query` is not
/// the empty sentinel.
#[inline]
pub(crate) fn matches_non_empty<F: bitflags::Flags + Copy>(set: F, query: F) -> bool {
    !query.is_empty() && !set.is_empty() && set.contains(query)
}
