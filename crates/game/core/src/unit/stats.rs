//! Intrinsic unit stats and the flat bonuses equipment adds on top.
//!
//! Base stats are the only stored numbers. Derived values (`Atk`, `Def`,
//! `Spr`, `Mag`, `MagDef`, `MagEva`, `Eva`) are recomputed from the base
//! plus every equipped item on each read, so swapping gear mid-battle is
//! picked up immediately.

use core::ops::Add;

/// Stats intrinsic to a unit, before equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseStats {
    pub str: i32,
    pub lvl: i32,
    pub spd: i32,
    pub hp: i32,
    pub mp: i32,
    pub mag: i32,
    pub spr: i32,
    pub atk: i32,
    pub def: i32,
    pub eva: i32,
    pub mag_def: i32,
    pub mag_eva: i32,
}

/// Flat bonuses contributed by one equipped item.
///
/// Items only define the bonuses they grant; everything else stays zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBonuses {
    pub atk: i32,
    pub def: i32,
    pub spr: i32,
    pub mag: i32,
    pub mag_def: i32,
    pub eva: i32,
    pub mag_eva: i32,
}

impl StatBonuses {
    pub const NONE: Self = Self {
        atk: 0,
        def: 0,
        spr: 0,
        mag: 0,
        mag_def: 0,
        eva: 0,
        mag_eva: 0,
    };

    pub fn atk(mut self, value: i32) -> Self {
        self.atk = value;
        self
    }

    pub fn def(mut self, value: i32) -> Self {
        self.def = value;
        self
    }

    pub fn spr(mut self, value: i32) -> Self {
        self.spr = value;
        self
    }

    pub fn mag(mut self, value: i32) -> Self {
        self.mag = value;
        self
    }

    pub fn mag_def(mut self, value: i32) -> Self {
        self.mag_def = value;
        self
    }

    pub fn eva(mut self, value: i32) -> Self {
        self.eva = value;
        self
    }

    pub fn mag_eva(mut self, value: i32) -> Self {
        self.mag_eva = value;
        self
    }
}

impl Add for StatBonuses {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
            spr: self.spr + rhs.spr,
            mag: self.mag + rhs.mag,
            mag_def: self.mag_def + rhs.mag_def,
            eva: self.eva + rhs.eva,
            mag_eva: self.mag_eva + rhs.mag_eva,
        }
    }
}

impl core::iter::Sum for StatBonuses {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::NONE, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonuses_sum_fieldwise() {
        let total: StatBonuses = [
            StatBonuses::NONE.atk(12),
            StatBonuses::NONE.mag_def(6),
            StatBonuses::NONE.eva(5).mag_eva(3),
            StatBonuses::NONE.def(6),
        ]
        .into_iter()
        .sum();

        assert_eq!(total.atk, 12);
        assert_eq!(total.def, 6);
        assert_eq!(total.eva, 5);
        assert_eq!(total.mag_def, 6);
        assert_eq!(total.mag_eva, 3);
        assert_eq!(total.spr, 0);
    }
}
