//! Ordered unit groups.
//!
//! Insertion order is significant: multi-target fan-out and random
//! retargeting index into the alive members in that order.

use arrayvec::ArrayVec;

use super::{Unit, UnitId};
use crate::config::BattleConfig;
use crate::engine::EngineError;

/// Which group a unit fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Party,
    Enemies,
}

impl Side {
    pub fn of(unit: &Unit) -> Self {
        if unit.is_ai { Side::Enemies } else { Side::Party }
    }

    pub fn opposing(self) -> Self {
        match self {
            Side::Party => Side::Enemies,
            Side::Enemies => Side::Party,
        }
    }
}

/// Fixed-capacity ordered collection of units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group<const N: usize> {
    members: ArrayVec<Unit, N>,
}

/// Player-controlled units.
pub type Party = Group<{ BattleConfig::MAX_PARTY }>;

/// AI-controlled units.
pub type Enemies = Group<{ BattleConfig::MAX_ENEMIES }>;

impl<const N: usize> Group<N> {
    pub fn new() -> Self {
        Self {
            members: ArrayVec::new(),
        }
    }

    pub fn from_units(units: impl IntoIterator<Item = Unit>) -> Result<Self, EngineError> {
        let mut group = Self::new();
        for unit in units {
            group.push(unit)?;
        }
        Ok(group)
    }

    pub fn push(&mut self, unit: Unit) -> Result<(), EngineError> {
        self.members
            .try_push(unit)
            .map_err(|_| EngineError::GroupFull { capacity: N })
    }

    pub fn members(&self) -> &[Unit] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Unit] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.members.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.members.iter_mut().find(|u| u.id == id)
    }

    pub fn alive(&self) -> impl Iterator<Item = &Unit> {
        self.members.iter().filter(|u| u.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Average level over every member, KO'd included. Zero when empty.
    pub fn avg_lvl(&self) -> f64 {
        average(self.members.iter().map(Unit::lvl))
    }

    /// Average level over alive members only. Zero when none are alive.
    pub fn alive_avg_lvl(&self) -> f64 {
        average(self.alive().map(Unit::lvl))
    }

    pub fn total_gil(&self) -> i32 {
        self.members.iter().map(|u| u.gil).sum()
    }

    pub fn has_boss(&self) -> bool {
        self.members.iter().any(|u| u.is_boss)
    }
}

fn average(levels: impl Iterator<Item = i32>) -> f64 {
    let (sum, count) = levels.fold((0i64, 0u32), |(sum, count), lvl| {
        (sum + i64::from(lvl), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: u32, lvl: i32, hp: i32) -> Unit {
        Unit::builder(UnitId(id), "unit").lvl(lvl).hp(hp).build()
    }

    #[test]
    fn party_rejects_a_fifth_member() {
        let mut party = Party::from_units((0..4).map(|i| unit(i, 1, 1))).unwrap();
        let err = party.push(unit(9, 1, 1)).unwrap_err();
        assert_eq!(err, EngineError::GroupFull { capacity: 4 });
    }

    #[test]
    fn averages_distinguish_alive_members() {
        let enemies = Enemies::from_units([unit(1, 10, 10), unit(2, 20, 0)]).unwrap();
        assert_eq!(enemies.avg_lvl(), 15.0);
        assert_eq!(enemies.alive_avg_lvl(), 10.0);
        assert_eq!(enemies.alive_count(), 1);
        assert_eq!(Enemies::new().alive_avg_lvl(), 0.0);
    }

    #[test]
    fn side_follows_controller() {
        let mut u = unit(1, 1, 1);
        assert_eq!(Side::of(&u), Side::Party);
        u.is_ai = true;
        assert_eq!(Side::of(&u), Side::Enemies);
        assert_eq!(Side::Enemies.opposing(), Side::Party);
    }
}
