use crate::rng::RandomSource;
use crate::unit::{Statuses, Unit};

use super::{Engine, EngineError};

/// Turn-gauge scheduling methods for Engine.
impl<R: RandomSource> Engine<R> {
    /// Seeds each gauge at `rnd % (max(1, rnd / capacity) * capacity)` so
    /// units do not open the battle in lockstep.
    pub(super) fn initialize_atb(&mut self) {
        let random = &self.random;
        for unit in self
            .party
            .members_mut()
            .iter_mut()
            .chain(self.enemies.members_mut().iter_mut())
        {
            let rnd = random.next();
            unit.atb = initial_atb(unit.atb_bar_length(), rnd);
        }
    }

    /// Advances every gauge by one step of the configured battle speed.
    pub fn tick(&mut self) {
        let increment = self.config.speed.atb_increment();
        for unit in self
            .party
            .members_mut()
            .iter_mut()
            .chain(self.enemies.members_mut().iter_mut())
        {
            advance(unit, increment);
        }
    }

    /// Advances `ticks` steps. Rejects zero before touching any gauge.
    pub fn tick_n(&mut self, ticks: u32) -> Result<(), EngineError> {
        if ticks == 0 {
            return Err(EngineError::InvalidTickCount(ticks));
        }
        for _ in 0..ticks {
            self.tick();
        }
        Ok(())
    }

    /// Units whose gauge sits exactly at capacity.
    pub fn ready_units(&self) -> impl Iterator<Item = &Unit> {
        self.units().filter(|u| u.is_ready())
    }
}

fn initial_atb(capacity: i32, rnd: i32) -> i32 {
    if capacity <= 0 {
        return 0;
    }
    let floor = (rnd / capacity).max(1);
    rnd % (floor * capacity)
}

/// Slow scales the increment by 0.66 first, then Haste by 1.5, both floored.
fn advance(unit: &mut Unit, base_increment: i32) {
    let mut increment = base_increment;
    if unit.has_status(Statuses::SLOW) {
        increment = increment * 66 / 100;
    }
    if unit.has_status(Statuses::HASTE) {
        increment = increment * 3 / 2;
    }
    let capacity = unit.atb_bar_length().max(0);
    unit.atb = (unit.atb + increment).min(capacity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_atb_stays_within_capacity() {
        assert_eq!(initial_atb(8000, 1), 1);
        assert_eq!(initial_atb(8000, 8000), 0);
        assert_eq!(initial_atb(8000, 65534), 65534 % 64000);
        assert_eq!(initial_atb(0, 500), 0);
        assert_eq!(initial_atb(-160, 500), 0);
    }

    #[test]
    fn slow_then_haste_compose() {
        let mut unit = Unit::builder(crate::unit::UnitId(1), "u").spd(10).build();
        unit.add_status(Statuses::SLOW | Statuses::HASTE);
        advance(&mut unit, 10);
        // 10 * 0.66 = 6, 6 * 1.5 = 9
        assert_eq!(unit.atb, 9);
    }

    #[test]
    fn gauge_clamps_at_capacity() {
        let mut unit = Unit::builder(crate::unit::UnitId(1), "u").spd(10).build();
        unit.atb = 7995;
        advance(&mut unit, 14);
        assert_eq!(unit.atb, 8000);
        assert!(unit.is_ready());
        advance(&mut unit, 14);
        assert_eq!(unit.atb, 8000);
    }
}
