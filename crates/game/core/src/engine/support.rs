//! Support commands: Focus, Sacrifice, Lucky Seven and Thievery.

use crate::combat::{AttackResult, Restore};
use crate::rng::RandomSource;
use crate::unit::{Side, Unit};

use super::Engine;

const LUCKY_DAMAGE: [i32; 4] = [7, 77, 777, 7777];

impl<R: RandomSource> Engine<R> {
    /// Raises the attacker's Mag by a quarter, at least 1. No draw.
    pub fn focus(&self, attacker: &Unit) -> AttackResult {
        let mut result = AttackResult::new(attacker.id, None);
        result.mag_increase = (attacker.mag() / 4).max(1);
        result
    }

    /// The attacker gives up its remaining HP to fully restore and revive
    /// every other member of its side. No draw.
    pub fn sacrifice(&self, attacker: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, attacker.id);
        result.is_sacrificed = true;
        result.damage = attacker.current_hp;

        for member in self.members(Side::of(attacker)).iter().filter(|u| u.id != attacker.id) {
            let mut restore = AttackResult::targeted(attacker.id, member.id);
            restore.is_revived = !member.is_alive();
            restore.hp_restored = Some(Restore::new(member.id, member.hp() - member.current_hp));
            restore.mp_restored = Some(Restore::new(member.id, member.mp() - member.current_mp));
            result.sub_results.push(restore);
        }

        result
    }

    /// Deals 7, 77, 777 or 7777 (by `rnd % 4`) when the attacker's current
    /// HP ends in 7, otherwise 1.
    pub fn lucky_seven(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let rnd = self.random.next();
        result.damage = if attacker.current_hp % 10 == 7 {
            LUCKY_DAMAGE[rnd.rem_euclid(4) as usize]
        } else {
            1
        };

        self.apply_trance(&mut result, attacker, Some(target));
        result
    }

    /// `max(1, successful steals * Spd / 2)`. No draw besides trance gain.
    pub fn thievery(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);
        result.damage = (attacker.successful_steals * attacker.spd() / 2).max(1);
        self.apply_trance(&mut result, attacker, Some(target));
        result
    }
}
