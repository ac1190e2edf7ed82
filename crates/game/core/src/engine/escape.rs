use crate::combat::AttackResult;
use crate::rng::RandomSource;
use crate::unit::Unit;

use super::Engine;

impl<R: RandomSource> Engine<R> {
    /// Party-wide run from a random encounter.
    ///
    /// `chance = floor(party avg Lvl * floor(200 / enemies alive avg Lvl) / 16)`,
    /// escaped when `rnd % 100 < chance`. Party average counts KO'd members;
    /// with no enemy alive the enemy average counts as 1.
    pub fn escape(&self, attacker: &Unit) -> AttackResult {
        let mut result = AttackResult::new(attacker.id, None);

        let enemies_lvl = match self.enemies.alive_avg_lvl() {
            avg if avg <= 0.0 => 1.0,
            avg => avg,
        };
        let chance = (self.party.avg_lvl() * (200.0 / enemies_lvl).floor() / 16.0).floor() as i32;

        let rnd = self.random.next();
        result.is_escaped = rnd % 100 < chance;
        result
    }

    /// Single-unit run. Always fails against a boss, otherwise always
    /// succeeds and drops 10% of the enemies' total gil. No draw.
    pub fn flee(&self, attacker: &Unit) -> AttackResult {
        let result = AttackResult::new(attacker.id, None);
        if self.enemies.has_boss() {
            return result.missed();
        }
        AttackResult {
            is_escaped: true,
            gil_lost: self.enemies.total_gil() * 10 / 100,
            ..result
        }
    }
}
