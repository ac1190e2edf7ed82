//! Sword art resolution.

use crate::combat::AttackResult;
use crate::formula::{ArtEffect, SwordArt};
use crate::rng::RandomSource;
use crate::unit::{Side, Statuses, Unit};

use super::{Engine, EngineError, reflects};

impl<R: RandomSource> Engine<R> {
    /// Performs a sword art on one target. "Charge!" ignores `target`.
    pub fn sword_art(&self, attacker: &Unit, target: &Unit, art: &str) -> Result<AttackResult, EngineError> {
        let art = SwordArt::from_name(art)?;
        Ok(match art {
            SwordArt::Charge => self.charge(attacker),
            art => self.perform_art(attacker, target, art),
        })
    }

    /// Fans a sword art out over several targets. Only arts that support
    /// multi-targeting are accepted.
    pub fn sword_art_multi<'u>(
        &self,
        attacker: &Unit,
        targets: impl IntoIterator<Item = &'u Unit>,
        art: &str,
    ) -> Result<Vec<AttackResult>, EngineError> {
        let parsed = SwordArt::from_name(art)?;
        if !parsed.supports_multi_target() {
            return Err(EngineError::NotMultiTarget(art.to_string()));
        }
        Ok(targets
            .into_iter()
            .map(|target| self.perform_art(attacker, target, parsed))
            .collect())
    }

    fn perform_art(&self, attacker: &Unit, target: &Unit, art: SwordArt) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let element = art.element(attacker);
        if target.is_immune_to(element) {
            return result;
        }

        let doubled = target.has_status(Statuses::REFLECT_2X);
        let receiver = if reflects(art.ignores_reflect(), target) {
            result.is_reflected = true;
            let rnd = self.random.next();
            let Some((unit, _)) = self.reflect_target(attacker, target, rnd) else {
                return result;
            };
            result.reflected_to = Some(unit.id);
            unit
        } else {
            target
        };

        if receiver.is_immune_to(element) {
            return result;
        }

        let mut damaged = None;
        match art.resolve(attacker, receiver, &self.random) {
            ArtEffect::Damage { base, bonus, hp_cost } => {
                let bonus = if doubled { bonus * 2 } else { bonus };
                result.base = base;
                result.bonus = bonus;
                result.damage = base * bonus;
                result.attacker_hp_cost = hp_cost;
                if receiver.absorbs(element) {
                    result.is_absorbed = true;
                    return result;
                }
                damaged = Some(receiver);
            }
            ArtEffect::Inflict(status) => {
                if receiver.status_immune_to(status) {
                    result.is_status_immune = true;
                } else {
                    result.inflict(status, receiver.id);
                }
            }
            ArtEffect::Reduce(reduction) => result.stat_reduction = Some(reduction),
            ArtEffect::Miss => return result.missed(),
            ArtEffect::Charge => return self.charge(attacker),
        }

        let dealt = result.damage > 0;
        self.apply_trance(&mut result, attacker, damaged.filter(|_| dealt));
        result
    }

    /// Every alive near-death member of the acting side attacks a random
    /// alive opponent. One draw picks each opponent; the attacks draw as
    /// usual. The outcome has no target and carries no trance change of
    /// its own.
    fn charge(&self, attacker: &Unit) -> AttackResult {
        let mut result = AttackResult::new(attacker.id, None);
        let side = Side::of(attacker);

        for member in self.members(side).iter().filter(|u| u.is_alive() && u.is_near_death()) {
            let rnd = self.random.next();
            if let Some((opponent, _)) = self.pick_alive(side.opposing(), rnd) {
                result.sub_results.push(self.attack(member, opponent));
            }
        }

        result
    }
}
