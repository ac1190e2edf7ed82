//! Spell and sword magic resolution.

use crate::combat::damage::{one_and_half, physical_bonus};
use crate::combat::{AttackResult, Restore};
use crate::formula::{Spell, SpellEffect};
use crate::rng::RandomSource;
use crate::unit::{Statuses, Unit};

use super::{Engine, EngineError, reflects};

impl<R: RandomSource> Engine<R> {
    /// Casts `spell` on a single target.
    ///
    /// Fails only when the name is not in the catalogue, before any draw.
    pub fn magic(&self, attacker: &Unit, target: &Unit, spell: &str) -> Result<AttackResult, EngineError> {
        let spell = Spell::from_name(spell)?;
        Ok(self.cast(attacker, target, spell, false))
    }

    /// Casts `spell` on every target in order, with the multi-target bonus
    /// penalty.
    pub fn magic_multi<'u>(
        &self,
        attacker: &Unit,
        targets: impl IntoIterator<Item = &'u Unit>,
        spell: &str,
    ) -> Result<Vec<AttackResult>, EngineError> {
        let spell = Spell::from_name(spell)?;
        Ok(targets
            .into_iter()
            .map(|target| self.cast(attacker, target, spell, true))
            .collect())
    }

    /// One cast against one target.
    ///
    /// The opening draw drives the reflect retarget and the spell's bonus
    /// roll. Meteor, Comet and trance gain draw afresh.
    fn cast(&self, attacker: &Unit, target: &Unit, spell: Spell, multi_target: bool) -> AttackResult {
        let rnd = self.random.next();
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let element = spell.element();
        if target.is_immune_to(element) {
            return result;
        }

        let doubled = target.has_status(Statuses::REFLECT_2X);
        let mut multi_target = multi_target;
        let receiver = if reflects(spell.ignores_reflect(), target) {
            result.is_reflected = true;
            let Some((unit, sole)) = self.reflect_target(attacker, target, rnd) else {
                return result;
            };
            result.reflected_to = Some(unit.id);
            if sole {
                multi_target = false;
            }
            unit
        } else {
            target
        };

        if receiver.is_immune_to(element) {
            return result;
        }

        let double = |bonus: i32| if doubled { bonus * 2 } else { bonus };
        let mut damaged = None;

        match spell.resolve(attacker, receiver, multi_target, rnd, &self.random) {
            SpellEffect::Damage { base, bonus } => {
                let bonus = double(bonus);
                result.base = base;
                result.bonus = bonus;
                result.damage = base * bonus;
                if receiver.absorbs(element) {
                    result.is_absorbed = true;
                    return result;
                }
                damaged = Some(receiver);
            }
            SpellEffect::Heal { base, bonus } => {
                let bonus = double(bonus);
                result.base = base;
                result.bonus = bonus;
                if receiver.is_undead() {
                    result.damage = base * bonus;
                    damaged = Some(receiver);
                } else {
                    result.hp_restored = Some(Restore::new(receiver.id, base * bonus));
                }
            }
            SpellEffect::Drain { base, bonus } => {
                let bonus = double(bonus);
                let amount = base * bonus;
                result.base = base;
                result.bonus = bonus;
                result.damage = amount;
                if receiver.is_undead() {
                    result.is_reflected = true;
                    result.reflected_to = Some(attacker.id);
                    result.hp_restored = Some(Restore::new(receiver.id, amount));
                    damaged = Some(attacker);
                } else {
                    result.hp_restored = Some(Restore::new(attacker.id, amount));
                    damaged = Some(receiver);
                }
            }
            SpellEffect::Osmose { amount } => {
                result.mp_damage = amount;
                if receiver.is_undead() {
                    result.is_reflected = true;
                    result.reflected_to = Some(attacker.id);
                    result.mp_restored = Some(Restore::new(receiver.id, amount));
                } else {
                    result.mp_restored = Some(Restore::new(attacker.id, amount));
                }
            }
            SpellEffect::Fixed(damage) => {
                result.damage = damage;
                damaged = Some(receiver);
            }
            SpellEffect::Inflict(status) => {
                if receiver.status_immune_to(status) {
                    result.is_status_immune = true;
                } else {
                    result.inflict(status, receiver.id);
                }
            }
            SpellEffect::Miss => return result.missed(),
            SpellEffect::NoEffect => {}
        }

        let dealt = result.damage > 0;
        self.apply_trance(&mut result, attacker, damaged.filter(|_| dealt));
        result
    }

    /// Sword magic: a physical strike carrying a spell's element.
    ///
    /// `base = Atk + sword power - Def`, physical bonus, weakness ×1.5.
    /// Always hits and ignores Reflect, Protect and Shell. One draw, plus
    /// trance gain.
    pub fn sword_magic(&self, attacker: &Unit, target: &Unit, spell: &str) -> Result<AttackResult, EngineError> {
        let parsed = Spell::from_name(spell)?;
        let power = parsed
            .sword_magic_power()
            .ok_or_else(|| EngineError::NotSwordMagic(spell.to_string()))?;

        let rnd = self.random.next();
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let element = parsed.element();
        if target.is_immune_to(element) {
            return Ok(result);
        }

        let base = attacker.atk() + power - target.def();
        let mut bonus = physical_bonus(attacker, rnd);
        if target.is_weak_to(element) {
            bonus = one_and_half(bonus);
        }

        result.base = base;
        result.bonus = bonus;
        result.damage = base * bonus;
        if target.absorbs(element) {
            result.is_absorbed = true;
            return Ok(result);
        }

        self.apply_trance(&mut result, attacker, Some(target));
        Ok(result)
    }
}
