//! Thief commands: Steal, Detect, What's That, Soul Blade and Annoy.

use crate::combat::damage::{non_zero, physical_bonus};
use crate::combat::{AttackResult, StolenItem, hit};
use crate::rng::RandomSource;
use crate::unit::{Side, StealSlot, StealSlots, Statuses, SupportAbilities, Unit, WeaponType};

use super::Engine;

/// Upper bounds of the rare and semi-rare bands, without and with Master
/// Thief.
const RARE_BAND: (i32, i32) = (0, 32);
const SEMI_RARE_BAND: (i32, i32) = (16, 32);
const UNCOMMON_BAND: i32 = 64;

impl<R: RandomSource> Engine<R> {
    /// Attempts to steal one item from `target`.
    ///
    /// Draw order: the landing roll (skipped with Bandit), the band roll
    /// `next() % 256`, then one draw each for Mug damage and Steal Gil when
    /// those abilities are equipped and the steal succeeded. Mug damage
    /// draws once more for trance gain.
    pub fn steal(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        if !attacker.has_ability(SupportAbilities::BANDIT) {
            let rnd = self.random.next();
            if !hit::lands(attacker, target, rnd) {
                return result.missed();
            }
        }

        let master = attacker.has_ability(SupportAbilities::MASTER_THIEF);
        let band = steal_band(self.random.next() % 256, master);
        let Some((slot, item)) = pick_slot(&target.steal_slots, band, master) else {
            return result.missed();
        };
        result.stolen_item = Some(StolenItem {
            slot,
            item: item.to_string(),
        });

        let mut damaged = None;
        if attacker.has_ability(SupportAbilities::MUG) {
            let base = (attacker.atk() - target.def()).max(1);
            result.base = base;
            result.bonus = physical_bonus(attacker, self.random.next());
            result.damage = base * result.bonus;
            damaged = Some(target);
        }
        if attacker.has_ability(SupportAbilities::STEAL_GIL) {
            let rnd = self.random.next();
            let amount = attacker.lvl() * non_zero(attacker.spd()) + rnd % 100;
            result.stolen_gil = amount.min(target.gil).max(0);
        }

        self.apply_trance(&mut result, attacker, damaged);
        result
    }

    /// Reveals what `target` carries. No draw.
    pub fn detect(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);
        result.detected_items = Some(target.steal_slots.clone());
        result
    }

    /// Turns alive opposing non-boss units around, one landing roll each.
    pub fn whats_that(&self, attacker: &Unit) -> AttackResult {
        let mut result = AttackResult::new(attacker.id, None);
        let opponents = self.members(Side::of(attacker).opposing());

        for unit in opponents.iter().filter(|u| u.is_alive() && !u.is_boss) {
            let rnd = self.random.next();
            if hit::lands(attacker, unit, rnd) && !unit.status_immune_to(Statuses::FACING_BACKWARDS) {
                result.inflict(Statuses::FACING_BACKWARDS, unit.id);
            }
        }

        result
    }

    /// Releases the status affix of an equipped thief sword. No draw.
    pub fn soul_blade(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let weapon = attacker
            .equipment
            .weapon
            .as_ref()
            .filter(|w| w.weapon_type() == WeaponType::ThiefSword && w.can_inflict_status());
        let Some(weapon) = weapon else {
            return result.missed();
        };

        if target.status_immune_to(weapon.status_affix()) {
            result.is_status_immune = true;
        } else {
            result.inflict(weapon.status_affix(), target.id);
        }
        result
    }

    /// Inflicts Trouble on a landing roll.
    pub fn annoy(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let rnd = self.random.next();
        if !hit::lands(attacker, target, rnd) {
            return result.missed();
        }

        if target.status_immune_to(Statuses::TROUBLE) {
            result.is_status_immune = true;
        } else {
            result.inflict(Statuses::TROUBLE, target.id);
        }
        result
    }
}

/// Maps a roll in `0..256` to a band. Bands are checked rarest first.
fn steal_band(roll: i32, master_thief: bool) -> StealSlot {
    let pick = |(normal, master): (i32, i32)| if master_thief { master } else { normal };
    if roll <= pick(RARE_BAND) {
        StealSlot::Rare
    } else if roll <= pick(SEMI_RARE_BAND) {
        StealSlot::SemiRare
    } else if roll <= UNCOMMON_BAND {
        StealSlot::Uncommon
    } else {
        StealSlot::Common
    }
}

/// Item in the rolled slot. Master Thief falls through empty slots towards
/// the common end.
fn pick_slot(slots: &StealSlots, band: StealSlot, master_thief: bool) -> Option<(StealSlot, &str)> {
    let mut slot = Some(band);
    while let Some(current) = slot {
        if let Some(item) = slots.get(current) {
            return Some((current, item));
        }
        if !master_thief {
            return None;
        }
        slot = current.next();
    }
    None
}
