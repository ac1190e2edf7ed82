//! Physical attack resolution.

use crate::combat::AttackResult;
use crate::combat::damage::{elemental_bonus, half, non_zero, one_and_half, physical_bonus, variance};
use crate::combat::hit;
use crate::rng::RandomSource;
use crate::unit::{EnemyType, Statuses, SupportAbilities, Unit, WeaponType};

use super::Engine;

const STEINER: &str = "Stainer";
const BLOOD_SWORD: &str = "Blood Sword";
const SAVE_THE_QUEEN: &str = "Save The Queen";

impl<R: RandomSource> Engine<R> {
    /// Resolves a physical attack.
    ///
    /// Draws once for critical, accuracy, evasion and counter checks, once
    /// more for the weapon damage roll (also used by the weapon's status
    /// affix), and once for the trance gain of a player-controlled target
    /// that took damage.
    /// Any failed gate returns early without further draws.
    pub fn attack(&self, attacker: &Unit, target: &Unit) -> AttackResult {
        let mut result = AttackResult::targeted(attacker.id, target.id);

        let rnd = self.random.next();
        result.is_critical = hit::is_critical(attacker, rnd);

        if hit::is_miss(hit::accuracy(attacker, target), rnd) {
            result.is_miss = true;
            return result;
        }

        if hit::is_evaded(target, rnd) {
            result.is_evaded = true;
            return result;
        }

        let element = attacker.equipment.weapon_element();
        if target.is_immune_to(element) {
            return result;
        }

        let damage_rnd = self.random.next();
        let (base, bonus) = damage_parts(attacker, target, damage_rnd, self.config.ipsens_castle);
        result.base = base;

        if target.absorbs(element) {
            result.is_absorbed = true;
            result.bonus = bonus;
            result.damage = base * bonus;
            return result;
        }

        let mut bonus = apply_multipliers(attacker, target, bonus, result.is_critical);
        bonus = elemental_bonus(bonus, attacker, target, element);
        if attacker.has_status(Statuses::MINI) {
            bonus = 1;
        }

        let landed_affix = attacker.equipment.weapon.as_ref().filter(|weapon| {
            weapon.can_inflict_status() && weapon.status_accuracy() > damage_rnd % 100
        });
        if let Some(weapon) = landed_affix {
            if target.status_immune_to(weapon.status_affix()) {
                result.is_status_immune = true;
            } else {
                result.applicable_statuses |= weapon.status_affix();
            }
        }

        result.bonus = bonus;
        result.damage = base * bonus;
        result.is_counter_attack = hit::is_counter_attack(target, rnd);

        let dealt = result.damage > 0;
        self.apply_trance(&mut result, attacker, Some(target).filter(|_| dealt));
        result
    }
}

/// Weapon-specific `(base, bonus)`.
///
/// AI units use one formula regardless of weapon, with a base of at least 1.
/// Save The Queen is checked before the generic knight-sword branch. Ipsen's
/// Castle inverts the base of the remaining player formulas. Player bases are
/// not clamped and may go negative. Unarmed attacks deal nothing.
fn damage_parts(attacker: &Unit, target: &Unit, rnd: i32, ipsens_castle: bool) -> (i32, i32) {
    let (str, lvl) = (attacker.str(), attacker.lvl());

    if attacker.is_ai {
        let base = (attacker.atk() - target.def()).max(1);
        let bonus = str + rnd % non_zero((lvl + str).div_euclid(4) + 1);
        return (base, bonus);
    }

    if attacker.equipment.weapon_name() == SAVE_THE_QUEEN {
        let base = attacker.atk() + lvl - target.def();
        return (base, physical_bonus(attacker, rnd));
    }

    let base = if ipsens_castle {
        60 - attacker.atk() - target.def()
    } else {
        attacker.atk() - target.def()
    };

    match attacker.equipment.weapon_type() {
        WeaponType::None => (0, 0),
        kind if kind.is_standard() => (base, physical_bonus(attacker, rnd)),
        WeaponType::KnightSword | WeaponType::ThiefSword => {
            let bonus = (str + attacker.spr()).div_euclid(2) + variance(lvl, str, rnd);
            (base, bonus)
        }
        WeaponType::Hammer | WeaponType::Fork => {
            let bonus = rnd % non_zero(str) + 1 + rnd % non_zero((lvl + str).div_euclid(8));
            (base, bonus)
        }
        WeaponType::Racket => {
            let bonus = (str + attacker.spd()).div_euclid(2) + variance(lvl, str, rnd);
            (base, bonus)
        }
        _ => (0, 0),
    }
}

/// Status and ability multipliers, applied in a fixed order with flooring
/// after each step.
fn apply_multipliers(attacker: &Unit, target: &Unit, bonus: i32, is_critical: bool) -> i32 {
    let mut bonus = bonus;

    if target.enemy_type.contains(EnemyType::HUMAN)
        && attacker.has_ability(SupportAbilities::MAN_EATER)
    {
        bonus = one_and_half(bonus);
    }
    if attacker.has_ability(SupportAbilities::MP_ATTACK) {
        bonus = one_and_half(bonus);
    }
    if attacker.has_status(Statuses::TRANCE) {
        bonus = if attacker.name == STEINER && attacker.equipment.weapon_name() != BLOOD_SWORD {
            bonus * 3
        } else {
            one_and_half(bonus)
        };
    }
    if attacker.has_status(Statuses::BERSERK) {
        bonus = one_and_half(bonus);
    }
    for status in [Statuses::FACING_BACKWARDS, Statuses::SLEEP, Statuses::MINI] {
        if target.has_status(status) {
            bonus = one_and_half(bonus);
        }
    }
    if is_critical {
        bonus *= 2;
    }
    if attacker.has_status(Statuses::BACKROW) {
        bonus = half(bonus);
    }
    if target.has_status(Statuses::PROTECT) {
        bonus = half(bonus);
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{UnitId, Weapon};

    fn unit(weapon_type: WeaponType) -> Unit {
        Unit::builder(UnitId(1), "u")
            .str(10)
            .lvl(10)
            .spr(10)
            .spd(10)
            .weapon(Weapon::builder("w", weapon_type).atk(10).build().unwrap())
            .build()
    }

    #[test]
    fn ai_bonus_uses_quarter_variance() {
        let mut attacker = unit(WeaponType::None);
        attacker.is_ai = true;
        // base max(1, 10 - 0), bonus 10 + 7 % (20 / 4 + 1)
        assert_eq!(damage_parts(&attacker, &unit(WeaponType::None), 7, false), (10, 11));
    }

    #[test]
    fn unarmed_player_deals_nothing() {
        let mut attacker = unit(WeaponType::None);
        attacker.equipment.weapon = None;
        assert_eq!(damage_parts(&attacker, &unit(WeaponType::None), 1, false), (0, 0));
    }

    #[test]
    fn only_ai_bases_are_clamped() {
        let mut attacker = unit(WeaponType::Dagger);
        let mut target = unit(WeaponType::Dagger);
        attacker.set_atk(-5);
        target.set_def(9);
        // Atk 5 (weapon 10, base -5) against Def 9
        assert_eq!(damage_parts(&attacker, &target, 1, false), (-4, 11));

        attacker.is_ai = true;
        assert_eq!(damage_parts(&attacker, &target, 1, false).0, 1);
    }

    #[test]
    fn ipsens_castle_base_can_go_negative() {
        let mut attacker = unit(WeaponType::Dagger);
        let mut target = unit(WeaponType::Dagger);
        attacker.set_atk(30);
        target.set_def(30);
        // 60 - 40 - 30
        assert_eq!(damage_parts(&attacker, &target, 1, true), (-10, 11));
        assert_eq!(damage_parts(&attacker, &target, 1, false), (10, 11));
    }

    #[test]
    fn multipliers_apply_in_order() {
        let mut attacker = unit(WeaponType::Dagger);
        let mut target = unit(WeaponType::Dagger);
        attacker.add_status(Statuses::BERSERK | Statuses::BACKROW);
        target.add_status(Statuses::SLEEP | Statuses::PROTECT);
        // 11 -> 16 -> 24 -> x2 48 -> 24 -> 12
        assert_eq!(apply_multipliers(&attacker, &target, 11, true), 12);
    }
}
