//! Integer damage arithmetic shared by every formula.
//!
//! Multipliers floor after each step, so the order in which they are
//! applied is part of the rules.

use crate::unit::{Elements, Unit};

/// Divisor guard: non-positive values count as 1.
#[inline]
pub const fn non_zero(value: i32) -> i32 {
    if value <= 0 { 1 } else { value }
}

#[inline]
pub const fn half(value: i32) -> i32 {
    value.div_euclid(2)
}

#[inline]
pub const fn one_and_half(value: i32) -> i32 {
    (value * 3).div_euclid(2)
}

/// Variance roll `rnd % (floor((Lvl + stat) / 8) + 1)` added to most bonuses.
#[inline]
pub fn variance(lvl: i32, stat: i32, rnd: i32) -> i32 {
    rnd % non_zero((lvl + stat).div_euclid(8) + 1)
}

/// Standard physical bonus: `Str + rnd % (floor((Lvl + Str) / 8) + 1)`.
pub fn physical_bonus(attacker: &Unit, rnd: i32) -> i32 {
    attacker.str() + variance(attacker.lvl(), attacker.str(), rnd)
}

/// Standard magical bonus: `Mag + rnd % (floor((Lvl + Mag) / 8) + 1)`.
pub fn magic_bonus(attacker: &Unit, rnd: i32) -> i32 {
    attacker.mag() + variance(attacker.lvl(), attacker.mag(), rnd)
}

/// Weak ×1.5 (and again ×1.5 with matching Elem-Atk), resistant halved.
pub fn elemental_bonus(bonus: i32, attacker: &Unit, target: &Unit, element: Elements) -> i32 {
    let mut bonus = bonus;
    if target.is_weak_to(element) {
        bonus = one_and_half(bonus);
        if attacker.equipment.has_elem_atk(element) {
            bonus = one_and_half(bonus);
        }
    }
    if target.is_resistant_to(element) {
        bonus = half(bonus);
    }
    bonus
}

/// Trance lost by an attacker in Trance per action:
/// `floor((300 - Lvl) / Spr) * 10 mod 256`.
pub fn trance_decrease(attacker: &Unit) -> i32 {
    ((300 - attacker.lvl()).div_euclid(non_zero(attacker.spr())) * 10).rem_euclid(256)
}
