//! Hit, critical and counter checks.
//!
//! All checks take an already drawn `rnd`. Several of them are evaluated
//! against the same draw within one attack.

use crate::unit::{Statuses, Unit};

use super::damage::non_zero;

/// Critical hit: `rnd % (Spr / 4) > rnd % 100`.
pub fn is_critical(attacker: &Unit, rnd: i32) -> bool {
    rnd % non_zero(attacker.spr() / 4) > rnd % 100
}

/// Hit chance in percent after status penalties.
///
/// Each of attacker Confuse/Darkness and target Defend/Distract halves the
/// current value; target Vanish zeroes it.
pub fn accuracy(attacker: &Unit, target: &Unit) -> i32 {
    let mut acc = 100;
    for halves in [
        attacker.has_status(Statuses::CONFUSE),
        attacker.has_status(Statuses::DARKNESS),
        target.has_status(Statuses::DEFEND),
        target.has_status(Statuses::DISTRACT),
    ] {
        if halves {
            acc -= acc / 2;
        }
    }
    if target.has_status(Statuses::VANISH) {
        acc = 0;
    }
    acc.max(0)
}

pub fn is_miss(accuracy: i32, rnd: i32) -> bool {
    rnd % 100 >= accuracy
}

pub fn is_evaded(target: &Unit, rnd: i32) -> bool {
    rnd % 100 < target.eva()
}

/// Counter threshold: `Spr` (doubled under Eye for Eye) against `rnd % 100`.
pub fn is_counter_attack(target: &Unit, rnd: i32) -> bool {
    let threshold = if target.has_status(Statuses::EYE_FOR_EYE) {
        target.spr() * 2
    } else {
        target.spr()
    };
    threshold >= rnd % 100
}

/// Level-versus-level landing roll shared by Steal, Annoy and What's That:
/// `rnd % (Lvl + Spr) >= rnd % target.Lvl`.
pub fn lands(attacker: &Unit, target: &Unit, rnd: i32) -> bool {
    rnd % non_zero(attacker.lvl() + attacker.spr()) >= rnd % non_zero(target.lvl())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitId;

    fn unit() -> Unit {
        Unit::builder(UnitId(1), "u").lvl(10).spr(10).build()
    }

    #[test]
    fn accuracy_halvings_compound() {
        let mut attacker = unit();
        let mut target = unit();
        attacker.add_status(Statuses::CONFUSE | Statuses::DARKNESS);
        target.add_status(Statuses::DEFEND | Statuses::DISTRACT);
        // 100 -> 50 -> 25 -> 13 -> 7
        assert_eq!(accuracy(&attacker, &target), 7);

        target.add_status(Statuses::VANISH);
        assert_eq!(accuracy(&attacker, &target), 0);
    }

    #[test]
    fn zero_spirit_never_crits() {
        let mut attacker = unit();
        attacker.set_spr(0);
        for rnd in 1..500 {
            assert!(!is_critical(&attacker, rnd));
        }
    }

    #[test]
    fn eye_for_eye_doubles_counter_threshold() {
        let mut target = unit();
        assert!(!is_counter_attack(&target, 15));
        target.add_status(Statuses::EYE_FOR_EYE);
        assert!(is_counter_attack(&target, 15));
    }
}
