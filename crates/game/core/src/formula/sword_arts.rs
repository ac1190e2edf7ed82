//! Sword art catalogue.
//!
//! Sword arts draw from the random source themselves; unlike spells they
//! do not reuse a draw taken by the resolver.

use crate::combat::damage::{half, one_and_half, physical_bonus};
use crate::combat::{ReducibleStat, StatReduction};
use crate::engine::EngineError;
use crate::rng::RandomSource;
use crate::unit::{Elements, Statuses, Unit};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum SwordArt {
    Darkside,
    #[strum(serialize = "Minus Strike")]
    MinusStrike,
    #[strum(serialize = "Iai Strike")]
    IaiStrike,
    #[strum(serialize = "Power Break")]
    PowerBreak,
    #[strum(serialize = "Armour Break")]
    ArmourBreak,
    #[strum(serialize = "Mental Break")]
    MentalBreak,
    #[strum(serialize = "Magic Break")]
    MagicBreak,
    #[strum(serialize = "Charge!")]
    Charge,
    #[strum(serialize = "Thunder Slash")]
    ThunderSlash,
    #[strum(serialize = "Stock Break")]
    StockBreak,
    Climhazzard,
    Shock,
}

/// What a resolved sword art does to its receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtEffect {
    /// `hp_cost` is paid by the attacker.
    Damage { base: i32, bonus: i32, hp_cost: i32 },
    Inflict(Statuses),
    Reduce(StatReduction),
    Miss,
    /// Resolved by the engine as a chain of independent attacks.
    Charge,
}

impl SwordArt {
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        name.parse()
            .map_err(|_| EngineError::UnknownSwordArt(name.to_string()))
    }

    /// Element the art strikes with. Stock Break and Shock use the
    /// attacker's weapon element.
    pub fn element(self, attacker: &Unit) -> Elements {
        match self {
            SwordArt::Darkside => Elements::SHADOW,
            SwordArt::ThunderSlash => Elements::THUNDER,
            SwordArt::StockBreak | SwordArt::Shock => attacker.equipment.weapon_element(),
            _ => Elements::empty(),
        }
    }

    /// Only Thunder Slash and Climhazzard bounce off Reflect.
    pub const fn ignores_reflect(self) -> bool {
        !matches!(self, SwordArt::ThunderSlash | SwordArt::Climhazzard)
    }

    pub const fn supports_multi_target(self) -> bool {
        matches!(self, SwordArt::StockBreak | SwordArt::Climhazzard)
    }

    pub fn resolve(self, attacker: &Unit, receiver: &Unit, random: &impl RandomSource) -> ArtEffect {
        match self {
            SwordArt::Darkside => ArtEffect::Damage {
                base: ((attacker.atk() + 14).div_euclid(10) - receiver.def()).max(1),
                bonus: physical_bonus(attacker, random.next()),
                hp_cost: attacker.hp() / 8,
            },
            SwordArt::MinusStrike => ArtEffect::Damage {
                base: receiver.hp() - receiver.current_hp,
                bonus: 1,
                hp_cost: 0,
            },
            SwordArt::IaiStrike => {
                if random.next_range(1, 11) > 3 {
                    ArtEffect::Miss
                } else {
                    ArtEffect::Inflict(Statuses::DEATH)
                }
            }
            SwordArt::PowerBreak => break_stat(random, ReducibleStat::Str, || {
                let str = receiver.str();
                str - (str * 75).div_euclid(100)
            }),
            SwordArt::ArmourBreak => break_stat(random, ReducibleStat::Def, || {
                receiver.def() - half(receiver.def())
            }),
            SwordArt::MentalBreak => break_stat(random, ReducibleStat::MagDef, || {
                receiver.mag_def() - half(receiver.mag_def())
            }),
            SwordArt::MagicBreak => break_stat(random, ReducibleStat::Mag, || {
                receiver.mag() - half(receiver.mag())
            }),
            SwordArt::Charge => ArtEffect::Charge,
            SwordArt::ThunderSlash => ArtEffect::Damage {
                base: (19 * receiver.hp()).div_euclid(100),
                bonus: 1,
                hp_cost: 0,
            },
            SwordArt::StockBreak => {
                let base = (attacker.atk() * 15).div_euclid(10) - receiver.def();
                physical_art(self, attacker, receiver, base, random)
            }
            SwordArt::Climhazzard => {
                let base = (attacker.atk() * 2 - receiver.mag_def()).max(1);
                let mut bonus = physical_bonus(attacker, random.next());
                if receiver.has_status(Statuses::SHELL) {
                    bonus = half(bonus);
                }
                if attacker.has_status(Statuses::MINI) {
                    bonus = half(bonus);
                }
                ArtEffect::Damage {
                    base,
                    bonus,
                    hp_cost: 0,
                }
            }
            SwordArt::Shock => {
                let base = attacker.atk() * 3 - receiver.def();
                physical_art(self, attacker, receiver, base, random)
            }
        }
    }
}

/// 50% roll: `next_range(1, 3) == 2` fails.
fn break_stat(
    random: &impl RandomSource,
    stat: ReducibleStat,
    amount: impl FnOnce() -> i32,
) -> ArtEffect {
    if random.next_range(1, 3) == 2 {
        return ArtEffect::Miss;
    }
    ArtEffect::Reduce(StatReduction {
        stat,
        amount: amount(),
    })
}

/// Stock Break and Shock: weapon element weakness, Protect, Mini floor.
fn physical_art(
    art: SwordArt,
    attacker: &Unit,
    receiver: &Unit,
    base: i32,
    random: &impl RandomSource,
) -> ArtEffect {
    let mut bonus = physical_bonus(attacker, random.next());
    if receiver.is_weak_to(art.element(attacker)) {
        bonus = one_and_half(bonus);
    }
    if receiver.has_status(Statuses::PROTECT) {
        bonus = half(bonus);
    }

    let (base, bonus) = if attacker.has_status(Statuses::MINI) {
        (1, 1)
    } else {
        (base.max(1), bonus)
    };

    ArtEffect::Damage {
        base,
        bonus,
        hp_cost: 0,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::rng::SequenceRandom;
    use crate::unit::{UnitId, Weapon, WeaponType};

    fn steiner() -> Unit {
        Unit::builder(UnitId(1), "Stainer")
            .lvl(10)
            .str(10)
            .hp(160)
            .weapon(
                Weapon::builder("Broadsword", WeaponType::Sword)
                    .atk(20)
                    .build()
                    .unwrap(),
            )
            .build()
    }

    fn target() -> Unit {
        Unit::builder(UnitId(2), "Goblin")
            .hp(100)
            .current_hp(40)
            .str(12)
            .build()
    }

    #[test]
    fn names_follow_the_menu_labels() {
        assert_eq!(SwordArt::from_name("Charge!").unwrap(), SwordArt::Charge);
        assert_eq!(SwordArt::from_name("Minus Strike").unwrap(), SwordArt::MinusStrike);
        for art in SwordArt::iter() {
            assert_eq!(SwordArt::from_name(art.as_ref()).unwrap(), art);
        }
        assert!(matches!(
            SwordArt::from_name("Lancer"),
            Err(EngineError::UnknownSwordArt(_))
        ));
    }

    #[test]
    fn only_two_arts_fan_out() {
        let multi: Vec<_> = SwordArt::iter()
            .filter(|a| a.supports_multi_target())
            .collect();
        assert_eq!(multi, vec![SwordArt::StockBreak, SwordArt::Climhazzard]);
    }

    #[test]
    fn darkside_costs_an_eighth_of_max_hp() {
        let random = SequenceRandom::constant(1);
        let effect = SwordArt::Darkside.resolve(&steiner(), &target(), &random);
        // base = max(1, floor(34 / 10) - 0) = 3, bonus = 10 + 1 % 3
        assert_eq!(
            effect,
            ArtEffect::Damage {
                base: 3,
                bonus: 11,
                hp_cost: 20
            }
        );
    }

    #[test]
    fn minus_strike_deals_missing_hp() {
        let random = SequenceRandom::constant(1);
        let effect = SwordArt::MinusStrike.resolve(&steiner(), &target(), &random);
        assert_eq!(
            effect,
            ArtEffect::Damage {
                base: 60,
                bonus: 1,
                hp_cost: 0
            }
        );
        assert_eq!(random.position(), 0);
    }

    #[test]
    fn iai_strike_lands_on_low_rolls() {
        // next_range(1, 11) = 1 + value % 10
        let lands = SequenceRandom::constant(2);
        assert_eq!(
            SwordArt::IaiStrike.resolve(&steiner(), &target(), &lands),
            ArtEffect::Inflict(Statuses::DEATH)
        );
        let misses = SequenceRandom::constant(3);
        assert_eq!(
            SwordArt::IaiStrike.resolve(&steiner(), &target(), &misses),
            ArtEffect::Miss
        );
    }

    #[test]
    fn power_break_keeps_three_quarters() {
        // next_range(1, 3) = 1 + value % 2
        let lands = SequenceRandom::constant(2);
        assert_eq!(
            SwordArt::PowerBreak.resolve(&steiner(), &target(), &lands),
            ArtEffect::Reduce(StatReduction {
                stat: ReducibleStat::Str,
                amount: 3
            })
        );
        let fails = SequenceRandom::constant(1);
        assert_eq!(
            SwordArt::PowerBreak.resolve(&steiner(), &target(), &fails),
            ArtEffect::Miss
        );
    }

    #[test]
    fn mini_attacker_stock_break_deals_one() {
        let random = SequenceRandom::constant(1);
        let mut attacker = steiner();
        attacker.add_status(Statuses::MINI);
        assert_eq!(
            SwordArt::StockBreak.resolve(&attacker, &target(), &random),
            ArtEffect::Damage {
                base: 1,
                bonus: 1,
                hp_cost: 0
            }
        );
    }

    #[test]
    fn shock_halves_through_protect() {
        let random = SequenceRandom::constant(1);
        let mut receiver = target();
        receiver.add_status(Statuses::PROTECT);
        assert_eq!(
            SwordArt::Shock.resolve(&steiner(), &receiver, &random),
            ArtEffect::Damage {
                base: 60,
                bonus: 5,
                hp_cost: 0
            }
        );
    }
}
