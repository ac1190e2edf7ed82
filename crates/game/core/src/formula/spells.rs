//! Spell catalogue.
//!
//! Each spell is a named rule: a power, an elemental affix, whether Reflect
//! bounces it, and the arithmetic that turns attacker and receiver stats
//! into an effect. Adding a spell means adding a variant and its row in
//! [`Spell::data`]; the resolver dispatches on [`SpellKind`] only.

use crate::combat::damage::{half, magic_bonus, non_zero, one_and_half};
use crate::engine::EngineError;
use crate::rng::RandomSource;
use crate::unit::{Elements, Statuses, Unit};

// ============================================================================
// Catalogue
// ============================================================================

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
pub enum Spell {
    Fire,
    Fira,
    Firaga,
    Blizzard,
    Blizzara,
    Blizzaga,
    Thunder,
    Thundara,
    Thundaga,
    Water,
    Flare,
    Doomsday,
    Holy,
    Bio,
    Drain,
    Osmose,
    Demi,
    Comet,
    Meteor,
    Cure,
    Cura,
    Curaga,
    Sleep,
    Slow,
    Stop,
    Death,
    Protect,
    Shell,
    Haste,
    Reflect,
}

/// Formula family a spell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellKind {
    /// `(Power - MagDef) × scaled magic bonus` as damage.
    Damage,
    /// Magic bonus times power, restored as HP. Hurts the undead.
    Healing,
    /// Damage that also restores the caster's HP.
    Drain,
    /// A quarter of the product drained as MP.
    Osmose,
    /// Chance to poison, no damage.
    Bio,
    /// Percentage of the receiver's max HP; never lands on bosses.
    Demi,
    /// Level-driven roll with its own miss check.
    Meteor,
    /// Coin-flip miss, then fixed power.
    Comet,
    /// Status infliction gated by a level-adjusted accuracy roll.
    Status { status: Statuses, accuracy: i32 },
    /// Beneficial status that always lands.
    Support { status: Statuses },
}

/// Static properties of a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpellData {
    pub power: i32,
    pub element: Elements,
    pub ignores_reflect: bool,
    pub sword_magic_power: Option<i32>,
    pub kind: SpellKind,
}

impl SpellData {
    const fn damage(power: i32, element: Elements, sword: i32) -> Self {
        Self {
            power,
            element,
            ignores_reflect: false,
            sword_magic_power: Some(sword),
            kind: SpellKind::Damage,
        }
    }

    const fn of(power: i32, kind: SpellKind) -> Self {
        Self {
            power,
            element: Elements::empty(),
            ignores_reflect: false,
            sword_magic_power: None,
            kind,
        }
    }

    const fn element(mut self, element: Elements) -> Self {
        self.element = element;
        self
    }

    const fn unreflectable(mut self) -> Self {
        self.ignores_reflect = true;
        self
    }

    const fn sword(mut self, power: i32) -> Self {
        self.sword_magic_power = Some(power);
        self
    }
}

impl Spell {
    /// Looks a spell up by its display name (`"Fire"`, `"Osmose"`).
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        name.parse()
            .map_err(|_| EngineError::UnknownSpell(name.to_string()))
    }

    pub const fn data(self) -> SpellData {
        use SpellKind as K;
        match self {
            Spell::Fire => SpellData::damage(14, Elements::FIRE, 23),
            Spell::Fira => SpellData::damage(29, Elements::FIRE, 46),
            Spell::Firaga => SpellData::damage(72, Elements::FIRE, 81),
            Spell::Blizzard => SpellData::damage(14, Elements::ICE, 23),
            Spell::Blizzara => SpellData::damage(29, Elements::ICE, 46),
            Spell::Blizzaga => SpellData::damage(72, Elements::ICE, 81),
            Spell::Thunder => SpellData::damage(14, Elements::THUNDER, 23),
            Spell::Thundara => SpellData::damage(29, Elements::THUNDER, 46),
            Spell::Thundaga => SpellData::damage(72, Elements::THUNDER, 81),
            Spell::Water => SpellData::of(64, K::Damage).element(Elements::WATER),
            Spell::Flare => SpellData::of(119, K::Damage).sword(94),
            Spell::Doomsday => SpellData::of(112, K::Damage)
                .element(Elements::SHADOW)
                .unreflectable()
                .sword(84),
            Spell::Holy => SpellData::of(113, K::Damage).element(Elements::HOLY),
            Spell::Bio => SpellData::of(42, K::Bio),
            Spell::Drain => SpellData::of(32, K::Drain),
            Spell::Osmose => SpellData::of(15, K::Osmose),
            Spell::Demi => SpellData::of(30, K::Demi),
            Spell::Comet => SpellData::of(55, K::Comet).unreflectable(),
            Spell::Meteor => SpellData::of(0, K::Meteor).unreflectable(),
            Spell::Cure => SpellData::of(10, K::Healing),
            Spell::Cura => SpellData::of(28, K::Healing),
            Spell::Curaga => SpellData::of(72, K::Healing),
            Spell::Sleep => SpellData::of(
                0,
                K::Status {
                    status: Statuses::SLEEP,
                    accuracy: 40,
                },
            ),
            Spell::Slow => SpellData::of(
                0,
                K::Status {
                    status: Statuses::SLOW,
                    accuracy: 40,
                },
            ),
            Spell::Stop => SpellData::of(
                0,
                K::Status {
                    status: Statuses::STOP,
                    accuracy: 20,
                },
            ),
            Spell::Death => SpellData::of(
                0,
                K::Status {
                    status: Statuses::DEATH,
                    accuracy: 20,
                },
            ),
            Spell::Protect => SpellData::of(0, K::Support { status: Statuses::PROTECT }),
            Spell::Shell => SpellData::of(0, K::Support { status: Statuses::SHELL }),
            Spell::Haste => SpellData::of(0, K::Support { status: Statuses::HASTE }),
            Spell::Reflect => SpellData::of(0, K::Support { status: Statuses::REFLECT }),
        }
    }

    pub const fn power(self) -> i32 {
        self.data().power
    }

    pub const fn element(self) -> Elements {
        self.data().element
    }

    pub const fn ignores_reflect(self) -> bool {
        self.data().ignores_reflect
    }

    pub const fn kind(self) -> SpellKind {
        self.data().kind
    }

    pub const fn is_healing(self) -> bool {
        matches!(self.data().kind, SpellKind::Healing)
    }

    pub const fn sword_magic_power(self) -> Option<i32> {
        self.data().sword_magic_power
    }

    /// Computes the spell's effect on `receiver`.
    ///
    /// `rnd` is the draw taken when the cast began. Meteor and Comet take
    /// further draws from `random`.
    pub fn resolve(
        self,
        attacker: &Unit,
        receiver: &Unit,
        multi_target: bool,
        rnd: i32,
        random: &impl RandomSource,
    ) -> SpellEffect {
        let data = self.data();
        match data.kind {
            SpellKind::Damage => SpellEffect::Damage {
                base: magic_base(data.power, receiver),
                bonus: self.scaled_bonus(attacker, receiver, multi_target, rnd),
            },
            SpellKind::Healing => SpellEffect::Heal {
                base: data.power,
                bonus: self.scaled_bonus(attacker, receiver, multi_target, rnd),
            },
            SpellKind::Drain => SpellEffect::Drain {
                base: magic_base(data.power, receiver),
                bonus: self.scaled_bonus(attacker, receiver, multi_target, rnd),
            },
            SpellKind::Osmose => {
                let base = magic_base(data.power, receiver);
                let bonus = self.scaled_bonus(attacker, receiver, multi_target, rnd);
                SpellEffect::Osmose {
                    amount: (base * bonus).div_euclid(4),
                }
            }
            SpellKind::Bio => {
                if 20 > rnd % 100 {
                    SpellEffect::Inflict(Statuses::POISON)
                } else {
                    SpellEffect::NoEffect
                }
            }
            SpellKind::Demi => {
                if receiver.is_boss || 60 > rnd % 100 {
                    SpellEffect::Miss
                } else {
                    SpellEffect::Fixed((30 * receiver.hp()).div_euclid(100))
                }
            }
            SpellKind::Meteor => {
                let lvl = attacker.lvl();
                let roll = random.next();
                if lvl / 2 + roll % non_zero(lvl) < receiver.lvl() {
                    return SpellEffect::Miss;
                }
                let ceiling = lvl + attacker.mag();
                SpellEffect::Damage {
                    base: random.next_range(1, ceiling),
                    bonus: random.next_range(1, ceiling),
                }
            }
            SpellKind::Comet => {
                if random.next() % 100 < 50 {
                    return SpellEffect::Miss;
                }
                SpellEffect::Damage {
                    base: data.power,
                    bonus: attacker.mag() + random.next_range(1, attacker.lvl() + 1),
                }
            }
            SpellKind::Status { status, accuracy } => {
                let chance = accuracy + attacker.mag() / 4 + attacker.lvl() - receiver.lvl();
                if rnd % 100 < chance {
                    SpellEffect::Inflict(status)
                } else {
                    SpellEffect::Miss
                }
            }
            SpellKind::Support { status } => SpellEffect::Inflict(status),
        }
    }

    /// Magic bonus halved for multi-target, Shell (not on healing) and
    /// attacker Mini, then elemental modifiers. Never below 1.
    fn scaled_bonus(self, attacker: &Unit, receiver: &Unit, multi_target: bool, rnd: i32) -> i32 {
        let element = self.element();
        let mut bonus = magic_bonus(attacker, rnd);

        if multi_target {
            bonus = half(bonus);
        }
        if !self.is_healing() && receiver.has_status(Statuses::SHELL) {
            bonus = half(bonus);
        }
        if attacker.has_status(Statuses::MINI) {
            bonus = half(bonus);
        }
        if receiver.is_weak_to(element) {
            bonus = one_and_half(bonus);
        }
        if attacker.equipment.has_elem_atk(element) {
            bonus = one_and_half(bonus);
        }
        if receiver.is_resistant_to(element) {
            bonus = half(bonus);
        }

        bonus.max(1)
    }
}

fn magic_base(power: i32, receiver: &Unit) -> i32 {
    (power - receiver.mag_def()).max(1)
}

// ============================================================================
// Effects
// ============================================================================

/// What a resolved spell does to its receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellEffect {
    Damage { base: i32, bonus: i32 },
    Heal { base: i32, bonus: i32 },
    Drain { base: i32, bonus: i32 },
    Osmose { amount: i32 },
    Fixed(i32),
    Inflict(Statuses),
    Miss,
    NoEffect,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::rng::SequenceRandom;
    use crate::unit::UnitId;

    fn caster() -> Unit {
        Unit::builder(UnitId(1), "Vivi").lvl(10).mag(10).hp(100).build()
    }

    #[test]
    fn every_spell_round_trips_through_its_name() {
        for spell in Spell::iter() {
            assert_eq!(Spell::from_name(spell.as_ref()).unwrap(), spell);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            Spell::from_name("Ultima"),
            Err(EngineError::UnknownSpell("Ultima".into()))
        );
        assert!(Spell::from_name("fire").is_err());
    }

    #[test]
    fn fire_against_neutral_target() {
        let random = SequenceRandom::constant(1);
        let effect = Spell::Fire.resolve(&caster(), &caster(), false, 1, &random);
        assert_eq!(effect, SpellEffect::Damage { base: 14, bonus: 11 });
        assert_eq!(random.position(), 0);
    }

    #[test]
    fn bonus_never_drops_below_one() {
        let mut attacker = caster();
        attacker.set_mag(0);
        attacker.set_lvl(0);
        attacker.add_status(Statuses::MINI);
        let mut target = caster();
        target.add_status(Statuses::SHELL);
        target.add_resistance(Elements::FIRE);

        let random = SequenceRandom::constant(1);
        let effect = Spell::Fire.resolve(&attacker, &target, true, 1, &random);
        assert_eq!(effect, SpellEffect::Damage { base: 14, bonus: 1 });
    }

    #[test]
    fn demi_rolls_forty_percent() {
        let random = SequenceRandom::constant(1);
        let target = caster();
        assert_eq!(
            Spell::Demi.resolve(&caster(), &target, false, 59, &random),
            SpellEffect::Miss
        );
        assert_eq!(
            Spell::Demi.resolve(&caster(), &target, true, 60, &random),
            SpellEffect::Fixed(30)
        );
    }

    #[test]
    fn comet_draws_its_own_rolls() {
        let random = SequenceRandom::new(vec![51, 4]);
        let effect = Spell::Comet.resolve(&caster(), &caster(), false, 1, &random);
        // bonus = Mag + next_range(1, Lvl + 1) = 10 + (1 + 4 % 10)
        assert_eq!(effect, SpellEffect::Damage { base: 55, bonus: 15 });
        assert_eq!(random.position(), 2);

        let random = SequenceRandom::constant(49);
        let effect = Spell::Comet.resolve(&caster(), &caster(), false, 1, &random);
        assert_eq!(effect, SpellEffect::Miss);
    }

    #[test]
    fn meteor_misses_higher_level_targets() {
        let random = SequenceRandom::constant(1);
        let mut target = caster();
        target.set_lvl(20);
        // 10 / 2 + 1 % 10 = 6 < 20
        assert_eq!(
            Spell::Meteor.resolve(&caster(), &target, false, 1, &random),
            SpellEffect::Miss
        );
    }

    #[test]
    fn status_spells_scale_with_level_gap() {
        let random = SequenceRandom::constant(1);
        // Sleep accuracy 40 + 10 / 4 + 10 - 10 = 42
        assert_eq!(
            Spell::Sleep.resolve(&caster(), &caster(), false, 41, &random),
            SpellEffect::Inflict(Statuses::SLEEP)
        );
        assert_eq!(
            Spell::Sleep.resolve(&caster(), &caster(), false, 42, &random),
            SpellEffect::Miss
        );
    }

    #[test]
    fn sword_magic_is_limited_to_elemental_strikes() {
        assert_eq!(Spell::Fire.sword_magic_power(), Some(23));
        assert_eq!(Spell::Doomsday.sword_magic_power(), Some(84));
        assert_eq!(Spell::Cure.sword_magic_power(), None);
    }
}
