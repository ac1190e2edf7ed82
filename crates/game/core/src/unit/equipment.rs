//! Equipment slots and item definitions.

use super::flags::{Elements, Statuses, WeaponType, matches_non_empty};
use super::stats::StatBonuses;
use crate::engine::EngineError;

/// A non-weapon item (head, wrist, armor, accessory).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gear {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: StatBonuses,
}

impl Gear {
    pub fn new(name: impl Into<String>, bonuses: StatBonuses) -> Self {
        Self {
            name: name.into(),
            bonuses,
        }
    }
}

/// A weapon. Carries the formula-selecting type tag and optional affixes.
///
/// Build through [`Weapon::builder`], which validates the status accuracy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weapon {
    name: String,
    weapon_type: WeaponType,
    bonuses: StatBonuses,
    element: Elements,
    elem_atk: Elements,
    status_affix: Statuses,
    status_accuracy: i32,
}

impl Weapon {
    pub fn builder(name: impl Into<String>, weapon_type: WeaponType) -> WeaponBuilder {
        WeaponBuilder::new(name, weapon_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn bonuses(&self) -> StatBonuses {
        self.bonuses
    }

    /// Elemental affix applied to physical attacks. Empty when none.
    pub fn element(&self) -> Elements {
        self.element
    }

    pub fn elem_atk(&self) -> Elements {
        self.elem_atk
    }

    pub fn status_affix(&self) -> Statuses {
        self.status_affix
    }

    /// Chance in percent (0..=100) to apply [`Self::status_affix`] on hit.
    pub fn status_accuracy(&self) -> i32 {
        self.status_accuracy
    }

    pub fn can_inflict_status(&self) -> bool {
        !self.status_affix.is_empty()
    }
}

/// Builder for [`Weapon`].
#[derive(Clone, Debug)]
pub struct WeaponBuilder {
    weapon: Weapon,
}

impl WeaponBuilder {
    fn new(name: impl Into<String>, weapon_type: WeaponType) -> Self {
        Self {
            weapon: Weapon {
                name: name.into(),
                weapon_type,
                ..Weapon::default()
            },
        }
    }

    pub fn atk(mut self, atk: i32) -> Self {
        self.weapon.bonuses.atk = atk;
        self
    }

    pub fn bonuses(mut self, bonuses: StatBonuses) -> Self {
        self.weapon.bonuses = bonuses;
        self
    }

    pub fn element(mut self, element: Elements) -> Self {
        self.weapon.element = element;
        self
    }

    pub fn elem_atk(mut self, elem_atk: Elements) -> Self {
        self.weapon.elem_atk = elem_atk;
        self
    }

    pub fn status(mut self, affix: Statuses, accuracy: i32) -> Self {
        self.weapon.status_affix = affix;
        self.weapon.status_accuracy = accuracy;
        self
    }

    pub fn build(self) -> Result<Weapon, EngineError> {
        let accuracy = self.weapon.status_accuracy;
        if !(0..=100).contains(&accuracy) {
            return Err(EngineError::StatusAccuracyOutOfRange { accuracy });
        }
        Ok(self.weapon)
    }
}

/// The five equipment slots. Each is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equipment {
    pub weapon: Option<Weapon>,
    pub head: Option<Gear>,
    pub wrist: Option<Gear>,
    pub armor: Option<Gear>,
    pub accessory: Option<Gear>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_head(mut self, gear: Gear) -> Self {
        self.head = Some(gear);
        self
    }

    pub fn with_wrist(mut self, gear: Gear) -> Self {
        self.wrist = Some(gear);
        self
    }

    pub fn with_armor(mut self, gear: Gear) -> Self {
        self.armor = Some(gear);
        self
    }

    pub fn with_accessory(mut self, gear: Gear) -> Self {
        self.accessory = Some(gear);
        self
    }

    /// Sum of bonuses across every occupied slot.
    pub fn total_bonuses(&self) -> StatBonuses {
        let weapon = self.weapon.as_ref().map(Weapon::bonuses);
        let gear = [&self.head, &self.wrist, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|slot| slot.as_ref().map(|g| g.bonuses));

        weapon.into_iter().chain(gear).sum()
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon
            .as_ref()
            .map_or(WeaponType::None, Weapon::weapon_type)
    }

    pub fn weapon_name(&self) -> &str {
        self.weapon.as_ref().map_or("", Weapon::name)
    }

    pub fn weapon_element(&self) -> Elements {
        self.weapon
            .as_ref()
            .map_or(Elements::empty(), Weapon::element)
    }

    /// Whether the weapon amplifies `element` (Elem-Atk).
    pub fn has_elem_atk(&self, element: Elements) -> bool {
        self.weapon
            .as_ref()
            .is_some_and(|w| matches_non_empty(w.elem_atk, element))
    }
}
