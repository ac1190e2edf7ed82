#![allow(dead_code)]

use battle_core::{
    Enemies, Engine, EnemyType, Equipment, Gear, Party, SequenceRandom, StatBonuses, Unit,
    UnitBuilder, UnitId, Weapon, WeaponType,
};

/// Hp 100, Str/Lvl/Spr/Spd/Mag 10, a 10-Atk weapon and 9 Def armour.
pub fn fighter(id: u32, weapon_type: WeaponType) -> UnitBuilder {
    Unit::builder(UnitId(id), format!("unit-{id}"))
        .hp(100)
        .str(10)
        .lvl(10)
        .spr(10)
        .spd(10)
        .mag(10)
        .enemy_type(EnemyType::HUMAN)
        .equipment(
            Equipment::new()
                .with_weapon(weapon(weapon_type, 10))
                .with_armor(Gear::new("Leather Shirt", StatBonuses::NONE.def(9))),
        )
}

pub fn weapon(weapon_type: WeaponType, atk: i32) -> Weapon {
    Weapon::builder("Weapon", weapon_type)
        .atk(atk)
        .build()
        .unwrap()
}

pub fn ally(id: u32) -> Unit {
    fighter(id, WeaponType::Dagger).build()
}

pub fn enemy(id: u32) -> Unit {
    fighter(id, WeaponType::Dagger).ai().build()
}

/// Engine with no grouped units, so construction draws nothing.
pub fn bare_engine(stream: impl Into<Vec<i32>>) -> Engine<SequenceRandom> {
    Engine::new(Party::new(), Enemies::new(), SequenceRandom::new(stream))
}

pub fn battle(
    party: impl IntoIterator<Item = Unit>,
    enemies: impl IntoIterator<Item = Unit>,
    stream: impl Into<Vec<i32>>,
) -> Engine<SequenceRandom> {
    Engine::new(
        Party::from_units(party).unwrap(),
        Enemies::from_units(enemies).unwrap(),
        SequenceRandom::new(stream),
    )
}
