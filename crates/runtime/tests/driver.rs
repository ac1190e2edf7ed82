use battle_core::{
    BattleConfig, Enemies, EnemyType, Equipment, Gear, Party, SequenceRandom, StatBonuses,
    StealSlot, StealSlots, Statuses, SupportAbilities, Unit, UnitBuilder, UnitId, Weapon,
    WeaponType,
};
use battle_runtime::{Driver, Outcome, RuntimeError};

const HERO: UnitId = UnitId(1);
const GOBLIN: UnitId = UnitId(2);

fn fighter(id: u32) -> UnitBuilder {
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
                .with_weapon(
                    Weapon::builder("Dagger", WeaponType::Dagger)
                        .atk(10)
                        .build()
                        .unwrap(),
                )
                .with_armor(Gear::new("Leather Shirt", StatBonuses::NONE.def(9))),
        )
}

fn battle(party: Vec<Unit>, enemies: Vec<Unit>, stream: &[i32]) -> Driver<SequenceRandom> {
    Driver::new(
        Party::from_units(party).unwrap(),
        Enemies::from_units(enemies).unwrap(),
        SequenceRandom::new(stream.to_vec()),
    )
}

fn duel(stream: &[i32]) -> Driver<SequenceRandom> {
    battle(vec![fighter(1).build()], vec![fighter(2).ai().build()], stream)
}

#[test]
fn attack_damage_is_committed_to_the_target() {
    let mut driver = duel(&[1]);
    let result = driver.resolve(HERO, GOBLIN, |e, a, t| e.attack(a, t)).unwrap();
    assert_eq!(result.damage, 11);

    driver.apply(&result).unwrap();
    assert_eq!(driver.unit(GOBLIN).unwrap().current_hp, 89);
    assert_eq!(driver.unit(GOBLIN).unwrap().trance, 0);
    assert_eq!(driver.outcome(), None);
}

#[test]
fn party_members_gain_trance_when_hit() {
    let mut driver = duel(&[1]);
    let result = driver.resolve(GOBLIN, HERO, |e, a, t| e.attack(a, t)).unwrap();
    driver.apply(&result).unwrap();

    let hero = driver.unit(HERO).unwrap();
    assert_eq!(hero.current_hp, 89);
    assert_eq!(hero.trance, 1);
    assert!(!hero.has_status(Statuses::TRANCE));
}

#[test]
fn a_full_gauge_enters_trance() {
    let mut hero = fighter(1).build();
    hero.trance = 254;
    let mut driver = battle(vec![hero], vec![fighter(2).ai().build()], &[1]);

    let result = driver.resolve(GOBLIN, HERO, |e, a, t| e.attack(a, t)).unwrap();
    driver.apply(&result).unwrap();

    let hero = driver.unit(HERO).unwrap();
    assert_eq!(hero.trance, 255);
    assert!(hero.has_status(Statuses::TRANCE));
}

#[test]
fn trance_ends_when_the_gauge_drains() {
    let mut hero = fighter(1).status(Statuses::TRANCE).build();
    hero.trance = 30;
    let mut driver = battle(vec![hero], vec![fighter(2).ai().build()], &[1]);

    let result = driver.resolve(HERO, GOBLIN, |e, a, t| e.attack(a, t)).unwrap();
    assert_eq!(result.trance_decrease, 34);
    driver.apply(&result).unwrap();

    let hero = driver.unit(HERO).unwrap();
    assert_eq!(hero.trance, 0);
    assert!(!hero.has_status(Statuses::TRANCE));
}

#[test]
fn drain_kills_and_heals_then_wins() {
    let hero = fighter(1).current_hp(40).build();
    let mut driver = battle(vec![hero], vec![fighter(2).ai().build()], &[1]);

    let result = driver
        .try_resolve(HERO, GOBLIN, |e, a, t| e.magic(a, t, "Drain"))
        .unwrap();
    driver.apply(&result).unwrap();

    assert_eq!(driver.unit(GOBLIN).unwrap().current_hp, 0);
    assert_eq!(driver.unit(HERO).unwrap().current_hp, 100);
    assert_eq!(driver.outcome(), Some(Outcome::Victory));

    let err = driver.resolve(HERO, GOBLIN, |e, a, t| e.attack(a, t)).unwrap_err();
    assert!(matches!(err, RuntimeError::BattleOver(Outcome::Victory)));
}

#[test]
fn group_commands_are_refused_once_the_battle_is_over() {
    let mut driver = duel(&[1]);
    let result = driver
        .try_resolve(HERO, GOBLIN, |e, a, t| e.sword_art(a, t, "Iai Strike"))
        .unwrap();
    driver.apply(&result).unwrap();
    assert_eq!(driver.outcome(), Some(Outcome::Victory));

    let err = driver.act(HERO, |e, a| e.flee(a)).unwrap_err();
    assert!(matches!(err, RuntimeError::BattleOver(Outcome::Victory)));
    let err = driver
        .try_act(HERO, |e, a| e.magic_multi(a, e.enemies().members(), "Fire"))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::BattleOver(Outcome::Victory)));
}

#[test]
fn knocked_out_units_cannot_use_group_commands() {
    let downed = fighter(1).current_hp(0).build();
    let driver = battle(vec![downed], vec![fighter(2).ai().build()], &[1]);

    let err = driver.act(HERO, |e, a| e.escape(a)).unwrap_err();
    assert!(matches!(err, RuntimeError::UnitDown(HERO)));
}

#[test]
fn multi_target_spells_hit_every_enemy() {
    let mut driver = battle(
        vec![fighter(1).build()],
        vec![fighter(2).ai().build(), fighter(3).ai().build()],
        &[1],
    );

    let results = driver
        .try_act(HERO, |e, a| e.magic_multi(a, e.enemies().members(), "Fire"))
        .unwrap();
    assert_eq!(results.len(), 2);
    driver.apply_all(&results).unwrap();

    assert_eq!(driver.unit(GOBLIN).unwrap().current_hp, 30);
    assert_eq!(driver.unit(UnitId(3)).unwrap().current_hp, 30);
    assert_eq!(driver.outcome(), None);
}

#[test]
fn negative_damage_leaves_hp_untouched() {
    let hero = fighter(1)
        .weapon(
            Weapon::builder("Ultima Weapon", WeaponType::Sword)
                .atk(61)
                .build()
                .unwrap(),
        )
        .build();
    let mut driver = Driver::with_config(
        Party::from_units([hero]).unwrap(),
        Enemies::from_units([fighter(2).ai().build()]).unwrap(),
        BattleConfig::new().with_ipsens_castle(true),
        SequenceRandom::constant(1),
    );

    let result = driver.resolve(HERO, GOBLIN, |e, a, t| e.attack(a, t)).unwrap();
    assert!(result.damage < 0);
    driver.apply(&result).unwrap();
    assert_eq!(driver.unit(GOBLIN).unwrap().current_hp, 100);
}

#[test]
fn unknown_spells_surface_as_engine_errors() {
    let driver = duel(&[1]);
    let err = driver
        .try_resolve(HERO, GOBLIN, |e, a, t| e.magic(a, t, "Ultima Weapon"))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Engine(_)));
}

#[test]
fn actors_must_exist_and_be_standing() {
    let downed = fighter(1).current_hp(0).build();
    let driver = battle(vec![downed], vec![fighter(2).ai().build()], &[1]);

    let err = driver.resolve(UnitId(9), GOBLIN, |e, a, t| e.attack(a, t)).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownUnit(UnitId(9))));

    let err = driver.resolve(HERO, GOBLIN, |e, a, t| e.attack(a, t)).unwrap_err();
    assert!(matches!(err, RuntimeError::UnitDown(HERO)));
}

#[test]
fn stolen_items_leave_the_target() {
    let thief = fighter(1).ability(SupportAbilities::BANDIT).build();
    let goblin = fighter(2)
        .ai()
        .steal_slots(StealSlots::new().with(StealSlot::Common, "Potion"))
        .build();
    let mut driver = battle(vec![thief], vec![goblin], &[255]);

    let result = driver.resolve(HERO, GOBLIN, |e, a, t| e.steal(a, t)).unwrap();
    assert_eq!(result.stolen_item.as_ref().map(|s| s.item.as_str()), Some("Potion"));
    driver.apply(&result).unwrap();

    assert!(driver.unit(GOBLIN).unwrap().steal_slots.is_empty(StealSlot::Common));
    assert_eq!(driver.unit(HERO).unwrap().successful_steals, 1);
}

#[test]
fn armour_break_lowers_defence_for_later_hits() {
    let mut driver = duel(&[2]);
    let result = driver
        .try_resolve(HERO, GOBLIN, |e, a, t| e.sword_art(a, t, "Armour Break"))
        .unwrap();
    driver.apply(&result).unwrap();

    assert_eq!(driver.unit(GOBLIN).unwrap().def(), 4);
}

#[test]
fn iai_strike_knocks_out() {
    let mut driver = duel(&[1]);
    let result = driver
        .try_resolve(HERO, GOBLIN, |e, a, t| e.sword_art(a, t, "Iai Strike"))
        .unwrap();
    driver.apply(&result).unwrap();

    let goblin = driver.unit(GOBLIN).unwrap();
    assert!(goblin.has_status(Statuses::DEATH));
    assert_eq!(goblin.current_hp, 0);
    assert_eq!(driver.outcome(), Some(Outcome::Victory));
}

#[test]
fn sacrifice_revives_the_rest_of_the_party() {
    let fallen = fighter(3).current_hp(0).build();
    let mut driver = battle(
        vec![fighter(1).build(), fallen],
        vec![fighter(2).ai().build()],
        &[1],
    );

    let result = driver.act(HERO, |e, a| e.sacrifice(a)).unwrap();
    driver.apply(&result).unwrap();

    assert_eq!(driver.unit(HERO).unwrap().current_hp, 0);
    assert_eq!(driver.unit(UnitId(3)).unwrap().current_hp, 100);
    assert_eq!(driver.outcome(), None);
}

#[test]
fn fleeing_drops_gil_and_ends_the_battle() {
    let hero = fighter(1).gil(50).build();
    let goblin = fighter(2).ai().gil(100).build();
    let mut driver = battle(vec![hero], vec![goblin], &[1]);

    let result = driver.act(HERO, |e, a| e.flee(a)).unwrap();
    driver.apply(&result).unwrap();

    assert_eq!(driver.unit(HERO).unwrap().gil, 40);
    assert_eq!(driver.outcome(), Some(Outcome::Escaped));

    let err = driver.act(HERO, |e, a| e.flee(a)).unwrap_err();
    assert!(matches!(err, RuntimeError::BattleOver(Outcome::Escaped)));
}

#[test]
fn turns_reset_the_gauge() {
    let mut driver = duel(&[1]);
    let ready = driver.advance_to_next_turn();
    assert!(!ready.is_empty());

    let actor = ready[0];
    driver.end_turn(actor).unwrap();
    assert_eq!(driver.unit(actor).unwrap().atb, 0);
    assert_eq!(driver.turns(), 1);
    assert!(!driver.ready_units().contains(&actor));
}

#[test]
fn zero_ticks_is_rejected() {
    let mut driver = duel(&[1]);
    assert!(matches!(driver.tick_n(0), Err(RuntimeError::Engine(_))));
}

#[test]
fn defeat_when_the_party_falls() {
    let hero = fighter(1).current_hp(5).build();
    let mut driver = battle(vec![hero], vec![fighter(2).ai().build()], &[1]);

    let result = driver.resolve(GOBLIN, HERO, |e, a, t| e.attack(a, t)).unwrap();
    driver.apply(&result).unwrap();
    assert_eq!(driver.outcome(), Some(Outcome::Defeat));
}
