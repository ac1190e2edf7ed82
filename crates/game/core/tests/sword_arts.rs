mod common;

use battle_core::{
    Elements, EngineError, ReducibleStat, StatReduction, Statuses, WeaponType,
};
use common::{ally, bare_engine, battle, enemy, fighter};

#[test]
fn darkside_costs_hp_and_ignores_reflect() {
    let mut target = ally(2);
    target.add_status(Statuses::REFLECT);
    let engine = bare_engine([1]);
    let result = engine.sword_art(&ally(1), &target, "Darkside").unwrap();

    assert!(!result.is_reflected);
    assert_eq!(result.damage, 11);
    assert_eq!(result.attacker_hp_cost, 12);
    assert_eq!(result.trance_increase, 1);
}

#[test]
fn shadow_immunity_stops_darkside() {
    let mut target = ally(2);
    target.add_immunity(Elements::SHADOW);
    let engine = bare_engine([1]);
    let result = engine.sword_art(&ally(1), &target, "Darkside").unwrap();

    assert_eq!(result.damage, 0);
    assert_eq!(result.attacker_hp_cost, 0);
    assert_eq!(engine.random().position(), 0);
}

#[test]
fn thunder_slash_bounces_off_reflect() {
    let a = ally(1);
    let b = fighter(2, WeaponType::Claw).ai().status(Statuses::REFLECT).build();
    let engine = battle([a.clone()], [b.clone()], [1]);

    let result = engine.sword_art(&a, &b, "Thunder Slash").unwrap();
    assert!(result.is_reflected);
    assert_eq!(result.reflected_to, Some(a.id));
    assert_eq!(result.damage, 19);
}

#[test]
fn only_fan_out_arts_accept_several_targets() {
    let engine = bare_engine([1]);
    let (b, c) = (enemy(2), enemy(3));

    assert_eq!(
        engine.sword_art_multi(&ally(1), [&b, &c], "Darkside"),
        Err(EngineError::NotMultiTarget("Darkside".into()))
    );

    let results = engine.sword_art_multi(&ally(1), [&b, &c], "Climhazzard").unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.damage == 220));
}

#[test]
fn unknown_art_is_a_lookup_error() {
    let engine = bare_engine([1]);
    assert_eq!(
        engine.sword_art(&ally(1), &enemy(2), "Lancer"),
        Err(EngineError::UnknownSwordArt("Lancer".into()))
    );
}

#[test]
fn breaks_lower_base_stats_half_the_time() {
    let engine = bare_engine([2]);
    let result = engine.sword_art(&ally(1), &enemy(2), "Armour Break").unwrap();
    assert_eq!(
        result.stat_reduction,
        Some(StatReduction {
            stat: ReducibleStat::Def,
            amount: 5
        })
    );

    let engine = bare_engine([1]);
    let result = engine.sword_art(&ally(1), &enemy(2), "Armour Break").unwrap();
    assert!(result.is_miss);
    assert_eq!(result.stat_reduction, None);
}

#[test]
fn iai_strike_respects_death_immunity() {
    let engine = bare_engine([1]);
    let target = enemy(2);
    let result = engine.sword_art(&ally(1), &target, "Iai Strike").unwrap();
    assert_eq!(result.inflict_status, vec![(Statuses::DEATH, target.id)]);

    let mut immune = enemy(2);
    immune.add_status_immune(Statuses::DEATH);
    assert!(engine.sword_art(&ally(1), &immune, "Iai Strike").unwrap().is_status_immune);
}

#[test]
fn charge_sends_near_death_allies_in() {
    let a = fighter(1, WeaponType::KnightSword).current_hp(10).build();
    let d = ally(4);
    let b = enemy(2);
    let engine = battle([a.clone(), d], [b.clone()], [1]);

    let result = engine.sword_art(&a, &b, "Charge!").unwrap();
    assert_eq!(result.target, None);
    assert_eq!(result.trance_increase, 0);
    assert_eq!(result.sub_results.len(), 1);

    let strike = &result.sub_results[0];
    assert_eq!(strike.attacker, a.id);
    assert_eq!(strike.target, Some(b.id));
    assert_eq!(strike.damage, 11);
}
