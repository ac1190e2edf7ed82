//! Turn loop and result commit.
//!
//! [`Driver`] is the single writer of unit state during a battle. Actions
//! are resolved against the engine's own units through [`Driver::resolve`]
//! and the returned [`AttackResult`] is then committed with
//! [`Driver::apply`].

use std::fmt;

use battle_core::{
    AttackResult, BattleConfig, Enemies, Engine, EngineError, Party, RandomSource, ReducibleStat,
    Restore, StatReduction, Statuses, Unit, UnitId,
};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};

/// Upper bound on ticks spent waiting for someone to become ready.
const MAX_WAIT_TICKS: u32 = 10_000;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    Escaped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Victory => "victory",
            Outcome::Defeat => "defeat",
            Outcome::Escaped => "escaped",
        };
        write!(f, "{}", label)
    }
}

/// Owns the engine and commits action outcomes.
pub struct Driver<R: RandomSource> {
    engine: Engine<R>,
    outcome: Option<Outcome>,
    turns: u64,
}

impl<R: RandomSource> Driver<R> {
    pub fn new(party: Party, enemies: Enemies, random: R) -> Self {
        Self::with_config(party, enemies, BattleConfig::default(), random)
    }

    pub fn with_config(party: Party, enemies: Enemies, config: BattleConfig, random: R) -> Self {
        let engine = Engine::with_config(party, enemies, config, random);
        info!(
            target: "runtime::driver",
            party = engine.party().len(),
            enemies = engine.enemies().len(),
            speed = %engine.config().speed,
            "battle started"
        );
        Self {
            engine,
            outcome: None,
            turns: 0,
        }
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Turns ended so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.engine.unit(id).ok_or(RuntimeError::UnknownUnit(id))
    }

    fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.engine.unit_mut(id).ok_or(RuntimeError::UnknownUnit(id))
    }

    // ===== scheduling =====

    /// Living units whose gauge is full, party first.
    pub fn ready_units(&self) -> Vec<UnitId> {
        self.engine
            .ready_units()
            .filter(|u| u.is_alive())
            .map(|u| u.id)
            .collect()
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn tick_n(&mut self, ticks: u32) -> Result<()> {
        self.engine.tick_n(ticks)?;
        Ok(())
    }

    /// Ticks until some living unit is ready and returns the ready units.
    /// Empty when nobody gets ready within the wait bound.
    pub fn advance_to_next_turn(&mut self) -> Vec<UnitId> {
        for _ in 0..MAX_WAIT_TICKS {
            let ready = self.ready_units();
            if !ready.is_empty() {
                return ready;
            }
            self.engine.tick();
        }
        Vec::new()
    }

    /// Empties the actor's gauge.
    pub fn end_turn(&mut self, actor: UnitId) -> Result<()> {
        let unit = self.unit_mut(actor)?;
        unit.atb = 0;
        self.turns += 1;
        debug!(target: "runtime::driver", actor = %actor, turn = self.turns, "turn ended");
        Ok(())
    }

    // ===== resolution =====

    /// Runs an infallible action with the engine's current view of both
    /// units.
    pub fn resolve<F>(&self, actor: UnitId, target: UnitId, action: F) -> Result<AttackResult>
    where
        F: FnOnce(&Engine<R>, &Unit, &Unit) -> AttackResult,
    {
        self.try_resolve(actor, target, |engine, a, t| Ok(action(engine, a, t)))
    }

    /// Runs a catalogue action (magic, sword arts) that may fail lookup.
    pub fn try_resolve<F>(&self, actor: UnitId, target: UnitId, action: F) -> Result<AttackResult>
    where
        F: FnOnce(&Engine<R>, &Unit, &Unit) -> std::result::Result<AttackResult, EngineError>,
    {
        let attacker = self.acting_unit(actor)?;
        let target = self.unit(target)?;
        Ok(action(&self.engine, attacker, target)?)
    }

    /// Runs an action without a single target: group commands such as
    /// Escape, Flee, Focus or What's That.
    pub fn act<T, F>(&self, actor: UnitId, action: F) -> Result<T>
    where
        F: FnOnce(&Engine<R>, &Unit) -> T,
    {
        self.try_act(actor, |engine, a| Ok(action(engine, a)))
    }

    /// Fallible form of [`Driver::act`], for multi-target spells and arts.
    pub fn try_act<T, F>(&self, actor: UnitId, action: F) -> Result<T>
    where
        F: FnOnce(&Engine<R>, &Unit) -> std::result::Result<T, EngineError>,
    {
        let attacker = self.acting_unit(actor)?;
        Ok(action(&self.engine, attacker)?)
    }

    /// The actor, provided the battle is still running and it can act.
    fn acting_unit(&self, actor: UnitId) -> Result<&Unit> {
        if let Some(outcome) = self.outcome {
            return Err(RuntimeError::BattleOver(outcome));
        }
        let attacker = self.unit(actor)?;
        if !attacker.is_alive() {
            return Err(RuntimeError::UnitDown(actor));
        }
        Ok(attacker)
    }

    /// Commits `result` onto the units and updates the battle outcome.
    pub fn apply(&mut self, result: &AttackResult) -> Result<()> {
        self.commit(result)?;
        self.update_outcome(result);
        Ok(())
    }

    /// Commits the per-target results of a multi-target action in order.
    pub fn apply_all(&mut self, results: &[AttackResult]) -> Result<()> {
        for result in results {
            self.apply(result)?;
        }
        Ok(())
    }

    fn commit(&mut self, result: &AttackResult) -> Result<()> {
        debug!(target: "runtime::driver", %result, "committing outcome");

        if result.attacker_hp_cost > 0 {
            let attacker = self.unit_mut(result.attacker)?;
            attacker.current_hp = (attacker.current_hp - result.attacker_hp_cost).max(0);
        }

        if let Some(receiver) = result.damage_receiver() {
            let unit = self.unit_mut(receiver)?;
            if result.damage > 0 {
                if result.is_absorbed {
                    restore_hp(unit, result.damage);
                } else {
                    unit.current_hp = (unit.current_hp - result.damage).max(0);
                }
            }
            unit.current_mp = (unit.current_mp - result.mp_damage).max(0);
            unit.add_status(result.applicable_statuses);
            if let Some(reduction) = result.stat_reduction {
                reduce_stat(unit, reduction);
            }
            if result.trance_increase > 0 {
                gain_trance(unit, result.trance_increase);
            }
        }

        if let Some(Restore { unit, amount }) = result.hp_restored {
            restore_hp(self.unit_mut(unit)?, amount);
        }
        if let Some(Restore { unit, amount }) = result.mp_restored {
            let unit = self.unit_mut(unit)?;
            unit.current_mp = (unit.current_mp + amount).min(unit.mp());
        }

        for &(status, id) in &result.inflict_status {
            let unit = self.unit_mut(id)?;
            unit.add_status(status);
            if status.contains(Statuses::DEATH) {
                unit.current_hp = 0;
            }
        }

        self.commit_loot(result)?;

        let attacker = self.unit_mut(result.attacker)?;
        if result.mag_increase > 0 {
            let mag = attacker.base().mag + result.mag_increase;
            attacker.set_mag(mag);
        }
        if result.trance_decrease > 0 {
            attacker.trance = (attacker.trance - result.trance_decrease).max(0);
            if attacker.trance == 0 && attacker.has_status(Statuses::TRANCE) {
                attacker.remove_status(Statuses::TRANCE);
                debug!(target: "runtime::driver", unit = %attacker.id, "trance ended");
            }
        }

        for sub in &result.sub_results {
            self.commit(sub)?;
        }
        Ok(())
    }

    /// Stolen items and gil, and gil dropped when fleeing.
    fn commit_loot(&mut self, result: &AttackResult) -> Result<()> {
        if let Some(target) = result.target {
            if let Some(stolen) = &result.stolen_item {
                self.unit_mut(target)?.steal_slots.take(stolen.slot);
                self.unit_mut(result.attacker)?.successful_steals += 1;
            }
            if result.stolen_gil > 0 {
                let victim = self.unit_mut(target)?;
                victim.gil = (victim.gil - result.stolen_gil).max(0);
                self.unit_mut(result.attacker)?.gil += result.stolen_gil;
            }
        }

        let mut owed = result.gil_lost;
        for member in self.engine.party_mut().members_mut() {
            if owed <= 0 {
                break;
            }
            let paid = owed.min(member.gil);
            member.gil -= paid;
            owed -= paid;
        }
        Ok(())
    }

    fn update_outcome(&mut self, result: &AttackResult) {
        if self.outcome.is_some() {
            return;
        }
        let outcome = if result.is_escaped {
            Some(Outcome::Escaped)
        } else if !self.engine.enemies().is_empty() && self.engine.enemies().alive_count() == 0 {
            Some(Outcome::Victory)
        } else if !self.engine.party().is_empty() && self.engine.party().alive_count() == 0 {
            Some(Outcome::Defeat)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            info!(target: "runtime::driver", %outcome, turns = self.turns, "battle ended");
            self.outcome = Some(outcome);
        }
    }
}

fn restore_hp(unit: &mut Unit, amount: i32) {
    unit.current_hp = (unit.current_hp + amount).min(unit.hp());
}

/// Reductions are taken off the intrinsic value; equipment is untouched.
fn reduce_stat(unit: &mut Unit, reduction: StatReduction) {
    let base = unit.base().clone();
    match reduction.stat {
        ReducibleStat::Str => unit.set_str(base.str - reduction.amount),
        ReducibleStat::Def => unit.set_def(base.def - reduction.amount),
        ReducibleStat::MagDef => unit.set_mag_def(base.mag_def - reduction.amount),
        ReducibleStat::Mag => unit.set_mag(base.mag - reduction.amount),
    }
}

fn gain_trance(unit: &mut Unit, amount: i32) {
    unit.trance = (unit.trance + amount).clamp(0, BattleConfig::TRANCE_BAR_LENGTH);
    if unit.is_trance_full() && !unit.has_status(Statuses::TRANCE) {
        unit.add_status(Statuses::TRANCE);
        debug!(target: "runtime::driver", unit = %unit.id, "trance started");
    }
}
