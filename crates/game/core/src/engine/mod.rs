//! Action resolution and turn-gauge scheduling.
//!
//! The [`Engine`] owns both unit groups, the battle configuration and the
//! random source. Action methods take `&self` plus read-only unit references
//! and return [`AttackResult`] values; they never mutate a unit. Committing
//! a result is the caller's job, through [`Engine::unit_mut`] or the group
//! accessors. Only the gauge scheduler ([`Engine::tick`]) writes unit state.
//!
//! Draw order is part of the rules: each action documents which values it
//! takes from the random source and reuses within the same resolution.

mod attack;
mod errors;
mod escape;
mod magic;
mod support;
mod sword;
mod thief;
mod turns;

pub use errors::EngineError;

use crate::combat::AttackResult;
use crate::combat::damage::{non_zero, trance_decrease};
use crate::config::BattleConfig;
use crate::rng::RandomSource;
use crate::unit::{Enemies, Party, Side, Statuses, Unit, UnitId};

/// Battle rules engine.
pub struct Engine<R: RandomSource> {
    party: Party,
    enemies: Enemies,
    config: BattleConfig,
    random: R,
}

impl<R: RandomSource> Engine<R> {
    /// Creates an engine with the default configuration and seeds every
    /// unit's turn gauge (one draw per unit, party first).
    pub fn new(party: Party, enemies: Enemies, random: R) -> Self {
        Self::with_config(party, enemies, BattleConfig::default(), random)
    }

    pub fn with_config(party: Party, enemies: Enemies, config: BattleConfig, random: R) -> Self {
        let mut engine = Self {
            party,
            enemies,
            config,
            random,
        };
        engine.initialize_atb();
        engine
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut Party {
        &mut self.party
    }

    pub fn enemies(&self) -> &Enemies {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Enemies {
        &mut self.enemies
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BattleConfig {
        &mut self.config
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// Every unit, party first, in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.party.members().iter().chain(self.enemies.members())
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.party.get(id).or_else(|| self.enemies.get(id))
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        match self.party.get_mut(id) {
            Some(unit) => Some(unit),
            None => self.enemies.get_mut(id),
        }
    }

    pub fn members(&self, side: Side) -> &[Unit] {
        match side {
            Side::Party => self.party.members(),
            Side::Enemies => self.enemies.members(),
        }
    }

    /// Picks an alive member of `side` as `alive[rnd % alive_count]`.
    ///
    /// Returns the unit and the alive count. A sole survivor is picked
    /// without consulting `rnd`.
    fn pick_alive(&self, side: Side, rnd: i32) -> Option<(&Unit, usize)> {
        let members = self.members(side);
        let count = members.iter().filter(|u| u.is_alive()).count();
        let index = match count {
            0 => return None,
            1 => 0,
            n => rnd.rem_euclid(n as i32) as usize,
        };
        members
            .iter()
            .filter(|u| u.is_alive())
            .nth(index)
            .map(|unit| (unit, count))
    }

    /// Group a reflected effect bounces into, keyed on who cast it and who
    /// reflected it.
    fn reflect_side(attacker: &Unit, target: &Unit) -> Side {
        match (attacker.is_ai, target.is_ai) {
            (false, false) => Side::Enemies,
            (false, true) => Side::Party,
            (true, true) => Side::Party,
            (true, false) => Side::Enemies,
        }
    }

    /// Chooses the unit a reflected effect lands on.
    ///
    /// Returns the new receiver and whether it was the only candidate, in
    /// which case the effect no longer counts as multi-target.
    fn reflect_target(&self, attacker: &Unit, target: &Unit, rnd: i32) -> Option<(&Unit, bool)> {
        self.pick_alive(Self::reflect_side(attacker, target), rnd)
            .map(|(unit, count)| (unit, count == 1))
    }

    /// Trance bookkeeping shared by every damaging action.
    ///
    /// An attacker in Trance loses gauge. A player-controlled unit that took
    /// damage gains gauge: its full Spr under High Tide, otherwise a fresh
    /// draw modulo Spr.
    fn apply_trance(&self, result: &mut AttackResult, attacker: &Unit, damaged: Option<&Unit>) {
        if attacker.has_status(Statuses::TRANCE) {
            result.trance_decrease = trance_decrease(attacker);
        }

        if let Some(unit) = damaged.filter(|u| !u.is_ai) {
            result.trance_increase = if unit.has_status(Statuses::HIGH_TIDE) {
                unit.spr()
            } else {
                self.random.next() % non_zero(unit.spr())
            };
        }
    }
}

/// Whether `target` bounces an effect back. Reflect2x cannot be bypassed.
fn reflects(ignores_reflect: bool, target: &Unit) -> bool {
    (!ignores_reflect && target.has_status(Statuses::REFLECT))
        || target.has_status(Statuses::REFLECT_2X)
}
