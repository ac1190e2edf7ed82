//! Deterministic battle rules shared by the runtime driver and offline tools.
//!
//! `battle-core` resolves combat actions (attacks, spells, sword arts,
//! thief and support commands) as pure functions of unit state and a
//! supplied [`RandomSource`], and advances the turn gauges. Every action is
//! exposed on [`Engine`] and returns an [`AttackResult`]; committing that
//! result to the units is left to the caller.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod formula;
pub mod rng;
pub mod unit;

pub use combat::{AttackResult, ReducibleStat, Restore, StatReduction, StolenItem};
pub use config::{BattleConfig, BattleSpeed};
pub use engine::{Engine, EngineError};
pub use error::{BattleError, ErrorSeverity};
pub use formula::{ArtEffect, Spell, SpellEffect, SwordArt};
pub use rng::{PcgRandom, RandomSource, SequenceRandom};
pub use unit::{
    BaseStats, Elements, Enemies, EnemyType, Equipment, Gear, Group, Party, Side, StatBonuses,
    StealSlot, StealSlots, Statuses, SupportAbilities, Unit, UnitBuilder, UnitId, Weapon,
    WeaponBuilder, WeaponType,
};
