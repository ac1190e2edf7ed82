//! Combat resolution building blocks.
//!
//! Pure helpers used by the engine's action resolvers. Nothing here draws
//! from the random source; callers pass the draw they are evaluating.

pub mod damage;
pub mod hit;
pub mod result;

pub use result::{AttackResult, ReducibleStat, Restore, StatReduction, StolenItem};
