//! Battle runtime: drives an [`Engine`](battle_core::Engine) turn by turn.
//!
//! The core resolves actions into [`AttackResult`](battle_core::AttackResult)
//! values without touching units. This crate owns the engine, advances the
//! turn gauges, commits every result onto the unit store and logs what
//! happened. It also provides the production random source.
//!
//! Modules are organized by responsibility:
//! - [`driver`] hosts the turn loop and the result commit step
//! - [`random`] wraps `rand` behind the core's random source trait
//! - [`error`] unifies failures surfaced to clients
pub mod driver;
pub mod error;
pub mod random;

pub use driver::{Driver, Outcome};
pub use error::{Result, RuntimeError};
pub use random::ThreadRandom;
