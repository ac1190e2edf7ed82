//! Formula catalogues for spells and sword arts.
//!
//! Both catalogues are closed enums looked up by display name. Each variant
//! owns its arithmetic and returns an effect value; the engine turns effects
//! into [`crate::AttackResult`]s and handles reflection, immunity and trance.

pub mod spells;
pub mod sword_arts;

pub use spells::{Spell, SpellData, SpellEffect, SpellKind};
pub use sword_arts::{ArtEffect, SwordArt};
