//! Data-driven battle content and loaders.
//!
//! This crate reads static battle content from RON/TOML data files:
//! - Equipment catalogues (data-driven via RON)
//! - Unit rosters for both sides (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Units are described by name-referencing specs and resolved against the
//! equipment catalogue into `battle-core` types at load time.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BattleRoster, ConfigLoader, ContentFactory, EquipmentCatalog, EquipmentLoader, GearSpec,
    LoadResult, RosterLoader, UnitSpec, WeaponSpec,
};
