//! Unified error types surfaced by the runtime API.

use battle_core::{BattleError, EngineError, ErrorSeverity, UnitId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("unit {0} is not part of this battle")]
    UnknownUnit(UnitId),

    #[error("unit {0} cannot act: it is knocked out")]
    UnitDown(UnitId),

    #[error("the battle is already over ({0})")]
    BattleOver(crate::Outcome),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Engine(err) => err.severity(),
            RuntimeError::UnknownUnit(_) => ErrorSeverity::Fatal,
            RuntimeError::UnitDown(_) | RuntimeError::BattleOver(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Engine(err) => err.error_code(),
            RuntimeError::UnknownUnit(_) => "UNKNOWN_UNIT",
            RuntimeError::UnitDown(_) => "UNIT_DOWN",
            RuntimeError::BattleOver(_) => "BATTLE_OVER",
        }
    }
}
