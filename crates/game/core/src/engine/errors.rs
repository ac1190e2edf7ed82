//! Errors surfaced by the engine and the unit model.

use crate::error::{BattleError, ErrorSeverity};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("spell '{0}' does not exist")]
    UnknownSpell(String),

    #[error("sword art '{0}' does not exist")]
    UnknownSwordArt(String),

    #[error("spell '{0}' cannot be used as sword magic")]
    NotSwordMagic(String),

    #[error("sword art '{0}' cannot target multiple units")]
    NotMultiTarget(String),

    #[error("tick count must be at least 1 (got {0})")]
    InvalidTickCount(u32),

    #[error("status accuracy must be within 0..=100 (got {accuracy})")]
    StatusAccuracyOutOfRange { accuracy: i32 },

    #[error("group is full (capacity {capacity})")]
    GroupFull { capacity: usize },
}

impl BattleError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSpell(_)
            | Self::UnknownSwordArt(_)
            | Self::NotSwordMagic(_)
            | Self::NotMultiTarget(_) => ErrorSeverity::Fatal,
            Self::InvalidTickCount(_)
            | Self::StatusAccuracyOutOfRange { .. }
            | Self::GroupFull { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpell(_) => "UNKNOWN_SPELL",
            Self::UnknownSwordArt(_) => "UNKNOWN_SWORD_ART",
            Self::NotSwordMagic(_) => "NOT_SWORD_MAGIC",
            Self::NotMultiTarget(_) => "NOT_MULTI_TARGET",
            Self::InvalidTickCount(_) => "INVALID_TICK_COUNT",
            Self::StatusAccuracyOutOfRange { .. } => "STATUS_ACCURACY_OUT_OF_RANGE",
            Self::GroupFull { .. } => "GROUP_FULL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_fatal_and_arguments_are_validation() {
        assert!(EngineError::UnknownSpell("Ultima".into()).severity().is_fatal());
        assert_eq!(
            EngineError::InvalidTickCount(0).severity(),
            ErrorSeverity::Validation
        );
        assert_eq!(
            EngineError::GroupFull { capacity: 4 }.error_code(),
            "GROUP_FULL"
        );
    }
}
