//! Common error infrastructure for battle-core.
//!
//! Concrete errors live next to the code that raises them
//! ([`crate::engine::EngineError`]); this module holds the shared
//! classification used by the runtime to decide how to react.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input rejected at the boundary, nothing changed
/// - **Fatal**: a content or data bug (unknown catalogue name); no fallback exists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: zero tick count, status accuracy above 100, full party
    Validation,

    /// Lookup into a closed catalogue failed.
    ///
    /// Examples: unknown spell name, sword art used as multi-target
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
