//! Common error infrastructure for combo-core.
//!
//! The resolver itself never fails: every resolution outcome is reported
//! through [`AdvanceOutcome`](crate::AdvanceOutcome). The types here cover the
//! edges around it, such as a full input buffer or a graph diagnostic.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **no_std**: All types are `no_std` compatible and allocation-free

use crate::input::InputToken;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on a later step
/// - **Validation**: Malformed data that the resolver tolerates but authors should fix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry on a later simulation step.
    ///
    /// Examples: input buffer full
    Recoverable,

    /// Validation error - graph data is malformed.
    ///
    /// Examples: edge window past the edge table, target out of range
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all combo errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ComboError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Returned by [`InputRingBuffer::try_enqueue`](crate::InputRingBuffer::try_enqueue)
/// when the buffer is at capacity. Carries the rejected token back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("input buffer full: token {token} rejected (capacity {capacity})")]
pub struct BufferFull {
    pub token: InputToken,
    pub capacity: usize,
}

impl ComboError for BufferFull {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "buffer_full"
    }
}
