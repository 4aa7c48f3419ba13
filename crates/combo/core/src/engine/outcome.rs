//! Outcome types for a single resolution step.

use crate::config::ComboConfig;
use crate::graph::ActionId;
use crate::input::InputToken;

/// Why a consumed input sent the actor back to the idle node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetReason {
    /// No outgoing edge of the working node is triggered by the token.
    NoMatch,
    /// The first matching edge points outside the node table.
    CorruptTarget { target: i32 },
}

/// Result of one call to [`try_advance_state`](super::try_advance_state).
///
/// The first three variants leave state and buffer untouched. The last two
/// consume exactly one buffered token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdvanceOutcome {
    /// The graph has no nodes.
    NoGraph,
    /// The previous action has not finished yet.
    Busy,
    /// No input is buffered.
    BufferEmpty,
    /// A transition committed; the actor is now busy on `to`.
    Committed {
        token: InputToken,
        from: usize,
        to: usize,
        action: ActionId,
        /// Raw cursor value that was healed to idle before matching, if any.
        healed_from: Option<i32>,
    },
    /// The token was consumed without a valid transition; the actor is idle.
    SoftReset {
        token: InputToken,
        from: usize,
        reason: ResetReason,
        /// The idle node's own action.
        action: ActionId,
        healed_from: Option<i32>,
    },
}

/// Flat classification of an [`AdvanceOutcome`], for logs and counters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OutcomeKind {
    NoGraph,
    Busy,
    BufferEmpty,
    Committed,
    NoMatch,
    CorruptTarget,
}

impl AdvanceOutcome {
    /// `true` only when a transition committed.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// Action to report: the entered node's on commit, idle's on soft reset,
    /// [`ActionId::NONE`] when no input was examined.
    pub const fn action_id(&self) -> ActionId {
        match self {
            Self::NoGraph | Self::Busy | Self::BufferEmpty => ComboConfig::NO_ACTION,
            Self::Committed { action, .. } | Self::SoftReset { action, .. } => *action,
        }
    }

    /// Returns `true` if a buffered token was consumed.
    #[inline]
    pub const fn consumed_input(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::SoftReset { .. })
    }

    /// Token consumed by this step, if any.
    pub const fn token(&self) -> Option<InputToken> {
        match self {
            Self::Committed { token, .. } | Self::SoftReset { token, .. } => Some(*token),
            _ => None,
        }
    }

    /// Raw cursor value healed before matching, if the cursor was corrupt.
    pub const fn healed_from(&self) -> Option<i32> {
        match self {
            Self::Committed { healed_from, .. } | Self::SoftReset { healed_from, .. } => {
                *healed_from
            }
            _ => None,
        }
    }

    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::NoGraph => OutcomeKind::NoGraph,
            Self::Busy => OutcomeKind::Busy,
            Self::BufferEmpty => OutcomeKind::BufferEmpty,
            Self::Committed { .. } => OutcomeKind::Committed,
            Self::SoftReset {
                reason: ResetReason::NoMatch,
                ..
            } => OutcomeKind::NoMatch,
            Self::SoftReset {
                reason: ResetReason::CorruptTarget { .. },
                ..
            } => OutcomeKind::CorruptTarget,
        }
    }

    /// Collapses the outcome to the `(success, action)` pair game loops poll.
    ///
    /// `NoMatch` and `CorruptTarget` collapse to the same pair; use
    /// [`Self::kind`] to tell them apart.
    #[inline]
    pub const fn into_pair(self) -> (bool, i32) {
        (self.is_success(), self.action_id().0)
    }
}
