//! Errors surfaced by the combo runtime.
//!
//! Resolution itself never fails; these cover input admission and graph
//! acceptance at driver construction.
use combo_core::{BufferFull, ComboError, ErrorSeverity, GraphIssue};
use thiserror::Error;

use crate::actor::ActorId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("actor {actor} rejected input")]
    InputRejected {
        actor: ActorId,
        #[source]
        source: BufferFull,
    },

    #[error("combo graph rejected: {total} issue(s), first: {first}")]
    GraphRejected { total: usize, first: GraphIssue },
}

impl ComboError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputRejected { source, .. } => source.severity(),
            Self::GraphRejected { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InputRejected { .. } => "input_rejected",
            Self::GraphRejected { .. } => "graph_rejected",
        }
    }
}
