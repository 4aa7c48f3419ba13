//! Deterministic combo graph resolution.
//!
//! `combo-core` decides which action an actor performs next by resolving its
//! buffered input tokens against a read-only combo graph. Every call is
//! synchronous and allocation-free, and malformed graph data can never make it
//! read out of bounds or panic: the worst outcome is a reset to the idle node.
//!
//! All transitions flow through [`engine::try_advance_state`] (or the
//! [`engine::ComboEngine`] handle), and supporting crates depend on the types
//! re-exported here.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod input;
pub mod state;

pub use config::ComboConfig;
pub use engine::{AdvanceOutcome, ComboEngine, OutcomeKind, ResetReason, try_advance_state};
pub use error::{BufferFull, ComboError, ErrorSeverity};
pub use graph::{
    ActionId, ComboEdge, ComboGraph, ComboNode, EdgeWindow, GraphIssue, GraphReport,
};
pub use input::{InputRingBuffer, InputToken};
pub use state::ComboState;
