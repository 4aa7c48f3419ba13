//! Per-actor orchestration around the combo resolver.
//!
//! `combo-core` is a pure function over borrowed data. This crate supplies the
//! pieces a game loop needs around it: actors that own their cursor and input
//! queue, an overflow policy for the input-mapping layer, a dispatcher seam for
//! the gameplay layer, and structured logging of every resolution.
//!
//! Modules are organized by responsibility:
//! - [`actor`] owns per-actor state and input buffering
//! - [`driver`] steps actors once per simulation step and logs outcomes
//! - [`dispatch`] is the seam to the gameplay/animation layer
//! - [`config`] holds tunables and their TOML loader
pub mod actor;
pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;

pub use actor::{ActorId, ComboActor, InputDisposition};
pub use config::{ConfigLoader, LoadResult, OverflowPolicy, RuntimeConfig};
pub use dispatch::ActionDispatcher;
pub use driver::{ComboDriver, StepSummary};
pub use error::{Result, RuntimeError};
