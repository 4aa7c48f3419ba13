//! Combo resolution pipeline.
//!
//! [`try_advance_state`] is the single entry point that moves an actor
//! through the combo graph. [`ComboEngine`] wraps it for callers that prefer
//! to hold one actor's state and buffer together for the duration of a step.

mod outcome;
mod resolve;

pub use outcome::{AdvanceOutcome, OutcomeKind, ResetReason};
pub use resolve::try_advance_state;

use crate::config::ComboConfig;
use crate::graph::ComboGraph;
use crate::input::InputRingBuffer;
use crate::state::ComboState;

/// Borrowed handle over one actor's combo state and input buffer.
///
/// All cursor mutations (transitions, finish signal, reset) go through here
/// or through the free functions it forwards to.
#[derive(Debug)]
pub struct ComboEngine<'a, const N: usize = { ComboConfig::DEFAULT_INPUT_CAPACITY }> {
    state: &'a mut ComboState,
    buffer: &'a mut InputRingBuffer<N>,
}

impl<'a, const N: usize> ComboEngine<'a, N> {
    pub fn new(state: &'a mut ComboState, buffer: &'a mut InputRingBuffer<N>) -> Self {
        Self { state, buffer }
    }

    pub fn state(&self) -> &ComboState {
        self.state
    }

    pub fn buffer(&self) -> &InputRingBuffer<N> {
        self.buffer
    }

    /// Resolves at most one buffered input against `graph`.
    #[inline]
    pub fn try_advance(&mut self, graph: &ComboGraph<'_>) -> AdvanceOutcome {
        try_advance_state(self.state, self.buffer, graph)
    }

    /// Lifts the busy gate once the last emitted action has played out.
    #[inline]
    pub fn signal_action_finished(&mut self) {
        self.state.signal_action_finished();
    }

    /// Sends the actor back to idle. Buffered input is kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
