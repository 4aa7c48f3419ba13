//! Actors: one combo cursor and input buffer per controlled entity.

use std::fmt;

use combo_core::{
    AdvanceOutcome, ComboConfig, ComboGraph, ComboState, InputRingBuffer, InputToken,
    try_advance_state,
};

use crate::config::OverflowPolicy;
use crate::error::{Result, RuntimeError};

/// Identifier of an actor driven by the combo runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How [`ComboActor::push_input`] handled a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDisposition {
    /// The token was appended.
    Queued,
    /// The token was appended after evicting the oldest buffered one.
    ReplacedOldest { dropped: InputToken },
    /// The buffer was full and the token was discarded.
    Discarded,
}

/// One combatant: its combo cursor plus its pending inputs.
///
/// The actor is the exclusive owner of both; nothing here is shared across
/// threads.
#[derive(Clone, Debug)]
pub struct ComboActor<const N: usize = { ComboConfig::DEFAULT_INPUT_CAPACITY }> {
    id: ActorId,
    state: ComboState,
    buffer: InputRingBuffer<N>,
    busy_steps: u32,
}

impl<const N: usize> ComboActor<N> {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            state: ComboState::new(),
            buffer: InputRingBuffer::new(),
            busy_steps: 0,
        }
    }

    /// Restores an actor from a saved cursor. The cursor is not validated;
    /// the resolver heals it on the next consumed input.
    pub fn with_state(id: ActorId, state: ComboState) -> Self {
        Self {
            state,
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn state(&self) -> &ComboState {
        &self.state
    }

    pub fn buffer(&self) -> &InputRingBuffer<N> {
        &self.buffer
    }

    /// Consecutive steps this actor has spent blocked on the busy gate.
    pub fn busy_steps(&self) -> u32 {
        self.busy_steps
    }

    /// Buffers a token from the input-mapping layer, applying `policy` when full.
    pub fn push_input(
        &mut self,
        token: InputToken,
        policy: OverflowPolicy,
    ) -> Result<InputDisposition> {
        match self.buffer.try_enqueue(token) {
            Ok(()) => Ok(InputDisposition::Queued),
            Err(full) => match policy {
                OverflowPolicy::Reject => Err(RuntimeError::InputRejected {
                    actor: self.id,
                    source: full,
                }),
                OverflowPolicy::DropNewest => Ok(InputDisposition::Discarded),
                OverflowPolicy::DropOldest => {
                    let Some(dropped) = self.buffer.try_dequeue() else {
                        // Zero-capacity buffer: nothing to evict.
                        return Ok(InputDisposition::Discarded);
                    };
                    self.buffer
                        .try_enqueue(token)
                        .map_err(|source| RuntimeError::InputRejected {
                            actor: self.id,
                            source,
                        })?;
                    Ok(InputDisposition::ReplacedOldest { dropped })
                }
            },
        }
    }

    /// Resolves at most one buffered input against `graph`.
    pub fn advance(&mut self, graph: &ComboGraph<'_>) -> AdvanceOutcome {
        let outcome = try_advance_state(&mut self.state, &mut self.buffer, graph);
        if matches!(outcome, AdvanceOutcome::Busy) {
            self.busy_steps = self.busy_steps.saturating_add(1);
        }
        outcome
    }

    /// Signal from the gameplay layer that the last emitted action concluded.
    pub fn finish_action(&mut self) {
        self.state.signal_action_finished();
        self.busy_steps = 0;
    }

    /// Returns to idle and drops every pending input.
    pub fn reset(&mut self) {
        self.state.reset();
        self.buffer.clear();
        self.busy_steps = 0;
    }
}
