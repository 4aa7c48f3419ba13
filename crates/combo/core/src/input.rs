//! Fixed-capacity input queue.
//!
//! [`InputRingBuffer`] is the per-actor FIFO between the input-mapping layer
//! (producer) and the resolver (consumer). Storage is an inline array, so every
//! operation is O(1) and nothing is allocated after construction.

use crate::config::ComboConfig;
use crate::error::BufferFull;

/// Discrete input token written by the input-mapping layer.
///
/// Tokens are opaque to the engine; they are only compared against
/// [`ComboEdge::input_trigger`](crate::ComboEdge::input_trigger).
pub type InputToken = i32;

/// Circular FIFO of input tokens with capacity `N`.
///
/// # Invariants
///
/// - `0 <= len <= N`
/// - `head` points at the oldest token, `tail` at the next free slot, both modulo `N`
/// - Dequeue order equals enqueue order across any number of wraparounds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRingBuffer<const N: usize = { ComboConfig::DEFAULT_INPUT_CAPACITY }> {
    slots: [InputToken; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<const N: usize> InputRingBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            slots: [0; N],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Appends a token at the back.
    ///
    /// Fails without touching the buffer when it is full (or when `N == 0`).
    pub fn try_enqueue(&mut self, token: InputToken) -> Result<(), BufferFull> {
        if self.is_full() {
            return Err(BufferFull { token, capacity: N });
        }

        self.slots[self.tail] = token;
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest token, or `None` when empty.
    pub fn try_dequeue(&mut self) -> Option<InputToken> {
        if self.is_empty() {
            return None;
        }

        let token = self.slots[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(token)
    }

    /// Returns the oldest token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<InputToken> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Drops every buffered token and rewinds both cursors.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Iterates buffered tokens from oldest to newest without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = InputToken> + '_ {
        (0..self.len).map(move |offset| self.slots[(self.head + offset) % N])
    }
}

impl<const N: usize> Default for InputRingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
