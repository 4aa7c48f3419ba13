use crate::config::ComboConfig;

/// Per-actor combo cursor.
///
/// `current_node` is deliberately a raw signed index: callers may hand the
/// engine a cursor that was corrupted or restored from stale data, and the
/// resolver heals it to the idle node instead of trusting it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboState {
    /// Node the actor currently sits on. May be out of range.
    pub current_node: i32,

    /// Set when a transition commits; cleared by [`Self::signal_action_finished`].
    /// While set, no new input is resolved.
    pub action_busy: bool,
}

impl ComboState {
    /// Creates a cursor at the idle node, not busy.
    pub const fn new() -> Self {
        Self {
            current_node: ComboConfig::IDLE_NODE as i32,
            action_busy: false,
        }
    }

    /// Called by the gameplay layer once the emitted action's effect concludes.
    #[inline]
    pub fn signal_action_finished(&mut self) {
        self.action_busy = false;
    }

    /// Returns the actor to the idle node and lifts the busy gate.
    pub fn reset(&mut self) {
        self.current_node = ComboConfig::IDLE_NODE as i32;
        self.action_busy = false;
    }

    #[inline]
    pub const fn is_idle(&self) -> bool {
        self.current_node == ComboConfig::IDLE_NODE as i32
    }
}
