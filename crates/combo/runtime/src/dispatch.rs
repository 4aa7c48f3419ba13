//! Seam between the resolver and the gameplay layer.

use combo_core::ActionId;

use crate::actor::ActorId;

/// Receives actions emitted by committed transitions.
///
/// The gameplay layer plays the action's effect and, once it concludes, calls
/// [`ComboActor::finish_action`](crate::ComboActor::finish_action) on the
/// actor. Until then the actor stays busy and buffers further input.
pub trait ActionDispatcher {
    /// A transition committed: `actor` entered `node` and should perform `action`.
    fn dispatch(&mut self, actor: ActorId, action: ActionId, node: usize);

    /// A consumed input sent `actor` back to idle. Default: ignored.
    fn on_soft_reset(&mut self, _actor: ActorId, _idle_action: ActionId) {}
}

/// Closures can serve as dispatchers that only care about committed actions.
impl<F> ActionDispatcher for F
where
    F: FnMut(ActorId, ActionId, usize),
{
    #[inline]
    fn dispatch(&mut self, actor: ActorId, action: ActionId, node: usize) {
        self(actor, action, node)
    }
}
