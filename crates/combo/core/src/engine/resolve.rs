//! Transition resolution.

use crate::config::ComboConfig;
use crate::graph::ComboGraph;
use crate::input::InputRingBuffer;
use crate::state::ComboState;

use super::outcome::{AdvanceOutcome, ResetReason};

/// Resolves the oldest buffered input against the graph.
///
/// Phases:
/// 1. Guards - empty graph, busy gate, empty buffer. Nothing is mutated.
/// 2. Heal - an out-of-range cursor is read as the idle node for this call.
/// 3. Consume - exactly one token leaves the buffer, whatever happens next.
/// 4. Match - first edge in the clamped window whose trigger equals the token.
/// 5. Commit or soft reset.
pub fn try_advance_state<const N: usize>(
    state: &mut ComboState,
    buffer: &mut InputRingBuffer<N>,
    graph: &ComboGraph<'_>,
) -> AdvanceOutcome {
    let Some(idle) = graph.idle_node() else {
        return AdvanceOutcome::NoGraph;
    };
    if state.action_busy {
        return AdvanceOutcome::Busy;
    }
    if buffer.peek().is_none() {
        return AdvanceOutcome::BufferEmpty;
    }

    // Healing is not written back unless a transition commits or resets.
    let (from, working, healed_from) = match graph.node(state.current_node) {
        Some(node) => (state.current_node as usize, node, None),
        None => (ComboConfig::IDLE_NODE, idle, Some(state.current_node)),
    };

    let Some(token) = buffer.try_dequeue() else {
        return AdvanceOutcome::BufferEmpty;
    };

    let reason = match graph.find_edge(working, token) {
        Some((_, edge)) => match graph.node(edge.target_node) {
            Some(target) => {
                state.current_node = edge.target_node;
                state.action_busy = true;
                return AdvanceOutcome::Committed {
                    token,
                    from,
                    to: edge.target_node as usize,
                    action: target.action_id,
                    healed_from,
                };
            }
            None => ResetReason::CorruptTarget {
                target: edge.target_node,
            },
        },
        None => ResetReason::NoMatch,
    };

    // Busy gate is left as-is on a soft reset.
    state.current_node = ComboConfig::IDLE_NODE as i32;
    AdvanceOutcome::SoftReset {
        token,
        from,
        reason,
        action: idle.action_id,
        healed_from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ActionId, ComboEdge, ComboNode};

    fn two_node_graph() -> ([ComboNode; 2], [ComboEdge; 1]) {
        (
            [ComboNode::new(0, 0, 1), ComboNode::leaf(100)],
            [ComboEdge::new(1, 1)],
        )
    }

    #[test]
    fn corrupt_cursor_is_reported_as_healed() {
        let (nodes, edges) = two_node_graph();
        let graph = ComboGraph::new(&nodes, &edges);
        let mut state = ComboState {
            current_node: -3,
            action_busy: false,
        };
        let mut buffer = InputRingBuffer::<8>::new();
        buffer.try_enqueue(1).unwrap();

        let outcome = try_advance_state(&mut state, &mut buffer, &graph);

        assert_eq!(
            outcome,
            AdvanceOutcome::Committed {
                token: 1,
                from: 0,
                to: 1,
                action: ActionId(100),
                healed_from: Some(-3),
            }
        );
        assert_eq!(state.current_node, 1);
    }

    #[test]
    fn valid_cursor_is_not_reported_as_healed() {
        let (nodes, edges) = two_node_graph();
        let graph = ComboGraph::new(&nodes, &edges);
        let mut state = ComboState::new();
        let mut buffer = InputRingBuffer::<8>::new();
        buffer.try_enqueue(5).unwrap();

        let outcome = try_advance_state(&mut state, &mut buffer, &graph);

        assert_eq!(outcome.healed_from(), None);
        assert_eq!(outcome.kind(), crate::OutcomeKind::NoMatch);
    }

    #[test]
    fn dead_end_resets_to_idle() {
        let (nodes, edges) = two_node_graph();
        let graph = ComboGraph::new(&nodes, &edges);
        let mut state = ComboState {
            current_node: 1,
            action_busy: false,
        };
        let mut buffer = InputRingBuffer::<8>::new();
        buffer.try_enqueue(1).unwrap();

        let outcome = try_advance_state(&mut state, &mut buffer, &graph);

        assert_eq!(outcome.into_pair(), (false, 0));
        assert_eq!(state, ComboState::new());
    }

    #[test]
    fn guards_leave_everything_untouched() {
        let (nodes, edges) = two_node_graph();
        let graph = ComboGraph::new(&nodes, &edges);

        let mut state = ComboState {
            current_node: 555,
            action_busy: false,
        };
        let mut buffer = InputRingBuffer::<8>::new();
        assert_eq!(
            try_advance_state(&mut state, &mut buffer, &graph),
            AdvanceOutcome::BufferEmpty
        );
        assert_eq!(state.current_node, 555);

        buffer.try_enqueue(1).unwrap();
        assert_eq!(
            try_advance_state(&mut state, &mut buffer, &ComboGraph::empty()),
            AdvanceOutcome::NoGraph
        );
        assert_eq!(buffer.len(), 1);
        assert_eq!(state.current_node, 555);
    }
}
