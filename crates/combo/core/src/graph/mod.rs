//! Combo graph data model.
//!
//! A combo graph is two flat tables supplied by the caller: nodes, each
//! naming an action and a window into the edge table, and edges, each mapping
//! an input token to a destination node. The engine only ever borrows these
//! tables. It never allocates, frees or mutates them.
//!
//! Table contents are untrusted. Every accessor here clamps declared offsets
//! and counts to the real table lengths, so a malformed node yields a shorter
//! (possibly empty) edge window instead of an out-of-bounds read.

mod validate;

pub use validate::{GraphIssue, GraphReport};

use core::fmt;
use core::ops::Range;

use crate::config::ComboConfig;
use crate::input::InputToken;

/// Opaque identifier of the gameplay action a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionId(pub i32);

impl ActionId {
    /// Reported when the engine did not examine any input.
    pub const NONE: Self = Self(-1);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action:{}", self.0)
    }
}

/// A vertex of the combo graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboNode {
    /// Action executed when this node is entered.
    pub action_id: ActionId,
    /// Offset of this node's first outgoing edge. May lie outside the edge table.
    pub edge_start: i32,
    /// Declared number of outgoing edges. May exceed what the table can supply.
    pub edge_count: i32,
}

impl ComboNode {
    pub const fn new(action_id: i32, edge_start: i32, edge_count: i32) -> Self {
        Self {
            action_id: ActionId(action_id),
            edge_start,
            edge_count,
        }
    }

    /// A node without outgoing edges.
    pub const fn leaf(action_id: i32) -> Self {
        Self::new(action_id, 0, 0)
    }
}

/// A directed transition taken when `input_trigger` is read at the source node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboEdge {
    pub input_trigger: InputToken,
    /// Destination node. May be negative or past the node table.
    pub target_node: i32,
}

impl ComboEdge {
    pub const fn new(input_trigger: InputToken, target_node: i32) -> Self {
        Self {
            input_trigger,
            target_node,
        }
    }
}

/// Clamped slice of the edge table belonging to one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeWindow {
    pub start: usize,
    pub count: usize,
}

impl EdgeWindow {
    pub const EMPTY: Self = Self { start: 0, count: 0 };

    /// Clamps a node's declared window against an edge table of `edge_len` entries.
    ///
    /// `start = clamp(edge_start, 0, edge_len)` and
    /// `count = clamp(edge_count, 0, edge_len - start)`.
    pub fn clamp(edge_start: i32, edge_count: i32, edge_len: usize) -> Self {
        let start = usize::try_from(edge_start).map_or(0, |start| start.min(edge_len));
        let count = usize::try_from(edge_count).map_or(0, |count| count.min(edge_len - start));
        Self { start, count }
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Borrowed, read-only view of a combo graph.
///
/// Node index [`ComboConfig::IDLE_NODE`] is the idle/neutral node and the
/// fallback target of every failed resolution.
#[derive(Clone, Copy, Debug)]
pub struct ComboGraph<'a> {
    nodes: &'a [ComboNode],
    edges: &'a [ComboEdge],
}

impl<'a> ComboGraph<'a> {
    /// Views the full node and edge tables.
    pub const fn new(nodes: &'a [ComboNode], edges: &'a [ComboEdge]) -> Self {
        Self { nodes, edges }
    }

    /// Views only the first `node_len` nodes and `edge_len` edges.
    ///
    /// Useful when the backing storage is a pooled buffer with a separate
    /// logical length. Lengths larger than the slices are clamped to them.
    pub fn with_lengths(
        nodes: &'a [ComboNode],
        node_len: usize,
        edges: &'a [ComboEdge],
        edge_len: usize,
    ) -> Self {
        Self {
            nodes: &nodes[..node_len.min(nodes.len())],
            edges: &edges[..edge_len.min(edges.len())],
        }
    }

    /// A graph with no nodes. Resolving against it is a no-op.
    pub const fn empty() -> Self {
        Self {
            nodes: &[],
            edges: &[],
        }
    }

    #[inline]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub const fn nodes(&self) -> &'a [ComboNode] {
        self.nodes
    }

    pub const fn edges(&self) -> &'a [ComboEdge] {
        self.edges
    }

    /// Returns `true` if `index` names a node of this graph.
    #[inline]
    pub fn contains_node(&self, index: i32) -> bool {
        self.node(index).is_some()
    }

    /// Looks up a node by raw (possibly corrupt) index.
    pub fn node(&self, index: i32) -> Option<&'a ComboNode> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.nodes.get(index))
    }

    /// The idle node, or `None` for an empty graph.
    #[inline]
    pub fn idle_node(&self) -> Option<&'a ComboNode> {
        self.nodes.get(ComboConfig::IDLE_NODE)
    }

    /// Bounds-clamped edge window of `node`.
    #[inline]
    pub fn edge_window(&self, node: &ComboNode) -> EdgeWindow {
        EdgeWindow::clamp(node.edge_start, node.edge_count, self.edges.len())
    }

    /// Outgoing edges of `node`, in declaration order.
    pub fn edges_of(&self, node: &ComboNode) -> &'a [ComboEdge] {
        self.edges
            .get(self.edge_window(node).range())
            .unwrap_or(&[])
    }

    /// First outgoing edge of `node` triggered by `token`.
    ///
    /// Declaration order breaks ties, so later edges with the same trigger
    /// are unreachable. Returns the edge's index in the edge table as well.
    pub fn find_edge(
        &self,
        node: &ComboNode,
        token: InputToken,
    ) -> Option<(usize, &'a ComboEdge)> {
        let window = self.edge_window(node);
        self.edges_of(node)
            .iter()
            .enumerate()
            .find(|(_, edge)| edge.input_trigger == token)
            .map(|(offset, edge)| (window.start + offset, edge))
    }

    /// Runs every structural check and collects the findings.
    ///
    /// Diagnostic only: resolution tolerates every reported issue.
    pub fn validate(&self) -> GraphReport {
        validate::validate(self)
    }
}

impl Default for ComboGraph<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
