//! Structural diagnostics for combo graphs.
//!
//! Resolution never depends on these checks; they exist so authoring tools and
//! load-time asserts can surface data that the resolver would silently heal.

use arrayvec::ArrayVec;

use super::{ComboGraph, EdgeWindow};
use crate::config::ComboConfig;
use crate::error::{ComboError, ErrorSeverity};
use crate::input::InputToken;

/// A single structural problem found in a combo graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphIssue {
    #[error("graph has no nodes; idle node {} is missing", ComboConfig::IDLE_NODE)]
    MissingIdleNode,

    #[error(
        "node {node} declares {declared_count} edge(s) from {declared_start}, edge table has {edge_len}"
    )]
    EdgeWindowClamped {
        node: usize,
        declared_start: i32,
        declared_count: i32,
        edge_len: usize,
    },

    #[error("edge {edge} of node {node} targets node {target} (graph has {node_count} nodes)")]
    TargetOutOfRange {
        node: usize,
        edge: usize,
        target: i32,
        node_count: usize,
    },

    #[error("edge {edge} of node {node} is shadowed by an earlier edge with trigger {trigger}")]
    ShadowedEdge {
        node: usize,
        edge: usize,
        trigger: InputToken,
    },
}

impl ComboError for GraphIssue {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingIdleNode => "missing_idle_node",
            Self::EdgeWindowClamped { .. } => "edge_window_clamped",
            Self::TargetOutOfRange { .. } => "target_out_of_range",
            Self::ShadowedEdge { .. } => "shadowed_edge",
        }
    }
}

/// Outcome of [`ComboGraph::validate`].
///
/// Keeps the first [`ComboConfig::MAX_REPORTED_ISSUES`] issues and counts the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphReport {
    issues: ArrayVec<GraphIssue, { ComboConfig::MAX_REPORTED_ISSUES }>,
    total: usize,
}

impl GraphReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, issue: GraphIssue) {
        self.total += 1;
        // Overflow is reflected in `total`.
        let _ = self.issues.try_push(issue);
    }

    /// Returns `true` if no issue was found.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }

    /// Retained issues, in discovery order.
    pub fn issues(&self) -> &[GraphIssue] {
        &self.issues
    }

    /// Total number of issues found, including ones not retained.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if some issues were counted but not retained.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.total > self.issues.len()
    }
}

pub(super) fn validate(graph: &ComboGraph<'_>) -> GraphReport {
    let mut report = GraphReport::new();

    if graph.is_empty() {
        report.record(GraphIssue::MissingIdleNode);
        return report;
    }

    let edge_len = graph.edge_count();
    let node_count = graph.node_count();

    for (node_index, node) in graph.nodes().iter().enumerate() {
        if !declared_window_fits(node.edge_start, node.edge_count, edge_len) {
            report.record(GraphIssue::EdgeWindowClamped {
                node: node_index,
                declared_start: node.edge_start,
                declared_count: node.edge_count,
                edge_len,
            });
        }

        let window = graph.edge_window(node);
        let edges = graph.edges_of(node);
        for (offset, edge) in edges.iter().enumerate() {
            let edge_index = window.start + offset;

            if !graph.contains_node(edge.target_node) {
                report.record(GraphIssue::TargetOutOfRange {
                    node: node_index,
                    edge: edge_index,
                    target: edge.target_node,
                    node_count,
                });
            }

            if edges[..offset]
                .iter()
                .any(|earlier| earlier.input_trigger == edge.input_trigger)
            {
                report.record(GraphIssue::ShadowedEdge {
                    node: node_index,
                    edge: edge_index,
                    trigger: edge.input_trigger,
                });
            }
        }
    }

    report
}

/// A declaration fits when clamping leaves it unchanged. An empty declaration
/// always fits, wherever it claims to start.
fn declared_window_fits(edge_start: i32, edge_count: i32, edge_len: usize) -> bool {
    if edge_count == 0 {
        return true;
    }
    if edge_start < 0 || edge_count < 0 {
        return false;
    }
    let window = EdgeWindow::clamp(edge_start, edge_count, edge_len);
    window.start as i64 == edge_start as i64 && window.count as i64 == edge_count as i64
}
