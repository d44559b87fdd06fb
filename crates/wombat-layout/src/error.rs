//! Errors a layout pass can report.

use strum_macros::Display;
use thiserror::Error;
use wombat_tree::NodeId;

/// One axis of the character grid, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// The horizontal axis.
    Width,
    /// The vertical axis.
    Height,
}

/// A structural or prop problem that makes layout impossible.
///
/// Layout never panics on bad input trees; it reports one of these
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A node was reached again while it was still being laid out, so the
    /// tree contains a cycle.
    #[error("node {} appears in its own ancestor chain; the tree must be acyclic", .node.0)]
    CyclicTree {
        /// The node that closed the cycle.
        node: NodeId,
    },

    /// The root node was encountered in a child position.
    #[error("node {} is the root and cannot be laid out as a child", .node.0)]
    RootAsChild {
        /// The offending node.
        node: NodeId,
    },

    /// A percentage size has no base to resolve against because the
    /// parent's size on that axis is natural.
    #[error(
        "node {} declares a percentage {axis} but its parent {axis} is 'auto'",
        .node.0
    )]
    AmbiguousPercentage {
        /// The node with the percentage prop.
        node: NodeId,
        /// The axis the percentage applies to.
        axis: Axis,
    },
}
