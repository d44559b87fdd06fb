//! The tree of computed layout results.
//!
//! A layout pass materializes one [`LayoutNode`] per visited tree node
//! (plus one for the root) in an arena, in depth-first visit order. The
//! tree is a debugging and inspection artifact: rendering only needs the
//! flat element list, but the tree records every intermediate dimension
//! and placement decision.

use serde::Serialize;
use serde_json::{Value, json};
use strum_macros::Display;
use wombat_tree::{Edges, NodeId};

use crate::dimensions::Dimensions;
use crate::placement::Placement;

/// Index of a layout node within its [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutId(pub usize);

impl LayoutId {
    /// The root layout node is always at index 0.
    pub const ROOT: LayoutId = LayoutId(0);
}

/// What kind of box a layout node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// The synthetic box above all others; unconstrained on both axes.
    Root,
    /// A view box in flow.
    Container,
    /// A view box decorated with a border ring.
    Border,
    /// A text leaf.
    Unit,
}

/// The computed layout of one node.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    /// What kind of box this is.
    pub kind: LayoutKind,
    /// The tree node this layout was computed for; `None` for the root.
    pub node: Option<NodeId>,
    /// Parent in the layout tree; `None` for the root.
    pub parent: Option<LayoutId>,
    /// Children in visit order.
    pub children: Vec<LayoutId>,
    /// Last in-flow child, the anchor for line continuation. Absolute
    /// children never become the anchor.
    pub last_in_flow: Option<LayoutId>,
    /// The box extents.
    pub dimensions: Dimensions,
    /// Where the content box starts. For borders this is the shifted
    /// content position; the ring sits one cell up and left.
    pub placement: Placement,
    /// Padding.
    pub inset: Edges,
    /// Margin.
    pub outset: Edges,
    /// Whether the box continues lines rather than opening them.
    pub is_inline: bool,
    /// Whether the box sits out of flow.
    pub is_absolute: bool,
}

/// Arena of layout nodes in depth-first visit order.
#[derive(Debug, Serialize)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// A tree holding only the root layout node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![LayoutNode {
                kind: LayoutKind::Root,
                node: None,
                parent: None,
                children: Vec::new(),
                last_in_flow: None,
                dimensions: Dimensions::new(),
                placement: Placement::default(),
                inset: Edges::ZERO,
                outset: Edges::ZERO,
                is_inline: false,
                is_absolute: false,
            }],
        }
    }

    /// Number of layout nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The layout node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn get(&self, id: LayoutId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    /// Mutable counterpart of [`get`](Self::get).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn get_mut(&mut self, id: LayoutId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    /// Appends a node under `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this tree.
    pub fn push(&mut self, parent: LayoutId, mut node: LayoutNode) -> LayoutId {
        let id = LayoutId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Walks the parent chain from `id` towards the root, yielding `id`
    /// first.
    ///
    /// # Panics
    ///
    /// Panics on iteration if `id` was not produced by this tree.
    #[must_use]
    pub fn chain(&self, id: LayoutId) -> impl Iterator<Item = &LayoutNode> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let current = next?;
            let node = &self.nodes[current.0];
            next = node.parent;
            Some(node)
        })
    }

    /// The tree as nested JSON, children inline under their parents.
    #[must_use]
    pub fn to_json(&self) -> Value {
        self.node_json(LayoutId::ROOT)
    }

    fn node_json(&self, id: LayoutId) -> Value {
        let node = self.get(id);
        let dims = &node.dimensions;
        json!({
            "kind": node.kind.to_string(),
            "node": node.node.map(|node| node.0),
            "dimensions": {
                "measured": { "width": dims.measured_width, "height": dims.measured_height },
                "fixed": { "width": dims.fixed_width, "height": dims.fixed_height },
                "used": { "width": dims.used_width, "height": dims.used_height },
                "final": { "width": dims.final_width(), "height": dims.final_height() },
            },
            "placement": { "x": node.placement.x, "y": node.placement.y, "z": node.placement.z },
            "inset": node.inset,
            "outset": node.outset,
            "inline": node.is_inline,
            "absolute": node.is_absolute,
            "children": node
                .children
                .iter()
                .map(|child| self.node_json(*child))
                .collect::<Vec<_>>(),
        })
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}
