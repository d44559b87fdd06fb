//! Node tree for the wombat layout engine.
//!
//! This crate provides the arena-based tree of views and text leaves that a
//! layout pass consumes, together with the typed prop records attached to
//! views (margins, sizing, colors, borders).
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues. Mutation misuse (unknown ids, attaching under a text leaf,
//! removing a non-child) is a caller bug and fails with an assertion rather
//! than an error value; layout-time problems are reported as errors by the
//! layout crate instead.

pub mod error;
pub mod props;
pub mod style;

pub use error::ParseError;
pub use props::{DisplayValue, Edges, LayoutProps, PositionType, SizeValue};
pub use style::{
    BorderProps, BorderThickness, Color, FontStyle, FontWeight, StyleProps, TextAlign,
    TextDecoration, TextTransform, apply_text_transform,
};

use serde::Serialize;

/// A type-safe index into the node tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Canvas size in character cells.
///
/// A negative height means the canvas is unbounded vertically (the output
/// grows with the content); the rasterizer interprets it that way too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    /// Width in cells.
    pub width: i32,
    /// Height in rows; negative = unbounded.
    pub height: i32,
}

impl Size {
    /// Construct a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A single node in the tree.
///
/// Stores indices for parent/child/sibling relationships, enabling O(1)
/// traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// What the node is (root, view or text leaf).
    pub kind: NodeKind,
    /// Parent node, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Ordered list of children. Only the root and views may have any.
    pub children: Vec<NodeId>,
    /// Sibling immediately after this node in the parent's children.
    pub next_sibling: Option<NodeId>,
    /// Sibling immediately before this node in the parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a node, with kind-specific payload.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The canvas root. Exactly one exists, at [`NodeId::ROOT`].
    Root,
    /// A box that participates in layout and may carry props and children.
    View(ViewData),
    /// A text leaf. The body is measured as one row of `chars().count()`
    /// cells. Text nodes cannot have children.
    Text(String),
}

/// Prop records attached to a view.
///
/// Each record is replaced wholesale by its setter; `None` means the view
/// has no props of that class and behaves with defaults.
#[derive(Debug, Clone, Default)]
pub struct ViewData {
    /// Flow, sizing and positioning props.
    pub layout_props: Option<LayoutProps>,
    /// Inline text styling props, inherited by descendant text.
    pub style_props: Option<StyleProps>,
    /// Border decoration. Presence turns the view into a bordered box.
    pub border_props: Option<BorderProps>,
}

/// Arena-based node tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector, using indices for relationships.
/// The root node is always at index 0 and carries the canvas [`Size`].
#[derive(Debug, Clone)]
pub struct NodeTree {
    /// All nodes in the tree, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Canvas size the root lays out against.
    size: Size,
}

impl NodeTree {
    /// Create a new tree holding only the root node.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let root = Node {
            kind: NodeKind::Root,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        NodeTree {
            nodes: vec![root],
            size,
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Canvas size the root lays out against.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the canvas size (e.g. on terminal resize).
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree (including detached ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true; the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Allocate a detached view with no props set.
    pub fn create_view(&mut self) -> NodeId {
        self.alloc(NodeKind::View(ViewData::default()))
    }

    /// Allocate a detached text leaf with the given body.
    pub fn create_text(&mut self, body: &str) -> NodeId {
        self.alloc(NodeKind::Text(body.to_string()))
    }

    /// Appends `child` as the last child of `parent`, updating all
    /// relationships. A child that is currently attached elsewhere is
    /// detached first, so this doubles as a move.
    ///
    /// # Panics
    /// Panics if either ID is out of bounds, if `child` is the root or equal
    /// to `parent`, or if `parent` is a text leaf.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let position = self.nodes[parent.0].children.len();
        self.attach_at(parent, child, position);
    }

    /// Inserts `child` as the first child of `parent`.
    ///
    /// # Panics
    /// Same conditions as [`NodeTree::append_child`].
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.attach_at(parent, child, 0);
    }

    /// Inserts `child` immediately before `before` in `parent`'s children.
    ///
    /// # Panics
    /// Panics if `before` is not currently a child of `parent`, plus the
    /// conditions of [`NodeTree::append_child`].
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, before: NodeId) {
        let position = self
            .child_position(parent, before)
            .unwrap_or_else(|| panic!("{before:?} is not a child of {parent:?}"));
        self.attach_at(parent, child, position);
    }

    /// Inserts `child` at `position` among `parent`'s children. A position
    /// equal to the current child count appends.
    ///
    /// # Panics
    /// Panics if `position` exceeds the current child count, plus the
    /// conditions of [`NodeTree::append_child`].
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, position: usize) {
        assert!(
            position <= self.nodes[parent.0].children.len(),
            "insert position {position} out of bounds for {parent:?}"
        );
        self.attach_at(parent, child, position);
    }

    /// Detaches `child` from `parent`, clearing its parent and sibling links.
    /// The node itself stays allocated and can be re-attached later.
    ///
    /// # Panics
    /// Panics if `child` is not currently a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let position = self
            .child_position(parent, child)
            .unwrap_or_else(|| panic!("{child:?} is not a child of {parent:?}"));
        let removed = self.nodes[parent.0].children.remove(position);
        debug_assert_eq!(removed, child);

        let prev = self.nodes[child.0].prev_sibling;
        let next = self.nodes[child.0].next_sibling;
        if let Some(prev) = prev {
            self.nodes[prev.0].next_sibling = next;
        }
        if let Some(next) = next {
            self.nodes[next.0].prev_sibling = prev;
        }
        let node = &mut self.nodes[child.0];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Position of `child` among `parent`'s children, if it is one.
    #[must_use]
    pub fn child_position(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&id| id == child)
    }

    /// Shared attachment path for append/prepend/insert.
    fn attach_at(&mut self, parent: NodeId, child: NodeId, position: usize) {
        assert!(child != parent, "cannot attach {child:?} under itself");
        assert!(child != NodeId::ROOT, "the root cannot be re-parented");
        assert!(
            !matches!(self.nodes[parent.0].kind, NodeKind::Text(_)),
            "text nodes are leaves and cannot have children"
        );

        if let Some(old_parent) = self.nodes[child.0].parent {
            // Detaching may shift the target position among the same
            // parent's children.
            let old_position = self
                .child_position(old_parent, child)
                .unwrap_or_else(|| panic!("{child:?} has a stale parent link"));
            self.remove_child(old_parent, child);
            if old_parent == parent && old_position < position {
                return self.attach_at(parent, child, position - 1);
            }
            return self.attach_at(parent, child, position);
        }

        let siblings = &self.nodes[parent.0].children;
        let prev = position.checked_sub(1).and_then(|i| siblings.get(i).copied());
        let next = siblings.get(position).copied();

        self.nodes[parent.0].children.insert(position, child);
        let node = &mut self.nodes[child.0];
        node.parent = Some(parent);
        node.prev_sibling = prev;
        node.next_sibling = next;
        if let Some(prev) = prev {
            self.nodes[prev.0].next_sibling = Some(child);
        }
        if let Some(next) = next {
            self.nodes[next.0].prev_sibling = Some(child);
        }
    }

    /// Replace a view's layout props wholesale; `None` clears them.
    ///
    /// # Panics
    /// Panics if `node` is not a view.
    pub fn set_layout_props(&mut self, node: NodeId, props: Option<LayoutProps>) {
        let NodeKind::View(data) = &mut self.nodes[node.0].kind else {
            panic!("layout props can only be set on views, {node:?} is not one");
        };
        data.layout_props = props;
    }

    /// Replace a view's style props wholesale; `None` clears them.
    ///
    /// # Panics
    /// Panics if `node` is not a view.
    pub fn set_style_props(&mut self, node: NodeId, props: Option<StyleProps>) {
        let NodeKind::View(data) = &mut self.nodes[node.0].kind else {
            panic!("style props can only be set on views, {node:?} is not one");
        };
        data.style_props = props;
    }

    /// Replace a view's border props wholesale; `None` removes the border.
    ///
    /// # Panics
    /// Panics if `node` is not a view.
    pub fn set_border_props(&mut self, node: NodeId, props: Option<BorderProps>) {
        let NodeKind::View(data) = &mut self.nodes[node.0].kind else {
            panic!("border props can only be set on views, {node:?} is not one");
        };
        data.border_props = props;
    }

    /// Replace a text leaf's body.
    ///
    /// # Panics
    /// Panics if `node` is not a text leaf.
    pub fn set_body(&mut self, node: NodeId, body: &str) {
        let NodeKind::Text(current) = &mut self.nodes[node.0].kind else {
            panic!("a body can only be set on text leaves, {node:?} is not one");
        };
        *current = body.to_string();
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get the node's kind.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Get a view's prop records if this node is a view.
    #[must_use]
    pub fn as_view(&self, id: NodeId) -> Option<&ViewData> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::View(data) => Some(data),
            _ => None,
        })
    }

    /// Get the body if this node is a text leaf.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(body) => Some(body.as_str()),
            _ => None,
        })
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a NodeTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
