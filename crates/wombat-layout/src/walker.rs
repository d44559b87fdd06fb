//! The layout walk.
//!
//! [`calculate_layout`] visits the node tree depth first and computes
//! every box in a single pass. On the way down a node inherits
//! constraints and takes its position from the parent's used counters;
//! on the way up its final size folds back into the parent. Render
//! elements are collected into a [`Hierarchy`] as nodes finish, giving
//! back-to-front paint order without a second traversal.

use wombat_tree::{
    Edges, NodeId, NodeKind, NodeTree, Size, SizeValue, TextAlign, TextTransform, ViewData,
    apply_text_transform,
};

use crate::border;
use crate::dimensions::{Dimensions, measure_text};
use crate::element::{BodyElement, BodyStyle, BoxElement, BoxStyle, RenderElement};
use crate::error::{Axis, LayoutError};
use crate::hierarchy::{Hierarchy, Slot};
use crate::normalize::{normalize_props, resolve_size};
use crate::placement::Placement;
use crate::tree::{LayoutId, LayoutKind, LayoutNode, LayoutTree};

/// Everything one layout pass produces.
#[derive(Debug)]
pub struct Layout {
    /// Paintable elements in paint order.
    pub elements: Vec<RenderElement>,
    /// The computed layout tree, for inspection and debugging.
    pub tree: LayoutTree,
}

/// Lays out a node tree into a draw list and a layout tree.
///
/// # Errors
///
/// Fails with [`LayoutError::CyclicTree`] when a node shows up in its own
/// ancestor chain, [`LayoutError::RootAsChild`] when the root node has
/// been attached below itself, and
/// [`LayoutError::AmbiguousPercentage`] when a percentage size has no
/// base to resolve against.
pub fn calculate_layout(source: &NodeTree) -> Result<Layout, LayoutError> {
    let mut walker = Walker {
        source,
        layout: LayoutTree::new(),
        hierarchy: Hierarchy::new(),
        root_extent: Size::new(0, 0),
    };
    for &child in source.children(source.root()) {
        walker.visit(child, LayoutId::ROOT)?;
    }
    // Absolute extents are merged only now so they never push flow
    // content around; the root still reports a size covering them.
    let extent = walker.root_extent;
    walker
        .layout
        .get_mut(LayoutId::ROOT)
        .dimensions
        .fold_absolute(extent);
    walker.trace(LayoutId::ROOT);
    Ok(Layout {
        elements: walker.hierarchy.into_elements(),
        tree: walker.layout,
    })
}

/// Parent values a child's layout depends on, copied out once the
/// child's line handling has updated them.
#[derive(Clone, Copy)]
struct ParentView {
    dimensions: Dimensions,
    placement: Placement,
    inset: Edges,
    declared_auto_width: bool,
    declared_auto_height: bool,
}

/// Style accumulated from a text leaf's ancestors, nearest ancestor
/// winning.
struct CollectedStyle {
    body: BodyStyle,
    transform: TextTransform,
    align: TextAlign,
}

struct Walker<'a> {
    source: &'a NodeTree,
    layout: LayoutTree,
    hierarchy: Hierarchy,
    /// Bounding box of absolute views directly under the root.
    root_extent: Size,
}

impl<'a> Walker<'a> {
    fn visit(&mut self, node: NodeId, parent: LayoutId) -> Result<(), LayoutError> {
        self.guard(node, parent)?;
        let source = self.source;
        match source.kind(node) {
            NodeKind::Root => Err(LayoutError::RootAsChild { node }),
            NodeKind::Text(body) => self.visit_unit(node, body, parent),
            NodeKind::View(view) => self.visit_container(node, view, parent),
        }
    }

    /// Rejects nodes that are already being laid out further up the
    /// chain. Walking into one again would recurse forever.
    fn guard(&self, node: NodeId, parent: LayoutId) -> Result<(), LayoutError> {
        if self
            .layout
            .chain(parent)
            .any(|ancestor| ancestor.node == Some(node))
        {
            return Err(LayoutError::CyclicTree { node });
        }
        Ok(())
    }

    fn visit_container(
        &mut self,
        node: NodeId,
        view: &'a ViewData,
        parent: LayoutId,
    ) -> Result<(), LayoutError> {
        let normalized = normalize_props(view.layout_props.as_ref());
        let kind = if view.border_props.is_some() {
            LayoutKind::Border
        } else {
            LayoutKind::Container
        };

        let (continues_line, line_top) =
            self.line_context(parent, !normalized.is_absolute && normalized.is_inline);
        if !normalized.is_absolute && !continues_line {
            self.open_line(parent);
        }
        let above = self.parent_view(parent);
        let suppressed = !normalized.is_absolute && above.dimensions.should_skip();

        let mut placement = if normalized.is_absolute {
            normalized.out_of_flow
        } else if continues_line {
            Placement::on_same_line(
                &above.placement,
                &above.inset,
                above.dimensions.used_width,
                line_top,
                &normalized.outset,
            )
        } else {
            Placement::on_new_line(
                &above.placement,
                &above.inset,
                above.dimensions.used_height,
                &normalized.outset,
            )
        };
        // The ring of a bordered view takes the outermost cell; its
        // content box starts one cell right and down.
        if kind == LayoutKind::Border {
            placement.x += 1;
            placement.y += 1;
        }

        let mut dimensions = Dimensions::new();
        if !normalized.is_absolute {
            dimensions.apply_parent_constraints(
                &above.dimensions,
                &normalized.inset,
                continues_line,
            );
        }
        let width = resolve_size(
            normalized.width,
            above.dimensions.final_width(),
            above.declared_auto_width,
            node,
            Axis::Width,
        )?;
        let height = resolve_size(
            normalized.height,
            above.dimensions.final_height(),
            above.declared_auto_height,
            node,
            Axis::Height,
        )?;
        dimensions.apply_own_size(width, height, &normalized.inset);

        let slot = if suppressed {
            None
        } else {
            Some(self.hierarchy.reserve(placement.z))
        };

        let id = self.layout.push(
            parent,
            LayoutNode {
                kind,
                node: Some(node),
                parent: None,
                children: Vec::new(),
                last_in_flow: None,
                dimensions,
                placement,
                inset: normalized.inset,
                outset: normalized.outset,
                is_inline: normalized.is_inline,
                is_absolute: normalized.is_absolute,
            },
        );

        let source = self.source;
        for &child in source.children(node) {
            self.visit(child, id)?;
        }

        self.finish_container(id, view, slot, continues_line);
        Ok(())
    }

    /// Emits a finished container's elements and folds its size into the
    /// parent.
    fn finish_container(
        &mut self,
        id: LayoutId,
        view: &ViewData,
        slot: Option<Slot>,
        continues_line: bool,
    ) {
        let node = self.layout.get(id);
        let kind = node.kind;
        let dimensions = node.dimensions;
        let placement = node.placement;
        let inset = node.inset;
        let outset = node.outset;
        let is_absolute = node.is_absolute;
        let parent = node.parent;

        let inner = dimensions.size_with(&inset);
        let background = view.style_props.and_then(|style| style.background_color);

        if let Some(slot) = slot {
            let mut elements = Vec::new();
            let width = usize::try_from(inner.width.max(0)).unwrap_or(0);
            // Blank rows erase whatever glyphs earlier siblings left in
            // the area; the box element then restyles it. A bordered view
            // always blanks its content area, a plain one only when it
            // has a background to paint.
            if kind == LayoutKind::Border || background.is_some() {
                let blank_style = if kind == LayoutKind::Border {
                    background
                        .map(|color| BodyStyle {
                            background_color: Some(color),
                            ..BodyStyle::default()
                        })
                } else {
                    None
                };
                for row in 0..inner.height.max(0) {
                    elements.push(RenderElement::Body(BodyElement {
                        value: " ".repeat(width),
                        x: placement.x,
                        y: placement.y + row,
                        style: blank_style,
                    }));
                }
            }
            if let Some(color) = background {
                elements.push(RenderElement::Box(BoxElement {
                    x: placement.x,
                    y: placement.y,
                    width: inner.width,
                    height: inner.height,
                    style: BoxStyle {
                        background_color: color,
                    },
                }));
            }
            if let (LayoutKind::Border, Some(border)) = (kind, view.border_props.as_ref()) {
                elements.extend(border::ring_elements(
                    placement,
                    inner,
                    border,
                    view.style_props.as_ref(),
                ));
            }
            self.hierarchy.fill(slot, elements);
        }

        if let Some(parent) = parent {
            let mut outer = dimensions.outer_size(&inset, &outset);
            if kind == LayoutKind::Border {
                outer.width += 2;
                outer.height += 2;
            }
            if is_absolute {
                // Out-of-flow boxes never move siblings; only the root
                // grows to keep them on the canvas.
                if parent == LayoutId::ROOT {
                    let shift = i32::from(kind == LayoutKind::Border);
                    self.root_extent = Size::new(
                        self.root_extent.width.max(placement.x - shift + outer.width),
                        self.root_extent
                            .height
                            .max(placement.y - shift + outer.height),
                    );
                }
            } else {
                let dims = &mut self.layout.get_mut(parent).dimensions;
                if continues_line {
                    dims.fold_inline(outer);
                } else {
                    dims.fold_block(outer);
                }
                dims.consume_inline(outer.width);
                self.layout.get_mut(parent).last_in_flow = Some(id);
            }
        }
        self.trace(id);
    }

    fn visit_unit(
        &mut self,
        node: NodeId,
        body: &str,
        parent: LayoutId,
    ) -> Result<(), LayoutError> {
        // Text always flows inline: it continues the line whenever the
        // previous in-flow sibling was inline.
        let (continues_line, line_top) = self.line_context(parent, true);
        if !continues_line {
            self.open_line(parent);
        }
        let above = self.parent_view(parent);
        let suppressed = above.dimensions.should_skip();

        let style = self.collect_style(node);
        let transformed = apply_text_transform(body, style.transform);
        let measured = measure_text(&transformed);

        let mut dimensions = Dimensions::new();
        dimensions.apply_parent_constraints(&above.dimensions, &Edges::ZERO, continues_line);
        dimensions.measured_width = measured.width;
        dimensions.measured_height = measured.height;

        let trimmed = dimensions.trim_horizontally(&transformed, style.align);
        let consumed = i32::try_from(trimmed.chars().count()).unwrap_or(i32::MAX);

        let placement = if continues_line {
            Placement::on_same_line(
                &above.placement,
                &above.inset,
                above.dimensions.used_width,
                line_top,
                &Edges::ZERO,
            )
        } else {
            Placement::on_new_line(
                &above.placement,
                &above.inset,
                above.dimensions.used_height,
                &Edges::ZERO,
            )
        };

        if !suppressed && !trimmed.is_empty() {
            self.hierarchy.push(
                placement.z,
                RenderElement::Body(BodyElement {
                    value: trimmed,
                    x: placement.x,
                    y: placement.y,
                    style: style.body.into_option(),
                }),
            );
        }

        let id = self.layout.push(
            parent,
            LayoutNode {
                kind: LayoutKind::Unit,
                node: Some(node),
                parent: None,
                children: Vec::new(),
                last_in_flow: None,
                dimensions,
                placement,
                inset: Edges::ZERO,
                outset: Edges::ZERO,
                is_inline: true,
                is_absolute: false,
            },
        );

        {
            let dims = &mut self.layout.get_mut(parent).dimensions;
            if continues_line {
                dims.fold_inline(measured);
            } else {
                dims.fold_block(measured);
            }
            dims.consume_inline(consumed);
        }
        self.layout.get_mut(parent).last_in_flow = Some(id);
        self.trace(id);
        Ok(())
    }

    /// Whether a node joining the parent continues the current line, and
    /// the row that line starts on.
    fn line_context(&self, parent: LayoutId, wants_line: bool) -> (bool, i32) {
        let Some(prev) = self.layout.get(parent).last_in_flow else {
            return (false, 0);
        };
        let prev = self.layout.get(prev);
        if wants_line && prev.is_inline {
            (true, prev.placement.y - prev.outset.top)
        } else {
            (false, 0)
        }
    }

    /// Closes the parent's current line: rows measured so far count as
    /// used and the line width restarts from zero.
    fn open_line(&mut self, parent: LayoutId) {
        let dims = &mut self.layout.get_mut(parent).dimensions;
        let completed = dims.measured_height - dims.used_height;
        dims.consume_row(completed);
        dims.reset_line();
    }

    fn parent_view(&self, parent: LayoutId) -> ParentView {
        let node = self.layout.get(parent);
        let (declared_auto_width, declared_auto_height) = node
            .node
            .and_then(|id| self.source.as_view(id))
            .and_then(|view| view.layout_props)
            .map_or((false, false), |props| {
                (
                    props.width == Some(SizeValue::Auto),
                    props.height == Some(SizeValue::Auto),
                )
            });
        ParentView {
            dimensions: node.dimensions,
            placement: node.placement,
            inset: node.inset,
            declared_auto_width,
            declared_auto_height,
        }
    }

    /// Gathers the inheritable style a text leaf renders with, walking
    /// its view ancestors from the outermost in so nearer records win.
    fn collect_style(&self, node: NodeId) -> CollectedStyle {
        let ancestors: Vec<NodeId> = self.source.ancestors(node).collect();
        let mut collected = CollectedStyle {
            body: BodyStyle::default(),
            transform: TextTransform::default(),
            align: TextAlign::default(),
        };
        for id in ancestors.into_iter().rev() {
            let Some(style) = self.source.as_view(id).and_then(|view| view.style_props) else {
                continue;
            };
            collected.body.merge(&style);
            if let Some(transform) = style.text_transform {
                collected.transform = transform;
            }
            if let Some(align) = style.text_align {
                collected.align = align;
            }
        }
        collected
    }

    #[cfg(feature = "layout-trace")]
    fn trace(&self, id: LayoutId) {
        let node = self.layout.get(id);
        eprintln!(
            "[layout] {} node={:?} at=({},{},z{}) final={}x{} measured={}x{} used={}x{}",
            node.kind,
            node.node.map(|n| n.0),
            node.placement.x,
            node.placement.y,
            node.placement.z,
            node.dimensions.final_width(),
            node.dimensions.final_height(),
            node.dimensions.measured_width,
            node.dimensions.measured_height,
            node.dimensions.used_width,
            node.dimensions.used_height,
        );
    }

    #[cfg(not(feature = "layout-trace"))]
    #[allow(clippy::unused_self)]
    fn trace(&self, _id: LayoutId) {}
}
