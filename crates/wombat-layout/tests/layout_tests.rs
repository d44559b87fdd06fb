//! End-to-end layout scenarios: trees go in, placed elements come out.

use wombat_layout::{Axis, Layout, LayoutError, LayoutId, RenderElement, calculate_layout};
use wombat_tree::{
    BorderProps, Color, DisplayValue, Edges, LayoutProps, NodeId, NodeKind, NodeTree,
    PositionType, Size, SizeValue, StyleProps, TextAlign, TextTransform,
};

fn new_tree() -> NodeTree {
    NodeTree::new(Size::new(80, 24))
}

fn view(tree: &mut NodeTree, parent: NodeId, props: LayoutProps) -> NodeId {
    let id = tree.create_view();
    tree.set_layout_props(id, Some(props));
    tree.append_child(parent, id);
    id
}

fn add_text(tree: &mut NodeTree, parent: NodeId, body: &str) {
    let id = tree.create_text(body);
    tree.append_child(parent, id);
}

fn layout(tree: &NodeTree) -> Layout {
    calculate_layout(tree).expect("layout should succeed")
}

/// Text runs in paint order as (value, x, y).
fn bodies(layout: &Layout) -> Vec<(String, i32, i32)> {
    layout
        .elements
        .iter()
        .filter_map(|element| match element {
            RenderElement::Body(body) => Some((body.value.clone(), body.x, body.y)),
            RenderElement::Box(_) => None,
        })
        .collect()
}

/// Box rectangles in paint order as (x, y, width, height).
fn boxes(layout: &Layout) -> Vec<(i32, i32, i32, i32)> {
    layout
        .elements
        .iter()
        .filter_map(|element| match element {
            RenderElement::Box(rect) => Some((rect.x, rect.y, rect.width, rect.height)),
            RenderElement::Body(_) => None,
        })
        .collect()
}

fn final_size(layout: &Layout, id: LayoutId) -> (i32, i32) {
    let dims = &layout.tree.get(id).dimensions;
    (dims.final_width(), dims.final_height())
}

// ========== plain text and trimming ==========

#[test]
fn test_bare_text_lands_at_origin() {
    let mut tree = new_tree();
    let root = tree.root();
    add_text(&mut tree, root,"Hello World");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("Hello World".to_string(), 0, 0)]);
}

#[test]
fn test_fixed_width_trims_text() {
    let mut tree = new_tree();
    let root = tree.root();
    let narrow = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(9)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, narrow, "Hello World");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("Hello Wor".to_string(), 0, 0)]);
    assert_eq!(final_size(&result, LayoutId::ROOT), (9, 1));
}

#[test]
fn test_text_align_pads_into_fixed_width() {
    let mut tree = new_tree();
    let root = tree.root();
    let centered = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(9)),
            ..LayoutProps::default()
        },
    );
    tree.set_style_props(
        centered,
        Some(StyleProps {
            text_align: Some(TextAlign::Center),
            ..StyleProps::default()
        }),
    );
    add_text(&mut tree, centered, "Hello");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("  Hello  ".to_string(), 0, 0)]);
}

#[test]
fn test_text_align_right() {
    let mut tree = new_tree();
    let root = tree.root();
    let right = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(9)),
            ..LayoutProps::default()
        },
    );
    tree.set_style_props(
        right,
        Some(StyleProps {
            text_align: Some(TextAlign::Right),
            ..StyleProps::default()
        }),
    );
    add_text(&mut tree, right, "Hello");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("    Hello".to_string(), 0, 0)]);
}

#[test]
fn test_adjacent_texts_share_a_line() {
    let mut tree = new_tree();
    let root = tree.root();
    add_text(&mut tree, root,"Hello ");
    add_text(&mut tree, root,"World");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [
            ("Hello ".to_string(), 0, 0),
            ("World".to_string(), 6, 0),
        ]
    );
}

#[test]
fn test_empty_text_emits_nothing_but_holds_its_line() {
    let mut tree = new_tree();
    let root = tree.root();
    add_text(&mut tree, root,"");
    add_text(&mut tree, root,"x");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("x".to_string(), 0, 0)]);
}

// ========== block and inline flow ==========

#[test]
fn test_block_views_stack_vertically() {
    let mut tree = new_tree();
    let root = tree.root();
    let first = view(&mut tree, root,LayoutProps::default());
    add_text(&mut tree, first, "one");
    let second = view(&mut tree, root,LayoutProps::default());
    add_text(&mut tree, second, "two");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("one".to_string(), 0, 0), ("two".to_string(), 0, 1)]
    );
}

#[test]
fn test_inline_views_share_a_line() {
    let mut tree = new_tree();
    let root = tree.root();
    let left = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(3)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, left, "aa");
    let right = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(4)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, right, "bb");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("aa".to_string(), 0, 0), ("bb".to_string(), 3, 0)]
    );
    assert_eq!(final_size(&result, LayoutId::ROOT), (7, 1));
}

#[test]
fn test_text_continues_after_an_inline_view() {
    let mut tree = new_tree();
    let root = tree.root();
    let chip = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(3)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, chip, "aa");
    add_text(&mut tree, root,"tail");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("aa".to_string(), 0, 0), ("tail".to_string(), 3, 0)]
    );
}

#[test]
fn test_inline_view_continues_after_text() {
    let mut tree = new_tree();
    let root = tree.root();
    add_text(&mut tree, root,"Hi ");
    let tag = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, tag, "there");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("Hi ".to_string(), 0, 0), ("there".to_string(), 3, 0)]
    );
}

#[test]
fn test_block_view_breaks_an_inline_run() {
    let mut tree = new_tree();
    let root = tree.root();
    let a = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(2)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, a, "aa");
    let b = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(2)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, b, "bb");
    let below = view(&mut tree, root,LayoutProps::default());
    add_text(&mut tree, below, "cc");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [
            ("aa".to_string(), 0, 0),
            ("bb".to_string(), 2, 0),
            ("cc".to_string(), 0, 1),
        ]
    );
}

// ========== spacing ==========

#[test]
fn test_margins_offset_and_separate_blocks() {
    let mut tree = new_tree();
    let root = tree.root();
    let boxed = view(
        &mut tree,
        root,
        LayoutProps {
            margin: Some(Edges::new(1, 2, 1, 2)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, boxed, "hi");
    let after = view(&mut tree, root,LayoutProps::default());
    add_text(&mut tree, after, "below");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("hi".to_string(), 2, 1), ("below".to_string(), 0, 3)]
    );
}

#[test]
fn test_margins_keep_inline_neighbors_apart() {
    let mut tree = new_tree();
    let root = tree.root();
    let a = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(2)),
            margin: Some(Edges::new(0, 1, 0, 0)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, a, "aa");
    let b = view(
        &mut tree,
        root,
        LayoutProps {
            display: Some(DisplayValue::Inline),
            width: Some(SizeValue::Cells(2)),
            margin: Some(Edges::new(0, 0, 0, 2)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, b, "bb");
    let result = layout(&tree);
    // Gap is a's right margin plus b's left margin; rows stay equal.
    assert_eq!(
        bodies(&result),
        [("aa".to_string(), 0, 0), ("bb".to_string(), 5, 0)]
    );
}

#[test]
fn test_padding_insets_content_and_grows_the_box() {
    let mut tree = new_tree();
    let root = tree.root();
    let padded = view(
        &mut tree,
        root,
        LayoutProps {
            padding: Some(Edges::uniform(1)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, padded, "pad");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("pad".to_string(), 1, 1)]);
    assert_eq!(final_size(&result, LayoutId::ROOT), (5, 3));
}

// ========== size constraints ==========

#[test]
fn test_fixed_height_clips_later_lines() {
    let mut tree = new_tree();
    let root = tree.root();
    let clipped = view(
        &mut tree,
        root,
        LayoutProps {
            height: Some(SizeValue::Cells(1)),
            ..LayoutProps::default()
        },
    );
    let first = view(&mut tree, clipped, LayoutProps::default());
    add_text(&mut tree, first, "first");
    add_text(&mut tree, clipped, "second");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("first".to_string(), 0, 0)]);
    assert_eq!(final_size(&result, LayoutId::ROOT), (6, 1));
}

#[test]
fn test_clipped_view_suppresses_its_background_too() {
    let mut tree = new_tree();
    let root = tree.root();
    let clipped = view(
        &mut tree,
        root,
        LayoutProps {
            height: Some(SizeValue::Cells(1)),
            ..LayoutProps::default()
        },
    );
    let first = view(&mut tree, clipped, LayoutProps::default());
    add_text(&mut tree, first, "a");
    let hidden = view(&mut tree, clipped, LayoutProps::default());
    tree.set_style_props(
        hidden,
        Some(StyleProps {
            background_color: Some(Color::Red),
            ..StyleProps::default()
        }),
    );
    add_text(&mut tree, hidden, "b");
    let result = layout(&tree);
    assert_eq!(bodies(&result), [("a".to_string(), 0, 0)]);
    assert!(boxes(&result).is_empty());
}

#[test]
fn test_unsized_view_fills_its_constrained_parent() {
    let mut tree = new_tree();
    let root = tree.root();
    let outer = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(10)),
            height: Some(SizeValue::Cells(3)),
            ..LayoutProps::default()
        },
    );
    let fill = view(&mut tree, outer, LayoutProps::default());
    tree.set_style_props(
        fill,
        Some(StyleProps {
            background_color: Some(Color::Blue),
            ..StyleProps::default()
        }),
    );
    let result = layout(&tree);
    // The child inherits the parent's caps as its own size.
    assert_eq!(boxes(&result), [(0, 0, 10, 3)]);
    assert_eq!(
        bodies(&result),
        [
            ("          ".to_string(), 0, 0),
            ("          ".to_string(), 0, 1),
            ("          ".to_string(), 0, 2),
        ]
    );
}

// ========== percentages ==========

#[test]
fn test_percentages_resolve_against_the_parent() {
    let mut tree = new_tree();
    let root = tree.root();
    let outer = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(10)),
            height: Some(SizeValue::Cells(4)),
            ..LayoutProps::default()
        },
    );
    let _ = view(
        &mut tree,
        outer,
        LayoutProps {
            width: Some(SizeValue::Percent(50)),
            height: Some(SizeValue::Percent(50)),
            ..LayoutProps::default()
        },
    );
    let result = layout(&tree);
    let outer_id = result.tree.get(LayoutId::ROOT).children[0];
    let half_id = result.tree.get(outer_id).children[0];
    assert_eq!(final_size(&result, half_id), (5, 2));
}

#[test]
fn test_percentages_round_down() {
    let mut tree = new_tree();
    let root = tree.root();
    let outer = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(10)),
            ..LayoutProps::default()
        },
    );
    let _ = view(
        &mut tree,
        outer,
        LayoutProps {
            width: Some(SizeValue::Percent(45)),
            ..LayoutProps::default()
        },
    );
    let result = layout(&tree);
    let outer_id = result.tree.get(LayoutId::ROOT).children[0];
    let child_id = result.tree.get(outer_id).children[0];
    assert_eq!(result.tree.get(child_id).dimensions.final_width(), 4);
}

#[test]
fn test_percentage_of_declared_auto_parent_is_an_error() {
    let mut tree = new_tree();
    let root = tree.root();
    let auto_parent = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Auto),
            ..LayoutProps::default()
        },
    );
    let pct = view(
        &mut tree,
        auto_parent,
        LayoutProps {
            width: Some(SizeValue::Percent(30)),
            ..LayoutProps::default()
        },
    );
    let err = calculate_layout(&tree).unwrap_err();
    assert_eq!(
        err,
        LayoutError::AmbiguousPercentage {
            node: pct,
            axis: Axis::Width,
        }
    );
}

// ========== borders ==========

#[test]
fn test_border_ring_wraps_the_content_box() {
    let mut tree = new_tree();
    let root = tree.root();
    let framed = view(&mut tree, root,LayoutProps::default());
    tree.set_border_props(framed, Some(BorderProps::default()));
    add_text(&mut tree, framed, "box");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [
            ("   ".to_string(), 1, 1),
            ("┌───┐".to_string(), 0, 0),
            ("│".to_string(), 0, 1),
            ("│".to_string(), 4, 1),
            ("└───┘".to_string(), 0, 2),
            ("box".to_string(), 1, 1),
        ]
    );
    // The ring adds two cells on each axis.
    assert_eq!(final_size(&result, LayoutId::ROOT), (5, 3));
}

// ========== absolute positioning and layers ==========

#[test]
fn test_absolute_views_leave_the_flow() {
    let mut tree = new_tree();
    let root = tree.root();
    add_text(&mut tree, root,"flow");
    let popup = view(
        &mut tree,
        root,
        LayoutProps {
            position: Some(PositionType::Absolute),
            left: Some(10),
            top: Some(2),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, popup, "popup");
    add_text(&mut tree, root,"after");
    let result = layout(&tree);
    // Flow text keeps its line; the popup paints last from layer 1.
    assert_eq!(
        bodies(&result),
        [
            ("flow".to_string(), 0, 0),
            ("after".to_string(), 4, 0),
            ("popup".to_string(), 10, 2),
        ]
    );
    // The root still covers the absolute extent.
    assert_eq!(final_size(&result, LayoutId::ROOT), (15, 3));
}

#[test]
fn test_layers_paint_in_ascending_z() {
    let mut tree = new_tree();
    let root = tree.root();
    let upper = view(
        &mut tree,
        root,
        LayoutProps {
            position: Some(PositionType::Absolute),
            z_index: Some(3),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, upper, "upper");
    let lower = view(
        &mut tree,
        root,
        LayoutProps {
            position: Some(PositionType::Absolute),
            z_index: Some(1),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, lower, "lower");
    let result = layout(&tree);
    assert_eq!(
        bodies(&result),
        [("lower".to_string(), 0, 0), ("upper".to_string(), 0, 0)]
    );
}

// ========== inherited text style ==========

#[test]
fn test_text_inherits_ancestor_style() {
    let mut tree = new_tree();
    let root = tree.root();
    let outer = tree.create_view();
    tree.append_child(root,outer);
    tree.set_style_props(
        outer,
        Some(StyleProps {
            color: Some(Color::Red),
            text_transform: Some(TextTransform::Uppercase),
            ..StyleProps::default()
        }),
    );
    add_text(&mut tree, outer, "hi");
    let result = layout(&tree);
    let RenderElement::Body(body) = &result.elements[0] else {
        panic!("expected a text run");
    };
    assert_eq!(body.value, "HI");
    assert_eq!(body.style.unwrap().color, Some(Color::Red));
}

#[test]
fn test_nearest_ancestor_style_wins() {
    let mut tree = new_tree();
    let root = tree.root();
    let outer = tree.create_view();
    tree.append_child(root,outer);
    tree.set_style_props(
        outer,
        Some(StyleProps {
            color: Some(Color::Red),
            ..StyleProps::default()
        }),
    );
    let inner = tree.create_view();
    tree.append_child(outer, inner);
    tree.set_style_props(
        inner,
        Some(StyleProps {
            color: Some(Color::Green),
            ..StyleProps::default()
        }),
    );
    add_text(&mut tree, inner, "deep");
    let result = layout(&tree);
    let RenderElement::Body(body) = &result.elements[0] else {
        panic!("expected a text run");
    };
    assert_eq!(body.style.unwrap().color, Some(Color::Green));
}

// ========== malformed trees ==========

#[test]
fn test_a_second_root_cannot_be_laid_out() {
    let mut tree = new_tree();
    let root = tree.root();
    let stray = tree.alloc(NodeKind::Root);
    tree.append_child(root,stray);
    let err = calculate_layout(&tree).unwrap_err();
    assert_eq!(err, LayoutError::RootAsChild { node: stray });
}

// ========== the layout tree ==========

#[test]
fn test_layout_tree_records_every_node() {
    let mut tree = new_tree();
    let root = tree.root();
    let narrow = view(
        &mut tree,
        root,
        LayoutProps {
            width: Some(SizeValue::Cells(9)),
            ..LayoutProps::default()
        },
    );
    add_text(&mut tree, narrow, "Hello");
    let result = layout(&tree);
    assert_eq!(result.tree.len(), 3);
    let json = result.tree.to_json();
    assert_eq!(json["kind"], "root");
    assert_eq!(json["children"][0]["kind"], "container");
    assert_eq!(json["children"][0]["dimensions"]["final"]["width"], 9);
    assert_eq!(json["children"][0]["children"][0]["kind"], "unit");
}
