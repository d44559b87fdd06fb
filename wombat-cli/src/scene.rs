//! JSON scene files and their conversion into a node tree.
//!
//! A scene is `{"width": W, "height": H, "root": [child...]}` where each
//! child is either a text leaf `{"text": "..."}` or a view object carrying
//! optional `layout`, `style` and `border` prop records plus `children`.
//! Prop records use the same keyword and shorthand forms the engine
//! serializes, so a dumped scene loads back unchanged.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use wombat_common::warning::{Component, warn_once};
use wombat_tree::{NodeId, NodeTree, Size};

/// A parsed scene file.
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// Canvas width in cells.
    width: i32,
    /// Canvas height in rows; `-1` keeps the canvas unbounded.
    height: i32,
    /// Children of the canvas root.
    #[serde(default)]
    root: Vec<SceneNode>,
}

/// One node of a scene: a text leaf or a view with optional prop records.
///
/// Prop records stay as raw JSON here; they are converted one record at a
/// time while the tree is built so a malformed record degrades to "no
/// props" with a warning instead of rejecting the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SceneNode {
    /// `{"text": "..."}`
    Text {
        /// The text body.
        text: String,
    },
    /// A view object.
    View {
        /// Flow, sizing and positioning props.
        #[serde(default)]
        layout: Option<serde_json::Value>,
        /// Inherited text styling props.
        #[serde(default)]
        style: Option<serde_json::Value>,
        /// Border decoration, object or shorthand string.
        #[serde(default)]
        border: Option<serde_json::Value>,
        /// Nested scene nodes.
        #[serde(default)]
        children: Vec<SceneNode>,
    },
}

/// Read and parse a scene file.
pub fn load(path: &Path) -> Result<Scene> {
    let raw = fs::read_to_string(path)?;
    let scene = serde_json::from_str(&raw)?;
    Ok(scene)
}

/// The built-in demo scene: a bordered title bar, an inline badge row and
/// an absolutely positioned popup on a higher layer.
pub fn demo() -> Scene {
    Scene {
        width: 40,
        height: 12,
        root: vec![
            SceneNode::View {
                layout: Some(json!({"width": 36, "margin": "0 1"})),
                style: Some(json!({
                    "color": "bright-white",
                    "font-weight": "bold",
                    "text-align": "center",
                })),
                border: Some(json!("double-line cyan")),
                children: vec![SceneNode::Text {
                    text: "wombat demo".to_string(),
                }],
            },
            SceneNode::View {
                layout: Some(json!({"margin": 1})),
                style: None,
                border: None,
                children: vec![
                    SceneNode::View {
                        layout: Some(json!({"display": "inline", "margin": "0 1 0 0"})),
                        style: Some(json!({"background-color": "green", "color": "black"})),
                        border: None,
                        children: vec![SceneNode::Text {
                            text: " PASS ".to_string(),
                        }],
                    },
                    SceneNode::Text {
                        text: "layout flows inline".to_string(),
                    },
                ],
            },
            SceneNode::View {
                layout: Some(json!({
                    "position": "absolute",
                    "left": 23,
                    "top": 8,
                    "z-index": 2,
                    "width": 14,
                })),
                style: Some(json!({
                    "background-color": "blue",
                    "color": "bright-white",
                    "text-align": "center",
                })),
                border: Some(json!("single-line")),
                children: vec![SceneNode::Text {
                    text: "popup".to_string(),
                }],
            },
        ],
    }
}

impl Scene {
    /// Build the node tree this scene describes.
    pub fn into_tree(self) -> NodeTree {
        let mut tree = NodeTree::new(Size::new(self.width, self.height));
        let root = tree.root();
        for child in self.root {
            attach(&mut tree, root, child);
        }
        tree
    }
}

fn attach(tree: &mut NodeTree, parent: NodeId, node: SceneNode) {
    match node {
        SceneNode::Text { text } => {
            let id = tree.create_text(&text);
            tree.append_child(parent, id);
        }
        SceneNode::View {
            layout,
            style,
            border,
            children,
        } => {
            let id = tree.create_view();
            tree.set_layout_props(id, parse_props("layout", layout));
            tree.set_style_props(id, parse_props("style", style));
            tree.set_border_props(id, parse_props("border", border));
            tree.append_child(parent, id);
            for child in children {
                attach(tree, id, child);
            }
        }
    }
}

/// Convert one prop record, warning and dropping it when it is malformed
/// (unknown color keyword, junk shorthand token) so the rest of the scene
/// still renders.
fn parse_props<T: DeserializeOwned>(class: &str, value: Option<serde_json::Value>) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(props) => Some(props),
        Err(err) => {
            warn_once(Component::Cli, &format!("ignoring {class} props: {err}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use wombat_tree::{Color, NodeKind, SizeValue};

    use super::*;

    #[test]
    fn test_scene_round_trip_into_tree() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "width": 10,
                "height": 4,
                "root": [
                    {"text": "plain"},
                    {
                        "layout": {"width": "50%"},
                        "style": {"color": "red"},
                        "children": [{"text": "styled"}]
                    }
                ]
            }"#,
        )
        .unwrap();
        let tree = scene.into_tree();

        assert_eq!(tree.size(), Size::new(10, 4));
        let children = tree.children(tree.root()).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(tree.as_text(children[0]), Some("plain"));

        let data = tree.as_view(children[1]).expect("second child is a view");
        assert_eq!(
            data.layout_props.and_then(|props| props.width),
            Some(SizeValue::Percent(50))
        );
        assert_eq!(
            data.style_props.and_then(|props| props.color),
            Some(Color::Red)
        );
        assert_eq!(tree.children(children[1]).len(), 1);
    }

    #[test]
    fn test_malformed_props_degrade_to_none() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "width": 10,
                "height": 2,
                "root": [
                    {"style": {"color": "blurple"}, "children": [{"text": "still here"}]}
                ]
            }"#,
        )
        .unwrap();
        let tree = scene.into_tree();

        let children = tree.children(tree.root()).to_vec();
        let data = tree.as_view(children[0]).expect("child is a view");
        assert!(data.style_props.is_none());
        assert_eq!(tree.children(children[0]).len(), 1);
    }

    #[test]
    fn test_demo_scene_builds() {
        let tree = demo().into_tree();
        assert_eq!(tree.size(), Size::new(40, 12));
        assert_eq!(tree.children(tree.root()).len(), 3);
        for &child in tree.children(tree.root()) {
            assert!(matches!(tree.kind(child), NodeKind::View(_)));
        }
    }
}
