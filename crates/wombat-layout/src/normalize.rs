//! Turns raw layout props into the values the walker consumes.
//!
//! Props are optional everywhere; normalization fills in the defaults
//! once so the walker never reasons about `None`. It also resolves
//! percentage sizes against the parent, which is the one place resolution
//! can fail.

use wombat_tree::{DisplayValue, Edges, LayoutProps, NodeId, PositionType, SizeValue};

use crate::error::{Axis, LayoutError};
use crate::placement::Placement;

/// A view's layout props with every default applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedLayout {
    /// Padding, clamped to non-negative sides.
    pub inset: Edges,
    /// Margin, clamped to non-negative sides.
    pub outset: Edges,
    /// Whether the view flows on the current line.
    pub is_inline: bool,
    /// Whether the view is positioned out of flow.
    pub is_absolute: bool,
    /// Declared width, still unresolved.
    pub width: Option<SizeValue>,
    /// Declared height, still unresolved.
    pub height: Option<SizeValue>,
    /// Canvas position for absolute views. Unset coordinates default to
    /// zero and the paint layer to one, so an absolute view always paints
    /// above the in-flow layer.
    pub out_of_flow: Placement,
}

/// Normalizes a view's props; `None` props mean a plain block view.
#[must_use]
pub fn normalize_props(props: Option<&LayoutProps>) -> NormalizedLayout {
    let Some(props) = props else {
        return NormalizedLayout {
            out_of_flow: Placement::out_of_flow(0, 0, 1),
            ..NormalizedLayout::default()
        };
    };
    let is_absolute = props.position == Some(PositionType::Absolute);
    NormalizedLayout {
        inset: props.padding.unwrap_or(Edges::ZERO).clamped(),
        outset: props.margin.unwrap_or(Edges::ZERO).clamped(),
        // Absolute positioning overrides display; an absolute view never
        // continues a line.
        is_inline: !is_absolute && props.display == Some(DisplayValue::Inline),
        is_absolute,
        width: props.width,
        height: props.height,
        out_of_flow: Placement::out_of_flow(
            props.left.unwrap_or(0),
            props.top.unwrap_or(0),
            props.z_index.unwrap_or(1),
        ),
    }
}

/// Resolves a declared size to cells.
///
/// `Auto` and unset sizes resolve to `None`, meaning natural sizing.
/// Percentages take their base from `parent_base`, the parent's final
/// size on the axis at the time the child enters layout, rounding down.
/// They fail when the parent declared that axis as `auto`, because a
/// natural size is not known until the children, including this one, have
/// been measured.
pub fn resolve_size(
    value: Option<SizeValue>,
    parent_base: i32,
    parent_declared_auto: bool,
    node: NodeId,
    axis: Axis,
) -> Result<Option<i32>, LayoutError> {
    match value {
        None | Some(SizeValue::Auto) => Ok(None),
        Some(SizeValue::Cells(cells)) => Ok(Some(cells)),
        Some(SizeValue::Percent(percent)) => {
            if parent_declared_auto {
                return Err(LayoutError::AmbiguousPercentage { node, axis });
            }
            Ok(Some(parent_base * i32::from(percent) / 100))
        }
    }
}
