//! Paint-order bookkeeping across z layers.
//!
//! Elements are grouped into coarse layers keyed by z index. Within a
//! layer, a parent's own box must be painted before everything its
//! subtree produced, but the box's final size is only known after the
//! subtree has been walked. The walker therefore reserves a slot in the
//! layer when it enters a container and splices the finished elements
//! into that slot when it leaves.

use std::collections::BTreeMap;

use crate::element::RenderElement;

/// A reserved position inside one z layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    z: i32,
    position: usize,
}

/// Render elements bucketed by z layer.
#[derive(Debug, Default)]
pub struct Hierarchy {
    layers: BTreeMap<i32, Vec<RenderElement>>,
}

impl Hierarchy {
    /// An empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the end of a layer.
    pub fn push(&mut self, z: i32, element: RenderElement) {
        self.layers.entry(z).or_default().push(element);
    }

    /// Reserves the current end of a layer so elements can be spliced in
    /// there later, ahead of anything pushed in between.
    pub fn reserve(&mut self, z: i32) -> Slot {
        let position = self.layers.entry(z).or_default().len();
        Slot { z, position }
    }

    /// Splices `elements` into the layer at a previously reserved slot.
    pub fn fill(&mut self, slot: Slot, elements: Vec<RenderElement>) {
        let layer = self.layers.entry(slot.z).or_default();
        for (offset, element) in elements.into_iter().enumerate() {
            layer.insert(slot.position + offset, element);
        }
    }

    /// Flattens the layers into final paint order: ascending z, then
    /// insertion order within each layer. Text runs that ended up empty
    /// after trimming are dropped.
    #[must_use]
    pub fn into_elements(self) -> Vec<RenderElement> {
        self.layers
            .into_values()
            .flatten()
            .filter(|element| match element {
                RenderElement::Box(_) => true,
                RenderElement::Body(body) => !body.value.is_empty(),
            })
            .collect()
    }
}
