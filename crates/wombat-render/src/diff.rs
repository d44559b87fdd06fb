//! Incremental rendering for interactive front ends.

use std::collections::BTreeMap;

use wombat_layout::LayoutError;
use wombat_tree::NodeTree;

use crate::render_ansi;

/// Renders a tree repeatedly and reports only the rows that changed.
///
/// A front end repainting in place can move the cursor to each reported
/// row instead of redrawing the whole frame. Rows that existed in the
/// previous frame but not in the current one are reported as empty
/// strings so the caller can clear them.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    previous: Vec<String>,
}

impl DiffRenderer {
    /// Creates a renderer with no previous frame; the first call to
    /// [`render`](Self::render) reports every row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: Vec::new(),
        }
    }

    /// Renders the tree and returns the rows that differ from the
    /// previous frame, keyed by row index.
    ///
    /// # Errors
    /// Returns an error when layout fails for the tree.
    pub fn render(&mut self, tree: &NodeTree) -> Result<BTreeMap<usize, String>, LayoutError> {
        let rows = render_ansi(tree)?;
        let mut changed = BTreeMap::new();
        for (index, row) in rows.iter().enumerate() {
            if self.previous.get(index) != Some(row) {
                let _ = changed.insert(index, row.clone());
            }
        }
        for index in rows.len()..self.previous.len() {
            let _ = changed.insert(index, String::new());
        }
        self.previous = rows;
        Ok(changed)
    }
}
