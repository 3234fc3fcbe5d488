use crate::document::{Document, Tree};
use crate::element::NodeId;

/// Parse a `tabindex` marker the way browsers do: an optionally signed
/// integer, surrounding whitespace ignored. Anything else counts as absent.
pub fn parse_tabindex(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Collect the sequential (Tab) navigation order of a tree.
///
/// Elements with a positive `tabindex` come first in ascending order, then
/// elements with `tabindex="0"`, each group in document order. Negative or
/// unparseable values are left out.
pub fn sequential_focus_order(doc: &Document) -> Vec<NodeId> {
    collect_focusable(doc.tree())
}

fn collect_focusable(tree: &Tree) -> Vec<NodeId> {
    let mut candidates: Vec<(i32, NodeId)> = (0..tree.len())
        .filter_map(|i| {
            let id = NodeId(i);
            let value = tree.node(id).ok()?.attribute("tabindex")?;
            let index = parse_tabindex(value)?;
            (index >= 0).then_some((index, id))
        })
        .collect();

    // Positive indices first, zero last; stable sort keeps document order within a group.
    candidates.sort_by_key(|(index, _)| (*index == 0, *index));
    candidates.into_iter().map(|(_, id)| id).collect()
}

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus an element.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next element in sequential order (Tab navigation).
    /// Returns the newly focused element if focus changed.
    pub fn focus_next(&mut self, doc: &Document) -> Option<NodeId> {
        let order = sequential_focus_order(doc);
        if order.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => order[0],
            Some(current) => match order.iter().position(|id| *id == current) {
                Some(i) => order[(i + 1) % order.len()],
                None => order[0],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous element in sequential order (Shift+Tab navigation).
    /// Returns the newly focused element if focus changed.
    pub fn focus_prev(&mut self, doc: &Document) -> Option<NodeId> {
        let order = sequential_focus_order(doc);
        if order.is_empty() {
            return None;
        }

        let last = order[order.len() - 1];
        let new_focus = match self.focused {
            None => last,
            Some(current) => match order.iter().position(|id| *id == current) {
                Some(0) | None => last,
                Some(i) => order[i - 1],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }
}
