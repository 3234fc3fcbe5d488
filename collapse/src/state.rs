use pagedom::{DomError, NodeId, Tree};

/// Marker attribute whose presence means the panel is open.
pub const OPEN_ATTR: &str = "open";

/// Visible state of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Derive the state from the panel's markers. Only presence counts;
    /// `open="false"` is still open.
    pub fn read(tree: &Tree, panel: NodeId) -> Result<Self, DomError> {
        Ok(if tree.has_attribute(panel, OPEN_ATTR)? {
            Self::Open
        } else {
            Self::Closed
        })
    }

    /// Render the state back onto the panel's markers.
    pub fn write(self, tree: &mut Tree, panel: NodeId) -> Result<(), DomError> {
        match self {
            Self::Open => tree.set_attribute(panel, OPEN_ATTR, ""),
            Self::Closed => tree.remove_attribute(panel, OPEN_ATTR).map(|_| ()),
        }
    }
}
