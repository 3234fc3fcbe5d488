pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod selector;

pub use document::{DispatchOutcome, Document, EventContext, Listener, Tree};
pub use element::{Element, Node, NodeId};
pub use error::{DomError, SelectorError};
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use focus::{parse_tabindex, sequential_focus_order, FocusState};
pub use selector::Selector;
