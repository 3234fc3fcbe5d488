mod node;

pub use node::{Element, Node, NodeId};
