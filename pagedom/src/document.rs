//! Element arena, markers, listener table and event dispatch.

use crate::element::{Element, Node, NodeId};
use crate::error::DomError;
use crate::event::{Event, EventKind};
use crate::selector::Selector;

/// The element tree and its attribute markers.
///
/// Nodes are stored in document (pre-order) order, so index order is
/// document order and the root is always `NodeId(0)`.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn from_root(root: &Element) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.push(root, None);
        tree
    }

    fn push(&mut self, element: &Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_element(element, parent));
        for child in &element.children {
            let child_id = self.push(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.node(id)?.children)
    }

    /// The node itself followed by each ancestor up to the root.
    pub fn ancestors_inclusive(&self, id: NodeId) -> Result<Vec<NodeId>, DomError> {
        let mut path = vec![id];
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent)?.parent;
        }
        Ok(path)
    }

    /// All nodes in the document matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| selector.matches(node))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// First strict descendant of `scope` matching `selector`, in document order.
    pub fn query_selector(
        &self,
        scope: NodeId,
        selector: &Selector,
    ) -> Result<Option<NodeId>, DomError> {
        let node = self.node(scope)?;
        for &child in &node.children {
            if selector.matches(self.node(child)?) {
                return Ok(Some(child));
            }
            if let Some(found) = self.query_selector(child, selector)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    // Markers
    pub fn has_attribute(&self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.node(id)?.has_attribute(name))
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        Ok(self.node(id)?.attribute(name))
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.node_mut(id)?
            .attributes
            .insert(name.to_string(), value.into());
        Ok(())
    }

    /// Returns whether the attribute was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.node_mut(id)?.attributes.remove(name).is_some())
    }
}

/// Something that reacts to events on one node.
///
/// A listener holds whatever handles it needs as plain data; during
/// dispatch it gets mutable access to the tree through [`EventContext`].
pub trait Listener {
    /// Identity used to drop duplicate registrations on the same node and channel.
    fn name(&self) -> &str;

    /// Node the listener acts on. Part of its identity together with
    /// [`name`](Listener::name): same name, different subject is a different listener.
    fn subject(&self) -> Option<NodeId> {
        None
    }

    fn handle(&self, ctx: &mut EventContext<'_>) -> Result<(), DomError>;
}

struct Registration {
    node: NodeId,
    kind: EventKind,
    listener: Box<dyn Listener>,
}

/// What a listener sees while an event is being dispatched.
pub struct EventContext<'a> {
    tree: &'a mut Tree,
    event: Event,
    target: NodeId,
    current_target: NodeId,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventContext<'_> {
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Node the event was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listener is currently running.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn tree(&self) -> &Tree {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut *self.tree
    }

    /// Suppress the environment's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop bubbling after the current node's listeners have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Result of [`Document::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// A listener called [`EventContext::prevent_default`].
    pub default_prevented: bool,
    /// Number of listeners invoked.
    pub handled: usize,
}

/// A page: element tree plus registered listeners.
pub struct Document {
    tree: Tree,
    listeners: Vec<Registration>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let tree = Tree::from_root(&root);
        log::debug!("[document] built tree with {} nodes", tree.len());
        Self {
            tree,
            listeners: Vec::new(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.tree.node(id)
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.tree.query_selector_all(selector)
    }

    pub fn query_selector(
        &self,
        scope: NodeId,
        selector: &Selector,
    ) -> Result<Option<NodeId>, DomError> {
        self.tree.query_selector(scope, selector)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> Result<bool, DomError> {
        self.tree.has_attribute(id, name)
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        self.tree.get_attribute(id, name)
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.tree.set_attribute(id, name, value)
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        self.tree.remove_attribute(id, name)
    }

    /// Register `listener` on `node` for `kind`.
    ///
    /// Returns `Ok(false)` without registering when a listener with the same
    /// name and subject is already attached to that node and channel.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: Box<dyn Listener>,
    ) -> Result<bool, DomError> {
        self.tree.node(node)?;

        let duplicate = self
            .listeners
            .iter()
            .any(|r| {
                r.node == node
                    && r.kind == kind
                    && r.listener.name() == listener.name()
                    && r.listener.subject() == listener.subject()
            });
        if duplicate {
            log::trace!(
                "[document] skipping duplicate {} listener {:?} on {}",
                kind,
                listener.name(),
                node
            );
            return Ok(false);
        }

        self.listeners.push(Registration {
            node,
            kind,
            listener,
        });
        Ok(true)
    }

    /// Number of listeners attached to `node` for `kind`.
    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|r| r.node == node && r.kind == kind)
            .count()
    }

    /// Deliver `event` to `target`, then bubble it through the ancestors.
    ///
    /// Listeners on each node run in registration order. Bubbling stops after
    /// the node on which a listener called [`EventContext::stop_propagation`].
    pub fn dispatch(&mut self, target: NodeId, event: Event) -> Result<DispatchOutcome, DomError> {
        let path = self.tree.ancestors_inclusive(target)?;
        let kind = event.kind();

        let mut ctx = EventContext {
            tree: &mut self.tree,
            event,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        };
        let mut handled = 0;

        for current in path {
            ctx.current_target = current;
            for registration in self
                .listeners
                .iter()
                .filter(|r| r.node == current && r.kind == kind)
            {
                registration.listener.handle(&mut ctx)?;
                handled += 1;
            }
            if ctx.propagation_stopped {
                break;
            }
        }

        log::trace!(
            "[document] dispatched {} to {} handled={} default_prevented={}",
            kind,
            target,
            handled,
            ctx.default_prevented
        );

        Ok(DispatchOutcome {
            default_prevented: ctx.default_prevented,
            handled,
        })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.tree.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
