//! Wiring of panels to click and key listeners.

use std::rc::Rc;

use pagedom::{
    Document, DomError, Event, EventContext, EventKind, Key, Listener, NodeId, Selector, Tree,
};

use crate::config::BinderConfig;
use crate::error::ConfigError;
use crate::state::PanelState;

const TABINDEX_ATTR: &str = "tabindex";

/// Binds toggle behavior to every panel in a document.
#[derive(Debug, Clone)]
pub struct ToggleBinder {
    container: Selector,
    title: Selector,
    default_tabindex: String,
    trigger_keys: Rc<[Key]>,
}

/// Counts from one [`ToggleBinder::initialize`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitReport {
    /// Containers matched by the container selector.
    pub containers: usize,
    /// Title click listeners newly attached.
    pub titles_bound: usize,
    /// Containers that received the default `tabindex`.
    pub tabindex_set: usize,
    /// Container key listeners newly attached.
    pub keys_bound: usize,
}

impl Default for ToggleBinder {
    fn default() -> Self {
        Self {
            container: Selector::class("collapse"),
            title: Selector::class("collapse-title"),
            default_tabindex: "0".to_string(),
            trigger_keys: Rc::from([Key::Enter, Key::SPACE]),
        }
    }
}

impl ToggleBinder {
    pub fn new(config: BinderConfig) -> Result<Self, ConfigError> {
        if config.trigger_keys.is_empty() {
            return Err(ConfigError::NoTriggerKeys);
        }
        Ok(Self {
            container: config.container()?,
            title: config.title()?,
            default_tabindex: config.default_tabindex,
            trigger_keys: Rc::from(config.trigger_keys),
        })
    }

    pub fn container_selector(&self) -> &Selector {
        &self.container
    }

    pub fn title_selector(&self) -> &Selector {
        &self.title
    }

    pub fn trigger_keys(&self) -> &[Key] {
        &self.trigger_keys
    }

    /// Find every panel in `doc` and attach its listeners.
    ///
    /// Safe to run more than once: a listener already attached for the same
    /// panel is not attached again, and an existing `tabindex` is never
    /// overwritten, whatever its value. A document without panels is a no-op.
    pub fn initialize(&self, doc: &mut Document) -> InitReport {
        let containers = doc.query_selector_all(&self.container);
        let mut report = InitReport {
            containers: containers.len(),
            ..Default::default()
        };

        for container in containers {
            // Handles come from `doc` itself, so the tree lookups cannot miss.
            if let Err(err) = self.bind_container(doc, container, &mut report) {
                log::warn!("[binder] skipping {container}: {err}");
            }
        }

        log::info!(
            "[binder] initialized {} panels ({} titles, {} tabindex set, {} key handlers)",
            report.containers,
            report.titles_bound,
            report.tabindex_set,
            report.keys_bound
        );
        report
    }

    fn bind_container(
        &self,
        doc: &mut Document,
        container: NodeId,
        report: &mut InitReport,
    ) -> Result<(), DomError> {
        if let Some(title) = doc.query_selector(container, &self.title)? {
            if doc.add_event_listener(
                title,
                EventKind::Click,
                Box::new(TitleClick { container }),
            )? {
                report.titles_bound += 1;
                log::debug!("[binder] title {title} toggles {container}");
            }
        }

        if !doc.has_attribute(container, TABINDEX_ATTR)? {
            doc.set_attribute(container, TABINDEX_ATTR, self.default_tabindex.clone())?;
            report.tabindex_set += 1;
        }

        let key_listener = ContainerKeyDown {
            container,
            trigger_keys: Rc::clone(&self.trigger_keys),
        };
        if doc.add_event_listener(container, EventKind::KeyDown, Box::new(key_listener))? {
            report.keys_bound += 1;
        }
        Ok(())
    }
}

/// Flip a panel between open and closed. Returns the new state.
pub fn toggle(tree: &mut Tree, container: NodeId) -> Result<PanelState, DomError> {
    let next = PanelState::read(tree, container)?.toggled();
    next.write(tree, container)?;
    log::debug!("[binder] {container} -> {next:?}");
    Ok(next)
}

/// Toggle `container` if `key` is one of `trigger_keys`, suppressing the
/// event's default action. Any other key leaves both untouched and returns `None`.
pub fn key_toggle(
    ctx: &mut EventContext<'_>,
    container: NodeId,
    key: Key,
    trigger_keys: &[Key],
) -> Result<Option<PanelState>, DomError> {
    if !trigger_keys.contains(&key) {
        return Ok(None);
    }
    ctx.prevent_default();
    toggle(ctx.tree_mut(), container).map(Some)
}

/// Click listener on a panel title.
#[derive(Debug, Clone)]
pub struct TitleClick {
    pub container: NodeId,
}

impl TitleClick {
    pub const NAME: &'static str = "collapse:title-click";
}

impl Listener for TitleClick {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn subject(&self) -> Option<NodeId> {
        Some(self.container)
    }

    fn handle(&self, ctx: &mut EventContext<'_>) -> Result<(), DomError> {
        toggle(ctx.tree_mut(), self.container).map(|_| ())
    }
}

/// Key listener on a panel container.
#[derive(Debug, Clone)]
pub struct ContainerKeyDown {
    pub container: NodeId,
    pub trigger_keys: Rc<[Key]>,
}

impl ContainerKeyDown {
    pub const NAME: &'static str = "collapse:keydown";
}

impl Listener for ContainerKeyDown {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn subject(&self) -> Option<NodeId> {
        Some(self.container)
    }

    fn handle(&self, ctx: &mut EventContext<'_>) -> Result<(), DomError> {
        if let Event::Key { key, .. } = *ctx.event() {
            key_toggle(ctx, self.container, key, &self.trigger_keys)?;
        }
        Ok(())
    }
}
