//! Components - Type specs and live instances.
//!
//! A [`ComponentSpec`] is the definition of a component type: tag name,
//! the fixed observed-attribute list, the template cloned per instance,
//! the projection bindings, and any event emission bridges.
//!
//! A [`ComponentInstance`] is one live occurrence. It owns its isolated
//! [`ShadowScope`] and its attribute map exclusively. Lifecycle is
//! driven by two explicit entry points, both funneling into the single
//! pure projection function in [`crate::sync`]:
//!
//! - [`ComponentInstance::connected`] - on host-tree insertion
//! - [`ComponentInstance::set_attribute`] / `remove_attribute` - on
//!   observed changes (old != new, including unset transitions)
//!
//! # Example
//!
//! ```ignore
//! use cardkit::{registry, widgets};
//!
//! widgets::flight_card::define().unwrap();
//! let card = registry::create("flight-card").unwrap();
//! card.set_attribute("gate", "57A");
//! assert_eq!(card.scope().slot_text("gate").as_deref(), Some("57A"));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::bridge::BridgeSpec;
use crate::events::{Cleanup, EventCallback, ListenerSet, NotificationEvent};
use crate::host::HostNode;
use crate::scope::ShadowScope;
use crate::sync::{self, AttributeMap, Binding, RenderState};
use crate::template::Template;

// =============================================================================
// Component Spec
// =============================================================================

/// Definition of a component type.
///
/// Built once, registered under its tag name, and shared read-only by
/// every instance of the type.
pub struct ComponentSpec {
    /// Unique tag name (e.g. `flight-card`).
    pub tag: &'static str,
    /// Fixed, ordered list of observed attribute names. Defined once per
    /// type; never changes at runtime.
    pub observed: &'static [&'static str],
    /// Template cloned into each instance's isolated scope.
    pub template: Template,
    /// Projection bindings from observed attributes to render slots.
    pub bindings: Vec<Binding>,
    /// Event emission bridges attached once per instance.
    pub bridges: Vec<BridgeSpec>,
}

impl ComponentSpec {
    /// The fixed observed-attribute list of this type.
    pub fn observed_attributes(&self) -> &'static [&'static str] {
        self.observed
    }

    /// Whether changes to `name` trigger projection.
    pub fn observes(&self, name: &str) -> bool {
        self.observed.iter().any(|observed| *observed == name)
    }
}

// =============================================================================
// Component Instance
// =============================================================================

/// One live occurrence of a component type.
pub struct ComponentInstance {
    spec: Rc<ComponentSpec>,
    scope: ShadowScope,
    attrs: RefCell<AttributeMap>,
    listeners: ListenerSet,
    parent: RefCell<Weak<HostNode>>,
    connected: Cell<bool>,
    bridged: Cell<bool>,
}

impl ComponentInstance {
    /// Instantiate a component type: clone the template into a fresh
    /// isolated scope and attach the type's bridges to it.
    ///
    /// Bridges attach exactly once, here at scope-attachment time; they
    /// are never re-attached by projection or reconnection.
    pub fn new(spec: Rc<ComponentSpec>) -> Rc<Self> {
        let instance = Rc::new(Self {
            scope: ShadowScope::attach(&spec.template),
            spec,
            attrs: RefCell::new(AttributeMap::default()),
            listeners: ListenerSet::new(),
            parent: RefCell::new(Weak::new()),
            connected: Cell::new(false),
            bridged: Cell::new(false),
        });

        crate::bridge::attach_all(&instance);
        trace!(tag = instance.spec.tag, "instantiated component");
        instance
    }

    /// Tag name of this instance's type.
    pub fn tag(&self) -> &'static str {
        self.spec.tag
    }

    /// The fixed observed-attribute list of this instance's type.
    pub fn observed_attributes(&self) -> &'static [&'static str] {
        self.spec.observed_attributes()
    }

    /// The instance's isolated rendering scope.
    ///
    /// Also the surface interaction drivers use to deliver signals
    /// (e.g. typing into an input slot).
    pub fn scope(&self) -> &ShadowScope {
        &self.scope
    }

    /// Bridge declarations of this instance's type.
    pub(crate) fn bridges(&self) -> &[BridgeSpec] {
        &self.spec.bridges
    }

    /// Marks bridges as attached; returns false if they already were.
    pub(crate) fn mark_bridged(&self) -> bool {
        !self.bridged.replace(true)
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Current value of an attribute, or `None` when unset.
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    /// Set an attribute.
    ///
    /// Unobserved attributes are stored but never trigger projection.
    /// Observed attributes trigger a full projection pass when the value
    /// actually changed.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        let old = self
            .attrs
            .borrow_mut()
            .insert(name.clone(), value.clone());

        if self.spec.observes(&name) && old.as_deref() != Some(value.as_str()) {
            self.on_attribute_change(&name, old.as_deref(), Some(&value));
        }
    }

    /// Remove an attribute. Equivalent to setting the empty string for
    /// projection purposes.
    pub fn remove_attribute(&self, name: &str) {
        let old = self.attrs.borrow_mut().remove(name);

        if self.spec.observes(name) && old.is_some() {
            self.on_attribute_change(name, old.as_deref(), None);
        }
    }

    // =========================================================================
    // Lifecycle entry points
    // =========================================================================

    /// Entry point for host-tree insertion: run the initial projection.
    pub fn connected(&self) {
        self.connected.set(true);
        debug!(tag = self.spec.tag, "component connected");
        self.project();
    }

    /// Entry point for host-tree removal.
    ///
    /// The scope is owned by the instance and released with it; nothing
    /// external was acquired, so there is no teardown beyond clearing
    /// the host link.
    pub fn disconnected(&self) {
        self.connected.set(false);
        *self.parent.borrow_mut() = Weak::new();
    }

    /// Entry point for an observed attribute change.
    fn on_attribute_change(&self, name: &str, old: Option<&str>, new: Option<&str>) {
        trace!(
            tag = self.spec.tag,
            attr = name,
            ?old,
            ?new,
            "observed attribute changed"
        );
        self.project();
    }

    /// Whether the instance is currently attached to a host tree.
    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Run one full projection pass: every binding, from the current
    /// attribute map, applied to the scope. Returns the computed render
    /// state. Idempotent given unchanged attributes.
    pub fn project(&self) -> RenderState {
        let state = sync::project(&self.spec.bindings, &self.attrs.borrow());
        self.scope.apply(&state);
        state
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Listen for notification events dispatched from this instance.
    /// Returns a cleanup function that unregisters the listener.
    pub fn on(self: &Rc<Self>, name: &'static str, callback: EventCallback) -> Cleanup {
        let id = self.listeners.add(name, callback);
        let weak = Rc::downgrade(self);
        Box::new(move || {
            if let Some(instance) = weak.upgrade() {
                instance.listeners.remove(id);
            }
        })
    }

    /// Dispatch a notification event from this instance node.
    ///
    /// The event must be composed to escape the isolated scope at all;
    /// a composed event reaches listeners on the instance, and walks the
    /// host ancestor chain when it also bubbles. Dispatch is synchronous
    /// and runs to completion before returning.
    pub fn dispatch(&self, event: NotificationEvent) {
        if !event.composed() {
            trace!(name = event.name, "event confined to scope");
            return;
        }

        self.listeners.deliver(&event);

        if event.bubbles() {
            let mut current = self.parent.borrow().upgrade();
            while let Some(node) = current {
                node.deliver(&event);
                current = node.parent();
            }
        }
    }

    /// Link the instance to its host parent (set on insertion).
    pub(crate) fn set_parent(&self, parent: &Rc<HostNode>) {
        *self.parent.borrow_mut() = Rc::downgrade(parent);
    }
}

impl std::fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("tag", &self.spec.tag)
            .field("connected", &self.connected.get())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Stylesheet, TemplateNode};

    fn status_spec() -> Rc<ComponentSpec> {
        let fragment = TemplateNode::element("div")
            .child(TemplateNode::slot("span", "status").class("status"))
            .child(TemplateNode::slot("h3", "gate"));

        Rc::new(ComponentSpec {
            tag: "status-card",
            observed: &["status-text", "status-class", "gate"],
            template: Template::new(fragment, Stylesheet::new()),
            bindings: vec![
                Binding::Text {
                    attr: "status-text",
                    slot: "status",
                },
                Binding::Class {
                    attr: "status-class",
                    slot: "status",
                },
                Binding::Text {
                    attr: "gate",
                    slot: "gate",
                },
            ],
            bridges: Vec::new(),
        })
    }

    #[test]
    fn test_observed_attributes_invariant_across_instances() {
        let spec = status_spec();
        let a = ComponentInstance::new(spec.clone());
        let b = ComponentInstance::new(spec);
        assert_eq!(a.observed_attributes(), b.observed_attributes());
        assert_eq!(
            a.observed_attributes(),
            &["status-text", "status-class", "gate"]
        );
    }

    #[test]
    fn test_observed_change_projects() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("gate", "57A");
        assert_eq!(card.scope().slot_text("gate").as_deref(), Some("57A"));
    }

    #[test]
    fn test_unobserved_attribute_stored_but_inert() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("data-row", "7");
        assert_eq!(card.get_attribute("data-row").as_deref(), Some("7"));
        // No binding, no projection side effects; gate text untouched
        // until something observed changes.
        assert_eq!(card.scope().slot_text("gate").as_deref(), Some(""));
    }

    #[test]
    fn test_unchanged_value_does_not_reproject() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("gate", "57A");
        let before = card.scope().snapshot();
        // Same value again: old == new, no projection, identical state.
        card.set_attribute("gate", "57A");
        assert_eq!(before, card.scope().snapshot());
    }

    #[test]
    fn test_removal_renders_empty_not_a_literal() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("gate", "12");
        card.remove_attribute("gate");
        assert_eq!(card.scope().slot_text("gate").as_deref(), Some(""));
    }

    #[test]
    fn test_projection_function_of_final_state() {
        let card = ComponentInstance::new(status_spec());
        for value in ["1", "2", "3", "57A"] {
            card.set_attribute("gate", value);
        }

        let direct = ComponentInstance::new(status_spec());
        direct.set_attribute("gate", "57A");

        assert_eq!(card.scope().snapshot(), direct.scope().snapshot());
    }

    #[test]
    fn test_status_class_exclusivity_scenario() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("status-text", "On Time");
        card.set_attribute("status-class", "status-ontime");

        assert_eq!(card.scope().slot_text("status").as_deref(), Some("On Time"));
        assert_eq!(
            card.scope().slot_classes("status").unwrap(),
            vec!["status".to_string(), "status-ontime".to_string()]
        );

        card.set_attribute("status-class", "status-delayed");
        assert_eq!(card.scope().slot_text("status").as_deref(), Some("On Time"));
        assert_eq!(
            card.scope().slot_classes("status").unwrap(),
            vec!["status".to_string(), "status-delayed".to_string()]
        );
    }

    #[test]
    fn test_project_twice_identical() {
        let card = ComponentInstance::new(status_spec());
        card.set_attribute("status-text", "Boarding");

        let first_state = card.project();
        let first_snapshot = card.scope().snapshot();
        let second_state = card.project();

        assert_eq!(first_state, second_state);
        assert_eq!(first_snapshot, card.scope().snapshot());
    }

    #[test]
    fn test_non_composed_event_stays_inside() {
        use crate::events::EventFlags;
        use std::cell::Cell;

        let card = ComponentInstance::new(status_spec());
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let _cleanup = card.on("ping", Rc::new(move |_| hits_clone.set(hits_clone.get() + 1)));

        card.dispatch(NotificationEvent::with_flags("ping", "", EventFlags::BUBBLES));
        assert_eq!(hits.get(), 0);

        card.dispatch(NotificationEvent::new("ping", ""));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_debug_names_the_tag() {
        let card = ComponentInstance::new(status_spec());
        let rendered = format!("{card:?}");
        assert!(rendered.contains("status-card"));
        assert!(rendered.contains("connected: false"));
    }

    #[test]
    fn test_listener_cleanup() {
        use std::cell::Cell;

        let card = ComponentInstance::new(status_spec());
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let cleanup = card.on("ping", Rc::new(move |_| hits_clone.set(hits_clone.get() + 1)));

        card.dispatch(NotificationEvent::new("ping", ""));
        cleanup();
        card.dispatch(NotificationEvent::new("ping", ""));
        assert_eq!(hits.get(), 1);
    }
}
