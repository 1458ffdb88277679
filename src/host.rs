//! Host Tree - The hosting context components attach to.
//!
//! A minimal render tree standing in for the host page: [`HostNode`]
//! containers own component instances, carry event listeners, and form
//! the ancestor chain bubbling dispatch walks.
//!
//! Insertion connects an instance (initial projection runs); removal
//! disconnects it. The instance's scope lives exactly as long as the
//! host keeps the instance in the tree - dropping the last host
//! reference releases it with no explicit teardown.
//!
//! # Example
//!
//! ```ignore
//! use cardkit::{host::HostNode, registry, widgets};
//!
//! widgets::search_card::define().unwrap();
//!
//! let page = HostNode::root("page");
//! let search = page.append("search-card").unwrap();
//!
//! let _cleanup = page.on("searchtermchange", std::rc::Rc::new(|event| {
//!     println!("term: {}", event.payload.value);
//! }));
//!
//! search.scope().insert_text("flight-search-input", "NZ1");
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::ComponentInstance;
use crate::error::RegistryError;
use crate::events::{Cleanup, EventCallback, ListenerSet, NotificationEvent};
use crate::registry;

/// One child of a host node.
pub enum HostChild {
    /// A nested container.
    Node(Rc<HostNode>),
    /// A component instance.
    Component(Rc<ComponentInstance>),
}

/// A container node in the host's render tree.
pub struct HostNode {
    name: String,
    parent: RefCell<Weak<HostNode>>,
    children: RefCell<Vec<HostChild>>,
    listeners: ListenerSet,
}

impl HostNode {
    /// Create a root container.
    pub fn root(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            listeners: ListenerSet::new(),
        })
    }

    /// Node name (debugging only).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a nested container.
    pub fn append_node(self: &Rc<Self>, name: impl Into<String>) -> Rc<HostNode> {
        let child = Rc::new(HostNode {
            name: name.into(),
            parent: RefCell::new(Rc::downgrade(self)),
            children: RefCell::new(Vec::new()),
            listeners: ListenerSet::new(),
        });
        self.children
            .borrow_mut()
            .push(HostChild::Node(child.clone()));
        child
    }

    /// Insert a component instance, connecting it: the instance links to
    /// this node as its host parent and runs its initial projection.
    pub fn append_component(self: &Rc<Self>, instance: Rc<ComponentInstance>) {
        instance.set_parent(self);
        self.children
            .borrow_mut()
            .push(HostChild::Component(instance.clone()));
        instance.connected();
    }

    /// Create an instance of the type registered under `tag` and insert
    /// it here.
    pub fn append(self: &Rc<Self>, tag: &str) -> Result<Rc<ComponentInstance>, RegistryError> {
        let instance = registry::create(tag)?;
        self.append_component(instance.clone());
        Ok(instance)
    }

    /// Remove a component instance, disconnecting it. The host reference
    /// is dropped; if it was the last one, the instance and its scope
    /// are released.
    pub fn remove_component(&self, instance: &Rc<ComponentInstance>) {
        self.children.borrow_mut().retain(|child| match child {
            HostChild::Component(c) => !Rc::ptr_eq(c, instance),
            HostChild::Node(_) => true,
        });
        instance.disconnected();
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Listen for notification events reaching this node. Returns a
    /// cleanup function that unregisters the listener.
    pub fn on(self: &Rc<Self>, name: &'static str, callback: EventCallback) -> Cleanup {
        let id = self.listeners.add(name, callback);
        let weak = Rc::downgrade(self);
        Box::new(move || {
            if let Some(node) = weak.upgrade() {
                node.listeners.remove(id);
            }
        })
    }

    /// Deliver a bubbling event to this node's listeners.
    pub(crate) fn deliver(&self, event: &NotificationEvent) {
        self.listeners.deliver(event);
    }

    /// Parent container, if any.
    pub(crate) fn parent(&self) -> Option<Rc<HostNode>> {
        self.parent.borrow().upgrade()
    }
}

// =============================================================================
// Tests
// =============================================================================
