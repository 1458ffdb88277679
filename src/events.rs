//! Notification Events - Outward signals from component instances.
//!
//! A [`NotificationEvent`] is a one-shot signal created by an event
//! emission bridge and handed to the host's notification channel. It is
//! created, dispatched, then discarded - never retained or replayed.
//!
//! Propagation is controlled by two flags, mirroring the two boundaries
//! an event can cross:
//!
//! - `BUBBLES` - the event walks upward through the host ancestor chain
//! - `COMPOSED` - the event may leave the instance's isolated scope
//!
//! # Example
//!
//! ```ignore
//! use cardkit::events::NotificationEvent;
//!
//! let event = NotificationEvent::new("searchtermchange", "fj23");
//! assert!(event.bubbles());
//! assert!(event.composed());
//! assert_eq!(event.payload.value, "fj23");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;

bitflags! {
    /// Propagation flags for a [`NotificationEvent`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventFlags: u8 {
        /// Propagate upward through the host's ancestor chain.
        const BUBBLES = 1 << 0;
        /// Cross the isolation boundary outward to ancestors outside the
        /// instance's private scope.
        const COMPOSED = 1 << 1;
    }
}

// =============================================================================
// Notification Event
// =============================================================================

/// Normalized payload carried by a notification event.
///
/// For interaction bridges this is the current raw value of the
/// interaction source at the moment the signal fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    /// Raw value from the interaction source.
    pub value: String,
}

/// An immutable, one-shot signal emitted by a component instance.
///
/// Event type names are a fixed string contract per component type,
/// chosen lower-case and hyphen-free to stay collision-resistant with
/// host event names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Event type name (e.g. `searchtermchange`).
    pub name: &'static str,
    /// Normalized payload.
    pub payload: EventPayload,
    /// Propagation flags.
    pub flags: EventFlags,
}

impl NotificationEvent {
    /// Create a bubbling, boundary-crossing event with the given payload
    /// value. This is the shape every interaction bridge emits.
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            payload: EventPayload { value: value.into() },
            flags: EventFlags::BUBBLES | EventFlags::COMPOSED,
        }
    }

    /// Create an event with explicit propagation flags.
    pub fn with_flags(name: &'static str, value: impl Into<String>, flags: EventFlags) -> Self {
        Self {
            name,
            payload: EventPayload { value: value.into() },
            flags,
        }
    }

    /// Whether the event walks the host ancestor chain.
    pub fn bubbles(&self) -> bool {
        self.flags.contains(EventFlags::BUBBLES)
    }

    /// Whether the event may leave the isolated scope it originated in.
    pub fn composed(&self) -> bool {
        self.flags.contains(EventFlags::COMPOSED)
    }
}

// =============================================================================
// Listener Set
// =============================================================================

/// Callback invoked when a matching event reaches a listener target.
pub type EventCallback = Rc<dyn Fn(&NotificationEvent)>;

/// Cleanup function returned by listener registration.
///
/// Call it to unregister the listener.
pub type Cleanup = Box<dyn FnOnce()>;

/// A set of event listeners attached to one target (a component instance
/// or a host node).
///
/// Entries are kept as `Option` so removal never shifts listener ids;
/// removed slots are simply tombstoned.
#[derive(Default)]
pub struct ListenerSet {
    entries: RefCell<Vec<Option<(&'static str, EventCallback)>>>,
}

impl ListenerSet {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for events named `name`. Returns the entry id.
    pub fn add(&self, name: &'static str, callback: EventCallback) -> usize {
        let mut entries = self.entries.borrow_mut();
        entries.push(Some((name, callback)));
        entries.len() - 1
    }

    /// Remove the listener with the given entry id.
    pub fn remove(&self, id: usize) {
        let mut entries = self.entries.borrow_mut();
        if let Some(entry) = entries.get_mut(id) {
            *entry = None;
        }
    }

    /// Deliver an event to every listener registered for its name.
    ///
    /// Listeners are cloned out before invocation so a callback may
    /// register or remove listeners without holding the borrow.
    pub fn deliver(&self, event: &NotificationEvent) {
        let matching: Vec<EventCallback> = self
            .entries
            .borrow()
            .iter()
            .flatten()
            .filter(|(name, _)| *name == event.name)
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in matching {
            callback(event);
        }
    }

    /// Number of live listeners (test helper).
    pub fn len(&self) -> usize {
        self.entries.borrow().iter().flatten().count()
    }

    /// Whether no live listeners remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
