//! Event Emission Bridge - From scope-internal interaction signals to
//! host-visible notification events.
//!
//! A bridge listens for a low-level interaction signal confined to an
//! instance's isolated scope (a change to an input slot's value) and
//! re-emits it as a [`NotificationEvent`] dispatched from the instance
//! node: bubbling, boundary-crossing, payload carrying the raw current
//! value.
//!
//! Bridges perform no debouncing, throttling, or validation. Every raw
//! signal produces exactly one event, synchronously, in signal order.

use std::rc::Rc;

use tracing::trace;

use crate::component::ComponentInstance;
use crate::events::NotificationEvent;

/// Bridge declaration carried by a component spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeSpec {
    /// Input slot inside the scope whose value changes are bridged.
    pub source_slot: &'static str,
    /// Emitted event type name. Fixed per component type; lower-case and
    /// hyphen-free by convention to avoid colliding with host events.
    pub event: &'static str,
}

/// Attach every bridge of the instance's type to its scope.
///
/// Called once at scope-attachment time; a second call is a no-op, so
/// reconnecting an instance never stacks duplicate listeners.
pub(crate) fn attach_all(instance: &Rc<ComponentInstance>) {
    if !instance.mark_bridged() {
        return;
    }

    for spec in instance.bridges().to_vec() {
        let weak = Rc::downgrade(instance);
        instance.scope().on_input(
            spec.source_slot,
            Rc::new(move |value| {
                let Some(instance) = weak.upgrade() else {
                    return;
                };
                trace!(event = spec.event, value, "bridging interaction signal");
                instance.dispatch(NotificationEvent::new(spec.event, value));
            }),
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
