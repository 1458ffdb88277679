//! Attribute Synchronization - The pure projection at the heart of the
//! component model.
//!
//! A component type declares [`Binding`]s from observed attributes to
//! named render slots. [`project`] turns the current attribute map into
//! a [`RenderState`]: the complete, ordered list of slot writes for this
//! pass. It is:
//!
//! - **pure** - a function of the attribute map alone, no scope access
//! - **total** - every binding produces a write on every pass, not only
//!   the binding whose attribute changed
//! - **idempotent** - the same attribute map always yields an equal
//!   `RenderState`
//!
//! Unset attributes and empty strings are equivalent: text slots go
//! empty, optional dynamic classes are withheld. Class values pass
//! through verbatim - the engine keeps no enumeration, and an unknown
//! class simply matches no style rule.

use rustc_hash::FxHashMap;

/// Current attribute values of one instance (absent = unset).
pub type AttributeMap = FxHashMap<String, String>;

// =============================================================================
// Bindings
// =============================================================================

/// A declarative mapping from one observed attribute to one render slot.
///
/// Two bindings may target the same slot (e.g. `status-text` writes the
/// status slot's text while `status-class` selects its dynamic class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Set the slot's visible text to the attribute's value, or to the
    /// empty string when unset.
    Text {
        /// Source attribute name.
        attr: &'static str,
        /// Target slot id.
        slot: &'static str,
    },
    /// Reset the slot to its base class, then add the attribute's value
    /// as the single dynamic class when set and non-empty.
    Class {
        /// Source attribute name.
        attr: &'static str,
        /// Target slot id.
        slot: &'static str,
    },
}

// =============================================================================
// Render State
// =============================================================================

/// One slot write produced by a projection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotWrite {
    /// Set the slot's text content.
    Text {
        /// Target slot id.
        slot: &'static str,
        /// New text content (empty when the attribute is unset).
        value: String,
    },
    /// Reset the slot to its base class, then add `class` if present.
    Class {
        /// Target slot id.
        slot: &'static str,
        /// Dynamic class to apply, or `None` to leave only the base.
        class: Option<String>,
    },
}

impl SlotWrite {
    /// Target slot id of this write.
    pub fn slot(&self) -> &'static str {
        match self {
            Self::Text { slot, .. } | Self::Class { slot, .. } => slot,
        }
    }
}

/// The complete output of one projection pass, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Slot writes to apply, in order.
    pub writes: Vec<SlotWrite>,
}

// =============================================================================
// Projection
// =============================================================================

/// Project the current attribute values through the type's bindings.
///
/// This is the single reusable projection function both lifecycle entry
/// points (creation and attribute change) funnel into.
pub fn project(bindings: &[Binding], attrs: &AttributeMap) -> RenderState {
    let mut writes = Vec::with_capacity(bindings.len());

    for binding in bindings {
        match binding {
            Binding::Text { attr, slot } => {
                let value = attrs.get(*attr).cloned().unwrap_or_default();
                writes.push(SlotWrite::Text { slot, value });
            }
            Binding::Class { attr, slot } => {
                let class = attrs.get(*attr).filter(|v| !v.is_empty()).cloned();
                writes.push(SlotWrite::Class { slot, class });
            }
        }
    }

    RenderState { writes }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BINDINGS: &[Binding] = &[
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
    ];

    fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_projection_is_total() {
        // Only status-text is set, but every binding produces a write.
        let state = project(BINDINGS, &attrs(&[("status-text", "On Time")]));
        assert_eq!(state.writes.len(), BINDINGS.len());
        assert_eq!(
            state.writes[0],
            SlotWrite::Text {
                slot: "status",
                value: "On Time".to_string()
            }
        );
        assert_eq!(
            state.writes[1],
            SlotWrite::Class {
                slot: "status",
                class: None
            }
        );
        assert_eq!(
            state.writes[2],
            SlotWrite::Text {
                slot: "gate",
                value: String::new()
            }
        );
    }

    #[test]
    fn test_empty_string_equals_unset() {
        let explicit = project(BINDINGS, &attrs(&[("status-class", ""), ("gate", "")]));
        let implicit = project(BINDINGS, &attrs(&[]));
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_unknown_class_passes_through() {
        let state = project(BINDINGS, &attrs(&[("status-class", "status-cancelled")]));
        assert!(state.writes.contains(&SlotWrite::Class {
            slot: "status",
            class: Some("status-cancelled".to_string()),
        }));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let map = attrs(&[("status-text", "Delayed"), ("status-class", "status-delayed")]);
        assert_eq!(project(BINDINGS, &map), project(BINDINGS, &map));
    }

    #[test]
    fn test_projection_depends_on_final_state_only() {
        // Same final map, different mutation histories.
        let mut a = attrs(&[("gate", "12")]);
        a.insert("gate".to_string(), "57A".to_string());
        let b = attrs(&[("gate", "57A")]);
        assert_eq!(project(BINDINGS, &a), project(BINDINGS, &b));
    }
}
