//! Shadow Scope - The isolated rendering scope owned by one instance.
//!
//! A [`ShadowScope`] is created by deep-cloning a component type's
//! template at instantiation time. It is exclusively owned: no nodes, no
//! stylesheet state, and no listeners are shared across instances, and
//! the scope lives exactly as long as the instance that owns it.
//!
//! The scope exposes three surfaces:
//!
//! - **slot writes** - [`ShadowScope::apply`] consumes a
//!   [`RenderState`] produced by the synchronization engine; writes to
//!   slots the clone does not contain are skipped per-slot
//! - **interaction signals** - input nodes accept value changes and
//!   notify scope-internal listeners (the attachment point for event
//!   emission bridges)
//! - **computed style** - class resolution against the private
//!   stylesheet, with theme parameters as the only host import

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::sync::{RenderState, SlotWrite};
use crate::template::{NodeKind, Stylesheet, Template, TemplateNode};

/// Scope-internal listener for input value changes.
pub type InputCallback = Rc<dyn Fn(&str)>;

// =============================================================================
// Scope Nodes
// =============================================================================

/// Live per-instance state of one cloned node.
#[derive(Debug, Clone)]
struct ScopeNode {
    tag: &'static str,
    slot: Option<&'static str>,
    /// Static classes from the template. The first is the base class a
    /// class projection resets to.
    static_classes: Vec<String>,
    /// At most one dynamic class beyond the static base.
    dynamic_class: Option<String>,
    text: String,
    kind: ScopeNodeKind,
    children: Vec<usize>,
}

#[derive(Debug, Clone)]
enum ScopeNodeKind {
    Element,
    Input { placeholder: String, value: String },
}

/// Observable state of one render slot, used to compare rendered output
/// across projection passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Slot id.
    pub slot: &'static str,
    /// Visible text content.
    pub text: String,
    /// Full class list: static classes plus the dynamic class, if any.
    pub classes: Vec<String>,
}

// =============================================================================
// Shadow Scope
// =============================================================================

/// Private render subtree of a component instance.
pub struct ShadowScope {
    nodes: RefCell<Vec<ScopeNode>>,
    slots: FxHashMap<&'static str, usize>,
    stylesheet: Stylesheet,
    input_listeners: RefCell<FxHashMap<&'static str, Vec<InputCallback>>>,
}

impl ShadowScope {
    /// Deep-clone a template into a fresh scope.
    pub fn attach(template: &Template) -> Self {
        let mut nodes = Vec::new();
        let mut slots = FxHashMap::default();
        clone_node(&template.fragment, &mut nodes, &mut slots);

        Self {
            nodes: RefCell::new(nodes),
            slots,
            stylesheet: template.stylesheet.clone(),
            input_listeners: RefCell::new(FxHashMap::default()),
        }
    }

    /// Number of addressable slots in the clone.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the clone contains a slot with this id.
    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    // =========================================================================
    // Slot writes
    // =========================================================================

    /// Apply a projection pass to the scope.
    ///
    /// Writes addressing a slot absent from the clone indicate a
    /// template/binding mismatch, not a recoverable runtime condition;
    /// they are skipped per-slot and never abort the pass.
    pub fn apply(&self, state: &RenderState) {
        for write in &state.writes {
            let Some(&index) = self.slots.get(write.slot()) else {
                debug!(slot = write.slot(), "projection skipped missing slot");
                continue;
            };

            let mut nodes = self.nodes.borrow_mut();
            let node = &mut nodes[index];
            match write {
                SlotWrite::Text { value, .. } => {
                    node.text = value.clone();
                }
                SlotWrite::Class { class, .. } => {
                    // Reset to base first so at most one dynamic class
                    // is ever present.
                    node.dynamic_class = class.clone();
                }
            }
        }
    }

    /// Visible text of a slot.
    pub fn slot_text(&self, slot: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        self.slots.get(slot).map(|&i| nodes[i].text.clone())
    }

    /// Full class list of a slot: static classes, then the dynamic class.
    pub fn slot_classes(&self, slot: &str) -> Option<Vec<String>> {
        let nodes = self.nodes.borrow();
        self.slots.get(slot).map(|&i| {
            let node = &nodes[i];
            let mut classes = node.static_classes.clone();
            if let Some(dynamic) = &node.dynamic_class {
                classes.push(dynamic.clone());
            }
            classes
        })
    }

    /// Snapshot of every slot's observable state, ordered by slot id.
    pub fn snapshot(&self) -> Vec<SlotSnapshot> {
        let nodes = self.nodes.borrow();
        let mut snapshots: Vec<SlotSnapshot> = self
            .slots
            .iter()
            .map(|(&slot, &i)| {
                let node = &nodes[i];
                let mut classes = node.static_classes.clone();
                if let Some(dynamic) = &node.dynamic_class {
                    classes.push(dynamic.clone());
                }
                SlotSnapshot {
                    slot,
                    text: node.text.clone(),
                    classes,
                }
            })
            .collect();
        snapshots.sort_by_key(|s| s.slot);
        snapshots
    }

    // =========================================================================
    // Interaction signals
    // =========================================================================

    /// Register a scope-internal listener for value changes of an input
    /// slot. Listeners fire synchronously, in registration order, once
    /// per signal.
    pub fn on_input(&self, slot: &'static str, callback: InputCallback) {
        self.input_listeners
            .borrow_mut()
            .entry(slot)
            .or_default()
            .push(callback);
    }

    /// Replace an input slot's value and fire the interaction signal.
    ///
    /// Non-input or missing slots are ignored (logged at debug level).
    pub fn set_input_value(&self, slot: &str, value: &str) {
        let updated = {
            let mut nodes = self.nodes.borrow_mut();
            match self.slots.get(slot) {
                Some(&index) => match &mut nodes[index].kind {
                    ScopeNodeKind::Input { value: current, .. } => {
                        *current = value.to_string();
                        true
                    }
                    ScopeNodeKind::Element => false,
                },
                None => false,
            }
        };

        if updated {
            self.fire_input(slot, value);
        } else {
            debug!(slot, "input write ignored: no input node with this slot");
        }
    }

    /// Append text to an input slot's value and fire the interaction
    /// signal, as a user typing would.
    pub fn insert_text(&self, slot: &str, text: &str) {
        let Some(mut value) = self.input_value(slot) else {
            debug!(slot, "insert ignored: no input node with this slot");
            return;
        };
        value.push_str(text);
        self.set_input_value(slot, &value);
    }

    /// Current value of an input slot.
    pub fn input_value(&self, slot: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        self.slots.get(slot).and_then(|&i| match &nodes[i].kind {
            ScopeNodeKind::Input { value, .. } => Some(value.clone()),
            ScopeNodeKind::Element => None,
        })
    }

    /// Placeholder of an input slot.
    pub fn input_placeholder(&self, slot: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        self.slots.get(slot).and_then(|&i| match &nodes[i].kind {
            ScopeNodeKind::Input { placeholder, .. } => Some(placeholder.clone()),
            ScopeNodeKind::Element => None,
        })
    }

    fn fire_input(&self, slot: &str, value: &str) {
        // Clone listeners out so a callback can re-enter the scope.
        let listeners: Vec<InputCallback> = self
            .input_listeners
            .borrow()
            .get(slot)
            .map(|l| l.to_vec())
            .unwrap_or_default();

        for listener in listeners {
            listener(value);
        }
    }

    // =========================================================================
    // Computed style
    // =========================================================================

    /// Computed style declarations of a slot, resolved against the
    /// scope's private stylesheet and the current theme parameters.
    pub fn computed_style(&self, slot: &str) -> Option<Vec<(&'static str, String)>> {
        let classes = self.slot_classes(slot)?;
        Some(
            self.stylesheet
                .computed_style(classes.iter().map(String::as_str)),
        )
    }

    // =========================================================================
    // Outline
    // =========================================================================

    /// Render the scope as an indented text outline, one line per node.
    ///
    /// Debugging/demo aid; not part of the projection contract.
    pub fn outline(&self) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        outline_node(&nodes, 0, 0, &mut out);
        out
    }
}

fn outline_node(nodes: &[ScopeNode], index: usize, depth: usize, out: &mut String) {
    let node = &nodes[index];

    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.tag);
    if let Some(slot) = node.slot {
        out.push('#');
        out.push_str(slot);
    }
    let mut classes = node.static_classes.clone();
    if let Some(dynamic) = &node.dynamic_class {
        classes.push(dynamic.clone());
    }
    for class in &classes {
        out.push('.');
        out.push_str(class);
    }
    let text = match &node.kind {
        ScopeNodeKind::Input { value, placeholder } => {
            if value.is_empty() { placeholder } else { value }
        }
        ScopeNodeKind::Element => &node.text,
    };
    if !text.is_empty() {
        out.push_str(" \"");
        out.push_str(text);
        out.push('"');
    }
    out.push('\n');

    for &child in &node.children {
        outline_node(nodes, child, depth + 1, out);
    }
}

fn clone_node(
    template: &TemplateNode,
    nodes: &mut Vec<ScopeNode>,
    slots: &mut FxHashMap<&'static str, usize>,
) -> usize {
    let index = nodes.len();
    nodes.push(ScopeNode {
        tag: template.tag,
        slot: template.slot,
        static_classes: template.classes.clone(),
        dynamic_class: None,
        text: template.text.clone(),
        kind: match &template.kind {
            NodeKind::Element => ScopeNodeKind::Element,
            NodeKind::Input { placeholder } => ScopeNodeKind::Input {
                placeholder: placeholder.clone(),
                value: String::new(),
            },
        },
        children: Vec::new(),
    });

    if let Some(slot) = template.slot {
        slots.insert(slot, index);
    }

    for child in &template.children {
        let child_index = clone_node(child, nodes, slots);
        nodes[index].children.push(child_index);
    }

    index
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{Binding, project};
    use crate::template::StyleValue;
    use std::cell::RefCell as StdRefCell;

    fn test_template() -> Template {
        let fragment = TemplateNode::element("div")
            .class("card-footer")
            .child(TemplateNode::slot("span", "status").class("status"))
            .child(TemplateNode::slot("h3", "gate"))
            .child(TemplateNode::input("query").placeholder("Search..."));

        let styles = Stylesheet::new()
            .rule("status", [("color", StyleValue::param("card-text-primary", "#00201B"))])
            .rule("status-delayed", [("color", StyleValue::lit("#C0392B"))]);

        Template::new(fragment, styles)
    }

    #[test]
    fn test_attach_indexes_slots() {
        let scope = ShadowScope::attach(&test_template());
        assert_eq!(scope.slot_count(), 3);
        assert!(scope.has_slot("status"));
        assert!(scope.has_slot("gate"));
        assert!(scope.has_slot("query"));
        assert!(!scope.has_slot("logo"));
    }

    #[test]
    fn test_scopes_do_not_share_state() {
        let template = test_template();
        let a = ShadowScope::attach(&template);
        let b = ShadowScope::attach(&template);

        a.apply(&RenderState {
            writes: vec![SlotWrite::Text {
                slot: "gate",
                value: "57A".to_string(),
            }],
        });

        assert_eq!(a.slot_text("gate").as_deref(), Some("57A"));
        assert_eq!(b.slot_text("gate").as_deref(), Some(""));
    }

    #[test]
    fn test_class_write_resets_before_apply() {
        let scope = ShadowScope::attach(&test_template());

        scope.apply(&RenderState {
            writes: vec![SlotWrite::Class {
                slot: "status",
                class: Some("status-ontime".to_string()),
            }],
        });
        assert_eq!(
            scope.slot_classes("status").unwrap(),
            vec!["status".to_string(), "status-ontime".to_string()]
        );

        scope.apply(&RenderState {
            writes: vec![SlotWrite::Class {
                slot: "status",
                class: Some("status-delayed".to_string()),
            }],
        });
        assert_eq!(
            scope.slot_classes("status").unwrap(),
            vec!["status".to_string(), "status-delayed".to_string()]
        );
    }

    #[test]
    fn test_missing_slot_is_skipped_not_fatal() {
        let scope = ShadowScope::attach(&test_template());

        scope.apply(&RenderState {
            writes: vec![
                SlotWrite::Text {
                    slot: "no-such-slot",
                    value: "lost".to_string(),
                },
                SlotWrite::Text {
                    slot: "gate",
                    value: "12".to_string(),
                },
            ],
        });

        // The pass continued past the missing slot.
        assert_eq!(scope.slot_text("gate").as_deref(), Some("12"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let scope = ShadowScope::attach(&test_template());
        let bindings = [
            Binding::Text {
                attr: "status-text",
                slot: "status",
            },
            Binding::Class {
                attr: "status-class",
                slot: "status",
            },
        ];
        let attrs = [
            ("status-text".to_string(), "On Time".to_string()),
            ("status-class".to_string(), "status-ontime".to_string()),
        ]
        .into_iter()
        .collect();

        let state = project(&bindings, &attrs);
        scope.apply(&state);
        let first = scope.snapshot();
        scope.apply(&state);
        assert_eq!(first, scope.snapshot());
    }

    #[test]
    fn test_input_signal_order_and_payloads() {
        let scope = ShadowScope::attach(&test_template());
        let seen: Rc<StdRefCell<Vec<String>>> = Rc::new(StdRefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        scope.on_input("query", Rc::new(move |value| {
            seen_clone.borrow_mut().push(value.to_string());
        }));

        for ch in ["f", "j", "2", "3"] {
            scope.insert_text("query", ch);
        }

        assert_eq!(*seen.borrow(), vec!["f", "fj", "fj2", "fj23"]);
        assert_eq!(scope.input_value("query").as_deref(), Some("fj23"));
    }

    #[test]
    fn test_input_write_to_element_slot_is_ignored() {
        let scope = ShadowScope::attach(&test_template());
        scope.set_input_value("status", "nope");
        assert_eq!(scope.input_value("status"), None);
        assert_eq!(scope.slot_text("status").as_deref(), Some(""));
    }

    #[test]
    fn test_outline_shows_slots_and_classes() {
        let scope = ShadowScope::attach(&test_template());
        scope.apply(&RenderState {
            writes: vec![
                SlotWrite::Text {
                    slot: "status",
                    value: "On Time".to_string(),
                },
                SlotWrite::Class {
                    slot: "status",
                    class: Some("status-ontime".to_string()),
                },
            ],
        });

        let outline = scope.outline();
        assert!(outline.contains("span#status.status.status-ontime \"On Time\""));
        assert!(outline.contains("input#query \"Search...\""));
    }

    #[test]
    fn test_computed_style_follows_dynamic_class() {
        crate::theme::reset_theme();
        let scope = ShadowScope::attach(&test_template());

        let base = scope.computed_style("status").unwrap();
        assert_eq!(base, vec![("color", "#00201B".to_string())]);

        scope.apply(&RenderState {
            writes: vec![SlotWrite::Class {
                slot: "status",
                class: Some("status-delayed".to_string()),
            }],
        });
        let delayed = scope.computed_style("status").unwrap();
        assert_eq!(delayed, vec![("color", "#C0392B".to_string())]);
    }
}
