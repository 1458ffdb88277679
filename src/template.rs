//! Templates - The static render-tree fragment and style rules of a
//! component type.
//!
//! A [`Template`] is built once at registration time and deep-cloned into
//! a fresh [`crate::scope::ShadowScope`] for every instance. It carries:
//!
//! - a [`Fragment`] - the tree of [`TemplateNode`]s, some of which are
//!   addressable render slots
//! - a [`Stylesheet`] - private style rules that never leak outward and
//!   that the host cannot reach into, except through the declared
//!   themeable parameters (see [`crate::theme`])
//!
//! # Example
//!
//! ```ignore
//! use cardkit::template::{Template, TemplateNode, Stylesheet, StyleValue};
//!
//! let fragment = TemplateNode::element("div")
//!     .class("card-footer")
//!     .child(TemplateNode::slot("span", "status").class("status"));
//!
//! let styles = Stylesheet::new()
//!     .rule("status-ontime", [("color", StyleValue::param("card-status-ontime", "#1E8449"))]);
//!
//! let template = Template::new(fragment, styles);
//! ```

use crate::theme;

// =============================================================================
// Template Nodes
// =============================================================================

/// What kind of node a template node clones into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A plain element with optional static text and children.
    Element,
    /// A single-line text entry node - the interaction source an event
    /// emission bridge may listen to.
    Input {
        /// Placeholder shown while the value is empty.
        placeholder: String,
    },
}

/// One node of a template fragment.
///
/// Nodes are static: the synchronization engine only ever writes to the
/// per-instance clones, never to the template itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    /// Element tag, for rendering/debugging purposes only.
    pub tag: &'static str,
    /// Stable slot id, if this node is an addressable render slot.
    pub slot: Option<&'static str>,
    /// Static classes. The first one is the slot's base class, which a
    /// class projection resets to before adding the dynamic class.
    pub classes: Vec<String>,
    /// Static text content.
    pub text: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Child nodes, in render order.
    pub children: Vec<TemplateNode>,
}

impl TemplateNode {
    /// Create a plain element node.
    pub fn element(tag: &'static str) -> Self {
        Self {
            tag,
            slot: None,
            classes: Vec::new(),
            text: String::new(),
            kind: NodeKind::Element,
            children: Vec::new(),
        }
    }

    /// Create an element node addressable as a render slot.
    pub fn slot(tag: &'static str, slot: &'static str) -> Self {
        let mut node = Self::element(tag);
        node.slot = Some(slot);
        node
    }

    /// Create a text entry node addressable as a render slot.
    pub fn input(slot: &'static str) -> Self {
        Self {
            tag: "input",
            slot: Some(slot),
            classes: Vec::new(),
            text: String::new(),
            kind: NodeKind::Input {
                placeholder: String::new(),
            },
            children: Vec::new(),
        }
    }

    /// Add a static class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set static text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the placeholder of an input node. No-op on element nodes.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let NodeKind::Input { placeholder: p } = &mut self.kind {
            *p = placeholder.into();
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: TemplateNode) -> Self {
        self.children.push(child);
        self
    }

    /// Base class of this node (first static class), if any.
    pub fn base_class(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }
}

/// Root of a template's render-tree fragment.
pub type Fragment = TemplateNode;

// =============================================================================
// Stylesheet
// =============================================================================

/// A style declaration value: either a literal, or an import of a named
/// theme parameter with a documented fallback default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// Fixed value, private to the component.
    Literal(String),
    /// One-directional, read-only import from the host's themeable
    /// surface. Resolves to the host-supplied value when defined,
    /// otherwise to `fallback`.
    Param {
        /// Theme parameter name (e.g. `card-bg`).
        name: &'static str,
        /// Default used when the host supplies nothing.
        fallback: &'static str,
    },
}

impl StyleValue {
    /// Literal value shorthand.
    pub fn lit(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Theme parameter import shorthand.
    pub fn param(name: &'static str, fallback: &'static str) -> Self {
        Self::Param { name, fallback }
    }

    /// Resolve against the current theme context.
    pub fn resolve(&self) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Param { name, fallback } => {
                theme::param(name).unwrap_or_else(|| (*fallback).to_string())
            }
        }
    }
}

/// One style rule: a class selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Class this rule applies to.
    pub class: String,
    /// `(property, value)` declarations.
    pub declarations: Vec<(&'static str, StyleValue)>,
}

/// The private style ruleset of a component type.
///
/// Rules are matched by class only; a dynamic class with no matching
/// rule is visually inert, which is what makes unvalidated class
/// pass-through safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `class`.
    pub fn rule<I>(mut self, class: impl Into<String>, declarations: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, StyleValue)>,
    {
        self.rules.push(StyleRule {
            class: class.into(),
            declarations: declarations.into_iter().collect(),
        });
        self
    }

    /// Resolve the computed declarations for a set of classes, later
    /// classes and later rules winning on property conflicts.
    ///
    /// Only this stylesheet is consulted - host style rules cannot alter
    /// the result. Theme parameter imports resolve through
    /// [`crate::theme`], falling back to their documented defaults.
    pub fn computed_style<'a, I>(&self, classes: I) -> Vec<(&'static str, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut computed: Vec<(&'static str, String)> = Vec::new();
        for class in classes {
            for rule in self.rules.iter().filter(|r| r.class == class) {
                for (property, value) in &rule.declarations {
                    let resolved = value.resolve();
                    if let Some(slot) = computed.iter_mut().find(|(p, _)| p == property) {
                        slot.1 = resolved;
                    } else {
                        computed.push((property, resolved));
                    }
                }
            }
        }
        computed
    }

    /// Whether any rule targets `class`.
    pub fn has_rule(&self, class: &str) -> bool {
        self.rules.iter().any(|r| r.class == class)
    }
}

// =============================================================================
// Template
// =============================================================================

/// The cloneable definition a component type stamps out per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Render-tree fragment.
    pub fragment: Fragment,
    /// Private style rules.
    pub stylesheet: Stylesheet,
}

impl Template {
    /// Create a template from a fragment and its stylesheet.
    pub fn new(fragment: Fragment, stylesheet: Stylesheet) -> Self {
        Self {
            fragment,
            stylesheet,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
