//! # cardkit
//!
//! Attribute-driven, encapsulated card components for Rust hosts.
//!
//! The core is a reusable component model: a component type clones an
//! isolated template into a private rendering scope on instantiation,
//! declares the fixed set of attributes it observes, re-projects all
//! current attribute values onto named render slots whenever any
//! observed attribute changes, and may bridge internal interaction
//! signals into host-visible notification events.
//!
//! ## Architecture
//!
//! ```text
//! host sets attribute → full projection → render slots updated
//! interaction signal  → emission bridge → bubbling notification event
//! ```
//!
//! Everything is single-threaded, synchronous, and runs to completion
//! before the triggering call returns. Instances own their scopes
//! exclusively; the only state crossing the isolation boundary is the
//! declared themeable parameter surface.
//!
//! ## Modules
//!
//! - [`registry`] - process-wide component type registration
//! - [`component`] - type specs and live instances
//! - [`sync`] - the pure attribute → render-state projection
//! - [`scope`] - isolated per-instance render scopes
//! - [`template`] - cloneable fragments and private stylesheets
//! - [`bridge`] - interaction signal → notification event bridges
//! - [`events`] - notification events and listener sets
//! - [`host`] - the host render tree and bubbling dispatch
//! - [`theme`] - the host's themeable parameter surface
//! - [`widgets`] - the built-in `flight-card` and `search-card` types

pub mod bridge;
pub mod component;
pub mod error;
pub mod events;
pub mod host;
pub mod registry;
pub mod scope;
pub mod sync;
pub mod template;
pub mod theme;
pub mod widgets;

// Re-export commonly used items
pub use bridge::BridgeSpec;
pub use component::{ComponentInstance, ComponentSpec};
pub use error::RegistryError;
pub use events::{Cleanup, EventCallback, EventFlags, EventPayload, ListenerSet, NotificationEvent};
pub use host::{HostChild, HostNode};
pub use registry::{create, define, is_defined, reset_registry};
pub use scope::{ShadowScope, SlotSnapshot};
pub use sync::{AttributeMap, Binding, RenderState, SlotWrite, project};
pub use template::{Fragment, NodeKind, StyleRule, StyleValue, Stylesheet, Template, TemplateNode};
