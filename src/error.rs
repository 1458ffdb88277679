//! Error types for the component registry.
//!
//! Registration and instantiation are the only fallible surfaces of the
//! component model. Projection-time problems (a binding addressing a slot
//! the template never declared) are absorbed per-slot inside the
//! synchronization engine and never reach the host.

use thiserror::Error;

/// Errors surfaced by [`crate::registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A component type is already defined under this tag name.
    ///
    /// The existing registration is left intact; the caller's spec is
    /// discarded.
    #[error("component tag `{tag}` is already defined")]
    DuplicateRegistration {
        /// The contested tag name.
        tag: String,
    },

    /// No component type is defined under this tag name.
    #[error("no component type defined for tag `{tag}`")]
    UnknownTag {
        /// The unresolved tag name.
        tag: String,
    },
}
