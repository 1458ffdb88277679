//! Component Registry - Process-wide component type registration.
//!
//! Explicit registry state with init-once semantics: a tag name is
//! defined at most once, and redefining it is an error rather than a
//! silent overwrite. The registry is thread-local, matching the
//! single-threaded component model (and isolating tests for free).
//!
//! # Example
//!
//! ```ignore
//! use cardkit::{registry, widgets};
//!
//! widgets::flight_card::define().unwrap();
//! assert!(registry::is_defined("flight-card"));
//!
//! let card = registry::create("flight-card").unwrap();
//! assert_eq!(card.tag(), "flight-card");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::component::{ComponentInstance, ComponentSpec};
use crate::error::RegistryError;

thread_local! {
    static SPECS: RefCell<FxHashMap<&'static str, Rc<ComponentSpec>>> =
        RefCell::new(FxHashMap::default());
}

/// Define a component type under its tag name.
///
/// Fails with [`RegistryError::DuplicateRegistration`] if the tag is
/// already taken; the existing registration stays intact and
/// functional.
pub fn define(spec: ComponentSpec) -> Result<(), RegistryError> {
    SPECS.with(|specs| {
        let mut specs = specs.borrow_mut();
        if specs.contains_key(spec.tag) {
            return Err(RegistryError::DuplicateRegistration {
                tag: spec.tag.to_string(),
            });
        }
        debug!(tag = spec.tag, "defined component type");
        specs.insert(spec.tag, Rc::new(spec));
        Ok(())
    })
}

/// Whether a component type is defined under this tag.
pub fn is_defined(tag: &str) -> bool {
    SPECS.with(|specs| specs.borrow().contains_key(tag))
}

/// The spec registered under this tag, if any.
pub fn spec(tag: &str) -> Option<Rc<ComponentSpec>> {
    SPECS.with(|specs| specs.borrow().get(tag).cloned())
}

/// Instantiate the component type registered under `tag`.
///
/// Every call produces a fresh instance with its own isolated scope
/// clone; repeated create/insert/remove cycles never share or leak
/// scopes between instantiations.
pub fn create(tag: &str) -> Result<Rc<ComponentInstance>, RegistryError> {
    let spec = spec(tag).ok_or_else(|| RegistryError::UnknownTag {
        tag: tag.to_string(),
    })?;
    Ok(ComponentInstance::new(spec))
}

/// Clear every registration. Primarily a test helper.
pub fn reset_registry() {
    SPECS.with(|specs| specs.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
