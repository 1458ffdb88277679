//! Theme Context - The host's themeable surface.
//!
//! Components are style-isolated: their private stylesheets never leak
//! outward, and host rules never reach inside a scope. The single,
//! deliberate crossing is a set of named theme parameters a component
//! consciously imports (e.g. `card-bg`, `card-text-primary`). The import
//! is one-directional and read-only from the component's perspective;
//! every import carries a documented fallback used when the host defines
//! nothing.
//!
//! The context is thread-local, matching the single-threaded component
//! model.
//!
//! # Example
//!
//! ```ignore
//! use cardkit::theme;
//!
//! theme::set_param("card-bg", "#1C1C1E");
//! assert_eq!(theme::param("card-bg").as_deref(), Some("#1C1C1E"));
//!
//! theme::reset_theme();
//! assert_eq!(theme::param("card-bg"), None);
//! ```

use std::cell::RefCell;

use rustc_hash::FxHashMap;

thread_local! {
    static PARAMS: RefCell<FxHashMap<String, String>> = RefCell::new(FxHashMap::default());
}

/// Define (or redefine) a theme parameter.
pub fn set_param(name: impl Into<String>, value: impl Into<String>) {
    PARAMS.with(|params| {
        params.borrow_mut().insert(name.into(), value.into());
    });
}

/// Remove a theme parameter, restoring component fallbacks.
pub fn remove_param(name: &str) {
    PARAMS.with(|params| {
        params.borrow_mut().remove(name);
    });
}

/// Current value of a theme parameter, if the host defined one.
pub fn param(name: &str) -> Option<String> {
    PARAMS.with(|params| params.borrow().get(name).cloned())
}

/// Clear every theme parameter. Primarily a test helper.
pub fn reset_theme() {
    PARAMS.with(|params| params.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
