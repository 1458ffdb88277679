//! Search Card - Flight-search input ticket.
//!
//! A static template with a single interaction surface: a text input.
//! The card observes no attributes; its one contract with the host is
//! the [`EVENT`] notification, emitted once per raw input signal with
//! the current text as payload - no debouncing, no validation.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use cardkit::{host::HostNode, widgets::search_card};
//!
//! search_card::define().unwrap();
//!
//! let page = HostNode::root("page");
//! let search = page.append(search_card::TAG).unwrap();
//!
//! let _cleanup = page.on(search_card::EVENT, Rc::new(|event| {
//!     println!("searching for {}", event.payload.value);
//! }));
//!
//! search.scope().insert_text(search_card::INPUT_SLOT, "NZ102");
//! ```

use crate::bridge::BridgeSpec;
use crate::component::ComponentSpec;
use crate::error::RegistryError;
use crate::registry;
use crate::template::{Stylesheet, StyleValue, Template, TemplateNode};

/// Tag name of the search card component type.
pub const TAG: &str = "search-card";

/// Event emitted as the user edits the search input. Lower-case,
/// hyphen-free token per the notification naming convention.
pub const EVENT: &str = "searchtermchange";

/// Slot id of the text input inside the isolated scope.
pub const INPUT_SLOT: &str = "flight-search-input";

/// Register the search card component type.
pub fn define() -> Result<(), RegistryError> {
    registry::define(spec())
}

/// Build the search card type spec.
pub fn spec() -> ComponentSpec {
    ComponentSpec {
        tag: TAG,
        observed: &[],
        template: template(),
        bindings: Vec::new(),
        bridges: vec![BridgeSpec {
            source_slot: INPUT_SLOT,
            event: EVENT,
        }],
    }
}

fn template() -> Template {
    let fragment = TemplateNode::slot("div", "ticket")
        .class("search-ticket")
        .child(
            TemplateNode::element("div").class("input-field")
                .child(
                    TemplateNode::element("span")
                        .class("material-symbols-outlined")
                        .class("icon")
                        .text("airplane_ticket"),
                )
                .child(
                    TemplateNode::input(INPUT_SLOT)
                        .placeholder("Search by Flight Number..."),
                ),
        );

    Template::new(fragment, stylesheet())
}

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule("search-ticket", [
            ("background-color", StyleValue::param("card-bg-focused", "#D2E5E1")),
            ("color", StyleValue::param("card-text-focused", "#00201B")),
            ("cutout-background", StyleValue::param("page-bg", "#1C1C1E")),
        ])
        .rule("input-field", [
            ("background-color", StyleValue::param("card-input-bg-focused", "#FFFFFF")),
        ])
        .rule("icon", [
            ("color", StyleValue::param("card-text-secondary-focused", "#3F4946")),
        ])
        .rule("separator", [
            ("border-bottom-color", StyleValue::param("card-outline-focused", "#BFC9C5")),
        ])
        .rule("action-button", [
            ("background-color", StyleValue::param("card-text-focused", "#00201B")),
            ("color", StyleValue::param("card-bg-focused", "#D2E5E1")),
        ])
}

// =============================================================================
// Tests
// =============================================================================
