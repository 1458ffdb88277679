//! Flight Board Demo - A host page composing both widgets.
//!
//! Demonstrates the full component lifecycle from the host's side:
//! - defining the widget types
//! - inserting instances into a host tree
//! - driving render state through attributes
//! - listening for bridged notification events
//! - theming through the declared parameter surface
//!
//! Run with: cargo run --example flight_board

use std::rc::Rc;

use cardkit::{
    host::HostNode,
    theme,
    widgets::{self, flight_card, search_card},
};

fn main() {
    widgets::define_all().expect("fresh registry");

    // Dark page theme, piercing the card boundary only through the
    // declared parameters.
    theme::set_param("page-bg", "#1C1C1E");
    theme::set_param("card-bg", "#D2E5E1");

    let page = HostNode::root("page");
    let board = page.append_node("board");

    // Search ticket on top; the host hears every keystroke.
    let search = board.append(search_card::TAG).expect("defined");
    let _cleanup = page.on(
        search_card::EVENT,
        Rc::new(|event| println!("host saw search term: {:?}", event.payload.value)),
    );

    // One flight card, populated from attributes.
    let card = board.append(flight_card::TAG).expect("defined");
    for (attr, value) in [
        ("airline-logo-text", "NZ"),
        ("airline-class", "airline-nz"),
        ("flight-number", "NZ102"),
        ("airline-name", "Air New Zealand"),
        ("origin-iata", "AKL"),
        ("origin-city", "Auckland"),
        ("dest-iata", "PVG"),
        ("dest-city", "Shanghai"),
        ("gate", "57A"),
        ("boarding-time", "08:40 AM"),
        ("departure-time", "09:10 AM"),
        ("status-text", "On Time"),
        ("status-class", "status-ontime"),
        ("arrival-time", "04:55 PM"),
    ] {
        card.set_attribute(attr, value);
    }

    println!("=== flight card scope ===");
    print!("{}", card.scope().outline());

    // A live status change: one attribute, one full re-projection.
    card.set_attribute("status-text", "Delayed");
    card.set_attribute("status-class", "status-delayed");
    println!(
        "status now: {:?} {:?}",
        card.scope().slot_text("status").unwrap_or_default(),
        card.scope().slot_classes("status").unwrap_or_default(),
    );

    // The user types into the isolated search input.
    println!("=== typing NZ102 ===");
    for ch in ["N", "Z", "1", "0", "2"] {
        search.scope().insert_text(search_card::INPUT_SLOT, ch);
    }

    println!("=== search card scope ===");
    print!("{}", search.scope().outline());
}
