//! Flight Card - Summary card for a single flight.
//!
//! Renders purely from host-set attributes: airline identity, route,
//! gate/boarding details, and status. Two attributes select style
//! classes instead of text: `airline-class` brands the logo badge and
//! `status-class` colors the status line. Class values are an open
//! tagged set - any string is accepted verbatim, and a value with no
//! matching style rule is visually inert.
//!
//! # Example
//!
//! ```ignore
//! use cardkit::{host::HostNode, registry, widgets::flight_card};
//!
//! flight_card::define().unwrap();
//!
//! let page = HostNode::root("page");
//! let card = page.append(flight_card::TAG).unwrap();
//! card.set_attribute("flight-number", "NZ102");
//! card.set_attribute("status-text", "On Time");
//! card.set_attribute("status-class", "status-ontime");
//! ```

use crate::component::ComponentSpec;
use crate::error::RegistryError;
use crate::registry;
use crate::sync::Binding;
use crate::template::{Stylesheet, StyleValue, Template, TemplateNode};

/// Tag name of the flight card component type.
pub const TAG: &str = "flight-card";

/// Observed attributes, in declaration order.
pub const OBSERVED: &[&str] = &[
    "airline-logo-text",
    "airline-class",
    "flight-number",
    "airline-name",
    "origin-iata",
    "origin-city",
    "dest-iata",
    "dest-city",
    "gate",
    "boarding-time",
    "departure-time",
    "status-text",
    "status-class",
    "arrival-time",
];

/// Register the flight card component type.
pub fn define() -> Result<(), RegistryError> {
    registry::define(spec())
}

/// Build the flight card type spec.
pub fn spec() -> ComponentSpec {
    ComponentSpec {
        tag: TAG,
        observed: OBSERVED,
        template: template(),
        bindings: bindings(),
        bridges: Vec::new(),
    }
}

fn bindings() -> Vec<Binding> {
    vec![
        Binding::Text { attr: "airline-logo-text", slot: "logo" },
        Binding::Class { attr: "airline-class", slot: "logo" },
        Binding::Text { attr: "flight-number", slot: "flight-number" },
        Binding::Text { attr: "airline-name", slot: "airline-name" },
        Binding::Text { attr: "origin-iata", slot: "origin-iata" },
        Binding::Text { attr: "origin-city", slot: "origin-city" },
        Binding::Text { attr: "dest-iata", slot: "dest-iata" },
        Binding::Text { attr: "dest-city", slot: "dest-city" },
        Binding::Text { attr: "gate", slot: "gate" },
        Binding::Text { attr: "boarding-time", slot: "boarding" },
        Binding::Text { attr: "departure-time", slot: "dep-time" },
        Binding::Text { attr: "status-text", slot: "status" },
        Binding::Class { attr: "status-class", slot: "status" },
        Binding::Text { attr: "arrival-time", slot: "arr-time" },
    ]
}

fn template() -> Template {
    let fragment = TemplateNode::slot("div", "card")
        .class("flight-card")
        .child(
            TemplateNode::element("div").class("card-header")
                .child(
                    TemplateNode::element("div").class("airline-info")
                        .child(TemplateNode::slot("div", "logo").class("airline-logo"))
                        .child(
                            TemplateNode::element("div")
                                .child(TemplateNode::slot("div", "flight-number").class("flight-number"))
                                .child(TemplateNode::slot("div", "airline-name").class("airline-name")),
                        ),
                )
                .child(
                    TemplateNode::element("button").class("card-share-button")
                        .child(TemplateNode::element("span").class("material-symbols-outlined").text("share")),
                ),
        )
        .child(TemplateNode::element("hr").class("card-separator"))
        .child(
            TemplateNode::element("div").class("flight-path")
                .child(
                    TemplateNode::element("div").class("location")
                        .child(TemplateNode::slot("h2", "origin-iata"))
                        .child(TemplateNode::slot("p", "origin-city")),
                )
                .child(
                    TemplateNode::element("div").class("path-icon")
                        .child(TemplateNode::element("span").class("material-symbols-outlined").text("east")),
                )
                .child(
                    TemplateNode::element("div").class("location")
                        .child(TemplateNode::slot("h2", "dest-iata"))
                        .child(TemplateNode::slot("p", "dest-city")),
                ),
        )
        .child(
            TemplateNode::element("div").class("flight-details")
                .child(
                    TemplateNode::element("div").class("detail-item")
                        .child(TemplateNode::slot("h3", "gate"))
                        .child(TemplateNode::element("p").text("Gate")),
                )
                .child(
                    TemplateNode::element("div").class("detail-item")
                        .child(TemplateNode::slot("h3", "boarding"))
                        .child(TemplateNode::element("p").text("Boarding")),
                ),
        )
        .child(TemplateNode::element("hr").class("card-separator"))
        .child(
            TemplateNode::element("div").class("card-footer")
                .child(TemplateNode::slot("span", "dep-time"))
                .child(TemplateNode::slot("span", "status").class("status"))
                .child(TemplateNode::slot("span", "arr-time")),
        );

    Template::new(fragment, stylesheet())
}

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule("flight-card", [
            ("background-color", StyleValue::param("card-bg", "#D2E5E1")),
            ("color", StyleValue::param("card-text-primary", "#00201B")),
            ("cutout-background", StyleValue::param("page-bg", "#1C1C1E")),
        ])
        .rule("flight-number", [
            ("color", StyleValue::param("card-text-primary", "#00201B")),
        ])
        .rule("airline-name", [
            ("color", StyleValue::param("card-text-secondary", "#3F4946")),
        ])
        .rule("card-share-button", [
            ("color", StyleValue::param("card-text-secondary", "#3F4946")),
        ])
        .rule("card-separator", [
            ("border-top-color", StyleValue::param("card-separator-color", "rgba(63, 73, 70, 0.4)")),
        ])
        .rule("airline-logo", [("color", StyleValue::lit("#fff"))])
        // Airline brand colors.
        .rule("airline-nz", [("background-color", StyleValue::lit("#000000"))])
        .rule("airline-mu", [("background-color", StyleValue::lit("#1E3A8A"))])
        .rule("airline-qf", [("background-color", StyleValue::lit("#E40000"))])
        .rule("airline-ek", [("background-color", StyleValue::lit("#d81921"))])
        .rule("airline-sq", [("background-color", StyleValue::lit("#F99F00"))])
        .rule("airline-fj", [("background-color", StyleValue::lit("#2F2E2E"))])
        .rule("airline-cx", [("background-color", StyleValue::lit("#006442"))])
        .rule("airline-ua", [("background-color", StyleValue::lit("#002244"))])
        .rule("airline-ac", [("background-color", StyleValue::lit("#F01428"))])
        .rule("airline-ke", [("background-color", StyleValue::lit("#0064A2"))])
        .rule("airline-jq", [("background-color", StyleValue::lit("#FF5500"))])
        .rule("status", [
            ("color", StyleValue::param("card-text-secondary", "#3F4946")),
        ])
        .rule("status-ontime", [
            ("color", StyleValue::param("card-status-ontime", "#1E8449")),
        ])
        .rule("status-delayed", [
            ("color", StyleValue::param("card-status-delayed", "#C0392B")),
        ])
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostNode;
    use crate::theme;

    #[test]
    fn test_observed_attributes_fixed() {
        let card = crate::component::ComponentInstance::new(std::rc::Rc::new(spec()));
        assert_eq!(card.observed_attributes(), OBSERVED);
        assert_eq!(card.observed_attributes().len(), 14);
    }

    #[test]
    fn test_full_card_projection() {
        registry::reset_registry();
        define().unwrap();

        let page = HostNode::root("page");
        let card = page.append(TAG).unwrap();

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

        let scope = card.scope();
        assert_eq!(scope.slot_text("logo").as_deref(), Some("NZ"));
        assert_eq!(
            scope.slot_classes("logo").unwrap(),
            vec!["airline-logo".to_string(), "airline-nz".to_string()]
        );
        assert_eq!(scope.slot_text("flight-number").as_deref(), Some("NZ102"));
        assert_eq!(scope.slot_text("origin-iata").as_deref(), Some("AKL"));
        assert_eq!(scope.slot_text("dest-city").as_deref(), Some("Shanghai"));
        assert_eq!(scope.slot_text("boarding").as_deref(), Some("08:40 AM"));
        assert_eq!(scope.slot_text("dep-time").as_deref(), Some("09:10 AM"));
        assert_eq!(scope.slot_text("arr-time").as_deref(), Some("04:55 PM"));
        assert_eq!(scope.slot_text("status").as_deref(), Some("On Time"));
        assert_eq!(
            scope.slot_classes("status").unwrap(),
            vec!["status".to_string(), "status-ontime".to_string()]
        );
    }

    #[test]
    fn test_status_reclassification() {
        registry::reset_registry();
        define().unwrap();

        let card = registry::create(TAG).unwrap();
        card.set_attribute("status-text", "On Time");
        card.set_attribute("status-class", "status-ontime");
        card.set_attribute("status-class", "status-delayed");

        let classes = card.scope().slot_classes("status").unwrap();
        assert_eq!(classes, vec!["status".to_string(), "status-delayed".to_string()]);
        assert!(!classes.contains(&"status-ontime".to_string()));
        assert_eq!(card.scope().slot_text("status").as_deref(), Some("On Time"));
    }

    #[test]
    fn test_unset_gate_renders_empty() {
        registry::reset_registry();
        define().unwrap();

        let page = HostNode::root("page");
        let card = page.append(TAG).unwrap();
        card.set_attribute("flight-number", "QF140");

        assert_eq!(card.scope().slot_text("gate").as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_airline_class_is_inert() {
        registry::reset_registry();
        define().unwrap();

        let card = registry::create(TAG).unwrap();
        card.set_attribute("airline-class", "airline-zz");

        assert_eq!(
            card.scope().slot_classes("logo").unwrap(),
            vec!["airline-logo".to_string(), "airline-zz".to_string()]
        );
        // No rule matches, so the badge keeps only its base styling.
        let style = card.scope().computed_style("logo").unwrap();
        assert_eq!(style, vec![("color", "#fff".to_string())]);
    }

    #[test]
    fn test_theme_import_with_fallback() {
        registry::reset_registry();
        theme::reset_theme();
        define().unwrap();

        let card = registry::create(TAG).unwrap();
        let background = |card: &std::rc::Rc<crate::component::ComponentInstance>| {
            card.scope()
                .computed_style("card")
                .unwrap()
                .into_iter()
                .find(|(p, _)| *p == "background-color")
                .map(|(_, v)| v)
        };

        // Host supplied nothing: documented fallback.
        assert_eq!(background(&card).as_deref(), Some("#D2E5E1"));

        // Host theme pierces only through the declared parameter.
        theme::set_param("card-bg", "#20262B");
        assert_eq!(background(&card).as_deref(), Some("#20262B"));
        theme::reset_theme();
    }
}
