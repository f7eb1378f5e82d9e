//! Carousel navigation affordances.

use crate::node::{Element, Node};

/// Build the previous/next controls for a card row.
///
/// Disabled state mirrors the controller's current computation; the host
/// re-renders these whenever that state changes.
pub fn carousel_nav(prev_enabled: bool, next_enabled: bool) -> Node {
    Element::new("div")
        .class("carousel-nav")
        .child(nav_button("carousel-prev", "Previous products", prev_enabled))
        .child(nav_button("carousel-next", "Next products", next_enabled))
        .into()
}

fn nav_button(class: &str, label: &str, enabled: bool) -> Element {
    let mut button = Element::new("button")
        .class(class)
        .attr("aria-label", label);
    if !enabled {
        button = button.attr("disabled", "disabled");
    }
    button
}
