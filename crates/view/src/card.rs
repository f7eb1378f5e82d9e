//! Card Builder: one product record in, one self-contained card out.

use storefront_catalog::ProductRecord;

use crate::node::{Element, Node};

/// Destination used when a card has no real link to offer.
const PLACEHOLDER_HREF: &str = "#";

const PRICE_NOTE: &str = "*For the first year. VAT included.";
const GUARANTEE: &str = "30-day money-back guarantee";
const FEATURES_TITLE: &str = "INCLUDES:";

/// Which action link every card in a render carries.
///
/// Chosen once per deployment variant at the component level, never
/// per card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Generic `Buy Now` link to a placeholder destination.
    #[default]
    BuyNow,
    /// `Start Trial` link to the record's trial URL (placeholder fallback),
    /// opened without exposing referrer/window-opener linkage.
    StartTrial,
}

/// Build one product card.
///
/// Pure and deterministic: identical inputs produce an identical tree, and
/// the result shares no state with any other card. Optional record fields
/// degrade by omitting their section; nothing here can fail.
pub fn product_card(record: &ProductRecord, recommended: bool, action: ActionKind) -> Node {
    let mut card = Element::new("div").class("product-card");

    // Recommendation wins over any catalog badge.
    if recommended {
        card = card.child(
            Element::new("div")
                .class("product-badge")
                .class("recommended")
                .text("Recommended"),
        );
    } else if let Some(badge) = record.badge {
        card = card.child(
            Element::new("div")
                .class("product-badge")
                .class(badge.css_class())
                .text(badge.label()),
        );
    }

    card = card.child(
        Element::new("div")
            .class("product-header")
            .child(Element::new("h3").class("product-title").text(&record.name))
            .child(
                Element::new("p")
                    .class("product-tagline")
                    .text(&record.tagline),
            ),
    );

    card = card.child(pricing_section(record));
    card = card.child(action_link(record, action));

    card = card.child(Element::new("div").class("product-guarantee").text(GUARANTEE));

    let features = record
        .features
        .iter()
        .map(|feature| Element::new("li").text(feature).into());
    card = card.child(
        Element::new("div")
            .class("product-features")
            .child(Element::new("div").class("features-title").text(FEATURES_TITLE))
            .child(Element::new("ul").class("features-list").with_children(features)),
    );

    card = card.child(
        Element::new("div")
            .class("product-description")
            .text(&record.description),
    );

    card.into()
}

fn pricing_section(record: &ProductRecord) -> Element {
    let mut pricing = Element::new("div").class("product-pricing");

    if let (Some(base), Some(price)) = (record.base_price, &record.price) {
        pricing = pricing.child(
            Element::new("div")
                .class("product-savings")
                .text(format!("Save {}%", savings_percent(base, price.amount_minor()))),
        );
    }

    if let Some(price) = &record.price {
        let mut container = Element::new("div")
            .class("product-price-container")
            .child(Element::new("div").class("product-price").text(price.to_string()));

        // Strikethrough reference price, same symbol convention.
        if let Some(base) = record.base_price {
            if base > price.amount_minor() {
                container = container.child(
                    Element::new("div").class("product-base-price").text(format!(
                        "{}{}",
                        price.currency().symbol(),
                        storefront_core::format_minor(base)
                    )),
                );
            }
        }

        pricing = pricing.child(container);
    }

    pricing.child(Element::new("div").class("product-price-note").text(PRICE_NOTE))
}

fn action_link(record: &ProductRecord, action: ActionKind) -> Element {
    match action {
        ActionKind::BuyNow => Element::new("a")
            .class("product-buy-button")
            .attr("href", PLACEHOLDER_HREF)
            .attr("aria-label", format!("Buy Now: {}", record.name))
            .text("Buy Now"),
        ActionKind::StartTrial => {
            let href = record.trial_url.as_deref().unwrap_or(PLACEHOLDER_HREF);
            Element::new("a")
                .class("product-buy-button")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("aria-label", format!("Start Trial: {}", record.name))
                .text("Start Trial")
        }
    }
}

/// Integer savings percentage of `price` against the `base` reference price.
///
/// `round(100 * (base − price) / base)`, rounded half-away-from-zero
/// (`f64::round`). Inputs violating the `base ≥ price` invariant produce a
/// negative (or otherwise meaningless) figure; the caller renders whatever
/// comes out rather than failing.
pub fn savings_percent(base_minor: u64, price_minor: u64) -> i64 {
    let delta = base_minor as i64 - price_minor as i64;
    (100.0 * delta as f64 / base_minor as f64).round() as i64
}
