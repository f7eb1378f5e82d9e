//! Product list renderer.
//!
//! Renders a provisional card set synchronously at mount, then performs one
//! full-subtree replacement when the host's data signal resolves. There is
//! no diffing path: the mount only ever holds a complete render, so no
//! observer can see placeholder and final cards mixed.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use storefront_catalog::ProductSource;
use storefront_core::ProductId;
use storefront_view::{ActionKind, Element, product_card};
use tracing::{debug, debug_span, warn};
use uuid::Uuid;

use crate::carousel::{CarouselController, lock};
use crate::mount::Mount;
use crate::request::RenderRequest;
use crate::signal::DataSignal;

/// Component-level configuration for one renderer instance.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Presentation default shown while data is pending: a flagship
    /// product or a fixed preview lineup, looked up against the catalog.
    pub initial_product_ids: Vec<ProductId>,
    /// Which action link cards carry.
    pub action: ActionKind,
    /// Attach carousel navigation to the card row after each render.
    pub carousel: bool,
}

/// Lifecycle stage of a mounted renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Unmounted,
    Provisional,
    Resolved,
}

/// Two-stage renderer: provisional cards now, final cards when data lands.
///
/// Supports exactly one `Provisional → Resolved` transition per instance;
/// the signal is one-shot, and a second resolution attempt is ignored with
/// a warning.
pub struct ListRenderer<S> {
    catalog: S,
    options: RenderOptions,
    stage: Stage,
    cycle: Uuid,
    carousel: Option<CarouselController>,
}

impl<S: ProductSource> ListRenderer<S> {
    pub fn new(catalog: S, options: RenderOptions) -> Self {
        Self {
            catalog,
            options,
            stage: Stage::Unmounted,
            cycle: Uuid::now_v7(),
            carousel: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Controller attached to the current card row, in carousel mode.
    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    /// Render the provisional card set into the mount.
    ///
    /// Replaces whatever the mount currently holds. Unmatched initial
    /// identifiers are skipped; matching none still installs an empty
    /// container.
    pub fn mount(&mut self, mount: &mut impl Mount) {
        if self.stage != Stage::Unmounted {
            warn!(stage = ?self.stage, "mount called twice, ignoring");
            return;
        }

        let request = RenderRequest::for_ids(self.options.initial_product_ids.clone());
        self.render(mount, &request, Stage::Provisional);
        self.stage = Stage::Provisional;
    }

    /// Handle the resolved data payload: discard the provisional subtree
    /// and render the requested card set.
    pub fn resolve(&mut self, mount: &mut impl Mount, payload: &Value) {
        if self.stage != Stage::Provisional {
            warn!(stage = ?self.stage, "resolve outside the provisional stage, ignoring");
            return;
        }

        let request = RenderRequest::from_payload(payload);
        self.render(mount, &request, Stage::Resolved);
        self.stage = Stage::Resolved;
    }

    /// Awaitable convention: mount, wait for the signal, resolve.
    ///
    /// Returns the renderer so the host can keep querying stage and
    /// carousel state.
    pub async fn run(mut self, mount: &mut impl Mount, signal: &DataSignal<Value>) -> Self {
        self.mount(mount);
        let payload = signal.wait().await;
        self.resolve(mount, &payload);
        self
    }

    fn render(&mut self, mount: &mut impl Mount, request: &RenderRequest, stage: Stage) {
        let span = debug_span!("render", cycle = %self.cycle, stage = ?stage);
        let _entered = span.enter();

        let mut container = Element::new("div").class("products-container");
        for id in &request.product_ids {
            match self.catalog.find_by_id(id) {
                Some(record) => {
                    container = container.child(product_card(
                        record,
                        request.is_recommended(id),
                        self.options.action,
                    ));
                }
                None => debug!(product = %id, "identifier not in catalog, skipping"),
            }
        }

        mount.replace_content(container.into());
        self.reattach_carousel(mount);
        debug!(cards = request.product_ids.len(), "render complete");
    }

    // The card row is destroyed and recreated on every render, so any
    // previous controller is detached before a new one is attached to the
    // fresh region.
    fn reattach_carousel(&mut self, mount: &mut impl Mount) {
        self.carousel = None;
        if !self.options.carousel {
            return;
        }

        match mount.scroll_region() {
            Some(region) => self.carousel = Some(CarouselController::attach(region)),
            None => warn!("carousel enabled but the mount exposes no scroll region"),
        }
    }
}

impl<S> ListRenderer<S>
where
    S: ProductSource + Send + 'static,
{
    /// Callback convention: mount now, resolve inside the signal's
    /// completion callback.
    ///
    /// The mount moves into the callback; the returned handle lets the
    /// host observe the renderer afterwards.
    pub fn attach<M>(mut self, mut mount: M, signal: &DataSignal<Value>) -> Arc<Mutex<Self>>
    where
        M: Mount + Send + 'static,
    {
        self.mount(&mut mount);

        let handle = Arc::new(Mutex::new(self));
        let renderer = Arc::clone(&handle);
        signal.on_resolve(move |payload| {
            lock(&renderer).resolve(&mut mount, &payload);
        });

        handle
    }
}

impl<S> core::fmt::Debug for ListRenderer<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListRenderer")
            .field("stage", &self.stage)
            .field("cycle", &self.cycle)
            .field("carousel", &self.carousel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryMount;
    use serde_json::json;
    use storefront_catalog::{InMemoryCatalog, ProductRecord};
    use storefront_core::{Currency, Money};
    use storefront_view::Node;

    fn record(id: &str, name: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id).unwrap(),
            name: name.to_string(),
            tagline: format!("{name} tagline"),
            description: format!("{name} description"),
            price: Some(Money::new(2999, Currency::usd())),
            base_price: None,
            features: vec!["Feature".to_string()],
            badge: None,
            trial_url: None,
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            record("a", "Product A"),
            record("b", "Product B"),
            record("c", "Product C"),
        ])
    }

    fn options(ids: &[&str]) -> RenderOptions {
        RenderOptions {
            initial_product_ids: ids.iter().map(|id| ProductId::new(*id).unwrap()).collect(),
            ..RenderOptions::default()
        }
    }

    fn card_titles(mount: &InMemoryMount) -> Vec<String> {
        mount
            .content()
            .expect("mount should have content")
            .elements_with_class("product-title")
            .into_iter()
            .map(|title| Node::Element(title.clone()).text_content())
            .collect()
    }

    #[test]
    fn mount_renders_the_initial_set() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&["a", "b"]));

        renderer.mount(&mut mount);

        assert_eq!(renderer.stage(), Stage::Provisional);
        assert_eq!(card_titles(&mount), ["Product A", "Product B"]);
    }

    #[test]
    fn mount_skips_unknown_initial_ids() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&["nope", "a"]));

        renderer.mount(&mut mount);
        assert_eq!(card_titles(&mount), ["Product A"]);
    }

    #[test]
    fn empty_initial_set_installs_an_empty_container() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&[]));

        renderer.mount(&mut mount);

        let content = mount.content().unwrap();
        let container = content.find_by_class("products-container").unwrap();
        assert!(container.children().is_empty());
    }

    #[test]
    fn resolve_replaces_the_whole_subtree() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&["a", "b", "c"]));

        renderer.mount(&mut mount);
        assert_eq!(card_titles(&mount).len(), 3);

        renderer.resolve(&mut mount, &json!({"productIds": ["b"]}));

        assert_eq!(renderer.stage(), Stage::Resolved);
        assert_eq!(card_titles(&mount), ["Product B"]);
        assert_eq!(mount.replace_count(), 2);
    }

    #[test]
    fn resolve_marks_the_recommended_card() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&[]));

        renderer.mount(&mut mount);
        renderer.resolve(
            &mut mount,
            &json!({"productIds": ["a", "b"], "recommendedProductId": "b"}),
        );

        let content = mount.content().unwrap();
        let cards = content.elements_with_class("product-card");
        assert!(Node::Element(cards[0].clone()).find_by_class("recommended").is_none());
        assert!(Node::Element(cards[1].clone()).find_by_class("recommended").is_some());
    }

    #[test]
    fn duplicate_ids_render_duplicate_cards() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&[]));

        renderer.mount(&mut mount);
        renderer.resolve(&mut mount, &json!({"productIds": ["a", "a"]}));

        assert_eq!(card_titles(&mount), ["Product A", "Product A"]);
    }

    #[test]
    fn unknown_resolved_ids_yield_an_empty_container() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&["a"]));

        renderer.mount(&mut mount);
        renderer.resolve(&mut mount, &json!({"productIds": ["nonexistent"]}));

        let content = mount.content().unwrap();
        assert!(content.elements_with_class("product-card").is_empty());
        assert!(content.find_by_class("products-container").is_some());
    }

    #[test]
    fn malformed_payload_yields_an_empty_container() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&["a"]));

        renderer.mount(&mut mount);
        renderer.resolve(&mut mount, &json!(null));

        let content = mount.content().unwrap();
        assert!(content.elements_with_class("product-card").is_empty());
        assert_eq!(renderer.stage(), Stage::Resolved);
    }

    #[test]
    fn second_resolution_is_ignored() {
        let mut mount = InMemoryMount::new();
        let mut renderer = ListRenderer::new(catalog(), options(&[]));

        renderer.mount(&mut mount);
        renderer.resolve(&mut mount, &json!({"productIds": ["a"]}));
        renderer.resolve(&mut mount, &json!({"productIds": ["b"]}));

        assert_eq!(card_titles(&mount), ["Product A"]);
    }

    #[tokio::test]
    async fn run_drives_both_stages() {
        let mut mount = InMemoryMount::new();
        let signal = DataSignal::new();
        let renderer = ListRenderer::new(catalog(), options(&["a"]));

        let resolver = signal.clone();
        tokio::spawn(async move {
            resolver.resolve(json!({"productIds": ["b", "c"]}));
        });

        let renderer = renderer.run(&mut mount, &signal).await;
        assert_eq!(renderer.stage(), Stage::Resolved);
        assert_eq!(card_titles(&mount), ["Product B", "Product C"]);
    }

    #[test]
    fn attach_resolves_through_the_callback() {
        let mount = InMemoryMount::new();
        let observer = mount.clone();
        let signal = DataSignal::new();
        let renderer = ListRenderer::new(catalog(), options(&["a"]));

        let handle = renderer.attach(mount, &signal);
        assert_eq!(card_titles(&observer), ["Product A"]);

        signal.resolve(json!({"productIds": ["c"]}));

        assert_eq!(card_titles(&observer), ["Product C"]);
        assert_eq!(lock(&handle).stage(), Stage::Resolved);
    }

    #[test]
    fn carousel_mode_attaches_a_controller_per_render() {
        let mut mount = InMemoryMount::scrolling(800.0, 400.0);
        let mut renderer = ListRenderer::new(
            catalog(),
            RenderOptions {
                initial_product_ids: vec![ProductId::new("a").unwrap()],
                carousel: true,
                ..RenderOptions::default()
            },
        );

        renderer.mount(&mut mount);
        let first_region = mount.region().unwrap();
        // One card fits the viewport: nothing to scroll.
        let nav = renderer.carousel().unwrap().nav();
        assert!(!nav.prev_enabled && !nav.next_enabled);
        assert_eq!(lock(&first_region).listener_count(), 1);

        renderer.resolve(&mut mount, &json!({"productIds": ["a", "b", "c"]}));

        // Stale region released, fresh controller on the new row.
        assert_eq!(lock(&first_region).listener_count(), 0);
        let second_region = mount.region().unwrap();
        assert_eq!(lock(&second_region).listener_count(), 1);
        assert!(renderer.carousel().unwrap().nav().next_enabled);
    }

    #[test]
    fn without_carousel_mode_no_controller_is_attached() {
        let mut mount = InMemoryMount::scrolling(800.0, 400.0);
        let mut renderer = ListRenderer::new(catalog(), options(&["a"]));

        renderer.mount(&mut mount);
        assert!(renderer.carousel().is_none());
        assert_eq!(lock(&mount.region().unwrap()).listener_count(), 0);
    }
}
