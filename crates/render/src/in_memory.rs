//! In-memory mount and scroll region for tests/dev.
//!
//! These mirror the host-page contracts without a display surface: the
//! mount stores the last node tree it was handed, and the scroll region
//! holds plain metrics plus a listener registry.

use std::sync::{Arc, Mutex};

use storefront_view::Node;

use crate::carousel::{
    ListenerId, ScrollBehavior, ScrollMetrics, ScrollRegion, SharedScrollRegion, lock,
};
use crate::mount::Mount;

/// Scroll region backed by plain metrics.
///
/// `scroll_by` clamps to the content bounds and fires listeners
/// synchronously, like a scroll event on a real surface. Listeners run
/// while the region is borrowed, so they must not call back into it.
pub struct InMemoryScrollRegion {
    metrics: ScrollMetrics,
    listeners: Vec<(ListenerId, Box<dyn FnMut(ScrollMetrics) + Send>)>,
    next_listener: ListenerId,
}

impl InMemoryScrollRegion {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Update geometry without firing scroll listeners (models a layout
    /// change, which is not a scroll).
    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fire_listeners(&mut self) {
        let metrics = self.metrics;
        for (_, listener) in &mut self.listeners {
            listener(metrics);
        }
    }
}

impl core::fmt::Debug for InMemoryScrollRegion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryScrollRegion")
            .field("metrics", &self.metrics)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollRegion for InMemoryScrollRegion {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn scroll_by(&mut self, delta: f64, _behavior: ScrollBehavior) {
        self.metrics.offset = (self.metrics.offset + delta).clamp(0.0, self.metrics.max_offset());
        self.fire_listeners();
    }

    fn add_scroll_listener(
        &mut self,
        listener: Box<dyn FnMut(ScrollMetrics) + Send>,
    ) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

#[derive(Debug, Default)]
struct MountInner {
    content: Option<Node>,
    scrolling: Option<RowLayout>,
    region: Option<Arc<Mutex<InMemoryScrollRegion>>>,
    replace_count: usize,
}

// Fixed-width card layout used to derive content width from card count.
#[derive(Debug, Clone, Copy)]
struct RowLayout {
    viewport_width: f64,
    card_width: f64,
}

/// Mount point that stores the rendered tree.
///
/// Clones share state, so a host can hand one clone to the renderer and
/// keep another to observe output. With [`InMemoryMount::scrolling`]
/// enabled, every content replacement creates a fresh scroll region sized
/// from the rendered card count; the old region object stays wherever it
/// was handed out, exactly like a detached container.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMount {
    inner: Arc<Mutex<MountInner>>,
}

impl InMemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable scrolling: rows lay out `card_width`-pixel cards inside a
    /// `viewport_width`-pixel viewport.
    pub fn scrolling(viewport_width: f64, card_width: f64) -> Self {
        let mount = Self::new();
        lock(&mount.inner).scrolling = Some(RowLayout {
            viewport_width,
            card_width,
        });
        mount
    }

    /// The last content installed, if any.
    pub fn content(&self) -> Option<Node> {
        lock(&self.inner).content.clone()
    }

    /// How many times content has been replaced.
    pub fn replace_count(&self) -> usize {
        lock(&self.inner).replace_count
    }

    /// Concrete handle to the current row's region (tests tweak metrics
    /// through this).
    pub fn region(&self) -> Option<Arc<Mutex<InMemoryScrollRegion>>> {
        lock(&self.inner).region.clone()
    }
}

impl Mount for InMemoryMount {
    fn replace_content(&mut self, content: Node) {
        let mut inner = lock(&self.inner);
        inner.replace_count += 1;

        if let Some(layout) = inner.scrolling {
            let cards = content
                .as_element()
                .map(|container| container.children().len())
                .unwrap_or(0);
            inner.region = Some(Arc::new(Mutex::new(InMemoryScrollRegion::new(
                ScrollMetrics {
                    offset: 0.0,
                    viewport_width: layout.viewport_width,
                    content_width: cards as f64 * layout.card_width,
                },
            ))));
        }

        inner.content = Some(content);
    }

    fn scroll_region(&self) -> Option<SharedScrollRegion> {
        lock(&self.inner)
            .region
            .clone()
            .map(|region| region as SharedScrollRegion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_view::Element;

    fn row(cards: usize) -> Node {
        let children = (0..cards).map(|_| Element::new("div").class("product-card").into());
        Element::new("div")
            .class("products-container")
            .with_children(children)
            .into()
    }

    #[test]
    fn stores_the_last_content() {
        let mut mount = InMemoryMount::new();
        assert!(mount.content().is_none());

        mount.replace_content(row(2));
        mount.replace_content(row(1));

        let content = mount.content().unwrap();
        assert_eq!(content.elements_with_class("product-card").len(), 1);
        assert_eq!(mount.replace_count(), 2);
    }

    #[test]
    fn non_scrolling_mounts_have_no_region() {
        let mut mount = InMemoryMount::new();
        mount.replace_content(row(3));
        assert!(mount.scroll_region().is_none());
    }

    #[test]
    fn each_replacement_creates_a_fresh_region() {
        let mut mount = InMemoryMount::scrolling(800.0, 250.0);

        mount.replace_content(row(8));
        let first = mount.region().unwrap();
        assert_eq!(lock(&first).metrics().content_width, 2000.0);

        mount.replace_content(row(2));
        let second = mount.region().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(lock(&second).metrics().content_width, 500.0);
        assert_eq!(lock(&second).metrics().offset, 0.0);
    }

    #[test]
    fn scroll_by_clamps_and_notifies() {
        let region = InMemoryScrollRegion::new(ScrollMetrics {
            offset: 0.0,
            viewport_width: 800.0,
            content_width: 1000.0,
        });
        let region = Arc::new(Mutex::new(region));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        lock(&region).add_scroll_listener(Box::new(move |metrics| {
            lock(&sink).push(metrics.offset);
        }));

        lock(&region).scroll_by(500.0, ScrollBehavior::Smooth);
        lock(&region).scroll_by(-999.0, ScrollBehavior::Smooth);

        assert_eq!(*lock(&seen), vec![200.0, 0.0]);
    }
}
