//! Carousel navigation over a scrollable card row.
//!
//! The controller owns no layout: it reads scroll metrics from a
//! host-supplied [`ScrollRegion`], shifts the offset in fixed steps, and
//! keeps a previous/next enabled state in sync with every scroll event.
//! Containers are destroyed wholesale on re-render, so a controller is
//! created per container and removes its scroll listener when detached.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

/// Pixels scrolled per navigation press.
pub const SCROLL_STEP: f64 = 300.0;

/// Delay before the post-attachment state refresh, letting layout settle.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

// Sub-pixel tolerance when deciding the row is scrolled to its end.
const END_EPSILON: f64 = 1.0;

/// Snapshot of a scrollable row's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset in pixels.
    pub offset: f64,
    /// Visible width of the row.
    pub viewport_width: f64,
    /// Total width of the row's content.
    pub content_width: f64,
}

impl ScrollMetrics {
    /// Largest reachable offset (zero when the content fits).
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn at_start(&self) -> bool {
        self.offset <= 0.0
    }

    fn at_end(&self) -> bool {
        self.offset >= self.content_width - self.viewport_width - END_EPSILON
    }
}

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Handle for removing a scroll listener.
pub type ListenerId = u64;

/// Host-side scrollable row of cards.
///
/// `scroll_by` is expected to clamp naturally at the content bounds and to
/// notify listeners of the resulting metrics, mirroring how scroll events
/// behave on a real surface.
pub trait ScrollRegion: Send {
    fn metrics(&self) -> ScrollMetrics;

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior);

    fn add_scroll_listener(
        &mut self,
        listener: Box<dyn FnMut(ScrollMetrics) + Send>,
    ) -> ListenerId;

    fn remove_scroll_listener(&mut self, id: ListenerId);
}

/// Shared handle to the scroll region backing the rendered row.
pub type SharedScrollRegion = Arc<Mutex<dyn ScrollRegion>>;

pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Enabled state of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavState {
    fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            prev_enabled: !metrics.at_start(),
            next_enabled: !metrics.at_end(),
        }
    }
}

/// Navigation controller attached to one scrollable row.
///
/// State is recomputed on every scroll event via the region listener, and
/// once shortly after attachment ([`SETTLE_DELAY`]) when an async runtime
/// is available; hosts without one call [`CarouselController::refresh`]
/// after layout settles.
pub struct CarouselController {
    region: SharedScrollRegion,
    nav: Arc<Mutex<NavState>>,
    listener: Option<ListenerId>,
}

impl CarouselController {
    /// Attach to a row: compute the initial state and subscribe to its
    /// scroll events.
    pub fn attach(region: SharedScrollRegion) -> Self {
        let nav = Arc::new(Mutex::new(NavState::from_metrics(lock(&region).metrics())));

        let listener_nav = Arc::clone(&nav);
        let listener = lock(&region).add_scroll_listener(Box::new(move |metrics| {
            *lock(&listener_nav) = NavState::from_metrics(metrics);
        }));

        let controller = Self {
            region,
            nav,
            listener: Some(listener),
        };
        controller.schedule_settle_refresh();
        controller
    }

    // Layout may not have settled when attach runs; refresh once after a
    // short delay if a runtime is present to drive the timer.
    fn schedule_settle_refresh(&self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let region = Arc::clone(&self.region);
        let nav = Arc::clone(&self.nav);
        handle.spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            let metrics = lock(&region).metrics();
            *lock(&nav) = NavState::from_metrics(metrics);
        });
    }

    /// Recompute the enabled state from the row's current metrics.
    pub fn refresh(&self) {
        let metrics = lock(&self.region).metrics();
        *lock(&self.nav) = NavState::from_metrics(metrics);
    }

    /// Scroll one step towards the start.
    pub fn scroll_prev(&self) {
        lock(&self.region).scroll_by(-SCROLL_STEP, ScrollBehavior::Smooth);
    }

    /// Scroll one step towards the end.
    pub fn scroll_next(&self) {
        lock(&self.region).scroll_by(SCROLL_STEP, ScrollBehavior::Smooth);
    }

    pub fn nav(&self) -> NavState {
        *lock(&self.nav)
    }

    /// Remove the scroll listener. Idempotent; also runs on drop so a
    /// stale controller never leaves a subscription on a dead container.
    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            lock(&self.region).remove_scroll_listener(listener);
            debug!("carousel listener removed");
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.detach();
    }
}

impl core::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselController")
            .field("nav", &self.nav())
            .field("attached", &self.listener.is_some())
            .finish()
    }
}
