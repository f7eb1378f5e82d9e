//! Data-driven render lifecycle.
//!
//! Ties the catalog and the card builder to a host page: a provisional
//! render at mount, a one-shot data signal, a full-subtree replacement on
//! resolution, and carousel navigation kept in sync with the card row it
//! paginates.

pub mod carousel;
pub mod in_memory;
pub mod list;
pub mod mount;
pub mod request;
pub mod signal;

pub use carousel::{
    CarouselController, ListenerId, NavState, SCROLL_STEP, SETTLE_DELAY, ScrollBehavior,
    ScrollMetrics, ScrollRegion, SharedScrollRegion,
};
pub use in_memory::{InMemoryMount, InMemoryScrollRegion};
pub use list::{ListRenderer, RenderOptions, Stage};
pub use mount::Mount;
pub use request::RenderRequest;
pub use signal::DataSignal;
