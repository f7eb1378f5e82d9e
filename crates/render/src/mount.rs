//! Mount-point contract.

use storefront_view::Node;

use crate::carousel::SharedScrollRegion;

/// Host-supplied region of the page the renderer owns.
///
/// The renderer only ever replaces the mount's content wholesale. There is
/// no partial-update path, so observers always see a complete render, never
/// a mix of old and new cards.
pub trait Mount {
    /// Discard the entire current content and install `content`.
    fn replace_content(&mut self, content: Node);

    /// Scroll handle for the card row created by the most recent
    /// [`Mount::replace_content`], when the host surface scrolls.
    ///
    /// Each replacement destroys the previous row, so hosts return a fresh
    /// region per render; handles from earlier renders go stale with their
    /// containers.
    fn scroll_region(&self) -> Option<SharedScrollRegion>;
}
