//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers around scroll bookkeeping so callers don't sprinkle
//! `set_scroll_top` / `scroll_height` arithmetic across the code-base.

use web_sys::Element;

/// Pin the element's viewport to its bottom edge so the newest content is
/// visible. The browser clamps the offset to the maximum scrollable value.
pub fn scroll_to_bottom(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}

/// Whether the element is currently scrolled to its maximum offset.
pub fn is_scrolled_to_bottom(el: &Element) -> bool {
    el.scroll_top() >= el.scroll_height() - el.client_height()
}
