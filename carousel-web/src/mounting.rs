//! Page preparation done once per carousel, and mounting every carousel
//! on a page independently of the others.

use std::fmt::Debug;

/// Value the viewport's `touch-action` is set to so vertical scrolling
/// stays native while horizontal swipes reach the pointer listeners.
pub const VIEWPORT_TOUCH_ACTION: &str = "pan-y";

/// `tabindex` to give the root so it can take keyboard focus. An author's
/// own value is left alone.
pub fn root_tabindex(current: Option<&str>) -> Option<&'static str> {
    match current {
        Some(_) => None,
        None => Some("0"),
    }
}

/// `touch-action` to write on the viewport given its inline value. An
/// inline value set by the page wins.
pub fn viewport_touch_action(inline: &str) -> Option<&'static str> {
    inline.trim().is_empty().then_some(VIEWPORT_TOUCH_ACTION)
}

/// Mount `count` carousels through `mount`. A failure is logged and the
/// remaining carousels are still mounted.
pub fn mount_each<T, E, F>(count: usize, mut mount: F) -> Vec<T>
where
    E: Debug,
    F: FnMut(usize) -> Result<T, E>,
{
    let mut mounted = Vec::with_capacity(count);
    for position in 0..count {
        match mount(position) {
            Ok(handle) => mounted.push(handle),
            Err(err) => {
                tracing::debug!(error = ?err, position, "carousel skipped");
            }
        }
    }
    mounted
}
