use leptos::ev;
use leptos::prelude::*;

use super::context::NavigationContext;

/// Current `window.innerWidth` in CSS pixels.
pub fn inner_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Applies the current viewport width and keeps applying it on every
/// `resize` event until the calling component is cleaned up.
///
/// Must be called once, from the component that owns the layout.
pub fn watch_viewport(nav: NavigationContext) {
    if let Some(width) = inner_width() {
        nav.on_resize(width);
    }

    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = inner_width() {
            nav.on_resize(width);
        }
    });
    on_cleanup(move || {
        log::debug!("removing viewport resize listener");
        handle.remove();
    });
}
