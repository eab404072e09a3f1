//! Thin wrappers over `web_sys` for the few browser calls the page makes.

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

/// Fraction of a card that must be on screen before it fades in
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Attach a listener to `window` for the lifetime of the page
pub fn add_window_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Smoothly scroll to the element with `id`, leaving room for the fixed header
pub fn smooth_scroll_to_id(id: &str, header_offset: f64) {
    let Some(window) = web_sys::window() else { return };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("nav: no element #{}", id);
        return;
    };

    let top = contracts::shared::motion::nav_scroll_target(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        header_offset,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            log::error!("Failed to open {}", url);
        }
    }
}

/// Blocking notice
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Call `on_visible` once, the first time `element` scrolls into view
pub fn reveal_when_visible<F>(element: &Element, on_visible: F)
where
    F: Fn() + 'static,
{
    let on_visible = Rc::new(on_visible);
    let notify = Rc::clone(&on_visible);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    notify();
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => {
            log::error!("IntersectionObserver unavailable: {:?}", err);
            on_visible();
        }
    }
}
