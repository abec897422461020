//! Leptos Infinite Scroll Utilities
//!
//! Turns a sentinel element into a reactive "is it on screen" signal using
//! `IntersectionObserver`. The signal is passive: it never loads anything by
//! itself, callers decide what visibility means.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the sentinel that must be on screen to count as visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its JS callback alive; disconnects on drop
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Track the visibility of the element bound to `sentinel`.
///
/// The observer is (re)attached whenever the node ref resolves to a new
/// element and detached when the owning component is cleaned up.
pub fn use_sentinel_visibility(sentinel: NodeRef<Div>, threshold: f64) -> ReadSignal<bool> {
    let visible = RwSignal::new(false);

    Effect::new(move |prev: Option<Option<ObserverGuard>>| {
        // Disconnect the previous observer before binding a new element
        drop(prev);
        let Some(el) = sentinel.get() else {
            if visible.get_untracked() {
                visible.set(false);
            }
            return None;
        };
        match observe(&el, threshold, visible) {
            Ok(guard) => Some(guard),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    });

    visible.read_only()
}

fn observe(
    el: &web_sys::Element,
    threshold: f64,
    visible: RwSignal<bool>,
) -> Result<ObserverGuard, JsValue> {
    let callback = ObserverCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        // Only the most recent entry reflects the current state
        let latest = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .last();
        if let Some(entry) = latest {
            let is_visible = entry.is_intersecting();
            if visible.get_untracked() != is_visible {
                visible.set(is_visible);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}
