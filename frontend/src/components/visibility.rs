use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::effects::reveal::OnceVisible;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection ratio of an entry, 0 when it is not intersecting at all
fn visible_ratio(entry: &IntersectionObserverEntry) -> f64 {
    if entry.is_intersecting() {
        entry.intersection_ratio()
    } else {
        0.0
    }
}

/// Watches how much of an element is on screen. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    /// `on_change` receives the intersection ratio on every threshold crossing.
    pub fn observe(
        target: &Element,
        thresholds: &[f64],
        mut on_change: impl FnMut(f64) + 'static,
    ) -> Option<Self> {
        let callback = EntriesCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(visible_ratio(&entry));
            }
        });
        Self::connect(target, thresholds, callback)
    }

    /// Calls `on_visible` the first time `threshold` of the element is on
    /// screen, then stops watching it.
    pub fn observe_once(
        target: &Element,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let mut latch = OnceVisible::new(threshold);
        let mut on_visible = Some(on_visible);
        let callback = EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.update(visible_ratio(&entry)) {
                    observer.unobserve(&entry.target());
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        });
        Self::connect(target, &[threshold], callback)
    }

    fn connect(target: &Element, thresholds: &[f64], callback: EntriesCallback) -> Option<Self> {
        let thresholds: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        let mut options = IntersectionObserverInit::new();
        options.threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
