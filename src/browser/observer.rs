use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::element::DomElement;
use crate::error::Result;

pub fn intersection_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// An `IntersectionObserver` plus the callback it drives. Disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_entry` receives each reported element and whether it intersects;
    /// returning true stops observing that element.
    pub fn new<F>(threshold: Option<f64>, mut on_entry: F) -> Result<Self>
    where
        F: FnMut(&DomElement, bool) -> bool + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(element) = DomElement::from_element(target.clone()) else {
                    continue;
                };
                if on_entry(&element, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        if let Some(threshold) = threshold {
            options.set_threshold(&JsValue::from_f64(threshold));
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Observer {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &DomElement) {
        self.observer.observe(element.html());
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
