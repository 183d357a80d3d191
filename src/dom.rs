//! Thin wrappers over the `web-sys` calls the page needs. Everything here
//! degrades to a no-op when the browser API is missing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, HtmlMediaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

/// Milliseconds on the same clock `requestAnimationFrame` stamps frames with.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// `scheme://host[:port]` of the current page, empty outside a browser.
pub fn page_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Locks (or releases) page scrolling by toggling `overflow` on `<html>`.
pub fn set_root_scroll_locked(locked: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let style = root.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

pub fn scroll_into_view_smooth(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Starts playback and drops a rejected play promise on the floor
/// (autoplay policies reject it routinely).
pub fn play_quietly(media: &HtmlMediaElement) {
    if let Ok(promise) = media.play() {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop. The callback keeps being scheduled while
/// it returns `true`; dropping the loop cancels any pending frame.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    _callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // Weak so the closure doesn't keep itself alive after the loop is dropped.
        let this = Rc::downgrade(&callback);
        let scheduled = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            scheduled.set(None);
            if !on_frame(now) {
                return;
            }
            if let Some(cb) = this.upgrade() {
                if let Some(cb) = cb.borrow().as_ref() {
                    scheduled.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback.borrow().as_ref().and_then(request_frame)?;
        pending.set(Some(first));

        Some(Self {
            pending,
            _callback: callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Fires once when the target first intersects the viewport at `threshold`,
/// then stops observing. Disconnects on drop.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportWatch {
    pub fn once(target: &Element, threshold: f64, on_enter: impl FnOnce() + 'static) -> Option<Self> {
        let mut on_enter = Some(on_enter);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    observer.unobserve(&entry.target());
                    if let Some(fire) = on_enter.take() {
                        fire();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
