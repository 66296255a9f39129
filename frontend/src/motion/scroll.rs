use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::prelude::*;

use crate::error::ObserverError;
use crate::motion::store::{Store, Subscription};

/// "Has the page scrolled past N pixels", reporting only flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold_px: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    /// Returns the new value when the offset moved the flag across the
    /// threshold, `None` otherwise.
    pub fn update(&mut self, offset_px: f64) -> Option<bool> {
        let scrolled = offset_px > self.threshold_px;
        if scrolled == self.scrolled {
            None
        } else {
            self.scrolled = scrolled;
            Some(scrolled)
        }
    }
}

/// Window scroll listener feeding a `Store<bool>`. Reads are coalesced to
/// one per animation frame. Dropping the watcher removes the listener and
/// cancels any pending frame.
pub struct ScrollWatcher {
    window: Window,
    store: Store<bool>,
    on_scroll: Closure<dyn FnMut()>,
    // kept alive while a frame may still be scheduled
    _on_frame: Closure<dyn FnMut()>,
    pending_frame: Rc<Cell<Option<i32>>>,
}

impl ScrollWatcher {
    pub fn attach(threshold_px: f64) -> Result<Self, ObserverError> {
        let window = web_sys::window().ok_or(ObserverError::NoWindow)?;
        let flag = Rc::new(RefCell::new(ScrollFlag::new(threshold_px)));
        let store = Store::new(false);
        let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let on_frame = {
            let window = window.clone();
            let flag = flag.clone();
            let store = store.clone();
            let pending_frame = pending_frame.clone();
            Closure::wrap(Box::new(move || {
                pending_frame.set(None);
                let offset = window.scroll_y().unwrap_or(0.0);
                if let Some(scrolled) = flag.borrow_mut().update(offset) {
                    debug!("nav scrolled state -> {}", scrolled);
                    store.set(scrolled);
                }
            }) as Box<dyn FnMut()>)
        };
        let frame_fn: Function = on_frame.as_ref().unchecked_ref::<Function>().clone();

        let on_scroll = {
            let window = window.clone();
            let pending_frame = pending_frame.clone();
            Closure::wrap(Box::new(move || {
                if pending_frame.get().is_some() {
                    return;
                }
                match window.request_animation_frame(&frame_fn) {
                    Ok(id) => pending_frame.set(Some(id)),
                    Err(_) => {
                        // no frame scheduling, read synchronously instead
                        let _ = frame_fn.call0(&wasm_bindgen::JsValue::NULL);
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(|e| ObserverError::Construct(format!("{:?}", e)))?;

        // pages restored mid-scroll start in the right state
        if let Some(scrolled) = flag.borrow_mut().update(window.scroll_y().unwrap_or(0.0)) {
            store.set(scrolled);
        }

        Ok(Self {
            window,
            store,
            on_scroll,
            _on_frame: on_frame,
            pending_frame,
        })
    }

    pub fn store(&self) -> &Store<bool> {
        &self.store
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(id) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Smooth-scrolls the element with the given id into view. Missing targets
/// are logged and ignored.
pub fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        warn!("no element with id '{}' to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// True once the window has scrolled past `threshold_px`; false again when
/// scrolled back above it.
#[hook]
pub fn use_scrolled(threshold_px: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold_bits| {
                let mut held: Option<(ScrollWatcher, Subscription)> = None;
                match ScrollWatcher::attach(f64::from_bits(*threshold_bits)) {
                    Ok(watcher) => {
                        scrolled.set(watcher.store().get());
                        let setter = scrolled.setter();
                        let subscription = watcher.store().subscribe(move |value| setter.set(*value));
                        held = Some((watcher, subscription));
                    }
                    Err(err) => warn!("scroll tracking disabled: {}", err),
                }
                move || {
                    // subscription first, then the listener itself
                    if let Some((watcher, subscription)) = held.take() {
                        subscription.cancel();
                        drop(watcher);
                    }
                }
            },
            threshold_px.to_bits(),
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_flips() {
        let mut flag = ScrollFlag::new(50.0);
        let reports: Vec<Option<bool>> = [0.0, 20.0, 50.0, 51.0, 400.0, 49.0, 10.0, 60.0]
            .iter()
            .map(|offset| flag.update(*offset))
            .collect();
        assert_eq!(
            reports,
            vec![None, None, None, Some(true), None, Some(false), None, Some(true)]
        );
    }
}
