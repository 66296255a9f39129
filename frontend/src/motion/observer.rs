use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::ObserverError;
use crate::motion::view_state::{observed_ratio, SectionViewState, Threshold, ViewAction};

/// Shared "owner still mounted" flag. Callbacks wrapped with `guard` become
/// no-ops once `end` has been called.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    pub fn guard<A, F>(&self, mut f: F) -> impl FnMut(A)
    where
        F: FnMut(A),
    {
        let live = self.clone();
        move |arg| {
            if live.is_alive() {
                f(arg)
            }
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// One `IntersectionObserver` watching one element. Disconnects itself after
/// the latch closes, and on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    live: Liveness,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_ratio` receives every reported ratio while the owner is alive and
    /// returns true once the owner no longer needs updates.
    pub fn observe<F>(target: &Element, threshold: Threshold, mut on_ratio: F) -> Result<Self, ObserverError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(ObserverError::NoWindow)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(ObserverError::Unsupported);
        }

        let live = Liveness::new();
        let mut deliver = live.guard(move |(ratio, observer): (f64, IntersectionObserver)| {
            if on_ratio(ratio) {
                observer.disconnect();
            }
        });
        let live_cb = live.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if !live_cb.is_alive() {
                    break;
                }
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let rect = entry.bounding_client_rect();
                let ratio = observed_ratio(entry.intersection_ratio(), rect.width() * rect.height());
                deliver((ratio, observer.clone()));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.fraction()));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserverError::Construct(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            live,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.live.end();
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` has entered the viewport. Latches on the
/// first crossing of `threshold` and detaches the observer at that point.
/// Falls back to `true` if the page cannot observe intersections.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: Threshold) -> bool {
    let state = use_reducer_eq(move || SectionViewState::new(threshold));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = match node.cast::<Element>() {
                    Some(element) => {
                        let dispatcher = dispatcher.clone();
                        ViewportObserver::observe(&element, threshold, move |ratio| {
                            dispatcher.dispatch(ViewAction::Intersect(ratio));
                            let crossed = threshold.is_crossed_by(ratio);
                            if crossed {
                                debug!("section entered at ratio {:.2}", ratio);
                            }
                            crossed
                        })
                    }
                    None => Err(ObserverError::Construct("section root is not mounted".to_string())),
                };
                let observer = match observed {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("showing section without scroll trigger: {}", err);
                        dispatcher.dispatch(ViewAction::ForceVisible);
                        None
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    state.has_entered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn guarded_callback_stops_after_end() {
        let live = Liveness::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut cb = live.guard(move |n: u32| counter.set(counter.get() + n));

        cb(1);
        cb(2);
        live.end();
        cb(10);
        cb(20);

        assert_eq!(calls.get(), 3);
        assert!(!live.is_alive());
    }

    #[test]
    fn teardown_before_first_event_leaves_state_untouched() {
        // a section's reducer, fed through the same guard the observer uses
        let state = Rc::new(RefCell::new(SectionViewState::new(Threshold::clamped(0.2))));
        let mutations = Rc::new(Cell::new(0));
        let live = Liveness::new();
        let mut deliver = {
            let state = state.clone();
            let mutations = mutations.clone();
            live.guard(move |ratio: f64| {
                let next = state.borrow().transition(ViewAction::Intersect(ratio));
                if next != *state.borrow() {
                    mutations.set(mutations.get() + 1);
                }
                *state.borrow_mut() = next;
            })
        };

        live.end();
        for ratio in [0.0, 0.25, 0.5, 1.0] {
            deliver(ratio);
        }

        assert_eq!(mutations.get(), 0);
        assert!(!state.borrow().has_entered());
    }

    #[test]
    fn clones_share_one_flag() {
        let live = Liveness::default();
        let other = live.clone();
        other.end();
        assert!(!live.is_alive());
    }
}
