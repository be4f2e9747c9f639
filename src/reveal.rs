use crate::dom;
use portfolio_core::constants::{
    DATA_REVEAL, DATA_REVEAL_CLASS, DATA_REVEAL_FOLLOW, DATA_REVEAL_STYLE,
};
use portfolio_core::{Reveal, RevealTrigger};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// One-shot entry observer for a single block.
///
/// Each block owns its own `IntersectionObserver`; dropping this value
/// disconnects it.
pub struct RevealObserver {
    state: Rc<Cell<Reveal>>,
    observer: Option<web::IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl RevealObserver {
    /// Start observing `element`. With `animate == false` the block is shown
    /// immediately and nothing is observed.
    pub fn attach(element: web::Element, trigger: RevealTrigger, animate: bool) -> Self {
        let state = Rc::new(Cell::new(Reveal::NotEntered));
        if !animate {
            mark_entered(&element, &state);
            return Self::settled(state);
        }

        let target = element.clone();
        let state_cb = state.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let prev = state_cb.get();
                    let next =
                        prev.observe(entry.intersection_ratio(), entry.is_intersecting(), trigger);
                    if next != prev {
                        mark_entered(&target, &state_cb);
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(trigger.threshold));
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(observer) => {
                observer.observe(&element);
                Self {
                    state,
                    observer: Some(observer),
                    _callback: Some(callback),
                }
            }
            Err(e) => {
                log::warn!("[reveal] observer unavailable ({:?}); showing block", e);
                mark_entered(&element, &state);
                Self::settled(state)
            }
        }
    }

    fn settled(state: Rc<Cell<Reveal>>) -> Self {
        Self {
            state,
            observer: None,
            _callback: None,
        }
    }

    #[inline]
    pub fn has_entered_viewport(&self) -> bool {
        self.state.get().has_entered_viewport()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Attach an observer to every `[data-reveal]` block under `root`.
pub fn attach_all(root: &web::Element) -> Vec<RevealObserver> {
    let animate = dom::supports_intersection_observer() && !dom::prefers_reduced_motion();
    if !animate {
        log::info!("[reveal] animations off; blocks shown immediately");
    }
    dom::query_all(root, &format!("[{}]", DATA_REVEAL))
        .into_iter()
        .map(|el| {
            let trigger = el
                .get_attribute(DATA_REVEAL)
                .and_then(|v| RevealTrigger::parse(&v))
                .unwrap_or(RevealTrigger::SECTION);
            RevealObserver::attach(el, trigger, animate)
        })
        .collect()
}

fn mark_entered(element: &web::Element, state: &Cell<Reveal>) {
    state.set(Reveal::Entered);
    apply_revealed(element);

    let block: &web::Node = element;
    for follower in dom::query_all(element, &format!("[{}]", DATA_REVEAL_FOLLOW)) {
        let owner = follower
            .closest(&format!("[{}]", DATA_REVEAL))
            .ok()
            .flatten();
        if owner.is_some_and(|o| o.is_same_node(Some(block))) {
            apply_revealed(&follower);
        }
    }
}

fn apply_revealed(element: &web::Element) {
    if let Some(style) = element.get_attribute(DATA_REVEAL_STYLE) {
        _ = element.set_attribute("style", &style);
    }
    if let Some(class) = element.get_attribute(DATA_REVEAL_CLASS) {
        _ = element.class_list().add_1(&class);
    }
}
