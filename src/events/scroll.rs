use crate::dom;
use anyhow::anyhow;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_core::constants::NAV_ID;
use portfolio_core::{ScrollState, ScrollTracker, NAV_SCROLLED_CLASS, NAV_TRANSPARENT_CLASS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the navigation bar background in sync with the scroll offset.
pub struct NavScroll {
    view: Rc<ScrollView>,
    _listener: EventListener,
}

struct ScrollView {
    nav: web::Element,
    tracker: RefCell<ScrollTracker>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl NavScroll {
    pub fn mount(root: &web::Element) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let view = Rc::new(ScrollView {
            nav: dom::find_by_id(root, NAV_ID)?,
            tracker: RefCell::new(ScrollTracker::new()),
            frame: RefCell::new(None),
        });
        // a reload can restore the page mid-scroll
        view.publish();

        let listener = {
            let view = view.clone();
            EventListener::new(&window, "scroll", move |_| view.queue_publish())
        };
        Ok(Self {
            view,
            _listener: listener,
        })
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.view.tracker.borrow().state()
    }
}

impl Drop for NavScroll {
    fn drop(&mut self) {
        self.view.frame.borrow_mut().take();
    }
}

impl ScrollView {
    /// At most one publish per frame; the frame reads the offset current then.
    fn queue_publish(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.publish();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn publish(&self) {
        let update = self.tracker.borrow_mut().on_scroll(dom::scroll_offset());
        let classes = self.nav.class_list();
        let (stale, current) = if update.state.is_scrolled {
            (NAV_TRANSPARENT_CLASS, NAV_SCROLLED_CLASS)
        } else {
            (NAV_SCROLLED_CLASS, NAV_TRANSPARENT_CLASS)
        };
        _ = classes.remove_1(stale);
        _ = classes.add_1(current);
        if update.changed {
            log::info!("[scroll] scrolled={}", update.state.is_scrolled);
        }
    }
}
