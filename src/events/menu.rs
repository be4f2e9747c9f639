use crate::dom;
use gloo::events::EventListener;
use portfolio_core::constants::{DATA_NAV_LINK, MENU_ICON_ID, MENU_TOGGLE_ID, MOBILE_MENU_ID};
use portfolio_core::{MenuEvent, MenuState};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Mobile menu overlay plus in-page link handling.
pub struct NavMenu {
    view: Rc<MenuView>,
    _listeners: Vec<EventListener>,
}

struct MenuView {
    state: Cell<MenuState>,
    toggle: web::Element,
    icon: web::Element,
    panel: web::Element,
}

impl NavMenu {
    pub fn mount(root: &web::Element) -> anyhow::Result<Self> {
        let view = Rc::new(MenuView {
            state: Cell::new(MenuState::default()),
            toggle: dom::find_by_id(root, MENU_TOGGLE_ID)?,
            icon: dom::find_by_id(root, MENU_ICON_ID)?,
            panel: dom::find_by_id(root, MOBILE_MENU_ID)?,
        });
        view.render();

        let mut listeners = Vec::new();
        {
            let view = view.clone();
            let toggle = view.toggle.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                view.dispatch(MenuEvent::Toggle);
            }));
        }

        // the browser follows the anchor, so the fragment lands in the URL
        for link in dom::query_all(root, &format!("[{}]", DATA_NAV_LINK)) {
            let view = view.clone();
            listeners.push(EventListener::new(&link, "click", move |_| {
                view.dispatch(MenuEvent::Navigate);
            }));
        }

        Ok(Self {
            view,
            _listeners: listeners,
        })
    }

    #[inline]
    pub fn state(&self) -> MenuState {
        self.view.state.get()
    }
}

impl MenuView {
    fn dispatch(&self, event: MenuEvent) {
        let prev = self.state.get();
        let next = prev.apply(event);
        self.state.set(next);
        if next != prev {
            log::info!("[menu] {:?} -> {:?} on {:?}", prev, next, event);
            self.render();
        }
    }

    fn render(&self) {
        let state = self.state.get();
        if state.is_open() {
            _ = self.panel.remove_attribute("hidden");
        } else {
            _ = self.panel.set_attribute("hidden", "");
        }
        _ = self.toggle.set_attribute("aria-expanded", &state.is_open().to_string());
        _ = self.toggle.set_attribute("aria-label", state.toggle_label());
        _ = self.icon.set_attribute("d", state.icon_path());
    }
}
