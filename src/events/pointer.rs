use crate::dom;
use anyhow::anyhow;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_core::constants::{HERO_GLOW_ID, HEX_GRID_ID};
use portfolio_core::{glow_style, hex_color, HexGrid, PointerTracker, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-driven glow and hexagon highlight over the hero.
///
/// Owns its window listeners; dropping it stops all tracking.
pub struct HeroLighting {
    view: Rc<LightingView>,
    _listeners: Vec<EventListener>,
}

struct LightingView {
    document: web::Document,
    grid_root: web::Element,
    glow: web::Element,
    tracker: RefCell<PointerTracker>,
    viewport: Cell<Option<Viewport>>,
    grid: RefCell<Option<HexGrid>>,
    cells: RefCell<Vec<web::HtmlElement>>,
    last_intensity: RefCell<Vec<f32>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl HeroLighting {
    pub fn mount(root: &web::Element) -> anyhow::Result<Self> {
        let document = root
            .owner_document()
            .ok_or_else(|| anyhow!("hero is not attached to a document"))?;
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;

        let view = Rc::new(LightingView {
            document,
            grid_root: dom::find_by_id(root, HEX_GRID_ID)?,
            glow: dom::find_by_id(root, HERO_GLOW_ID)?,
            tracker: RefCell::new(PointerTracker::new()),
            viewport: Cell::new(None),
            grid: RefCell::new(None),
            cells: RefCell::new(Vec::new()),
            last_intensity: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
        });
        view.relayout();

        let on_move = {
            let view = view.clone();
            EventListener::new(&window, "pointermove", move |event: &web::Event| {
                let Some(event) = event.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let published = view.tracker.borrow_mut().on_move(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    dom::viewport(),
                );
                if published.is_some() {
                    view.queue_paint();
                }
            })
        };
        let on_resize = {
            let view = view.clone();
            EventListener::new(&window, "resize", move |_| {
                view.relayout();
                view.queue_paint();
            })
        };

        Ok(Self {
            view,
            _listeners: vec![on_move, on_resize],
        })
    }
}

impl Drop for HeroLighting {
    fn drop(&mut self) {
        // a pending frame holds the view alive; cancel it
        self.view.frame.borrow_mut().take();
    }
}

impl LightingView {
    /// Rebuild the hexagon cells for the current window size.
    fn relayout(&self) {
        let viewport = dom::viewport();
        self.viewport.set(viewport);
        self.grid_root.set_inner_html("");
        self.cells.borrow_mut().clear();
        self.last_intensity.borrow_mut().clear();

        let Some(viewport) = viewport else {
            *self.grid.borrow_mut() = None;
            return;
        };
        let grid = HexGrid::for_viewport(viewport);
        let mut cells = Vec::with_capacity(grid.cells.len());
        for cell in &grid.cells {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            _ = el.set_attribute("style", &grid.cell_style(cell));
            _ = self.grid_root.append_child(&el);
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                cells.push(el);
            }
        }
        log::debug!(
            "[pointer] grid {}x{} for {}x{}",
            grid.columns,
            grid.rows,
            viewport.width,
            viewport.height
        );
        *self.last_intensity.borrow_mut() = vec![-1.0; cells.len()];
        *self.cells.borrow_mut() = cells;
        *self.grid.borrow_mut() = Some(grid);
    }

    fn queue_paint(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.paint();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn paint(&self) {
        // the glow stays hidden until there is both a position and a viewport
        let (Some(state), Some(viewport)) = (self.tracker.borrow().state(), self.viewport.get())
        else {
            return;
        };
        let pointer_px = state.to_pixels(viewport);

        _ = self.glow.remove_attribute("hidden");
        _ = self.glow.set_attribute("style", &glow_style(pointer_px));

        let grid = self.grid.borrow();
        let Some(grid) = grid.as_ref() else {
            return;
        };
        let cells = self.cells.borrow();
        let mut last = self.last_intensity.borrow_mut();
        let painted = cells.iter().zip(last.iter_mut());
        for ((el, prev), intensity) in painted.zip(grid.intensities(pointer_px)) {
            if *prev == intensity {
                continue;
            }
            *prev = intensity;
            _ = el.style().set_property("background-color", &hex_color(intensity));
        }
    }
}
